#[path = "../common/mod.rs"]
mod common;

use libitag::protocol::Command;
use libitag::types::TagContext;

#[test]
fn get_tag_id_is_exactly_96_zeroed_bytes_plus_markers() {
    let buf = Command::GetTagId.encode(&TagContext::ZERO);

    assert_eq!(buf.len(), 96);
    assert_eq!(buf[0], 0x01); // originType
    assert_eq!(&buf[1..4], &[0, 0, 0]); // apiVersion
    assert_eq!(&buf[4..20], &[0u8; 16]); // zero tagId
    assert_eq!(&buf[20..28], &[0u8; 8]); // zero nonce
    assert_eq!(&buf[28..30], &[0x00, 0x10]); // GetTagId command id
    assert_eq!(&buf[30..32], &[0, 0]); // zero payload length
    assert_eq!(&buf[32..96], &[0u8; 64]); // signature
    assert_eq!(hex::encode(&buf[28..30]), "0010");
}

#[test]
fn every_command_is_96_plus_payload() {
    let ctx = common::fixtures::sample_context();

    for (cmd, payload_len) in [
        (Command::GetTagId, 0usize),
        (Command::GetFlightData, 0),
        (Command::GetPreviousResponse, 0),
        (
            Command::UpdateData {
                payload: vec![0xAB; 17],
            },
            17,
        ),
    ] {
        let buf = cmd.encode(&ctx);
        assert_eq!(buf.len(), 96 + payload_len, "{:?}", cmd);
    }
}

#[test]
fn update_layout_embeds_the_blob() {
    let ctx = common::fixtures::sample_context();
    let blob = libitag::layout::lookup(libitag::layout::LayoutType::TwoSector);

    let buf = Command::UpdateLayout {
        layout: libitag::layout::LayoutType::TwoSector,
    }
    .encode(&ctx);

    assert_eq!(buf.len(), 96 + blob.payload.len());
    assert_eq!(&buf[28..30], &[0x01, 0x10]);
    let n = blob.payload.len();
    assert_eq!(&buf[30..32], &[(n & 0xFF) as u8, ((n >> 8) & 0xFF) as u8]);
    assert_eq!(&buf[32..32 + n], &blob.payload[..]);
}

#[test]
fn context_bytes_land_at_fixed_offsets() {
    let ctx = common::fixtures::sample_context();
    let buf = Command::GetFlightData.encode(&ctx);

    assert_eq!(&buf[4..20], ctx.tag_id.as_bytes());
    assert_eq!(&buf[20..28], ctx.nonce.as_bytes());
}
