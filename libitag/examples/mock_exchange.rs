// Full provision-write-read exchange against a mock transport.

// This example walks the whole session lifecycle without hardware: the mock
// transport plays the tag's side, including one deferred response so the
// GetPreviousResponse continuation is exercised too.

use libitag::flight;
use libitag::prelude::*;
use libitag::test_support;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let tag_id = [
        0xDE, 0xAD, 0xBE, 0xEF, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0A,
        0x0B,
    ];
    let nonce = [0x10, 0x20, 0x30, 0x40, 0x50, 0x60, 0x70, 0x80];

    let record = FlightData::new(
        "Jane Doe", "DYH2IB", "0123456789", "ELITE P1", "LAX", "05Dec", "NZ538",
    );
    let tlv = flight::encode(&record)?;

    let mut transport = MockTransport::new();
    // GetTagId
    transport.push_response(test_support::tag_data_response(tag_id, nonce));
    // UpdateLayout
    transport.push_response(test_support::error_response([0x00, 0x20]));
    // UpdateData
    transport.push_response(test_support::error_response([0x00, 0x20]));
    // GetFlightData is deferred once, then answered
    transport.push_response(test_support::error_response([0x0A, 0x40]));
    transport.push_response(test_support::flight_data_response(&tlv));

    let mut session = TagSession::new(transport);

    let ctx = session.connect()?;
    println!("Connected, tag id = {}", ctx.tag_id.to_hex());

    session.update_layout(LayoutType::OneSector)?;
    println!("Layout provisioned");

    session.update_data(&record)?;
    println!("Record written ({} TLV bytes)", tlv.len());

    match session.get_flight_data()? {
        Some(read) => {
            println!("Read back:");
            println!("  passenger = {}", read.passenger_name);
            println!("  pnr       = {}", read.pnr);
            println!(
                "  flight    = {} to {} on {}",
                read.flight_number, read.destination, read.flight_date
            );
            assert_eq!(read, record);
        }
        None => println!("Tag carried no record"),
    }

    println!(
        "\n{} commands crossed the transport",
        session.transport().sent.len()
    );
    Ok(())
}
