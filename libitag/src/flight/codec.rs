// libitag/src/flight/codec.rs

//! TLV codec for the flight record payload.
//!
//! Each field goes out as `[typeCode(1), byteLength(1), utf8 bytes...]`;
//! the record ends with a single 0xFF terminator.

use std::collections::HashMap;

use crate::constants::TLV_TERMINATOR;
use crate::flight::data::FlightData;
use crate::flight::field::FieldType;
use crate::{Error, Result};

/// Encode a record to its TLV wire form.
///
/// Required fields first in fixed order, then each optional field that is
/// present and non-empty, then the terminator. Fails when a field value
/// exceeds 255 UTF-8 bytes, since the length slot is a single byte.
pub fn encode(data: &FlightData) -> Result<Vec<u8>> {
    let mut buf = Vec::new();

    push_field(&mut buf, FieldType::PassengerName, &data.passenger_name)?;
    push_field(&mut buf, FieldType::Pnr, &data.pnr)?;
    push_field(&mut buf, FieldType::Barcode, &data.barcode)?;
    push_field(&mut buf, FieldType::JourneyStatus, &data.journey_status)?;
    push_field(&mut buf, FieldType::Destination, &data.destination)?;
    push_field(&mut buf, FieldType::FlightDate, &data.flight_date)?;
    push_field(&mut buf, FieldType::FlightNumber, &data.flight_number)?;

    push_optional(&mut buf, FieldType::Destination2, &data.destination2)?;
    push_optional(&mut buf, FieldType::FlightDate2, &data.flight_date2)?;
    push_optional(&mut buf, FieldType::FlightNumber2, &data.flight_number2)?;
    push_optional(&mut buf, FieldType::Destination3, &data.destination3)?;
    push_optional(&mut buf, FieldType::FlightDate3, &data.flight_date3)?;
    push_optional(&mut buf, FieldType::FlightNumber3, &data.flight_number3)?;
    push_optional(&mut buf, FieldType::EuIndicator, &data.eu_indicator)?;
    push_optional(&mut buf, FieldType::TagOrigin, &data.tag_origin)?;
    push_optional(
        &mut buf,
        FieldType::SecuritySequenceNumber,
        &data.security_sequence_number,
    )?;

    buf.push(TLV_TERMINATOR);
    Ok(buf)
}

fn push_field(buf: &mut Vec<u8>, ty: FieldType, value: &str) -> Result<()> {
    let bytes = value.as_bytes();
    if bytes.len() > u8::MAX as usize {
        return Err(Error::FieldTooLong {
            field: ty.name(),
            len: bytes.len(),
        });
    }
    buf.push(ty.code());
    buf.push(bytes.len() as u8);
    buf.extend_from_slice(bytes);
    Ok(())
}

fn push_optional(buf: &mut Vec<u8>, ty: FieldType, value: &Option<String>) -> Result<()> {
    if let Some(v) = value {
        if !v.is_empty() {
            push_field(buf, ty, v)?;
        }
    }
    Ok(())
}

/// Decode a TLV payload back into a record.
///
/// Walks `(type, length, value)` triplets, bounding every read against the
/// remaining slice; the walk stops at the terminator, at an unknown type
/// code, at a declared length that would overrun the buffer, or at a value
/// that is not UTF-8. Repeated codes keep the last value. Returns None when
/// no known field could be decoded at all.
pub fn decode(payload: &[u8]) -> Option<FlightData> {
    let mut fields: HashMap<FieldType, String> = HashMap::new();
    let mut rest = payload;

    while rest.len() >= 2 {
        let code = rest[0];
        if code == TLV_TERMINATOR {
            break;
        }

        let len = rest[1] as usize;
        let end = 2 + len;
        if end > rest.len() {
            break;
        }

        let Some(ty) = FieldType::from_code(code) else {
            break;
        };
        let Ok(value) = std::str::from_utf8(&rest[2..end]) else {
            break;
        };

        fields.insert(ty, value.to_owned());
        rest = &rest[end..];
    }

    if fields.is_empty() {
        return None;
    }
    // reserved code: parsed but never surfaced
    fields.remove(&FieldType::FlightTime);

    let mut required = |ty: FieldType| fields.remove(&ty).unwrap_or_default();
    let passenger_name = required(FieldType::PassengerName);
    let pnr = required(FieldType::Pnr);
    let barcode = required(FieldType::Barcode);
    let journey_status = required(FieldType::JourneyStatus);
    let destination = required(FieldType::Destination);
    let flight_date = required(FieldType::FlightDate);
    let flight_number = required(FieldType::FlightNumber);

    let mut optional = |ty: FieldType| fields.remove(&ty).filter(|v| !v.is_empty());
    Some(FlightData {
        passenger_name,
        pnr,
        barcode,
        journey_status,
        destination,
        flight_date,
        flight_number,
        destination2: optional(FieldType::Destination2),
        flight_date2: optional(FieldType::FlightDate2),
        flight_number2: optional(FieldType::FlightNumber2),
        destination3: optional(FieldType::Destination3),
        flight_date3: optional(FieldType::FlightDate3),
        flight_number3: optional(FieldType::FlightNumber3),
        eu_indicator: optional(FieldType::EuIndicator),
        tag_origin: optional(FieldType::TagOrigin),
        security_sequence_number: optional(FieldType::SecuritySequenceNumber),
    })
}
