// libitag/src/flight/field.rs

/// TLV field type codes for the flight record.
///
/// The codes are fixed by the device firmware. `FlightTime` (4) is reserved:
/// never emitted on encode and dropped on decode.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Destination = 1,
    FlightNumber = 2,
    FlightDate = 3,
    FlightTime = 4,
    PassengerName = 5,
    Pnr = 6,
    Barcode = 7,
    EuIndicator = 8,
    JourneyStatus = 9,
    TagOrigin = 10,
    SecuritySequenceNumber = 11,
    Destination2 = 12,
    FlightNumber2 = 13,
    FlightDate2 = 14,
    Destination3 = 15,
    FlightNumber3 = 16,
    FlightDate3 = 17,
}

impl FieldType {
    /// Resolve a wire type code. Returns None for anything outside 1..=17.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Destination),
            2 => Some(Self::FlightNumber),
            3 => Some(Self::FlightDate),
            4 => Some(Self::FlightTime),
            5 => Some(Self::PassengerName),
            6 => Some(Self::Pnr),
            7 => Some(Self::Barcode),
            8 => Some(Self::EuIndicator),
            9 => Some(Self::JourneyStatus),
            10 => Some(Self::TagOrigin),
            11 => Some(Self::SecuritySequenceNumber),
            12 => Some(Self::Destination2),
            13 => Some(Self::FlightNumber2),
            14 => Some(Self::FlightDate2),
            15 => Some(Self::Destination3),
            16 => Some(Self::FlightNumber3),
            17 => Some(Self::FlightDate3),
            _ => None,
        }
    }

    /// The wire type code.
    pub fn code(&self) -> u8 {
        *self as u8
    }

    /// Field name for diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Destination => "destination",
            Self::FlightNumber => "flightNumber",
            Self::FlightDate => "flightDate",
            Self::FlightTime => "flightTime",
            Self::PassengerName => "passengerName",
            Self::Pnr => "pnr",
            Self::Barcode => "barcode",
            Self::EuIndicator => "euIndicator",
            Self::JourneyStatus => "journeyStatus",
            Self::TagOrigin => "tagOrigin",
            Self::SecuritySequenceNumber => "securitySequenceNumber",
            Self::Destination2 => "destination2",
            Self::FlightNumber2 => "flightNumber2",
            Self::FlightDate2 => "flightDate2",
            Self::Destination3 => "destination3",
            Self::FlightNumber3 => "flightNumber3",
            Self::FlightDate3 => "flightDate3",
        }
    }
}
