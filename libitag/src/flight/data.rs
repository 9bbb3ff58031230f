// libitag/src/flight/data.rs

use thiserror::Error;

/// Exact destination length in characters (IATA airport code).
pub const DESTINATION_LEN: usize = 3;
/// Exact flight date length in characters, e.g. "05Dec".
pub const FLIGHT_DATE_LEN: usize = 5;
/// Minimum flight number length in characters.
pub const FLIGHT_NUMBER_LEN_MIN: usize = 5;
/// Maximum flight number length in characters.
pub const FLIGHT_NUMBER_LEN_MAX: usize = 6;

/// One variant per violated validation rule.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    #[error("invalid passenger name")]
    InvalidPassengerName,

    #[error("invalid passenger name record")]
    InvalidPnr,

    #[error("invalid barcode")]
    InvalidBarcode,

    #[error("invalid journey status")]
    InvalidJourneyStatus,

    #[error("invalid destination")]
    InvalidDestination,

    #[error("destination length should be {DESTINATION_LEN}")]
    InvalidDestinationLength,

    #[error("invalid flight date")]
    InvalidFlightDate,

    #[error("flight date length should be {FLIGHT_DATE_LEN} (e.g. 05Dec)")]
    InvalidFlightDateLength,

    #[error("invalid flight number")]
    InvalidFlightNumber,

    #[error("flight number length should be {FLIGHT_NUMBER_LEN_MIN} to {FLIGHT_NUMBER_LEN_MAX}")]
    InvalidFlightNumberLength,
}

/// A flight itinerary record as stored on the tag.
///
/// Seven required fields plus optional second/third legs and routing
/// indicators. Immutable value type; build one, validate it, encode it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlightData {
    pub passenger_name: String,
    pub pnr: String,
    pub barcode: String,
    pub journey_status: String,
    pub destination: String,
    pub flight_date: String,
    pub flight_number: String,
    pub destination2: Option<String>,
    pub flight_date2: Option<String>,
    pub flight_number2: Option<String>,
    pub destination3: Option<String>,
    pub flight_date3: Option<String>,
    pub flight_number3: Option<String>,
    pub eu_indicator: Option<String>,
    pub tag_origin: Option<String>,
    pub security_sequence_number: Option<String>,
}

impl FlightData {
    /// Build a record from the seven required fields; optional fields start
    /// unset and can be filled in with struct update syntax.
    pub fn new(
        passenger_name: impl Into<String>,
        pnr: impl Into<String>,
        barcode: impl Into<String>,
        journey_status: impl Into<String>,
        destination: impl Into<String>,
        flight_date: impl Into<String>,
        flight_number: impl Into<String>,
    ) -> Self {
        Self {
            passenger_name: passenger_name.into(),
            pnr: pnr.into(),
            barcode: barcode.into(),
            journey_status: journey_status.into(),
            destination: destination.into(),
            flight_date: flight_date.into(),
            flight_number: flight_number.into(),
            ..Self::default()
        }
    }

    /// Check every field rule, short-circuiting at the first violation.
    ///
    /// Required: passengerName/pnr/barcode/journeyStatus non-empty,
    /// destination exactly 3 chars, flightDate exactly 5 chars, flightNumber
    /// 5 to 6 chars. Optional leg fields are held to the same length rules
    /// as their primary counterpart, but only when present and non-empty.
    pub fn validate(&self) -> Result<(), FieldError> {
        if self.passenger_name.is_empty() {
            return Err(FieldError::InvalidPassengerName);
        }
        if self.pnr.is_empty() {
            return Err(FieldError::InvalidPnr);
        }
        if self.barcode.is_empty() {
            return Err(FieldError::InvalidBarcode);
        }
        if self.journey_status.is_empty() {
            return Err(FieldError::InvalidJourneyStatus);
        }

        if self.destination.is_empty() {
            return Err(FieldError::InvalidDestination);
        }
        check_destination_len(&self.destination)?;

        if self.flight_date.is_empty() {
            return Err(FieldError::InvalidFlightDate);
        }
        check_flight_date_len(&self.flight_date)?;

        if self.flight_number.is_empty() {
            return Err(FieldError::InvalidFlightNumber);
        }
        check_flight_number_len(&self.flight_number)?;

        check_optional(&self.destination2, check_destination_len)?;
        check_optional(&self.flight_date2, check_flight_date_len)?;
        check_optional(&self.flight_number2, check_flight_number_len)?;
        check_optional(&self.destination3, check_destination_len)?;
        check_optional(&self.flight_date3, check_flight_date_len)?;
        check_optional(&self.flight_number3, check_flight_number_len)?;

        Ok(())
    }
}

fn check_destination_len(value: &str) -> Result<(), FieldError> {
    if value.chars().count() != DESTINATION_LEN {
        return Err(FieldError::InvalidDestinationLength);
    }
    Ok(())
}

fn check_flight_date_len(value: &str) -> Result<(), FieldError> {
    if value.chars().count() != FLIGHT_DATE_LEN {
        return Err(FieldError::InvalidFlightDateLength);
    }
    Ok(())
}

fn check_flight_number_len(value: &str) -> Result<(), FieldError> {
    let len = value.chars().count();
    if !(FLIGHT_NUMBER_LEN_MIN..=FLIGHT_NUMBER_LEN_MAX).contains(&len) {
        return Err(FieldError::InvalidFlightNumberLength);
    }
    Ok(())
}

// Absent or empty optional fields are not checked at all.
fn check_optional(
    value: &Option<String>,
    check: fn(&str) -> Result<(), FieldError>,
) -> Result<(), FieldError> {
    match value {
        Some(v) if !v.is_empty() => check(v),
        _ => Ok(()),
    }
}
