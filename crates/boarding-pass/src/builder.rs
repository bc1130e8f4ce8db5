//! Validate-and-construct step for boarding pass records.
//!
//! Building is all-or-nothing: either every field passes validation and a
//! fully owned [`BoardingPassRecord`] is returned, or the first failure is
//! reported and nothing is allocated for the record.
//!
//! Checks run in a fixed order so the reported error is deterministic:
//!
//! 1. Presence of every field, in record order.
//! 2. Airport code format.
//! 3. Flight number format.

use tracing::{debug, trace};

use crate::error::BuildError;
use crate::field::Field;
use crate::record::{BoardingPassInput, BoardingPassRecord};
use crate::validation::{is_valid_airport_code, is_valid_flight_number};

/// Validate `input` and assemble an immutable boarding pass record.
///
/// Surrounding whitespace is trimmed from every field before validation and
/// the trimmed text is what the record stores.
///
/// # Errors
///
/// - [`BuildError::MissingField`] when a field is empty after trimming.
/// - [`BuildError::InvalidAirportCode`] when the airport code is not exactly
///   three ASCII letters.
/// - [`BuildError::InvalidFlightNumber`] when the flight number is not 2 to 8
///   ASCII letters or digits.
///
/// # Example
///
/// ```
/// use boarding_pass::{BoardingPassInput, BuildError, build};
///
/// let input = BoardingPassInput::new("Slippery Seal", "Adelaide", "AA001", "Gate 1");
///
/// assert_eq!(
///     build(input),
///     Err(BuildError::InvalidAirportCode("Adelaide".to_owned()))
/// );
/// ```
pub fn build(input: BoardingPassInput<'_>) -> Result<BoardingPassRecord, BuildError> {
    validate(input)
        .inspect_err(|err| debug!(field = %err.field(), "boarding pass rejected"))
        .map(|trimmed| {
            trace!("boarding pass built");
            BoardingPassRecord::from_validated(
                trimmed.passenger_name.to_owned(),
                trimmed.airport_code.to_owned(),
                trimmed.flight_number.to_owned(),
                trimmed.gate_number.to_owned(),
            )
        })
}

/// Runs every check and returns the trimmed views on success.
fn validate(input: BoardingPassInput<'_>) -> Result<BoardingPassInput<'_>, BuildError> {
    let trimmed = BoardingPassInput::new(
        required(input.passenger_name, Field::PassengerName)?,
        required(input.airport_code, Field::AirportCode)?,
        required(input.flight_number, Field::FlightNumber)?,
        required(input.gate_number, Field::GateNumber)?,
    );

    if !is_valid_airport_code(trimmed.airport_code) {
        return Err(BuildError::InvalidAirportCode(
            trimmed.airport_code.to_owned(),
        ));
    }
    if !is_valid_flight_number(trimmed.flight_number) {
        return Err(BuildError::InvalidFlightNumber(
            trimmed.flight_number.to_owned(),
        ));
    }

    Ok(trimmed)
}

fn required(value: &str, field: Field) -> Result<&str, BuildError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(BuildError::MissingField(field));
    }
    Ok(trimmed)
}

impl TryFrom<BoardingPassInput<'_>> for BoardingPassRecord {
    type Error = BuildError;

    fn try_from(value: BoardingPassInput<'_>) -> Result<Self, Self::Error> {
        build(value)
    }
}
