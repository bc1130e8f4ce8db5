//! Boarding pass input and record types.

use serde::{Deserialize, Serialize};

use crate::builder::build;
use crate::error::BuildError;

/// Borrowed, unvalidated boarding pass fields supplied by a caller.
///
/// The views only need to live for the duration of [`build`]; the resulting
/// record owns copies of the trimmed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardingPassInput<'a> {
    /// Name of the travelling passenger.
    pub passenger_name: &'a str,
    /// IATA-style departure airport code.
    pub airport_code: &'a str,
    /// Carrier flight number.
    pub flight_number: &'a str,
    /// Boarding gate.
    pub gate_number: &'a str,
}

impl<'a> BoardingPassInput<'a> {
    /// Collect the four fields in record order.
    #[must_use]
    pub const fn new(
        passenger_name: &'a str,
        airport_code: &'a str,
        flight_number: &'a str,
        gate_number: &'a str,
    ) -> Self {
        Self {
            passenger_name,
            airport_code,
            flight_number,
            gate_number,
        }
    }

    /// Validate the input and build a record from it.
    ///
    /// # Errors
    ///
    /// See [`build`].
    pub fn build(self) -> Result<BoardingPassRecord, BuildError> {
        build(self)
    }
}

/// A validated boarding pass.
///
/// ## Invariants
/// - Every field is non-empty and free of surrounding whitespace.
/// - `airport_code` is exactly three ASCII letters.
/// - `flight_number` is 2 to 8 ASCII letters or digits.
///
/// Records are only produced by [`build`] (directly, via `TryFrom`, or by
/// deserializing), so the invariants hold for every value of this type.
///
/// # Example
///
/// ```
/// use boarding_pass::BoardingPassInput;
///
/// let record = BoardingPassInput::new("Slippery Seal", "ADL", "AA001", "Gate 1")
///     .build()
///     .expect("valid boarding pass");
///
/// assert_eq!(record.passenger_name(), "Slippery Seal");
/// assert_eq!(record.gate_number(), "Gate 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "BoardingPassDto", into = "BoardingPassDto")]
pub struct BoardingPassRecord {
    passenger_name: String,
    airport_code: String,
    flight_number: String,
    gate_number: String,
}

impl BoardingPassRecord {
    /// Assemble a record from fields the builder has already validated.
    pub(crate) const fn from_validated(
        passenger_name: String,
        airport_code: String,
        flight_number: String,
        gate_number: String,
    ) -> Self {
        Self {
            passenger_name,
            airport_code,
            flight_number,
            gate_number,
        }
    }

    /// Name of the travelling passenger.
    #[must_use]
    pub fn passenger_name(&self) -> &str {
        &self.passenger_name
    }

    /// IATA-style departure airport code.
    #[must_use]
    pub fn airport_code(&self) -> &str {
        &self.airport_code
    }

    /// Carrier flight number.
    #[must_use]
    pub fn flight_number(&self) -> &str {
        &self.flight_number
    }

    /// Boarding gate.
    #[must_use]
    pub fn gate_number(&self) -> &str {
        &self.gate_number
    }

    /// Borrow the record's fields as an input, e.g. to rebuild or compare.
    #[must_use]
    pub fn as_input(&self) -> BoardingPassInput<'_> {
        BoardingPassInput::new(
            &self.passenger_name,
            &self.airport_code,
            &self.flight_number,
            &self.gate_number,
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(deny_unknown_fields)]
struct BoardingPassDto {
    passenger_name: String,
    airport_code: String,
    flight_number: String,
    gate_number: String,
}

impl From<BoardingPassRecord> for BoardingPassDto {
    fn from(value: BoardingPassRecord) -> Self {
        let BoardingPassRecord {
            passenger_name,
            airport_code,
            flight_number,
            gate_number,
        } = value;
        Self {
            passenger_name,
            airport_code,
            flight_number,
            gate_number,
        }
    }
}

impl TryFrom<BoardingPassDto> for BoardingPassRecord {
    type Error = BuildError;

    fn try_from(value: BoardingPassDto) -> Result<Self, Self::Error> {
        build(BoardingPassInput::new(
            &value.passenger_name,
            &value.airport_code,
            &value.flight_number,
            &value.gate_number,
        ))
    }
}
