//! Error types for the boarding-pass crate.
//!
//! Every variant is an input-validation failure detected synchronously by the
//! builder. None are worth retrying; the caller decides whether to abort or
//! ask for corrected input.

use thiserror::Error;

use crate::field::Field;

/// Errors that can occur when building a boarding pass record.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A required field was empty or whitespace-only.
    #[error("missing required field: {0}")]
    MissingField(Field),

    /// The airport code was not exactly three alphabetic characters.
    #[error("invalid airport code '{0}': expected 3 alphabetic characters")]
    InvalidAirportCode(String),

    /// The flight number was not 2 to 8 alphanumeric characters.
    #[error("invalid flight number '{0}': expected 2 to 8 alphanumeric characters")]
    InvalidFlightNumber(String),
}

impl BuildError {
    /// The field this error refers to.
    ///
    /// # Example
    ///
    /// ```
    /// use boarding_pass::{BuildError, Field};
    ///
    /// let err = BuildError::InvalidAirportCode("Adelaide".to_owned());
    /// assert_eq!(err.field(), Field::AirportCode);
    /// ```
    #[must_use]
    pub const fn field(&self) -> Field {
        match self {
            Self::MissingField(field) => *field,
            Self::InvalidAirportCode(_) => Field::AirportCode,
            Self::InvalidFlightNumber(_) => Field::FlightNumber,
        }
    }
}
