//! Validated, immutable boarding pass records.
//!
//! Callers hand over four borrowed text fields (passenger name, airport code,
//! flight number, gate number) and receive either a fully owned
//! [`BoardingPassRecord`] with named fields or a [`BuildError`] describing the
//! first rule the input broke.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Trimming and presence checks for every field
//! - IATA-style airport code and flight number format rules
//! - Serde support that re-validates records on deserialization
//!
//! Building is pure apart from `tracing` events; the crate never installs a
//! subscriber.
//!
//! # Example
//!
//! ```
//! use boarding_pass::{BoardingPassInput, BuildError, Field, build};
//!
//! let record = build(BoardingPassInput::new("Slippery Seal", "ADL", "AA001", "Gate 1"))
//!     .expect("valid boarding pass");
//! assert_eq!(record.airport_code(), "ADL");
//!
//! let missing = build(BoardingPassInput::new("Slippery Seal", "ADL", "AA001", "  "));
//! assert_eq!(missing, Err(BuildError::MissingField(Field::GateNumber)));
//! ```

mod builder;
mod error;
mod field;
mod record;
mod validation;

pub use builder::build;
pub use error::BuildError;
pub use field::Field;
pub use record::{BoardingPassInput, BoardingPassRecord};
pub use validation::{
    AIRPORT_CODE_LEN, FLIGHT_NUMBER_MAX, FLIGHT_NUMBER_MIN, is_valid_airport_code,
    is_valid_flight_number,
};
