//! Names of the boarding pass fields.

use std::fmt;

/// One of the four named fields of a boarding pass.
///
/// The [`Display`](fmt::Display) form is the camelCase name also used as the
/// serialized key, so error messages and JSON agree on naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Name of the travelling passenger.
    PassengerName,
    /// IATA-style departure airport code.
    AirportCode,
    /// Carrier flight number.
    FlightNumber,
    /// Boarding gate.
    GateNumber,
}

impl Field {
    /// All fields in record order.
    pub const ALL: [Self; 4] = [
        Self::PassengerName,
        Self::AirportCode,
        Self::FlightNumber,
        Self::GateNumber,
    ];

    /// Stable camelCase name of the field.
    ///
    /// # Example
    ///
    /// ```
    /// use boarding_pass::Field;
    ///
    /// assert_eq!(Field::GateNumber.as_str(), "gateNumber");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::PassengerName => "passengerName",
            Self::AirportCode => "airportCode",
            Self::FlightNumber => "flightNumber",
            Self::GateNumber => "gateNumber",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
