//! Format rules for the constrained boarding pass fields.
//!
//! The builder applies these predicates after trimming, and they are public
//! so callers can pre-check user input with the same rules.
//!
//! # Validation Rules
//!
//! - Airport code: exactly 3 ASCII letters (IATA-style), case preserved
//! - Flight number: 2 to 8 ASCII letters or digits

/// Required length of an airport code.
pub const AIRPORT_CODE_LEN: usize = 3;

/// Minimum allowed length for a flight number.
pub const FLIGHT_NUMBER_MIN: usize = 2;

/// Maximum allowed length for a flight number.
pub const FLIGHT_NUMBER_MAX: usize = 8;

/// Validates an airport code.
///
/// Returns `true` if the code is exactly [`AIRPORT_CODE_LEN`] characters long
/// and every character is an ASCII letter. Surrounding whitespace is not
/// stripped here.
///
/// # Examples
///
/// ```
/// use boarding_pass::is_valid_airport_code;
///
/// assert!(is_valid_airport_code("ADL"));
/// assert!(is_valid_airport_code("syd"));
/// assert!(!is_valid_airport_code("Adelaide")); // Too long
/// assert!(!is_valid_airport_code("A1L"));      // Digit
/// ```
#[must_use]
pub fn is_valid_airport_code(code: &str) -> bool {
    code.chars().count() == AIRPORT_CODE_LEN && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Validates a flight number.
///
/// Returns `true` if the number has between [`FLIGHT_NUMBER_MIN`] and
/// [`FLIGHT_NUMBER_MAX`] characters and contains only ASCII letters and
/// digits.
///
/// # Examples
///
/// ```
/// use boarding_pass::is_valid_flight_number;
///
/// assert!(is_valid_flight_number("AA001"));
/// assert!(is_valid_flight_number("QF1"));
/// assert!(!is_valid_flight_number("A"));       // Too short
/// assert!(!is_valid_flight_number("AA-001"));  // Hyphen
/// ```
#[must_use]
pub fn is_valid_flight_number(number: &str) -> bool {
    let length = number.chars().count();
    (FLIGHT_NUMBER_MIN..=FLIGHT_NUMBER_MAX).contains(&length)
        && number.chars().all(|c| c.is_ascii_alphanumeric())
}
