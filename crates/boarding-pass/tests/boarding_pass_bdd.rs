//! Behavioural tests for boarding pass construction.
//!
//! These tests validate the builder against Gherkin scenarios covering
//! successful construction, trimming, determinism, and each error variant.

// `expect` is idiomatic in test code for failing fast on precondition violations.
#![expect(
    clippy::expect_used,
    reason = "test code uses expect for clear failure messages"
)]

use boarding_pass::{BoardingPassInput, BoardingPassRecord, BuildError, Field, build};
use rstest::fixture;
use rstest_bdd::Slot;
use rstest_bdd_macros::{ScenarioState, given, scenario, then, when};

// ============================================================================
// Test fixtures and constants
// ============================================================================

const PASSENGER_NAME: &str = "Slippery Seal";
const AIRPORT_CODE: &str = "ADL";
const FLIGHT_NUMBER: &str = "AA001";
const GATE_NUMBER: &str = "Gate 1";

/// Owned copy of the four input fields so steps can edit them.
#[derive(Debug, Clone)]
struct InputFields {
    passenger_name: String,
    airport_code: String,
    flight_number: String,
    gate_number: String,
}

impl InputFields {
    fn valid() -> Self {
        Self {
            passenger_name: PASSENGER_NAME.to_owned(),
            airport_code: AIRPORT_CODE.to_owned(),
            flight_number: FLIGHT_NUMBER.to_owned(),
            gate_number: GATE_NUMBER.to_owned(),
        }
    }

    fn as_input(&self) -> BoardingPassInput<'_> {
        BoardingPassInput::new(
            &self.passenger_name,
            &self.airport_code,
            &self.flight_number,
            &self.gate_number,
        )
    }
}

/// Test world holding the input under construction and build results.
#[derive(Default, ScenarioState)]
struct World {
    fields: Slot<InputFields>,
    build_result: Slot<Result<BoardingPassRecord, BuildError>>,
    second_result: Slot<Result<BoardingPassRecord, BuildError>>,
}

impl World {
    /// Extracts the current input fields from the world state.
    fn fields(&self) -> InputFields {
        self.fields.get().expect("input fields should be set")
    }

    /// Applies `edit` to the stored input fields.
    fn edit_fields(&self, edit: impl FnOnce(&mut InputFields)) {
        let mut fields = self.fields();
        edit(&mut fields);
        self.fields.set(fields);
    }

    /// Extracts the build result (Ok or Err) from the world state.
    fn build_result(&self) -> Result<BoardingPassRecord, BuildError> {
        self.build_result
            .get()
            .expect("build result should be set")
    }

    /// Extracts the successfully built record from the world state.
    fn record(&self) -> BoardingPassRecord {
        self.build_result().expect("record should be valid")
    }
}

#[fixture]
fn world() -> World {
    World::default()
}

// ============================================================================
// Given steps
// ============================================================================

#[given("a valid boarding pass input")]
fn a_valid_boarding_pass_input(world: &World) {
    world.fields.set(InputFields::valid());
}

#[given("every field is padded with whitespace")]
fn every_field_is_padded_with_whitespace(world: &World) {
    world.edit_fields(|fields| {
        for value in [
            &mut fields.passenger_name,
            &mut fields.airport_code,
            &mut fields.flight_number,
            &mut fields.gate_number,
        ] {
            *value = format!("  {value}\t");
        }
    });
}

#[given("the gate number is blank")]
fn the_gate_number_is_blank(world: &World) {
    world.edit_fields(|fields| fields.gate_number = "   ".to_owned());
}

#[given("the airport code is {code}")]
fn the_airport_code_is(world: &World, code: String) {
    world.edit_fields(|fields| fields.airport_code = code);
}

#[given("the flight number is {number}")]
fn the_flight_number_is(world: &World, number: String) {
    world.edit_fields(|fields| fields.flight_number = number);
}

// ============================================================================
// When steps
// ============================================================================

#[when("the boarding pass is built")]
fn the_boarding_pass_is_built(world: &World) {
    let fields = world.fields();
    world.build_result.set(build(fields.as_input()));
}

#[when("the boarding pass is built twice")]
fn the_boarding_pass_is_built_twice(world: &World) {
    let fields = world.fields();
    world.build_result.set(build(fields.as_input()));
    world.second_result.set(build(fields.as_input()));
}

// ============================================================================
// Then steps
// ============================================================================

#[then("building succeeds")]
fn building_succeeds(world: &World) {
    let result = world.build_result();
    assert!(result.is_ok(), "Expected building to succeed: {result:?}");
}

#[then("the record matches the trimmed input")]
fn the_record_matches_the_trimmed_input(world: &World) {
    let record = world.record();
    assert_eq!(record.passenger_name(), PASSENGER_NAME);
    assert_eq!(record.airport_code(), AIRPORT_CODE);
    assert_eq!(record.flight_number(), FLIGHT_NUMBER);
    assert_eq!(record.gate_number(), GATE_NUMBER);
}

#[then("both records are equal")]
fn both_records_are_equal(world: &World) {
    let first = world.record();
    let second = world
        .second_result
        .get()
        .expect("second result should be set")
        .expect("second record should be valid");

    assert_eq!(first, second, "Builds should be deterministic");
}

#[then("building fails with missing field {name}")]
fn building_fails_with_missing_field(world: &World, name: String) {
    match world.build_result() {
        Err(BuildError::MissingField(field)) => {
            assert_eq!(field.as_str(), name);
            assert!(Field::ALL.contains(&field));
        }
        other => panic!("Expected MissingField, got: {other:?}"),
    }
}

#[then("building fails with invalid airport code {value}")]
fn building_fails_with_invalid_airport_code(world: &World, value: String) {
    assert_eq!(
        world.build_result(),
        Err(BuildError::InvalidAirportCode(value))
    );
}

#[then("building fails with invalid flight number {value}")]
fn building_fails_with_invalid_flight_number(world: &World, value: String) {
    assert_eq!(
        world.build_result(),
        Err(BuildError::InvalidFlightNumber(value))
    );
}

// ============================================================================
// Scenario bindings
// ============================================================================

#[scenario(
    path = "tests/features/boarding_pass.feature",
    name = "Valid input builds a record"
)]
fn valid_input_builds_a_record(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/boarding_pass.feature",
    name = "Padded input is stored trimmed"
)]
fn padded_input_is_stored_trimmed(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/boarding_pass.feature",
    name = "Building twice yields equal records"
)]
fn building_twice_yields_equal_records(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/boarding_pass.feature",
    name = "Blank gate number is reported missing"
)]
fn blank_gate_number_is_reported_missing(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/boarding_pass.feature",
    name = "Airport name instead of code is rejected"
)]
fn airport_name_instead_of_code_is_rejected(world: World) {
    let _ = world;
}

#[scenario(
    path = "tests/features/boarding_pass.feature",
    name = "Overlong flight number is rejected"
)]
fn overlong_flight_number_is_rejected(world: World) {
    let _ = world;
}
