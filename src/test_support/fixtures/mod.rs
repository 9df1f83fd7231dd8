// Shared test fixtures. Compiled only for unit tests.
//
// Builders start from the JSON documents under `json/` and expose setters for the fields tests
// vary.

pub mod commands {
    pub mod record_reading;
}
pub mod records;
