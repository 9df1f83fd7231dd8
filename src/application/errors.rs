use crate::core::billing::tariff::ChargeError;
use crate::core::consumer::decider::record_reading::decide::DecideError;
use crate::core::consumer::search::SearchError;
use crate::core::export::ExportError;
use crate::core::ports::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    InvalidReading(#[from] ChargeError),

    #[error("not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Persistence(#[from] StoreError),

    #[error("version mismatch: expected {expected}, actual {actual}")]
    VersionConflict { expected: i64, actual: i64 },

    #[error(transparent)]
    Export(#[from] ExportError),
}

impl From<DecideError> for ApplicationError {
    fn from(error: DecideError) -> Self {
        match error {
            DecideError::InvalidReading(e @ ChargeError::OutOfRange { .. }) => {
                ApplicationError::Validation(e.to_string())
            }
            DecideError::InvalidReading(e) => ApplicationError::InvalidReading(e),
            e @ (DecideError::ConsumerNotSelected
            | DecideError::UnknownServiceClass(_)
            | DecideError::MalformedReading(_)) => ApplicationError::Validation(e.to_string()),
        }
    }
}

impl From<SearchError> for ApplicationError {
    fn from(error: SearchError) -> Self {
        match error {
            SearchError::MissingCriteria => ApplicationError::Validation(error.to_string()),
            SearchError::NoMatch { .. } => ApplicationError::NotFound(error.to_string()),
        }
    }
}
