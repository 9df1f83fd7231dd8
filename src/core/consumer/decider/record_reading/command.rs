// Command data type for recording a meter reading.
//
// Purpose
// - Express operator intent to bill a roster row for its present reading.
//
// Responsibilities
// - Carry input data for the decider to validate and convert into a roster update and a payment.
// - Be independent of the entry point (CLI today).

use crate::core::consumer::key::ConsumerKey;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordReading {
    pub key: ConsumerKey,
    pub present_reading: String,
    pub processed_by: String,
    pub payment_id: String,
    pub recorded_at: DateTime<Utc>,
}

impl RecordReading {
    /// Stamp a new command with a time-ordered id and the current time.
    pub fn new(
        key: ConsumerKey,
        present_reading: impl Into<String>,
        processed_by: impl Into<String>,
    ) -> Self {
        Self {
            key,
            present_reading: present_reading.into(),
            processed_by: processed_by.into(),
            payment_id: Uuid::now_v7().to_string(),
            recorded_at: Utc::now(),
        }
    }
}
