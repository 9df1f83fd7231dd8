// Shared test fixture for the RecordReading command.

use crate::core::consumer::decider::record_reading::command::RecordReading;
use crate::core::consumer::key::ConsumerKey;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct RecordReadingDto {
    pub wsin: String,
    pub consumer_name: String,
    pub year: String,
    pub month: String,
    pub present_reading: String,
    pub processed_by: String,
    pub payment_id: String,
    pub recorded_at: DateTime<Utc>,
}

pub struct RecordReadingBuilder {
    inner: RecordReading,
}

impl Default for RecordReadingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl RecordReadingBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/test_support/fixtures/json/record_reading.json").unwrap();
        let dto: RecordReadingDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: RecordReading {
                key: ConsumerKey::new(dto.wsin, dto.consumer_name, dto.year, dto.month),
                present_reading: dto.present_reading,
                processed_by: dto.processed_by,
                payment_id: dto.payment_id,
                recorded_at: dto.recorded_at,
            },
        }
    }

    pub fn key(mut self, v: ConsumerKey) -> Self {
        self.inner.key = v;
        self
    }

    pub fn present_reading(mut self, v: impl Into<String>) -> Self {
        self.inner.present_reading = v.into();
        self
    }

    pub fn processed_by(mut self, v: impl Into<String>) -> Self {
        self.inner.processed_by = v.into();
        self
    }

    pub fn payment_id(mut self, v: impl Into<String>) -> Self {
        self.inner.payment_id = v.into();
        self
    }

    pub fn build(self) -> RecordReading {
        self.inner
    }
}
