// Shared builders for roster rows and payment log entries.

use crate::core::consumer::payment::PaymentRecord;
use crate::core::consumer::record::ConsumerRecord;
use std::fs;

pub struct ConsumerRecordBuilder {
    inner: ConsumerRecord,
}

impl Default for ConsumerRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ConsumerRecordBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/test_support/fixtures/json/consumer_record.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn wsin(mut self, v: impl Into<String>) -> Self {
        self.inner.wsin = v.into();
        self
    }

    pub fn consumer_name(mut self, v: impl Into<String>) -> Self {
        self.inner.consumer_name = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn service_type(mut self, v: impl Into<String>) -> Self {
        self.inner.service_type = v.into();
        self
    }

    pub fn month(mut self, v: impl Into<String>) -> Self {
        self.inner.month = v.into();
        self
    }

    pub fn previous_reading(mut self, v: impl Into<String>) -> Self {
        self.inner.previous_reading = v.into();
        self
    }

    pub fn payment_status(mut self, v: impl Into<String>) -> Self {
        self.inner.payment_status = v.into();
        self
    }

    pub fn official_receipt(mut self, v: impl Into<String>) -> Self {
        self.inner.official_receipt = v.into();
        self
    }

    pub fn processed_by(mut self, v: impl Into<String>) -> Self {
        self.inner.processed_by = v.into();
        self
    }

    pub fn build(self) -> ConsumerRecord {
        self.inner
    }
}

pub struct PaymentRecordBuilder {
    inner: PaymentRecord,
}

impl Default for PaymentRecordBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl PaymentRecordBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/test_support/fixtures/json/payment_record.json").unwrap();
        Self {
            inner: serde_json::from_str(&json_str).unwrap(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn wsin(mut self, v: impl Into<String>) -> Self {
        self.inner.wsin = v.into();
        self
    }

    pub fn consumer_name(mut self, v: impl Into<String>) -> Self {
        self.inner.consumer_name = v.into();
        self
    }

    pub fn location(mut self, v: impl Into<String>) -> Self {
        self.inner.location = v.into();
        self
    }

    pub fn month(mut self, v: impl Into<String>) -> Self {
        self.inner.month = v.into();
        self
    }

    pub fn present_reading(mut self, v: impl Into<String>) -> Self {
        self.inner.present_reading = v.into();
        self
    }

    pub fn payment_status(mut self, v: impl Into<String>) -> Self {
        self.inner.payment_status = v.into();
        self
    }

    pub fn build(self) -> PaymentRecord {
        self.inner
    }
}
