// Payment log entry.
//
// Purpose
// - Record the business fact that a reading was submitted and billed for a roster row.
//
// Responsibilities
// - Carry the matching key plus the billing snapshot produced by the decider.
// - Never change after it has been appended. Several entries may share a key; they are history.
//
// Timestamps
// - `timestamp` is RFC 3339 in UTC. `id` is a UUID v7, so ids sort by creation time.

use crate::core::consumer::key::{ConsumerIdentity, ConsumerKey};
use serde::{Deserialize, Serialize};

pub const PAID: &str = "Paid";
pub const UNPAID: &str = "Unpaid";
pub const PENDING: &str = "Pending";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PaymentRecord {
    pub id: String,
    pub wsin: String,
    pub consumer_name: String,
    pub location: String,
    pub service_type: String,
    pub consumer_type: String,
    pub year: String,
    pub month: String,
    pub previous_reading: String,
    pub present_reading: String,
    pub water_consumption: String,
    pub water_charge: String,
    pub surcharge: String,
    pub overall_total: String,
    pub payment_status: String,
    pub processed_by: String,
    pub timestamp: String,
}

impl PaymentRecord {
    pub fn key(&self) -> ConsumerKey {
        ConsumerKey::new(&self.wsin, &self.consumer_name, &self.year, &self.month)
    }

    pub fn identity(&self) -> ConsumerIdentity {
        ConsumerIdentity::new(&self.wsin, &self.consumer_name)
    }
}

#[cfg(test)]
mod payment_record_tests {
    use super::*;
    use crate::test_support::fixtures::records::PaymentRecordBuilder;
    use rstest::rstest;

    #[rstest]
    fn it_should_serialize_with_camel_case_keys() {
        let payment = PaymentRecordBuilder::new().build();
        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["wsin"], "1");
        assert_eq!(json["consumerName"], "elai");
        assert_eq!(json["waterConsumption"], "6");
        assert_eq!(json["processedBy"], "System Admin");
    }

    #[rstest]
    fn it_should_build_the_matching_key() {
        let payment = PaymentRecordBuilder::new().month("December").build();
        assert_eq!(
            payment.key(),
            ConsumerKey::new("1", "elai", "2025", "December")
        );
        assert_eq!(payment.identity(), ConsumerIdentity::new("1", "elai"));
    }
}
