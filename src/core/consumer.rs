// This module groups the consumer domain components.
//
// Structure
// - key.rs: typed composite keys used for all matching
// - record.rs: roster row (one consumer, one billing period)
// - payment.rs: payment log entry, immutable once appended
// - reconcile.rs: pure fold of the payment log onto a roster snapshot, and history lookups
// - search.rs: operator search over the roster
// - decider/: pure decision logic per command intent

pub mod key;
pub mod payment;
pub mod reconcile;
pub mod record;
pub mod search;
pub mod decider {
    pub mod record_reading {
        pub mod command;
        pub mod decide;
    }
}
