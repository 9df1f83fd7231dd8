// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the persistence capability as a trait: an opaque text blob store keyed by name.
//
// Responsibilities
// - Keep the core and the use cases independent of the storage medium.
// - Replace polling with an explicit change feed: every successful write is announced.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits in the adapters layer.

use async_trait::async_trait;
use thiserror::Error;
use tokio::sync::broadcast;

/// Key holding the serialized roster (`[ConsumerRecord]` as a JSON array).
pub const ROSTER_KEY: &str = "roster";

/// Key holding the serialized payment log (`[PaymentRecord]` as a JSON array).
pub const PAYMENT_RECORDS_KEY: &str = "payment_records";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("corrupt value under '{key}': {reason}")]
    Corrupt { key: String, reason: String },
}

/// Announced after a value has been written under `key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreChange {
    pub key: String,
}

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Receive a `StoreChange` for every successful `set` from now on.
    fn subscribe(&self) -> broadcast::Receiver<StoreChange>;
}
