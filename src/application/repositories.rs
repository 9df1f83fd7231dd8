// Repositories for the roster and the payment log on top of the KeyValueStore port.
//
// Purpose
// - RosterRepository: load and replace the whole roster.
// - PaymentLog: load the log with its version and append with an expected version.
//
// Responsibilities
// - Serialize each collection as one JSON array under its key.
// - A missing or blank value is an empty collection. Anything else that fails to parse is corrupt.
//
// Concurrency
// - The log version is its length. An append re-reads the log and refuses when another writer
//   appended since `load`. Roster writes replace the whole collection, last writer wins.

use crate::application::errors::ApplicationError;
use crate::core::consumer::payment::PaymentRecord;
use crate::core::consumer::record::ConsumerRecord;
use crate::core::ports::{KeyValueStore, PAYMENT_RECORDS_KEY, ROSTER_KEY, StoreChange, StoreError};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::debug;

async fn load_collection<S, T>(store: &S, key: &str) -> Result<Vec<T>, StoreError>
where
    S: KeyValueStore + ?Sized,
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) if !raw.trim().is_empty() => {
            serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
                key: key.to_string(),
                reason: e.to_string(),
            })
        }
        _ => Ok(Vec::new()),
    }
}

async fn save_collection<S, T>(store: &S, key: &str, items: &[T]) -> Result<(), StoreError>
where
    S: KeyValueStore + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(items).map_err(|e| StoreError::Corrupt {
        key: key.to_string(),
        reason: e.to_string(),
    })?;
    store.set(key, &raw).await
}

pub struct RosterRepository<TStore>
where
    TStore: KeyValueStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> RosterRepository<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Result<Vec<ConsumerRecord>, ApplicationError> {
        let roster: Vec<ConsumerRecord> = load_collection(&*self.store, ROSTER_KEY).await?;
        debug!(rows = roster.len(), "roster loaded");
        Ok(roster)
    }

    pub async fn save(&self, roster: &[ConsumerRecord]) -> Result<(), ApplicationError> {
        save_collection(&*self.store, ROSTER_KEY, roster).await?;
        Ok(())
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.store.subscribe()
    }
}

#[derive(Debug, Clone)]
pub struct LoadedLog {
    pub records: Vec<PaymentRecord>,
    pub version: i64,
}

pub struct PaymentLog<TStore>
where
    TStore: KeyValueStore + 'static,
{
    store: Arc<TStore>,
}

impl<TStore> PaymentLog<TStore>
where
    TStore: KeyValueStore + 'static,
{
    pub fn new(store: Arc<TStore>) -> Self {
        Self { store }
    }

    pub async fn load(&self) -> Result<LoadedLog, ApplicationError> {
        let records: Vec<PaymentRecord> = load_collection(&*self.store, PAYMENT_RECORDS_KEY).await?;
        let version = records.len() as i64;
        debug!(version, "payment log loaded");
        Ok(LoadedLog { records, version })
    }

    pub async fn append(
        &self,
        expected_version: i64,
        record: PaymentRecord,
    ) -> Result<i64, ApplicationError> {
        let mut current = self.load().await?;
        if current.version != expected_version {
            return Err(ApplicationError::VersionConflict {
                expected: expected_version,
                actual: current.version,
            });
        }
        current.records.push(record);
        save_collection(&*self.store, PAYMENT_RECORDS_KEY, &current.records).await?;
        Ok(current.version + 1)
    }
}
