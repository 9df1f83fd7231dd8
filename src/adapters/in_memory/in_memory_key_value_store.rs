// In memory implementation of the KeyValueStore port.
//
// Purpose
// - Support handler tests and local development without touching the disk.
//
// Responsibilities
// - Keep values in a map keyed by name.
// - Announce every successful write on the change feed.
// - Simulate an unavailable backend with `toggle_offline`.

use crate::core::ports::{KeyValueStore, StoreChange, StoreError};
use std::collections::HashMap;
use tokio::sync::{RwLock, broadcast};

const CHANGE_FEED_CAPACITY: usize = 64;

pub struct InMemoryKeyValueStore {
    values: RwLock<HashMap<String, String>>,
    changes: broadcast::Sender<StoreChange>,
    is_offline: bool,
}

impl Default for InMemoryKeyValueStore {
    fn default() -> Self {
        let (changes, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
        Self {
            values: RwLock::new(HashMap::new()),
            changes,
            is_offline: false,
        }
    }
}

impl InMemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }
}

#[async_trait::async_trait]
impl KeyValueStore for InMemoryKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Key value store offline".into()));
        }
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Key value store offline".into()));
        }
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        // Nobody listening is fine.
        let _ = self.changes.send(StoreChange {
            key: key.to_string(),
        });
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.changes.subscribe()
    }
}
