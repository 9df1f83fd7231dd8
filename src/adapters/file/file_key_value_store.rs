// File backed implementation of the KeyValueStore port.
//
// Purpose
// - Persist each key as `<root>/<key>.json` so data survives between CLI runs.
//
// Responsibilities
// - Write through a temporary file and rename it into place, so a crash mid-write leaves the
//   previous value intact.
// - Accept only plain key names; a key never addresses a path outside the root.
// - Announce every successful write on the change feed.

use crate::core::ports::{KeyValueStore, StoreChange, StoreError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::broadcast;

const CHANGE_FEED_CAPACITY: usize = 64;

pub struct FileKeyValueStore {
    root: PathBuf,
    changes: broadcast::Sender<StoreChange>,
}

impl FileKeyValueStore {
    pub async fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)
            .await
            .map_err(|e| StoreError::Backend(format!("create {}: {e}", root.display())))?;
        let (changes, _) = broadcast::channel(CHANGE_FEED_CAPACITY);
        Ok(Self { root, changes })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StoreError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StoreError::Backend(format!("invalid key '{key}'")));
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

#[async_trait::async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::Backend(format!("read {}: {e}", path.display()))),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key)?;
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)
            .await
            .map_err(|e| StoreError::Backend(format!("write {}: {e}", staging.display())))?;
        fs::rename(&staging, &path)
            .await
            .map_err(|e| StoreError::Backend(format!("rename {}: {e}", path.display())))?;
        let _ = self.changes.send(StoreChange {
            key: key.to_string(),
        });
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.changes.subscribe()
    }
}
