use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::{
    domain::{EntryKind, StoredEntry},
    errors::StoreError,
};

use super::KeyValueStore;

/// Outcome of mirroring one mutation into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncStatus {
    /// The store accepted the write or delete.
    Mirrored,
    /// The store refused; memory and store now disagree for `key`.
    Diverged { key: String, reason: String },
}

impl SyncStatus {
    pub fn is_mirrored(&self) -> bool {
        matches!(self, SyncStatus::Mirrored)
    }

    fn from_result(key: String, result: Result<(), StoreError>, action: &str) -> Self {
        match result {
            Ok(()) => {
                debug!(%key, action, "store mirrored");
                SyncStatus::Mirrored
            }
            Err(err) => {
                warn!(%key, action, error = %err, "store call failed, continuing in memory");
                SyncStatus::Diverged {
                    key,
                    reason: err.to_string(),
                }
            }
        }
    }
}

/// Maps income and expense records onto namespaced keys of a [`KeyValueStore`].
#[derive(Clone)]
pub struct EntryStore {
    store: Arc<dyn KeyValueStore>,
}

impl EntryStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Loads every parseable record of type `E`.
    ///
    /// A failed `list` yields an empty collection. Missing, unreadable or
    /// unparseable values are skipped. The result is unordered.
    pub async fn load_collection<E: StoredEntry>(&self) -> Vec<E> {
        let prefix = E::KIND.prefix();
        let keys = match self.store.list(&prefix).await {
            Ok(keys) => keys,
            Err(err) => {
                warn!(%prefix, error = %err, "could not list stored entries, starting empty");
                return Vec::new();
            }
        };

        let fetches = keys.into_iter().map(|key| async move {
            let result = self.store.get(&key).await;
            (key, result)
        });

        join_all(fetches)
            .await
            .into_iter()
            .filter_map(|(key, result)| decode_value(&key, result))
            .collect()
    }

    pub async fn persist_entry<E: StoredEntry>(&self, entry: &E) -> SyncStatus {
        let key = E::KIND.storage_key(entry.id());
        let result = match serde_json::to_string(entry) {
            Ok(value) => self.store.set(&key, &value).await,
            Err(err) => Err(err.into()),
        };
        SyncStatus::from_result(key, result, "set")
    }

    pub async fn remove_entry(&self, kind: EntryKind, id: &str) -> SyncStatus {
        let key = kind.storage_key(id);
        let result = self.store.delete(&key).await;
        SyncStatus::from_result(key, result, "delete")
    }
}

fn decode_value<E: StoredEntry>(
    key: &str,
    result: Result<Option<String>, StoreError>,
) -> Option<E> {
    let raw = match result {
        Ok(Some(raw)) if !raw.trim().is_empty() => raw,
        Ok(_) => {
            debug!(%key, "skipping empty stored value");
            return None;
        }
        Err(err) => {
            warn!(%key, error = %err, "skipping unreadable stored value");
            return None;
        }
    };
    match serde_json::from_str(&raw) {
        Ok(entry) => Some(entry),
        Err(err) => {
            warn!(%key, error = %err, "skipping malformed stored value");
            None
        }
    }
}
