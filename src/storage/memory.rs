use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::errors::StoreError;

use super::{KeyValueStore, Result};

/// Which operations a [`MemoryStore`] should refuse.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StoreFaults {
    pub fail_list: bool,
    pub fail_get: bool,
    pub fail_set: bool,
    pub fail_delete: bool,
    /// Keys whose `get` fails even when `fail_get` is off.
    pub fail_get_keys: BTreeSet<String>,
}

impl StoreFaults {
    pub fn none() -> Self {
        Self::default()
    }

    /// Refuses every operation, like a store that has not been provisioned.
    pub fn all() -> Self {
        Self {
            fail_list: true,
            fail_get: true,
            fail_set: true,
            fail_delete: true,
            fail_get_keys: BTreeSet::new(),
        }
    }

    /// Reads succeed, writes and deletes fail.
    pub fn read_only() -> Self {
        Self {
            fail_set: true,
            fail_delete: true,
            ..Self::default()
        }
    }

    /// Fails reads of the given keys only.
    pub fn unreadable<I, K>(keys: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            fail_get_keys: keys.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    fn rejects_get(&self, key: &str) -> bool {
        self.fail_get || self.fail_get_keys.contains(key)
    }
}

/// Process-local store backed by an ordered map.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<BTreeMap<String, String>>,
    faults: RwLock<StoreFaults>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_faults(faults: StoreFaults) -> Self {
        Self {
            values: RwLock::default(),
            faults: RwLock::new(faults),
        }
    }

    pub async fn set_faults(&self, faults: StoreFaults) {
        *self.faults.write().await = faults;
    }

    /// Inserts a raw value without consulting the fault configuration.
    pub async fn seed(&self, key: impl Into<String>, value: impl Into<String>) {
        self.values.write().await.insert(key.into(), value.into());
    }

    pub async fn len(&self) -> usize {
        self.values.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.values.read().await.is_empty()
    }

    pub async fn contains_key(&self, key: &str) -> bool {
        self.values.read().await.contains_key(key)
    }

}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        if self.faults.read().await.fail_list {
            return Err(StoreError::Unavailable("memory store offline".into()));
        }
        let values = self.values.read().await;
        Ok(values
            .range(prefix.to_string()..)
            .take_while(|(key, _)| key.starts_with(prefix))
            .map(|(key, _)| key.clone())
            .collect())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        if self.faults.read().await.rejects_get(key) {
            return Err(StoreError::Unavailable("memory store offline".into()));
        }
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        if self.faults.read().await.fail_set {
            return Err(StoreError::Rejected {
                key: key.to_string(),
                reason: "writes disabled".into(),
            });
        }
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        if self.faults.read().await.fail_delete {
            return Err(StoreError::Rejected {
                key: key.to_string(),
                reason: "deletes disabled".into(),
            });
        }
        self.values.write().await.remove(key);
        Ok(())
    }
}
