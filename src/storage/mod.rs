pub mod entry_store;
pub mod json_backend;
pub mod memory;

use async_trait::async_trait;

use crate::errors::StoreError;

pub type Result<T> = std::result::Result<T, StoreError>;

/// Minimal prefix-addressable key-value store that entries are mirrored into.
///
/// Every call is independently failable. Values are opaque serialized text.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns every key starting with `prefix`.
    async fn list(&self, prefix: &str) -> Result<Vec<String>>;
    /// Returns the stored value, or `None` when the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;
    async fn set(&self, key: &str, value: &str) -> Result<()>;
    async fn delete(&self, key: &str) -> Result<()>;
}

pub use entry_store::{EntryStore, SyncStatus};
pub use json_backend::JsonFileStore;
pub use memory::{MemoryStore, StoreFaults};
