use std::{
    collections::BTreeMap,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use tokio::{fs, sync::Mutex};

use crate::{errors::StoreError, utils::persistence::write_atomic};

use super::{KeyValueStore, Result};

type Document = BTreeMap<String, String>;

/// File-backed store keeping every key in a single JSON object.
///
/// The file is created by the first write. Until then `list` reports the store as
/// unavailable, which the entry adapter treats as "nothing persisted yet".
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_document(&self) -> Result<Option<Document>> {
        match fs::read_to_string(&self.path).await {
            Ok(data) if data.trim().is_empty() => Ok(Some(Document::new())),
            Ok(data) => Ok(Some(serde_json::from_str(&data)?)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    async fn write_document(&self, document: &Document) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        write_atomic(&self.path, &json).await?;
        Ok(())
    }

    async fn modify<F>(&self, apply: F) -> Result<()>
    where
        F: FnOnce(&mut Document),
    {
        let _guard = self.write_lock.lock().await;
        let mut document = self.read_document().await?.unwrap_or_default();
        apply(&mut document);
        self.write_document(&document).await
    }
}

#[async_trait]
impl KeyValueStore for JsonFileStore {
    async fn list(&self, prefix: &str) -> Result<Vec<String>> {
        let document = self.read_document().await?.ok_or_else(|| {
            StoreError::Unavailable(format!("`{}` does not exist yet", self.path.display()))
        })?;
        Ok(document
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self
            .read_document()
            .await?
            .and_then(|mut document| document.remove(key)))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.modify(|document| {
            document.insert(key.to_string(), value.to_string());
        })
        .await
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.modify(|document| {
            document.remove(key);
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn list_before_first_write_is_unavailable() {
        let dir = tempdir().expect("tempdir");
        let store = JsonFileStore::new(dir.path().join("entries.json"));

        assert!(matches!(
            store.list("expense:").await,
            Err(StoreError::Unavailable(_))
        ));
        assert_eq!(store.get("expense:1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn writes_survive_reopening() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("data").join("entries.json");
        {
            let store = JsonFileStore::new(&path);
            store.set("expense:1", "one").await.unwrap();
            store.set("income:2", "two").await.unwrap();
            store.delete("expense:1").await.unwrap();
        }

        let reopened = JsonFileStore::new(&path);
        assert!(reopened.list("expense:").await.unwrap().is_empty());
        assert_eq!(reopened.list("income:").await.unwrap(), vec!["income:2"]);
        assert_eq!(
            reopened.get("income:2").await.unwrap().as_deref(),
            Some("two")
        );
    }

    #[tokio::test]
    async fn corrupt_file_reports_serde_error() {
        let dir = tempdir().expect("tempdir");
        let path = dir.path().join("entries.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(store.list("").await, Err(StoreError::Serde(_))));
    }
}
