//! Directory-backed key-value store
//!
//! Each key is stored as `<root>/<escaped key>.json`.
//! Bytes outside `[A-Za-z0-9_-]` are escaped as `%XX` so any key maps to a
//! valid, unique file name.
//!
//! Example: key "wardrobe_1" is stored at "<root>/wardrobe_1.json"

use super::KeyValueStore;
use crate::error::Result;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

#[derive(Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Create a new file store at the given root directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Initialize the store (create directory if needed)
    pub async fn initialize(&self) -> Result<()> {
        fs::create_dir_all(&self.root).await?;
        tracing::info!("File store initialized at: {:?}", self.root);
        Ok(())
    }

    /// Get file path for a key
    fn get_path(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", escape_key(key)))
    }

    /// Get store root directory
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.get_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let value = fs::read_to_string(&path).await?;
        tracing::debug!("Read key: {} ({} bytes)", key, value.len());

        Ok(Some(value))
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.get_path(key);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }

        // Write to temp file first (atomic write)
        let temp_path = path.with_extension("tmp");
        let mut file = fs::File::create(&temp_path).await?;
        file.write_all(value.as_bytes()).await?;
        file.sync_all().await?;

        fs::rename(temp_path, &path).await?;

        tracing::debug!("Wrote key: {} ({} bytes)", key, value.len());

        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let path = self.get_path(key);

        if !path.exists() {
            return Ok(()); // Already removed
        }

        fs::remove_file(&path).await?;

        tracing::debug!("Removed key: {}", key);

        Ok(())
    }
}

fn escape_key(key: &str) -> String {
    let mut escaped = String::with_capacity(key.len());
    for byte in key.bytes() {
        if byte.is_ascii_alphanumeric() || byte == b'_' || byte == b'-' {
            escaped.push(char::from(byte));
        } else {
            escaped.push_str(&format!("%{byte:02X}"));
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    async fn create_test_store() -> (FileStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("kv"));
        store.initialize().await.unwrap();
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_write_and_read() {
        let (store, _temp) = create_test_store().await;

        store.set("wardrobe_1", "[]").await.unwrap();

        let value = store.get("wardrobe_1").await.unwrap();
        assert_eq!(value.as_deref(), Some("[]"));
        assert!(store.root().join("wardrobe_1.json").exists());
    }

    #[tokio::test]
    async fn test_overwrite() {
        let (store, _temp) = create_test_store().await;

        store.set("currentUser", "first").await.unwrap();
        store.set("currentUser", "second").await.unwrap();

        assert_eq!(
            store.get("currentUser").await.unwrap().as_deref(),
            Some("second")
        );
        assert!(!store.root().join("currentUser.tmp").exists());
    }

    #[tokio::test]
    async fn test_missing_key() {
        let (store, _temp) = create_test_store().await;
        assert!(store.get("nope").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_remove() {
        let (store, _temp) = create_test_store().await;

        store.set("codi_history_1", "[]").await.unwrap();
        store.remove("codi_history_1").await.unwrap();

        assert!(store.get("codi_history_1").await.unwrap().is_none());
        store.remove("codi_history_1").await.unwrap();
    }

    #[tokio::test]
    async fn test_unsafe_keys_stay_inside_root() {
        let (store, _temp) = create_test_store().await;

        store.set("../escape", "x").await.unwrap();
        store.set("서울", "y").await.unwrap();

        assert!(store.root().join("%2E%2E%2Fescape.json").exists());
        assert_eq!(store.get("서울").await.unwrap().as_deref(), Some("y"));
    }

    #[test]
    fn test_escape_key() {
        assert_eq!(escape_key("wardrobe_123"), "wardrobe_123");
        assert_eq!(escape_key("a b"), "a%20b");
        assert_eq!(escape_key("50%"), "50%25");
    }
}
