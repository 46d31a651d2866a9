//! Storage module
//!
//! Key-value persistence behind the session and wardrobe stores.
//! Values are JSON text; backends only see opaque strings.

pub mod file_store;
pub mod memory;
pub mod sqlite_store;

pub use file_store::FileStore;
pub use memory::MemoryStore;
pub use sqlite_store::SqliteStore;

use crate::config::{CODI_HISTORY_KEY_PREFIX, WARDROBE_KEY_PREFIX};
use crate::error::Result;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::future::Future;

/// String-keyed text store with get/set/remove semantics
pub trait KeyValueStore: Clone + Send + Sync + 'static {
    /// Read the value under `key`, `None` if absent
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;

    /// Insert or overwrite the value under `key`
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;

    /// Remove `key`; removing an absent key succeeds
    fn remove(&self, key: &str) -> impl Future<Output = Result<()>> + Send;
}

/// Read and decode a JSON record
pub async fn load_json<S, T>(store: &S, key: &str) -> Result<Option<T>>
where
    S: KeyValueStore,
    T: DeserializeOwned,
{
    match store.get(key).await? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Encode and write a JSON record
pub async fn save_json<S, T>(store: &S, key: &str, value: &T) -> Result<()>
where
    S: KeyValueStore,
    T: Serialize + ?Sized,
{
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw).await
}

/// Key holding a user's wardrobe list
pub fn wardrobe_key(user_id: &str) -> String {
    format!("{WARDROBE_KEY_PREFIX}{user_id}")
}

/// Key holding a user's outfit history
pub fn codi_history_key(user_id: &str) -> String {
    format!("{CODI_HISTORY_KEY_PREFIX}{user_id}")
}

/// Backend chosen at runtime from settings
#[derive(Clone)]
pub enum AnyStore {
    Memory(MemoryStore),
    File(FileStore),
    Sqlite(SqliteStore),
}

impl KeyValueStore for AnyStore {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        match self {
            AnyStore::Memory(store) => store.get(key).await,
            AnyStore::File(store) => store.get(key).await,
            AnyStore::Sqlite(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        match self {
            AnyStore::Memory(store) => store.set(key, value).await,
            AnyStore::File(store) => store.set(key, value).await,
            AnyStore::Sqlite(store) => store.set(key, value).await,
        }
    }

    async fn remove(&self, key: &str) -> Result<()> {
        match self {
            AnyStore::Memory(store) => store.remove(key).await,
            AnyStore::File(store) => store.remove(key).await,
            AnyStore::Sqlite(store) => store.remove(key).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::models::User;

    #[test]
    fn test_namespaced_keys() {
        assert_eq!(wardrobe_key("42"), "wardrobe_42");
        assert_eq!(codi_history_key("42"), "codi_history_42");
    }

    #[tokio::test]
    async fn test_json_helpers() {
        let store = AnyStore::Memory(MemoryStore::new());
        let user = User {
            id: "1".to_string(),
            email: "user@example.com".to_string(),
            name: "김철수".to_string(),
            preferences: None,
        };

        save_json(&store, "currentUser", &user).await.unwrap();
        let loaded: Option<User> = load_json(&store, "currentUser").await.unwrap();
        assert_eq!(loaded, Some(user));

        let missing: Option<User> = load_json(&store, "nothing").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_malformed_json_is_an_error() {
        let store = MemoryStore::new();
        store.set("currentUser", "{not json").await.unwrap();

        let result: Result<Option<User>> = load_json(&store, "currentUser").await;
        assert!(matches!(result, Err(AppError::Serialization(_))));
    }
}
