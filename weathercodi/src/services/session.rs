//! Session service
//!
//! Holds at most one logged-in user and mirrors it to the `currentUser` key.
//! Credentials are checked against a fixed table of mock accounts.

use crate::config::CURRENT_USER_KEY;
use crate::error::{AppError, Result};
use crate::events::{EventBus, StoreEvent};
use crate::models::{User, UserPreferences};
use crate::storage::{load_json, save_json, KeyValueStore};
use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{broadcast, RwLock};

struct MockAccount {
    id: &'static str,
    email: &'static str,
    password: &'static str,
    name: &'static str,
}

const MOCK_ACCOUNTS: [MockAccount; 2] = [
    MockAccount {
        id: "1",
        email: "user@example.com",
        password: "123456",
        name: "김철수",
    },
    MockAccount {
        id: "2",
        email: "test@test.com",
        password: "password",
        name: "이영희",
    },
];

/// Service for the current user session
#[derive(Clone)]
pub struct SessionStore<S: KeyValueStore> {
    store: S,
    current: Arc<RwLock<Option<User>>>,
    events: EventBus,
    login_delay: Duration,
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S, events: EventBus, login_delay: Duration) -> Self {
        Self {
            store,
            current: Arc::new(RwLock::new(None)),
            events,
            login_delay,
        }
    }

    /// Restore the persisted session, if any.
    ///
    /// A malformed record is returned as an error, not discarded.
    pub async fn restore(&self) -> Result<Option<User>> {
        let user: Option<User> = load_json(&self.store, CURRENT_USER_KEY).await?;

        match &user {
            Some(u) => tracing::info!("Restored session for user {}", u.id),
            None => tracing::debug!("No persisted session"),
        }

        *self.current.write().await = user.clone();
        self.events.publish(StoreEvent::SessionChanged(user.clone()));

        Ok(user)
    }

    /// Log in against the mock account table
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        self.simulate_latency().await;

        let account = MOCK_ACCOUNTS
            .iter()
            .find(|a| a.email == email && a.password == password);

        let Some(account) = account else {
            tracing::warn!("Login failed for {}", email);
            return Err(AppError::InvalidCredentials);
        };

        let user = User {
            id: account.id.to_string(),
            email: account.email.to_string(),
            name: account.name.to_string(),
            preferences: None,
        };

        self.set_current(user.clone()).await?;
        tracing::info!("User {} logged in", user.id);

        Ok(user)
    }

    /// Create a user and log them in. Emails are not checked for duplicates.
    pub async fn register(&self, email: &str, _password: &str, name: &str) -> Result<User> {
        self.simulate_latency().await;

        let user = User {
            id: Utc::now().timestamp_millis().to_string(),
            email: email.to_string(),
            name: name.to_string(),
            preferences: None,
        };

        self.set_current(user.clone()).await?;
        tracing::info!("Registered user {} ({})", user.id, user.email);

        Ok(user)
    }

    /// Clear the session. Wardrobe data stays under the user's keys.
    pub async fn logout(&self) -> Result<()> {
        self.store.remove(CURRENT_USER_KEY).await?;

        let previous = self.current.write().await.take();
        if let Some(user) = previous {
            tracing::info!("User {} logged out", user.id);
        }

        self.events.publish(StoreEvent::SessionChanged(None));
        Ok(())
    }

    pub async fn current_user(&self) -> Option<User> {
        self.current.read().await.clone()
    }

    /// Replace the logged-in user's style preferences
    pub async fn update_preferences(&self, preferences: UserPreferences) -> Result<User> {
        let mut user = self.current_user().await.ok_or(AppError::NotAuthenticated)?;
        user.preferences = Some(preferences);

        self.set_current(user.clone()).await?;
        tracing::info!("Updated preferences for user {}", user.id);

        Ok(user)
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreEvent> {
        self.events.subscribe()
    }

    async fn set_current(&self, user: User) -> Result<()> {
        save_json(&self.store, CURRENT_USER_KEY, &user).await?;
        *self.current.write().await = Some(user.clone());
        self.events.publish(StoreEvent::SessionChanged(Some(user)));
        Ok(())
    }

    async fn simulate_latency(&self) {
        if !self.login_delay.is_zero() {
            tokio::time::sleep(self.login_delay).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn create_test_session() -> (SessionStore<MemoryStore>, MemoryStore) {
        let store = MemoryStore::new();
        let session = SessionStore::new(store.clone(), EventBus::new(), Duration::ZERO);
        (session, store)
    }

    #[tokio::test]
    async fn test_login_success_persists_session() {
        let (session, store) = create_test_session();

        let user = session.login("user@example.com", "123456").await.unwrap();

        assert_eq!(user.id, "1");
        assert_eq!(user.name, "김철수");
        assert_eq!(session.current_user().await, Some(user.clone()));

        let persisted: Option<User> = load_json(&store, CURRENT_USER_KEY).await.unwrap();
        assert_eq!(persisted, Some(user));
    }

    #[tokio::test]
    async fn test_login_failure_persists_nothing() {
        let (session, store) = create_test_session();

        for (email, password) in [
            ("user@example.com", "wrong"),
            ("test@test.com", "123456"),
            ("nobody@example.com", "password"),
            ("", ""),
        ] {
            let result = session.login(email, password).await;
            assert!(matches!(result, Err(AppError::InvalidCredentials)));
        }

        assert!(session.current_user().await.is_none());
        assert!(store.get(CURRENT_USER_KEY).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_second_mock_account() {
        let (session, _store) = create_test_session();
        let user = session.login("test@test.com", "password").await.unwrap();
        assert_eq!(user.id, "2");
        assert_eq!(user.name, "이영희");
    }

    #[tokio::test]
    async fn test_register_logs_in() {
        let (session, store) = create_test_session();

        let user = session
            .register("new@example.com", "pw", "박민수")
            .await
            .unwrap();

        assert!(user.id.parse::<i64>().is_ok());
        assert_eq!(user.email, "new@example.com");
        assert_eq!(session.current_user().await, Some(user));
        assert!(store.get(CURRENT_USER_KEY).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_register_allows_duplicate_email() {
        let (session, _store) = create_test_session();
        session.register("user@example.com", "x", "A").await.unwrap();
        session.register("user@example.com", "y", "B").await.unwrap();
        assert_eq!(session.current_user().await.unwrap().name, "B");
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let (session, store) = create_test_session();
        session.login("user@example.com", "123456").await.unwrap();

        session.logout().await.unwrap();

        assert!(session.current_user().await.is_none());
        assert!(store.get(CURRENT_USER_KEY).await.unwrap().is_none());

        // Logging out twice is harmless
        session.logout().await.unwrap();
    }

    #[tokio::test]
    async fn test_restore_session() {
        let store = MemoryStore::new();
        {
            let session = SessionStore::new(store.clone(), EventBus::new(), Duration::ZERO);
            session.login("test@test.com", "password").await.unwrap();
        }

        let session = SessionStore::new(store, EventBus::new(), Duration::ZERO);
        let restored = session.restore().await.unwrap().unwrap();

        assert_eq!(restored.id, "2");
        assert_eq!(session.current_user().await, Some(restored));
    }

    #[tokio::test]
    async fn test_restore_empty_and_malformed() {
        let (session, store) = create_test_session();
        assert!(session.restore().await.unwrap().is_none());

        store.set(CURRENT_USER_KEY, r#"{"id": 5}"#).await.unwrap();
        assert!(matches!(
            session.restore().await,
            Err(AppError::Serialization(_))
        ));
    }

    #[tokio::test]
    async fn test_update_preferences() {
        let (session, store) = create_test_session();

        let prefs = UserPreferences {
            favorite_colors: vec!["검은색".to_string()],
            ..UserPreferences::default()
        };
        assert!(matches!(
            session.update_preferences(prefs.clone()).await,
            Err(AppError::NotAuthenticated)
        ));

        session.login("user@example.com", "123456").await.unwrap();
        let user = session.update_preferences(prefs.clone()).await.unwrap();
        assert_eq!(user.preferences, Some(prefs.clone()));

        let persisted: User = load_json(&store, CURRENT_USER_KEY).await.unwrap().unwrap();
        assert_eq!(persisted.preferences, Some(prefs));
    }

    #[tokio::test]
    async fn test_session_events() {
        let (session, _store) = create_test_session();
        let mut rx = session.subscribe();

        let user = session.login("user@example.com", "123456").await.unwrap();
        session.logout().await.unwrap();

        assert_eq!(rx.recv().await.unwrap(), StoreEvent::SessionChanged(Some(user)));
        assert_eq!(rx.recv().await.unwrap(), StoreEvent::SessionChanged(None));
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_waits_for_simulated_latency() {
        let session = SessionStore::new(
            MemoryStore::new(),
            EventBus::new(),
            Duration::from_millis(1000),
        );

        let started = tokio::time::Instant::now();
        session.login("user@example.com", "123456").await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1000));
    }
}
