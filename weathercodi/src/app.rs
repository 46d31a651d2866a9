//! Application state and initialization
//!
//! This module manages the central application state and lifecycle.
//! All services are initialized here and made available through AppState.

use crate::config::{DATA_DIR_ENV, DEFAULT_DATA_DIR};
use crate::error::Result;
use crate::events::EventBus;
use crate::services::settings::{AppSettings, SettingsService, StorageBackend};
use crate::services::{SessionStore, WardrobeStore, WeatherService};
use crate::storage::{AnyStore, FileStore, MemoryStore, SqliteStore};
use std::path::{Path, PathBuf};

/// Central application state holding all services
#[derive(Clone)]
pub struct AppState {
    pub data_dir: PathBuf,
    pub settings: AppSettings,
    pub events: EventBus,
    pub session: SessionStore<AnyStore>,
    pub wardrobe: WardrobeStore<AnyStore>,
    pub weather: WeatherService,
}

impl AppState {
    /// Wire services over an already opened store
    pub fn new(data_dir: PathBuf, settings: AppSettings, store: AnyStore) -> Self {
        let events = EventBus::new();
        let session = SessionStore::new(
            store.clone(),
            events.clone(),
            settings.latency.login_delay(),
        );
        let wardrobe = WardrobeStore::new(
            store,
            session.clone(),
            events.clone(),
            settings.seed_default_wardrobe,
        );
        let weather = WeatherService::new(settings.latency.clone());

        Self {
            data_dir,
            settings,
            events,
            session,
            wardrobe,
            weather,
        }
    }
}

/// Data directory from the environment, or the default
pub fn data_dir_from_env() -> PathBuf {
    std::env::var_os(DATA_DIR_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

/// Open the configured storage backend
pub async fn open_store(data_dir: &Path, settings: &AppSettings) -> Result<AnyStore> {
    let path = settings.storage.resolve_path(data_dir);

    let store = match settings.storage.backend {
        StorageBackend::Memory => AnyStore::Memory(MemoryStore::new()),
        StorageBackend::File => {
            let store = FileStore::new(path);
            store.initialize().await?;
            AnyStore::File(store)
        }
        StorageBackend::Sqlite => AnyStore::Sqlite(SqliteStore::open(&path).await?),
    };

    tracing::info!("Storage backend: {:?}", settings.storage.backend);
    Ok(store)
}

/// Application setup - called once on startup
pub async fn setup(data_dir: PathBuf) -> Result<AppState> {
    tracing::info!("Initializing application");
    tracing::info!("App data directory: {:?}", data_dir);

    tokio::fs::create_dir_all(&data_dir).await?;

    let settings = SettingsService::new(data_dir.clone()).load().await?;
    let store = open_store(&data_dir, &settings).await?;

    let state = AppState::new(data_dir, settings, store);
    state.session.restore().await?;

    tracing::info!("Application initialized successfully");

    Ok(state)
}
