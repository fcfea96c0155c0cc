//! Shared state for every subcommand.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use antillas_core::Region;
use antillas_core::config::AppConfig;
use antillas_core::location::LocationPreferenceStore;
use antillas_infrastructure::{AntillasPaths, ConfigService, FileKeyValueStorage};
use tracing::debug;

pub struct AppContext {
    pub config: AppConfig,
    pub store: LocationPreferenceStore,
}

impl AppContext {
    /// Loads configuration, opens preference storage and restores the saved
    /// location.
    pub async fn load(config_path: Option<PathBuf>, data_dir: Option<PathBuf>) -> Result<Self> {
        let config_service = match config_path {
            Some(path) => ConfigService::with_path(path),
            None => ConfigService::new(&AntillasPaths::new(data_dir.clone()))?,
        };
        let config = config_service
            .load()
            .await
            .with_context(|| format!("Failed to load {}", config_service.path().display()))?;

        let storage_paths = AntillasPaths::new(data_dir.or_else(|| config.storage_dir.clone()));
        let storage = FileKeyValueStorage::new(&storage_paths)
            .context("Failed to resolve preferences location")?;
        debug!(path = ?storage_paths.preferences_file().ok(), "Using preference storage");

        let store = LocationPreferenceStore::new(Arc::new(storage));
        store.load_persisted().await;

        Ok(Self { config, store })
    }

    /// `explicit` if given, otherwise the stored region.
    pub fn resolve_region(&self, explicit: Option<&str>) -> Result<Region> {
        match explicit {
            Some(value) => Ok(Region::parse(value)?),
            None => Ok(self.store.current_selection().selected_region),
        }
    }
}
