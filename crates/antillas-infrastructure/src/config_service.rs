//! Configuration loading.
//!
//! Reads `AppConfig` from `config.toml`. A missing file yields defaults; a
//! malformed file is an error so typos are not silently ignored.

use std::path::{Path, PathBuf};

use antillas_core::config::AppConfig;
use antillas_core::error::Result;
use tracing::debug;

use crate::paths::AntillasPaths;

#[derive(Debug, Clone)]
pub struct ConfigService {
    path: PathBuf,
}

impl ConfigService {
    /// Uses `config.toml` under the resolved config directory.
    pub fn new(paths: &AntillasPaths) -> Result<Self> {
        Ok(Self::with_path(paths.config_file()?))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn load(&self) -> Result<AppConfig> {
        if !tokio::fs::try_exists(&self.path).await? {
            debug!(path = %self.path.display(), "No config file; using defaults");
            return Ok(AppConfig::default());
        }

        let content = tokio::fs::read_to_string(&self.path).await?;
        let config: AppConfig = toml::from_str(&content)?;
        debug!(path = %self.path.display(), "Loaded config");
        Ok(config)
    }
}
