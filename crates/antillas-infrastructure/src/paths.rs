//! Path management for Antillas configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/antillas/          # Config directory (platform equivalent elsewhere)
//! ├── config.toml              # Application configuration
//! └── preferences.json         # Persisted key-value preferences
//! ```
//!
//! A base directory override replaces `~/.config/antillas/` entirely, which is
//! how tests and the CLI's `--data-dir` flag isolate state.

use std::path::PathBuf;

use antillas_core::error::{AntillasError, Result};

const APP_DIR: &str = "antillas";
const CONFIG_FILE: &str = "config.toml";
const PREFERENCES_FILE: &str = "preferences.json";

#[derive(Debug, Clone, Default)]
pub struct AntillasPaths {
    base_dir: Option<PathBuf>,
}

impl AntillasPaths {
    /// `base_dir` overrides the platform config directory when set.
    pub fn new(base_dir: Option<PathBuf>) -> Self {
        Self { base_dir }
    }

    /// Returns the Antillas configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf> {
        if let Some(base) = &self.base_dir {
            return Ok(base.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| AntillasError::config("Cannot find config directory"))
    }

    pub fn config_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(CONFIG_FILE))
    }

    pub fn preferences_file(&self) -> Result<PathBuf> {
        Ok(self.config_dir()?.join(PREFERENCES_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_dir_override() {
        let paths = AntillasPaths::new(Some(PathBuf::from("/tmp/antillas-test")));
        assert_eq!(
            paths.config_file().unwrap(),
            PathBuf::from("/tmp/antillas-test/config.toml")
        );
        assert_eq!(
            paths.preferences_file().unwrap(),
            PathBuf::from("/tmp/antillas-test/preferences.json")
        );
    }

    #[test]
    fn test_default_dir_ends_with_app_name() {
        if let Ok(dir) = AntillasPaths::default().config_dir() {
            assert!(dir.ends_with(APP_DIR));
        }
    }
}
