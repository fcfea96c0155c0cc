//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every field has a
//! default, so a missing or partial file is valid.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::theme::ColorScheme;

/// Simulated "typing" delay before an assistant reply is shown.
pub const DEFAULT_TYPING_DELAY_MS: u64 = 1500;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Palette variant used for every region. `color_scheme` is accepted too.
    #[serde(default, alias = "color_scheme")]
    pub default_color_scheme: ColorScheme,
    #[serde(default = "default_typing_delay_ms")]
    pub typing_delay_ms: u64,
    /// Overrides the directory holding `preferences.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
}

fn default_typing_delay_ms() -> u64 {
    DEFAULT_TYPING_DELAY_MS
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            default_color_scheme: ColorScheme::default(),
            typing_delay_ms: default_typing_delay_ms(),
            storage_dir: None,
        }
    }
}

impl AppConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }
}
