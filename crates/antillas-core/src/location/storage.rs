//! Key-value storage seam.

use async_trait::async_trait;

use crate::error::Result;

/// Key holding the selected region identifier.
pub const SELECTED_LOCATION_KEY: &str = "selectedLocation";

/// Key holding the literal `"true"` while a selection is confirmed.
pub const LOCATION_SELECTED_KEY: &str = "locationSelected";

/// Asynchronous string key-value storage scoped to the application.
///
/// Implementations report failures as `AntillasError::StorageUnavailable`
/// (or a more specific adapter error); callers in the core treat every
/// failure as non-fatal.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Returns the stored value, or `None` if the key is absent.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Removes the key. Removing an absent key succeeds.
    async fn delete(&self, key: &str) -> Result<()>;
}
