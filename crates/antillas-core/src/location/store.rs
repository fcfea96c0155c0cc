//! Location preference store.
//!
//! Holds the selected region in memory and mirrors it to a `KeyValueStorage`.
//! In-memory updates are synchronous; persistence runs on a single writer task
//! fed by an ordered queue, so a `select` followed by a `reset_selection` is
//! always persisted in that order.

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot, watch};
use tracing::{debug, info, warn};

use super::model::LocationSelectionState;
use super::storage::{KeyValueStorage, LOCATION_SELECTED_KEY, SELECTED_LOCATION_KEY};
use crate::error::Result;
use crate::region::Region;

/// Persistence operations, applied by the writer task in enqueue order.
#[derive(Debug)]
enum WriteOp {
    Save(Region),
    Clear,
    Flush(oneshot::Sender<()>),
}

/// Single source of truth for the active region.
///
/// Instances are independent: each owns its in-memory state and writer task,
/// and only shares whatever the injected storage shares.
///
/// # Example
///
/// ```ignore
/// let store = LocationPreferenceStore::new(storage);
/// store.load_persisted().await;
/// if !store.current_selection().is_confirmed {
///     store.select_region("jamaica")?;
/// }
/// ```
pub struct LocationPreferenceStore {
    state: watch::Sender<LocationSelectionState>,
    storage: Arc<dyn KeyValueStorage>,
    writes: mpsc::UnboundedSender<WriteOp>,
}

impl LocationPreferenceStore {
    /// Creates a store with the default, unconfirmed selection.
    ///
    /// Spawns the writer task, so this must be called within a Tokio runtime.
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        let (state, _) = watch::channel(LocationSelectionState::new());
        let (writes, queue) = mpsc::unbounded_channel();
        tokio::spawn(run_writer(storage.clone(), queue));

        Self {
            state,
            storage,
            writes,
        }
    }

    /// Returns the in-memory selection.
    pub fn current_selection(&self) -> LocationSelectionState {
        *self.state.borrow()
    }

    /// Confirms the region named by `region`.
    ///
    /// Fails with `InvalidRegion` for identifiers outside the supported set,
    /// leaving the selection untouched. Persistence is queued, not awaited.
    pub fn select_region(&self, region: &str) -> Result<LocationSelectionState> {
        let region = Region::parse(region)?;
        Ok(self.select(region))
    }

    /// Confirms `region`. Persistence is queued, not awaited.
    pub fn select(&self, region: Region) -> LocationSelectionState {
        info!(region = %region, "Selecting location");
        let state = LocationSelectionState::confirmed(region);
        self.state.send_replace(state);
        self.enqueue(WriteOp::Save(region));
        state
    }

    /// Clears the confirmation and queues deletion of the persisted keys.
    ///
    /// The selected region is kept so the selector can default to it.
    pub fn reset_selection(&self) {
        info!("Resetting location selection");
        self.unconfirm();
        self.enqueue(WriteOp::Clear);
    }

    /// Re-opens the selector without touching persisted data.
    pub fn show_selector(&self) {
        debug!("Showing location selector");
        self.unconfirm();
    }

    /// Adopts a persisted selection, if one exists.
    ///
    /// Only a supported region identifier paired with the literal `"true"`
    /// flag is adopted, and only while the in-memory selection is still
    /// unconfirmed; a selection made during the reads wins. Read failures are
    /// logged and treated as "nothing persisted". Writes queued before this
    /// call are applied first.
    pub async fn load_persisted(&self) -> LocationSelectionState {
        self.flush().await;

        match read_persisted(self.storage.as_ref()).await {
            Ok(Some(region)) => {
                let adopted = self.state.send_if_modified(|state| {
                    if state.is_confirmed {
                        return false;
                    }
                    *state = LocationSelectionState::confirmed(region);
                    true
                });
                if adopted {
                    info!(region = %region, "Loaded saved location");
                } else {
                    debug!(region = %region, "Kept location selected while loading");
                }
            }
            Ok(None) => debug!("No saved location"),
            Err(e) => warn!(error = %e, "Failed to load saved location"),
        }

        self.current_selection()
    }

    /// Waits until every persistence operation queued so far has been applied.
    pub async fn flush(&self) {
        let (ack, done) = oneshot::channel();
        if self.writes.send(WriteOp::Flush(ack)).is_err() {
            return;
        }
        let _ = done.await;
    }

    /// Subscribes to selection changes.
    pub fn subscribe(&self) -> watch::Receiver<LocationSelectionState> {
        self.state.subscribe()
    }

    fn unconfirm(&self) {
        self.state.send_modify(|state| state.is_confirmed = false);
    }

    fn enqueue(&self, op: WriteOp) {
        if let Err(e) = self.writes.send(op) {
            warn!(op = ?e.0, "Location writer stopped; dropping persistence operation");
        }
    }
}

async fn read_persisted(storage: &dyn KeyValueStorage) -> Result<Option<Region>> {
    let saved = storage.get(SELECTED_LOCATION_KEY).await?;
    let flag = storage.get(LOCATION_SELECTED_KEY).await?;
    debug!(location = ?saved, selected = ?flag, "Read location from storage");

    let (Some(saved), Some("true")) = (saved, flag.as_deref()) else {
        return Ok(None);
    };

    match Region::parse(&saved) {
        Ok(region) => Ok(Some(region)),
        Err(e) => {
            warn!(error = %e, "Ignoring saved location");
            Ok(None)
        }
    }
}

async fn run_writer(storage: Arc<dyn KeyValueStorage>, mut queue: mpsc::UnboundedReceiver<WriteOp>) {
    while let Some(op) = queue.recv().await {
        match op {
            WriteOp::Save(region) => {
                if let Err(e) = save_selection(storage.as_ref(), region).await {
                    warn!(error = %e, region = %region, "Failed to save location");
                } else {
                    debug!(region = %region, "Location saved to storage");
                }
            }
            WriteOp::Clear => {
                for key in [SELECTED_LOCATION_KEY, LOCATION_SELECTED_KEY] {
                    if let Err(e) = storage.delete(key).await {
                        warn!(error = %e, key, "Failed to clear location");
                    }
                }
            }
            WriteOp::Flush(ack) => {
                let _ = ack.send(());
            }
        }
    }
    debug!("Location writer stopped");
}

async fn save_selection(storage: &dyn KeyValueStorage, region: Region) -> Result<()> {
    storage.set(SELECTED_LOCATION_KEY, region.id()).await?;
    storage.set(LOCATION_SELECTED_KEY, "true").await
}
