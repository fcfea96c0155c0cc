//! Location preference domain.
//!
//! - `model`: selection state (`LocationSelectionState`, `SelectionPhase`)
//! - `storage`: key-value storage seam (`KeyValueStorage`) and persisted keys
//! - `store`: the injectable `LocationPreferenceStore`

mod model;
mod storage;
mod store;

pub use model::{LocationSelectionState, SelectionPhase};
pub use storage::{KeyValueStorage, LOCATION_SELECTED_KEY, SELECTED_LOCATION_KEY};
pub use store::LocationPreferenceStore;
