//! Location selection state.

use serde::{Deserialize, Serialize};

use crate::region::Region;

/// Whether the user has confirmed a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionPhase {
    /// Initial phase; the region selector should be shown.
    Unconfirmed,
    Confirmed,
}

/// The in-memory location selection.
///
/// `is_confirmed` is only ever set by an explicit user choice, either made in
/// this process or adopted from a persisted one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSelectionState {
    pub selected_region: Region,
    pub is_confirmed: bool,
}

impl LocationSelectionState {
    /// Default region, unconfirmed.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn confirmed(region: Region) -> Self {
        Self {
            selected_region: region,
            is_confirmed: true,
        }
    }

    pub fn phase(&self) -> SelectionPhase {
        if self.is_confirmed {
            SelectionPhase::Confirmed
        } else {
            SelectionPhase::Unconfirmed
        }
    }
}
