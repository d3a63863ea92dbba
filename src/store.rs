//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity: the chip bar only
//! tracks `active_section`, the grid tracks all three filter inputs.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::menu::{UiState, ALL_SECTIONS};
use crate::models::Catalog;

/// Load lifecycle. `Error` is terminal, no retry path.
#[derive(Clone, Debug, PartialEq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Error(String),
}

#[derive(Clone, Debug, Store)]
pub struct SiteState {
    /// Parsed menu, immutable once loaded.
    pub catalog: Option<Catalog>,
    pub phase: LoadPhase,
    /// Active chip: a section id, or "all".
    pub active_section: String,
    /// Raw (un-normalized) search text.
    pub query: String,
}

impl Default for SiteState {
    fn default() -> Self {
        Self {
            catalog: None,
            phase: LoadPhase::Loading,
            active_section: ALL_SECTIONS.to_string(),
            query: String::new(),
        }
    }
}

impl SiteState {
    /// Snapshot of the filter inputs for the pure menu pipeline.
    pub fn ui_state(&self) -> UiState {
        UiState {
            active_section: self.active_section.clone(),
            query: self.query.clone(),
        }
    }
}

pub type SiteStore = Store<SiteState>;

pub fn use_site_store() -> SiteStore {
    expect_context::<SiteStore>()
}
