//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use todo_sync::{Layout, Snapshot, Theme, ViewState};

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last list fetched from the remote store, plus the filter it was fetched under
    pub view: ViewState,
    /// Light/dark mode
    pub theme: Theme,
    /// Window inner width in CSS pixels
    pub viewport_width: f64,
}

impl AppState {
    pub fn new(viewport_width: f64) -> Self {
        Self {
            viewport_width,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the displayed list with a fresh fetch
pub fn store_apply_snapshot(store: &AppStore, snapshot: Snapshot) {
    store.view().write().apply(snapshot);
}

/// Flip light/dark, returning the new theme
pub fn store_toggle_theme(store: &AppStore) -> Theme {
    let binding = store.theme();
    let mut theme = binding.write();
    *theme = theme.toggled();
    *theme
}

/// Layout for the current viewport width
pub fn store_layout(store: &AppStore) -> Layout {
    Layout::from_width(store.viewport_width().get())
}
