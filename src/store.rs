//! Reactive View Store
//!
//! Uses Leptos reactive_stores so each component only tracks the field it reads.

use leptos::prelude::*;
use list_sync::{Effect, ListView};
use reactive_stores::Store;

/// Display state of the page
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Rows and toggles, projected from synchronizer effects
    pub view: ListView,
    /// Current text of the add input
    pub draft: String,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// Apply a batch of effects to the view projection in one write
pub fn store_apply_effects(store: &AppStore, effects: &[Effect]) {
    store.view().write().apply_all(effects);
}
