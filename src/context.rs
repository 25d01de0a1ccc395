//! Application Context
//!
//! Owns the synchronizer and turns its effects into UI updates.

use leptos::prelude::*;
use list_sync::{Effect, Event, ItemStore, Synchronizer};
use log::error;

use crate::store::{store_apply_effects, AppStateStoreFields, AppStore};

/// Synchronizer over whichever store the page could open
pub type PageSynchronizer = Synchronizer<Box<dyn ItemStore>>;

const DUPLICATE_MESSAGE: &str = "This item already exists!";

#[derive(Clone, Copy)]
pub struct AppContext {
    /// Thread-local: `web_sys::Storage` is not `Send`
    sync: StoredValue<PageSynchronizer, LocalStorage>,
    store: AppStore,
}

impl AppContext {
    pub fn new(sync: PageSynchronizer, store: AppStore) -> Self {
        Self {
            sync: StoredValue::new_local(sync),
            store,
        }
    }

    /// Run one event through the synchronizer and render the result
    pub fn dispatch(&self, event: Event) {
        match self.sync.try_update_value(|sync| sync.dispatch(event)) {
            Some(Ok(effects)) => self.render(&effects),
            Some(Err(err)) => error!("[APP] Event failed: {}", err),
            None => error!("[APP] Synchronizer already disposed"),
        }
    }

    fn render(&self, effects: &[Effect]) {
        store_apply_effects(&self.store, effects);
        for effect in effects {
            match effect {
                Effect::DuplicateAlert(_) => show_alert(DUPLICATE_MESSAGE),
                Effect::InputReset => self.store.draft().set(String::new()),
                _ => {}
            }
        }
    }
}

fn show_alert(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.alert_with_message(message) {
            error!("[APP] alert failed: {:?}", err);
        }
    }
}
