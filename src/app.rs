//! Item List App
//!
//! Root component: opens storage, wires up context and loads the saved list.

use leptos::prelude::*;
use list_sync::{Event, ItemStore, MemoryStore, Synchronizer};
use log::{info, warn};
use reactive_stores::Store;

use crate::components::{ClearButton, FilterInput, ItemList, NewItemForm};
use crate::config::load_config;
use crate::context::AppContext;
use crate::storage::BrowserStore;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    info!("[APP] Using storage key {:?}, clear policy {:?}", config.storage_key, config.clear_policy);

    let backend: Box<dyn ItemStore> = match BrowserStore::open(&config.storage_key) {
        Ok(store) => Box::new(store),
        Err(err) => {
            warn!("[APP] {}; items will not survive a reload", err);
            Box::new(MemoryStore::new())
        }
    };

    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new(Synchronizer::with_config(backend, config), store);
    provide_context(ctx);

    // Load saved items on mount
    Effect::new(move |_| ctx.dispatch(Event::Load));

    view! {
        <div class="container mx-auto max-w-lg mt-10 p-5 font-main">
            <header class="flex items-center justify-center gap-3 mb-8">
                <i class="fa-solid fa-list-check text-3xl"></i>
                <h1 class="text-3xl font-semibold">"Item List"</h1>
            </header>

            <NewItemForm />
            <FilterInput />
            <ItemList />
            <ClearButton />
        </div>
    }
}
