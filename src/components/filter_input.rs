//! Filter Input Component

use leptos::prelude::*;
use list_sync::Event;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Live filter, hidden while the list is empty
#[component]
pub fn FilterInput() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <input
            type="text"
            id="filter"
            placeholder="Filter Items"
            class="w-full rounded-sm border px-3 py-2 mb-4 text-lg focus:outline-none"
            style:display=move || if store.view().read().controls_visible() { "block" } else { "none" }
            on:input=move |ev| ctx.dispatch(Event::Filter(event_target_value(&ev)))
        />
    }
}
