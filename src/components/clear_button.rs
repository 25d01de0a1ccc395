//! Clear Button Component

use leptos::prelude::*;
use list_sync::Event;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

/// Clear-all button, hidden while the list is empty
#[component]
pub fn ClearButton() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <button
            id="clear"
            class="w-full rounded-sm border border-slate-800 px-4 py-2 text-lg hover:bg-slate-800 hover:text-white transition"
            style:display=move || if store.view().read().controls_visible() { "block" } else { "none" }
            on:click=move |_| ctx.dispatch(Event::ClearAll)
        >
            "Clear All"
        </button>
    }
}
