//! New Item Form Component
//!
//! Text input with submit button; shows the inline hint on empty input.

use leptos::prelude::*;
use list_sync::Event;

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

const INPUT_CLASS: &str = "w-full rounded-sm border px-3 py-2 text-lg focus:outline-none";
const INPUT_INVALID_CLASS: &str =
    "form-input w-full rounded-sm border-2 border-red-600 px-3 py-2 text-lg focus:outline-none";

/// Form for adding items
#[component]
pub fn NewItemForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let invalid = move || store.view().read().validation_shown();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.dispatch(Event::Submit(store.draft().get_untracked()));
    };

    view! {
        <form id="item-form" class="flex flex-col gap-2 mb-5" on:submit=add_item>
            <input
                type="text"
                id="item"
                name="item"
                placeholder="Enter Item"
                class=move || if invalid() { INPUT_INVALID_CLASS } else { INPUT_CLASS }
                prop:value=move || store.draft().get()
                on:input=move |ev| store.draft().set(event_target_value(&ev))
            />
            <small
                class="text-sm text-red-600"
                style:display=move || if invalid() { "block" } else { "none" }
            >
                "Please enter an item"
            </small>
            <button
                type="submit"
                class="flex items-center justify-center gap-2 rounded-sm bg-slate-800 px-4 py-2 text-white hover:bg-slate-700 transition"
            >
                <i class="fa-solid fa-plus"></i>
                "Add Item"
            </button>
        </form>
    }
}
