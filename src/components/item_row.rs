//! Item Row Component
//!
//! One list entry with its remove button.

use leptos::prelude::*;
use list_sync::{Event, Item};

use crate::context::AppContext;
use crate::store::{use_app_store, AppStateStoreFields};

const ROW_CLASS: &str = "flex items-center justify-between bg-slate-400 rounded-sm shadow-md px-3 py-2 text-lg text-white font-semibold sm:w-[175px]";

#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let text = item.to_string();
    let remove_text = text.clone();

    // Filter toggles display in place; the node is kept
    let visible = move || {
        store
            .view()
            .read()
            .rows()
            .iter()
            .find(|row| row.item == item)
            .is_some_and(|row| row.visible)
    };

    view! {
        <li class=ROW_CLASS style:display=move || if visible() { "flex" } else { "none" }>
            {text}
            <button
                class="remove-item text-red-600 hover:text-red-500 hover:scale-125 transition"
                on:click=move |_| ctx.dispatch(Event::Remove(remove_text.clone()))
            >
                <i class="fa-solid fa-xmark"></i>
            </button>
        </li>
    }
}
