//! Item List Component
//!
//! Renders the rows of the view projection in insertion order.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    view! {
        <ul id="item-list" class="flex flex-col sm:flex-row sm:flex-wrap gap-3 mb-5">
            <For
                each={move || store.view().read().rows().iter().map(|row| row.item.clone()).collect::<Vec<_>>()}
                key={|item| item.clone()}
                children={move |item| view! { <ItemRow item=item /> }}
            />
        </ul>
    }
}
