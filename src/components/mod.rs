//! UI Components
//!
//! Leptos components for the item list page.

mod new_item_form;
mod filter_input;
mod item_list;
mod item_row;
mod clear_button;

pub use new_item_form::NewItemForm;
pub use filter_input::FilterInput;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use clear_button::ClearButton;
