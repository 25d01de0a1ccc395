//! Application State
//!
//! Canonical in-memory list plus the transient UI flags derived from it.

use crate::item::Item;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListState {
    items: Vec<Item>,
    /// Lower-cased filter query ("" = no filter)
    filter: String,
    validation_shown: bool,
    controls_visible: bool,
}

impl ListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Items in insertion order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, item: &Item) -> bool {
        self.items.contains(item)
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn validation_shown(&self) -> bool {
        self.validation_shown
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }

    /// Whether a row for `item` passes the current filter
    pub fn is_visible(&self, item: &Item) -> bool {
        item.matches(&self.filter)
    }

    pub(crate) fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove `item`, returning whether it was present.
    pub(crate) fn remove(&mut self, item: &Item) -> bool {
        match self.items.iter().position(|i| i == item) {
            Some(pos) => {
                self.items.remove(pos);
                true
            }
            None => false,
        }
    }

    pub(crate) fn replace_items(&mut self, items: Vec<Item>) {
        self.items = items;
    }

    pub(crate) fn clear_items(&mut self) {
        self.items.clear();
    }

    pub(crate) fn set_filter(&mut self, query: &str) {
        self.filter = query.to_lowercase();
    }

    pub(crate) fn set_validation_shown(&mut self, shown: bool) {
        self.validation_shown = shown;
    }

    /// Re-derive the clear/filter toggle from the row count.
    pub(crate) fn refresh_controls(&mut self) -> bool {
        self.controls_visible = !self.items.is_empty();
        self.controls_visible
    }
}
