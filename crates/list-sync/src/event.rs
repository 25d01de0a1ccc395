//! Events and Render Effects
//!
//! Input and output vocabulary of the synchronizer.

use crate::item::Item;

/// A user or lifecycle event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Page finished loading
    Load,
    /// Add form submitted with the raw input text
    Submit(String),
    /// Removal affordance clicked on the row with this text
    Remove(String),
    /// Clear-all affordance clicked
    ClearAll,
    /// Filter input changed
    Filter(String),
}

/// Payload-free discriminant, used as the dispatch-table key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Load,
    Submit,
    Remove,
    ClearAll,
    Filter,
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Load => EventKind::Load,
            Event::Submit(_) => EventKind::Submit,
            Event::Remove(_) => EventKind::Remove,
            Event::ClearAll => EventKind::ClearAll,
            Event::Filter(_) => EventKind::Filter,
        }
    }

    /// Text carried by the event ("" for payload-free events)
    pub fn payload(&self) -> &str {
        match self {
            Event::Submit(text) | Event::Remove(text) | Event::Filter(text) => text,
            Event::Load | Event::ClearAll => "",
        }
    }
}

/// Something the display has to do after an event was handled
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Append a row at the end of the list
    RowAppended(Item),
    /// Remove the row showing this item
    RowRemoved(Item),
    /// Remove every row
    RowsCleared,
    /// Show or hide one row (filter result)
    RowVisibility { item: Item, visible: bool },
    /// Inline "enter an item" indicator on the add form
    ValidationShown(bool),
    /// Blocking "already exists" alert
    DuplicateAlert(Item),
    /// Empty the add input
    InputReset,
    /// Show or hide the clear-all and filter affordances
    ControlsVisible(bool),
}
