//! Persistent Store
//!
//! Get-all/set-all access to the durable copy of the list.
//! Backends: browser `localStorage` (frontend crate) and [`MemoryStore`].

use crate::error::{StoreError, StoreResult};
use crate::item::Item;

/// Durable ordered list of items
pub trait ItemStore {
    /// Read the whole list. An unset key reads as an empty list.
    fn get_all(&self) -> StoreResult<Vec<Item>>;

    /// Replace the whole list.
    fn set_all(&mut self, items: &[Item]) -> StoreResult<()>;
}

impl<S: ItemStore + ?Sized> ItemStore for Box<S> {
    fn get_all(&self) -> StoreResult<Vec<Item>> {
        (**self).get_all()
    }

    fn set_all(&mut self, items: &[Item]) -> StoreResult<()> {
        (**self).set_all(items)
    }
}

/// JSON text layout shared by text-backed stores: a flat array of strings.
pub mod codec {
    use super::*;

    pub fn encode(items: &[Item]) -> StoreResult<String> {
        serde_json::to_string(items).map_err(StoreError::Encode)
    }

    /// Decode stored text, normalizing entries and dropping blanks and duplicates.
    pub fn decode(text: &str) -> StoreResult<Vec<Item>> {
        let raw: Vec<String> = serde_json::from_str(text).map_err(StoreError::Malformed)?;
        Ok(Item::normalize_all(raw))
    }
}

/// In-memory store holding the same text a `localStorage` key would.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    raw: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from existing stored text, well-formed or not.
    pub fn with_raw(text: impl Into<String>) -> Self {
        Self { raw: Some(text.into()) }
    }

    /// Currently stored text (`None` = key unset)
    pub fn raw(&self) -> Option<&str> {
        self.raw.as_deref()
    }
}

impl ItemStore for MemoryStore {
    fn get_all(&self) -> StoreResult<Vec<Item>> {
        match &self.raw {
            Some(text) => codec::decode(text),
            None => Ok(Vec::new()),
        }
    }

    fn set_all(&mut self, items: &[Item]) -> StoreResult<()> {
        self.raw = Some(codec::encode(items)?);
        Ok(())
    }
}
