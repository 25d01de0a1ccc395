//! Browser Storage
//!
//! `ItemStore` backed by `window.localStorage`, one key holding the JSON list.

use list_sync::{codec, Item, ItemStore, StoreError, StoreResult};
use wasm_bindgen::JsValue;

pub struct BrowserStore {
    storage: web_sys::Storage,
    key: String,
}

impl BrowserStore {
    /// Open `localStorage` for `key`. Fails when there is no window or storage is disabled.
    pub fn open(key: &str) -> StoreResult<Self> {
        let window = web_sys::window()
            .ok_or_else(|| StoreError::Unavailable("no window".to_string()))?;
        let storage = window
            .local_storage()
            .map_err(|e| StoreError::Unavailable(js_error(&e)))?
            .ok_or_else(|| StoreError::Unavailable("localStorage disabled".to_string()))?;
        Ok(Self {
            storage,
            key: key.to_string(),
        })
    }
}

impl ItemStore for BrowserStore {
    fn get_all(&self) -> StoreResult<Vec<Item>> {
        let text = self
            .storage
            .get_item(&self.key)
            .map_err(|e| StoreError::Read(js_error(&e)))?;
        match text {
            Some(text) => codec::decode(&text),
            None => Ok(Vec::new()),
        }
    }

    fn set_all(&mut self, items: &[Item]) -> StoreResult<()> {
        let text = codec::encode(items)?;
        self.storage
            .set_item(&self.key, &text)
            .map_err(|e| StoreError::Write(js_error(&e)))
    }
}

fn js_error(value: &JsValue) -> String {
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
