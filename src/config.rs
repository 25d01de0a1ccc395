//! Frontend Configuration
//!
//! Optional JSON override read from `<meta name="item-list-config" content="...">`.

use list_sync::SyncConfig;
use log::warn;

const CONFIG_META_SELECTOR: &str = "meta[name=\"item-list-config\"]";

/// Synchronizer settings for this page; defaults when the tag is absent or invalid.
pub fn load_config() -> SyncConfig {
    let content = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|doc| doc.query_selector(CONFIG_META_SELECTOR).ok().flatten())
        .and_then(|el| el.get_attribute("content"));

    match content {
        Some(json) => SyncConfig::from_json(&json).unwrap_or_else(|err| {
            warn!("[CONFIG] Invalid item-list-config ({}), using defaults", err);
            SyncConfig::default()
        }),
        None => SyncConfig::default(),
    }
}
