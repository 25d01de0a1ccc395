//! List Sync
//!
//! Keeps an ordered list of normalized items and its persisted copy in step.
//! Platform independent: the browser frontend supplies a `localStorage`
//! backed [`ItemStore`], tests use [`MemoryStore`].

mod config;
mod error;
mod event;
mod item;
mod state;
mod store;
mod sync;
mod view;


pub use config::{ClearPolicy, SyncConfig, DEFAULT_STORAGE_KEY};
pub use error::{StoreError, StoreResult, SyncError, SyncResult};
pub use event::{Effect, Event, EventKind};
pub use item::Item;
pub use state::ListState;
pub use store::{codec, ItemStore, MemoryStore};
pub use sync::{handler_for, Handler, Synchronizer};
pub use view::{ListView, Row};
