//! List Synchronizer
//!
//! Routes each [`Event`] through a fixed dispatch table. Every handler takes
//! the current state, the store and the event payload, updates both copies of
//! the list and returns the render effects for the display.
//!
//! Handlers write the store before touching [`ListState`], so a failed write
//! leaves the in-memory list as it was.

use log::{debug, info, warn};

use crate::config::{ClearPolicy, SyncConfig};
use crate::error::{StoreError, StoreResult, SyncResult};
use crate::event::{Effect, Event, EventKind};
use crate::item::Item;
use crate::state::ListState;
use crate::store::ItemStore;

/// Signature shared by every entry of the dispatch table
pub type Handler<S> = fn(&mut ListState, &mut S, &SyncConfig, &str) -> SyncResult<Vec<Effect>>;

/// Dispatch table: event kind -> handler
pub fn handler_for<S: ItemStore>(kind: EventKind) -> Handler<S> {
    match kind {
        EventKind::Load => handle_load::<S>,
        EventKind::Submit => handle_submit::<S>,
        EventKind::Remove => handle_remove::<S>,
        EventKind::ClearAll => handle_clear_all::<S>,
        EventKind::Filter => handle_filter::<S>,
    }
}

/// Owns the canonical list and its persistent store
pub struct Synchronizer<S> {
    state: ListState,
    store: S,
    config: SyncConfig,
}

impl<S: ItemStore> Synchronizer<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, SyncConfig::default())
    }

    pub fn with_config(store: S, config: SyncConfig) -> Self {
        Self {
            state: ListState::new(),
            store,
            config,
        }
    }

    /// Handle one event and return what the display has to do.
    pub fn dispatch(&mut self, event: Event) -> SyncResult<Vec<Effect>> {
        let kind = event.kind();
        debug!("[SYNC] dispatch {:?} payload={:?}", kind, event.payload());
        let handler = handler_for::<S>(kind);
        handler(&mut self.state, &mut self.store, &self.config, event.payload())
    }

    pub fn load(&mut self) -> SyncResult<Vec<Effect>> {
        self.dispatch(Event::Load)
    }

    pub fn add(&mut self, raw: &str) -> SyncResult<Vec<Effect>> {
        self.dispatch(Event::Submit(raw.to_string()))
    }

    pub fn remove(&mut self, text: &str) -> SyncResult<Vec<Effect>> {
        self.dispatch(Event::Remove(text.to_string()))
    }

    pub fn clear_all(&mut self) -> SyncResult<Vec<Effect>> {
        self.dispatch(Event::ClearAll)
    }

    pub fn filter(&mut self, query: &str) -> SyncResult<Vec<Effect>> {
        self.dispatch(Event::Filter(query.to_string()))
    }

    pub fn state(&self) -> &ListState {
        &self.state
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Give the store back, e.g. to simulate a page reload with a fresh synchronizer.
    pub fn into_store(self) -> S {
        self.store
    }
}

// ========================
// Handlers
// ========================

fn handle_load<S: ItemStore>(
    state: &mut ListState,
    store: &mut S,
    _config: &SyncConfig,
    _payload: &str,
) -> SyncResult<Vec<Effect>> {
    let stored = match store.get_all() {
        Ok(items) => items,
        Err(StoreError::Malformed(err)) => {
            warn!("[SYNC] Ignoring malformed stored list: {}", err);
            Vec::new()
        }
        Err(err) => return Err(err.into()),
    };
    info!("[SYNC] Loaded {} items", stored.len());

    let mut effects = Vec::with_capacity(stored.len() + 2);
    if !state.is_empty() {
        effects.push(Effect::RowsCleared);
    }
    for item in &stored {
        effects.push(Effect::RowAppended(item.clone()));
        if !state.is_visible(item) {
            effects.push(Effect::RowVisibility { item: item.clone(), visible: false });
        }
    }
    state.replace_items(stored);
    effects.push(Effect::ControlsVisible(state.refresh_controls()));
    Ok(effects)
}

fn handle_submit<S: ItemStore>(
    state: &mut ListState,
    store: &mut S,
    _config: &SyncConfig,
    raw: &str,
) -> SyncResult<Vec<Effect>> {
    let Some(item) = Item::parse(raw) else {
        debug!("[SYNC] Empty input rejected");
        state.set_validation_shown(true);
        return Ok(vec![Effect::ValidationShown(true)]);
    };

    if state.contains(&item) {
        debug!("[SYNC] Duplicate rejected: {}", item);
        state.set_validation_shown(false);
        return Ok(vec![
            Effect::ValidationShown(false),
            Effect::DuplicateAlert(item),
            Effect::InputReset,
            Effect::ControlsVisible(state.refresh_controls()),
        ]);
    }

    let mut stored = read_for_update(store, state)?;
    if !stored.contains(&item) {
        stored.push(item.clone());
    }
    store.set_all(&stored)?;

    state.set_validation_shown(false);
    state.push(item.clone());

    let mut effects = vec![Effect::ValidationShown(false), Effect::RowAppended(item.clone())];
    if !state.is_visible(&item) {
        effects.push(Effect::RowVisibility { item, visible: false });
    }
    effects.push(Effect::InputReset);
    effects.push(Effect::ControlsVisible(state.refresh_controls()));
    Ok(effects)
}

fn handle_remove<S: ItemStore>(
    state: &mut ListState,
    store: &mut S,
    _config: &SyncConfig,
    text: &str,
) -> SyncResult<Vec<Effect>> {
    let Some(item) = Item::parse(text).filter(|item| state.contains(item)) else {
        debug!("[SYNC] Remove ignored, no row for {:?}", text);
        return Ok(Vec::new());
    };

    let mut stored = read_for_update(store, state)?;
    if let Some(pos) = stored.iter().position(|i| *i == item) {
        stored.remove(pos);
    }
    store.set_all(&stored)?;

    state.remove(&item);
    let mut effects = vec![Effect::RowRemoved(item)];
    if state.is_empty() {
        effects.extend(hide_validation(state));
    }
    effects.push(Effect::ControlsVisible(state.refresh_controls()));
    Ok(effects)
}

fn handle_clear_all<S: ItemStore>(
    state: &mut ListState,
    store: &mut S,
    config: &SyncConfig,
    _payload: &str,
) -> SyncResult<Vec<Effect>> {
    match config.clear_policy {
        ClearPolicy::ViewAndStorage => store.set_all(&[])?,
        ClearPolicy::ViewOnly => info!("[SYNC] Clearing rows only, stored list kept"),
    }
    state.clear_items();
    let mut effects = vec![Effect::RowsCleared];
    effects.extend(hide_validation(state));
    effects.push(Effect::ControlsVisible(state.refresh_controls()));
    Ok(effects)
}

fn handle_filter<S: ItemStore>(
    state: &mut ListState,
    _store: &mut S,
    _config: &SyncConfig,
    query: &str,
) -> SyncResult<Vec<Effect>> {
    state.set_filter(query);
    Ok(state
        .items()
        .iter()
        .map(|item| Effect::RowVisibility {
            item: item.clone(),
            visible: state.is_visible(item),
        })
        .collect())
}

/// Emptying the list also drops the empty-input hint.
fn hide_validation(state: &mut ListState) -> Option<Effect> {
    if !state.validation_shown() {
        return None;
    }
    state.set_validation_shown(false);
    Some(Effect::ValidationShown(false))
}

/// Stored list for a read-modify-write. A malformed value is replaced by the
/// in-memory list on the following write.
fn read_for_update<S: ItemStore>(store: &S, state: &ListState) -> StoreResult<Vec<Item>> {
    match store.get_all() {
        Err(StoreError::Malformed(err)) => {
            warn!("[SYNC] Overwriting malformed stored list: {}", err);
            Ok(state.items().to_vec())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn item(text: &str) -> Item {
        Item::parse(text).unwrap()
    }

    #[test]
    fn test_dispatch_table_covers_every_kind() {
        let mut sync = Synchronizer::new(MemoryStore::new());
        for event in [
            Event::Load,
            Event::Submit("tea".into()),
            Event::Filter("t".into()),
            Event::Remove("tea".into()),
            Event::ClearAll,
        ] {
            let kind = event.kind();
            let handler = handler_for::<MemoryStore>(kind);
            let result = handler(&mut sync.state, &mut sync.store, &sync.config, event.payload());
            assert!(result.is_ok(), "{:?} failed", kind);
        }
    }

    #[test]
    fn test_add_effects_in_order() {
        let mut sync = Synchronizer::new(MemoryStore::new());
        let effects = sync.add("Tea").unwrap();
        assert_eq!(
            effects,
            vec![
                Effect::ValidationShown(false),
                Effect::RowAppended(item("tea")),
                Effect::InputReset,
                Effect::ControlsVisible(true),
            ]
        );
    }

    #[test]
    fn test_empty_add_keeps_input() {
        let mut sync = Synchronizer::new(MemoryStore::new());
        let effects = sync.add("   ").unwrap();
        assert_eq!(effects, vec![Effect::ValidationShown(true)]);
        assert!(sync.state().validation_shown());
        assert!(sync.store().raw().is_none());
    }

    #[test]
    fn test_duplicate_add_alerts_and_resets() {
        let mut sync = Synchronizer::new(MemoryStore::new());
        sync.add("Milk").unwrap();
        let effects = sync.add("milk").unwrap();
        assert!(effects.contains(&Effect::DuplicateAlert(item("milk"))));
        assert!(effects.contains(&Effect::InputReset));
        assert_eq!(sync.state().items(), &[item("milk")]);
        assert_eq!(sync.store().raw(), Some(r#"["milk"]"#));
    }

    #[test]
    fn test_add_while_filtered_hides_new_row() {
        let mut sync = Synchronizer::new(MemoryStore::new());
        sync.filter("re").unwrap();
        let effects = sync.add("eggs").unwrap();
        assert!(effects.contains(&Effect::RowVisibility { item: item("eggs"), visible: false }));

        let effects = sync.add("bread").unwrap();
        assert!(!effects.iter().any(|e| matches!(e, Effect::RowVisibility { .. })));
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut sync = Synchronizer::new(MemoryStore::new());
        sync.add("tea").unwrap();
        assert!(sync.remove("coffee").unwrap().is_empty());
        assert!(sync.remove("").unwrap().is_empty());
        assert_eq!(sync.store().raw(), Some(r#"["tea"]"#));
    }

    #[test]
    fn test_remove_matches_by_text_not_position() {
        let mut sync = Synchronizer::new(MemoryStore::new());
        for raw in ["eggs", "bread", "rice"] {
            sync.add(raw).unwrap();
        }
        sync.remove("Bread").unwrap();
        assert_eq!(sync.state().items(), &[item("eggs"), item("rice")]);
        assert_eq!(sync.store().raw(), Some(r#"["eggs","rice"]"#));
    }
}
