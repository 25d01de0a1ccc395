//! List View Projection
//!
//! Display-side copy of the list, built only by applying [`Effect`]s.
//! Nothing reads it back to make decisions.

use crate::event::Effect;
use crate::item::Item;

/// One rendered row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub item: Item,
    pub visible: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    rows: Vec<Row>,
    validation_shown: bool,
    controls_visible: bool,
}

impl ListView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one effect. Effects that are not view state (alerts, input reset) are ignored.
    pub fn apply(&mut self, effect: &Effect) {
        match effect {
            Effect::RowAppended(item) => self.rows.push(Row {
                item: item.clone(),
                visible: true,
            }),
            Effect::RowRemoved(item) => {
                if let Some(pos) = self.rows.iter().position(|row| row.item == *item) {
                    self.rows.remove(pos);
                }
            }
            Effect::RowsCleared => self.rows.clear(),
            Effect::RowVisibility { item, visible } => {
                if let Some(row) = self.rows.iter_mut().find(|row| row.item == *item) {
                    row.visible = *visible;
                }
            }
            Effect::ValidationShown(shown) => self.validation_shown = *shown,
            Effect::ControlsVisible(visible) => self.controls_visible = *visible,
            Effect::DuplicateAlert(_) | Effect::InputReset => {}
        }
    }

    pub fn apply_all<'a>(&mut self, effects: impl IntoIterator<Item = &'a Effect>) {
        for effect in effects {
            self.apply(effect);
        }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Items of rows that pass the current filter
    pub fn visible_items(&self) -> Vec<&Item> {
        self.rows.iter().filter(|row| row.visible).map(|row| &row.item).collect()
    }

    pub fn validation_shown(&self) -> bool {
        self.validation_shown
    }

    pub fn controls_visible(&self) -> bool {
        self.controls_visible
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(text: &str) -> Item {
        Item::parse(text).unwrap()
    }

    #[test]
    fn test_apply_row_effects() {
        let mut view = ListView::new();
        view.apply_all(&[
            Effect::RowAppended(item("eggs")),
            Effect::RowAppended(item("bread")),
            Effect::RowVisibility { item: item("eggs"), visible: false },
            Effect::ControlsVisible(true),
        ]);
        assert_eq!(view.rows().len(), 2);
        assert_eq!(view.visible_items(), vec![&item("bread")]);
        assert!(view.controls_visible());

        view.apply(&Effect::RowRemoved(item("bread")));
        assert_eq!(view.rows().len(), 1);

        view.apply(&Effect::RowsCleared);
        assert!(view.rows().is_empty());
    }

    #[test]
    fn test_non_view_effects_ignored() {
        let mut view = ListView::new();
        view.apply(&Effect::DuplicateAlert(item("tea")));
        view.apply(&Effect::InputReset);
        assert_eq!(view, ListView::new());
    }
}
