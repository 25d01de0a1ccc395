//! Item Value
//!
//! A single normalized (trimmed, lower-cased) list entry.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

/// One entry of the list.
///
/// Only constructible through [`Item::parse`], so every `Item` is already
/// trimmed and lower-cased and never empty. Two items are the same entry
/// exactly when their text is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Item(String);

impl Item {
    /// Normalize raw user input. Returns `None` when nothing is left after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized = raw.trim().to_lowercase();
        if normalized.is_empty() {
            None
        } else {
            Some(Self(normalized))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring match used by the live filter. An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        self.0.contains(&query.to_lowercase())
    }

    /// Normalize a raw sequence, dropping empties and later duplicates.
    pub fn normalize_all<I, S>(raw: I) -> Vec<Item>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = HashSet::new();
        raw.into_iter()
            .filter_map(|s| Item::parse(s.as_ref()))
            .filter(|item| seen.insert(item.clone()))
            .collect()
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Item {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_and_lowercases() {
        let item = Item::parse("  Milk ").unwrap();
        assert_eq!(item.as_str(), "milk");
    }

    #[test]
    fn test_parse_rejects_blank() {
        assert!(Item::parse("").is_none());
        assert!(Item::parse("   \t").is_none());
    }

    #[test]
    fn test_matches_is_case_insensitive_substring() {
        let item = Item::parse("Bread").unwrap();
        assert!(item.matches("re"));
        assert!(item.matches("RE"));
        assert!(item.matches(""));
        assert!(!item.matches("eggs"));
    }

    #[test]
    fn test_normalize_all_keeps_first_occurrence() {
        let items = Item::normalize_all(["Eggs", "", "bread", " EGGS ", "rice"]);
        let texts: Vec<&str> = items.iter().map(Item::as_str).collect();
        assert_eq!(texts, vec!["eggs", "bread", "rice"]);
    }

    #[test]
    fn test_serializes_as_plain_string() {
        let item = Item::parse("Tea").unwrap();
        assert_eq!(serde_json::to_string(&item).unwrap(), "\"tea\"");
    }
}
