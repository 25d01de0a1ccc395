//! Synchronizer Configuration

use serde::Deserialize;

/// Storage key used when none is configured
pub const DEFAULT_STORAGE_KEY: &str = "items";

/// What "clear all" does to the persisted copy
///
/// The page this replaces only cleared the rows (`ViewOnly`); the default
/// departs from that and empties storage too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClearPolicy {
    /// Only the visible rows are removed; items come back on the next load.
    ViewOnly,
    /// Rows and the persisted list are both emptied.
    #[default]
    ViewAndStorage,
}

/// Synchronizer settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Key the list is stored under
    pub storage_key: String,
    pub clear_policy: ClearPolicy,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            clear_policy: ClearPolicy::default(),
        }
    }
}

impl SyncConfig {
    /// Parse a JSON override; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SyncConfig::default();
        assert_eq!(config.storage_key, "items");
        assert_eq!(config.clear_policy, ClearPolicy::ViewAndStorage);
    }

    #[test]
    fn test_partial_override() {
        let config = SyncConfig::from_json(r#"{"clear_policy":"view_only"}"#).unwrap();
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.clear_policy, ClearPolicy::ViewOnly);

        let config = SyncConfig::from_json(r#"{"storage_key":"groceries"}"#).unwrap();
        assert_eq!(config.storage_key, "groceries");
        assert_eq!(config.clear_policy, ClearPolicy::ViewAndStorage);
    }

    #[test]
    fn test_unknown_policy_rejected() {
        assert!(SyncConfig::from_json(r#"{"clear_policy":"never"}"#).is_err());
    }
}
