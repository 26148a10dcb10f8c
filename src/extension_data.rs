/// Data structures for Extension Board
use serde::{Deserialize, Serialize};

/// Status of every extension that is enabled and has no assigned category
pub const STATUS_ENABLED: &str = "enabled";

/// Status of every extension that is disabled and has no assigned category
pub const STATUS_DISABLED: &str = "disabled";

/// Icon entry as reported by chrome.management
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtensionIcon {
    #[serde(default)]
    pub size: u32,
    pub url: String,
}

/// Information about an installed extension
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtensionRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icons: Vec<ExtensionIcon>,
    pub enabled: bool,
}

impl ExtensionRecord {
    #[cfg(test)]
    pub fn new(id: &str, name: &str, enabled: bool) -> ExtensionRecord {
        ExtensionRecord {
            id: id.to_string(),
            name: name.to_string(),
            icons: Vec::new(),
            enabled,
        }
    }

    /// URL of the first icon, or an empty string when the extension has none
    pub fn icon_url(&self) -> &str {
        self.icons.first().map(|icon| icon.url.as_str()).unwrap_or("")
    }

    /// Status used when the extension has no entry in the state map
    pub fn default_status(&self) -> &'static str {
        status_for_enabled(self.enabled)
    }
}

pub fn status_for_enabled(enabled: bool) -> &'static str {
    if enabled { STATUS_ENABLED } else { STATUS_DISABLED }
}

/// Maps the two reserved statuses onto an enabled flag.
///
/// Only an exact match counts: "Enabled" or "enabled " are custom categories.
pub fn reserved_enabled_flag(status: &str) -> Option<bool> {
    match status {
        STATUS_ENABLED => Some(true),
        STATUS_DISABLED => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_record_creation() {
        let ext = ExtensionRecord::new("abc", "uBlock", true);

        assert_eq!(ext.id, "abc");
        assert_eq!(ext.name, "uBlock");
        assert!(ext.enabled);
        assert_eq!(ext.icon_url(), "");
    }

    #[test]
    fn test_default_status() {
        assert_eq!(ExtensionRecord::new("a", "A", true).default_status(), "enabled");
        assert_eq!(ExtensionRecord::new("b", "B", false).default_status(), "disabled");
    }

    #[test]
    fn test_reserved_enabled_flag() {
        assert_eq!(reserved_enabled_flag("enabled"), Some(true));
        assert_eq!(reserved_enabled_flag("disabled"), Some(false));
        assert_eq!(reserved_enabled_flag("work"), None);
        assert_eq!(reserved_enabled_flag("Enabled"), None);
    }

    #[test]
    fn test_deserialize_management_payload() {
        // chrome.management returns many more fields than we use
        let json = r#"{
            "id": "ext-1",
            "name": "Dark Reader",
            "enabled": false,
            "version": "4.9.1",
            "icons": [
                {"size": 16, "url": "chrome://extension-icon/ext-1/16/0"},
                {"size": 128, "url": "chrome://extension-icon/ext-1/128/0"}
            ]
        }"#;

        let ext: ExtensionRecord = serde_json::from_str(json).unwrap();

        assert_eq!(ext.name, "Dark Reader");
        assert!(!ext.enabled);
        assert_eq!(ext.icon_url(), "chrome://extension-icon/ext-1/16/0");
    }

    #[test]
    fn test_deserialize_without_icons() {
        let json = r#"{"id": "ext-2", "name": "Plain", "enabled": true}"#;

        let ext: ExtensionRecord = serde_json::from_str(json).unwrap();

        assert!(ext.icons.is_empty());
        assert_eq!(ext.icon_url(), "");
    }
}
