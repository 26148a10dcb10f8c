/// Persisted values kept in chrome.storage.sync

use crate::error::SyncError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storage key holding the category list
pub const CATEGORIES_KEY: &str = "categories";

/// Storage key holding the extension id -> status map
pub const EXTENSION_STATES_KEY: &str = "extensionStates";

/// User-defined category labels, stored as a JSON list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Categories {
    pub labels: Vec<String>,
}

impl Categories {
    pub fn new() -> Self {
        Categories { labels: Vec::new() }
    }

    #[cfg(test)]
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut categories = Categories::new();
        for label in labels {
            let label = label.into();
            if !categories.contains(&label) {
                categories.labels.push(label);
            }
        }
        categories
    }

    /// Exact, case-sensitive membership
    pub fn contains(&self, label: &str) -> bool {
        self.labels.iter().any(|l| l == label)
    }

    /// Validate and append a new label. The input is trimmed first.
    pub fn add(&mut self, raw: &str) -> Result<String, SyncError> {
        let label = validate_category_name(raw)?;
        if self.contains(&label) {
            return Err(SyncError::DuplicateCategory(label));
        }
        self.labels.push(label.clone());
        Ok(label)
    }

    pub fn remove(&mut self, label: &str) -> bool {
        let original_len = self.labels.len();
        self.labels.retain(|l| l != label);
        self.labels.len() < original_len
    }

    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.labels.iter()
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Extension id -> assigned status.
///
/// Entries for uninstalled extensions or closed categories are kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtensionStates {
    pub states: BTreeMap<String, String>,
}

impl ExtensionStates {
    pub fn new() -> Self {
        ExtensionStates {
            states: BTreeMap::new(),
        }
    }

    pub fn get(&self, extension_id: &str) -> Option<&str> {
        self.states.get(extension_id).map(String::as_str)
    }

    /// Blind overwrite of the extension's status
    pub fn assign(&mut self, extension_id: &str, status: &str) {
        self.states
            .insert(extension_id.to_string(), status.to_string());
    }
}

/// Trim the raw input and reject blank names
pub fn validate_category_name(raw: &str) -> Result<String, SyncError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(SyncError::EmptyCategoryName)
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_new() {
        let categories = Categories::new();
        assert!(categories.is_empty());
    }

    #[test]
    fn test_add_category_trims_input() {
        let mut categories = Categories::new();

        let added = categories.add("  Work  ").unwrap();

        assert_eq!(added, "Work");
        assert_eq!(categories.labels, vec!["Work".to_string()]);
    }

    #[test]
    fn test_add_empty_category() {
        let mut categories = Categories::new();

        assert_eq!(categories.add("   "), Err(SyncError::EmptyCategoryName));
        assert!(categories.is_empty());
    }

    #[test]
    fn test_add_duplicate_category() {
        let mut categories = Categories::from_labels(["Work"]);

        let result = categories.add("Work");

        assert_eq!(result, Err(SyncError::DuplicateCategory("Work".to_string())));
        assert_eq!(categories.len(), 1);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let mut categories = Categories::from_labels(["Work"]);

        assert!(categories.add("work").is_ok());
        assert_eq!(categories.len(), 2);
    }

    #[test]
    fn test_remove_category() {
        let mut categories = Categories::from_labels(["Work", "Play"]);

        assert!(categories.remove("Work"));
        assert!(!categories.remove("Work"));
        assert_eq!(categories.labels, vec!["Play".to_string()]);
    }

    #[test]
    fn test_from_labels_drops_duplicates() {
        let categories = Categories::from_labels(["a", "b", "a"]);
        assert_eq!(categories.labels, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_assign_overwrites() {
        let mut states = ExtensionStates::new();
        states.assign("ext-1", "work");
        states.assign("ext-1", "disabled");

        assert_eq!(states.get("ext-1"), Some("disabled"));
        assert_eq!(states.states.len(), 1);
    }

    #[test]
    fn test_serialized_shapes() {
        let categories = Categories::from_labels(["Work", "Play"]);
        let mut states = ExtensionStates::new();
        states.assign("ext-1", "work");

        assert_eq!(
            serde_json::to_value(&categories).unwrap(),
            serde_json::json!(["Work", "Play"])
        );
        assert_eq!(
            serde_json::to_value(&states).unwrap(),
            serde_json::json!({"ext-1": "work"})
        );
    }
}
