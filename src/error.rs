/// Error type shared by the repository, the chrome bridge and the synchronizer

use thiserror::Error;

/// Errors surfaced to the popup as transient messages.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SyncError {
    /// The key-value store rejected a read or write.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The extension management service rejected a request.
    #[error("Extension management error: {0}")]
    Management(String),

    /// A stored or bridged value had an unexpected shape.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The new category input was blank.
    #[error("Please enter a category name.")]
    EmptyCategoryName,

    /// A category with the exact same label is already persisted.
    #[error("Category already exists.")]
    DuplicateCategory(String),
}

impl SyncError {
    /// Validation failures are shown to the user but never logged.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            SyncError::EmptyCategoryName | SyncError::DuplicateCategory(_)
        )
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_errors() {
        assert!(SyncError::EmptyCategoryName.is_user_error());
        assert!(SyncError::DuplicateCategory("Work".into()).is_user_error());
        assert!(!SyncError::Storage("quota".into()).is_user_error());
        assert!(!SyncError::Management("denied".into()).is_user_error());
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            SyncError::DuplicateCategory("Work".into()).to_string(),
            "Category already exists."
        );
        assert_eq!(
            SyncError::EmptyCategoryName.to_string(),
            "Please enter a category name."
        );
        assert_eq!(
            SyncError::Storage("QUOTA_BYTES exceeded".into()).to_string(),
            "Storage error: QUOTA_BYTES exceeded"
        );
    }
}
