/// Host service traits and typed access to the persisted keys

use crate::error::SyncError;
use crate::extension_data::ExtensionRecord;
use crate::storage::{CATEGORIES_KEY, Categories, EXTENSION_STATES_KEY, ExtensionStates};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Asynchronous key-value storage (chrome.storage.sync in the browser)
#[allow(async_fn_in_trait)]
pub trait KeyValueStore {
    /// `Ok(None)` when the key has never been written
    async fn get(&self, key: &str) -> Result<Option<Value>, SyncError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), SyncError>;
}

/// Asynchronous extension management (chrome.management in the browser)
#[allow(async_fn_in_trait)]
pub trait ExtensionManager {
    async fn get_all(&self) -> Result<Vec<ExtensionRecord>, SyncError>;

    async fn set_enabled(&self, extension_id: &str, enabled: bool) -> Result<(), SyncError>;

    /// Id of the extension hosting this popup; never shown on the board
    fn self_id(&self) -> String;
}

/// Typed access to `categories` and `extensionStates`.
///
/// The synchronizer never handles raw JSON; any [`KeyValueStore`] works,
/// chrome.storage in the browser and an in-memory map in tests.
pub struct Repository<S> {
    store: S,
}

impl<S: KeyValueStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Repository { store }
    }

    #[cfg(test)]
    pub fn store(&self) -> &S {
        &self.store
    }

    pub async fn categories(&self) -> Result<Categories, SyncError> {
        self.load(CATEGORIES_KEY).await
    }

    pub async fn save_categories(&self, categories: &Categories) -> Result<(), SyncError> {
        self.save(CATEGORIES_KEY, categories).await
    }

    pub async fn extension_states(&self) -> Result<ExtensionStates, SyncError> {
        self.load(EXTENSION_STATES_KEY).await
    }

    pub async fn save_extension_states(&self, states: &ExtensionStates) -> Result<(), SyncError> {
        self.save(EXTENSION_STATES_KEY, states).await
    }

    async fn load<T: DeserializeOwned + Default>(&self, key: &str) -> Result<T, SyncError> {
        match self.store.get(key).await? {
            None | Some(Value::Null) => Ok(T::default()),
            Some(value) => Ok(serde_json::from_value(value)?),
        }
    }

    async fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<(), SyncError> {
        let value = serde_json::to_value(value)?;
        self.store.set(key, value).await
    }
}
