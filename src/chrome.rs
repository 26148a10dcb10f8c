/// chrome.storage.sync / chrome.management implementations of the service traits

use crate::error::SyncError;
use crate::extension_data::ExtensionRecord;
use crate::repository::{ExtensionManager, KeyValueStore};
use serde_json::Value;
use wasm_bindgen::prelude::*;

// Import JS bridge functions
#[wasm_bindgen(module = "/popup.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn getAllExtensions() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setExtensionEnabled(id: &str, enabled: bool) -> Result<(), JsValue>;

    fn getSelfId() -> String;
}

/// chrome.storage.sync
#[derive(Clone, Copy, Default)]
pub struct ChromeStorage;

impl KeyValueStore for ChromeStorage {
    async fn get(&self, key: &str) -> Result<Option<Value>, SyncError> {
        let value_js = getStorage(key)
            .await
            .map_err(|e| SyncError::Storage(format!("{:?}", e)))?;

        if value_js.is_null() || value_js.is_undefined() {
            return Ok(None);
        }

        serde_wasm_bindgen::from_value(value_js)
            .map(Some)
            .map_err(|e| SyncError::Serialization(format!("{:?}", e)))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), SyncError> {
        // Maps must become plain objects, not JS Map instances
        let serializer = serde_wasm_bindgen::Serializer::json_compatible();
        let value_js = serde::Serialize::serialize(&value, &serializer)
            .map_err(|e| SyncError::Serialization(format!("{:?}", e)))?;

        setStorage(key, value_js)
            .await
            .map_err(|e| SyncError::Storage(format!("{:?}", e)))
    }
}

/// chrome.management
#[derive(Clone, Copy, Default)]
pub struct ChromeManagement;

impl ExtensionManager for ChromeManagement {
    async fn get_all(&self) -> Result<Vec<ExtensionRecord>, SyncError> {
        let extensions_js = getAllExtensions()
            .await
            .map_err(|e| SyncError::Management(format!("{:?}", e)))?;

        serde_wasm_bindgen::from_value(extensions_js)
            .map_err(|e| SyncError::Serialization(format!("Failed to parse extensions: {:?}", e)))
    }

    async fn set_enabled(&self, extension_id: &str, enabled: bool) -> Result<(), SyncError> {
        setExtensionEnabled(extension_id, enabled)
            .await
            .map_err(|e| SyncError::Management(format!("{:?}", e)))
    }

    fn self_id(&self) -> String {
        getSelfId()
    }
}
