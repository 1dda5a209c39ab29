/// chrome.* extension APIs behind the platform traits

use wasm_bindgen::prelude::*;

use crate::config::{EXPORT_FILE_PREFIX, STORAGE_KEY};
use crate::error::{AppError, Result};
use crate::platform::{Clock, PageInfoExtractor, RecordStore, TabSource};
use crate::record::{ActiveTab, PageInfo};
use crate::storage::StorageData;

// Import JS bridge functions
#[wasm_bindgen(module = "/bridge.js")]
extern "C" {
    #[wasm_bindgen(catch)]
    async fn getActiveTab() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn getStorage(key: &str) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(catch)]
    async fn setStorage(key: &str, value: JsValue) -> Result<(), JsValue>;

    #[wasm_bindgen(catch)]
    async fn extractPageInfo(tab_id: i32) -> Result<JsValue, JsValue>;

    fn exportToFile(data: &str, filename: &str);
}

/// The real browser, as seen from the popup or the background worker
#[derive(Debug, Clone, Copy, Default)]
pub struct ChromePlatform;

impl RecordStore for ChromePlatform {
    async fn load(&self) -> Result<StorageData> {
        let storage_js = getStorage(STORAGE_KEY)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to get storage: {:?}", e)))?;

        if storage_js.is_null() || storage_js.is_undefined() {
            Ok(StorageData::new())
        } else {
            serde_wasm_bindgen::from_value(storage_js)
                .map_err(|e| AppError::Serialization(format!("Failed to parse storage: {:?}", e)))
        }
    }

    async fn store(&self, data: &StorageData) -> Result<()> {
        let storage_js = serde_wasm_bindgen::to_value(data)
            .map_err(|e| AppError::Serialization(format!("Failed to serialize storage: {:?}", e)))?;

        setStorage(STORAGE_KEY, storage_js)
            .await
            .map_err(|e| AppError::Storage(format!("Failed to save storage: {:?}", e)))
    }
}

impl TabSource for ChromePlatform {
    async fn active_tab(&self) -> Result<Option<ActiveTab>> {
        let tab_js = getActiveTab()
            .await
            .map_err(|e| AppError::Tabs(format!("{:?}", e)))?;

        if tab_js.is_null() || tab_js.is_undefined() {
            return Ok(None);
        }
        serde_wasm_bindgen::from_value(tab_js)
            .map(Some)
            .map_err(|e| AppError::Tabs(format!("Failed to parse tab: {:?}", e)))
    }
}

impl PageInfoExtractor for ChromePlatform {
    async fn extract(&self, tab_id: i32) -> Result<PageInfo> {
        let info_js = extractPageInfo(tab_id)
            .await
            .map_err(|e| AppError::Extraction(format!("Script injection failed: {:?}", e)))?;

        if info_js.is_null() || info_js.is_undefined() {
            return Err(AppError::Extraction("No result from page".to_string()));
        }
        serde_wasm_bindgen::from_value(info_js)
            .map_err(|e| AppError::Extraction(format!("Failed to parse page info: {:?}", e)))
    }
}

impl Clock for ChromePlatform {
    fn now(&self) -> String {
        js_sys::Date::new_0().to_iso_string().into()
    }
}

/// Hand a JSON export to the browser's download machinery
pub fn download_export(json: &str) {
    let filename = format!("{}-{}.json", EXPORT_FILE_PREFIX, js_sys::Date::now() as i64);
    exportToFile(json, &filename);
}
