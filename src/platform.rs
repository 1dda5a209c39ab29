#![allow(async_fn_in_trait)]

/// Browser capabilities the controller and capture trigger depend on
///
/// `chrome::ChromePlatform` implements these over the extension APIs. The
/// traits are only ever used as generic bounds, never as trait objects, and
/// their futures are not `Send` because everything runs on the browser's
/// single event loop.

use crate::error::Result;
use crate::record::{ActiveTab, PageInfo};
use crate::storage::StorageData;

/// Whole-collection key/value storage
pub trait RecordStore {
    /// Read the collection. A missing slot is an empty collection.
    async fn load(&self) -> Result<StorageData>;

    /// Replace the stored collection in one write
    async fn store(&self, data: &StorageData) -> Result<()>;
}

pub trait TabSource {
    /// The foreground tab of the current window, if any
    async fn active_tab(&self) -> Result<Option<ActiveTab>>;
}

/// Runs the job listing scraper inside a tab
pub trait PageInfoExtractor {
    async fn extract(&self, tab_id: i32) -> Result<PageInfo>;
}

pub trait Clock {
    /// ISO-8601 timestamp for savedAt/appliedAt/archivedAt
    fn now(&self) -> String;
}

#[cfg(test)]
pub(crate) mod testing {
    use std::cell::{Cell, RefCell};

    use super::*;
    use crate::error::AppError;
    use crate::record::SavedRecord;

    pub const FIXED_NOW: &str = "2026-10-19T10:00:00.000Z";

    /// In-memory platform with switchable failures
    #[derive(Default)]
    pub struct MemoryPlatform {
        pub data: RefCell<StorageData>,
        pub tab: RefCell<Option<ActiveTab>>,
        pub page_info: RefCell<Option<PageInfo>>,
        pub fail_load: Cell<bool>,
        pub fail_store: Cell<bool>,
        pub fail_tabs: Cell<bool>,
        pub loads: Cell<usize>,
        pub stores: Cell<usize>,
        pub extractions: Cell<usize>,
    }

    impl MemoryPlatform {
        pub fn with_records(records: Vec<SavedRecord>) -> Self {
            MemoryPlatform {
                data: RefCell::new(StorageData::from_records(records)),
                ..MemoryPlatform::default()
            }
        }

        pub fn on_tab(self, url: &str) -> Self {
            *self.tab.borrow_mut() = Some(ActiveTab::new(1, url));
            self
        }

        pub fn with_page_info(self, title: &str, company: &str) -> Self {
            *self.page_info.borrow_mut() = Some(PageInfo {
                title: Some(title.to_string()),
                company: Some(company.to_string()),
            });
            self
        }

        pub fn snapshot(&self) -> StorageData {
            self.data.borrow().clone()
        }

        /// Simulates a write from another extension context
        pub fn write_behind(&self, record: SavedRecord) {
            self.data.borrow_mut().records.push(record);
        }
    }

    impl RecordStore for MemoryPlatform {
        async fn load(&self) -> Result<StorageData> {
            self.loads.set(self.loads.get() + 1);
            if self.fail_load.get() {
                return Err(AppError::Storage("load refused".to_string()));
            }
            Ok(self.data.borrow().clone())
        }

        async fn store(&self, data: &StorageData) -> Result<()> {
            if self.fail_store.get() {
                return Err(AppError::Storage("quota exceeded".to_string()));
            }
            self.stores.set(self.stores.get() + 1);
            *self.data.borrow_mut() = data.clone();
            Ok(())
        }
    }

    impl TabSource for MemoryPlatform {
        async fn active_tab(&self) -> Result<Option<ActiveTab>> {
            if self.fail_tabs.get() {
                return Err(AppError::Tabs("no window".to_string()));
            }
            Ok(self.tab.borrow().clone())
        }
    }

    impl PageInfoExtractor for MemoryPlatform {
        async fn extract(&self, _tab_id: i32) -> Result<PageInfo> {
            self.extractions.set(self.extractions.get() + 1);
            self.page_info
                .borrow()
                .clone()
                .ok_or_else(|| AppError::Extraction("selector not found".to_string()))
        }
    }

    impl Clock for MemoryPlatform {
        fn now(&self) -> String {
            FIXED_NOW.to_string()
        }
    }
}
