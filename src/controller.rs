/// Popup list controller
///
/// Every operation re-reads the whole collection, applies one change, writes
/// the whole collection back when something changed, and returns a fresh
/// projection. The copy kept in `loaded` only feeds rendering and view
/// switches; it is never the base of a write.

use std::cell::{Cell, RefCell};

use crate::canonical::{canonical_url, is_job_listing};
use crate::error::{AppError, Result};
use crate::operations;
use crate::platform::{Clock, PageInfoExtractor, RecordStore, TabSource};
use crate::record::{ActiveTab, ArchiveReason, PageInfo, SavedRecord};
use crate::storage::StorageData;
use crate::view::{RowView, Summary, ViewFilter, project_rows};

/// What the popup renders after an operation
#[derive(Debug, Clone, PartialEq)]
pub struct ListSnapshot {
    pub view: ViewFilter,
    pub rows: Vec<RowView>,
    pub summary: Summary,
}

impl ListSnapshot {
    pub fn active_row(&self) -> Option<&RowView> {
        self.rows.iter().find(|row| row.is_active)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    AlreadySaved,
    NoTab,
}

impl SaveOutcome {
    /// Whether the save button should flash its "saved" state
    pub fn shows_saved(self) -> bool {
        matches!(self, SaveOutcome::Saved | SaveOutcome::AlreadySaved)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Initialized {
    /// The foreground tab is already in the collection
    pub already_saved: bool,
    pub list: ListSnapshot,
}

pub struct ListController<P> {
    platform: P,
    view: Cell<ViewFilter>,
    active_url: RefCell<Option<String>>,
    loaded: RefCell<StorageData>,
}

impl<P> ListController<P>
where
    P: RecordStore + TabSource + PageInfoExtractor + Clock,
{
    pub fn new(platform: P) -> Self {
        ListController {
            platform,
            view: Cell::new(ViewFilter::default()),
            active_url: RefCell::new(None),
            loaded: RefCell::new(StorageData::new()),
        }
    }

    pub fn view(&self) -> ViewFilter {
        self.view.get()
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Popup opened: find the foreground tab and jump to its record if saved
    pub async fn initialize(&self) -> Result<Initialized> {
        let tab = self.resolve_active_tab().await;
        let data = self.platform.load().await?;

        let owner_view = self
            .active_url
            .borrow()
            .as_deref()
            .and_then(|url| data.find_containing(url))
            .map(ViewFilter::for_record);

        if let Some(view) = owner_view {
            log::info!("Active tab is already saved, showing {} view", view.label());
            self.view.set(view);
        } else if tab.is_none() {
            log::debug!("Popup opened without an active tab URL");
        }

        self.replace_loaded(data);
        Ok(Initialized {
            already_saved: owner_view.is_some(),
            list: self.snapshot(),
        })
    }

    /// Reload from storage and project
    pub async fn refresh(&self) -> Result<ListSnapshot> {
        let data = self.platform.load().await?;
        self.replace_loaded(data);
        Ok(self.snapshot())
    }

    pub async fn save_current_tab(&self) -> Result<(SaveOutcome, ListSnapshot)> {
        let Some(tab) = self.resolve_active_tab().await else {
            log::info!("No active tab URL found.");
            return Ok((SaveOutcome::NoTab, self.snapshot()));
        };
        let url = canonical_url(tab.url().unwrap_or_default());

        let existing = self.platform.load().await?;
        if existing.contains_url(&url) {
            log::info!("URL is already saved: {}", url);
            self.replace_loaded(existing);
            return Ok((SaveOutcome::AlreadySaved, self.snapshot()));
        }

        let info = self.page_info_for(&tab, &url).await;
        let record = SavedRecord::saved(url.clone(), info, self.platform.now());

        // The extraction above awaited, so membership is checked again on a fresh read
        let added = self.mutate(|data| data.add_record(record)).await?;
        let outcome = if added {
            log::info!("URL saved: {}", url);
            SaveOutcome::Saved
        } else {
            SaveOutcome::AlreadySaved
        };
        Ok((outcome, self.snapshot()))
    }

    pub async fn toggle_applied(&self, url: &str) -> Result<ListSnapshot> {
        let now = self.platform.now();
        self.mutate(|data| operations::toggle_applied(data, url, &now)).await?;
        Ok(self.snapshot())
    }

    pub async fn delete(&self, url: &str) -> Result<ListSnapshot> {
        if !self.mutate(|data| data.remove_record(url)).await? {
            log::debug!("Nothing to delete for {}", url);
        }
        Ok(self.snapshot())
    }

    pub async fn edit_note(&self, url: &str, text: &str) -> Result<ListSnapshot> {
        self.mutate(|data| operations::set_note(data, url, text)).await?;
        Ok(self.snapshot())
    }

    pub async fn add_related_url(&self, url: &str, related: &str) -> Result<ListSnapshot> {
        if !self
            .mutate(|data| operations::add_related_url(data, url, related))
            .await?
        {
            log::debug!("Related URL {} already listed or invalid", related);
        }
        Ok(self.snapshot())
    }

    pub async fn remove_related_url(&self, url: &str, related: &str) -> Result<ListSnapshot> {
        self.mutate(|data| operations::remove_related_url(data, url, related))
            .await?;
        Ok(self.snapshot())
    }

    /// Archive (or change the reason) and follow the record to the archived tab
    pub async fn archive(&self, url: &str, reason: ArchiveReason) -> Result<ListSnapshot> {
        let now = self.platform.now();
        if self
            .mutate(|data| operations::archive(data, url, reason, &now))
            .await?
        {
            self.view.set(ViewFilter::Archived);
        }
        Ok(self.snapshot())
    }

    pub async fn unarchive(&self, url: &str) -> Result<ListSnapshot> {
        if self.mutate(|data| operations::unarchive(data, url)).await? {
            self.view.set(ViewFilter::Current);
        }
        Ok(self.snapshot())
    }

    /// Change tabs without touching storage
    pub fn switch_view(&self, view: ViewFilter) -> ListSnapshot {
        self.view.set(view);
        self.snapshot()
    }

    /// Pretty JSON of the stored collection, read fresh
    pub async fn export_json(&self) -> Result<String> {
        let data = self.platform.load().await?;
        serde_json::to_string_pretty(&data).map_err(|e| AppError::Serialization(e.to_string()))
    }

    pub fn snapshot(&self) -> ListSnapshot {
        let loaded = self.loaded.borrow();
        ListSnapshot {
            view: self.view.get(),
            rows: project_rows(&loaded, self.view.get(), self.active_url.borrow().as_deref()),
            summary: Summary::of(&loaded),
        }
    }

    /// Read, apply, and write back only if `apply` reports a change
    async fn mutate<F>(&self, apply: F) -> Result<bool>
    where
        F: FnOnce(&mut StorageData) -> bool,
    {
        let mut data = self.platform.load().await?;
        let changed = apply(&mut data);
        if changed {
            self.platform.store(&data).await?;
        }
        self.replace_loaded(data);
        Ok(changed)
    }

    fn replace_loaded(&self, data: StorageData) {
        *self.loaded.borrow_mut() = data;
    }

    /// Query the foreground tab and remember its URL for highlighting
    async fn resolve_active_tab(&self) -> Option<ActiveTab> {
        let tab = match self.platform.active_tab().await {
            Ok(tab) => tab,
            Err(e) => {
                log::warn!("Could not query the active tab: {}", e);
                None
            }
        };
        let tab = tab.filter(|tab| tab.url().is_some());
        *self.active_url.borrow_mut() = tab.as_ref().and_then(|tab| tab.url()).map(canonical_url);
        tab
    }

    async fn page_info_for(&self, tab: &ActiveTab, url: &str) -> PageInfo {
        if !is_job_listing(url) {
            return PageInfo::default();
        }
        let Some(tab_id) = tab.id else {
            return PageInfo::default();
        };

        match self.platform.extract(tab_id).await {
            Ok(info) => info.normalized(),
            Err(e) => {
                log::warn!("Saving without job details: {}", e);
                PageInfo::default()
            }
        }
    }
}
