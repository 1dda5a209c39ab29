/// Toolbar click handler: save the clicked tab's URL with no popup involved

use crate::canonical::canonical_url;
use crate::error::Result;
use crate::platform::RecordStore;
use crate::record::{ActiveTab, SavedRecord};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaptureOutcome {
    Saved(String),
    AlreadySaved(String),
    NoUrl,
    Failed,
}

/// Append the tab's URL to the stored collection unless it is already saved.
/// Storage failures are logged and reported as `Failed`, never returned.
pub async fn capture_tab<S: RecordStore>(store: &S, tab: &ActiveTab) -> CaptureOutcome {
    let Some(url) = tab.url() else {
        log::info!("No active tab URL found.");
        return CaptureOutcome::NoUrl;
    };
    let url = canonical_url(url);

    match append_if_missing(store, &url).await {
        Ok(true) => {
            log::info!("URL saved to chrome.storage.local: {}", url);
            CaptureOutcome::Saved(url)
        }
        Ok(false) => {
            log::info!("URL is already saved: {}", url);
            CaptureOutcome::AlreadySaved(url)
        }
        Err(e) => {
            log::error!("Error managing URLs: {}", e);
            CaptureOutcome::Failed
        }
    }
}

async fn append_if_missing<S: RecordStore>(store: &S, url: &str) -> Result<bool> {
    let mut data = store.load().await?;
    log::debug!("Existing records: {}", data.len());

    if !data.add_record(SavedRecord::new(url.to_string())) {
        return Ok(false);
    }
    store.store(&data).await?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::MemoryPlatform;
    use futures::executor::block_on;

    #[test]
    fn test_capture_appends_minimal_record() {
        let platform = MemoryPlatform::with_records(vec![SavedRecord::new("https://x.com/a".to_string())]);

        let outcome = block_on(capture_tab(&platform, &ActiveTab::new(3, "https://x.com/b?utm=1")));

        assert_eq!(outcome, CaptureOutcome::Saved("https://x.com/b".to_string()));
        let stored = platform.snapshot();
        assert_eq!(stored.len(), 2);
        assert_eq!(stored.records[1], SavedRecord::new("https://x.com/b".to_string()));
    }

    #[test]
    fn test_capture_skips_saved_url() {
        let mut owner = SavedRecord::new("https://x.com/a".to_string());
        owner.related_urls = Some(vec!["https://x.com/r".to_string()]);
        let platform = MemoryPlatform::with_records(vec![owner]);
        let before = platform.snapshot();

        let by_main = block_on(capture_tab(&platform, &ActiveTab::new(1, "https://x.com/a?x=1")));
        let by_related = block_on(capture_tab(&platform, &ActiveTab::new(1, "https://x.com/r")));

        assert_eq!(by_main, CaptureOutcome::AlreadySaved("https://x.com/a".to_string()));
        assert_eq!(by_related, CaptureOutcome::AlreadySaved("https://x.com/r".to_string()));
        assert_eq!(platform.snapshot(), before);
        assert_eq!(platform.stores.get(), 0);
    }

    #[test]
    fn test_capture_without_url() {
        let platform = MemoryPlatform::default();

        let outcome = block_on(capture_tab(&platform, &ActiveTab::default()));

        assert_eq!(outcome, CaptureOutcome::NoUrl);
        assert_eq!(platform.loads.get(), 0);
    }

    #[test]
    fn test_capture_swallows_storage_failure() {
        let platform = MemoryPlatform::with_records(vec![SavedRecord::new("https://x.com/a".to_string())]);
        platform.fail_store.set(true);
        let before = platform.snapshot();

        let outcome = block_on(capture_tab(&platform, &ActiveTab::new(1, "https://x.com/b")));

        assert_eq!(outcome, CaptureOutcome::Failed);
        assert_eq!(platform.snapshot(), before);
    }

    #[test]
    fn test_capture_load_failure() {
        let platform = MemoryPlatform::default();
        platform.fail_load.set(true);

        let outcome = block_on(capture_tab(&platform, &ActiveTab::new(1, "https://x.com/b")));

        assert_eq!(outcome, CaptureOutcome::Failed);
    }
}
