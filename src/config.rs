/// Compile-time settings for the extension
use std::time::Duration;

/// chrome.storage.local key holding the saved record array
pub const STORAGE_KEY: &str = "urls";

/// Path segment that marks a job listing page worth scraping
pub const JOB_LISTING_MARKER: &str = "/jobs/";

/// How long the save button shows its "saved" state
pub const SAVED_LABEL_RESET: Duration = Duration::from_secs(2);

pub const SAVE_LABEL: &str = "Save current tab";
pub const SAVED_LABEL: &str = "Saved ✓";
pub const ALREADY_SAVED_LABEL: &str = "Already saved";

/// Inline message shown in place of the list on any storage failure
pub const LOAD_ERROR_MESSAGE: &str = "Error loading URLs.";

pub const EXPORT_FILE_PREFIX: &str = "job-stash-export";
