/// Data structures for Job Stash
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static whitespace pattern"));

/// The foreground browser tab, as reported by chrome.tabs
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ActiveTab {
    #[serde(default)]
    pub id: Option<i32>,
    #[serde(default)]
    pub url: Option<String>,
}

impl ActiveTab {
    pub fn new(id: i32, url: &str) -> ActiveTab {
        ActiveTab {
            id: Some(id),
            url: Some(url.to_string()),
        }
    }

    /// The tab URL, if it has a usable one
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Title and company scraped from a job listing page
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PageInfo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
}

impl PageInfo {
    /// Collapse whitespace runs and drop values that end up empty
    pub fn normalized(self) -> PageInfo {
        PageInfo {
            title: self.title.and_then(clean_text),
            company: self.company.and_then(clean_text),
        }
    }
}

fn clean_text(text: String) -> Option<String> {
    let collapsed = WHITESPACE_RUN.replace_all(text.trim(), " ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed.into_owned())
    }
}

/// One saved URL and everything the user has attached to it
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedRecord {
    pub url: String,
    #[serde(default)]
    pub applied: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub related_urls: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archived_at: Option<String>,
}

impl SavedRecord {
    /// A bare record, as the toolbar capture creates it
    pub fn new(url: String) -> SavedRecord {
        SavedRecord {
            url,
            ..SavedRecord::default()
        }
    }

    /// A record saved from the popup, stamped and enriched with page info
    pub fn saved(url: String, info: PageInfo, now: String) -> SavedRecord {
        SavedRecord {
            url,
            title: info.title,
            company: info.company,
            saved_at: Some(now),
            ..SavedRecord::default()
        }
    }

    /// An empty archive string means the record is still current
    pub fn is_archived(&self) -> bool {
        self.archived.as_deref().is_some_and(|reason| !reason.is_empty())
    }

    pub fn related(&self) -> &[String] {
        self.related_urls.as_deref().unwrap_or_default()
    }
}

/// Why a record was archived
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArchiveReason {
    MissedApplicationWindow,
    SkipOverqualified,
    SkipUnderqualified,
    PostingOther,
    NoResponse,
    NotGoodFit,
    RoleFilled,
    PositionClosed,
    RejectedAfterFirstInterview,
    RejectedAfterLaterInterview,
    Other,
}

impl ArchiveReason {
    /// Display order for the archive picker
    pub const ALL: [ArchiveReason; 11] = [
        ArchiveReason::MissedApplicationWindow,
        ArchiveReason::SkipOverqualified,
        ArchiveReason::SkipUnderqualified,
        ArchiveReason::PostingOther,
        ArchiveReason::NoResponse,
        ArchiveReason::NotGoodFit,
        ArchiveReason::RoleFilled,
        ArchiveReason::PositionClosed,
        ArchiveReason::RejectedAfterFirstInterview,
        ArchiveReason::RejectedAfterLaterInterview,
        ArchiveReason::Other,
    ];

    /// The stored string, which is also the label shown to the user
    pub fn label(self) -> &'static str {
        match self {
            ArchiveReason::MissedApplicationWindow => "JP - Missed Application Window",
            ArchiveReason::SkipOverqualified => "JP - Skip - Overqualified",
            ArchiveReason::SkipUnderqualified => "JP - Skip - Underqualified",
            ArchiveReason::PostingOther => "JP - Other",
            ArchiveReason::NoResponse => "Applied - No Response",
            ArchiveReason::NotGoodFit => "Applied - Email - Not Good Fit",
            ArchiveReason::RoleFilled => "Applied - Email - Role Filled",
            ArchiveReason::PositionClosed => "Applied - Position Closed",
            ArchiveReason::RejectedAfterFirstInterview => "Applied - Rejected after first interview",
            ArchiveReason::RejectedAfterLaterInterview => "Applied - Rejected after later interview",
            ArchiveReason::Other => "Other",
        }
    }

    pub fn from_label(label: &str) -> Option<ArchiveReason> {
        ArchiveReason::ALL
            .into_iter()
            .find(|reason| reason.label() == label)
    }
}

impl fmt::Display for ArchiveReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
