/// Pure projection from the stored collection to the rows the popup renders
///
/// Nothing in here touches storage or the DOM. The renderer in `ui` only
/// consumes [`RowView`] values, so everything worth testing about what the
/// list shows lives in this module.

use crate::canonical::canonical_url;
use crate::operations::sort_by_applied;
use crate::record::SavedRecord;
use crate::storage::StorageData;

/// Which tab of the popup list is showing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewFilter {
    #[default]
    Current,
    Archived,
}

impl ViewFilter {
    pub fn label(self) -> &'static str {
        match self {
            ViewFilter::Current => "Current",
            ViewFilter::Archived => "Archived",
        }
    }

    /// The tab a record belongs in
    pub fn for_record(record: &SavedRecord) -> ViewFilter {
        if record.is_archived() {
            ViewFilter::Archived
        } else {
            ViewFilter::Current
        }
    }

    pub fn matches(self, record: &SavedRecord) -> bool {
        ViewFilter::for_record(record) == self
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            ViewFilter::Current => "No saved URLs yet.",
            ViewFilter::Archived => "Nothing archived.",
        }
    }
}

/// Everything the renderer needs to draw one record
#[derive(Debug, Clone, PartialEq)]
pub struct RowView {
    pub url: String,
    pub label: String,
    pub applied: bool,
    pub notes: Option<String>,
    pub archived_reason: Option<String>,
    pub related_urls: Vec<String>,
    pub is_active: bool,
    pub dimmed: bool,
}

impl RowView {
    pub fn has_note(&self) -> bool {
        self.notes.is_some()
    }

    pub fn is_archived(&self) -> bool {
        self.archived_reason.is_some()
    }

    pub fn related_label(&self) -> String {
        match self.related_urls.len() {
            0 => "Related".to_string(),
            n => format!("Related ({})", n),
        }
    }

    pub fn note_tooltip(&self) -> &str {
        self.notes.as_deref().unwrap_or("Add note")
    }

    pub fn archive_tooltip(&self) -> String {
        match &self.archived_reason {
            Some(reason) => format!("Archived: {} (click to unarchive or change reason)", reason),
            None => "Archive".to_string(),
        }
    }
}

/// Aggregate counts for the footer
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub total: usize,
    pub applied: usize,
    pub archived: usize,
}

impl Summary {
    pub fn of(data: &StorageData) -> Summary {
        data.records.iter().fold(Summary::default(), |mut summary, record| {
            summary.total += 1;
            summary.applied += usize::from(record.applied);
            summary.archived += usize::from(record.is_archived());
            summary
        })
    }
}

/// Link text: "company - title" when both are known, else title, else the URL
pub fn display_label(record: &SavedRecord) -> String {
    match (&record.company, &record.title) {
        (Some(company), Some(title)) => format!("{} - {}", company, title),
        (_, Some(title)) => title.clone(),
        _ => record.url.clone(),
    }
}

/// Whether the record is the one open in the foreground tab
pub fn is_active_record(record: &SavedRecord, active_url: Option<&str>) -> bool {
    let Some(active) = active_url else {
        return false;
    };
    let key = canonical_url(active);
    canonical_url(&record.url) == key
        || record.related().iter().any(|related| canonical_url(related) == key)
}

/// Filter by view, order unapplied first, and build one row per record
pub fn project_rows(data: &StorageData, filter: ViewFilter, active_url: Option<&str>) -> Vec<RowView> {
    let visible = data.records.iter().filter(|record| filter.matches(record));

    sort_by_applied(visible)
        .into_iter()
        .map(|record| {
            let is_active = is_active_record(record, active_url);
            let archived = record.is_archived();
            RowView {
                url: record.url.clone(),
                label: display_label(record),
                applied: record.applied,
                notes: record.notes.clone(),
                archived_reason: archived.then(|| record.archived.clone().unwrap_or_default()),
                related_urls: record.related().to_vec(),
                is_active,
                dimmed: archived && !is_active,
            }
        })
        .collect()
}
