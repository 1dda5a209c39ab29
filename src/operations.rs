/// Record operations: applied flag, notes, related URLs, archiving, ordering

use crate::canonical::{canonical_url, same_url};
use crate::record::{ArchiveReason, SavedRecord};
use crate::storage::StorageData;

/// Flip `applied` on the matching record. Returns false if no record matched.
pub fn toggle_applied(data: &mut StorageData, url: &str, now: &str) -> bool {
    data.get_record_mut(url)
        .map(|record| {
            record.applied = !record.applied;
            record.applied_at = record.applied.then(|| now.to_string());
        })
        .is_some()
}

/// Store the trimmed note, or clear it when nothing is left after trimming
pub fn set_note(data: &mut StorageData, url: &str, text: &str) -> bool {
    data.get_record_mut(url)
        .map(|record| {
            let trimmed = text.trim();
            record.notes = (!trimmed.is_empty()).then(|| trimmed.to_string());
        })
        .is_some()
}

/// Append a related URL in canonical form unless it is already listed
pub fn add_related_url(data: &mut StorageData, url: &str, related: &str) -> bool {
    let related = canonical_url(related);
    if related.is_empty() {
        return false;
    }

    match data.get_record_mut(url) {
        Some(record) => {
            let list = record.related_urls.get_or_insert_with(Vec::new);
            if list.iter().any(|existing| same_url(existing, &related)) {
                return false;
            }
            list.push(related);
            true
        }
        None => false,
    }
}

/// Remove one related URL by exact match
pub fn remove_related_url(data: &mut StorageData, url: &str, related: &str) -> bool {
    let Some(record) = data.get_record_mut(url) else {
        return false;
    };
    let Some(list) = record.related_urls.as_mut() else {
        return false;
    };

    match list.iter().position(|existing| existing == related) {
        Some(index) => {
            list.remove(index);
            true
        }
        None => false,
    }
}

/// Archive with a reason. Archiving an archived record updates its reason.
pub fn archive(data: &mut StorageData, url: &str, reason: ArchiveReason, now: &str) -> bool {
    data.get_record_mut(url)
        .map(|record| {
            record.archived = Some(reason.label().to_string());
            record.archived_at = Some(now.to_string());
        })
        .is_some()
}

pub fn unarchive(data: &mut StorageData, url: &str) -> bool {
    data.get_record_mut(url)
        .map(|record| {
            record.archived = Some(String::new());
            record.archived_at = None;
        })
        .is_some()
}

/// Unapplied records first. Stable, so save order holds within each group.
pub fn sort_by_applied<'a>(records: impl IntoIterator<Item = &'a SavedRecord>) -> Vec<&'a SavedRecord> {
    let mut sorted: Vec<&SavedRecord> = records.into_iter().collect();
    sorted.sort_by_key(|record| record.applied);
    sorted
}
