/// The persisted record collection stored under chrome.storage.local

use crate::canonical::{canonical_url, same_url};
use crate::record::SavedRecord;
use serde::{Deserialize, Deserializer, Serialize};

/// Root storage structure, serialized as a plain array of records
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct StorageData {
    #[serde(deserialize_with = "deserialize_records")]
    pub records: Vec<SavedRecord>,
}

/// Older versions stored bare URL strings under the same key
#[derive(Deserialize)]
#[serde(untagged)]
enum StoredEntry {
    Record(SavedRecord),
    Url(String),
}

fn deserialize_records<'de, D>(deserializer: D) -> Result<Vec<SavedRecord>, D::Error>
where
    D: Deserializer<'de>,
{
    let entries = Vec::<StoredEntry>::deserialize(deserializer)?;
    let mut data = StorageData::new();
    for entry in entries {
        match entry {
            StoredEntry::Record(record) => data.records.push(record),
            StoredEntry::Url(url) => {
                data.add_record(SavedRecord::new(canonical_url(&url)));
            }
        }
    }
    Ok(data.records)
}

impl StorageData {
    pub fn new() -> Self {
        StorageData {
            records: Vec::new(),
        }
    }

    pub fn from_records(records: Vec<SavedRecord>) -> Self {
        StorageData { records }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// True if the URL is saved either as a record URL or as a related URL
    pub fn contains_url(&self, url: &str) -> bool {
        self.find_containing(url).is_some()
    }

    /// The record whose main URL or related URLs match
    pub fn find_containing(&self, url: &str) -> Option<&SavedRecord> {
        let key = canonical_url(url);
        self.records.iter().find(|record| {
            canonical_url(&record.url) == key
                || record.related().iter().any(|related| canonical_url(related) == key)
        })
    }

    pub fn get_record(&self, url: &str) -> Option<&SavedRecord> {
        self.records.iter().find(|record| same_url(&record.url, url))
    }

    pub fn get_record_mut(&mut self, url: &str) -> Option<&mut SavedRecord> {
        self.records.iter_mut().find(|record| same_url(&record.url, url))
    }

    /// Append a record unless its URL is already saved anywhere
    pub fn add_record(&mut self, record: SavedRecord) -> bool {
        if record.url.is_empty() || self.contains_url(&record.url) {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn remove_record(&mut self, url: &str) -> bool {
        let original_len = self.records.len();
        self.records.retain(|record| !same_url(&record.url, url));
        self.records.len() < original_len
    }
}

impl Default for StorageData {
    fn default() -> Self {
        Self::new()
    }
}
