//! Daily entries and the date-keyed collection that holds them

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The free-text report for one calendar date
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub date: NaiveDate,
    pub text: String,
}

impl Entry {
    pub fn new(date: NaiveDate, text: impl Into<String>) -> Self {
        Entry {
            date,
            text: text.into(),
        }
    }
}

/// All entries, keyed by date.
///
/// Serializes as a flat JSON object of ISO `YYYY-MM-DD` keys to text, so a
/// key that is not a calendar date fails deserialization.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryCollection {
    entries: BTreeMap<NaiveDate, String>,
}

impl EntryCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Text stored for `date`, if any
    pub fn get(&self, date: NaiveDate) -> Option<&str> {
        self.entries.get(&date).map(String::as_str)
    }

    /// Text stored for `date`, or the empty string
    pub fn text_or_empty(&self, date: NaiveDate) -> &str {
        self.get(date).unwrap_or("")
    }

    /// Entry for `date`, if any
    pub fn entry(&self, date: NaiveDate) -> Option<Entry> {
        self.get(date).map(|text| Entry::new(date, text))
    }

    /// Set the text for `date`, returning the text it replaced
    pub fn replace(&mut self, date: NaiveDate, text: impl Into<String>) -> Option<String> {
        self.entries.insert(date, text.into())
    }

    /// Add `text` below whatever is already stored for `date`
    pub fn append(&mut self, date: NaiveDate, text: &str) {
        let combined = match self.get(date).map(str::trim).filter(|e| !e.is_empty()) {
            Some(existing) => format!("{}\n{}", existing, text),
            None => text.to_string(),
        };
        self.entries.insert(date, combined);
    }

    /// Remove the entry for `date`; returns whether one existed
    pub fn remove(&mut self, date: NaiveDate) -> bool {
        self.entries.remove(&date).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_replace_overwrites_existing_text() {
        let mut entries = EntryCollection::new();
        assert_eq!(entries.replace(date(2024, 6, 3), "first"), None);
        assert_eq!(
            entries.replace(date(2024, 6, 3), "second"),
            Some("first".to_string())
        );
        assert_eq!(entries.get(date(2024, 6, 3)), Some("second"));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_append_to_missing_entry() {
        let mut entries = EntryCollection::new();
        entries.append(date(2024, 6, 3), "Worked on X");
        assert_eq!(entries.get(date(2024, 6, 3)), Some("Worked on X"));
    }

    #[test]
    fn test_append_joins_with_newline() {
        let mut entries = EntryCollection::new();
        entries.replace(date(2024, 6, 3), "Morning: X\n");
        entries.append(date(2024, 6, 3), "Afternoon: Y");
        assert_eq!(entries.get(date(2024, 6, 3)), Some("Morning: X\nAfternoon: Y"));
    }

    #[test]
    fn test_append_over_blank_entry_replaces_it() {
        let mut entries = EntryCollection::new();
        entries.replace(date(2024, 6, 3), "   ");
        entries.append(date(2024, 6, 3), "Y");
        assert_eq!(entries.get(date(2024, 6, 3)), Some("Y"));
    }

    #[test]
    fn test_remove_reports_found() {
        let mut entries = EntryCollection::new();
        entries.replace(date(2024, 6, 3), "X");
        assert!(entries.remove(date(2024, 6, 3)));
        assert!(entries.is_empty());
    }

    #[test]
    fn test_remove_missing_leaves_collection_unchanged() {
        let mut entries = EntryCollection::new();
        entries.replace(date(2024, 6, 3), "X");
        let before = entries.clone();
        assert!(!entries.remove(date(2024, 6, 4)));
        assert_eq!(entries, before);
    }

    #[test]
    fn test_text_or_empty() {
        let mut entries = EntryCollection::new();
        entries.replace(date(2024, 6, 3), "X");
        assert_eq!(entries.text_or_empty(date(2024, 6, 3)), "X");
        assert_eq!(entries.text_or_empty(date(2024, 6, 4)), "");
    }


    #[test]
    fn test_entry_lookup() {
        let mut entries = EntryCollection::new();
        entries.replace(date(2024, 6, 3), "X");
        assert_eq!(
            entries.entry(date(2024, 6, 3)),
            Some(Entry::new(date(2024, 6, 3), "X"))
        );
        assert_eq!(entries.entry(date(2024, 6, 4)), None);
    }

    #[test]
    fn test_serializes_as_flat_iso_object() {
        let mut entries = EntryCollection::new();
        entries.replace(date(2024, 6, 3), "Prüfung vorbereitet");
        let json = serde_json::to_string(&entries).unwrap();
        assert_eq!(json, r#"{"2024-06-03":"Prüfung vorbereitet"}"#);
    }

    #[test]
    fn test_deserialize_rejects_non_date_keys() {
        let result: Result<EntryCollection, _> = serde_json::from_str(r#"{"monday":"X"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_deserialize_rejects_impossible_dates() {
        let result: Result<EntryCollection, _> = serde_json::from_str(r#"{"2024-02-30":"X"}"#);
        assert!(result.is_err());
    }
}
