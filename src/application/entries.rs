//! Entry use cases: load with reset policy, add, replace, delete, show

use crate::domain::{EntryCollection, WorkWeek};
use crate::error::{BerichtsheftError, Result};
use crate::infrastructure::EntryStore;
use chrono::NaiveDate;
use log::warn;

/// What `append_entry` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendOutcome {
    /// No entry existed; the text became the entry
    Created,
    /// Text was added below the existing entry
    Appended,
    /// Text was blank; nothing was written
    Skipped,
}

/// Service for reading and changing daily entries.
///
/// Every operation loads the full collection from the store, changes it in
/// memory and saves it back.
pub struct EntryService<S: EntryStore> {
    store: S,
    warnings: Vec<String>,
}

impl<S: EntryStore> EntryService<S> {
    pub fn new(store: S) -> Self {
        EntryService {
            store,
            warnings: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Warnings collected since the last call, e.g. a store reset
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    /// Load all entries. A corrupt store is replaced by an empty one.
    pub fn load(&mut self) -> Result<EntryCollection> {
        match self.store.load() {
            Ok(entries) => Ok(entries),
            Err(BerichtsheftError::StorageCorrupt { reason, .. }) => {
                let location = self.store.location();
                warn!("resetting corrupt entry store {}: {}", location, reason);
                let entries = EntryCollection::new();
                self.store.save(&entries)?;
                self.warnings.push(format!(
                    "Warning: {} was not valid ({}). Starting with empty data.",
                    location, reason
                ));
                Ok(entries)
            }
            Err(e) => Err(e),
        }
    }

    /// Text stored for `date`
    pub fn entry(&mut self, date: NaiveDate) -> Result<Option<String>> {
        Ok(self.load()?.entry(date).map(|entry| entry.text))
    }

    /// Add text below the existing entry for `date`.
    /// Blank text is skipped without touching the store.
    pub fn append_entry(&mut self, date: NaiveDate, text: &str) -> Result<AppendOutcome> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(AppendOutcome::Skipped);
        }

        let mut entries = self.load()?;
        let had_text = entries
            .get(date)
            .is_some_and(|existing| !existing.trim().is_empty());
        entries.append(date, text);
        self.store.save(&entries)?;

        Ok(if had_text {
            AppendOutcome::Appended
        } else {
            AppendOutcome::Created
        })
    }

    /// Set the entry for `date` to `text`, discarding what was there.
    /// Blank text is rejected; use `delete_entry` instead.
    pub fn replace_entry(&mut self, date: NaiveDate, text: &str) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(BerichtsheftError::EmptyEntry(date));
        }

        let mut entries = self.load()?;
        entries.replace(date, text);
        self.store.save(&entries)
    }

    /// Remove the entry for `date`; returns whether one existed
    pub fn delete_entry(&mut self, date: NaiveDate) -> Result<bool> {
        let mut entries = self.load()?;
        let found = entries.remove(date);
        if found {
            self.store.save(&entries)?;
        }
        Ok(found)
    }

    /// Work week containing `date` with all entries
    pub fn week(&mut self, date: NaiveDate) -> Result<(WorkWeek, EntryCollection)> {
        Ok((WorkWeek::containing(date), self.load()?))
    }
}
