//! Entry persistence

use crate::domain::EntryCollection;
use crate::error::{BerichtsheftError, Result};
use log::debug;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

/// Storage for the full entry collection.
///
/// Every save replaces the stored collection wholesale. There is no locking:
/// with two writers the last save wins.
pub trait EntryStore {
    /// Human-readable location, used in messages
    fn location(&self) -> String;

    /// Load the stored collection.
    ///
    /// Missing or blank storage is initialised with an empty collection,
    /// so the store exists after the first load. Content that is not a
    /// valid date-to-text mapping fails with `StorageCorrupt`.
    fn load(&self) -> Result<EntryCollection>;

    /// Replace the stored collection
    fn save(&self, entries: &EntryCollection) -> Result<()>;
}

/// Serialize as indented JSON with non-ASCII text kept literal
pub fn serialize_entries(entries: &EntryCollection) -> Result<String> {
    let mut json = serde_json::to_string_pretty(entries)?;
    json.push('\n');
    Ok(json)
}

/// Parse stored content; `None` when there is nothing stored yet
fn parse_entries(content: &str, location: &str) -> Result<Option<EntryCollection>> {
    if content.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(content)
        .map(Some)
        .map_err(|e| BerichtsheftError::StorageCorrupt {
            path: PathBuf::from(location),
            reason: e.to_string(),
        })
}

/// JSON file on disk
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        JsonFileStore { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_file()
    }
}

impl EntryStore for JsonFileStore {
    fn location(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<EntryCollection> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => String::new(),
            Err(e) => return Err(BerichtsheftError::Io(e)),
        };

        match parse_entries(&content, &self.location())? {
            Some(entries) => {
                debug!("loaded {} entries from {}", entries.len(), self.location());
                Ok(entries)
            }
            None => {
                debug!("initialising empty entry store at {}", self.location());
                let entries = EntryCollection::new();
                self.save(&entries)?;
                Ok(entries)
            }
        }
    }

    /// Write to a sibling temp file, then rename it over the target
    fn save(&self, entries: &EntryCollection) -> Result<()> {
        let json = serialize_entries(entries)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp_name = format!(
            "{}.tmp-{}",
            self.path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("data.json"),
            std::process::id()
        );
        let tmp_path = self.path.with_file_name(tmp_name);

        fs::write(&tmp_path, json)?;

        if let Err(e) = replace_file(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }
        debug!("saved {} entries to {}", entries.len(), self.location());
        Ok(())
    }
}

fn replace_file(from: &Path, to: &Path) -> std::io::Result<()> {
    // rename does not replace an existing file on Windows
    #[cfg(windows)]
    {
        if to.exists() {
            fs::remove_file(to)?;
        }
    }

    fs::rename(from, to)
}

/// In-process store holding the serialized form, for tests and embedding
#[derive(Debug, Default)]
pub struct MemoryStore {
    content: RefCell<Option<String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with raw content, valid or not
    pub fn with_content(content: impl Into<String>) -> Self {
        MemoryStore {
            content: RefCell::new(Some(content.into())),
        }
    }

    /// Raw stored content, `None` until the first save
    pub fn content(&self) -> Option<String> {
        self.content.borrow().clone()
    }
}

impl EntryStore for MemoryStore {
    fn location(&self) -> String {
        "<memory>".to_string()
    }

    fn load(&self) -> Result<EntryCollection> {
        let content = self.content().unwrap_or_default();
        match parse_entries(&content, &self.location())? {
            Some(entries) => Ok(entries),
            None => {
                let entries = EntryCollection::new();
                self.save(&entries)?;
                Ok(entries)
            }
        }
    }

    fn save(&self, entries: &EntryCollection) -> Result<()> {
        let json = serialize_entries(entries)?;
        *self.content.borrow_mut() = Some(json);
        Ok(())
    }
}
