//! JSON file journal
//!
//! Keeps folders and entries in one JSON file. Every lookup re-reads the
//! file so edits made outside the process are picked up immediately.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, error};

use crate::adapters::JournalData;
use crate::domain::{errors::DomainError, MemoryDocument};
use crate::ports::MemoryStore;

#[derive(Debug)]
pub struct JsonJournal {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonJournal {
    /// Open a journal file. A missing file is an empty journal; an
    /// unreadable one is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, DomainError> {
        let journal = Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        };
        journal.load()?;
        Ok(journal)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the whole journal from disk
    pub fn load(&self) -> Result<JournalData, DomainError> {
        if !self.path.exists() {
            return Ok(JournalData::default());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            DomainError::Repository(format!("Failed to read {}: {}", self.path.display(), e))
        })?;
        serde_json::from_str(&content).map_err(|e| {
            DomainError::Repository(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn save(&self, data: &JournalData) -> Result<(), DomainError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| {
                DomainError::Repository(format!("Failed to create {}: {}", dir.display(), e))
            })?;
        }

        let content = serde_json::to_string_pretty(data)
            .map_err(|e| DomainError::Repository(format!("Failed to serialize journal: {}", e)))?;
        fs::write(&self.path, content).map_err(|e| {
            DomainError::Repository(format!("Failed to write {}: {}", self.path.display(), e))
        })?;

        debug!(path = %self.path.display(), entries = data.entries.len(), "Journal saved");
        Ok(())
    }

    /// Lookups are total: a broken file reads as empty and is logged.
    fn load_or_empty(&self) -> JournalData {
        self.load().unwrap_or_else(|e| {
            error!(error = %e, "Journal unreadable, treating as empty");
            JournalData::default()
        })
    }

    fn update<F>(&self, change: F) -> Result<(), DomainError>
    where
        F: FnOnce(&mut JournalData) -> Result<(), DomainError>,
    {
        let _guard = self.write_lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut data = self.load()?;
        change(&mut data)?;
        self.save(&data)
    }
}

impl MemoryStore for JsonJournal {
    fn find(&self, name: &str, folder: &str) -> Option<MemoryDocument> {
        self.load_or_empty().find(name, folder).cloned()
    }

    fn names_in(&self, folder: &str) -> Vec<String> {
        self.load_or_empty().names_in(folder)
    }

    fn has_folder(&self, folder: &str) -> bool {
        self.load_or_empty().has_folder(folder)
    }

    fn create_folder(&self, folder: &str) -> Result<(), DomainError> {
        self.update(|data| data.create_folder(folder))
    }

    fn insert(&self, document: MemoryDocument) -> Result<(), DomainError> {
        self.update(|data| data.insert(document))
    }
}
