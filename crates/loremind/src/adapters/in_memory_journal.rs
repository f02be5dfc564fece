//! In-memory journal

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::adapters::JournalData;
use crate::domain::{errors::DomainError, MemoryDocument};
use crate::ports::MemoryStore;

/// Journal held in process memory
#[derive(Debug, Default)]
pub struct InMemoryJournal {
    data: RwLock<JournalData>,
    lookups: AtomicUsize,
}

impl InMemoryJournal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_documents(documents: Vec<MemoryDocument>) -> Self {
        Self::from_data(JournalData::from_documents(documents))
    }

    pub fn from_data(data: JournalData) -> Self {
        Self {
            data: RwLock::new(data),
            lookups: AtomicUsize::new(0),
        }
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> JournalData {
        self.read().clone()
    }

    /// Number of `find` calls served so far
    pub fn lookup_count(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn read(&self) -> RwLockReadGuard<'_, JournalData> {
        self.data.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, JournalData> {
        self.data.write().unwrap_or_else(|e| e.into_inner())
    }
}

impl MemoryStore for InMemoryJournal {
    fn find(&self, name: &str, folder: &str) -> Option<MemoryDocument> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.read().find(name, folder).cloned()
    }

    fn names_in(&self, folder: &str) -> Vec<String> {
        self.read().names_in(folder)
    }

    fn has_folder(&self, folder: &str) -> bool {
        self.read().has_folder(folder)
    }

    fn create_folder(&self, folder: &str) -> Result<(), DomainError> {
        self.write().create_folder(folder)
    }

    fn insert(&self, document: MemoryDocument) -> Result<(), DomainError> {
        self.write().insert(document)
    }
}
