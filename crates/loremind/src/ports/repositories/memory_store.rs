//! Memory Store Port
//!
//! Abstract interface over the journal that holds NPC memory documents.
//! Lookups are synchronous and total: a missing document is `None`,
//! never an error.

use crate::domain::{errors::DomainError, MemoryDocument};

/// Repository interface for memory documents
pub trait MemoryStore: Send + Sync {
    /// Find the document named `name` inside `folder` (exact, case-sensitive)
    fn find(&self, name: &str, folder: &str) -> Option<MemoryDocument>;

    /// Names of all documents in `folder`, in store order
    fn names_in(&self, folder: &str) -> Vec<String>;

    /// Whether a folder with this name exists
    fn has_folder(&self, folder: &str) -> bool;

    /// Create an empty folder
    fn create_folder(&self, folder: &str) -> Result<(), DomainError>;

    /// Insert a new document; its folder must exist
    fn insert(&self, document: MemoryDocument) -> Result<(), DomainError>;
}
