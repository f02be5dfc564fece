//! Memory Resolver - Persona background lookup
//!
//! Reads the memory journal of a persona from the `NPC Memories` folder.
//! Always re-reads the store; nothing is cached.

use tracing::debug;

use crate::domain::MEMORY_FOLDER;
use crate::ports::MemoryStore;

/// Result of a memory lookup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MemoryLookup {
    /// No persona was named; the store was not consulted
    NoPersona,
    /// The persona has no memory journal
    NotFound,
    /// Joined page texts of the persona's journal
    Found(String),
}

impl MemoryLookup {
    /// Memory text, empty unless a journal was found
    pub fn text(&self) -> &str {
        match self {
            MemoryLookup::Found(text) => text,
            _ => "",
        }
    }

    pub fn into_text(self) -> String {
        match self {
            MemoryLookup::Found(text) => text,
            _ => String::new(),
        }
    }
}

/// Look up the memory journal for `persona`
pub fn resolve(persona: Option<&str>, store: &dyn MemoryStore) -> MemoryLookup {
    let Some(name) = persona.filter(|n| !n.is_empty()) else {
        return MemoryLookup::NoPersona;
    };

    match store.find(name, MEMORY_FOLDER) {
        Some(document) => {
            debug!(persona = %name, pages = document.pages.len(), "Loaded persona memory");
            MemoryLookup::Found(document.joined_text())
        }
        None => {
            debug!(persona = %name, folder = MEMORY_FOLDER, "No memory entry found");
            MemoryLookup::NotFound
        }
    }
}

/// Memory text for `persona`, or an empty string
pub fn resolve_memory(persona: Option<&str>, store: &dyn MemoryStore) -> String {
    resolve(persona, store).into_text()
}
