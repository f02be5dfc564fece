//! MemoryDocument - Journal entry holding an NPC's memory
//!
//! Owned and persisted by the document store; the core only reads it.

use serde::{Deserialize, Serialize};

/// Folder that groups every NPC memory journal.
pub const MEMORY_FOLDER: &str = "NPC Memories";

/// A single text page of a memory document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryPage {
    /// Page title
    pub name: String,
    /// Page body, absent for pages that carry no text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

impl MemoryPage {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: Some(text.into()),
        }
    }

    /// A page without any text
    pub fn blank(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            text: None,
        }
    }
}

/// MemoryDocument - named journal entry inside a folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoryDocument {
    /// Display name, matched exactly against the persona name
    pub name: String,
    /// Name of the folder the document lives in
    pub folder: String,
    /// Pages in document order
    #[serde(default)]
    pub pages: Vec<MemoryPage>,
}

impl MemoryDocument {
    /// Create an empty document in the given folder
    pub fn new(name: impl Into<String>, folder: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            folder: folder.into(),
            pages: Vec::new(),
        }
    }

    /// Append a page
    pub fn with_page(mut self, page: MemoryPage) -> Self {
        self.pages.push(page);
        self
    }

    /// All page texts joined by newlines, in page order.
    pub fn joined_text(&self) -> String {
        self.pages
            .iter()
            .map(|p| p.text.as_deref().unwrap_or(""))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
