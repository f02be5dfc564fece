//! Journal contents shared by the store adapters

use serde::{Deserialize, Serialize};

use crate::domain::{errors::DomainError, MemoryDocument};

pub const DEFAULT_FOLDER_COLOR: &str = "#9e9e9e";

/// A journal folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalFolder {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

/// Folders and entries of a journal, in insertion order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalData {
    #[serde(default)]
    pub folders: Vec<JournalFolder>,
    #[serde(default)]
    pub entries: Vec<MemoryDocument>,
}

impl JournalData {
    /// Build a journal from documents, creating their folders
    pub fn from_documents(documents: Vec<MemoryDocument>) -> Self {
        let mut data = Self::default();
        for document in &documents {
            if !data.has_folder(&document.folder) {
                data.folders.push(JournalFolder {
                    name: document.folder.clone(),
                    color: None,
                });
            }
        }
        data.entries = documents;
        data
    }

    pub fn find(&self, name: &str, folder: &str) -> Option<&MemoryDocument> {
        self.entries
            .iter()
            .find(|e| e.name == name && e.folder == folder)
    }

    pub fn names_in(&self, folder: &str) -> Vec<String> {
        self.entries
            .iter()
            .filter(|e| e.folder == folder)
            .map(|e| e.name.clone())
            .collect()
    }

    pub fn has_folder(&self, folder: &str) -> bool {
        self.folders.iter().any(|f| f.name == folder)
    }

    pub fn create_folder(&mut self, folder: &str) -> Result<(), DomainError> {
        if self.has_folder(folder) {
            return Err(DomainError::Validation(format!(
                "Folder '{}' already exists",
                folder
            )));
        }
        self.folders.push(JournalFolder {
            name: folder.to_string(),
            color: Some(DEFAULT_FOLDER_COLOR.to_string()),
        });
        Ok(())
    }

    pub fn insert(&mut self, document: MemoryDocument) -> Result<(), DomainError> {
        if !self.has_folder(&document.folder) {
            return Err(DomainError::not_found("folder", &document.folder));
        }
        if self.find(&document.name, &document.folder).is_some() {
            return Err(DomainError::Validation(format!(
                "Entry '{}' already exists in '{}'",
                document.name, document.folder
            )));
        }
        self.entries.push(document);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MEMORY_FOLDER;

    #[test]
    fn test_insert_requires_folder() {
        let mut data = JournalData::default();
        let result = data.insert(MemoryDocument::new("Jaaris", MEMORY_FOLDER));
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[test]
    fn test_insert_rejects_duplicate_in_same_folder() {
        let mut data = JournalData::from_documents(vec![MemoryDocument::new("Jaaris", MEMORY_FOLDER)]);
        let result = data.insert(MemoryDocument::new("Jaaris", MEMORY_FOLDER));
        assert!(matches!(result, Err(DomainError::Validation(_))));
    }

    #[test]
    fn test_same_name_in_other_folder_is_separate() {
        let data = JournalData::from_documents(vec![
            MemoryDocument::new("Jaaris", "Session Notes"),
            MemoryDocument::new("Jaaris", MEMORY_FOLDER),
        ]);
        assert_eq!(data.folders.len(), 2);
        assert_eq!(data.find("Jaaris", MEMORY_FOLDER).unwrap().folder, MEMORY_FOLDER);
        assert_eq!(data.names_in("Session Notes"), vec!["Jaaris"]);
    }

    #[test]
    fn test_created_folder_gets_default_color() {
        let mut data = JournalData::default();
        data.create_folder(MEMORY_FOLDER).unwrap();
        assert_eq!(data.folders[0].color.as_deref(), Some(DEFAULT_FOLDER_COLOR));
        assert!(data.create_folder(MEMORY_FOLDER).is_err());
    }
}
