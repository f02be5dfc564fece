//! Bootstrap - Seeds the tutorial "Helper" persona
//!
//! Run explicitly by hosts on first start; safe to run repeatedly.

use tracing::info;

use crate::domain::{errors::DomainError, MemoryDocument, MemoryPage, MEMORY_FOLDER};
use crate::ports::{MemoryStore, Notifier};

pub const HELPER_NAME: &str = "Helper";
pub const HELPER_PAGE_NAME: &str = "Helper Memory Guide";

const HELPER_GUIDE: &str = "\
## Helper, your memory guide

**Who I am:** your friendly tutorial construct. Ask me how to use NPC memory!

### Example prompts
- Helper, how do I create a new memory NPC?
- Helper, what do I put in a memory journal?
- Helper, show me how Jaaris works.

### Rules of memory journals
- Name the journal **exactly** the same as the NPC.
- Put it in the folder `NPC Memories`.
- Include background, known facts, personality traits, etc.

*Try it now by asking me something!*";

/// The Helper journal as it is seeded
pub fn helper_document() -> MemoryDocument {
    MemoryDocument::new(HELPER_NAME, MEMORY_FOLDER)
        .with_page(MemoryPage::new(HELPER_PAGE_NAME, HELPER_GUIDE))
}

/// Create the Helper journal (and its folder) unless it already exists.
///
/// Returns `true` when something was created.
pub fn seed_helper(store: &dyn MemoryStore, notifier: &dyn Notifier) -> Result<bool, DomainError> {
    if store.find(HELPER_NAME, MEMORY_FOLDER).is_some() {
        return Ok(false);
    }

    if !store.has_folder(MEMORY_FOLDER) {
        store.create_folder(MEMORY_FOLDER)?;
    }
    store.insert(helper_document())?;

    info!(persona = HELPER_NAME, folder = MEMORY_FOLDER, "Seeded helper persona");
    notifier.info("📘 'Helper' NPC created in NPC Memories folder.");
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryJournal;
    use crate::domain::NoticeLevel;
    use crate::services::memory_resolver::resolve_memory;
    use crate::test_support::RecordingNotifier;

    #[test]
    fn test_seeds_folder_and_helper() {
        let journal = InMemoryJournal::new();
        let notifier = RecordingNotifier::default();

        assert!(!journal.has_folder(MEMORY_FOLDER));
        assert!(seed_helper(&journal, &notifier).unwrap());

        assert!(journal.has_folder(MEMORY_FOLDER));
        assert_eq!(journal.names_in(MEMORY_FOLDER), vec![HELPER_NAME]);
        assert!(resolve_memory(Some(HELPER_NAME), &journal).contains("NPC Memories"));
        assert_eq!(notifier.levels(), vec![NoticeLevel::Info]);
    }

    #[test]
    fn test_second_run_is_a_no_op() {
        let journal = InMemoryJournal::new();
        let notifier = RecordingNotifier::default();

        seed_helper(&journal, &notifier).unwrap();
        assert!(!seed_helper(&journal, &notifier).unwrap());

        assert_eq!(journal.names_in(MEMORY_FOLDER).len(), 1);
        assert_eq!(notifier.levels().len(), 1);
    }

    #[test]
    fn test_existing_folder_is_reused() {
        let journal = InMemoryJournal::with_documents(vec![MemoryDocument::new(
            "Jaaris",
            MEMORY_FOLDER,
        )]);
        let notifier = RecordingNotifier::default();

        assert!(seed_helper(&journal, &notifier).unwrap());
        assert_eq!(journal.names_in(MEMORY_FOLDER), vec!["Jaaris", HELPER_NAME]);
    }
}
