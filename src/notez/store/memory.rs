use super::mem_backend::MemBackend;
use super::note_store::NoteStore;

pub type InMemoryStore = NoteStore<MemBackend>;

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryStore {
    pub fn new() -> Self {
        NoteStore::with_backend(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Note;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_notes(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store.create(&format!("Note {}", i + 1)).unwrap();
            }
            self
        }

        pub fn with_note(mut self, content: &str) -> Self {
            self.store.create(content).unwrap();
            self
        }

        pub fn with_suggested_note(mut self, content: &str, suggestions: &[&str]) -> Self {
            let note = self.store.create(content).unwrap();
            let suggestions = suggestions.iter().map(|s| s.to_string()).collect();
            self.store.set_suggestions(&note.id, suggestions).unwrap();
            self
        }

        pub fn notes(&self) -> Vec<Note> {
            self.store.load().unwrap()
        }
    }
}
