use super::backend::StorageBackend;
use super::{DataStore, NOTES_KEY};
use crate::error::{NotezError, Result};
use crate::model::{parse_slot, Note};
use std::collections::HashSet;
use std::path::PathBuf;
use uuid::Uuid;

pub struct NoteStore<B: StorageBackend> {
    /// The underlying storage backend.
    /// Exposed as pub(crate) for testing and internal access only.
    pub(crate) backend: B,
    key: String,
}

impl<B: StorageBackend> NoteStore<B> {
    pub fn with_backend(backend: B) -> Self {
        Self {
            backend,
            key: NOTES_KEY.to_string(),
        }
    }

    /// Load, apply `f`, and write the whole collection back.
    /// Nothing is written if `f` fails.
    fn mutate<T>(&mut self, f: impl FnOnce(&mut Vec<Note>) -> Result<T>) -> Result<T> {
        let mut notes = self.load_strict()?;
        let out = f(&mut notes)?;
        self.save(&notes)?;
        Ok(out)
    }

    fn position(notes: &[Note], id: &Uuid) -> Result<usize> {
        notes
            .iter()
            .position(|n| n.id == *id)
            .ok_or(NotezError::NoteNotFound(*id))
    }

    fn check_index(notes: &[Note], index: usize) -> Result<()> {
        if index >= notes.len() {
            return Err(NotezError::IndexOutOfRange {
                index,
                len: notes.len(),
            });
        }
        Ok(())
    }
}

impl<B: StorageBackend> DataStore for NoteStore<B> {
    fn load(&self) -> Result<Vec<Note>> {
        match self.load_strict() {
            Ok(notes) => Ok(notes),
            Err(NotezError::Serialization(e)) => {
                tracing::warn!(
                    key = %self.key,
                    error = %e,
                    "note slot is unreadable, treating as empty"
                );
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    fn load_strict(&self) -> Result<Vec<Note>> {
        match self.backend.get_item(&self.key)? {
            None => Ok(Vec::new()),
            Some(raw) => parse_slot(&raw).map_err(NotezError::Serialization),
        }
    }

    fn save(&mut self, notes: &[Note]) -> Result<()> {
        let raw = serde_json::to_string_pretty(notes).map_err(NotezError::Serialization)?;
        self.backend.set_item(&self.key, &raw)?;
        tracing::debug!(count = notes.len(), "saved notes");
        Ok(())
    }

    fn create(&mut self, content: &str) -> Result<Note> {
        if content.trim().is_empty() {
            return Err(NotezError::EmptyContent);
        }
        let note = Note::new(content);
        let created = note.clone();
        self.mutate(move |notes| {
            notes.push(note);
            Ok(())
        })?;
        Ok(created)
    }

    fn get(&self, id: &Uuid) -> Result<Note> {
        let notes = self.load_strict()?;
        let pos = Self::position(&notes, id)?;
        Ok(notes[pos].clone())
    }

    fn update(&mut self, id: &Uuid, content: &str) -> Result<Note> {
        self.mutate(|notes| {
            let pos = Self::position(notes, id)?;
            notes[pos].set_content(content);
            Ok(notes[pos].clone())
        })
    }

    fn update_at(&mut self, index: usize, content: &str) -> Result<Note> {
        self.mutate(|notes| {
            Self::check_index(notes, index)?;
            notes[index].set_content(content);
            Ok(notes[index].clone())
        })
    }

    fn delete(&mut self, id: &Uuid) -> Result<Note> {
        self.mutate(|notes| {
            let pos = Self::position(notes, id)?;
            Ok(notes.remove(pos))
        })
    }

    fn delete_at(&mut self, index: usize) -> Result<Note> {
        self.mutate(|notes| {
            Self::check_index(notes, index)?;
            Ok(notes.remove(index))
        })
    }

    fn set_suggestions(&mut self, id: &Uuid, suggestions: Vec<String>) -> Result<Note> {
        self.mutate(|notes| {
            let pos = Self::position(notes, id)?;
            notes[pos].suggestions = suggestions;
            Ok(notes[pos].clone())
        })
    }

    fn merge_remote(&mut self, incoming: Vec<Note>) -> Result<usize> {
        self.mutate(|notes| {
            let mut known: HashSet<Uuid> = notes.iter().map(|n| n.id).collect();
            let mut merged: Vec<Note> = incoming
                .into_iter()
                .filter(|n| known.insert(n.id))
                .collect();
            let added = merged.len();
            merged.append(notes);
            *notes = merged;
            Ok(added)
        })
    }

    fn slot_path(&self) -> PathBuf {
        self.backend.item_path(&self.key)
    }
}
