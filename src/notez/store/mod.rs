//! # Storage Layer
//!
//! This module defines the storage abstraction for notez. The [`DataStore`] trait
//! is the note-level interface the commands work against.
//!
//! ## One Slot, One Array
//!
//! The whole note collection lives in a single key-value slot under the fixed
//! key [`NOTES_KEY`], serialized as one JSON array. Every mutation is a
//! read-modify-write of that slot: load the array, change it, write the whole
//! array back. There is no merge or versioning; the last writer wins.
//!
//! ## Identity
//!
//! Each note carries a stable UUID assigned at creation. Positional operations
//! (`update_at`, `delete_at`) exist for callers that think in list positions,
//! but commands resolve display indexes to ids against a fresh load and mutate
//! by id, so a list that changed since it was shown can't redirect an edit to
//! the wrong note.
//!
//! ## Implementations
//!
//! - [`note_store::NoteStore`]: the slot logic, generic over a [`backend::StorageBackend`].
//! - [`fs::FileStore`]: `NoteStore` over the filesystem (`<data-dir>/notes.json`).
//! - [`memory::InMemoryStore`]: `NoteStore` in memory, for testing logic without I/O.
//!
//! ## Storage Layout
//!
//! ```text
//! <data-dir>/
//! ├── notes.json      # The note collection (JSON array)
//! └── config.json     # Configuration
//! ```

use crate::error::Result;
use crate::model::Note;
use std::path::PathBuf;
use uuid::Uuid;

pub mod backend;
pub mod fs;
pub mod fs_backend;
pub mod mem_backend;
pub mod memory;
pub mod note_store;

/// The fixed key the note collection is stored under.
pub const NOTES_KEY: &str = "notes";

/// Abstract interface for note storage.
pub trait DataStore {
    /// Load the collection. An absent slot and an unparseable slot both
    /// yield an empty list; backend I/O errors still propagate.
    fn load(&self) -> Result<Vec<Note>>;

    /// Load the collection, reporting an unparseable slot as an error.
    fn load_strict(&self) -> Result<Vec<Note>>;

    /// Replace the persisted collection with `notes`.
    fn save(&mut self, notes: &[Note]) -> Result<()>;

    /// Append a note with `content` as given. Whitespace-only content is rejected.
    fn create(&mut self, content: &str) -> Result<Note>;

    /// Get a note by ID
    fn get(&self, id: &Uuid) -> Result<Note>;

    /// Replace the content of the note with the given id.
    fn update(&mut self, id: &Uuid, content: &str) -> Result<Note>;

    /// Replace the content of the note at 0-based `index`.
    fn update_at(&mut self, index: usize, content: &str) -> Result<Note>;

    /// Remove the note with the given id.
    fn delete(&mut self, id: &Uuid) -> Result<Note>;

    /// Remove the note at 0-based `index`, keeping the order of the rest.
    fn delete_at(&mut self, index: usize) -> Result<Note>;

    /// Store fetched suggestions on a note.
    fn set_suggestions(&mut self, id: &Uuid, suggestions: Vec<String>) -> Result<Note>;

    /// Prepend notes that are not present yet (by id). Returns how many were added.
    fn merge_remote(&mut self, notes: Vec<Note>) -> Result<usize>;

    /// Where the collection is persisted.
    fn slot_path(&self) -> PathBuf;
}
