use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for a local key-value store.
///
/// Each key names one slot holding a string value. This trait handles the
/// "how" of storage (filesystem vs memory), while `NoteStore` handles the
/// "what" (the note collection living in one of those slots).
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) if nothing was ever written there.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    /// Location of the slot. For FsBackend this is a real path,
    /// for MemBackend a virtual one.
    fn item_path(&self, key: &str) -> PathBuf;
}
