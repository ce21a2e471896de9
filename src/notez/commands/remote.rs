use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::RemoteNote;
use crate::remote::backend::NoteBackend;
use crate::store::DataStore;

pub fn list<R: NoteBackend + ?Sized>(backend: &R) -> Result<CmdResult> {
    let notes = backend.list_notes()?;
    Ok(CmdResult::default().with_remote_notes(notes))
}

/// Creates a note on the remote backend. Empty content is a no-op, as locally.
pub fn create<R: NoteBackend + ?Sized>(backend: &R, content: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();
    if content.trim().is_empty() {
        result.add_message(CmdMessage::warning("Nothing to save: note is empty"));
        return Ok(result);
    }

    let created = backend.create_note(content)?;
    result.add_message(CmdMessage::success(format!(
        "Remote note created: {}",
        created.id
    )));
    Ok(result.with_remote_notes(vec![created]))
}

/// Fetches remote notes and prepends the ones the local collection lacks.
pub fn pull<S: DataStore, R: NoteBackend + ?Sized>(store: &mut S, backend: &R) -> Result<CmdResult> {
    let remote = backend.list_notes()?;
    let fetched = remote.len();
    let local = remote.iter().cloned().map(RemoteNote::into_local).collect();
    let added = store.merge_remote(local)?;

    let mut result = CmdResult::default().with_remote_notes(remote);
    result.add_message(CmdMessage::success(format!(
        "Pulled {} remote note(s), {} new",
        fetched, added
    )));
    Ok(result)
}
