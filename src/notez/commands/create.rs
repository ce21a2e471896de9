use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotezError, Result};
use crate::index::DisplayIndex;
use crate::store::DataStore;

/// Creates a note. Empty or whitespace-only content is a no-op with a warning.
pub fn run<S: DataStore>(store: &mut S, content: &str) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let note = match store.create(content) {
        Ok(note) => note,
        Err(NotezError::EmptyContent) => {
            result.add_message(CmdMessage::warning("Nothing to save: note is empty"));
            return Ok(result);
        }
        Err(e) => return Err(e),
    };

    // The new note is always last
    let index = DisplayIndex(store.load()?.len());
    result.add_message(CmdMessage::success(format!(
        "Note created ({}): {}",
        index,
        note.headline()
    )));
    result.affected_notes.push(note);
    Ok(result)
}
