use crate::commands::{CmdMessage, CmdResult};
use crate::error::{NotezError, Result};
use crate::index::index_notes;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &S) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    let notes = match store.load_strict() {
        Ok(notes) => notes,
        Err(NotezError::Serialization(e)) => {
            tracing::warn!(error = %e, "stored notes are unreadable");
            result.add_message(CmdMessage::warning(format!(
                "Stored notes could not be read ({}); showing an empty list",
                store.slot_path().display()
            )));
            Vec::new()
        }
        Err(e) => return Err(e),
    };

    Ok(result.with_listed_notes(index_notes(notes)))
}
