use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::DataStore;

use super::helpers::resolve_indexes;

/// Deletes notes by display index. All indexes are resolved against the list
/// as displayed before the first removal, so `delete 1 2` removes the first two
/// notes rather than the first and the third.
pub fn run<S: DataStore>(store: &mut S, indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, indexes)?;
    let mut result = CmdResult::default();

    for (display_index, id) in resolved {
        let note = store.delete(&id)?;
        result.add_message(CmdMessage::success(format!(
            "Note deleted ({}): {}",
            display_index,
            note.headline()
        )));
        result.affected_notes.push(note);
    }

    Ok(result)
}
