use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::remote::suggestions::SuggestionService;
use crate::store::DataStore;

use super::helpers::notes_by_indexes;

/// Fetches suggestions for one note and stores them on it.
///
/// A failing suggestion service never fails the command: the failure is logged,
/// reported as a warning, and the result simply carries no suggestions.
pub fn run<S: DataStore, G: SuggestionService + ?Sized>(
    store: &mut S,
    service: &G,
    index: DisplayIndex,
) -> Result<CmdResult> {
    let target = notes_by_indexes(store, &[index])?.remove(0);
    let mut result = CmdResult::default();

    let suggestions = match service.suggest(&target.note.content) {
        Ok(suggestions) => suggestions,
        Err(e) => {
            tracing::warn!(error = %e, index = %index, "suggestion request failed");
            result.add_message(CmdMessage::warning(format!(
                "No suggestions available: {}",
                e
            )));
            return Ok(result);
        }
    };

    let note = store.set_suggestions(&target.note.id, suggestions.clone())?;
    if suggestions.is_empty() {
        result.add_message(CmdMessage::info(format!("No suggestions for ({})", index)));
    } else {
        result.add_message(CmdMessage::success(format!(
            "{} suggestion(s) saved for ({})",
            suggestions.len(),
            index
        )));
    }
    result.suggestions = suggestions;
    result.affected_notes.push(note);
    Ok(result)
}
