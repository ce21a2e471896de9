use crate::error::{NotezError, Result};
use crate::index::{index_notes, DisplayIndex, DisplayNote};
use crate::store::DataStore;
use uuid::Uuid;

pub fn indexed_notes<S: DataStore>(store: &S) -> Result<Vec<DisplayNote>> {
    let notes = store.load()?;
    Ok(index_notes(notes))
}

/// Maps display indexes to note ids against the collection as it is right now.
/// Fails on the first index that doesn't exist, before anything is changed.
pub fn resolve_indexes<S: DataStore>(
    store: &S,
    indexes: &[DisplayIndex],
) -> Result<Vec<(DisplayIndex, Uuid)>> {
    let indexed = indexed_notes(store)?;

    indexes
        .iter()
        .map(|idx| {
            indexed
                .iter()
                .find(|dn| &dn.index == idx)
                .map(|dn| (*idx, dn.note.id))
                .ok_or_else(|| {
                    NotezError::Api(format!(
                        "Index {} not found ({} notes)",
                        idx,
                        indexed.len()
                    ))
                })
        })
        .collect()
}

pub fn notes_by_indexes<S: DataStore>(
    store: &S,
    indexes: &[DisplayIndex],
) -> Result<Vec<DisplayNote>> {
    let indexed = indexed_notes(store)?;
    indexes
        .iter()
        .map(|idx| {
            indexed
                .iter()
                .find(|dn| &dn.index == idx)
                .cloned()
                .ok_or_else(|| {
                    NotezError::Api(format!(
                        "Index {} not found ({} notes)",
                        idx,
                        indexed.len()
                    ))
                })
        })
        .collect()
}
