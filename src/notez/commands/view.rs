use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::DataStore;

use super::helpers::notes_by_indexes;

pub fn run<S: DataStore>(store: &S, indexes: &[DisplayIndex]) -> Result<CmdResult> {
    let notes = notes_by_indexes(store, indexes)?;
    Ok(CmdResult::default().with_listed_notes(notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn views_requested_notes() {
        let fixture = StoreFixture::new().with_notes(3);
        let result = run(&fixture.store, &[DisplayIndex(2)]).unwrap();

        assert_eq!(result.listed_notes.len(), 1);
        assert_eq!(result.listed_notes[0].note.content, "Note 2");
        assert_eq!(result.listed_notes[0].index, DisplayIndex(2));
    }

    #[test]
    fn unknown_index_is_an_error() {
        let fixture = StoreFixture::new().with_notes(1);
        assert!(run(&fixture.store, &[DisplayIndex(4)]).is_err());
    }
}
