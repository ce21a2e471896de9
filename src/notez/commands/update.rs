use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::DataStore;

use super::helpers::resolve_indexes;

/// Replaces the content of one note. Unlike create, empty content is accepted.
pub fn run<S: DataStore>(store: &mut S, index: DisplayIndex, content: &str) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, &[index])?;
    let mut result = CmdResult::default();

    for (display_index, id) in resolved {
        let note = store.update(&id, content)?;
        result.add_message(CmdMessage::success(format!(
            "Note updated ({}): {}",
            display_index,
            note.headline()
        )));
        result.affected_notes.push(note);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::view;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn updates_only_the_target() {
        let mut fixture = StoreFixture::new().with_note("a").with_note("b");
        let before = fixture.notes();

        run(&mut fixture.store, DisplayIndex(2), "B").unwrap();

        let after = fixture.notes();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[1].content, "B");
        assert_eq!(after[1].id, before[1].id);
    }

    #[test]
    fn accepts_empty_content() {
        let mut fixture = StoreFixture::new().with_note("a");
        run(&mut fixture.store, DisplayIndex(1), "").unwrap();

        let viewed = view::run(&fixture.store, &[DisplayIndex(1)]).unwrap();
        assert_eq!(viewed.listed_notes[0].note.content, "");
    }

    #[test]
    fn out_of_range_changes_nothing() {
        let mut fixture = StoreFixture::new().with_note("a");
        assert!(run(&mut fixture.store, DisplayIndex(2), "x").is_err());
        assert_eq!(fixture.notes()[0].content, "a");
    }
}
