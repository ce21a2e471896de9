//! # Display Indexes
//!
//! Users refer to notes by their 1-based position in the listing (`1`, `2`, ...),
//! which is the order the notes sit in the slot. Indexes are only a view:
//! commands resolve them to the notes' stable ids against a fresh load and
//! mutate by id from there on.

use crate::model::Note;
use std::collections::HashSet;
use std::str::FromStr;

/// Most indexes a single range may expand to.
pub const MAX_RANGE_LEN: usize = 10_000;

/// A user-facing, 1-based index for a note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(pub usize);

impl DisplayIndex {
    pub fn from_position(position: usize) -> Self {
        DisplayIndex(position + 1)
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Invalid index: 0 (indexes start at 1)".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DisplayNote {
    pub note: Note,
    pub index: DisplayIndex,
}

/// Assigns display indexes to a collection, keeping slot order.
pub fn index_notes(notes: Vec<Note>) -> Vec<DisplayNote> {
    notes
        .into_iter()
        .enumerate()
        .map(|(pos, note)| DisplayNote {
            note,
            index: DisplayIndex::from_position(pos),
        })
        .collect()
}

/// Parses a single input string that may be either a single index or a range.
///
/// Supports formats:
/// - Single index: "3"
/// - Range: "3-5" (expands to 3, 4, 5)
///
/// Start must be <= end and a range may cover at most [`MAX_RANGE_LEN`] indexes.
/// Whether the indexes exist is checked later, during resolution.
pub fn parse_index_or_range(s: &str) -> Result<Vec<DisplayIndex>, String> {
    if let Some((start_str, end_str)) = s.split_once('-') {
        if start_str.is_empty() {
            return Err(format!("Invalid index format: {}", s));
        }
        let start = DisplayIndex::from_str(start_str)?;
        let end = DisplayIndex::from_str(end_str)?;
        if start > end {
            return Err(format!(
                "Invalid range: start ({}) must be <= end ({})",
                start, end
            ));
        }
        if end.0 - start.0 >= MAX_RANGE_LEN {
            return Err(format!(
                "Range too large: {} (at most {} notes at once)",
                s, MAX_RANGE_LEN
            ));
        }
        return Ok((start.0..=end.0).map(DisplayIndex).collect());
    }

    DisplayIndex::from_str(s).map(|idx| vec![idx])
}

/// Parses many inputs, expanding ranges and dropping repeats while keeping
/// first-seen order.
pub fn parse_indexes<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>, String> {
    let mut seen = HashSet::new();
    let mut out: Vec<DisplayIndex> = Vec::new();
    for input in inputs {
        for idx in parse_index_or_range(input.as_ref())? {
            if seen.insert(idx) {
                out.push(idx);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_notes_keeps_slot_order() {
        let notes = vec![Note::new("first"), Note::new("second")];
        let indexed = index_notes(notes);

        assert_eq!(indexed[0].index, DisplayIndex(1));
        assert_eq!(indexed[0].note.content, "first");
        assert_eq!(indexed[1].index, DisplayIndex(2));
        assert_eq!(indexed[1].note.content, "second");
    }

    #[test]
    fn test_parse_single() {
        assert_eq!("3".parse::<DisplayIndex>(), Ok(DisplayIndex(3)));
        assert!("0".parse::<DisplayIndex>().is_err());
        assert!("p1".parse::<DisplayIndex>().is_err());
        assert!("".parse::<DisplayIndex>().is_err());
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            parse_index_or_range("2-4").unwrap(),
            vec![DisplayIndex(2), DisplayIndex(3), DisplayIndex(4)]
        );
        assert_eq!(parse_index_or_range("3-3").unwrap(), vec![DisplayIndex(3)]);
    }

    #[test]
    fn test_parse_range_errors() {
        assert!(parse_index_or_range("4-2").is_err());
        assert!(parse_index_or_range("-2").is_err());
        assert!(parse_index_or_range("1-x").is_err());
    }

    #[test]
    fn test_parse_indexes_dedups() {
        let parsed = parse_indexes(&["1-3", "2", "5"]).unwrap();
        assert_eq!(
            parsed,
            vec![
                DisplayIndex(1),
                DisplayIndex(2),
                DisplayIndex(3),
                DisplayIndex(5)
            ]
        );
    }

    #[test]
    fn test_huge_range_is_rejected() {
        assert!(parse_index_or_range("1-99999999999").is_err());
        assert!(parse_indexes(&["1-200000"]).is_err());
    }

    #[test]
    fn test_largest_range_expands() {
        let last = format!("1-{}", MAX_RANGE_LEN);
        let parsed = parse_indexes(&[last.as_str(), "1-10"]).unwrap();
        assert_eq!(parsed.len(), MAX_RANGE_LEN);
        assert_eq!(parsed.last(), Some(&DisplayIndex(MAX_RANGE_LEN)));
    }
}
