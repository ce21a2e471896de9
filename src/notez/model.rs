use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A single note record as it lives in the persisted slot.
///
/// Field names serialize in camelCase (`content`, `createdAt`, ...) so that the
/// slot stays readable by anything that wrote the older `{content, createdAt}`
/// records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<String>,
}

/// On-disk shape, where `id` may be missing for records written before notes
/// carried one.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct NoteRecord {
    id: Option<Uuid>,
    content: String,
    created_at: DateTime<Utc>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
    #[serde(default)]
    suggestions: Vec<String>,
}

impl NoteRecord {
    fn into_note(self, position: usize) -> Note {
        // Position is part of the name so identical records stay distinct
        let id = self.id.unwrap_or_else(|| {
            let name = format!(
                "{}\u{0}{}\u{0}{}",
                position,
                self.created_at.to_rfc3339(),
                self.content
            );
            Uuid::new_v5(&Uuid::NAMESPACE_OID, name.as_bytes())
        });
        Note {
            id,
            content: self.content,
            created_at: self.created_at,
            updated_at: self.updated_at,
            suggestions: self.suggestions,
        }
    }
}

/// Parses a persisted slot.
///
/// Records without an id get a name-based one, so every load of the same slot
/// agrees on it until the collection is written back with real ids.
pub fn parse_slot(raw: &str) -> serde_json::Result<Vec<Note>> {
    let records: Vec<NoteRecord> = serde_json::from_str(raw)?;
    Ok(records
        .into_iter()
        .enumerate()
        .map(|(position, record)| record.into_note(position))
        .collect())
}

impl Note {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            content: content.into(),
            created_at: Utc::now(),
            updated_at: None,
            suggestions: Vec::new(),
        }
    }

    /// Replaces the content and stamps `updated_at`. Stale suggestions are dropped
    /// since they were produced for the old text.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.updated_at = Some(Utc::now());
        self.suggestions.clear();
    }

    /// First non-blank line of the content, used as a one-line summary.
    pub fn headline(&self) -> &str {
        self.content.trim().lines().next().unwrap_or("").trim_end()
    }
}

/// A note as returned by the remote notes backend.
///
/// The server owns the identifier, so it is kept as an opaque string. Numeric
/// ids are accepted and stringified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteNote {
    #[serde(alias = "_id", deserialize_with = "id_as_string")]
    pub id: String,
    pub content: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub suggestions: Vec<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

fn id_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    })
}

impl RemoteNote {
    /// Converts into a local note. The remote id is mapped onto a name-based
    /// UUID so pulling the same remote note twice yields the same local id.
    pub fn into_local(self) -> Note {
        let id = Uuid::new_v5(&Uuid::NAMESPACE_OID, self.id.as_bytes());
        Note {
            id,
            content: self.content,
            created_at: self.created_at.unwrap_or_else(Utc::now),
            updated_at: None,
            suggestions: self.suggestions,
        }
    }
}
