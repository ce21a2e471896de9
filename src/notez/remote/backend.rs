use super::{build_client, normalize_base_url};
use crate::error::{NotezError, Result};
use crate::model::RemoteNote;
use serde::Serialize;
use std::time::Duration;

/// The remote notes backend: a server-side alternative to the local slot.
pub trait NoteBackend {
    fn list_notes(&self) -> Result<Vec<RemoteNote>>;
    fn create_note(&self, content: &str) -> Result<RemoteNote>;
}

#[derive(Debug, Serialize)]
struct CreateNoteBody<'a> {
    content: &'a str,
}

/// HTTP client for the REST notes backend.
pub struct HttpNoteBackend {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpNoteBackend {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url),
            client: build_client(timeout)?,
        })
    }

    fn notes_url(&self) -> String {
        format!("{}/notes", self.base_url)
    }
}

impl NoteBackend for HttpNoteBackend {
    fn list_notes(&self) -> Result<Vec<RemoteNote>> {
        let url = self.notes_url();
        tracing::debug!(%url, "listing remote notes");

        let resp = self
            .client
            .get(&url)
            .send()
            .map_err(|e| NotezError::Remote(format!("List notes failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(NotezError::Remote(format!(
                "List notes HTTP {}: {}",
                status, body
            )));
        }

        resp.json::<Vec<RemoteNote>>()
            .map_err(|e| NotezError::Remote(format!("Parse notes response: {}", e)))
    }

    fn create_note(&self, content: &str) -> Result<RemoteNote> {
        let url = self.notes_url();
        tracing::debug!(%url, "creating remote note");

        let resp = self
            .client
            .post(&url)
            .json(&CreateNoteBody { content })
            .send()
            .map_err(|e| NotezError::Remote(format!("Create note failed: {}", e)))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(NotezError::Remote(format!(
                "Create note HTTP {}: {}",
                status, body
            )));
        }

        resp.json::<RemoteNote>()
            .map_err(|e| NotezError::Remote(format!("Parse created note: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notes_url_is_joined_once() {
        let backend = HttpNoteBackend::new("https://api.example.com//", Duration::from_secs(1))
            .unwrap();
        assert_eq!(backend.notes_url(), "https://api.example.com/notes");
    }

    #[test]
    fn unreachable_backend_is_a_remote_error() {
        let backend = HttpNoteBackend::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        match backend.list_notes() {
            Err(NotezError::Remote(msg)) => assert!(msg.starts_with("List notes failed")),
            other => panic!("Expected Remote error, got {:?}", other),
        }
    }
}
