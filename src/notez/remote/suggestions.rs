use super::{build_client, normalize_base_url};
use crate::error::{NotezError, Result};
use serde::Serialize;
use std::time::Duration;

/// Anything that can turn note content into a list of suggestions.
pub trait SuggestionService {
    fn suggest(&self, content: &str) -> Result<Vec<String>>;
}

#[derive(Debug, Serialize)]
struct SuggestionRequest<'a> {
    content: &'a str,
}

/// HTTP client for the external suggestion service.
pub struct HttpSuggestionClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl HttpSuggestionClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            base_url: normalize_base_url(base_url),
            client: build_client(timeout)?,
        })
    }

    pub fn endpoint(&self) -> String {
        format!("{}/suggestions", self.base_url)
    }
}

impl SuggestionService for HttpSuggestionClient {
    fn suggest(&self, content: &str) -> Result<Vec<String>> {
        let url = self.endpoint();
        tracing::debug!(%url, "requesting suggestions");

        let resp = self
            .client
            .post(&url)
            .json(&SuggestionRequest { content })
            .send()?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            return Err(NotezError::Remote(format!(
                "Suggestions HTTP {}: {}",
                status, body
            )));
        }

        resp.json::<Vec<String>>()
            .map_err(|e| NotezError::Remote(format!("Parse suggestions response: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_ignores_trailing_slash() {
        let client =
            HttpSuggestionClient::new("http://localhost:3000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:3000/suggestions");
    }

    #[test]
    fn request_body_is_content_only() {
        let body = serde_json::to_value(SuggestionRequest { content: "hi" }).unwrap();
        assert_eq!(body, serde_json::json!({ "content": "hi" }));
    }

    #[test]
    fn unreachable_service_is_a_remote_error() {
        // Port 9 (discard) on localhost is closed in test environments
        let client =
            HttpSuggestionClient::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();
        assert!(matches!(client.suggest("hi"), Err(NotezError::Remote(_))));
    }

    #[test]
    fn oversized_timeout_still_fails_as_a_remote_error() {
        let client =
            HttpSuggestionClient::new("http://127.0.0.1:9", Duration::from_secs(u64::MAX)).unwrap();
        assert!(matches!(client.suggest("hi"), Err(NotezError::Remote(_))));
    }
}
