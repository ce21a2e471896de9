//! # Remote Collaborators
//!
//! Two HTTP services notez can talk to. They are independent of each other and
//! of the local store:
//!
//! - [`suggestions`]: an external text-suggestion service. `POST /suggestions`
//!   with `{content}` answers with a JSON array of strings.
//! - [`backend`]: a REST notes backend. `GET /notes` lists notes (with their
//!   suggestions), `POST /notes` with `{content}` creates one.
//!
//! Both clients are blocking and return typed results; deciding whether a
//! failure is fatal is left to the command layer.

use crate::error::Result;
use std::time::Duration;

pub mod backend;
pub mod suggestions;

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Upper bound for the request timeout, in seconds.
pub const MAX_TIMEOUT_SECS: u64 = 3600;

fn build_client(timeout: Duration) -> Result<reqwest::blocking::Client> {
    let timeout = timeout.min(Duration::from_secs(MAX_TIMEOUT_SECS));
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(concat!("notez/", env!("CARGO_PKG_VERSION")))
        .build()?;
    Ok(client)
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim_end_matches('/').to_string()
}
