//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It serves as the single
//! entry point for all notez operations, regardless of the UI being used.
//!
//! The facade:
//! - **Dispatches** to the appropriate command function
//! - **Normalizes inputs** (display index strings → [`DisplayIndex`] values)
//! - **Builds remote clients** from the loaded [`NotezConfig`]
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic, no I/O to the terminal, and no formatting.
//!
//! `NotezApi<S: DataStore>` is generic over the store: `NotezApi<FileStore>` in
//! production, `NotezApi<InMemoryStore>` in tests.

use crate::commands;
use crate::config::NotezConfig;
use crate::error::{NotezError, Result};
use crate::index::{parse_indexes, DisplayIndex};
use crate::remote::backend::{HttpNoteBackend, NoteBackend};
use crate::remote::suggestions::{HttpSuggestionClient, SuggestionService};
use crate::store::DataStore;
use std::path::PathBuf;

/// The main API facade for notez operations.
pub struct NotezApi<S: DataStore> {
    store: S,
    config_dir: PathBuf,
    config: NotezConfig,
}

impl<S: DataStore> NotezApi<S> {
    pub fn new(store: S, config_dir: PathBuf, config: NotezConfig) -> Self {
        Self {
            store,
            config_dir,
            config,
        }
    }

    pub fn create_note(&mut self, content: &str) -> Result<commands::CmdResult> {
        commands::create::run(&mut self.store, content)
    }

    pub fn list_notes(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn view_notes<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_index_args(indexes)?;
        commands::view::run(&self.store, &indexes)
    }

    pub fn update_note(&mut self, index: &str, content: &str) -> Result<commands::CmdResult> {
        let index = parse_single_index(index)?;
        commands::update::run(&mut self.store, index, content)
    }

    pub fn delete_notes<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let indexes = parse_index_args(indexes)?;
        commands::delete::run(&mut self.store, &indexes)
    }

    /// Fetch suggestions from the configured service.
    pub fn fetch_suggestions(&mut self, index: &str) -> Result<commands::CmdResult> {
        let url = self.config.suggestions_url.clone().ok_or_else(|| {
            NotezError::Config(
                "suggestions-url is not set (notez config suggestions-url <url>)".to_string(),
            )
        })?;
        let client = HttpSuggestionClient::new(&url, self.config.timeout())?;
        self.fetch_suggestions_with(&client, index)
    }

    /// Fetch suggestions from an explicit service.
    pub fn fetch_suggestions_with<G: SuggestionService + ?Sized>(
        &mut self,
        service: &G,
        index: &str,
    ) -> Result<commands::CmdResult> {
        let index = parse_single_index(index)?;
        commands::suggest::run(&mut self.store, service, index)
    }

    pub fn remote_list(&self) -> Result<commands::CmdResult> {
        commands::remote::list(&self.note_backend()?)
    }

    pub fn remote_create(&self, content: &str) -> Result<commands::CmdResult> {
        commands::remote::create(&self.note_backend()?, content)
    }

    pub fn remote_pull(&mut self) -> Result<commands::CmdResult> {
        let backend = self.note_backend()?;
        self.remote_pull_with(&backend)
    }

    pub fn remote_pull_with<R: NoteBackend + ?Sized>(
        &mut self,
        backend: &R,
    ) -> Result<commands::CmdResult> {
        commands::remote::pull(&mut self.store, backend)
    }

    pub fn config(&mut self, action: ConfigAction) -> Result<commands::CmdResult> {
        let result = commands::config::run(&self.config_dir, action)?;
        if let Some(config) = &result.config {
            self.config = config.clone();
        }
        Ok(result)
    }

    pub fn data_path(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.store)
    }

    fn note_backend(&self) -> Result<HttpNoteBackend> {
        let url = self.config.backend_url.clone().ok_or_else(|| {
            NotezError::Config("backend-url is not set (notez config backend-url <url>)".to_string())
        })?;
        HttpNoteBackend::new(&url, self.config.timeout())
    }
}

fn parse_index_args<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<DisplayIndex>> {
    if inputs.is_empty() {
        return Err(NotezError::Api("No index given".to_string()));
    }
    parse_indexes(inputs).map_err(NotezError::Api)
}

fn parse_single_index(input: &str) -> Result<DisplayIndex> {
    input.parse::<DisplayIndex>().map_err(NotezError::Api)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
