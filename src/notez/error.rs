use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum NotezError {
    #[error("Note not found: {0}")]
    NoteNotFound(Uuid),

    #[error("Index {index} is out of range (collection has {len} notes)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Note content cannot be empty")]
    EmptyContent,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Remote error: {0}")]
    Remote(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Api Error: {0}")]
    Api(String),
}

impl From<reqwest::Error> for NotezError {
    fn from(err: reqwest::Error) -> Self {
        NotezError::Remote(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, NotezError>;
