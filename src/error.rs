// Error types for paperdeck.
// Covers configuration, catalog lookup, deck construction and terminal IO.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown paper: {0}")]
    UnknownPaper(String),

    #[error("A slide deck needs at least one slide")]
    EmptyDeck,

    #[error("Duplicate slide id in deck: {0}")]
    DuplicateSlide(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DeckError>;
