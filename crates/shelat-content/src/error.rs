//! Content error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid tabs: {0}")]
    Tabs(#[from] shelat_tabs::SwitcherError),

    #[error("Invalid content: {0}")]
    Invalid(String),
}
