//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Content error: {0}")]
    Content(#[from] shelat_content::ContentError),

    #[error("Tab error: {0}")]
    Switcher(#[from] shelat_tabs::SwitcherError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No page at {0}")]
    NotFound(String),

    #[error("Asset path not allowed: {0}")]
    ForbiddenAsset(String),

    #[error("No page open in view {0}")]
    ViewNotOpen(String),

    #[error("Page {0} has no tab switcher")]
    NoSwitcher(String),

    #[error("Configuration error: {0}")]
    Config(String),
}
