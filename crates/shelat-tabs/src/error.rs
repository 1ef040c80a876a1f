//! Switcher error types

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SwitcherError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Tab index {index} out of range (0..{len})")]
    IndexOutOfRange { index: i64, len: usize },

    #[error("Tab not found: {0}")]
    NotFound(String),
}
