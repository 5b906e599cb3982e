//! Error types for emojiplus
//!
//! Building and querying the catalog never fails; these cover the front ends.

use thiserror::Error;

/// Main error type for emojiplus operations
#[derive(Error, Debug)]
pub enum EmojiError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("GUI error: {0}")]
    GuiError(String),

    #[error("Clipboard unavailable: {0}")]
    ClipboardError(String),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Unknown output format '{0}' (expected text or json)")]
    UnknownFormat(String),
}

/// Result type alias for emojiplus operations
pub type Result<T> = std::result::Result<T, EmojiError>;

impl From<arboard::Error> for EmojiError {
    fn from(e: arboard::Error) -> Self {
        EmojiError::ClipboardError(e.to_string())
    }
}

impl From<eframe::Error> for EmojiError {
    fn from(e: eframe::Error) -> Self {
        EmojiError::GuiError(e.to_string())
    }
}
