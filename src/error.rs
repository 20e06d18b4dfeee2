//! Error types for the Fabula reader core

use thiserror::Error;

/// Crate-wide result type
pub type Result<T> = std::result::Result<T, ReaderError>;

/// Reader error type
#[derive(Error, Debug)]
pub enum ReaderError {
    /// The backend answered with a non-success status.
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid response body: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Content extraction failed: {0}")]
    Content(#[from] crate::content::ContentError),

    #[error("Chapter not found: {0}")]
    ChapterNotFound(String),

    #[error("Highlight not found: {0}")]
    HighlightNotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ReaderError {
    /// Whether this failure should reach the notification layer.
    ///
    /// User-initiated mutations (create/delete highlight) surface their
    /// failures; passive operations (progress ping, offset locating) never
    /// do and are logged at debug level instead.
    pub fn is_notifiable(&self) -> bool {
        !matches!(self, ReaderError::Internal(_))
    }

    /// User-facing message for the notification layer.
    pub fn user_message(&self) -> String {
        match self {
            ReaderError::Api { message, .. } => message.clone(),
            ReaderError::Http(_) => "Could not reach the server".to_string(),
            ReaderError::Json(_) => "Unexpected response from the server".to_string(),
            ReaderError::Content(_) => "Could not read the chapter content".to_string(),
            ReaderError::ChapterNotFound(_) => "Chapter not found".to_string(),
            ReaderError::HighlightNotFound(_) => "Highlight not found".to_string(),
            ReaderError::Internal(_) => "Something went wrong".to_string(),
        }
    }
}
