//! Wire types for the consumed backend contract

use serde::{Deserialize, Serialize};

/// A chapter record, including its rendered content.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chapter {
    pub id: String,
    pub story_id: String,
    pub title: String,
    /// Rendered HTML of the chapter body
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word_count: Option<u32>,
}

/// Reading-progress ping payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressUpdate {
    /// Percent read, 0..=100
    pub progress: u8,
}

/// Error body shape the backend uses for non-success responses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[allow(dead_code)]
    pub error: String,
    pub message: String,
}
