//! Typed client for the remote backend
//!
//! The backend owns persistence, ranking, moderation, and auth; this module
//! only models the contract the reader consumes: chapter fetch, highlight
//! list/create/delete, and the fire-and-forget progress ping.

mod client;
mod types;

pub use client::ApiClient;
pub use types::{Chapter, ProgressUpdate};
