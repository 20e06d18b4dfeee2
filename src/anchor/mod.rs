//! Highlight anchoring
//!
//! Two halves of the same contract:
//! - [`resolver`] turns a selected quote into stable character offsets at
//!   creation time
//! - [`locator`] turns a stored offset back into a position in the current
//!   render, best-effort
//!
//! Offsets carry no content-version guard; against edited content both
//! halves degrade silently rather than fail.

pub mod locator;
pub mod resolver;

pub use locator::{locate, FlashGuard, ScrollTarget, TextPosition, TextSpan};
pub use resolver::{resolve_offsets, OffsetRange};
