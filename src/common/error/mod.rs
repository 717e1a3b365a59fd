//! Error types for mimetree.
//!
//! Only failures to obtain bytes (and unusable configuration) are errors.
//! Malformed content is a classification outcome and never surfaces here.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
