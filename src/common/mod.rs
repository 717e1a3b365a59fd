//! Common types and utilities shared by the tree, the matchers and the
//! detection API.

// Submodule declarations
pub mod binary;
pub mod bom;
pub mod error;
pub mod reader;

// Re-exports for convenience
pub use error::{Error, Result};
pub use reader::{DEFAULT_READ_LIMIT, MAX_READ_LIMIT};
