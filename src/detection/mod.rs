//! Detection API.
//!
//! Buffer, stream and file entry points over the shared matcher tree. Buffer
//! detection never fails; stream and file detection fail only when the bytes
//! cannot be obtained.

// Submodule declarations
pub mod functions;
pub mod types;

// Re-exports
pub use functions::{Detector, detect, detect_file, detect_reader};
pub use types::Mime;
