//! mimetree - content-based MIME type detection
//!
//! Identifies the media type of a byte stream from its content alone (magic
//! numbers, container indexes and text heuristics), never from a file name.
//!
//! # Features
//!
//! - **Specificity tree**: formats are organized as a tree of matchers where
//!   each child refines its parent; the deepest accepting node wins
//! - **Bounded reads**: only the first few KiB of an input are inspected
//! - **Container disambiguation**: ZIP and OLE/CFB envelopes are resolved to
//!   the Office, OpenDocument, EPUB, Java or Android package they carry
//! - **Text heuristic**: printable UTF-8/UTF-16 input is refined into HTML,
//!   XML vocabularies, JSON, CSV, scripts and other text formats
//! - **Three entry points**: buffer, reader and file, with identical results
//!
//! # Example - Detecting a buffer
//!
//! ```
//! let mime = mimetree::detect(b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR");
//! assert_eq!(mime.mime(), "image/png");
//! assert_eq!(mime.extension(), ".png");
//! ```
//!
//! # Example - Detecting a file
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mime = mimetree::detect_file("report.docx")?;
//! println!("{} ({})", mime, mime.extension());
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Custom read limit
//!
//! ```
//! use mimetree::{Config, Detector};
//!
//! # fn main() -> mimetree::Result<()> {
//! let detector = Detector::new(Config::new().with_read_limit(64 * 1024))?;
//! let mime = detector.detect_reader(std::io::Cursor::new(b"{\"a\": [1, 2]}"))?;
//! assert!(mime.is("application/json"));
//! # Ok(())
//! # }
//! ```

/// Catalogue of supported formats: the concrete tree and its report
pub mod catalogue;

/// Shared utilities: errors, bounds-checked readers, BOM handling, bounded prefix
pub mod common;

/// Detection configuration
pub mod config;

/// Detection entry points
pub mod detection;

/// Format matchers
///
/// Pure functions over the bounded prefix, one per format that needs more
/// than a fixed magic number.
pub mod matchers;

/// Matcher tree and traversal engine
pub mod tree;

// Re-export commonly used types for convenience
pub use common::{Error, Result};
pub use config::Config;
pub use detection::{Detector, Mime, detect, detect_file, detect_reader};
pub use tree::root;
