//! Detection result type.

use std::fmt;

use crate::tree::Node;

/// Outcome of a detection call: MIME type and canonical extension of the
/// deepest accepting node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Mime {
    mime: &'static str,
    extension: &'static str,
}

impl Mime {
    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Extension with leading dot, or `""` for abstract types.
    pub fn extension(&self) -> &'static str {
        self.extension
    }

    /// Case-insensitive comparison against a MIME type string.
    ///
    /// # Examples
    ///
    /// ```
    /// let mime = mimetree::detect(b"%PDF-1.4\n");
    /// assert!(mime.is("application/pdf"));
    /// assert!(mime.is("Application/PDF"));
    /// assert!(!mime.is("application/zip"));
    /// ```
    pub fn is(&self, expected: &str) -> bool {
        self.mime.eq_ignore_ascii_case(expected)
    }
}

impl From<&Node> for Mime {
    fn from(node: &Node) -> Self {
        Self {
            mime: node.mime(),
            extension: node.extension(),
        }
    }
}

impl fmt::Display for Mime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.mime)
    }
}
