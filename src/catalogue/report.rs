//! Catalogue report: every node of the tree as an (extension, MIME type) pair.
//!
//! Pure read-only introspection of the tree, used to publish the list of
//! supported types. Entries follow the depth-first pre-order of
//! [`Node::flatten`], so the root comes first.

use std::fmt::Write as _;

use serde::Serialize;

use crate::common::{Error, Result};
use crate::tree::{self, Node};

/// One row of the catalogue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CatalogueEntry {
    /// Extension with leading dot, empty for abstract nodes
    pub extension: &'static str,
    pub mime: &'static str,
}

impl From<&Node> for CatalogueEntry {
    fn from(node: &Node) -> Self {
        Self {
            extension: node.extension(),
            mime: node.mime(),
        }
    }
}

/// Report over one tree.
#[derive(Debug, Clone, Copy)]
pub struct Catalogue<'t> {
    root: &'t Node,
}

impl Default for Catalogue<'static> {
    fn default() -> Self {
        Self::new(tree::root())
    }
}

impl<'t> Catalogue<'t> {
    pub fn new(root: &'t Node) -> Self {
        Self { root }
    }

    /// All entries, depth-first pre-order.
    pub fn entries(&self) -> Vec<CatalogueEntry> {
        self.root
            .flatten()
            .into_iter()
            .map(CatalogueEntry::from)
            .collect()
    }

    /// Render the Markdown table of supported types.
    ///
    /// # Examples
    ///
    /// ```
    /// use mimetree::catalogue::Catalogue;
    /// let table = Catalogue::default().to_markdown();
    /// assert!(table.contains("**.pdf** | application/pdf\n"));
    /// ```
    pub fn to_markdown(&self) -> String {
        let entries = self.entries();
        let mut out = format!(
            "## {} Supported MIME types\n\
             This file is generated from the matcher tree. Do not edit manually.\n\
             \n\
             Extension | MIME type\n\
             --------- | --------\n",
            entries.len()
        );
        for entry in &entries {
            let ext = if entry.extension.is_empty() {
                "n/a"
            } else {
                entry.extension
            };
            // Writing to a String cannot fail.
            let _ = writeln!(out, "**{}** | {}", ext, entry.mime);
        }
        out
    }

    /// Serialize the entries as a YAML sequence.
    pub fn to_yaml(&self) -> Result<String> {
        serde_saphyr::to_string(&self.entries())
            .map_err(|e| Error::Serialization(format!("Failed to serialize catalogue: {}", e)))
    }
}

/// Entries of the shared tree.
pub fn supported_mimes() -> Vec<CatalogueEntry> {
    Catalogue::default().entries()
}
