//! Matcher tree and traversal engine.
//!
//! The tree is an ordered hierarchy of [`Node`]s where each child refines its
//! parent's format. Detection walks it from the root and settles on the
//! deepest accepting node. The process-wide instance returned by [`root`] is
//! built once on first use and never mutated, so it can be shared by any
//! number of concurrent detection calls without locking.

// Submodule declarations
pub mod matcher;
pub mod node;

// Re-exports
pub use matcher::{Extent, MatchFn, Matcher, Signature};
pub use node::Node;

use once_cell::sync::Lazy;

static TREE: Lazy<Node> = Lazy::new(crate::catalogue::build_tree);

/// The shared catalogue tree.
///
/// # Examples
///
/// ```
/// let root = mimetree::tree::root();
/// assert_eq!(root.mime(), "application/octet-stream");
/// assert_eq!(root.find_match(b"%PDF-1.7").mime(), "application/pdf");
/// ```
pub fn root() -> &'static Node {
    &TREE
}
