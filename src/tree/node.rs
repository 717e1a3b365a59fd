//! Tree vertices and the specificity-first traversal.

use super::matcher::{Extent, MatchFn, Matcher, Signature};

/// A vertex of the matcher tree.
///
/// Every child is a strict specialization of its parent: any prefix a child
/// accepts is also accepted by the parent. Children are kept in priority
/// order; the first one that accepts wins and the rest are never consulted.
#[derive(Debug)]
pub struct Node {
    mime: &'static str,
    extension: &'static str,
    matcher: Matcher,
    children: Vec<Node>,
}

impl Node {
    /// Create a leaf node.
    pub fn new(mime: &'static str, extension: &'static str, matcher: Matcher) -> Self {
        Self {
            mime,
            extension,
            matcher,
            children: Vec::new(),
        }
    }

    /// Leaf node with a fixed magic signature.
    pub fn magic(mime: &'static str, extension: &'static str, signature: Signature) -> Self {
        Self::new(mime, extension, Matcher::Magic(signature))
    }

    /// Leaf node with a structural check.
    pub fn structure(mime: &'static str, extension: &'static str, f: MatchFn) -> Self {
        Self::new(mime, extension, Matcher::Structure(f))
    }

    /// Leaf node with a heuristic check.
    pub fn heuristic(mime: &'static str, extension: &'static str, f: MatchFn) -> Self {
        Self::new(mime, extension, Matcher::Heuristic(f))
    }

    /// Attach children in priority order.
    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn mime(&self) -> &'static str {
        self.mime
    }

    /// Conventional extension including the leading dot, or `""` for abstract nodes.
    pub fn extension(&self) -> &'static str {
        self.extension
    }

    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Run this node's own matcher.
    #[inline]
    pub fn accepts(&self, prefix: &[u8]) -> bool {
        self.matcher.accepts(prefix)
    }

    /// Run this node's own matcher with a known [`Extent`].
    #[inline]
    pub fn accepts_in(&self, prefix: &[u8], extent: Extent) -> bool {
        self.matcher.accepts_in(prefix, extent)
    }

    /// Return the deepest node below `self` whose matcher accepts `prefix`.
    ///
    /// `self` is assumed to have accepted already; when no child accepts the
    /// result is `self`. Sibling order decides ties and later siblings are
    /// not evaluated once one accepts. The prefix is treated as possibly cut.
    pub fn find_match(&self, prefix: &[u8]) -> &Node {
        self.find_match_in(prefix, Extent::Partial)
    }

    /// [`find_match`](Self::find_match) for a prefix of known extent.
    pub fn find_match_in(&self, prefix: &[u8], extent: Extent) -> &Node {
        let mut current = self;
        let mut depth = 0usize;

        'descend: loop {
            for child in &current.children {
                if child.accepts_in(prefix, extent) {
                    depth += 1;
                    tracing::trace!(mime = child.mime, depth, "matcher accepted");
                    current = child;
                    continue 'descend;
                }
            }
            return current;
        }
    }

    /// All nodes of the subtree, depth-first pre-order, `self` first.
    pub fn flatten(&self) -> Vec<&Node> {
        let mut out = Vec::new();
        self.collect(&mut out);
        out
    }

    fn collect<'a>(&'a self, out: &mut Vec<&'a Node>) {
        out.push(self);
        for child in &self.children {
            child.collect(out);
        }
    }

    /// Visit every parent/child edge of the subtree.
    pub fn walk_edges<'a, F>(&'a self, visit: &mut F)
    where
        F: FnMut(&'a Node, &'a Node),
    {
        for child in &self.children {
            visit(self, child);
            child.walk_edges(visit);
        }
    }

    /// Chain of nodes from `self` down to the first node with the given MIME type.
    pub fn path_to(&self, mime: &str) -> Option<Vec<&Node>> {
        if self.mime == mime {
            return Some(vec![self]);
        }
        self.children.iter().find_map(|child| {
            child.path_to(mime).map(|mut path| {
                path.insert(0, self);
                path
            })
        })
    }

    /// Height of the subtree (a leaf has depth 1).
    pub fn depth(&self) -> usize {
        1 + self.children.iter().map(Node::depth).max().unwrap_or(0)
    }
}
