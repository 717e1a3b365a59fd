//! Format matchers plugged into the tree.
//!
//! Every matcher is a pure function of the bounded prefix returning `bool`.
//! Offsets are always checked against the filled length, so a short or empty
//! prefix is a plain non-match. Simple magic numbers live in the catalogue as
//! [`Signature`](crate::tree::Signature)s; the functions here cover formats
//! that need a structural look (container indexes, header fields) or a
//! content heuristic.

// Submodule declarations
pub mod archive;
pub mod audio;
pub mod delimited;
pub mod document;
pub mod executable;
pub mod font;
pub mod geo;
pub mod image;
pub mod isobmff;
pub mod json;
pub mod markup;
pub mod odf;
pub mod ole2;
pub mod ooxml;
pub mod package;
pub mod riff;
pub mod script;
pub mod text;
pub mod video;
pub mod zip;

/// Zero-length input.
#[inline]
pub fn empty(prefix: &[u8]) -> bool {
    prefix.is_empty()
}
