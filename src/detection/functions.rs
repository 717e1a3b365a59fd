//! Detection entry points.
//!
//! The three sources (buffer, reader, file) only differ in how the bounded
//! prefix is obtained; they share one traversal call, so identical bytes
//! always classify identically.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::types::Mime;
use crate::common::reader::{buffer_prefix, read_prefix};
use crate::common::{Error, Result};
use crate::config::Config;
use crate::tree::{self, Extent, Node};

/// Detection engine bound to a tree and a configuration.
///
/// Cheap to construct and `Copy`; the tree is only borrowed.
#[derive(Debug, Clone, Copy)]
pub struct Detector<'t> {
    root: &'t Node,
    config: Config,
}

impl Default for Detector<'static> {
    fn default() -> Self {
        Self {
            root: tree::root(),
            config: Config::default(),
        }
    }
}

impl Detector<'static> {
    /// Detector over the shared catalogue tree.
    pub fn new(config: Config) -> Result<Self> {
        Self::with_root(tree::root(), config)
    }
}

impl<'t> Detector<'t> {
    /// Detector over a caller-supplied tree.
    pub fn with_root(root: &'t Node, config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self { root, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn root(&self) -> &'t Node {
        self.root
    }

    /// Classify an in-memory buffer. Never fails.
    pub fn detect(&self, data: &[u8]) -> Mime {
        let prefix = buffer_prefix(data, self.config.read_limit);
        self.classify(prefix, "buffer")
    }

    /// Classify the head of a byte stream.
    ///
    /// At most `read_limit` bytes are consumed. Fails only when the reader
    /// returns an error.
    pub fn detect_reader<R: Read>(&self, mut reader: R) -> Result<Mime> {
        let prefix = read_prefix(&mut reader, self.config.read_limit)?;
        Ok(self.classify(&prefix, "reader"))
    }

    /// Classify the head of a named file.
    ///
    /// A file that cannot be opened is reported as [`Error::Open`].
    pub fn detect_file<P: AsRef<Path>>(&self, path: P) -> Result<Mime> {
        let path = path.as_ref();
        let mut file = File::open(path).map_err(|source| Error::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let prefix = read_prefix(&mut file, self.config.read_limit)?;
        Ok(self.classify(&prefix, "file"))
    }

    fn classify(&self, prefix: &[u8], source: &'static str) -> Mime {
        let extent = Extent::of(prefix.len(), self.config.read_limit);
        let mime = Mime::from(self.root.find_match_in(prefix, extent));
        tracing::debug!(
            source,
            prefix_len = prefix.len(),
            ?extent,
            mime = mime.mime(),
            "detected media type"
        );
        mime
    }
}

/// Classify an in-memory buffer with the default configuration.
///
/// # Examples
///
/// ```
/// assert_eq!(mimetree::detect(b"").mime(), "inode/x-empty");
/// assert_eq!(mimetree::detect(b"\x89PNG\r\n\x1a\n").extension(), ".png");
/// assert_eq!(mimetree::detect(b"a,b\n1,2\n").mime(), "text/csv");
/// ```
pub fn detect(data: &[u8]) -> Mime {
    Detector::default().detect(data)
}

/// Classify the head of a byte stream with the default configuration.
pub fn detect_reader<R: Read>(reader: R) -> Result<Mime> {
    Detector::default().detect_reader(reader)
}

/// Classify a named file with the default configuration.
pub fn detect_file<P: AsRef<Path>>(path: P) -> Result<Mime> {
    Detector::default().detect_file(path)
}
