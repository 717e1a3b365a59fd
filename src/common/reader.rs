//! Bounded prefix acquisition.
//!
//! Detection never looks past the first `limit` bytes of its input. For
//! in-memory data that is a plain sub-slice; for streams the head is read
//! into an owned buffer that then serves every matcher probe, so the source
//! is read at most once per call.

use std::io::{self, Read};

/// Default number of leading bytes inspected by a detection call.
pub const DEFAULT_READ_LIMIT: usize = 3072;

/// Upper bound accepted for a configured read limit (1 MiB).
pub const MAX_READ_LIMIT: usize = 1 << 20;

/// Zero-copy head of an in-memory buffer.
///
/// # Examples
///
/// ```
/// use mimetree::common::reader::buffer_prefix;
/// assert_eq!(buffer_prefix(b"abcdef", 4), b"abcd");
/// assert_eq!(buffer_prefix(b"ab", 4), b"ab");
/// ```
#[inline]
pub fn buffer_prefix(data: &[u8], limit: usize) -> &[u8] {
    &data[..data.len().min(limit)]
}

/// Read up to `limit` bytes from the head of `reader`.
///
/// Short reads are retried until the limit is reached or the reader reports
/// end of stream; an exhausted (or empty) source yields a shorter, possibly
/// empty, buffer rather than an error. `Interrupted` is retried, every other
/// I/O error is returned. No byte beyond `limit` is consumed.
pub fn read_prefix<R: Read>(reader: &mut R, limit: usize) -> io::Result<Vec<u8>> {
    let mut buf = vec![0u8; limit];
    let mut filled = 0usize;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }

    buf.truncate(filled);
    Ok(buf)
}
