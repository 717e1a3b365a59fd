//! ODF (OpenDocument Format) and EPUB detection.
//!
//! Both formats put an uncompressed `mimetype` entry first in the archive,
//! whose content is the exact MIME type of the package. The comparison is
//! exact so that `...text` and `...text-template` stay apart.

use super::zip::{ZipEntries, zip};
use crate::common::binary::trim_trailing_ws;

/// Read the declared package MIME type from the leading `mimetype` entry.
///
/// # Examples
///
/// ```
/// use mimetree::matchers::odf::declared_mimetype;
/// assert_eq!(declared_mimetype(b"%PDF"), None);
/// ```
pub fn declared_mimetype(prefix: &[u8]) -> Option<&[u8]> {
    if !zip(prefix) {
        return None;
    }
    let first = ZipEntries::new(prefix).next()?;
    if first.name != b"mimetype" {
        return None;
    }
    first.stored_data().map(trim_trailing_ws)
}

#[inline]
fn declares(prefix: &[u8], mime: &str) -> bool {
    declared_mimetype(prefix) == Some(mime.as_bytes())
}

pub fn odt(prefix: &[u8]) -> bool {
    declares(prefix, "application/vnd.oasis.opendocument.text")
}

pub fn ott(prefix: &[u8]) -> bool {
    declares(prefix, "application/vnd.oasis.opendocument.text-template")
}

pub fn ods(prefix: &[u8]) -> bool {
    declares(prefix, "application/vnd.oasis.opendocument.spreadsheet")
}

pub fn ots(prefix: &[u8]) -> bool {
    declares(prefix, "application/vnd.oasis.opendocument.spreadsheet-template")
}

pub fn odp(prefix: &[u8]) -> bool {
    declares(prefix, "application/vnd.oasis.opendocument.presentation")
}

pub fn otp(prefix: &[u8]) -> bool {
    declares(prefix, "application/vnd.oasis.opendocument.presentation-template")
}

pub fn odg(prefix: &[u8]) -> bool {
    declares(prefix, "application/vnd.oasis.opendocument.graphics")
}

pub fn otg(prefix: &[u8]) -> bool {
    declares(prefix, "application/vnd.oasis.opendocument.graphics-template")
}

/// OpenDocument formula (.odf).
pub fn odf(prefix: &[u8]) -> bool {
    declares(prefix, "application/vnd.oasis.opendocument.formula")
}

/// EPUB publication.
pub fn epub(prefix: &[u8]) -> bool {
    declares(prefix, "application/epub+zip")
}
