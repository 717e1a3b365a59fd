//! Matroska and WebM, distinguished by the EBML `DocType` element.

use memchr::memmem;

use crate::common::binary::has_prefix_at;

/// EBML header element ID.
pub const EBML_MAGIC: &[u8] = b"\x1A\x45\xDF\xA3";
/// `DocType` element ID.
const DOCTYPE_ID: &[u8] = b"\x42\x82";
/// Only the EBML header is searched; it is tiny and comes first.
const HEADER_SCAN: usize = 4096;

/// Decode an EBML variable-length size at the start of `data`.
///
/// Returns the value and the number of bytes it occupies.
fn read_vint(data: &[u8]) -> Option<(u64, usize)> {
    let first = *data.first()?;
    if first == 0 {
        return None;
    }
    let width = first.leading_zeros() as usize + 1;
    let tail = data.get(1..width)?;
    let mut value = u64::from(first) & (0xFF >> width);
    for &b in tail {
        value = (value << 8) | u64::from(b);
    }
    Some((value, width))
}

/// `DocType` string of the EBML header, if present in the prefix.
pub fn doc_type(prefix: &[u8]) -> Option<&[u8]> {
    if !has_prefix_at(prefix, 0, EBML_MAGIC) {
        return None;
    }
    let header = &prefix[..prefix.len().min(HEADER_SCAN)];
    let id_at = memmem::find(header, DOCTYPE_ID)?;
    let size_at = id_at + DOCTYPE_ID.len();
    let (len, width) = read_vint(header.get(size_at..)?)?;
    let start = size_at + width;
    let end = start.checked_add(usize::try_from(len).ok()?)?;
    header.get(start..end)
}

pub fn webm(prefix: &[u8]) -> bool {
    doc_type(prefix) == Some(&b"webm"[..])
}

pub fn matroska(prefix: &[u8]) -> bool {
    doc_type(prefix).is_some_and(|doc| doc.starts_with(b"matroska"))
}
