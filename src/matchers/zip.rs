//! ZIP envelope: outer signature and a bounded walk over local file headers.
//!
//! Only the local headers inside the captured prefix are visited. The central
//! directory sits at the end of the archive and is usually outside the
//! prefix, so it is never consulted. A header that is cut short or carries a
//! bad signature ends the walk; the caller then simply sees fewer entries.

use memchr::memmem;

use crate::common::binary::{bytes_at, has_prefix_at, read_u16_le, read_u32_le};

/// Local file header signature.
pub const LOCAL_HEADER_SIGNATURE: &[u8] = b"PK\x03\x04";
/// End of central directory signature (empty archive).
pub const EMPTY_ARCHIVE_SIGNATURE: &[u8] = b"PK\x05\x06";
/// Spanned archive marker.
pub const SPANNED_ARCHIVE_SIGNATURE: &[u8] = b"PK\x07\x08";

/// Fixed part of a local file header.
const LOCAL_HEADER_LEN: usize = 30;
/// General-purpose flag: sizes follow the data in a data descriptor.
const FLAG_DATA_DESCRIPTOR: u16 = 0x0008;
/// Upper bound on visited entries; a prefix of a few KiB never holds more.
const MAX_ENTRIES: usize = 256;

/// Outer envelope check shared by the generic ZIP node.
pub fn zip(prefix: &[u8]) -> bool {
    has_prefix_at(prefix, 0, LOCAL_HEADER_SIGNATURE)
        || has_prefix_at(prefix, 0, EMPTY_ARCHIVE_SIGNATURE)
        || has_prefix_at(prefix, 0, SPANNED_ARCHIVE_SIGNATURE)
}

/// One local file header found inside the prefix.
#[derive(Debug, Clone, Copy)]
pub struct LocalEntry<'a> {
    /// Raw entry name bytes
    pub name: &'a [u8],
    /// Compression method (0 = stored, 8 = deflated)
    pub method: u16,
    /// General-purpose bit flags
    pub flags: u16,
    /// Declared compressed size (0 when a data descriptor is used)
    pub compressed_size: u32,
    /// Extra field bytes
    pub extra: &'a [u8],
    /// Entry data available in the prefix (may be shorter than declared)
    pub data: &'a [u8],
}

impl<'a> LocalEntry<'a> {
    /// Stored entry data when the whole declared payload is inside the prefix.
    ///
    /// The slice borrows from the prefix, not from the entry, so it stays
    /// valid after the iterator item is dropped.
    pub fn stored_data(&self) -> Option<&'a [u8]> {
        if self.method != 0 || self.flags & FLAG_DATA_DESCRIPTOR != 0 {
            return None;
        }
        let len = self.compressed_size as usize;
        self.data.get(..len)
    }

    /// Whether the extra field holds a header with the given ID.
    pub fn has_extra_id(&self, id: u16) -> bool {
        let mut pos = 0usize;
        while let (Some(header_id), Some(size)) =
            (read_u16_le(self.extra, pos), read_u16_le(self.extra, pos + 2))
        {
            if header_id == id {
                return true;
            }
            pos += 4 + size as usize;
        }
        false
    }
}

/// Iterator over the local file headers of a ZIP prefix.
///
/// # Examples
///
/// ```
/// use mimetree::matchers::zip::ZipEntries;
///
/// let mut data = b"PK\x03\x04".to_vec();
/// data.extend_from_slice(&[0u8; 14]);          // version, flags, method, time, date, crc
/// data.extend_from_slice(&3u32.to_le_bytes()); // compressed size
/// data.extend_from_slice(&3u32.to_le_bytes()); // uncompressed size
/// data.extend_from_slice(&5u16.to_le_bytes()); // name length
/// data.extend_from_slice(&0u16.to_le_bytes()); // extra length
/// data.extend_from_slice(b"a.txt");
/// data.extend_from_slice(b"abc");
///
/// let names: Vec<_> = ZipEntries::new(&data).map(|e| e.name).collect();
/// assert_eq!(names, [&b"a.txt"[..]]);
/// ```
#[derive(Debug, Clone)]
pub struct ZipEntries<'a> {
    data: &'a [u8],
    offset: usize,
    visited: usize,
    done: bool,
}

impl<'a> ZipEntries<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            offset: 0,
            visited: 0,
            done: false,
        }
    }

    fn stop(&mut self) -> Option<LocalEntry<'a>> {
        self.done = true;
        None
    }

    fn corrupt(&mut self, reason: &'static str) -> Option<LocalEntry<'a>> {
        tracing::debug!(offset = self.offset, reason, "zip index walk stopped");
        self.stop()
    }

    /// Find the next local header signature strictly after `from`.
    fn resync(&self, from: usize) -> Option<usize> {
        let haystack = self.data.get(from..)?;
        memmem::find(haystack, LOCAL_HEADER_SIGNATURE).map(|pos| from + pos)
    }
}

impl<'a> Iterator for ZipEntries<'a> {
    type Item = LocalEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.visited >= MAX_ENTRIES || self.offset >= self.data.len() {
            return self.stop();
        }
        if !has_prefix_at(self.data, self.offset, LOCAL_HEADER_SIGNATURE) {
            return self.corrupt("bad local header signature");
        }

        let base = self.offset;
        let (Some(flags), Some(method), Some(compressed_size), Some(name_len), Some(extra_len)) = (
            read_u16_le(self.data, base + 6),
            read_u16_le(self.data, base + 8),
            read_u32_le(self.data, base + 18),
            read_u16_le(self.data, base + 26),
            read_u16_le(self.data, base + 28),
        ) else {
            return self.corrupt("truncated local header");
        };

        let name_start = base + LOCAL_HEADER_LEN;
        let Some(name) = bytes_at(self.data, name_start, name_len as usize) else {
            return self.corrupt("truncated entry name");
        };
        let extra_start = name_start + name_len as usize;
        let extra = bytes_at(self.data, extra_start, extra_len as usize).unwrap_or(&[]);
        let data_start = extra_start + extra_len as usize;
        let data_end = data_start
            .saturating_add(compressed_size as usize)
            .min(self.data.len());
        let data = self.data.get(data_start..data_end).unwrap_or(&[]);

        self.visited += 1;
        let sized = flags & FLAG_DATA_DESCRIPTOR == 0 && compressed_size != 0;
        let next = if sized {
            data_start.checked_add(compressed_size as usize)
        } else {
            self.resync(data_start.min(self.data.len()))
        };
        match next {
            Some(next) if next > base => self.offset = next,
            _ => self.done = true,
        }

        Some(LocalEntry {
            name,
            method,
            flags,
            compressed_size,
            extra,
            data,
        })
    }
}

/// Whether any visible entry satisfies `pred`.
#[inline]
pub fn any_entry(prefix: &[u8], mut pred: impl FnMut(&LocalEntry<'_>) -> bool) -> bool {
    ZipEntries::new(prefix).any(|entry| pred(&entry))
}
