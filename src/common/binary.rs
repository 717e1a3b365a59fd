//! Bounds-checked binary field access shared by all matchers.
//!
//! Every fixed-offset read a matcher performs goes through this module. The
//! slice handed in is always the *filled* part of the bounded prefix, so a
//! read past its end yields `None` instead of faulting. Offset arithmetic is
//! done with `checked_add` because matchers derive offsets from untrusted
//! header fields.

use zerocopy::{BE, FromBytes, LE, U16, U32};

/// Return `len` bytes starting at `offset`, or `None` if the range leaves the slice.
///
/// # Examples
///
/// ```
/// use mimetree::common::binary::bytes_at;
/// let data = b"PK\x03\x04rest";
/// assert_eq!(bytes_at(data, 2, 2), Some(&b"\x03\x04"[..]));
/// assert_eq!(bytes_at(data, 6, 4), None);
/// ```
#[inline]
pub fn bytes_at(data: &[u8], offset: usize, len: usize) -> Option<&[u8]> {
    let end = offset.checked_add(len)?;
    data.get(offset..end)
}

/// Check whether `pattern` occurs at `offset`.
#[inline]
pub fn has_prefix_at(data: &[u8], offset: usize, pattern: &[u8]) -> bool {
    bytes_at(data, offset, pattern.len()) == Some(pattern)
}

/// Return the byte at `offset`, if present.
#[inline]
pub fn byte_at(data: &[u8], offset: usize) -> Option<u8> {
    data.get(offset).copied()
}

/// Read a little-endian u16 at the given offset.
///
/// # Examples
///
/// ```
/// use mimetree::common::binary::read_u16_le;
/// let data = [0x34, 0x12, 0x78, 0x56];
/// assert_eq!(read_u16_le(&data, 0), Some(0x1234));
/// assert_eq!(read_u16_le(&data, 3), None);
/// ```
#[inline]
pub fn read_u16_le(data: &[u8], offset: usize) -> Option<u16> {
    U16::<LE>::read_from_bytes(bytes_at(data, offset, 2)?)
        .ok()
        .map(|v| v.get())
}

/// Read a big-endian u16 at the given offset.
#[inline]
pub fn read_u16_be(data: &[u8], offset: usize) -> Option<u16> {
    U16::<BE>::read_from_bytes(bytes_at(data, offset, 2)?)
        .ok()
        .map(|v| v.get())
}

/// Read a little-endian u32 at the given offset.
///
/// # Examples
///
/// ```
/// use mimetree::common::binary::read_u32_le;
/// let data = [0x78, 0x56, 0x34, 0x12];
/// assert_eq!(read_u32_le(&data, 0), Some(0x12345678));
/// ```
#[inline]
pub fn read_u32_le(data: &[u8], offset: usize) -> Option<u32> {
    U32::<LE>::read_from_bytes(bytes_at(data, offset, 4)?)
        .ok()
        .map(|v| v.get())
}

/// Read a big-endian u32 at the given offset.
#[inline]
pub fn read_u32_be(data: &[u8], offset: usize) -> Option<u32> {
    U32::<BE>::read_from_bytes(bytes_at(data, offset, 4)?)
        .ok()
        .map(|v| v.get())
}

/// Case-insensitive `starts_with` for ASCII tokens.
#[inline]
pub fn starts_with_ignore_ascii_case(data: &[u8], prefix: &[u8]) -> bool {
    data.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Strip leading ASCII whitespace (space, tab, LF, CR, FF, VT).
#[inline]
pub fn trim_leading_ws(data: &[u8]) -> &[u8] {
    let start = data
        .iter()
        .position(|b| !is_ws(*b))
        .unwrap_or(data.len());
    &data[start..]
}

/// Strip trailing ASCII whitespace.
#[inline]
pub fn trim_trailing_ws(data: &[u8]) -> &[u8] {
    let end = data
        .iter()
        .rposition(|b| !is_ws(*b))
        .map_or(0, |pos| pos + 1);
    &data[..end]
}

#[inline]
pub(crate) const fn is_ws(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | 0x0B | 0x0C)
}
