//! Byte Order Mark (BOM) utilities for the text heuristic.
//!
//! Provides detection and stripping helpers for the Unicode encodings a
//! textual prefix may announce.

/// Supported BOM encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BomKind {
    Utf8,
    Utf16Le,
    Utf16Be,
    Utf32Le,
    Utf32Be,
}

impl BomKind {
    /// Returns the byte representation of the BOM.
    #[inline]
    pub const fn as_bytes(&self) -> &'static [u8] {
        match self {
            BomKind::Utf8 => &UTF8_BOM,
            BomKind::Utf16Le => &UTF16_LE_BOM,
            BomKind::Utf16Be => &UTF16_BE_BOM,
            BomKind::Utf32Le => &UTF32_LE_BOM,
            BomKind::Utf32Be => &UTF32_BE_BOM,
        }
    }

    /// Returns the length in bytes of the BOM.
    #[inline]
    #[allow(clippy::len_without_is_empty)] // No need to check for empty BOMs
    pub const fn len(&self) -> usize {
        self.as_bytes().len()
    }
}

/// UTF-8 BOM bytes.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];
/// UTF-16 little-endian BOM bytes.
pub const UTF16_LE_BOM: [u8; 2] = [0xFF, 0xFE];
/// UTF-16 big-endian BOM bytes.
pub const UTF16_BE_BOM: [u8; 2] = [0xFE, 0xFF];
/// UTF-32 little-endian BOM bytes.
pub const UTF32_LE_BOM: [u8; 4] = [0xFF, 0xFE, 0x00, 0x00];
/// UTF-32 big-endian BOM bytes.
pub const UTF32_BE_BOM: [u8; 4] = [0x00, 0x00, 0xFE, 0xFF];

/// Detect the BOM at the start of `data`.
///
/// UTF-32 marks are checked before UTF-16 ones because the UTF-32 LE mark
/// begins with the UTF-16 LE mark.
///
/// # Examples
///
/// ```
/// use mimetree::common::bom::{detect_bom, BomKind};
/// assert_eq!(detect_bom(b"\xEF\xBB\xBF<html>"), Some(BomKind::Utf8));
/// assert_eq!(detect_bom(b"\xFF\xFEh\x00"), Some(BomKind::Utf16Le));
/// assert_eq!(detect_bom(b"plain"), None);
/// ```
pub fn detect_bom(data: &[u8]) -> Option<BomKind> {
    if data.starts_with(&UTF32_BE_BOM) {
        return Some(BomKind::Utf32Be);
    }
    if data.starts_with(&UTF32_LE_BOM) {
        return Some(BomKind::Utf32Le);
    }
    if data.starts_with(&UTF8_BOM) {
        return Some(BomKind::Utf8);
    }
    if data.starts_with(&UTF16_BE_BOM) {
        return Some(BomKind::Utf16Be);
    }
    if data.starts_with(&UTF16_LE_BOM) {
        return Some(BomKind::Utf16Le);
    }
    None
}

/// Skip a leading UTF-8 BOM, if any.
#[inline]
pub fn strip_utf8_bom(data: &[u8]) -> &[u8] {
    data.strip_prefix(&UTF8_BOM[..]).unwrap_or(data)
}

/// Whether `data` stops in the middle of a character.
///
/// UTF-16 after its BOM: an odd trailing byte or an unpaired high surrogate
/// at the end. Anything else is read as UTF-8: the bytes are valid up to an
/// incomplete final sequence. Other decoding errors do not count; they make
/// the data binary wherever the end falls.
///
/// # Examples
///
/// ```
/// use mimetree::common::bom::ends_mid_character;
/// assert!(ends_mid_character(b"caf\xC3"));
/// assert!(!ends_mid_character("caf\u{e9}".as_bytes()));
/// assert!(!ends_mid_character(b"\xFF\xFF"));
/// ```
pub fn ends_mid_character(data: &[u8]) -> bool {
    match detect_bom(data) {
        Some(kind @ (BomKind::Utf16Le | BomKind::Utf16Be)) => {
            let body = &data[kind.len()..];
            if body.len() % 2 == 1 {
                return true;
            }
            let Some(last) = body.len().checked_sub(2).map(|at| [body[at], body[at + 1]]) else {
                return false;
            };
            let unit = if kind == BomKind::Utf16Le {
                u16::from_le_bytes(last)
            } else {
                u16::from_be_bytes(last)
            };
            (0xD800..0xDC00).contains(&unit)
        },
        _ => matches!(std::str::from_utf8(strip_utf8_bom(data)), Err(e) if e.error_len().is_none()),
    }
}
