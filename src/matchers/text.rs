//! Text/binary heuristic and the line-oriented text formats.
//!
//! A prefix is text when it is non-empty, carries no ASCII control character
//! (C0 or DEL) other than TAB, LF and CR, and decodes cleanly. UTF-8 (with or
//! without BOM) is the default; a UTF-16 BOM switches to UTF-16 decoding. The
//! read limit may cut the last character in half, so an incomplete trailing
//! sequence is tolerated in both encodings. When the whole input fits in the
//! prefix there is no cut, and the tree rejects such a tail before these
//! functions run (see [`Extent`](crate::tree::Extent)).
//!
//! Text subtypes scan ASCII tokens and only apply to the UTF-8 branch; every
//! one of them goes through [`utf8_text`] so that a subtype never accepts a
//! prefix the text node rejects.

use std::borrow::Cow;

use encoding_rs::{Encoding, UTF_16BE, UTF_16LE};

use crate::common::binary::{starts_with_ignore_ascii_case, trim_leading_ws};
use crate::common::bom::{BomKind, detect_bom, strip_utf8_bom};

#[inline]
const fn is_allowed_control(b: u8) -> bool {
    matches!(b, b'\t' | b'\n' | b'\r')
}

#[inline]
fn has_disallowed_control(data: &[u8]) -> bool {
    data.iter().any(|&b| b.is_ascii_control() && !is_allowed_control(b))
}

/// Text node: UTF-8 or BOM-marked UTF-16 text.
///
/// # Examples
///
/// ```
/// use mimetree::matchers::text::text;
/// assert!(text(b"hello, world\n"));
/// assert!(!text(b"hello\x00world"));
/// assert!(!text(b""));
/// ```
pub fn text(prefix: &[u8]) -> bool {
    match detect_bom(prefix) {
        Some(kind @ BomKind::Utf16Le) => utf16_text(&prefix[kind.len()..], UTF_16LE),
        Some(kind @ BomKind::Utf16Be) => utf16_text(&prefix[kind.len()..], UTF_16BE),
        _ => utf8_text(prefix),
    }
}

/// UTF-8 branch of the heuristic: optional BOM, allowed controls only,
/// valid UTF-8 up to a possibly cut final character.
pub fn utf8_text(prefix: &[u8]) -> bool {
    if prefix.is_empty() {
        return false;
    }
    let body = strip_utf8_bom(prefix);
    if has_disallowed_control(body) {
        return false;
    }
    match std::str::from_utf8(body) {
        Ok(_) => true,
        // `error_len() == None` means the input ended mid-sequence.
        Err(e) => e.error_len().is_none(),
    }
}

fn utf16_text(body: &[u8], encoding: &'static Encoding) -> bool {
    let mut end = body.len() & !1;
    // Drop a high surrogate whose pair was cut off by the read limit.
    if end >= 2 {
        let last = if encoding == UTF_16LE {
            u16::from_le_bytes([body[end - 2], body[end - 1]])
        } else {
            u16::from_be_bytes([body[end - 2], body[end - 1]])
        };
        if (0xD800..0xDC00).contains(&last) {
            end -= 2;
        }
    }
    let decoded: Option<Cow<'_, str>> =
        encoding.decode_without_bom_handling_and_without_replacement(&body[..end]);
    match decoded {
        Some(text) => !text
            .chars()
            .any(|c| c.is_ascii_control() && !is_allowed_control(c as u8)),
        None => false,
    }
}

/// Content after an optional UTF-8 BOM and leading whitespace.
#[inline]
pub(crate) fn body(prefix: &[u8]) -> &[u8] {
    trim_leading_ws(strip_utf8_bom(prefix))
}

/// Whether `data` is exactly `token` or `token` followed by a line break.
fn token_line(data: &[u8], token: &[u8]) -> bool {
    if !starts_with_ignore_ascii_case(data, token) {
        return false;
    }
    matches!(data.get(token.len()), Some(b'\n') | Some(b'\r'))
}

/// Rich Text Format.
pub fn rtf(prefix: &[u8]) -> bool {
    body(prefix).starts_with(br"{\rtf") && utf8_text(prefix)
}

/// vCard.
pub fn vcard(prefix: &[u8]) -> bool {
    token_line(body(prefix), b"BEGIN:VCARD") && utf8_text(prefix)
}

/// iCalendar.
pub fn icalendar(prefix: &[u8]) -> bool {
    token_line(body(prefix), b"BEGIN:VCALENDAR") && utf8_text(prefix)
}

/// Web ARChive record header.
pub fn warc(prefix: &[u8]) -> bool {
    let data = strip_utf8_bom(prefix);
    (data.starts_with(b"WARC/1.0") || data.starts_with(b"WARC/1.1")) && utf8_text(prefix)
}

/// WebVTT subtitles: `WEBVTT` alone or followed by blank, tab or line break.
pub fn vtt(prefix: &[u8]) -> bool {
    let data = strip_utf8_bom(prefix);
    if !data.starts_with(b"WEBVTT") {
        return false;
    }
    let terminated = matches!(
        data.get(6),
        None | Some(b' ') | Some(b'\t') | Some(b'\n') | Some(b'\r')
    );
    terminated && utf8_text(prefix)
}
