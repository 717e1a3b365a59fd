//! JSON, GeoJSON and newline-delimited JSON.
//!
//! The validator is a small recursive-descent scanner that never builds a
//! value. Running out of input while everything seen so far is valid is its
//! own outcome, so a document cut by the read limit is still recognized.

use memchr::memmem;

use super::text::{body, utf8_text};
use crate::common::binary::trim_leading_ws;

/// Nesting deeper than this is rejected rather than recursed into.
const MAX_DEPTH: usize = 128;

/// Result of scanning one JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scan {
    /// A complete value ends at this offset.
    Complete(usize),
    /// The input ended inside a value that was valid so far.
    Truncated,
    /// A syntax error.
    Invalid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stop {
    Eof,
    Invalid,
}

type Step = Result<(), Stop>;

struct Scanner<'a> {
    data: &'a [u8],
    pos: usize,
}

impl Scanner<'_> {
    fn peek(&self) -> Result<u8, Stop> {
        self.data.get(self.pos).copied().ok_or(Stop::Eof)
    }

    fn skip_ws(&mut self) {
        while matches!(self.data.get(self.pos), Some(b' ' | b'\t' | b'\n' | b'\r')) {
            self.pos += 1;
        }
    }

    fn value(&mut self, depth: usize) -> Step {
        self.skip_ws();
        match self.peek()? {
            b'{' => self.object(depth + 1),
            b'[' => self.array(depth + 1),
            b'"' => self.string(),
            b't' => self.literal(b"true"),
            b'f' => self.literal(b"false"),
            b'n' => self.literal(b"null"),
            b'-' | b'0'..=b'9' => self.number(),
            _ => Err(Stop::Invalid),
        }
    }

    fn literal(&mut self, word: &[u8]) -> Step {
        for &expected in word {
            match self.data.get(self.pos) {
                None => return Err(Stop::Eof),
                Some(&b) if b == expected => self.pos += 1,
                Some(_) => return Err(Stop::Invalid),
            }
        }
        Ok(())
    }

    fn string(&mut self) -> Step {
        self.pos += 1;
        loop {
            match self.peek()? {
                b'"' => {
                    self.pos += 1;
                    return Ok(());
                },
                b'\\' => {
                    self.pos += 1;
                    match self.peek()? {
                        b'u' => {
                            self.pos += 1;
                            for _ in 0..4 {
                                if !self.peek()?.is_ascii_hexdigit() {
                                    return Err(Stop::Invalid);
                                }
                                self.pos += 1;
                            }
                        },
                        b'"' | b'\\' | b'/' | b'b' | b'f' | b'n' | b'r' | b't' => self.pos += 1,
                        _ => return Err(Stop::Invalid),
                    }
                },
                b if b < 0x20 => return Err(Stop::Invalid),
                _ => self.pos += 1,
            }
        }
    }

    fn digits(&mut self) -> Step {
        if !self.peek()?.is_ascii_digit() {
            return Err(Stop::Invalid);
        }
        while self.data.get(self.pos).is_some_and(u8::is_ascii_digit) {
            self.pos += 1;
        }
        Ok(())
    }

    fn number(&mut self) -> Step {
        if self.peek()? == b'-' {
            self.pos += 1;
        }
        if self.peek()? == b'0' {
            self.pos += 1;
        } else {
            self.digits()?;
        }
        if self.data.get(self.pos) == Some(&b'.') {
            self.pos += 1;
            self.digits()?;
        }
        if matches!(self.data.get(self.pos), Some(b'e' | b'E')) {
            self.pos += 1;
            if matches!(self.data.get(self.pos), Some(b'+' | b'-')) {
                self.pos += 1;
            }
            self.digits()?;
        }
        // A number touching the end of input may continue past it.
        if self.pos == self.data.len() {
            return Err(Stop::Eof);
        }
        Ok(())
    }

    fn object(&mut self, depth: usize) -> Step {
        if depth > MAX_DEPTH {
            return Err(Stop::Invalid);
        }
        self.pos += 1;
        self.skip_ws();
        if self.peek()? == b'}' {
            self.pos += 1;
            return Ok(());
        }
        loop {
            self.skip_ws();
            if self.peek()? != b'"' {
                return Err(Stop::Invalid);
            }
            self.string()?;
            self.skip_ws();
            if self.peek()? != b':' {
                return Err(Stop::Invalid);
            }
            self.pos += 1;
            self.value(depth)?;
            self.skip_ws();
            match self.peek()? {
                b',' => self.pos += 1,
                b'}' => {
                    self.pos += 1;
                    return Ok(());
                },
                _ => return Err(Stop::Invalid),
            }
        }
    }

    fn array(&mut self, depth: usize) -> Step {
        if depth > MAX_DEPTH {
            return Err(Stop::Invalid);
        }
        self.pos += 1;
        self.skip_ws();
        if self.peek()? == b']' {
            self.pos += 1;
            return Ok(());
        }
        loop {
            self.value(depth)?;
            self.skip_ws();
            match self.peek()? {
                b',' => self.pos += 1,
                b']' => {
                    self.pos += 1;
                    return Ok(());
                },
                _ => return Err(Stop::Invalid),
            }
        }
    }
}

/// Scan the first JSON value of `data`.
///
/// # Examples
///
/// ```
/// use mimetree::matchers::json::{scan, Scan};
/// assert_eq!(scan(b"[1, 2] "), Scan::Complete(6));
/// assert_eq!(scan(b"{\"a\": [tr"), Scan::Truncated);
/// assert_eq!(scan(b"{a: 1}"), Scan::Invalid);
/// ```
pub fn scan(data: &[u8]) -> Scan {
    let mut scanner = Scanner { data, pos: 0 };
    match scanner.value(0) {
        Ok(()) => Scan::Complete(scanner.pos),
        Err(Stop::Eof) => Scan::Truncated,
        Err(Stop::Invalid) => Scan::Invalid,
    }
}

#[inline]
fn opens_container(data: &[u8]) -> bool {
    matches!(data.first(), Some(b'{' | b'['))
}

/// One object or array, alone or cut short, with only whitespace after it.
fn single_document(data: &[u8]) -> bool {
    if !opens_container(data) {
        return false;
    }
    match scan(data) {
        Scan::Complete(end) => trim_leading_ws(&data[end..]).is_empty(),
        Scan::Truncated => true,
        Scan::Invalid => false,
    }
}

/// A JSON object or array, possibly cut by the read limit.
pub fn json(prefix: &[u8]) -> bool {
    single_document(body(prefix)) && utf8_text(prefix)
}

const GEOJSON_TYPES: &[&[u8]] = &[
    b"\"Feature\"",
    b"\"FeatureCollection\"",
    b"\"Point\"",
    b"\"LineString\"",
    b"\"Polygon\"",
    b"\"MultiPoint\"",
    b"\"MultiLineString\"",
    b"\"MultiPolygon\"",
    b"\"GeometryCollection\"",
];

/// JSON object whose `"type"` member names a GeoJSON object.
pub fn geojson(prefix: &[u8]) -> bool {
    let data = body(prefix);
    if data.first() != Some(&b'{') {
        return false;
    }
    let tagged = memmem::find_iter(data, b"\"type\"").any(|pos| {
        let after = trim_leading_ws(&data[pos + 6..]);
        after.first() == Some(&b':') && {
            let value = trim_leading_ws(&after[1..]);
            GEOJSON_TYPES.iter().any(|name| value.starts_with(name))
        }
    });
    tagged && json(prefix)
}

/// Newline-delimited JSON: two or more lines, each an object or array.
///
/// Only the last line may be incomplete.
pub fn ndjson(prefix: &[u8]) -> bool {
    let data = body(prefix);
    let mut lines = data.split(|&b| b == b'\n').peekable();
    let mut count = 0usize;

    while let Some(line) = lines.next() {
        let line = trim_leading_ws(line);
        if line.is_empty() {
            continue;
        }
        if !opens_container(line) {
            return false;
        }
        let is_last = lines.peek().is_none();
        let valid = match scan(line) {
            Scan::Complete(end) => trim_leading_ws(&line[end..]).is_empty(),
            Scan::Truncated => is_last,
            Scan::Invalid => false,
        };
        if !valid {
            return false;
        }
        count += 1;
    }
    count >= 2 && utf8_text(prefix)
}
