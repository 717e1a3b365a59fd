//! Delimiter-separated values (CSV, TSV).
//!
//! Records are split with quote awareness: a field that starts with `"` runs
//! to the matching closing quote (`""` escapes one), so separators and line
//! breaks inside it do not count. Blank lines are skipped. The last record
//! may be cut by the read limit and is allowed to come up short; it only
//! counts toward the record total when it has the full field count.

use super::text::{body, utf8_text};

/// Minimum number of records for a delimited file.
const MIN_RECORDS: usize = 2;

/// Field counts per record, the last one flagged when it has no terminator.
struct Records<'a> {
    data: &'a [u8],
    pos: usize,
    separator: u8,
}

impl Iterator for Records<'_> {
    /// (field count, terminated)
    type Item = (usize, bool);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.pos >= self.data.len() {
                return None;
            }
            let mut fields = 1usize;
            let mut in_quotes = false;
            let mut field_start = true;
            let mut blank = true;

            while let Some(&b) = self.data.get(self.pos) {
                self.pos += 1;
                if in_quotes {
                    if b == b'"' {
                        if self.data.get(self.pos) == Some(&b'"') {
                            self.pos += 1;
                        } else {
                            in_quotes = false;
                        }
                    }
                    continue;
                }
                match b {
                    b'\n' => {
                        if blank {
                            break;
                        }
                        return Some((fields, true));
                    },
                    b'\r' => {},
                    b'"' if field_start => {
                        in_quotes = true;
                        field_start = false;
                        blank = false;
                    },
                    _ if b == self.separator => {
                        fields += 1;
                        field_start = true;
                        blank = false;
                    },
                    _ => {
                        field_start = false;
                        blank = false;
                    },
                }
            }
            if self.pos >= self.data.len() && !blank {
                return Some((fields, false));
            }
        }
    }
}

fn delimited(prefix: &[u8], separator: u8) -> bool {
    let records = Records {
        data: body(prefix),
        pos: 0,
        separator,
    };
    let mut expected = None;
    let mut count = 0usize;

    for (fields, terminated) in records {
        let width = *expected.get_or_insert(fields);
        if width < 2 {
            return false;
        }
        if terminated {
            if fields != width {
                return false;
            }
            count += 1;
        } else if fields > width {
            return false;
        } else if fields == width {
            count += 1;
        }
    }
    count >= MIN_RECORDS && utf8_text(prefix)
}

/// Comma-separated values.
///
/// # Examples
///
/// ```
/// use mimetree::matchers::delimited::csv;
/// assert!(csv(b"name,age\n\"Doe, Jane\",42\n"));
/// assert!(!csv(b"just one line, with a comma\n"));
/// ```
pub fn csv(prefix: &[u8]) -> bool {
    delimited(prefix, b',')
}

/// Tab-separated values.
pub fn tsv(prefix: &[u8]) -> bool {
    delimited(prefix, b'\t')
}
