//! Record-oriented document formats.

use memchr::memchr;

use crate::common::binary::{bytes_at, has_prefix_at};

/// MARC 21 bibliographic record.
///
/// The 24-byte leader starts with a five-digit record length and carries the
/// fixed entry map `4500` at offset 20; a field terminator follows soon after.
pub fn marc(prefix: &[u8]) -> bool {
    if !has_prefix_at(prefix, 20, b"4500") {
        return false;
    }
    let Some(length) = bytes_at(prefix, 0, 5) else {
        return false;
    };
    if !length.iter().all(u8::is_ascii_digit) {
        return false;
    }
    let window = &prefix[..prefix.len().min(2048)];
    memchr(0x1E, window).is_some()
}
