//! RIFF container formats, told apart by the form type at offset 8.

use crate::common::binary::has_prefix_at;

#[inline]
fn riff(prefix: &[u8], form: &[u8; 4]) -> bool {
    has_prefix_at(prefix, 0, b"RIFF") && has_prefix_at(prefix, 8, form)
}

pub fn wav(prefix: &[u8]) -> bool {
    riff(prefix, b"WAVE")
}

pub fn avi(prefix: &[u8]) -> bool {
    riff(prefix, b"AVI ")
}

pub fn webp(prefix: &[u8]) -> bool {
    riff(prefix, b"WEBP")
}

/// Qualcomm PureVoice.
pub fn qcp(prefix: &[u8]) -> bool {
    riff(prefix, b"QLCM")
}
