//! Archive and package formats that need more than a single magic check.

use crate::common::binary::{has_prefix_at, read_u32_le};

/// `ar` archive global header.
pub const AR_MAGIC: &[u8] = b"!<arch>\n";

/// POSIX ustar and GNU tar both put `ustar` in the header at offset 257.
pub fn tar(prefix: &[u8]) -> bool {
    has_prefix_at(prefix, 257, b"ustar")
}

pub fn ar(prefix: &[u8]) -> bool {
    has_prefix_at(prefix, 0, AR_MAGIC)
}

/// Debian package: an `ar` archive whose first member is `debian-binary`.
pub fn deb(prefix: &[u8]) -> bool {
    ar(prefix) && has_prefix_at(prefix, 8, b"debian-binary")
}

/// Zstandard frame, or a skippable frame (magic `0x184D2A50..=0x184D2A5F`).
pub fn zstd(prefix: &[u8]) -> bool {
    match read_u32_le(prefix, 0) {
        Some(0xFD2F_B528) => true,
        Some(magic) => magic & 0xFFFF_FFF0 == 0x184D_2A50,
        None => false,
    }
}
