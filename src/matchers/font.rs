//! Font formats beyond plain magic numbers.

use crate::common::binary::{bytes_at, has_prefix_at};

/// Embedded OpenType: `LP` magic at 34 and a known version at 8.
pub fn eot(prefix: &[u8]) -> bool {
    const VERSIONS: [&[u8]; 3] = [b"\x02\x00\x01", b"\x01\x00\x00", b"\x02\x00\x02"];
    has_prefix_at(prefix, 34, b"LP")
        && bytes_at(prefix, 8, 3).is_some_and(|version| VERSIONS.iter().any(|v| *v == version))
}
