//! ESRI shapefile components and dBase tables.

use crate::common::binary::{byte_at, read_u16_le, read_u32_be, read_u32_le};

/// Main file header length, shared by `.shp` and `.shx`.
const SHAPE_HEADER_LEN: usize = 100;
/// Big-endian file code at offset 0.
const SHAPE_FILE_CODE: u32 = 9994;
/// Little-endian version at offset 28.
const SHAPE_VERSION: u32 = 1000;

const SHAPE_TYPES: [u32; 14] = [0, 1, 3, 5, 8, 11, 13, 15, 18, 21, 23, 25, 28, 31];

/// Table file version bytes seen in the wild (dBase II..7, FoxPro, Visual FoxPro).
const DBF_VERSIONS: [u8; 16] = [
    0x02, 0x03, 0x04, 0x05, 0x30, 0x31, 0x32, 0x43, 0x63, 0x83, 0x87, 0x8B, 0x8E, 0xCB, 0xF5,
    0xFB,
];

/// Shape index: the common 100-byte shapefile header.
pub fn shx(prefix: &[u8]) -> bool {
    prefix.len() >= SHAPE_HEADER_LEN
        && read_u32_be(prefix, 0) == Some(SHAPE_FILE_CODE)
        && read_u32_le(prefix, 28) == Some(SHAPE_VERSION)
        && read_u32_le(prefix, 32).is_some_and(|shape| SHAPE_TYPES.contains(&shape))
}

/// Shape geometry: the header followed by record 1 with a valid shape type.
pub fn shp(prefix: &[u8]) -> bool {
    shx(prefix)
        && read_u32_be(prefix, SHAPE_HEADER_LEN) == Some(1)
        && read_u32_le(prefix, 108).is_some_and(|shape| SHAPE_TYPES.contains(&shape))
}

/// dBase table header: version, last update date, lengths and reserved bytes.
pub fn dbf(prefix: &[u8]) -> bool {
    let Some(version) = byte_at(prefix, 0) else {
        return false;
    };
    if !DBF_VERSIONS.contains(&version) {
        return false;
    }
    let month = byte_at(prefix, 2);
    let day = byte_at(prefix, 3);
    if !matches!(month, Some(1..=12)) || !matches!(day, Some(1..=31)) {
        return false;
    }
    // Header holds the 32-byte preamble plus at least the 0x0D terminator.
    if !read_u16_le(prefix, 8).is_some_and(|len| len >= 33) {
        return false;
    }
    if !read_u16_le(prefix, 10).is_some_and(|len| len > 0) {
        return false;
    }
    [12, 13, 30, 31]
        .iter()
        .all(|&offset| byte_at(prefix, offset) == Some(0))
}
