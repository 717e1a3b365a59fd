//! Image formats with a secondary field to check after the magic.

use crate::common::binary::has_prefix_at;

/// JPEG 2000 signature box followed by the file type box.
const JP2_SIGNATURE: &[u8] = b"\x00\x00\x00\x0CjP  \x0D\x0A\x87\x0A";

/// JPEG 2000 family member selected by the `ftyp` brand at offset 20.
fn jpeg2000(prefix: &[u8], brand: &[u8; 4]) -> bool {
    has_prefix_at(prefix, 0, JP2_SIGNATURE) && has_prefix_at(prefix, 20, brand)
}

pub fn jp2(prefix: &[u8]) -> bool {
    jpeg2000(prefix, b"jp2 ")
}

pub fn jpx(prefix: &[u8]) -> bool {
    jpeg2000(prefix, b"jpx ")
}

pub fn jpm(prefix: &[u8]) -> bool {
    jpeg2000(prefix, b"jpm ")
}

/// DjVu: an `AT&T` IFF file with a DjVu form type.
pub fn djvu(prefix: &[u8]) -> bool {
    has_prefix_at(prefix, 0, b"AT&TFORM")
        && [&b"DJVM"[..], b"DJVU", b"DJVI", b"THUM"]
            .iter()
            .any(|form| has_prefix_at(prefix, 12, form))
}
