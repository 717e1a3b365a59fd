//! ZIP-based application and data packages identified by a well-known entry.

use super::zip::{LocalEntry, any_entry, zip};

/// Extra field header ID Java tools put on the first `META-INF/` entry.
const JAR_MAGIC_EXTRA_ID: u16 = 0xCAFE;

/// Android application package: the binary manifest or dex code is present.
pub fn apk(prefix: &[u8]) -> bool {
    zip(prefix)
        && any_entry(prefix, |entry| {
            entry.name == b"AndroidManifest.xml" || entry.name == b"classes.dex"
        })
}

/// Java archive: a manifest entry, or the `0xCAFE` marker on the first entry.
pub fn jar(prefix: &[u8]) -> bool {
    if !zip(prefix) {
        return false;
    }
    let mut first = true;
    any_entry(prefix, |entry: &LocalEntry<'_>| {
        let marked = first && entry.has_extra_id(JAR_MAGIC_EXTRA_ID);
        first = false;
        marked || entry.name == b"META-INF/MANIFEST.MF"
    })
}

/// Zipped KML: a root-level `.kml` document.
pub fn kmz(prefix: &[u8]) -> bool {
    zip(prefix)
        && any_entry(prefix, |entry| {
            entry.name.ends_with(b".kml") && !entry.name.contains(&b'/')
        })
}
