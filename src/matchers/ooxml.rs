//! OOXML package detection (modern Office documents).
//!
//! An OPC package is a ZIP whose first entry is one of the package-level
//! parts (`[Content_Types].xml`, `_rels/.rels`, ...). The document kind is
//! then given by the top-level part directory of the main document:
//! `word/`, `xl/`, `ppt/` or `visio/`. Only local headers inside the prefix
//! are visible, so a package whose main part directory starts late stays a
//! plain ZIP.

use super::zip::{ZipEntries, zip};

/// Entry names that open an OPC package.
const OPC_MARKERS: &[&[u8]] = &[
    b"[Content_Types].xml",
    b"_rels/.rels",
    b"docProps",
    b"customXml",
    b"[trash]",
];

#[inline]
fn is_opc_marker(name: &[u8]) -> bool {
    OPC_MARKERS.iter().any(|marker| name.starts_with(marker))
}

/// Check that the prefix is an OPC package holding a part under `dir`.
fn opc_package_with(prefix: &[u8], dir: &[u8]) -> bool {
    if !zip(prefix) {
        return false;
    }
    let mut entries = ZipEntries::new(prefix);
    match entries.next() {
        Some(first) if is_opc_marker(first.name) => {},
        _ => return false,
    }
    ZipEntries::new(prefix).any(|entry| entry.name.starts_with(dir))
}

/// Word processing document (.docx).
pub fn docx(prefix: &[u8]) -> bool {
    opc_package_with(prefix, b"word/")
}

/// Spreadsheet (.xlsx).
pub fn xlsx(prefix: &[u8]) -> bool {
    opc_package_with(prefix, b"xl/")
}

/// Presentation (.pptx).
pub fn pptx(prefix: &[u8]) -> bool {
    opc_package_with(prefix, b"ppt/")
}

/// Visio drawing (.vsdx).
pub fn vsdx(prefix: &[u8]) -> bool {
    opc_package_with(prefix, b"visio/")
}
