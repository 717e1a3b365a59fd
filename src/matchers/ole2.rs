//! OLE2 / Compound File Binary detection (legacy Office and friends).
//!
//! The generic node only checks the 8-byte magic. Its children look at the
//! compound file directory: the header names the first directory sector,
//! and when that sector (and, for longer directories, the FAT sector that
//! chains it) lies inside the prefix, the 128-byte directory entries are read
//! in place. Stream names and the root entry CLSID then identify the
//! application. When the directory is out of reach, or the visible part of it
//! names no known application, the first data sector is compared against the
//! record headers those applications write there.

use smallvec::SmallVec;

use crate::common::binary::{bytes_at, has_prefix_at, read_u16_le, read_u32_le};

/// Magic bytes at the beginning of every OLE file.
pub const MAGIC: &[u8; 8] = b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1";

/// Size of a directory entry in bytes
const DIRENTRY_SIZE: usize = 128;
/// Maximum regular sector ID
const MAXREGSECT: u32 = 0xFFFF_FFFA;
/// Byte order mark stored in the header (little-endian)
const BYTE_ORDER_LE: u16 = 0xFFFE;
/// Directory sectors followed before giving up
const MAX_DIRECTORY_SECTORS: usize = 8;

/// Object type of an unused directory slot
const STGTY_EMPTY: u8 = 0;
/// Object type of the root storage
const STGTY_ROOT: u8 = 5;

/// Build an on-disk CLSID from its textual groups.
///
/// The first three groups are stored little-endian, the last eight bytes as written.
const fn clsid(d1: u32, d2: u16, d3: u16, d4: [u8; 8]) -> [u8; 16] {
    let a = d1.to_le_bytes();
    let b = d2.to_le_bytes();
    let c = d3.to_le_bytes();
    [
        a[0], a[1], a[2], a[3], b[0], b[1], c[0], c[1], d4[0], d4[1], d4[2], d4[3], d4[4], d4[5],
        d4[6], d4[7],
    ]
}

const OLE_TAIL: [u8; 8] = [0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46];

/// Parsed header fields needed to locate the directory.
#[derive(Debug, Clone, Copy)]
pub struct CfbHeader {
    sector_shift: u16,
    first_dir_sector: u32,
    first_fat_sector: u32,
}

impl CfbHeader {
    /// Parse the header; `None` for a bad magic, byte order or sector size.
    pub fn parse(prefix: &[u8]) -> Option<Self> {
        if !has_prefix_at(prefix, 0, MAGIC) {
            return None;
        }
        if read_u16_le(prefix, 0x1C)? != BYTE_ORDER_LE {
            return None;
        }
        let sector_shift = read_u16_le(prefix, 0x1E)?;
        if sector_shift != 9 && sector_shift != 12 {
            return None;
        }
        Some(Self {
            sector_shift,
            first_dir_sector: read_u32_le(prefix, 0x30)?,
            first_fat_sector: read_u32_le(prefix, 0x4C)?,
        })
    }

    pub fn sector_size(&self) -> usize {
        1usize << self.sector_shift
    }

    /// File offset of a regular sector (the header occupies "sector -1").
    pub fn sector_offset(&self, sid: u32) -> Option<usize> {
        if sid > MAXREGSECT {
            return None;
        }
        (sid as usize)
            .checked_add(1)?
            .checked_mul(self.sector_size())
    }

    /// Next sector in a chain, if the FAT slot for `sid` is inside the prefix.
    ///
    /// Only the first FAT sector is consulted; it covers the start of every
    /// file small enough for its directory to be inside a bounded prefix.
    fn next_sector(&self, prefix: &[u8], sid: u32) -> Option<u32> {
        let per_sector = self.sector_size() / 4;
        if sid as usize >= per_sector {
            return None;
        }
        let fat = self.sector_offset(self.first_fat_sector)?;
        read_u32_le(prefix, fat.checked_add(sid as usize * 4)?)
    }
}

/// One directory entry read in place from the prefix.
#[derive(Debug, Clone, Copy)]
pub struct DirEntry<'a> {
    name: &'a [u8],
    entry_type: u8,
    clsid: &'a [u8],
}

impl<'a> DirEntry<'a> {
    fn parse(raw: &'a [u8]) -> Option<Self> {
        let name_len = read_u16_le(raw, 64)? as usize;
        // name_len counts the terminating NUL; clamp to the 64-byte field.
        let name_bytes = name_len.saturating_sub(2).min(64) & !1;
        Some(Self {
            name: bytes_at(raw, 0, name_bytes)?,
            entry_type: *raw.get(66)?,
            clsid: bytes_at(raw, 80, 16)?,
        })
    }

    fn utf16_units(&self) -> impl Iterator<Item = u16> + 'a {
        self.name
            .chunks_exact(2)
            .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
    }

    /// Exact name comparison without decoding into a `String`.
    pub fn name_is(&self, name: &str) -> bool {
        self.name.len() == name.encode_utf16().count() * 2
            && self.utf16_units().eq(name.encode_utf16())
    }

    pub fn name_starts_with(&self, prefix: &str) -> bool {
        let mut units = self.utf16_units();
        prefix
            .encode_utf16()
            .all(|expected| units.next() == Some(expected))
    }

    pub fn is_root(&self) -> bool {
        self.entry_type == STGTY_ROOT
    }

    pub fn clsid(&self) -> &'a [u8] {
        self.clsid
    }

    /// Name decoded for diagnostics.
    pub fn name(&self) -> String {
        String::from_utf16_lossy(&self.utf16_units().collect::<Vec<_>>())
    }
}

/// Directory entries visible in the prefix.
///
/// Returns `None` when the header is unusable or not even the first
/// directory entry is captured.
pub fn directory(prefix: &[u8]) -> Option<SmallVec<[DirEntry<'_>; 16]>> {
    let header = CfbHeader::parse(prefix)?;
    let sector_size = header.sector_size();
    let mut entries = SmallVec::new();
    let mut sid = header.first_dir_sector;

    for _ in 0..MAX_DIRECTORY_SECTORS {
        let Some(start) = header.sector_offset(sid) else {
            break;
        };
        let end = start.saturating_add(sector_size).min(prefix.len());
        let Some(sector) = prefix.get(start..end) else {
            break;
        };
        let complete = sector.len() == sector_size;
        for raw in sector.chunks_exact(DIRENTRY_SIZE) {
            if let Some(entry) = DirEntry::parse(raw)
                && entry.entry_type != STGTY_EMPTY
            {
                entries.push(entry);
            }
        }
        if !complete {
            break;
        }
        match header.next_sector(prefix, sid) {
            Some(next) if next != sid => sid = next,
            _ => break,
        }
    }

    if entries.is_empty() {
        tracing::debug!(
            first_dir_sector = header.first_dir_sector,
            "ole directory outside captured prefix"
        );
        return None;
    }
    Some(entries)
}

/// What identifies one application inside a compound file.
struct Fingerprint {
    streams: &'static [&'static str],
    stream_prefixes: &'static [&'static str],
    root_clsids: &'static [[u8; 16]],
    /// Record headers at the start of sector 0
    sector_zero: &'static [&'static [u8]],
}

impl Fingerprint {
    fn matches(&self, prefix: &[u8]) -> bool {
        if let Some(entries) = directory(prefix) {
            if self.named_in(&entries) {
                return true;
            }
            // Another application claims the file.
            if FINGERPRINTS.iter().any(|other| other.named_in(&entries)) {
                return false;
            }
        }
        self.in_sector_zero(prefix)
    }

    fn named_in(&self, entries: &[DirEntry<'_>]) -> bool {
        entries.iter().any(|entry| {
            (entry.is_root() && self.root_clsids.iter().any(|id| entry.clsid() == id))
                || self.streams.iter().any(|name| entry.name_is(name))
                || self.stream_prefixes.iter().any(|p| entry.name_starts_with(p))
        })
    }

    fn in_sector_zero(&self, prefix: &[u8]) -> bool {
        let Some(header) = CfbHeader::parse(prefix) else {
            return false;
        };
        let Some(sector_zero) = header.sector_offset(0) else {
            return false;
        };
        self.sector_zero
            .iter()
            .any(|pattern| has_prefix_at(prefix, sector_zero, pattern))
    }
}

const DOC: Fingerprint = Fingerprint {
    streams: &["WordDocument"],
    stream_prefixes: &[],
    root_clsids: &[
        clsid(0x0002_0906, 0, 0, OLE_TAIL),
        clsid(0x0002_0900, 0, 0, OLE_TAIL),
    ],
    sector_zero: &[&[0xEC, 0xA5, 0xC1, 0x00]],
};

const XLS: Fingerprint = Fingerprint {
    streams: &["Workbook", "Book"],
    stream_prefixes: &[],
    root_clsids: &[
        clsid(0x0002_0820, 0, 0, OLE_TAIL),
        clsid(0x0002_0810, 0, 0, OLE_TAIL),
    ],
    sector_zero: &[
        &[0x09, 0x08, 0x10, 0x00, 0x00, 0x06, 0x05, 0x00],
        &[0xFD, 0xFF, 0xFF, 0xFF, 0x10],
        &[0xFD, 0xFF, 0xFF, 0xFF, 0x1F],
        &[0xFD, 0xFF, 0xFF, 0xFF, 0x22],
        &[0xFD, 0xFF, 0xFF, 0xFF, 0x23],
        &[0xFD, 0xFF, 0xFF, 0xFF, 0x28],
        &[0xFD, 0xFF, 0xFF, 0xFF, 0x29],
    ],
};

const PPT: Fingerprint = Fingerprint {
    streams: &["PowerPoint Document"],
    stream_prefixes: &[],
    root_clsids: &[
        clsid(0x6481_8D10, 0x4F9B, 0x11CF, [0x86, 0xEA, 0x00, 0xAA, 0x00, 0xB9, 0x29, 0xE8]),
        clsid(0x6481_8D11, 0x4F9B, 0x11CF, [0x86, 0xEA, 0x00, 0xAA, 0x00, 0xB9, 0x29, 0xE8]),
    ],
    sector_zero: &[
        &[0xA0, 0x46, 0x1D, 0xF0],
        &[0x00, 0x6E, 0x1E, 0xF0],
        &[0x0F, 0x00, 0xE8, 0x03],
        &[0xFD, 0xFF, 0xFF, 0xFF, 0x0E, 0x00, 0x00],
        &[0xFD, 0xFF, 0xFF, 0xFF, 0x1C, 0x00, 0x00],
        &[0xFD, 0xFF, 0xFF, 0xFF, 0x43, 0x00, 0x00],
    ],
};

const PUB: Fingerprint = Fingerprint {
    streams: &["Quill"],
    stream_prefixes: &[],
    root_clsids: &[clsid(
        0x0002_1201,
        0,
        0,
        [0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46],
    )],
    sector_zero: &[],
};

const MSG: Fingerprint = Fingerprint {
    streams: &["__properties_version1.0", "__nameid_version1.0"],
    stream_prefixes: &["__substg1.0_"],
    root_clsids: &[clsid(0x0006_F046, 0, 0, OLE_TAIL)],
    sector_zero: &[],
};

const MSI: Fingerprint = Fingerprint {
    streams: &[],
    stream_prefixes: &[],
    root_clsids: &[clsid(0x000C_1084, 0, 0, OLE_TAIL)],
    sector_zero: &[],
};

const FINGERPRINTS: [&Fingerprint; 6] = [&DOC, &XLS, &PPT, &PUB, &MSG, &MSI];

/// Generic compound file: the 8-byte magic.
pub fn ole(prefix: &[u8]) -> bool {
    has_prefix_at(prefix, 0, MAGIC)
}

/// Word 97-2003 document.
pub fn doc(prefix: &[u8]) -> bool {
    DOC.matches(prefix)
}

/// Excel 97-2003 workbook.
pub fn xls(prefix: &[u8]) -> bool {
    XLS.matches(prefix)
}

/// PowerPoint 97-2003 presentation.
pub fn ppt(prefix: &[u8]) -> bool {
    PPT.matches(prefix)
}

/// Publisher document.
pub fn publisher(prefix: &[u8]) -> bool {
    PUB.matches(prefix)
}

/// Outlook message.
pub fn msg(prefix: &[u8]) -> bool {
    MSG.matches(prefix)
}

/// Windows Installer package.
pub fn msi(prefix: &[u8]) -> bool {
    MSI.matches(prefix)
}
