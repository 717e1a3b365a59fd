//! ISO base media file format family (MP4, QuickTime, 3GPP, HEIF, AVIF).
//!
//! All of them open with an `ftyp` box: a big-endian box size, the `ftyp`
//! type, a four-byte major brand, a minor version and a list of compatible
//! brands. The major brand selects the format; generic MP4 also looks at the
//! compatible brands because many writers put a vendor brand first.

use crate::common::binary::{bytes_at, has_prefix_at, read_u32_be};

/// Parsed `ftyp` box header.
#[derive(Debug, Clone, Copy)]
pub struct FileType<'a> {
    pub major_brand: &'a [u8],
    /// Compatible brands present in the prefix, four bytes each
    pub compatible: &'a [u8],
}

impl<'a> FileType<'a> {
    /// Parse the leading `ftyp` box.
    pub fn parse(prefix: &'a [u8]) -> Option<Self> {
        if !has_prefix_at(prefix, 4, b"ftyp") {
            return None;
        }
        let size = read_u32_be(prefix, 0)? as usize;
        if size < 16 || size % 4 != 0 {
            return None;
        }
        let major_brand = bytes_at(prefix, 8, 4)?;
        let end = size.min(prefix.len());
        let compatible = prefix.get(16..end).unwrap_or(&[]);
        Some(Self {
            major_brand,
            compatible,
        })
    }

    pub fn compatible_brands(&self) -> impl Iterator<Item = &'a [u8]> {
        self.compatible.chunks_exact(4)
    }

    fn major_is(&self, brands: &[&[u8]]) -> bool {
        brands.iter().any(|brand| *brand == self.major_brand)
    }

    fn any_brand_is(&self, brands: &[&[u8]]) -> bool {
        self.major_is(brands)
            || self
                .compatible_brands()
                .any(|found| brands.iter().any(|brand| *brand == found))
    }
}

fn major_brand_in(prefix: &[u8], brands: &[&[u8]]) -> bool {
    FileType::parse(prefix).is_some_and(|ftyp| ftyp.major_is(brands))
}

/// QuickTime movie with the `mqt ` brand (Sony camera movies).
pub fn mqv(prefix: &[u8]) -> bool {
    major_brand_in(prefix, &[b"mqt "])
}

/// QuickTime: `qt  ` brand, or a classic file opening with a top-level atom.
pub fn quicktime(prefix: &[u8]) -> bool {
    if major_brand_in(prefix, &[b"qt  "]) {
        return true;
    }
    [&b"moov"[..], b"mdat", b"wide", b"free", b"pnot", b"skip"]
        .iter()
        .any(|atom| has_prefix_at(prefix, 4, atom))
        && read_u32_be(prefix, 0).is_some_and(|size| size >= 8)
}

pub fn three_gp(prefix: &[u8]) -> bool {
    FileType::parse(prefix).is_some_and(|ftyp| ftyp.major_brand.starts_with(b"3gp"))
}

pub fn three_g2(prefix: &[u8]) -> bool {
    FileType::parse(prefix).is_some_and(|ftyp| ftyp.major_brand.starts_with(b"3g2"))
}

pub fn m4a(prefix: &[u8]) -> bool {
    major_brand_in(prefix, &[b"M4A "])
}

/// Audio book (`M4B `) and protected audio (`M4P `).
pub fn audio_mp4(prefix: &[u8]) -> bool {
    major_brand_in(prefix, &[b"M4B ", b"M4P "])
}

pub fn heic(prefix: &[u8]) -> bool {
    major_brand_in(prefix, &[b"heic", b"heix"])
}

pub fn heic_sequence(prefix: &[u8]) -> bool {
    major_brand_in(prefix, &[b"hevc", b"hevx"])
}

pub fn heif(prefix: &[u8]) -> bool {
    major_brand_in(prefix, &[b"mif1", b"heim", b"heis", b"avic"])
}

pub fn heif_sequence(prefix: &[u8]) -> bool {
    major_brand_in(prefix, &[b"msf1", b"hevm", b"hevs", b"avcs"])
}

pub fn avif(prefix: &[u8]) -> bool {
    major_brand_in(prefix, &[b"avif", b"avis"])
}

const MP4_BRANDS: &[&[u8]] = &[
    b"avc1", b"dash", b"iso2", b"iso3", b"iso4", b"iso5", b"iso6", b"isom", b"mmp4", b"mp41",
    b"mp42", b"mp4v", b"mp71", b"MSNV", b"NDAS", b"NDSC", b"NSDC", b"NDSH", b"NDSM", b"NDSP",
    b"NDSS", b"NDXC", b"NDXH", b"NDXM", b"NDXP", b"NDXS", b"F4V ", b"F4P ", b"M4V ", b"M4VH",
    b"M4VP",
];

/// Generic MP4: an MP4 brand in the major or compatible brands.
pub fn mp4(prefix: &[u8]) -> bool {
    FileType::parse(prefix).is_some_and(|ftyp| ftyp.any_brand_is(MP4_BRANDS))
}
