//! Executable and object formats: ELF, Mach-O, Java class files.

use crate::common::binary::{has_prefix_at, read_u16_be, read_u16_le, read_u32_be};

pub const ELF_MAGIC: &[u8] = b"\x7FELF";

/// `CAFEBABE` opens both Java class files and Mach-O universal binaries.
const CAFEBABE: &[u8] = b"\xCA\xFE\xBA\xBE";

/// Oldest class file major version (JDK 1.1).
const MIN_CLASS_VERSION: u32 = 45;
/// A universal binary with more architectures than this is not plausible.
const MAX_FAT_ARCHS: u32 = 20;

const ET_REL: u16 = 1;
const ET_EXEC: u16 = 2;
const ET_DYN: u16 = 3;
const ET_CORE: u16 = 4;

pub fn elf(prefix: &[u8]) -> bool {
    has_prefix_at(prefix, 0, ELF_MAGIC)
}

/// ELF `e_type`, read in the byte order announced by `EI_DATA`.
pub fn elf_type(prefix: &[u8]) -> Option<u16> {
    if !elf(prefix) {
        return None;
    }
    match prefix.get(5)? {
        1 => read_u16_le(prefix, 16),
        2 => read_u16_be(prefix, 16),
        _ => None,
    }
}

pub fn elf_object(prefix: &[u8]) -> bool {
    elf_type(prefix) == Some(ET_REL)
}

pub fn elf_executable(prefix: &[u8]) -> bool {
    elf_type(prefix) == Some(ET_EXEC)
}

pub fn elf_shared_lib(prefix: &[u8]) -> bool {
    elf_type(prefix) == Some(ET_DYN)
}

pub fn elf_core(prefix: &[u8]) -> bool {
    elf_type(prefix) == Some(ET_CORE)
}

/// Java class file: `CAFEBABE` followed by a class file version.
pub fn class(prefix: &[u8]) -> bool {
    has_prefix_at(prefix, 0, CAFEBABE)
        && read_u32_be(prefix, 4).is_some_and(|version| version >= MIN_CLASS_VERSION)
}

/// Mach-O thin (32/64-bit, either byte order) or universal binary.
pub fn macho(prefix: &[u8]) -> bool {
    const THIN: [&[u8]; 4] = [
        b"\xFE\xED\xFA\xCE",
        b"\xFE\xED\xFA\xCF",
        b"\xCE\xFA\xED\xFE",
        b"\xCF\xFA\xED\xFE",
    ];
    if THIN.iter().any(|magic| has_prefix_at(prefix, 0, magic)) {
        return true;
    }
    has_prefix_at(prefix, 0, CAFEBABE)
        && read_u32_be(prefix, 4).is_some_and(|archs| archs > 0 && archs < MAX_FAT_ARCHS)
}
