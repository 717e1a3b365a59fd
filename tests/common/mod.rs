//! Sample corpus shared by the integration tests.
//!
//! Every sample is built in memory: ZIP packages through the `zip` crate,
//! compound files and binary headers by hand.

#![allow(dead_code)]

use std::io::{Cursor, Write};

use zip::write::{SimpleFileOptions, ZipWriter};

/// Build a ZIP archive with the given entries, in order.
pub fn zip_archive(entries: &[(&str, &[u8])], method: zip::CompressionMethod) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(method);
    for (name, payload) in entries {
        writer.start_file(*name, options).unwrap();
        writer.write_all(payload).unwrap();
    }
    writer.finish().unwrap().into_inner()
}

pub fn stored_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    zip_archive(entries, zip::CompressionMethod::Stored)
}

pub fn deflated_zip(entries: &[(&str, &[u8])]) -> Vec<u8> {
    zip_archive(entries, zip::CompressionMethod::Deflated)
}

const CONTENT_TYPES: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?><Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types"/>"#;
const RELS: &[u8] = br#"<?xml version="1.0" encoding="UTF-8"?><Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships"/>"#;

pub fn ooxml(main_part: &str) -> Vec<u8> {
    deflated_zip(&[
        ("[Content_Types].xml", CONTENT_TYPES),
        ("_rels/.rels", RELS),
        (main_part, b"<?xml version=\"1.0\"?><root/>"),
    ])
}

pub fn opendocument(mime: &str) -> Vec<u8> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let stored = SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
    writer.start_file("mimetype", stored).unwrap();
    writer.write_all(mime.as_bytes()).unwrap();
    let deflated =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);
    writer.start_file("content.xml", deflated).unwrap();
    writer.write_all(b"<office:document-content/>").unwrap();
    writer.finish().unwrap().into_inner()
}

const OLE_MAGIC: &[u8] = b"\xD0\xCF\x11\xE0\xA1\xB1\x1A\xE1";

/// Version 3 compound file with the FAT in sector 0 and the directory in sector 1.
pub fn compound_file(streams: &[&str], root_clsid: [u8; 16]) -> Vec<u8> {
    let mut data = vec![0u8; 512 * 3];
    data[..8].copy_from_slice(OLE_MAGIC);
    data[0x18..0x1A].copy_from_slice(&0x3Eu16.to_le_bytes());
    data[0x1A..0x1C].copy_from_slice(&3u16.to_le_bytes());
    data[0x1C..0x1E].copy_from_slice(&0xFFFEu16.to_le_bytes());
    data[0x1E..0x20].copy_from_slice(&9u16.to_le_bytes());
    data[0x20..0x22].copy_from_slice(&6u16.to_le_bytes());
    data[0x2C..0x30].copy_from_slice(&1u32.to_le_bytes());
    data[0x30..0x34].copy_from_slice(&1u32.to_le_bytes());
    data[0x3C..0x40].copy_from_slice(&0xFFFF_FFFEu32.to_le_bytes());
    data[0x44..0x48].copy_from_slice(&0xFFFF_FFFEu32.to_le_bytes());
    data[0x4C..0x50].copy_from_slice(&0u32.to_le_bytes());
    for slot in 1..109 {
        let at = 0x4C + slot * 4;
        data[at..at + 4].copy_from_slice(&u32::MAX.to_le_bytes());
    }

    // FAT: sector 0 is the FAT itself, sector 1 a one-sector directory chain.
    for sid in 0..128usize {
        let at = 512 + sid * 4;
        data[at..at + 4].copy_from_slice(&u32::MAX.to_le_bytes());
    }
    data[512..516].copy_from_slice(&0xFFFF_FFFDu32.to_le_bytes());
    data[516..520].copy_from_slice(&0xFFFF_FFFEu32.to_le_bytes());

    let mut entries = vec![("Root Entry", 5u8, root_clsid)];
    entries.extend(streams.iter().map(|name| (*name, 2u8, [0u8; 16])));
    for (i, (name, kind, clsid)) in entries.iter().enumerate().take(4) {
        let at = 1024 + i * 128;
        let units: Vec<u16> = name.encode_utf16().collect();
        for (j, unit) in units.iter().enumerate() {
            data[at + j * 2..at + j * 2 + 2].copy_from_slice(&unit.to_le_bytes());
        }
        let name_len = ((units.len() + 1) * 2) as u16;
        data[at + 64..at + 66].copy_from_slice(&name_len.to_le_bytes());
        data[at + 66] = *kind;
        data[at + 80..at + 96].copy_from_slice(clsid);
    }
    data
}

fn elf(e_type: u16) -> Vec<u8> {
    let mut header = vec![0u8; 64];
    header[..4].copy_from_slice(b"\x7FELF");
    header[4] = 2;
    header[5] = 1;
    header[6] = 1;
    header[16..18].copy_from_slice(&e_type.to_le_bytes());
    header[18..20].copy_from_slice(&62u16.to_le_bytes());
    header
}

fn ftyp(major: &[u8; 4], compatible: &[&[u8; 4]]) -> Vec<u8> {
    let size = 16 + compatible.len() * 4;
    let mut data = (size as u32).to_be_bytes().to_vec();
    data.extend_from_slice(b"ftyp");
    data.extend_from_slice(major);
    data.extend_from_slice(&0u32.to_be_bytes());
    for brand in compatible {
        data.extend_from_slice(*brand);
    }
    data.extend_from_slice(b"\x00\x00\x00\x08free");
    data
}

fn ebml(doc_type: &[u8]) -> Vec<u8> {
    let mut data = b"\x1A\x45\xDF\xA3\x9F\x42\x86\x81\x01\x42\xF7\x81\x01\x42\x82".to_vec();
    data.push(0x80 | doc_type.len() as u8);
    data.extend_from_slice(doc_type);
    data.extend_from_slice(b"\x42\x87\x81\x04\x42\x85\x81\x02");
    data
}

fn tar() -> Vec<u8> {
    let mut header = vec![0u8; 1024];
    header[..9].copy_from_slice(b"notes.txt");
    header[100..107].copy_from_slice(b"0000644");
    header[124..135].copy_from_slice(b"00000000005");
    header[156] = b'0';
    header[257..263].copy_from_slice(b"ustar\0");
    header[263..265].copy_from_slice(b"00");
    header[512..517].copy_from_slice(b"hello");
    header
}

fn dbf() -> Vec<u8> {
    let mut data = vec![0u8; 97];
    data[0] = 0x03;
    data[1] = 124;
    data[2] = 6;
    data[3] = 15;
    data[4..8].copy_from_slice(&1u32.to_le_bytes());
    data[8..10].copy_from_slice(&65u16.to_le_bytes());
    data[10..12].copy_from_slice(&11u16.to_le_bytes());
    data[32..36].copy_from_slice(b"NAME");
    data[43] = b'C';
    data[48] = 10;
    data[64] = 0x0D;
    data
}

fn shape(with_record: bool) -> Vec<u8> {
    let mut data = vec![0u8; 100];
    data[..4].copy_from_slice(&9994u32.to_be_bytes());
    data[24..28].copy_from_slice(&64u32.to_be_bytes());
    data[28..32].copy_from_slice(&1000u32.to_le_bytes());
    data[32..36].copy_from_slice(&1u32.to_le_bytes());
    if with_record {
        data.extend_from_slice(&1u32.to_be_bytes());
        data.extend_from_slice(&10u32.to_be_bytes());
        data.extend_from_slice(&1u32.to_le_bytes());
        data.extend_from_slice(&[0u8; 16]);
    }
    data
}

fn ogg(codec: &[u8]) -> Vec<u8> {
    let mut page = b"OggS\x00\x02".to_vec();
    page.extend_from_slice(&[0u8; 20]);
    page.extend_from_slice(b"\x01\x1E");
    page.extend_from_slice(codec);
    page.extend_from_slice(&[0u8; 16]);
    page
}

fn jpeg2000(brand: &[u8; 4]) -> Vec<u8> {
    let mut data = b"\x00\x00\x00\x0CjP  \x0D\x0A\x87\x0A\x00\x00\x00\x14ftyp".to_vec();
    data.extend_from_slice(brand);
    data.extend_from_slice(&[0u8; 8]);
    data
}

/// Embedded OpenType header: sizes, version and the `LP` magic at 34.
fn eot() -> Vec<u8> {
    let mut data = vec![0u8; 80];
    data[..4].copy_from_slice(&80u32.to_le_bytes());
    data[4..8].copy_from_slice(&4u32.to_le_bytes());
    data[8..11].copy_from_slice(b"\x02\x00\x01");
    data[34..36].copy_from_slice(b"LP");
    data
}

/// Magic at a fixed offset after zero padding.
fn at_offset(offset: usize, magic: &[u8]) -> Vec<u8> {
    let mut data = vec![0u8; offset];
    data.extend_from_slice(magic);
    data.extend_from_slice(&[0u8; 8]);
    data
}

fn xml_doc(root: &str) -> Vec<u8> {
    format!("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n{root}\n</x>\n").into_bytes()
}

pub const WORD_CLSID: [u8; 16] = [
    0x06, 0x09, 0x02, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
];

pub const INSTALLER_CLSID: [u8; 16] = [
    0x84, 0x10, 0x0C, 0x00, 0x00, 0x00, 0x00, 0x00, 0xC0, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x46,
];

/// `(expected MIME type, content)` pairs; together they settle on every
/// node of the tree.
pub fn corpus() -> Vec<(&'static str, Vec<u8>)> {
    vec![
        ("inode/x-empty", Vec::new()),
        ("application/octet-stream", vec![0x00, 0x01, 0x02, 0x03, 0xFE]),
        ("application/x-7z-compressed", b"7z\xBC\xAF\x27\x1C\x00\x04".to_vec()),
        ("application/zip", stored_zip(&[("notes.txt", b"plain notes")])),
        (
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ooxml("xl/workbook.xml"),
        ),
        (
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ooxml("word/document.xml"),
        ),
        (
            "application/vnd.openxmlformats-officedocument.presentationml.presentation",
            ooxml("ppt/presentation.xml"),
        ),
        ("application/epub+zip", opendocument("application/epub+zip")),
        (
            "application/vnd.android.package-archive",
            deflated_zip(&[
                ("AndroidManifest.xml", b"\x03\x00\x08\x00"),
                ("classes.dex", b"dex\n035\0"),
            ]),
        ),
        (
            "application/jar",
            deflated_zip(&[
                ("META-INF/MANIFEST.MF", b"Manifest-Version: 1.0\r\n"),
                ("Main.class", b"\xCA\xFE\xBA\xBE\x00\x00\x00\x34"),
            ]),
        ),
        (
            "application/vnd.oasis.opendocument.text",
            opendocument("application/vnd.oasis.opendocument.text"),
        ),
        (
            "application/vnd.oasis.opendocument.spreadsheet-template",
            opendocument("application/vnd.oasis.opendocument.spreadsheet-template"),
        ),
        ("application/vnd.google-earth.kmz", deflated_zip(&[("doc.kml", b"<kml/>")])),
        ("application/vnd.ms-visio.drawing.main+xml", ooxml("visio/document.xml")),
        (
            "application/vnd.oasis.opendocument.text-template",
            opendocument("application/vnd.oasis.opendocument.text-template"),
        ),
        (
            "application/vnd.oasis.opendocument.spreadsheet",
            opendocument("application/vnd.oasis.opendocument.spreadsheet"),
        ),
        (
            "application/vnd.oasis.opendocument.presentation",
            opendocument("application/vnd.oasis.opendocument.presentation"),
        ),
        (
            "application/vnd.oasis.opendocument.presentation-template",
            opendocument("application/vnd.oasis.opendocument.presentation-template"),
        ),
        (
            "application/vnd.oasis.opendocument.graphics",
            opendocument("application/vnd.oasis.opendocument.graphics"),
        ),
        (
            "application/vnd.oasis.opendocument.graphics-template",
            opendocument("application/vnd.oasis.opendocument.graphics-template"),
        ),
        (
            "application/vnd.oasis.opendocument.formula",
            opendocument("application/vnd.oasis.opendocument.formula"),
        ),
        ("application/pdf", b"%PDF-1.7\n%\xE2\xE3\xCF\xD3\n1 0 obj\n".to_vec()),
        ("application/msword", compound_file(&["WordDocument", "1Table"], [0; 16])),
        ("application/vnd.ms-excel", compound_file(&["Workbook"], [0; 16])),
        ("application/vnd.ms-powerpoint", compound_file(&["PowerPoint Document"], [0; 16])),
        ("application/vnd.ms-outlook", compound_file(&["__substg1.0_0037001F"], [0; 16])),
        ("application/vnd.ms-publisher", compound_file(&["Quill"], [0; 16])),
        ("application/x-ms-installer", compound_file(&[], INSTALLER_CLSID)),
        ("application/x-ole-storage", compound_file(&["Contents"], [0; 16])),
        ("application/postscript", b"%!PS-Adobe-3.0\n%%Title: x\n".to_vec()),
        ("image/vnd.adobe.photoshop", b"8BPS\x00\x01\x00\x00\x00\x00".to_vec()),
        ("application/ogg", ogg(b"\x01unknown")),
        ("audio/ogg", ogg(b"\x01vorbis")),
        ("video/ogg", ogg(b"\x80theora")),
        ("image/png", b"\x89PNG\r\n\x1A\n\x00\x00\x00\x0DIHDR".to_vec()),
        ("image/jpeg", b"\xFF\xD8\xFF\xE0\x00\x10JFIF\x00".to_vec()),
        ("image/jp2", jpeg2000(b"jp2 ")),
        ("image/jpx", jpeg2000(b"jpx ")),
        ("image/jpm", jpeg2000(b"jpm ")),
        ("image/gif", b"GIF89a\x01\x00\x01\x00".to_vec()),
        ("image/webp", b"RIFF\x1A\x00\x00\x00WEBPVP8 ".to_vec()),
        ("application/vnd.microsoft.portable-executable", b"MZ\x90\x00\x03\x00".to_vec()),
        ("application/x-elf", elf(0)),
        ("application/x-object", elf(1)),
        ("application/x-executable", elf(2)),
        ("application/x-sharedlib", elf(3)),
        ("application/x-coredump", elf(4)),
        (
            "application/vnd.debian.binary-package",
            b"!<arch>\ndebian-binary   1342943816  0     0     100644  4         `\n2.0\n".to_vec(),
        ),
        (
            "application/x-archive",
            b"!<arch>\nlibfoo.o/       1342943816  0     0     100644  4         `\n".to_vec(),
        ),
        ("application/x-tar", tar()),
        ("application/x-xar", b"xar!\x00\x1C\x00\x01".to_vec()),
        ("application/x-bzip2", b"BZh91AY&SY".to_vec()),
        ("application/x-xz", b"\xFD7zXZ\x00\x00\x04".to_vec()),
        ("application/fits", b"SIMPLE  =                    T / conforms\n".to_vec()),
        ("image/tiff", b"II*\x00\x08\x00\x00\x00".to_vec()),
        ("image/tiff", b"MM\x00*\x00\x00\x00\x08".to_vec()),
        ("image/bmp", b"BM\x36\x00\x00\x00".to_vec()),
        ("image/x-icon", b"\x00\x00\x01\x00\x01\x00\x10\x10".to_vec()),
        ("image/x-icns", b"icns\x00\x00\x01\x00".to_vec()),
        ("audio/mpeg", b"ID3\x04\x00\x00\x00\x00\x00\x00".to_vec()),
        ("audio/mpeg", vec![0xFF, 0xFB, 0x90, 0x64, 0x00]),
        ("audio/flac", b"fLaC\x00\x00\x00\x22".to_vec()),
        ("audio/midi", b"MThd\x00\x00\x00\x06\x00\x01".to_vec()),
        ("audio/ape", b"MAC \x96\x0F\x00\x00".to_vec()),
        ("audio/musepack", b"MPCK\x53\x48\x00".to_vec()),
        ("audio/amr", b"#!AMR\n\x3C\x91".to_vec()),
        ("audio/wav", b"RIFF\x24\x08\x00\x00WAVEfmt ".to_vec()),
        ("audio/aiff", b"FORM\x00\x00\x00\x2EAIFFCOMM".to_vec()),
        ("audio/aiff", b"FORM\x00\x00\x00\x2EAIFCFVER".to_vec()),
        ("audio/basic", b".snd\x00\x00\x00\x18".to_vec()),
        ("video/mpeg", b"\x00\x00\x01\xBA\x44\x00".to_vec()),
        ("video/mpeg", b"\x00\x00\x01\xB3\x14\x00".to_vec()),
        ("video/quicktime", ftyp(b"mqt ", &[b"mqt "])),
        ("video/quicktime", ftyp(b"qt  ", &[b"qt  "])),
        ("video/quicktime", b"\x00\x00\x00\x08wide\x00\x00\x00\x10mdat".to_vec()),
        ("video/3gpp", ftyp(b"3gp5", &[b"3gp5", b"isom"])),
        ("video/3gpp2", ftyp(b"3g2a", &[b"3g2a"])),
        ("audio/x-m4a", ftyp(b"M4A ", &[b"M4A ", b"mp42", b"isom"])),
        ("audio/mp4", ftyp(b"M4B ", &[b"M4B ", b"mp42", b"isom"])),
        ("image/heic", ftyp(b"heic", &[b"mif1", b"heic"])),
        ("image/heic-sequence", ftyp(b"hevc", &[b"msf1", b"hevc"])),
        ("image/heif", ftyp(b"mif1", &[b"mif1", b"heic"])),
        ("image/heif-sequence", ftyp(b"msf1", &[b"msf1", b"iso8"])),
        ("image/avif", ftyp(b"avif", &[b"avif", b"mif1"])),
        ("video/mp4", ftyp(b"isom", &[b"isom", b"iso2", b"avc1", b"mp41"])),
        ("video/webm", ebml(b"webm")),
        ("video/x-matroska", ebml(b"matroska")),
        ("video/x-msvideo", b"RIFF\x00\x00\x00\x00AVI LIST".to_vec()),
        ("video/x-flv", b"FLV\x01\x05\x00\x00\x00\x09".to_vec()),
        (
            "video/x-ms-asf",
            b"\x30\x26\xB2\x75\x8E\x66\xCF\x11\xA6\xD9\x00\xAA\x00\x62\xCE\x6C\x00".to_vec(),
        ),
        ("audio/aac", b"\xFF\xF1\x50\x80\x02\x1F".to_vec()),
        ("audio/x-unknown", b"Creative Voice File\x1A\x1A\x00".to_vec()),
        ("audio/qcelp", b"RIFF\x00\x00\x00\x00QLCMfmt ".to_vec()),
        ("application/gzip", b"\x1F\x8B\x08\x00\x00\x00\x00\x00".to_vec()),
        ("application/x-java-applet", b"\xCA\xFE\xBA\xBE\x00\x00\x00\x34\x00\x1D".to_vec()),
        ("application/x-shockwave-flash", b"FWS\x0A\x00\x00\x00\x00".to_vec()),
        ("application/x-chrome-extension", b"Cr24\x02\x00\x00\x00".to_vec()),
        ("font/woff", b"wOFF\x00\x01\x00\x00".to_vec()),
        ("font/woff2", b"wOF2\x00\x01\x00\x00".to_vec()),
        ("font/otf", b"OTTO\x00\x0B\x00\x80".to_vec()),
        ("font/ttf", b"\x00\x01\x00\x00\x00\x0B\x00\x80".to_vec()),
        ("application/vnd.ms-fontobject", eot()),
        ("application/x-mach-binary", b"\xCA\xFE\xBA\xBE\x00\x00\x00\x02\x01\x00".to_vec()),
        ("application/x-mach-binary", b"\xCF\xFA\xED\xFE\x07\x00\x00\x01".to_vec()),
        ("application/wasm", b"\x00asm\x01\x00\x00\x00".to_vec()),
        ("application/octet-stream", shape(false)),
        ("application/octet-stream", shape(true)),
        ("application/x-dbf", dbf()),
        ("application/dicom", at_offset(128, b"DICM")),
        ("application/x-rar-compressed", b"Rar!\x1A\x07\x00\xCF\x90".to_vec()),
        ("application/x-rar-compressed", b"Rar!\x1A\x07\x01\x00\x33".to_vec()),
        ("image/vnd.djvu", b"AT&TFORM\x00\x00\x00\x10DJVMDIRM".to_vec()),
        ("application/x-mobipocket-ebook", at_offset(60, b"BOOKMOBI")),
        ("application/x-ms-reader", b"ITOLITLS\x01\x00\x00\x00".to_vec()),
        ("image/bpg", b"BPG\xFB\x00\x00".to_vec()),
        ("application/vnd.sqlite3", b"SQLite format 3\x00\x10\x00".to_vec()),
        ("image/vnd.dwg", b"AC1015\x00\x00\x00\x00".to_vec()),
        ("application/vnd.nintendo.snes.rom", b"NES\x1A\x02\x01".to_vec()),
        ("application/marc", b"00714cam a2200205 a 4500001001300000\x1E".to_vec()),
        ("application/x-msaccess", b"\x00\x01\x00\x00Standard Jet DB\x00".to_vec()),
        ("application/x-msaccess", b"\x00\x01\x00\x00Standard ACE DB\x00".to_vec()),
        ("application/zstd", b"\x28\xB5\x2F\xFD\x24\x00".to_vec()),
        ("application/vnd.ms-cab-compressed", b"MSCF\x00\x00\x00\x00".to_vec()),
        ("application/x-rpm", b"\xED\xAB\xEE\xDB\x03\x00".to_vec()),
        ("text/plain", b"Just some words.\nAnother line.\n".to_vec()),
        (
            "text/html",
            b"<!DOCTYPE html>\n<html><head><title>t</title></head></html>\n".to_vec(),
        ),
        (
            "image/svg+xml",
            b"<?xml version=\"1.0\"?>\n<svg xmlns=\"http://www.w3.org/2000/svg\"/>\n".to_vec(),
        ),
        ("text/xml", b"<?xml version=\"1.0\"?>\n<note><to>x</to></note>\n".to_vec()),
        (
            "application/rss+xml",
            b"<?xml version=\"1.0\"?>\n<rss version=\"2.0\"><channel/></rss>\n".to_vec(),
        ),
        (
            "application/vnd.google-earth.kml+xml",
            b"<?xml version=\"1.0\"?>\n<kml xmlns=\"http://www.opengis.net/kml/2.2\"/>\n"
                .to_vec(),
        ),
        (
            "application/atom+xml",
            xml_doc(r#"<feed xmlns="http://www.w3.org/2005/Atom"><title>t</title>"#),
        ),
        (
            "model/x3d+xml",
            xml_doc(r#"<X3D profile="Interchange" xmlns:xsd="http://www.w3.org/2001/XMLSchema-instance" xsd:noNamespaceSchemaLocation="http://www.web3d.org/specifications/x3d-3.3.xsd">"#),
        ),
        (
            "application/x-xliff+xml",
            xml_doc(r#"<xliff version="1.2" xmlns="urn:oasis:names:tc:xliff:document:1.2">"#),
        ),
        (
            "model/vnd.collada+xml",
            xml_doc(r#"<COLLADA xmlns="http://www.collada.org/2005/11/COLLADASchema" version="1.4.1">"#),
        ),
        (
            "application/gml+xml",
            xml_doc(r#"<gml:FeatureCollection xmlns:gml="http://www.opengis.net/gml">"#),
        ),
        (
            "application/gpx+xml",
            xml_doc(r#"<gpx version="1.1" creator="x" xmlns="http://www.topografix.com/GPX/1/1">"#),
        ),
        (
            "application/vnd.garmin.tcx+xml",
            xml_doc(r#"<TrainingCenterDatabase xmlns="http://www.garmin.com/xmlschemas/TrainingCenterDatabase/v2">"#),
        ),
        ("application/x-amf", xml_doc(r#"<amf unit="millimeter">"#)),
        (
            "application/vnd.ms-package.3dmanufacturing-3dmodel+xml",
            xml_doc(r#"<model unit="millimeter" xmlns="http://schemas.microsoft.com/3dmanufacturing/core/2015/02">"#),
        ),
        ("text/x-php", b"<?php\necho 'hi';\n".to_vec()),
        ("application/javascript", b"#!/usr/bin/env node\nconsole.log('hi');\n".to_vec()),
        ("text/x-lua", b"#!/usr/bin/lua5.4\nprint('hi')\n".to_vec()),
        ("application/x-python", b"#!/usr/bin/env python3\nprint('hi')\n".to_vec()),
        ("text/x-perl", b"#!/usr/bin/perl -w\nprint \"hi\";\n".to_vec()),
        ("application/json", b"{\"name\": \"mimetree\", \"tags\": [1, 2]}\n".to_vec()),
        (
            "application/geo+json",
            b"{\"type\": \"Feature\", \"geometry\": null, \"properties\": {}}".to_vec(),
        ),
        ("application/x-ndjson", b"{\"a\": 1}\n{\"a\": 2}\n{\"a\": 3}\n".to_vec()),
        ("text/rtf", b"{\\rtf1\\ansi\\deff0 {\\fonttbl {\\f0 Times;}}}".to_vec()),
        ("text/x-tcl", b"#!/usr/bin/tclsh\nputs hi\n".to_vec()),
        ("text/csv", b"name,age\nann,42\nbob,7\n".to_vec()),
        ("text/tab-separated-values", b"name\tage\nann\t42\nbob\t7\n".to_vec()),
        ("text/vcard", b"BEGIN:VCARD\r\nVERSION:4.0\r\nFN:Ann\r\nEND:VCARD\r\n".to_vec()),
        ("text/calendar", b"BEGIN:VCALENDAR\nVERSION:2.0\nEND:VCALENDAR\n".to_vec()),
        ("application/warc", b"WARC/1.0\r\nWARC-Type: warcinfo\r\n\r\n".to_vec()),
        ("text/vtt", b"WEBVTT\n\n00:01.000 --> 00:04.000\nHello\n".to_vec()),
    ]
}
