//! The concrete matcher tree.
//!
//! Sibling order is significant: the first accepting child wins. Binary
//! formats with fixed magic come before the text heuristic, container
//! envelopes list their most specific fingerprints first, and within text,
//! markup precedes scripts, JSON precedes NDJSON and CSV precedes TSV.

// Submodule declarations
pub mod report;

// Re-exports
pub use report::{Catalogue, CatalogueEntry, supported_mimes};

use crate::matchers::{
    archive, audio, delimited, document, executable, font, geo, image, isobmff, json, markup, odf,
    ole2, ooxml, package, riff, script, text, video, zip,
};
use crate::tree::{Matcher, Node, Signature};

/// MIME type of the root: unclassified binary.
pub const OCTET_STREAM: &str = "application/octet-stream";
/// MIME type for zero-length input.
pub const EMPTY: &str = "inode/x-empty";
/// MIME type of the text fallback.
pub const PLAIN_TEXT: &str = "text/plain";

/// Build the full tree. Called once by [`crate::tree::root`].
pub fn build_tree() -> Node {
    Node::new(OCTET_STREAM, "", Matcher::Always).with_children(vec![
        Node::structure(EMPTY, "", crate::matchers::empty),
        Node::magic(
            "application/x-7z-compressed",
            ".7z",
            Signature::prefix(&[b"7z\xBC\xAF\x27\x1C"]),
        ),
        zip_family(),
        Node::magic("application/pdf", ".pdf", Signature::prefix(&[b"%PDF-"])),
        ole_family(),
        Node::magic(
            "application/postscript",
            ".ps",
            Signature::prefix(&[b"%!PS-Adobe-"]),
        ),
        Node::magic(
            "image/vnd.adobe.photoshop",
            ".psd",
            Signature::prefix(&[b"8BPS"]),
        ),
        Node::structure("application/ogg", ".ogg", audio::ogg).with_children(vec![
            Node::structure("audio/ogg", ".oga", audio::ogg_audio),
            Node::structure("video/ogg", ".ogv", audio::ogg_video),
        ]),
        Node::magic(
            "image/png",
            ".png",
            Signature::prefix(&[b"\x89PNG\r\n\x1A\n"]),
        ),
        Node::magic("image/jpeg", ".jpg", Signature::prefix(&[b"\xFF\xD8\xFF"])),
        Node::structure("image/jp2", ".jp2", image::jp2),
        Node::structure("image/jpx", ".jpf", image::jpx),
        Node::structure("image/jpm", ".jpm", image::jpm),
        Node::magic("image/gif", ".gif", Signature::prefix(&[b"GIF87a", b"GIF89a"])),
        Node::structure("image/webp", ".webp", riff::webp),
        Node::magic(
            "application/vnd.microsoft.portable-executable",
            ".exe",
            Signature::prefix(&[b"MZ"]),
        ),
        Node::structure("application/x-elf", "", executable::elf).with_children(vec![
            Node::structure("application/x-object", "", executable::elf_object),
            Node::structure("application/x-executable", "", executable::elf_executable),
            Node::structure("application/x-sharedlib", ".so", executable::elf_shared_lib),
            Node::structure("application/x-coredump", "", executable::elf_core),
        ]),
        Node::structure("application/x-archive", ".a", archive::ar).with_children(vec![
            Node::structure(
                "application/vnd.debian.binary-package",
                ".deb",
                archive::deb,
            ),
        ]),
        Node::structure("application/x-tar", ".tar", archive::tar),
        Node::magic("application/x-xar", ".xar", Signature::prefix(&[b"xar!"])),
        Node::magic("application/x-bzip2", ".bz2", Signature::prefix(&[b"BZh"])),
        Node::magic(
            "application/x-xz",
            ".xz",
            Signature::prefix(&[b"\xFD7zXZ\x00"]),
        ),
        Node::magic(
            "application/fits",
            ".fits",
            Signature::prefix(&[b"SIMPLE  =                    T"]),
        ),
        Node::magic(
            "image/tiff",
            ".tiff",
            Signature::prefix(&[b"II*\x00", b"MM\x00*"]),
        ),
        Node::magic("image/bmp", ".bmp", Signature::prefix(&[b"BM"])),
        Node::magic("image/x-icon", ".ico", Signature::prefix(&[b"\x00\x00\x01\x00"])),
        Node::magic("image/x-icns", ".icns", Signature::prefix(&[b"icns"])),
        Node::structure("audio/mpeg", ".mp3", audio::mp3),
        Node::magic("audio/flac", ".flac", Signature::prefix(&[b"fLaC"])),
        Node::magic("audio/midi", ".midi", Signature::prefix(&[b"MThd"])),
        Node::magic("audio/ape", ".ape", Signature::prefix(&[b"MAC "])),
        Node::magic("audio/musepack", ".mpc", Signature::prefix(&[b"MPCK"])),
        Node::magic("audio/amr", ".amr", Signature::prefix(&[b"#!AMR"])),
        Node::structure("audio/wav", ".wav", riff::wav),
        Node::structure("audio/aiff", ".aiff", audio::aiff),
        Node::magic("audio/basic", ".au", Signature::prefix(&[b".snd"])),
        Node::magic(
            "video/mpeg",
            ".mpeg",
            Signature::prefix(&[b"\x00\x00\x01\xBA", b"\x00\x00\x01\xB3"]),
        ),
        Node::structure("video/quicktime", ".mqv", isobmff::mqv),
        Node::structure("video/quicktime", ".mov", isobmff::quicktime),
        Node::structure("video/3gpp", ".3gp", isobmff::three_gp),
        Node::structure("video/3gpp2", ".3g2", isobmff::three_g2),
        Node::structure("audio/x-m4a", ".m4a", isobmff::m4a),
        Node::structure("audio/mp4", ".m4b", isobmff::audio_mp4),
        Node::structure("image/heic", ".heic", isobmff::heic),
        Node::structure("image/heic-sequence", ".heic", isobmff::heic_sequence),
        Node::structure("image/heif", ".heif", isobmff::heif),
        Node::structure("image/heif-sequence", ".heif", isobmff::heif_sequence),
        Node::structure("image/avif", ".avif", isobmff::avif),
        Node::structure("video/mp4", ".mp4", isobmff::mp4),
        Node::structure("video/webm", ".webm", video::webm),
        Node::structure("video/x-matroska", ".mkv", video::matroska),
        Node::structure("video/x-msvideo", ".avi", riff::avi),
        Node::magic("video/x-flv", ".flv", Signature::prefix(&[b"FLV"])),
        Node::magic(
            "video/x-ms-asf",
            ".asf",
            Signature::prefix(&[
                b"\x30\x26\xB2\x75\x8E\x66\xCF\x11\xA6\xD9\x00\xAA\x00\x62\xCE\x6C",
            ]),
        ),
        Node::magic("audio/aac", ".aac", Signature::prefix(&[b"\xFF\xF1", b"\xFF\xF9"])),
        Node::magic(
            "audio/x-unknown",
            ".voc",
            Signature::prefix(&[b"Creative Voice File"]),
        ),
        Node::structure("audio/qcelp", ".qcp", riff::qcp),
        Node::magic("application/gzip", ".gz", Signature::prefix(&[b"\x1F\x8B"])),
        Node::structure("application/x-java-applet", ".class", executable::class),
        Node::magic(
            "application/x-shockwave-flash",
            ".swf",
            Signature::prefix(&[b"CWS", b"FWS", b"ZWS"]),
        ),
        Node::magic(
            "application/x-chrome-extension",
            ".crx",
            Signature::prefix(&[b"Cr24"]),
        ),
        Node::magic("font/woff", ".woff", Signature::prefix(&[b"wOFF"])),
        Node::magic("font/woff2", ".woff2", Signature::prefix(&[b"wOF2"])),
        Node::magic("font/otf", ".otf", Signature::prefix(&[b"OTTO"])),
        Node::magic("font/ttf", ".ttf", Signature::prefix(&[b"\x00\x01\x00\x00\x00"])),
        Node::structure("application/vnd.ms-fontobject", ".eot", font::eot),
        Node::magic("application/wasm", ".wasm", Signature::prefix(&[b"\x00asm"])),
        Node::structure("application/octet-stream", ".shx", geo::shx).with_children(vec![
            Node::structure("application/octet-stream", ".shp", geo::shp),
        ]),
        Node::structure("application/x-dbf", ".dbf", geo::dbf),
        Node::magic("application/dicom", ".dcm", Signature::at(128, &[b"DICM"])),
        Node::magic(
            "application/x-rar-compressed",
            ".rar",
            Signature::prefix(&[b"Rar!\x1A\x07\x00", b"Rar!\x1A\x07\x01\x00"]),
        ),
        Node::structure("image/vnd.djvu", ".djvu", image::djvu),
        Node::magic(
            "application/x-mobipocket-ebook",
            ".mobi",
            Signature::at(60, &[b"BOOKMOBI"]),
        ),
        Node::magic("application/x-ms-reader", ".lit", Signature::prefix(&[b"ITOLITLS"])),
        Node::magic("image/bpg", ".bpg", Signature::prefix(&[b"BPG\xFB"])),
        Node::magic(
            "application/vnd.sqlite3",
            ".sqlite",
            Signature::prefix(&[b"SQLite format 3\x00"]),
        ),
        Node::magic("image/vnd.dwg", ".dwg", Signature::prefix(DWG_VERSIONS)),
        Node::magic(
            "application/vnd.nintendo.snes.rom",
            ".nes",
            Signature::prefix(&[b"NES\x1A"]),
        ),
        Node::structure("application/x-mach-binary", ".macho", executable::macho),
        Node::structure("application/marc", ".mrc", document::marc),
        Node::magic(
            "application/x-msaccess",
            ".mdb",
            Signature::prefix(&[b"\x00\x01\x00\x00Standard Jet DB"]),
        ),
        Node::magic(
            "application/x-msaccess",
            ".accdb",
            Signature::prefix(&[b"\x00\x01\x00\x00Standard ACE DB"]),
        ),
        Node::structure("application/zstd", ".zst", archive::zstd),
        Node::magic(
            "application/vnd.ms-cab-compressed",
            ".cab",
            Signature::prefix(&[b"MSCF"]),
        ),
        Node::magic("application/x-rpm", ".rpm", Signature::prefix(&[b"\xED\xAB\xEE\xDB"])),
        text_family(),
    ])
}

/// AutoCAD drawing version strings.
const DWG_VERSIONS: &[&[u8]] = &[
    b"AC1.2", b"AC1.40", b"AC1.50", b"AC2.10", b"AC1002", b"AC1003", b"AC1004", b"AC1006",
    b"AC1009", b"AC1012", b"AC1014", b"AC1015", b"AC1018", b"AC1021", b"AC1024", b"AC1027",
    b"AC1032",
];

fn zip_family() -> Node {
    Node::structure("application/zip", ".zip", zip::zip).with_children(vec![
        Node::structure(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
            ".xlsx",
            ooxml::xlsx,
        ),
        Node::structure(
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
            ".docx",
            ooxml::docx,
        ),
        Node::structure(
            "application/vnd.openxmlformats-officedocument.presentationml.presentation",
            ".pptx",
            ooxml::pptx,
        ),
        Node::structure("application/vnd.ms-visio.drawing.main+xml", ".vsdx", ooxml::vsdx),
        Node::structure("application/epub+zip", ".epub", odf::epub),
        Node::structure("application/vnd.android.package-archive", ".apk", package::apk),
        Node::structure("application/jar", ".jar", package::jar),
        Node::structure("application/vnd.oasis.opendocument.text", ".odt", odf::odt),
        Node::structure(
            "application/vnd.oasis.opendocument.text-template",
            ".ott",
            odf::ott,
        ),
        Node::structure(
            "application/vnd.oasis.opendocument.spreadsheet",
            ".ods",
            odf::ods,
        ),
        Node::structure(
            "application/vnd.oasis.opendocument.spreadsheet-template",
            ".ots",
            odf::ots,
        ),
        Node::structure(
            "application/vnd.oasis.opendocument.presentation",
            ".odp",
            odf::odp,
        ),
        Node::structure(
            "application/vnd.oasis.opendocument.presentation-template",
            ".otp",
            odf::otp,
        ),
        Node::structure("application/vnd.oasis.opendocument.graphics", ".odg", odf::odg),
        Node::structure(
            "application/vnd.oasis.opendocument.graphics-template",
            ".otg",
            odf::otg,
        ),
        Node::structure("application/vnd.oasis.opendocument.formula", ".odf", odf::odf),
        Node::structure("application/vnd.google-earth.kmz", ".kmz", package::kmz),
    ])
}

fn ole_family() -> Node {
    Node::structure("application/x-ole-storage", "", ole2::ole).with_children(vec![
        Node::structure("application/msword", ".doc", ole2::doc),
        Node::structure("application/vnd.ms-excel", ".xls", ole2::xls),
        Node::structure("application/vnd.ms-powerpoint", ".ppt", ole2::ppt),
        Node::structure("application/vnd.ms-publisher", ".pub", ole2::publisher),
        Node::structure("application/vnd.ms-outlook", ".msg", ole2::msg),
        Node::structure("application/x-ms-installer", ".msi", ole2::msi),
    ])
}

fn xml_family() -> Node {
    Node::heuristic("text/xml", ".xml", markup::xml).with_children(vec![
        Node::heuristic("application/rss+xml", ".rss", markup::rss),
        Node::heuristic("application/atom+xml", ".atom", markup::atom),
        Node::heuristic("model/x3d+xml", ".x3d", markup::x3d),
        Node::heuristic("application/vnd.google-earth.kml+xml", ".kml", markup::kml),
        Node::heuristic("application/x-xliff+xml", ".xlf", markup::xliff),
        Node::heuristic("model/vnd.collada+xml", ".dae", markup::collada),
        Node::heuristic("application/gml+xml", ".gml", markup::gml),
        Node::heuristic("application/gpx+xml", ".gpx", markup::gpx),
        Node::heuristic("application/vnd.garmin.tcx+xml", ".tcx", markup::tcx),
        Node::heuristic("application/x-amf", ".amf", markup::amf),
        Node::heuristic(
            "application/vnd.ms-package.3dmanufacturing-3dmodel+xml",
            ".3mf",
            markup::three_mf,
        ),
    ])
}

fn text_family() -> Node {
    Node::heuristic(PLAIN_TEXT, ".txt", text::text).with_children(vec![
        Node::heuristic("text/html", ".html", markup::html),
        Node::heuristic("image/svg+xml", ".svg", markup::svg),
        xml_family(),
        Node::heuristic("text/x-php", ".php", script::php),
        Node::heuristic("application/javascript", ".js", script::javascript),
        Node::heuristic("text/x-lua", ".lua", script::lua),
        Node::heuristic("text/x-perl", ".pl", script::perl),
        Node::heuristic("application/x-python", ".py", script::python),
        Node::heuristic("application/json", ".json", json::json).with_children(vec![
            Node::heuristic("application/geo+json", ".geojson", json::geojson),
        ]),
        Node::heuristic("application/x-ndjson", ".ndjson", json::ndjson),
        Node::heuristic("text/rtf", ".rtf", text::rtf),
        Node::heuristic("text/x-tcl", ".tcl", script::tcl),
        Node::heuristic("text/csv", ".csv", delimited::csv),
        Node::heuristic("text/tab-separated-values", ".tsv", delimited::tsv),
        Node::heuristic("text/vcard", ".vcf", text::vcard),
        Node::heuristic("text/calendar", ".ics", text::icalendar),
        Node::heuristic("application/warc", ".warc", text::warc),
        Node::heuristic("text/vtt", ".vtt", text::vtt),
    ])
}
