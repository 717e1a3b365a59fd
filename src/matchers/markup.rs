//! HTML, SVG and XML with its root-element based subtypes.
//!
//! XML vocabularies are told apart by the local name of the root element and,
//! where the vocabulary has one, its namespace URI. The prolog (declaration,
//! processing instructions, comments, doctype) is skipped to reach the root.

use memchr::memmem;

use super::text::{body, utf8_text};
use crate::common::binary::{is_ws, starts_with_ignore_ascii_case};

/// Tags that open an HTML document, compared case-insensitively.
const HTML_TAGS: &[&[u8]] = &[
    b"<!DOCTYPE HTML",
    b"<HTML",
    b"<HEAD",
    b"<SCRIPT",
    b"<IFRAME",
    b"<H1",
    b"<DIV",
    b"<FONT",
    b"<TABLE",
    b"<A",
    b"<STYLE",
    b"<TITLE",
    b"<B",
    b"<BODY",
    b"<BR",
    b"<P",
    b"<!--",
];

/// Upper bound on prolog items skipped before giving up on the root element.
const MAX_PROLOG_ITEMS: usize = 32;

pub fn html(prefix: &[u8]) -> bool {
    let content = body(prefix);
    let opens_html = HTML_TAGS.iter().any(|tag| {
        starts_with_ignore_ascii_case(content, tag)
            && (*tag == b"<!--"
                || matches!(content.get(tag.len()), Some(b) if *b == b'>' || is_ws(*b)))
    });
    opens_html && utf8_text(prefix)
}

pub fn svg(prefix: &[u8]) -> bool {
    memmem::find(prefix, b"<svg").is_some() && utf8_text(prefix)
}

/// Any document opening with an XML declaration.
pub fn xml(prefix: &[u8]) -> bool {
    body(prefix).starts_with(b"<?xml") && utf8_text(prefix)
}

/// Start tag of the document element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RootElement<'a> {
    /// Qualified name as written, e.g. `gml:FeatureCollection`
    pub name: &'a [u8],
    /// Start tag text up to `>` or the end of the prefix
    pub tag: &'a [u8],
}

impl<'a> RootElement<'a> {
    /// Name without namespace prefix.
    pub fn local_name(&self) -> &'a [u8] {
        match self.name.iter().position(|&b| b == b':') {
            Some(colon) => &self.name[colon + 1..],
            None => self.name,
        }
    }

    /// Whether the start tag declares or mentions `uri`.
    pub fn mentions(&self, uri: &[u8]) -> bool {
        memmem::find(self.tag, uri).is_some()
    }
}

/// Locate the document element, skipping the prolog.
///
/// # Examples
///
/// ```
/// use mimetree::matchers::markup::root_element;
/// let doc = b"<?xml version=\"1.0\"?>\n<!-- note -->\n<rss version=\"2.0\"><channel/></rss>";
/// assert_eq!(root_element(doc).unwrap().local_name(), b"rss");
/// ```
pub fn root_element(prefix: &[u8]) -> Option<RootElement<'_>> {
    let mut rest = body(prefix);
    for _ in 0..MAX_PROLOG_ITEMS {
        rest = trim_ws(rest);
        if rest.starts_with(b"<?") {
            rest = skip_past(rest, b"?>")?;
        } else if rest.starts_with(b"<!--") {
            rest = skip_past(rest, b"-->")?;
        } else if rest.starts_with(b"<!") {
            rest = skip_doctype(rest)?;
        } else if rest.starts_with(b"<") {
            let after = &rest[1..];
            let name_len = after
                .iter()
                .position(|&b| is_ws(b) || b == b'/' || b == b'>')
                .unwrap_or(after.len());
            if name_len == 0 {
                return None;
            }
            let tag_len = memchr::memchr(b'>', rest).map_or(rest.len(), |pos| pos + 1);
            return Some(RootElement {
                name: &after[..name_len],
                tag: &rest[..tag_len],
            });
        } else {
            return None;
        }
    }
    None
}

fn trim_ws(data: &[u8]) -> &[u8] {
    let start = data.iter().position(|b| !is_ws(*b)).unwrap_or(data.len());
    &data[start..]
}

fn skip_past<'a>(data: &'a [u8], end: &[u8]) -> Option<&'a [u8]> {
    memmem::find(data, end).map(|pos| &data[pos + end.len()..])
}

/// Skip `<!DOCTYPE ...>` including a bracketed internal subset.
fn skip_doctype(data: &[u8]) -> Option<&[u8]> {
    let close = memchr::memchr(b'>', data)?;
    match memchr::memchr(b'[', &data[..close]) {
        Some(_) => skip_past(data, b"]>").or_else(|| skip_past(data, b"]")),
        None => Some(&data[close + 1..]),
    }
}

/// How one XML vocabulary is recognized from its root element.
struct XmlVocabulary {
    /// Local name of the root element; `None` accepts any root
    local_name: Option<&'static [u8]>,
    /// Namespace URIs, one of which must be mentioned; empty means no requirement
    namespaces: &'static [&'static [u8]],
}

impl XmlVocabulary {
    fn matches(&self, prefix: &[u8]) -> bool {
        if !xml(prefix) {
            return false;
        }
        let Some(root) = root_element(prefix) else {
            return false;
        };
        if self.local_name.is_some_and(|name| root.local_name() != name) {
            return false;
        }
        self.namespaces.is_empty() || self.namespaces.iter().any(|ns| root.mentions(ns))
    }
}

const RSS: XmlVocabulary = XmlVocabulary {
    local_name: Some(b"rss"),
    namespaces: &[],
};

const ATOM: XmlVocabulary = XmlVocabulary {
    local_name: Some(b"feed"),
    namespaces: &[b"http://www.w3.org/2005/Atom"],
};

const X3D: XmlVocabulary = XmlVocabulary {
    local_name: Some(b"X3D"),
    namespaces: &[b"http://www.web3d.org/specifications/x3d"],
};

const KML: XmlVocabulary = XmlVocabulary {
    local_name: Some(b"kml"),
    namespaces: &[
        b"http://www.opengis.net/kml/2.2",
        b"http://earth.google.com/kml/2.0",
        b"http://earth.google.com/kml/2.1",
        b"http://earth.google.com/kml/2.2",
    ],
};

const XLIFF: XmlVocabulary = XmlVocabulary {
    local_name: Some(b"xliff"),
    namespaces: &[b"urn:oasis:names:tc:xliff:document:"],
};

const COLLADA: XmlVocabulary = XmlVocabulary {
    local_name: Some(b"COLLADA"),
    namespaces: &[b"http://www.collada.org/2005/11/COLLADASchema"],
};

const GML: XmlVocabulary = XmlVocabulary {
    local_name: None,
    namespaces: &[b"http://www.opengis.net/gml"],
};

const GPX: XmlVocabulary = XmlVocabulary {
    local_name: Some(b"gpx"),
    namespaces: &[b"http://www.topografix.com/GPX/"],
};

const TCX: XmlVocabulary = XmlVocabulary {
    local_name: Some(b"TrainingCenterDatabase"),
    namespaces: &[b"http://www.garmin.com/xmlschemas/TrainingCenterDatabase/"],
};

const AMF: XmlVocabulary = XmlVocabulary {
    local_name: Some(b"amf"),
    namespaces: &[],
};

const THREE_MF: XmlVocabulary = XmlVocabulary {
    local_name: Some(b"model"),
    namespaces: &[b"http://schemas.microsoft.com/3dmanufacturing/core/2015/02"],
};

pub fn rss(prefix: &[u8]) -> bool {
    RSS.matches(prefix)
}

pub fn atom(prefix: &[u8]) -> bool {
    ATOM.matches(prefix)
}

pub fn x3d(prefix: &[u8]) -> bool {
    X3D.matches(prefix)
}

pub fn kml(prefix: &[u8]) -> bool {
    KML.matches(prefix)
}

pub fn xliff(prefix: &[u8]) -> bool {
    XLIFF.matches(prefix)
}

pub fn collada(prefix: &[u8]) -> bool {
    COLLADA.matches(prefix)
}

/// Geography Markup Language: any root bound to the GML namespace.
pub fn gml(prefix: &[u8]) -> bool {
    GML.matches(prefix)
}

pub fn gpx(prefix: &[u8]) -> bool {
    GPX.matches(prefix)
}

/// Garmin Training Center.
pub fn tcx(prefix: &[u8]) -> bool {
    TCX.matches(prefix)
}

/// Additive Manufacturing File.
pub fn amf(prefix: &[u8]) -> bool {
    AMF.matches(prefix)
}

/// 3D Manufacturing Format model part.
pub fn three_mf(prefix: &[u8]) -> bool {
    THREE_MF.matches(prefix)
}
