//! Scripting-language source identified by an interpreter line or opening tag.

use super::text::{body, utf8_text};
use crate::common::binary::starts_with_ignore_ascii_case;

/// Interpreter named on a `#!` line, skipping an `env` indirection and its flags.
///
/// # Examples
///
/// ```
/// use mimetree::matchers::script::interpreter;
/// assert_eq!(interpreter(b"#!/usr/bin/env -S python3 -u\n"), Some(&b"python3"[..]));
/// assert_eq!(interpreter(b"#! /bin/sh"), Some(&b"sh"[..]));
/// assert_eq!(interpreter(b"print(1)"), None);
/// ```
pub fn interpreter(prefix: &[u8]) -> Option<&[u8]> {
    let rest = prefix.strip_prefix(b"#!")?;
    let line_end = rest
        .iter()
        .position(|&b| b == b'\n' || b == b'\r')
        .unwrap_or(rest.len());
    let mut words = rest[..line_end]
        .split(|&b| b == b' ' || b == b'\t')
        .filter(|word| !word.is_empty());

    let program = basename(words.next()?);
    if program != b"env" {
        return Some(program);
    }
    words.find(|word| !word.starts_with(b"-") && !word.contains(&b'='))
        .map(basename)
}

fn basename(path: &[u8]) -> &[u8] {
    path.rsplit(|&b| b == b'/').next().unwrap_or(path)
}

/// `name` is `base` optionally followed by a version (`python3`, `lua5.4`).
fn is_versioned(name: &[u8], base: &[u8]) -> bool {
    name.strip_prefix(base)
        .is_some_and(|version| version.iter().all(|b| b.is_ascii_digit() || *b == b'.'))
}

fn shebang_for(prefix: &[u8], names: &[&[u8]]) -> bool {
    let Some(program) = interpreter(prefix) else {
        return false;
    };
    names.iter().any(|name| is_versioned(program, name)) && utf8_text(prefix)
}

/// PHP source: opening tag or a `php` interpreter line.
pub fn php(prefix: &[u8]) -> bool {
    let content = body(prefix);
    if starts_with_ignore_ascii_case(content, b"<?php") {
        return utf8_text(prefix);
    }
    shebang_for(prefix, &[b"php"])
}

/// JavaScript run by node.
pub fn javascript(prefix: &[u8]) -> bool {
    shebang_for(prefix, &[b"node", b"nodejs"])
}

pub fn lua(prefix: &[u8]) -> bool {
    shebang_for(prefix, &[b"lua"])
}

pub fn perl(prefix: &[u8]) -> bool {
    shebang_for(prefix, &[b"perl"])
}

pub fn python(prefix: &[u8]) -> bool {
    shebang_for(prefix, &[b"python"])
}

/// Tcl, either through `tclsh` or the Tk shell `wish`.
pub fn tcl(prefix: &[u8]) -> bool {
    shebang_for(prefix, &[b"tclsh", b"wish"])
}
