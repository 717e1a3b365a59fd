//! Matcher capability attached to every tree node.

use crate::common::binary::has_prefix_at;
use crate::common::bom::ends_mid_character;

/// Plain matcher function over the bounded prefix.
pub type MatchFn = fn(&[u8]) -> bool;

/// Fixed-offset magic signature: accepts when any of `patterns` occurs at `offset`.
#[derive(Debug, Clone, Copy)]
pub struct Signature {
    offset: usize,
    patterns: &'static [&'static [u8]],
}

impl Signature {
    /// One of several patterns at offset 0.
    pub const fn prefix(patterns: &'static [&'static [u8]]) -> Self {
        Self {
            offset: 0,
            patterns,
        }
    }

    /// One of several patterns at `offset`.
    pub const fn at(offset: usize, patterns: &'static [&'static [u8]]) -> Self {
        Self { offset, patterns }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn patterns(&self) -> &'static [&'static [u8]] {
        self.patterns
    }

    /// Check the prefix; a prefix shorter than `offset + pattern.len()` never matches.
    #[inline]
    pub fn matches(&self, prefix: &[u8]) -> bool {
        self.patterns
            .iter()
            .any(|pattern| !pattern.is_empty() && has_prefix_at(prefix, self.offset, pattern))
    }
}

/// How much of the input a prefix holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extent {
    /// The prefix may have been cut by the read limit.
    #[default]
    Partial,
    /// The prefix is the entire input.
    Whole,
}

impl Extent {
    /// Extent of a prefix of `len` bytes taken under `read_limit`.
    ///
    /// A prefix that filled the limit is partial even if the input happened
    /// to end there, so a stream and a buffer of the same bytes agree.
    pub fn of(len: usize, read_limit: usize) -> Self {
        if len < read_limit { Extent::Whole } else { Extent::Partial }
    }
}

/// How a node decides whether a prefix belongs to its format.
///
/// New formats plug in by picking a variant; the traversal engine only ever
/// calls [`Matcher::accepts_in`].
#[derive(Clone, Copy)]
pub enum Matcher {
    /// Accepts every prefix, including the empty one. Reserved for the root.
    Always,
    /// Fixed magic bytes at a known offset.
    Magic(Signature),
    /// Structural or container check (header fields, envelope index walk).
    Structure(MatchFn),
    /// Loose content heuristic (text classification, token scanning).
    Heuristic(MatchFn),
}

impl Matcher {
    /// Evaluate this matcher. Total over every prefix length, including zero.
    #[inline]
    pub fn accepts(&self, prefix: &[u8]) -> bool {
        match self {
            Matcher::Always => true,
            Matcher::Magic(signature) => signature.matches(prefix),
            Matcher::Structure(f) | Matcher::Heuristic(f) => f(prefix),
        }
    }

    /// Evaluate this matcher knowing how much of the input `prefix` covers.
    ///
    /// Heuristics tolerate a final character cut by the read limit. On a
    /// whole input nothing was cut, so a heuristic rejects a prefix that
    /// ends mid-character. Every other variant ignores the extent.
    #[inline]
    pub fn accepts_in(&self, prefix: &[u8], extent: Extent) -> bool {
        match self {
            Matcher::Heuristic(f) => {
                !(extent == Extent::Whole && ends_mid_character(prefix)) && f(prefix)
            },
            other => other.accepts(prefix),
        }
    }

    /// Short label of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Matcher::Always => "always",
            Matcher::Magic(_) => "magic",
            Matcher::Structure(_) => "structure",
            Matcher::Heuristic(_) => "heuristic",
        }
    }
}

impl std::fmt::Debug for Matcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Matcher::Magic(signature) => f.debug_tuple("Magic").field(signature).finish(),
            other => f.write_str(other.kind()),
        }
    }
}
