//! Sentinel tokens: the 3-byte placeholder markers recognized by the expander.
//!
//! Two sentinels exist per expansion: the quote-sentinel (substituted with a
//! single `"`) and the string-sentinel (substituted with the escaped form of
//! the whole template). Both default to the historical `@Q@` / `@S@` tokens.
//!
//! Recognition is purely textual. A sentinel occurring incidentally in
//! ordinary template text *will* be substituted, so skeleton authors must
//! keep the token bytes out of their surrounding text (the shipped skeletons
//! compare the 3 bytes individually rather than spelling a token in the
//! clear). [`Sentinel::count_in`] exists so construction-time tooling can
//! check for collisions.

use std::fmt;

use crate::error::{QuinegenError, Result};

/// A 3-byte placeholder token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sentinel([u8; 3]);

impl Sentinel {
    /// Default quote-sentinel, substituted with a single `"`.
    pub const QUOTE: Sentinel = Sentinel(*b"@Q@");

    /// Default string-sentinel, substituted with the escaped template.
    pub const STRING: Sentinel = Sentinel(*b"@S@");

    /// Build a sentinel from exactly 3 bytes.
    pub const fn new(bytes: [u8; 3]) -> Self {
        Sentinel(bytes)
    }

    /// Parse a sentinel from a string, which must be exactly 3 bytes.
    pub fn parse(token: &str) -> Result<Self> {
        let bytes = token.as_bytes();
        if bytes.len() != 3 {
            return Err(QuinegenError::SentinelLength {
                token: token.to_string(),
                len: bytes.len(),
            });
        }
        Ok(Sentinel([bytes[0], bytes[1], bytes[2]]))
    }

    /// The raw token bytes.
    pub fn as_bytes(&self) -> &[u8; 3] {
        &self.0
    }

    /// Whether this sentinel's 3-byte window starts at index `i` of `text`.
    ///
    /// The bound `i + 2 < text.len()` is checked before any byte is compared,
    /// so windows starting at the last two positions (which cannot hold a
    /// full token) are never tested: a truncated sentinel prefix in the final
    /// 2 bytes of a template stays literal. A full token ending exactly at
    /// the last byte does match.
    pub fn matches_at(&self, text: &[u8], i: usize) -> bool {
        i + 2 < text.len()
            && text[i] == self.0[0]
            && text[i + 1] == self.0[1]
            && text[i + 2] == self.0[2]
    }

    /// Count recognizable occurrences in `text`, scanning exactly the way
    /// the expander does: left to right, advancing past each match so the
    /// token bytes are never counted twice.
    pub fn count_in(&self, text: &[u8]) -> usize {
        let mut count = 0;
        let mut i = 0;
        while i + 2 < text.len() {
            if self.matches_at(text, i) {
                count += 1;
                i += 3;
            } else {
                i += 1;
            }
        }
        count
    }
}

impl fmt::Display for Sentinel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.0))
    }
}
