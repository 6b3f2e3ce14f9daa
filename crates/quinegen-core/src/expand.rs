//! Template expansion: the single forward pass that turns a template into
//! the finished program text.
//!
//! The expander walks the template byte by byte. A quote-sentinel window
//! emits one `"`; a string-sentinel window emits the escaped form of the
//! *entire, unmodified* template; every other byte is copied through. One
//! pass, no recursion, no second expansion of substituted text: output that
//! happens to contain sentinel bytes (the escaped template always does) is
//! never rescanned.
//!
//! Expansion is total over arbitrary bytes. Validation of template shape
//! (does a string-sentinel exist at all, are the counts sane) lives in
//! [`crate::fixpoint`], not here.

use std::io::{self, Write};

use tracing::trace;

use crate::error::{QuinegenError, Result};
use crate::escape::escape;
use crate::sentinel::Sentinel;

/// Expands templates for a fixed pair of sentinels.
#[derive(Debug, Clone, Copy)]
pub struct Expander {
    quote: Sentinel,
    string: Sentinel,
}

impl Expander {
    /// Build an expander for the given sentinel pair.
    ///
    /// The two sentinels must differ: with equal tokens the quote rule
    /// (tested first) would shadow the string rule and no template could
    /// ever embed itself.
    pub fn new(quote: Sentinel, string: Sentinel) -> Result<Self> {
        if quote == string {
            return Err(QuinegenError::SentinelsEqual(quote.to_string()));
        }
        Ok(Expander { quote, string })
    }

    /// The quote-sentinel this expander recognizes.
    pub fn quote_sentinel(&self) -> Sentinel {
        self.quote
    }

    /// The string-sentinel this expander recognizes.
    pub fn string_sentinel(&self) -> Sentinel {
        self.string
    }

    /// Expand `template` into a fresh buffer.
    pub fn expand(&self, template: &[u8]) -> Vec<u8> {
        // Worst case one string-sentinel: template plus its escaped copy.
        let mut out = Vec::with_capacity(template.len() * 3);
        self.expand_to(template, &mut out)
            .expect("writing to a Vec is infallible");
        out
    }

    /// Expand `template`, streaming to `out` in strictly increasing offset
    /// order with no gaps. A write failure aborts the pass; for a one-shot
    /// emission there is nothing to recover.
    pub fn expand_to<W: Write>(&self, template: &[u8], out: &mut W) -> io::Result<()> {
        // Computed on first string-sentinel hit, re-emitted for any later one.
        let mut escaped: Option<Vec<u8>> = None;
        let mut i = 0;
        while i < template.len() {
            if self.quote.matches_at(template, i) {
                trace!(offset = i, "quote-sentinel");
                out.write_all(b"\"")?;
                i += 3;
            } else if self.string.matches_at(template, i) {
                trace!(offset = i, "string-sentinel");
                let body = escaped.get_or_insert_with(|| escape(template));
                out.write_all(body)?;
                i += 3;
            } else {
                out.write_all(&template[i..i + 1])?;
                i += 1;
            }
        }
        Ok(())
    }
}

impl Default for Expander {
    /// The historical `@Q@` / `@S@` pair.
    fn default() -> Self {
        Expander {
            quote: Sentinel::QUOTE,
            string: Sentinel::STRING,
        }
    }
}
