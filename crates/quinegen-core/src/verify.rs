//! Round-trip verification of a skeleton / source pair.
//!
//! The headline property of the whole system: expanding the template must
//! reproduce the finished source byte for byte. [`verify`] re-runs the
//! expansion and reports the comparison; [`recover_template`] goes the other
//! way, pulling the embedded literal out of a generated source and
//! unescaping it back into the template it was built from. A pair that
//! passes both directions is internally consistent — any later edit to the
//! source outside the literal breaks the match and shows up as a mismatch
//! offset.

use serde::Serialize;
use tracing::debug;

use crate::error::{QuinegenError, Result};
use crate::escape::{escape, unescape};
use crate::expand::Expander;

/// Result of re-expanding a skeleton against a claimed source.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    /// Whether the expansion equals the source exactly.
    pub matched: bool,
    /// Length of the re-expanded skeleton, in bytes.
    pub expanded_len: usize,
    /// Length of the claimed source, in bytes.
    pub source_len: usize,
    /// Byte offset of the first divergence, when not matched. Equal to the
    /// shorter length when one sequence is a prefix of the other.
    pub first_mismatch: Option<usize>,
}

impl VerifyReport {
    /// Turn a failed report into the corresponding error.
    pub fn into_result(self) -> Result<()> {
        match self.first_mismatch {
            None => Ok(()),
            Some(offset) => Err(QuinegenError::RoundTripMismatch { offset }),
        }
    }
}

/// Re-expand `skeleton` and compare against `source`.
pub fn verify(skeleton: &[u8], source: &[u8], expander: &Expander) -> VerifyReport {
    let expanded = expander.expand(skeleton);
    let first_mismatch = first_mismatch(&expanded, source);
    debug!(
        expanded_len = expanded.len(),
        source_len = source.len(),
        matched = first_mismatch.is_none(),
        "round-trip comparison"
    );
    VerifyReport {
        matched: first_mismatch.is_none(),
        expanded_len: expanded.len(),
        source_len: source.len(),
        first_mismatch,
    }
}

/// Offset of the first byte where `a` and `b` differ, or `None` when equal.
/// When one is a strict prefix of the other, the offset is the shorter length.
pub fn first_mismatch(a: &[u8], b: &[u8]) -> Option<usize> {
    if let Some(i) = a.iter().zip(b.iter()).position(|(x, y)| x != y) {
        return Some(i);
    }
    if a.len() != b.len() {
        return Some(a.len().min(b.len()));
    }
    None
}

/// Recover the template embedded in a generated `source`.
///
/// The source must contain the escaped template between a pair of quotes,
/// exactly where the placeholder region used to be. Rather than parse the
/// target language, this locates the longest double-quoted span whose body
/// unescapes cleanly and whose unescaped form re-expands to `source` — for
/// sources produced by [`crate::fixpoint::solve`] that span is the embedded
/// template literal.
pub fn recover_template(source: &[u8], expander: &Expander) -> Result<Vec<u8>> {
    // Candidate literal: for a solved source the embedded body is the
    // escaped template, so its length and content are fully determined by
    // the source itself. Try every quote pair, longest first.
    let quote_positions: Vec<usize> = source
        .iter()
        .enumerate()
        .filter(|(_, &b)| b == b'"')
        .map(|(i, _)| i)
        .collect();

    for &open in &quote_positions {
        for &close in quote_positions.iter().rev() {
            if close <= open {
                break;
            }
            let body = &source[open + 1..close];
            let Ok(template) = unescape(body) else {
                continue;
            };
            if expander.expand(&template) == source {
                debug!(open, close, "embedded template located");
                return Ok(template);
            }
        }
    }
    Err(QuinegenError::LiteralNotFound)
}

/// Check the self-consistency invariant from the artifact side: the body of
/// the embedded literal must be exactly `escape(template)`.
pub fn literal_matches_template(source: &[u8], template: &[u8]) -> bool {
    let escaped = escape(template);
    let mut literal = Vec::with_capacity(escaped.len() + 2);
    literal.push(b'"');
    literal.extend_from_slice(&escaped);
    literal.push(b'"');
    source.windows(literal.len()).any(|w| w == literal.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixpoint::solve;

    const SKELETON: &[u8] = b"head('@'+'Q')\nt = @Q@@S@@Q@\ntail(t)\n";

    #[test]
    fn test_verify_matching_pair() {
        let expander = Expander::default();
        let solution = solve(SKELETON, &expander).unwrap();
        let report = verify(&solution.template, &solution.source, &expander);
        assert!(report.matched);
        assert!(report.first_mismatch.is_none());
        assert_eq!(report.expanded_len, report.source_len);
        assert!(report.into_result().is_ok());
    }

    #[test]
    fn test_verify_detects_edited_source() {
        let expander = Expander::default();
        let solution = solve(SKELETON, &expander).unwrap();
        let mut edited = solution.source.clone();
        edited[0] = b'H';
        let report = verify(&solution.template, &edited, &expander);
        assert!(!report.matched);
        assert_eq!(report.first_mismatch, Some(0));
        assert!(matches!(
            report.into_result(),
            Err(QuinegenError::RoundTripMismatch { offset: 0 })
        ));
    }

    #[test]
    fn test_verify_detects_truncation() {
        let expander = Expander::default();
        let solution = solve(SKELETON, &expander).unwrap();
        let truncated = &solution.source[..solution.source.len() - 1];
        let report = verify(&solution.template, truncated, &expander);
        assert!(!report.matched);
        assert_eq!(report.first_mismatch, Some(truncated.len()));
    }

    #[test]
    fn test_first_mismatch() {
        assert_eq!(first_mismatch(b"abc", b"abc"), None);
        assert_eq!(first_mismatch(b"abc", b"abd"), Some(2));
        assert_eq!(first_mismatch(b"abc", b"ab"), Some(2));
        assert_eq!(first_mismatch(b"", b""), None);
        assert_eq!(first_mismatch(b"", b"x"), Some(0));
    }

    #[test]
    fn test_recover_template_roundtrip() {
        let expander = Expander::default();
        let solution = solve(SKELETON, &expander).unwrap();
        let recovered = recover_template(&solution.source, &expander).unwrap();
        assert_eq!(recovered, solution.template);
    }

    #[test]
    fn test_recover_template_absent() {
        let err = recover_template(b"no literal here\n", &Expander::default()).unwrap_err();
        assert!(matches!(err, QuinegenError::LiteralNotFound));
    }

    #[test]
    fn test_literal_matches_template() {
        let expander = Expander::default();
        let solution = solve(SKELETON, &expander).unwrap();
        assert!(literal_matches_template(&solution.source, &solution.template));
        assert!(!literal_matches_template(b"unrelated", &solution.template));
    }
}
