//! The offline fixed-point step that turns a skeleton into a finished quine.
//!
//! A *skeleton* is a program source with the placeholder region
//! `@Q@@S@@Q@` standing where its template literal goes. Under this scheme
//! the skeleton already *is* the template: one expansion pass substitutes
//! the opening quote, the escaped skeleton, and the closing quote, and the
//! result is the finished source. No iteration is needed — substituting the
//! skeleton into itself is the fixed point by construction, because the only
//! difference between skeleton and source is the placeholder region, and the
//! expander fills that region with exactly the text that reproduces it.
//!
//! What *can* go wrong is template shape: a skeleton with no recognizable
//! string-sentinel embeds nothing (the output is a plain program, not a
//! quine), and unusual sentinel counts usually mean the token bytes leaked
//! into ordinary text. The first is an error here; the rest is surfaced as
//! warnings, since multi-sentinel templates are legal (each string-sentinel
//! gets its own full escaped copy).

use tracing::{debug, warn};

use crate::error::{QuinegenError, Result};
use crate::expand::Expander;

/// The outcome of a solve: the template (the skeleton, unchanged) and the
/// finished source it expands to.
#[derive(Debug, Clone)]
pub struct Solution {
    /// The template text. Identical to the input skeleton; kept so the pair
    /// can be verified or re-expanded without re-reading the input.
    pub template: Vec<u8>,
    /// The expanded, self-reproducing source.
    pub source: Vec<u8>,
}

/// Run the fixed-point pass on `skeleton`.
///
/// Fails if the skeleton contains no recognizable string-sentinel. Warns
/// (but proceeds) when the sentinel counts differ from the canonical
/// placeholder shape of one string-sentinel between two quote-sentinels.
pub fn solve(skeleton: &[u8], expander: &Expander) -> Result<Solution> {
    let quote = expander.quote_sentinel();
    let string = expander.string_sentinel();

    let string_count = string.count_in(skeleton);
    if string_count == 0 {
        return Err(QuinegenError::MissingStringSentinel(string.to_string()));
    }

    let quote_count = quote.count_in(skeleton);
    if string_count != 1 || quote_count != 2 {
        warn!(
            quote = %quote,
            string = %string,
            quote_count,
            string_count,
            "unusual sentinel counts; expected one {string} between two {quote}"
        );
    }

    let source = expander.expand(skeleton);
    debug!(
        skeleton_len = skeleton.len(),
        source_len = source.len(),
        "fixed-point pass complete"
    );

    Ok(Solution {
        template: skeleton.to_vec(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // A minimal well-formed skeleton: matcher text avoids spelling the
    // tokens contiguously, placeholder sits mid-text.
    const SKELETON: &[u8] = b"emit('@'+'Q'+'@' -> quote)\nt = @Q@@S@@Q@\nrender(t)\n";

    #[test]
    fn test_solve_produces_expansion() {
        let expander = Expander::default();
        let solution = solve(SKELETON, &expander).unwrap();
        assert_eq!(solution.template, SKELETON);
        assert_eq!(solution.source, expander.expand(SKELETON));
    }

    #[test]
    fn test_solution_is_fixed_point() {
        // Re-expanding the template reproduces the source byte for byte.
        let expander = Expander::default();
        let solution = solve(SKELETON, &expander).unwrap();
        assert_eq!(expander.expand(&solution.template), solution.source);
    }

    #[test]
    fn test_source_embeds_escaped_template() {
        let expander = Expander::default();
        let solution = solve(SKELETON, &expander).unwrap();
        let escaped = crate::escape::escape(SKELETON);
        let mut literal = Vec::with_capacity(escaped.len() + 2);
        literal.push(b'"');
        literal.extend_from_slice(&escaped);
        literal.push(b'"');
        assert!(solution
            .source
            .windows(literal.len())
            .any(|w| w == literal.as_slice()));
    }

    #[test]
    fn test_solve_without_string_sentinel_fails() {
        let err = solve(b"no tokens here at all\n", &Expander::default()).unwrap_err();
        assert!(matches!(err, QuinegenError::MissingStringSentinel(_)));
    }

    #[test]
    fn test_solve_quote_only_skeleton_fails() {
        let err = solve(b"just a @Q@ here\n", &Expander::default()).unwrap_err();
        assert!(matches!(err, QuinegenError::MissingStringSentinel(_)));
    }

    #[test]
    fn test_solve_multi_string_sentinel_allowed() {
        // Legal, just unusual: two string-sentinels embed two copies.
        let skeleton = b"a @S@ b @S@ c\n";
        let solution = solve(skeleton, &Expander::default()).unwrap();
        assert_eq!(solution.source, Expander::default().expand(skeleton));
    }
}
