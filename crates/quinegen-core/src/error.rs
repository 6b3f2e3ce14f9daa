//! Unified error types for the quinegen toolkit.

use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur during quinegen operations.
#[derive(Error, Debug)]
pub enum QuinegenError {
    // --- Sentinels ---

    /// A sentinel token must be exactly 3 bytes long.
    #[error("sentinel must be exactly 3 bytes, got {len}: {token:?}")]
    SentinelLength { token: String, len: usize },

    /// The quote-sentinel and string-sentinel must be distinct tokens.
    #[error("quote-sentinel and string-sentinel are both {0:?}")]
    SentinelsEqual(String),

    /// The skeleton contains no recognizable string-sentinel, so expanding
    /// it would embed nothing and the output could not reproduce itself.
    #[error("skeleton contains no occurrence of string-sentinel {0:?}")]
    MissingStringSentinel(String),

    // --- Unescaping ---

    /// A raw double-quote inside a literal body would terminate the literal.
    #[error("unescaped double-quote at byte {offset}")]
    UnescapedQuote { offset: usize },

    /// A backslash followed by a byte that is not a recognized escape.
    #[error("unknown escape \\{escape} at byte {offset}")]
    UnknownEscape { offset: usize, escape: char },

    /// A `\x` escape with a non-hexadecimal digit.
    #[error("invalid hex digit in \\x escape at byte {offset}")]
    InvalidHexDigit { offset: usize },

    /// The literal body ends in the middle of an escape sequence.
    #[error("truncated escape sequence at byte {offset}")]
    TruncatedEscape { offset: usize },

    // --- Verification ---

    /// Expanding the skeleton did not reproduce the claimed source.
    #[error("round-trip mismatch: expansion diverges from source at byte {offset}")]
    RoundTripMismatch { offset: usize },

    /// A generated source does not contain the expected embedded literal.
    #[error("no embedded template literal found in source")]
    LiteralNotFound,

    // --- Files ---

    /// An input file (skeleton, template, or source) could not be read.
    #[error("failed to read {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // --- General ---

    /// A filesystem I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A catch-all for errors from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Alias for `Result<T, QuinegenError>`.
pub type Result<T> = std::result::Result<T, QuinegenError>;
