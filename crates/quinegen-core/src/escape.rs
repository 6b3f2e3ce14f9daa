//! Byte escaping for double-quoted string literals.
//!
//! [`escape`] renders arbitrary bytes as a literal body: placed verbatim
//! between a pair of `"` characters and re-parsed, the body yields exactly
//! the original bytes. The escape grammar (`\\`, `\"`, `\n`, `\t`, `\r`,
//! `\xNN` for remaining control bytes) is shared by the string-literal
//! syntax of every target language the toolkit generates quines for, which
//! is what lets one escaper serve C++, Rust, and Python skeletons alike.
//!
//! Both directions are total over their domains except where noted:
//! escaping never fails for any byte 0x00–0xFF; [`unescape`] rejects
//! malformed bodies (bare quotes, unknown or truncated escapes) with the
//! byte offset of the problem.

use crate::error::{QuinegenError, Result};

const HEX: &[u8; 16] = b"0123456789ABCDEF";

/// Escape `input` into a fresh buffer sized for the common case.
///
/// The 2x reservation is an amortization hint, not a bound: inputs dominated
/// by control bytes expand up to 4x and simply grow the buffer.
pub fn escape(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() * 2);
    escape_into(input, &mut out);
    out
}

/// Escape `input`, appending to `out`.
///
/// Per-byte mapping, first match wins: backslash, double-quote, newline,
/// tab, and carriage return get two-byte escapes; any other byte below
/// 0x20 gets `\xNN` with uppercase hex, most-significant nibble first;
/// everything else passes through unchanged.
pub fn escape_into(input: &[u8], out: &mut Vec<u8>) {
    for &b in input {
        match b {
            b'\\' => out.extend_from_slice(b"\\\\"),
            b'"' => out.extend_from_slice(b"\\\""),
            b'\n' => out.extend_from_slice(b"\\n"),
            b'\t' => out.extend_from_slice(b"\\t"),
            b'\r' => out.extend_from_slice(b"\\r"),
            b if b < 0x20 => {
                out.extend_from_slice(b"\\x");
                out.push(HEX[(b >> 4) as usize]);
                out.push(HEX[(b & 0x0F) as usize]);
            }
            b => out.push(b),
        }
    }
}

/// Re-parse a literal body produced by [`escape`], recovering the original
/// bytes.
///
/// Accepts both hex digit cases in `\xNN` (escaping always emits uppercase,
/// but hand-edited skeletons show up lowercase often enough to be worth
/// tolerating). Rejects a raw `"` (it would have terminated the literal),
/// any escape outside the grammar, and a body ending mid-escape.
pub fn unescape(body: &[u8]) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(body.len());
    let mut i = 0;
    while i < body.len() {
        match body[i] {
            b'"' => return Err(QuinegenError::UnescapedQuote { offset: i }),
            b'\\' => {
                let Some(&esc) = body.get(i + 1) else {
                    return Err(QuinegenError::TruncatedEscape { offset: i });
                };
                match esc {
                    b'\\' => out.push(b'\\'),
                    b'"' => out.push(b'"'),
                    b'n' => out.push(b'\n'),
                    b't' => out.push(b'\t'),
                    b'r' => out.push(b'\r'),
                    b'x' => {
                        if body.len() < i + 4 {
                            return Err(QuinegenError::TruncatedEscape { offset: i });
                        }
                        let hi = hex_value(body[i + 2])
                            .ok_or(QuinegenError::InvalidHexDigit { offset: i + 2 })?;
                        let lo = hex_value(body[i + 3])
                            .ok_or(QuinegenError::InvalidHexDigit { offset: i + 3 })?;
                        out.push((hi << 4) | lo);
                        i += 4;
                        continue;
                    }
                    other => {
                        return Err(QuinegenError::UnknownEscape {
                            offset: i,
                            escape: other as char,
                        })
                    }
                }
                i += 2;
            }
            b => {
                out.push(b);
                i += 1;
            }
        }
    }
    Ok(out)
}

fn hex_value(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'A'..=b'F' => Some(b - b'A' + 10),
        b'a'..=b'f' => Some(b - b'a' + 10),
        _ => None,
    }
}
