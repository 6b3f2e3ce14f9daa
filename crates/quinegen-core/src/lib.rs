//! Core library for the quinegen toolkit.
//!
//! Implements the two halves of a sentinel-based quine and the offline
//! procedure that ties them together:
//!
//! - [`escape`] — renders arbitrary bytes as the body of a double-quoted
//!   string literal (and parses such a body back);
//! - [`expand`] — the single-pass template expander that substitutes the
//!   quote-sentinel with `"` and the string-sentinel with the escaped form
//!   of the entire template;
//! - [`fixpoint`] — turns a skeleton (source with a `@Q@@S@@Q@` placeholder)
//!   into a finished self-reproducing program in one expansion pass;
//! - [`verify`] — checks the round-trip invariant: expanding the template
//!   reproduces the finished source byte for byte;
//! - [`templates`] — compile-time embedded skeletons for C++, Rust, and
//!   Python, all sharing the same escape grammar.
//!
//! This crate is target-language-agnostic: nothing here parses C++, Rust,
//! or Python. The whole scheme works on bytes, which is exactly what makes
//! one expander serve three languages.

pub mod error;
pub mod escape;
pub mod expand;
pub mod fixpoint;
pub mod sentinel;
pub mod templates;
pub mod verify;

pub use error::{QuinegenError, Result};
pub use expand::Expander;
pub use sentinel::Sentinel;
