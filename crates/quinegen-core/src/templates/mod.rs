//! Shipped quine skeletons.
//!
//! Skeletons are embedded into the binary at compile-time via [`include_str!`]
//! in the [`embedded`] module. Each is a complete single-file program in its
//! target syntax with the placeholder region `@Q@@S@@Q@` standing where its
//! template literal goes; one [`crate::fixpoint::solve`] pass turns it into a
//! finished, self-reproducing source.
//!
//! ## Authoring rules
//!
//! All three target languages share the escape grammar of [`crate::escape`],
//! so the same pass serves all of them. A skeleton must:
//!
//! 1. stay pure ASCII (the escaper is byte-oriented, and `\xNN` above 0x7F
//!    is not portable literal syntax across the targets);
//! 2. never spell a sentinel token contiguously outside the placeholder —
//!    the in-skeleton matchers compare the 3 bytes individually;
//! 3. keep the placeholder away from the final 2 bytes of the file.
//!
//! **Warning**: skeleton files in `templates/quines/` and constants in
//! [`embedded`] must stay in sync. The `include_str!` paths are relative to
//! this file and checked at compile-time.

pub mod embedded;
