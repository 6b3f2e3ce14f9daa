//! Compile-time embedded quine skeletons.
//!
//! Each constant loads a skeleton file from `templates/quines/` via
//! [`include_str!`]. The paths are relative to this source file
//! (`crates/quinegen-core/src/templates/embedded.rs`); a wrong path fails
//! the build.

/// C++17, single translation unit, writes to `std::cout`.
pub const CPP_SKELETON: &str = include_str!("../../../../templates/quines/cpp.cpp.tmpl");

/// Rust, single file, compiles with plain `rustc`.
pub const RUST_SKELETON: &str = include_str!("../../../../templates/quines/rust.rs.tmpl");

/// Python 3, writes via `sys.stdout.write` to avoid a trailing newline.
pub const PYTHON_SKELETON: &str = include_str!("../../../../templates/quines/python.py.tmpl");
