pub mod escape;
pub mod expand;
pub mod new;
pub mod solve;
pub mod verify;

use std::path::Path;

use quinegen_core::QuinegenError;

/// Read an input file, attaching the path to any failure.
pub fn read_input(path: &Path) -> quinegen_core::Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| QuinegenError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}
