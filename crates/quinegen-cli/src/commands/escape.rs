use std::io::{Read, Write};
use std::path::Path;

use anyhow::Result;

use quinegen_core::escape::escape;

/// Escape a file (or stdin when no path is given) and write the literal
/// body to stdout. The output is exactly what belongs between a pair of
/// double-quote characters; no quotes or trailing newline are added.
pub fn run(input: Option<&Path>) -> Result<()> {
    let bytes = match input {
        Some(path) => super::read_input(path)?,
        None => {
            let mut buf = Vec::new();
            std::io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(&escape(&bytes))?;
    stdout.flush()?;
    Ok(())
}
