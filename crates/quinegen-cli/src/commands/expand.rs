use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::Result;

use quinegen_core::Expander;

/// Expand a template file and stream the result to stdout.
///
/// This is the raw emission pass: one left-to-right walk, quote-sentinels
/// become `"`, string-sentinels become the escaped template, everything
/// else passes through. Output is written in strictly increasing offset
/// order; a write failure is fatal (there is nothing to recover for a
/// one-shot emission, so the process exits nonzero).
pub fn run(template_path: &Path, expander: &Expander) -> Result<()> {
    let template = super::read_input(template_path)?;
    tracing::debug!(template_len = template.len(), "expanding to stdout");

    let stdout = std::io::stdout().lock();
    let mut out = BufWriter::new(stdout);
    expander.expand_to(&template, &mut out)?;
    out.flush()?;
    Ok(())
}
