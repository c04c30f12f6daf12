//! Starter directive-file generation for `--generate`.

use anyhow::{bail, Context, Result};
use std::path::Path;

const BOOTSTRAP_TEMPLATE: &str = include_str!("../templates/bootstrap.rev");

/// Write the embedded starter directive file to `path`. Refuses to clobber
/// an existing file so a hand-edited directive set cannot be lost.
pub(crate) fn write_bootstrap_file(path: &Path) -> Result<()> {
    if path.exists() {
        bail!("refusing to overwrite existing '{}'", path.display());
    }
    std::fs::write(path, BOOTSTRAP_TEMPLATE)
        .with_context(|| format!("write bootstrap file '{}'", path.display()))?;
    tracing::info!(path = %path.display(), "generated bootstrap directive file");
    Ok(())
}
