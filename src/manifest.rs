//! Transaction-manifest templating.
//!
//! A manifest-run directive names a `.rtm` template whose `$name`
//! placeholders are resolved against the current bindings. The materialized
//! copy is written next to the template as `<name>.rtm.dat`; the template
//! itself is never modified.

use anyhow::{bail, Context, Result};
use regex::Regex;
use std::fs;

use crate::bindings::BindingMap;
use crate::subst;

/// Rewrites manifest templates using the current binding map.
pub(crate) struct ManifestProcessor {
    file_pattern: Regex,
}

impl ManifestProcessor {
    pub(crate) fn new() -> Result<Self> {
        // case-sensitive, matching the invoker's mode detection
        let file_pattern = Regex::new(r"([\w./-]+\.rtm)")
            .context("compile manifest filename pattern")?;
        Ok(ManifestProcessor { file_pattern })
    }

    /// Locate the manifest filename in `command`, substitute every bound
    /// name exhaustively, and write the result to `<filename>.dat`.
    /// Placeholders with no binding are left verbatim. An empty template
    /// produces no output file.
    pub(crate) fn materialize(&self, command: &str, bindings: &BindingMap) -> Result<()> {
        let Some(captures) = self.file_pattern.captures(command) else {
            bail!("no manifest filename in command");
        };
        let file_name = &captures[1];
        let content = fs::read_to_string(file_name)
            .with_context(|| format!("read manifest '{file_name}'"))?;
        if content.is_empty() {
            tracing::debug!(file_name, "manifest is empty, skipping");
            return Ok(());
        }
        let resolved = subst::substitute_all(&content, bindings);
        let out_name = format!("{file_name}.dat");
        fs::write(&out_name, resolved)
            .with_context(|| format!("write materialized manifest '{out_name}'"))?;
        tracing::info!(file_name, out_name = %out_name, "materialized manifest");
        Ok(())
    }
}
