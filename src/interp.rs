//! Directive parsing and the sequential interpreter loop.
//!
//! Directives run strictly in source order; each one observes the bindings
//! accumulated by all earlier directives. That ordering is load-bearing:
//! later placeholders resolve only against earlier bindings.

use anyhow::{Context, Result};
use std::fs;

use crate::bindings::{self, BindingMap};
use crate::config::RunConfig;
use crate::invoke::ToolInvoker;

/// One executable line of the directive source.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct Directive {
    pub(crate) command: String,
    /// Names to bind, positionally, to the addresses the command returns.
    pub(crate) names: Vec<String>,
}

/// Parse one source line. Returns `None` for blank lines and comments
/// (`//` and `\\` prefixes). The command and the optional binding-names
/// spec are separated by the first `->`.
pub(crate) fn parse_directive(line: &str) -> Option<Directive> {
    if line.is_empty() || line.starts_with("//") || line.starts_with(r"\\") {
        return None;
    }
    let (command, names) = match line.split_once("->") {
        Some((left, right)) => (
            left.trim(),
            right.split_whitespace().map(str::to_string).collect(),
        ),
        None => (line.trim(), Vec::new()),
    };
    Some(Directive {
        command: command.to_string(),
        names,
    })
}

/// Drives the run: parse, invoke, bind, and finally persist.
pub(crate) struct Interpreter<'a> {
    config: &'a RunConfig,
    invoker: ToolInvoker,
}

impl<'a> Interpreter<'a> {
    pub(crate) fn new(config: &'a RunConfig) -> Result<Self> {
        Ok(Interpreter {
            config,
            invoker: ToolInvoker::new(config)?,
        })
    }

    /// Read the configured input file, execute it, and persist the final
    /// binding map to the configured env file.
    pub(crate) fn process_input(&self) -> Result<()> {
        let source = fs::read_to_string(&self.config.input_file)
            .with_context(|| format!("read '{}'", self.config.input_file.display()))?;
        let final_bindings = self.run(&source);
        bindings::write_env_file(&final_bindings, &self.config.env_file);
        Ok(())
    }

    /// Execute every directive in `source` and return the final bindings.
    /// Individual directive failures surface as empty address lists; the
    /// loop itself never aborts.
    pub(crate) fn run(&self, source: &str) -> BindingMap {
        let mut map = BindingMap::new();
        for line in source.lines() {
            let Some(directive) = parse_directive(line) else {
                continue;
            };
            tracing::debug!(?directive, "processing directive");
            let addresses = self.invoker.execute(&directive.command, &map);
            apply_bindings(&mut map, &directive.names, &addresses);
            tracing::debug!(?map, "bindings after directive");
        }
        map
    }
}

/// Zip declared names to returned addresses positionally. When more names
/// are declared than addresses returned, nothing is recorded for this
/// directive; a warning is the only signal.
fn apply_bindings(map: &mut BindingMap, names: &[String], addresses: &[String]) {
    if names.is_empty() {
        return;
    }
    if names.len() > addresses.len() {
        tracing::warn!(
            declared = names.len(),
            returned = addresses.len(),
            "more binding names than addresses, skipping bindings"
        );
        return;
    }
    for (name, address) in names.iter().zip(addresses) {
        map.insert(name.clone(), address.clone());
    }
}
