use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod bindings;
mod cli;
mod config;
mod extract;
mod generate;
mod interp;
mod invoke;
mod manifest;
mod subst;

use config::RunConfig;

fn main() -> Result<()> {
    let args = cli::RootArgs::parse();
    init_tracing(args.verbose);

    let config = RunConfig::from_args(&args);
    if args.generate {
        return generate::write_bootstrap_file(&config.input_file);
    }

    preflight(&config)?;
    let interpreter = interp::Interpreter::new(&config)?;
    interpreter.process_input()
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Startup checks only; once directive processing begins, failures are
/// logged and the run continues.
fn preflight(config: &RunConfig) -> Result<()> {
    which::which(&config.tool)
        .with_context(|| format!("'{}' not found on PATH", config.tool))?;
    if !config.input_file.is_file() {
        bail!(
            "'{}' does not exist or is not readable",
            config.input_file.display()
        );
    }
    Ok(())
}
