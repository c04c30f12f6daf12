//! CLI argument parsing for the directive runner.
//!
//! The CLI is intentionally thin: it collects paths and knobs into a
//! `RunConfig` and leaves all sequencing policy to the interpreter.
use clap::Parser;
use std::path::PathBuf;

/// Root CLI entrypoint for the directive runner.
#[derive(Parser, Debug)]
#[command(
    name = "revup",
    version,
    about = "Directive-driven automation for the resim ledger simulator",
    after_help = "Examples:\n  revup --generate                 Write a starter revup.rev\n  revup                            Run revup.rev, write bindings to .env\n  revup -f deploy.rev -e out.env   Run a custom directive file\n  revup --tool resim --timeout-secs 60 -v"
)]
pub struct RootArgs {
    /// Input file containing revup directives to execute
    #[arg(short = 'f', long, value_name = "PATH", default_value = "revup.rev")]
    pub input_file: PathBuf,

    /// Env file receiving the final name=address bindings
    #[arg(short = 'e', long, value_name = "PATH", default_value = ".env")]
    pub env_file: PathBuf,

    /// Generate a starter directive file at the input path and exit
    #[arg(long)]
    pub generate: bool,

    /// Simulator executable invoked for each directive
    #[arg(long, value_name = "NAME", default_value = "resim")]
    pub tool: String,

    /// Per-directive subprocess timeout in seconds
    #[arg(long, value_name = "SECS", default_value_t = 300)]
    pub timeout_secs: u64,

    /// Emit debug-level logs
    #[arg(short, long)]
    pub verbose: bool,
}
