//! Run configuration shared by the interpreter and the tool invoker.

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::RootArgs;

/// Explicit configuration for one interpreter run.
///
/// Everything the run needs is carried here rather than in process-wide
/// constants, so tests can construct arbitrary configurations.
#[derive(Debug, Clone)]
pub(crate) struct RunConfig {
    /// Simulator executable name or path, resolved via PATH at startup.
    pub(crate) tool: String,
    /// Directive source file.
    pub(crate) input_file: PathBuf,
    /// Output file receiving `name=address` lines.
    pub(crate) env_file: PathBuf,
    /// Upper bound on each directive's subprocess; expiry counts as failure.
    pub(crate) timeout: Duration,
}

impl RunConfig {
    pub(crate) fn from_args(args: &RootArgs) -> Self {
        RunConfig {
            tool: args.tool.clone(),
            input_file: args.input_file.clone(),
            env_file: args.env_file.clone(),
            timeout: Duration::from_secs(args.timeout_secs),
        }
    }
}
