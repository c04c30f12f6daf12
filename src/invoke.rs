//! Subprocess invocation of the simulator tool.
//!
//! Two execution modes: a manifest-run directive only materializes its
//! template and yields no addresses; everything else is handed to the tool
//! as a subprocess and its stdout scanned for addresses. Failures inside a
//! directive are logged and collapse to "no addresses" so the run can
//! continue.

use anyhow::{bail, Context, Result};
use regex::Regex;
use std::io::Read;
use std::process::{Command, Stdio};
use std::thread;
use std::time::Duration;
use wait_timeout::ChildExt;

use crate::bindings::BindingMap;
use crate::config::RunConfig;
use crate::extract::AddressExtractor;
use crate::manifest::ManifestProcessor;
use crate::subst;

/// Runs one directive at a time against the configured tool.
pub(crate) struct ToolInvoker {
    tool: String,
    timeout: Duration,
    manifest_run: Regex,
    extractor: AddressExtractor,
    manifests: ManifestProcessor,
}

impl ToolInvoker {
    pub(crate) fn new(config: &RunConfig) -> Result<Self> {
        let manifest_run =
            Regex::new(r"run .+\.rtm").context("compile manifest-run pattern")?;
        Ok(ToolInvoker {
            tool: config.tool.clone(),
            timeout: config.timeout,
            manifest_run,
            extractor: AddressExtractor::new()?,
            manifests: ManifestProcessor::new()?,
        })
    }

    /// Execute one directive command and return the addresses it produced.
    ///
    /// Never fails: invocation errors, non-zero exits, timeouts, and
    /// manifest problems are logged and reported as an empty address list.
    pub(crate) fn execute(&self, command: &str, bindings: &BindingMap) -> Vec<String> {
        if self.manifest_run.is_match(command) {
            tracing::debug!(command, "running manifest");
            if let Err(err) = self.manifests.materialize(command, bindings) {
                tracing::error!(command, %err, "failed to process manifest file");
            }
            return Vec::new();
        }
        match self.run_tool(command, bindings) {
            Ok(addresses) => {
                tracing::debug!(?addresses, "extracted addresses");
                addresses
            }
            Err(err) => {
                tracing::error!(tool = %self.tool, command, %err, "directive failed");
                Vec::new()
            }
        }
    }

    fn run_tool(&self, command: &str, bindings: &BindingMap) -> Result<Vec<String>> {
        let resolved = subst::substitute_first(command, bindings);
        let args = shell_words::split(&resolved)
            .with_context(|| format!("tokenize command: {resolved}"))?;

        tracing::info!(">>> {command}");
        let mut child = Command::new(&self.tool)
            .args(&args)
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .with_context(|| format!("spawn '{}'", self.tool))?;

        // Drain both pipes while waiting: a child that fills the OS pipe
        // buffer would otherwise block writing until we time it out.
        let stdout_reader = spawn_pipe_reader(child.stdout.take());
        let stderr_reader = spawn_pipe_reader(child.stderr.take());

        let status = match child.wait_timeout(self.timeout).context("wait for tool")? {
            Some(status) => status,
            None => {
                let _ = child.kill();
                let _ = child.wait();
                bail!("timed out after {}s", self.timeout.as_secs());
            }
        };

        let stdout = stdout_reader.join().unwrap_or_default();
        if !status.success() {
            let stderr = stderr_reader.join().unwrap_or_default();
            bail!("exit status {status}: {}", stderr.trim());
        }
        Ok(self.extractor.extract(stdout.lines()))
    }
}

fn spawn_pipe_reader<R: Read + Send + 'static>(pipe: Option<R>) -> thread::JoinHandle<String> {
    thread::spawn(move || {
        let mut buf = String::new();
        if let Some(mut pipe) = pipe {
            let _ = pipe.read_to_string(&mut buf);
        }
        buf
    })
}
