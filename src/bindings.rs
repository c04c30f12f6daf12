//! The binding map and its env-file serialization.

use std::collections::BTreeMap;
use std::fmt::Write as _;
use std::path::Path;

/// Name-to-address bindings accumulated over one run.
///
/// Keys are unique; re-binding a name overwrites its address. Iteration
/// order (and thus env-file order) is name-sorted and deterministic.
pub(crate) type BindingMap = BTreeMap<String, String>;

/// Persist the final binding map as one `name=address` line per entry,
/// truncating any prior content.
///
/// Write failures are logged, never raised: by the time the map is final
/// every directive has already run, and a missing env file should not turn
/// a completed run into a hard error.
pub(crate) fn write_env_file(bindings: &BindingMap, path: &Path) {
    let mut content = String::new();
    for (name, address) in bindings {
        // writeln! to a String cannot fail
        let _ = writeln!(content, "{name}={address}");
    }
    match std::fs::write(path, content) {
        Ok(()) => {
            tracing::info!(
                path = %path.display(),
                count = bindings.len(),
                "wrote binding env file"
            );
        }
        Err(err) => {
            tracing::error!(path = %path.display(), %err, "failed to write env file");
        }
    }
}
