// Advisory check for an already installed govc.
//
// The installed binary is asked for its version (`govc version` prints `govc 0.37.0`).
// Any problem running it means "not installed"; nothing here aborts the program.

use crate::log_debug;
use crate::libs::version_selector::strip_v;
use crate::schemas::errors::ProbeError;
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Runs `<path> version` and returns its exit status and combined stdout + stderr.
pub fn run_version_command(path: &Path) -> std::io::Result<(ExitStatus, String)> {
    let output = Command::new(path).arg("version").output()?;
    let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
    combined.push_str(&String::from_utf8_lossy(&output.stderr));
    Ok((output.status, combined.trim().to_string()))
}

/// Executes the binary at `path` and returns the version it reports:
/// the last whitespace-separated token of its `version` output.
pub fn probe_version(path: &Path) -> Result<String, ProbeError> {
    if !path.exists() {
        return Err(ProbeError::Missing(path.to_path_buf()));
    }

    let (status, output) = run_version_command(path)?;
    if !status.success() {
        return Err(ProbeError::ExitStatus(status));
    }

    output
        .split_whitespace()
        .last()
        .map(str::to_string)
        .ok_or(ProbeError::EmptyOutput)
}

/// Returns `true` when the binary at `path` reports exactly `target` (leading `v` ignored).
///
/// # Arguments
/// * `path`: Where the binary would be installed.
/// * `target`: The selected release version, e.g. `v0.37.0`.
pub fn is_installed(path: &Path, target: &str) -> bool {
    match probe_version(path) {
        Ok(found) => {
            let current = found == strip_v(target);
            log_debug!(
                "[Check] {:?} reports {} (target {}): {}",
                path,
                found,
                target,
                if current { "up to date" } else { "needs install" }
            );
            current
        }
        Err(reason) => {
            log_debug!("[Check] Treating {:?} as not installed: {}", path, reason);
            false
        }
    }
}
