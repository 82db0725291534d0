// Post-install check. Unlike the advisory probe in `install_checker`,
// a failure here is fatal: the install is not reported as successful.

use crate::libs::install_checker::run_version_command;
use crate::schemas::errors::GetGovcError;
use std::path::Path;

/// Runs `<path> version` and returns its trimmed combined output.
///
/// # Returns
/// * `Ok(output)` when the binary runs and exits successfully.
/// * `Err(GetGovcError::Verification)` if it cannot be spawned or exits non-zero.
pub fn verify_install(path: &Path) -> Result<String, GetGovcError> {
    let (status, output) = run_version_command(path).map_err(|e| GetGovcError::Verification {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    if !status.success() {
        let reason = if output.is_empty() {
            status.to_string()
        } else {
            format!("{status}: {output}")
        };
        return Err(GetGovcError::Verification {
            path: path.to_path_buf(),
            reason,
        });
    }

    Ok(output)
}
