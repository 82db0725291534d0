// Our custom logging macro for debug output.
use crate::log_debug;
// For working with file paths.
use std::path::PathBuf;

/// Resolves a user-supplied path such as `~/bin` or `$HOME/tools` into a concrete `PathBuf`.
/// `~` is expanded to the user's home directory and `$VAR`/`${VAR}` to environment values.
///
/// # Arguments
/// * `path`: The raw path string, typically from `--dir`.
///
/// # Returns
/// * `PathBuf`: The expanded path. If a referenced environment variable is undefined,
///   only the tilde is expanded and the rest is kept as written.
pub fn expand_path(path: &str) -> PathBuf {
    // `shellexpand::full` handles both `~` and environment variables, using `dirs` for the home directory.
    match shellexpand::full(path) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(e) => {
            log_debug!("[Paths] Could not expand variables in {}: {}", path, e);
            PathBuf::from(shellexpand::tilde(path).into_owned())
        }
    }
}
