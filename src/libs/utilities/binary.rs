// Ownership and permission fixes applied to the freshly extracted binary.

use crate::{log_debug, log_warn};
use colored::Colorize;
use std::fs;
use std::io;
// Unix-only: mode bits for `chmod 0755`.
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

/// Final mode of the installed binary: rwx for the owner, r-x for group and others.
pub const INSTALL_MODE: u32 = 0o755;

/// Hands the file to the current process's user and group, like `chown $(id -u):$(id -g)`.
///
/// Best-effort: a failure (typically `EPERM` when the file belongs to someone else)
/// is logged as a warning and reported as `false`. Installation continues either way.
#[cfg(unix)]
pub fn set_ownership(path: &Path) -> bool {
    use nix::unistd::{Gid, Uid, chown, getgid, getuid};

    let (uid, gid): (Uid, Gid) = (getuid(), getgid());
    match chown(path, Some(uid), Some(gid)) {
        Ok(()) => {
            log_debug!("[Binary] Ownership of {:?} set to {}:{}", path, uid, gid);
            true
        }
        Err(errno) => {
            log_warn!(
                "⚠  Could not change ownership of {}: {}",
                path.display().to_string().yellow(),
                errno
            );
            false
        }
    }
}

#[cfg(not(unix))]
pub fn set_ownership(_path: &Path) -> bool {
    log_debug!("[Binary] Ownership changes are a no-op on this platform.");
    true
}

/// Sets the binary's mode to `0755`.
///
/// # Returns
/// * `io::Result<()>`: Errors if the metadata cannot be read or the permissions cannot be applied.
#[cfg(unix)]
pub fn make_executable(path: &Path) -> io::Result<()> {
    log_debug!("[Binary] Making {:?} executable", path.to_string_lossy().yellow());

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(INSTALL_MODE);
    fs::set_permissions(path, perms)?;

    log_debug!("[Binary] File {:?} is now mode {:o}.", path.to_string_lossy().green(), INSTALL_MODE);
    Ok(())
}

// On non-Unix systems executability is not controlled by mode bits.
#[cfg(not(unix))]
pub fn make_executable(path: &Path) -> io::Result<()> {
    fs::metadata(path).map(|_| ())
}
