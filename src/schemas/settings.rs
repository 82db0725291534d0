// Run configuration for a single `get-govc` invocation.
// Every path and name the pipeline touches lives here instead of in module constants,
// so tests can point the installer at scratch directories and fake feeds.

use crate::libs::utilities::path_helpers::expand_path;
use std::path::PathBuf;

/// GitHub API endpoint listing the govmomi releases.
pub const DEFAULT_RELEASES_URL: &str = "https://api.github.com/repos/vmware/govmomi/releases";
/// The one platform archive we install.
pub const DEFAULT_ASSET_NAME: &str = "govc_Linux_x86_64.tar.gz";
/// Name of the binary inside the archive.
pub const UPSTREAM_BINARY: &str = "govc";
/// Default installed filename.
pub const DEFAULT_BIN_NAME: &str = "govc";
/// Default install directory, tilde-expanded at startup.
pub const DEFAULT_INSTALL_DIR: &str = "~/bin";

/// Resolved settings passed to each pipeline stage.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Releases feed URL.
    pub releases_url: String,
    /// Exact asset filename to pick from each release.
    pub asset_name: String,
    /// Base name of the binary entry inside the archive.
    pub upstream_binary: String,
    /// Final filename under `install_dir`.
    pub bin_name: String,
    /// Directory the binary is installed into. Created if missing.
    pub install_dir: PathBuf,
    /// Directory for the temporary download.
    pub temp_dir: PathBuf,
    /// Suppress everything but errors and warnings, including the progress bar.
    pub quiet: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            releases_url: DEFAULT_RELEASES_URL.to_string(),
            asset_name: DEFAULT_ASSET_NAME.to_string(),
            upstream_binary: UPSTREAM_BINARY.to_string(),
            bin_name: DEFAULT_BIN_NAME.to_string(),
            install_dir: expand_path(DEFAULT_INSTALL_DIR),
            temp_dir: std::env::temp_dir(),
            quiet: false,
        }
    }
}

impl Settings {
    /// Full path of the installed binary: `<install_dir>/<bin_name>`.
    pub fn install_path(&self) -> PathBuf {
        self.install_dir.join(&self.bin_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_install_path_joins_dir_and_name() {
        let settings = Settings {
            bin_name: "govc-custom".to_string(),
            install_dir: PathBuf::from("/opt/tools"),
            ..Settings::default()
        };
        assert_eq!(settings.install_path(), PathBuf::from("/opt/tools/govc-custom"));
    }

    #[test]
    fn test_default_install_dir_is_expanded() {
        let settings = Settings::default();
        assert!(!settings.install_dir.to_string_lossy().starts_with('~'));
        assert!(settings.install_dir.ends_with("bin"));
    }
}
