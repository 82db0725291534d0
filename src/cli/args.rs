use crate::libs::utilities::path_helpers::expand_path;
use crate::libs::version_selector::LATEST;
use crate::schemas::settings::{
    DEFAULT_ASSET_NAME, DEFAULT_BIN_NAME, DEFAULT_INSTALL_DIR, DEFAULT_RELEASES_URL, Settings,
    UPSTREAM_BINARY,
};
use clap::Parser;

/// Defines the command-line interface for `get-govc`.
/// `#[derive(Parser)]` generates the argument parsing code via `clap`.
#[derive(Parser, Debug)]
#[command(name = "get-govc")]
#[command(about = "Download the govc binary from GitHub", long_about = None)]
pub struct Cli {
    /// Specify version to download (default: latest)
    #[arg(short = 'v', long = "ver", default_value = LATEST)]
    pub ver: String,

    /// Rename binary
    #[arg(short = 'n', long = "name", default_value = DEFAULT_BIN_NAME)]
    pub name: String,

    /// Directory to extract binary
    #[arg(short = 'd', long = "dir", env = "GET_GOVC_DIR", default_value = DEFAULT_INSTALL_DIR)]
    pub dir: String,

    /// Print available versions and exit
    #[arg(short = 'p', long = "print")]
    pub print: bool,

    /// Suppress output except for errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,

    /// Enables detailed debug output for troubleshooting.
    #[arg(long)]
    pub debug: bool,

    /// Releases feed to query instead of the govmomi GitHub API.
    #[arg(long, env = "GET_GOVC_RELEASES_URL", default_value = DEFAULT_RELEASES_URL, hide = true)]
    pub releases_url: String,
}

impl Cli {
    /// Resolves the parsed flags into the `Settings` handed to each pipeline stage.
    pub fn settings(&self) -> Settings {
        Settings {
            releases_url: self.releases_url.clone(),
            asset_name: DEFAULT_ASSET_NAME.to_string(),
            upstream_binary: UPSTREAM_BINARY.to_string(),
            bin_name: self.name.clone(),
            install_dir: expand_path(&self.dir),
            temp_dir: std::env::temp_dir(),
            quiet: self.quiet,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use std::path::PathBuf;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from(["get-govc"])?;
        assert_eq!(cli.ver, "latest");
        assert_eq!(cli.name, "govc");
        assert!(!cli.print);
        assert!(!cli.quiet);

        let settings = cli.settings();
        assert_eq!(settings.asset_name, "govc_Linux_x86_64.tar.gz");
        assert_eq!(settings.upstream_binary, "govc");
        assert!(!settings.install_dir.to_string_lossy().starts_with('~'));
        Ok(())
    }

    #[test]
    fn test_short_flags() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from([
            "get-govc", "-v", "v0.36.0", "-n", "govc36", "-d", "/opt/bin", "-p", "-q",
        ])?;
        assert_eq!(cli.ver, "v0.36.0");
        assert!(cli.print);
        assert!(cli.quiet);

        let settings = cli.settings();
        assert_eq!(settings.install_path(), PathBuf::from("/opt/bin/govc36"));
        assert!(settings.quiet);
        Ok(())
    }

    #[test]
    fn test_long_flags() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from([
            "get-govc", "--ver", "0.37.0", "--name", "g", "--dir", "/tmp/x", "--print", "--quiet", "--debug",
        ])?;
        assert_eq!(cli.ver, "0.37.0");
        assert_eq!(cli.name, "g");
        assert_eq!(cli.dir, "/tmp/x");
        assert!(cli.debug);
        Ok(())
    }
}
