// Orchestrates the install run:
// list releases -> select version -> skip if current -> download -> extract -> fix permissions -> verify.

use crate::libs::download_client::DownloadClient;
use crate::libs::install_checker::is_installed;
use crate::libs::release_lister::list_releases;
use crate::libs::utilities::assets::download_file;
use crate::libs::utilities::binary::{INSTALL_MODE, make_executable, set_ownership};
use crate::libs::utilities::compression::extract_binary;
use crate::libs::verifier::verify_install;
use crate::libs::version_selector::{select_version, strip_v};
use crate::schemas::errors::GetGovcError;
use crate::schemas::settings::Settings;
use crate::{log_debug, log_info, log_warn};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// What a successful run did.
#[derive(Debug, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The binary at `path` already reports `version`; nothing was downloaded.
    AlreadyInstalled { version: String, path: PathBuf },
    /// `version` was installed at `path`; `report` is its `version` output.
    Installed {
        version: String,
        path: PathBuf,
        report: String,
    },
}

/// Runs the full pipeline for `requested` ("latest" or an explicit version).
pub fn run(
    client: &impl DownloadClient,
    settings: &Settings,
    requested: &str,
) -> Result<InstallOutcome, GetGovcError> {
    let releases = list_releases(client, settings)?;
    let (version, url) = select_version(&releases, requested)?;

    let final_path = settings.install_path();
    if is_installed(&final_path, version) {
        log_info!(
            "✅ govc version {} is already installed at {}",
            strip_v(version),
            final_path.display().to_string().green()
        );
        return Ok(InstallOutcome::AlreadyInstalled {
            version: version.to_string(),
            path: final_path,
        });
    }

    log_info!("Selected version: {}", version.bold());
    log_info!("Downloading: {}", url.cyan());

    fs::create_dir_all(&settings.install_dir)?;
    let download = tempfile::Builder::new()
        .prefix(&format!("govc-{version}-"))
        .suffix(".tar.gz")
        .tempfile_in(&settings.temp_dir)?;
    log_debug!("[Install] Temporary download file: {:?}", download.path());

    let installed_path = download_and_extract(client, settings, url, download)?;

    log_info!(
        "✅ govc extracted to {} with mode {:o}",
        installed_path.display().to_string().green(),
        INSTALL_MODE
    );

    let report = verify_install(&installed_path)?;
    if !settings.quiet {
        println!("{report}");
    }

    Ok(InstallOutcome::Installed {
        version: version.to_string(),
        path: installed_path,
        report,
    })
}

/// Download and install stage. Consumes the temporary file and always removes it before returning.
fn download_and_extract(
    client: &impl DownloadClient,
    settings: &Settings,
    url: &str,
    mut download: NamedTempFile,
) -> Result<PathBuf, GetGovcError> {
    let result = download_file(client, url, download.as_file_mut(), settings.quiet)
        .and_then(|_| install_archive(download.path(), settings));

    let temp_path = download.path().to_path_buf();
    if let Err(e) = download.close() {
        log_warn!("Could not remove temporary file {}: {}", temp_path.display(), e);
    }
    result
}

/// Extracts the binary from `archive` into the install directory and applies ownership and mode.
fn install_archive(archive: &Path, settings: &Settings) -> Result<PathBuf, GetGovcError> {
    let final_path = extract_binary(
        archive,
        &settings.install_dir,
        &settings.upstream_binary,
        &settings.bin_name,
    )?;

    // Ownership is best-effort; `set_ownership` already warned on failure.
    set_ownership(&final_path);
    make_executable(&final_path)?;
    Ok(final_path)
}
