// `--print`: list every version that ships the platform archive, oldest first.

use crate::libs::download_client::DownloadClient;
use crate::libs::release_lister::list_releases;
use crate::libs::version_selector::sorted_versions;
use crate::schemas::errors::GetGovcError;
use crate::schemas::settings::Settings;

/// Fetches the feed and returns the available versions in ascending order.
pub fn available_versions(
    client: &impl DownloadClient,
    settings: &Settings,
) -> Result<Vec<String>, GetGovcError> {
    let releases = list_releases(client, settings)?;
    Ok(sorted_versions(&releases)
        .into_iter()
        .map(str::to_string)
        .collect())
}

/// Prints one version per line on stdout.
pub fn run(client: &impl DownloadClient, settings: &Settings) -> Result<(), GetGovcError> {
    for version in available_versions(client, settings)? {
        println!("{version}");
    }
    Ok(())
}
