// Builds the version -> download URL map from the releases feed.
//
// Only assets whose name is exactly the configured platform archive are kept.
// The version comes from the asset URL, not the release metadata:
// `.../releases/download/<version>/<asset>`.

use crate::libs::download_client::DownloadClient;
use crate::schemas::common::{Release, ReleaseMap};
use crate::schemas::errors::GetGovcError;
use crate::schemas::settings::Settings;
use crate::{log_debug, log_info};
use colored::Colorize;

/// Extracts the path segment after `/download/` in an asset URL.
///
/// # Returns
/// * `Some(version)` for URLs like `https://github.com/o/r/releases/download/v1.0.0/file.tar.gz`.
/// * `None` when the URL has no `/download/` segment or the segment is empty.
pub fn version_from_url(url: &str) -> Option<&str> {
    let (_, tail) = url.split_once("/download/")?;
    let version = tail.split('/').next()?;
    (!version.is_empty()).then_some(version)
}

/// Collects every asset named `asset_name` across all releases into a map.
/// Later duplicates of the same version replace earlier ones.
pub fn collect_assets(releases: &[Release], asset_name: &str) -> ReleaseMap {
    let mut asset_map = ReleaseMap::new();

    for release in releases {
        for asset in release.assets.iter().filter(|a| a.name == asset_name) {
            match version_from_url(&asset.browser_download_url) {
                Some(version) => {
                    if asset_map
                        .insert(version.to_string(), asset.browser_download_url.clone())
                        .is_some()
                    {
                        log_debug!("[Releases] Duplicate version {} in feed; keeping the later entry", version);
                    }
                }
                None => log_debug!(
                    "[Releases] Skipping asset of release {:?}: no version in URL {}",
                    release.tag_name,
                    asset.browser_download_url
                ),
            }
        }
    }

    asset_map
}

/// Fetches the feed and returns the release map for `settings.asset_name`.
///
/// # Returns
/// * `Ok(ReleaseMap)` with at least one entry.
/// * `Err(GetGovcError::Feed)` if the feed cannot be fetched or decoded.
/// * `Err(GetGovcError::NoReleases)` if no release carries the platform asset.
pub fn list_releases(
    client: &impl DownloadClient,
    settings: &Settings,
) -> Result<ReleaseMap, GetGovcError> {
    log_info!("Fetching govc releases info...");
    let releases = client.fetch_releases(&settings.releases_url)?;

    let asset_map = collect_assets(&releases, &settings.asset_name);
    if asset_map.is_empty() {
        return Err(GetGovcError::NoReleases);
    }

    log_debug!(
        "[Releases] Found {} versions providing {}",
        asset_map.len(),
        settings.asset_name.cyan()
    );
    Ok(asset_map)
}
