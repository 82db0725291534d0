// Defines the data structures for the GitHub releases feed and the version-to-URL map built from it.
// Serde trait for deserialization of the API response.
use serde::Deserialize;
// Ordered map: keeps `--print` output and lookups deterministic.
use std::collections::BTreeMap;

/// Represents a downloadable asset associated with a GitHub release.
#[derive(Debug, Clone, Deserialize)]
pub struct ReleaseAsset {
    /// The filename of the asset as it appears on GitHub.
    ///
    /// # Example
    /// ```text
    /// "govc_Linux_x86_64.tar.gz"
    /// ```
    pub(crate) name: String,

    /// The direct URL for downloading the asset file.
    /// The release tag is the path segment right after `/download/`.
    ///
    /// # Example
    /// ```text
    /// "https://github.com/vmware/govmomi/releases/download/v0.37.0/govc_Linux_x86_64.tar.gz"
    /// ```
    pub(crate) browser_download_url: String,
}

/// Represents a GitHub release with its associated downloadable assets.
///
/// Only the fields we read are modeled. Missing `assets` deserialize as empty,
/// mirroring releases that were published without attachments.
#[derive(Debug, Clone, Deserialize)]
pub struct Release {
    /// The git tag of the release, kept for debug logging.
    #[serde(default)]
    pub(crate) tag_name: Option<String>,

    /// A collection of downloadable assets associated with this release.
    #[serde(default)]
    pub(crate) assets: Vec<ReleaseAsset>,
}

/// Version string (e.g. `v0.37.0`) to asset download URL.
/// Rebuilt from the feed on every run. A later duplicate version overwrites an earlier one.
pub type ReleaseMap = BTreeMap<String, String>;
