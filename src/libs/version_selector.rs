// This module turns a requested version token ("latest", "v0.37.0", "0.37.0")
// into one entry of the release map.
//
// Ordering is "numeric-aware": dot-separated components that are all digits compare
// as numbers, anything else compares as text, and a leading `v` is ignored.

use crate::log_debug;
use crate::schemas::common::ReleaseMap;
use crate::schemas::errors::GetGovcError;
use std::cmp::Ordering;

/// The literal token meaning "highest available version".
pub const LATEST: &str = "latest";

/// An all-digit component, stored without leading zeros.
/// A shorter run is the smaller number, equal lengths compare digit by digit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Digits(String);

impl Digits {
    fn new(run: &str) -> Self {
        let trimmed = run.trim_start_matches('0');
        Digits(if trimmed.is_empty() { "0".to_string() } else { trimmed.to_string() })
    }
}

impl Ord for Digits {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }
}

impl PartialOrd for Digits {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// One dot-separated component of a version.
/// Numbers sort before text, so mixed versions still have a total order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum VersionPart {
    Number(Digits),
    Text(String),
}

/// Sort key for a version token.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct VersionKey(Vec<VersionPart>);

/// Drops any leading `v` characters: `v1.2.3` and `1.2.3` name the same release.
pub fn strip_v(token: &str) -> &str {
    token.trim_start_matches('v')
}

/// Builds the ordering key for `version`.
///
/// The token is lower-cased before the `v` is stripped, so `V1.2` and `v1.2` agree too.
/// Digit runs of any length compare numerically.
pub fn version_key(version: &str) -> VersionKey {
    let lowered = version.to_lowercase();
    let parts = strip_v(&lowered)
        .split('.')
        .map(|part| {
            if !part.is_empty() && part.chars().all(|c| c.is_ascii_digit()) {
                VersionPart::Number(Digits::new(part))
            } else {
                VersionPart::Text(part.to_string())
            }
        })
        .collect();
    VersionKey(parts)
}

/// Compares two version tokens with the numeric-aware ordering.
pub fn compare_versions(a: &str, b: &str) -> Ordering {
    version_key(a).cmp(&version_key(b))
}

/// All versions in the map, ascending. Used by `--print`.
pub fn sorted_versions(releases: &ReleaseMap) -> Vec<&str> {
    let mut versions: Vec<&str> = releases.keys().map(String::as_str).collect();
    // Stable sort over the map's lexical order keeps ties deterministic.
    versions.sort_by(|a, b| compare_versions(a, b));
    versions
}

/// Picks the release matching `requested`.
///
/// # Arguments
/// * `releases`: Version to download URL map from the release lister.
/// * `requested`: `"latest"` or an explicit version, with or without leading `v`.
///
/// # Returns
/// * `Ok((version, url))` borrowed from the map, with the version spelled as in the feed.
/// * `Err(GetGovcError::NoSuitableRelease)` naming `requested` when nothing matches.
pub fn select_version<'a>(
    releases: &'a ReleaseMap,
    requested: &str,
) -> Result<(&'a str, &'a str), GetGovcError> {
    let selected = if requested == LATEST {
        // `max_by` returns the last of equal maxima, which with the map's order is deterministic.
        releases
            .iter()
            .max_by(|(a, _), (b, _)| compare_versions(a, b))
    } else {
        releases.get_key_value(requested).or_else(|| {
            let wanted = strip_v(requested);
            releases.iter().find(|(version, _)| strip_v(version) == wanted)
        })
    };

    match selected {
        Some((version, url)) => {
            log_debug!("[Versions] Requested '{}' resolved to {}", requested, version);
            Ok((version.as_str(), url.as_str()))
        }
        None => Err(GetGovcError::NoSuitableRelease(requested.to_string())),
    }
}
