// This module is the production `DownloadClient`: it talks to the GitHub releases API
// and the release asset host using blocking `ureq` requests.

use crate::libs::download_client::{AssetStream, DownloadClient};
use crate::schemas::common::Release;
use crate::schemas::errors::GetGovcError;
use crate::{log_debug, log_warn};
use colored::Colorize;

/// Identifies us to the GitHub API.
const API_USER_AGENT: &str = concat!("get-govc/", env!("CARGO_PKG_VERSION"));
/// Some asset hosts reject non-browser agents, so downloads present a browser-like one.
const DOWNLOAD_USER_AGENT: &str = "Mozilla/5.0";

/// GitHub-backed client. Holds one `ureq` agent so both requests share a connection pool.
pub struct GitHubClient {
    agent: ureq::Agent,
}

impl GitHubClient {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for GitHubClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Flattens a `ureq` error into a readable reason, including the HTTP status for non-2xx replies.
fn describe_ureq_error(err: ureq::Error) -> String {
    match err {
        ureq::Error::Status(code, response) => {
            format!("HTTP {} {}", code, response.status_text())
        }
        ureq::Error::Transport(transport) => transport.to_string(),
    }
}

impl DownloadClient for GitHubClient {
    fn fetch_releases(&self, url: &str) -> Result<Vec<Release>, GetGovcError> {
        log_debug!("[GitHub] Fetching release information from GitHub API: {}", url.blue());

        let response = self
            .agent
            .get(url)
            .set("User-Agent", API_USER_AGENT)
            .set("Accept", "application/vnd.github+json")
            .call()
            .map_err(|e| GetGovcError::Feed {
                url: url.to_string(),
                reason: describe_ureq_error(e),
            })?;

        if let Some(remaining) = response.header("x-ratelimit-remaining") {
            log_debug!("[GitHub] API rate limit remaining: {}", remaining);
            if remaining == "0" {
                log_warn!("[GitHub] GitHub API rate limit exhausted; further requests will fail until it resets.");
            }
        }

        let releases: Vec<Release> = response.into_json().map_err(|e| GetGovcError::Feed {
            url: url.to_string(),
            reason: format!("invalid release JSON: {e}"),
        })?;

        log_debug!("[GitHub] Feed returned {} releases", releases.len());
        Ok(releases)
    }

    fn open_asset(&self, url: &str) -> Result<AssetStream, GetGovcError> {
        log_debug!("[GitHub] Starting download from URL: {}", url.blue());

        let response = self
            .agent
            .get(url)
            .set("User-Agent", DOWNLOAD_USER_AGENT)
            .call()
            .map_err(|e| GetGovcError::Download {
                url: url.to_string(),
                reason: describe_ureq_error(e),
            })?;

        let content_length = response
            .header("Content-Length")
            .and_then(|value| value.trim().parse::<u64>().ok())
            .filter(|len| *len > 0);
        log_debug!("[GitHub] Declared content length: {:?}", content_length);

        Ok(AssetStream {
            reader: Box::new(response.into_reader()),
            content_length,
        })
    }
}
