// The network seam of the installer.
// The pipeline only talks to the releases feed and the asset host through this trait,
// so tests can substitute an in-memory client.

use crate::schemas::common::Release;
use crate::schemas::errors::GetGovcError;
use std::io::Read;

/// An open asset download: the body reader plus the declared size, if any.
pub struct AssetStream {
    pub reader: Box<dyn Read + Send>,
    /// Value of `Content-Length`. `None` when the server did not send one.
    pub content_length: Option<u64>,
}

pub trait DownloadClient {
    /// Fetches and decodes the JSON releases feed at `url`.
    fn fetch_releases(&self, url: &str) -> Result<Vec<Release>, GetGovcError>;

    /// Starts downloading the asset at `url`. The body is read lazily by the caller.
    fn open_asset(&self, url: &str) -> Result<AssetStream, GetGovcError>;
}
