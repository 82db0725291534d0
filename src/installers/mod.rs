// Network clients the installer can fetch releases through.
//
// `pub(crate) mod <module_name>;` makes the module accessible within this crate only.

/// Declares the `github` module: the `ureq`-backed client for the GitHub
/// releases API and the release asset host.
pub(crate) mod github;
