// This is the main module file for the `utilities` directory.
// It declares the helper submodules used by the pipeline stages.

// Tilde and environment expansion for user-supplied paths.
pub mod path_helpers;
// `.tar.gz` extraction of the govc binary.
pub mod compression;
// Streaming download of the release asset.
pub mod assets;
// Ownership and permission fixes for the installed binary.
pub mod binary;
// Progress bar behind a reporting trait.
pub mod progress;
