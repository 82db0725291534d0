// Error types for the install pipeline.
//
// Two families with different propagation:
// - `GetGovcError` is fatal. It bubbles up to `main`, gets printed, and the process exits 1.
// - `ProbeError` is advisory. It only ever tells the existing-install check "needs install".

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Which part of the run a fatal error came from.
/// `main` uses it to pick the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Listing releases and resolving the requested version.
    Lookup,
    /// Downloading, extracting and placing the binary.
    Install,
    /// Running the freshly installed binary.
    Verify,
}

#[derive(Error, Debug)]
pub enum GetGovcError {
    #[error("failed to fetch releases from {url}: {reason}")]
    Feed { url: String, reason: String },

    #[error("No govc releases found")]
    NoReleases,

    #[error("No suitable govc release found for version '{0}'")]
    NoSuitableRelease(String),

    #[error("failed to download {url}: {reason}")]
    Download { url: String, reason: String },

    #[error("{0} binary not found in tarball.")]
    BinaryNotInArchive(String),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to run {} version: {reason}", .path.display())]
    Verification { path: PathBuf, reason: String },
}

impl GetGovcError {
    pub fn stage(&self) -> Stage {
        match self {
            GetGovcError::Feed { .. }
            | GetGovcError::NoReleases
            | GetGovcError::NoSuitableRelease(_) => Stage::Lookup,
            GetGovcError::Download { .. }
            | GetGovcError::BinaryNotInArchive(_)
            | GetGovcError::Io(_) => Stage::Install,
            GetGovcError::Verification { .. } => Stage::Verify,
        }
    }
}

/// Reasons the advisory version probe could not read a version.
#[derive(Error, Debug)]
pub enum ProbeError {
    #[error("{} does not exist", .0.display())]
    Missing(PathBuf),

    #[error("could not execute: {0}")]
    Spawn(#[from] io::Error),

    #[error("exited with {0}")]
    ExitStatus(std::process::ExitStatus),

    #[error("produced no version output")]
    EmptyOutput,
}
