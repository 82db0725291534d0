// The stages of the install pipeline, in the order they run.

// Network abstraction shared by the stages that talk to GitHub.
pub mod download_client;
// 1. Releases feed -> version/URL map.
pub mod release_lister;
// 2. Requested token -> one release.
pub mod version_selector;
// 3. Is the selected version already installed?
pub mod install_checker;
// 6. Run the installed binary once more.
pub mod verifier;
// 4-5. Download, extraction, permissions and path helpers.
pub mod utilities;
