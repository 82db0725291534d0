// Register application actions.
// Each module corresponds to one mode of the `get-govc` command line.

// Downloads, installs and verifies govc.
pub mod install;
// Prints the versions available in the releases feed (`--print`).
pub mod list;
