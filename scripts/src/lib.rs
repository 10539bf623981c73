//! Release pipeline helpers.
//!
//! This crate backs two small binaries used by the release workflow:
//!
//! - `check-version` confirms that a tag such as `v1.2.3` matches the version
//!   declared in the project manifest.
//! - `move-releases` walks a directory of per-target build folders and renames
//!   each `release.zip` to a sibling archive named after its folder.
//!
//! # Modules
//!
//! - [`cli`] - Command-line argument definitions for both binaries
//! - [`error`] - Error types whose messages are the user-facing diagnostics
//! - [`logging`] - `env_logger` initialisation from verbosity flags
//! - [`manifest`] - Line-oriented extraction of the declared version
//! - [`output`] - Routing of results to stdout and stderr
//! - [`relocate`] - Release archive relocation pass
//! - [`version_check`] - Declared versus expected version comparison

pub mod cli;
pub mod error;
pub mod logging;
pub mod manifest;
pub mod output;
pub mod relocate;
pub mod version_check;
