//! CLI argument definitions for the release scripts.
//!
//! The required positional arguments are declared optional so that a missing
//! value surfaces as the script's own diagnostic and exit status 1, rather
//! than as a clap usage error with status 2.

use camino::Utf8PathBuf;
use clap::Parser;

use crate::version_check::DEFAULT_MANIFEST;

/// Check that a release tag matches the manifest version.
#[derive(Parser, Debug, Clone)]
#[command(name = "check-version")]
#[command(version, about)]
#[command(long_about = concat!(
    "Check that a release tag matches the manifest version.\n\n",
    "Reads the first `version = \"...\"` line of the manifest, prefixes it ",
    "with `v`, and compares it with the given tag as a plain string.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Check the tag being released:\n",
    "    $ check-version v0.17.0\n\n",
    "  Check against a manifest elsewhere:\n",
    "    $ check-version --manifest crates/cli/Cargo.toml v0.17.0",
))]
pub struct CheckVersionCli {
    /// Expected version, including the leading `v` (e.g. `v1.2.3`).
    #[arg(value_name = "VERSION")]
    pub expected: Option<String>,

    /// Manifest to read the declared version from.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_MANIFEST)]
    pub manifest: Utf8PathBuf,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(short, long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}

/// Rename each `<dir>/release.zip` under a root to `<dir>.zip`.
#[derive(Parser, Debug, Clone)]
#[command(name = "move-releases")]
#[command(version, about)]
#[command(long_about = concat!(
    "Rename each <dir>/release.zip under a root to <dir>.zip.\n\n",
    "Only the immediate subdirectories of the root are visited. Renamed ",
    "archive paths are printed to stdout. Directories without a release.zip ",
    "are reported on stderr and make the run fail once every directory has ",
    "been processed.",
))]
#[command(after_help = concat!(
    "EXAMPLES:\n",
    "  Collect per-target archives after a build matrix:\n",
    "    $ move-releases dist",
))]
pub struct MoveReleasesCli {
    /// Directory whose subdirectories each hold a release.zip.
    #[arg(value_name = "PATH")]
    pub path: Option<Utf8PathBuf>,

    /// Increase log verbosity (repeatable: -v, -vv, -vvv).
    #[arg(short, long = "verbose", action = clap::ArgAction::Count)]
    pub verbosity: u8,
}
