//! Error types for the release scripts.
//!
//! Each binary has its own error enum. The `Display` text of every variant is
//! exactly the diagnostic line printed to stderr before the process exits
//! with status 1, so pipelines grepping for these messages keep working.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised by `check-version`.
#[derive(Debug, Error)]
pub enum VersionCheckError {
    /// No expected version was given on the command line.
    #[error("missing version argument")]
    MissingArgument,

    /// The manifest could not be opened or read.
    #[error("failed to read manifest {path}: {source}")]
    ManifestUnreadable {
        /// Path of the manifest that was requested.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// No `version = "..."` line was found in the manifest.
    #[error("failed to find cargo version")]
    VersionNotFound,

    /// The declared version differs from the expected one.
    #[error("version mismatch (input: {input} | cargo: {declared})")]
    VersionMismatch {
        /// Version supplied by the caller.
        input: String,
        /// Version declared in the manifest, `v`-prefixed.
        declared: String,
    },
}

/// Errors raised by `move-releases`.
#[derive(Debug, Error)]
pub enum RelocateError {
    /// No root path was given on the command line.
    #[error("no path argument found")]
    NoPathArgument,

    /// The root path could not be listed.
    #[error("failed to read directory {path}: {source}")]
    RootUnreadable {
        /// Root path that was requested.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Fewer archives were renamed than directories were found.
    ///
    /// `failed` is `total - expected` and is therefore negative. The count is
    /// reported as computed; release tooling downstream already matches on
    /// this exact text.
    #[error("{total}/{expected} succeeded [{failed} failed]")]
    PartialFailure {
        /// Number of archives renamed.
        total: usize,
        /// Number of directories found.
        expected: usize,
        /// `total - expected`.
        failed: i128,
    },

    /// The scan finished without renaming anything.
    #[error("no work")]
    NoWork,
}

/// Result type alias using [`VersionCheckError`].
pub type VersionCheckResult<T> = std::result::Result<T, VersionCheckError>;

/// Result type alias using [`RelocateError`].
pub type RelocateResult<T> = std::result::Result<T, RelocateError>;
