//! Release archive relocation.
//!
//! A release job leaves one directory per build target under a common root,
//! each holding a `release.zip`. This pass renames every such archive to a
//! sibling of its directory named `<directory>.zip`:
//!
//! ```text
//! dist/x86_64-linux/release.zip   ->  dist/x86_64-linux.zip
//! dist/aarch64-macos/release.zip  ->  dist/aarch64-macos.zip
//! ```
//!
//! Only the immediate children of the root are considered. Every entry is
//! attempted even after a failure; the overall verdict is decided once the
//! scan has finished (see [`RelocationSummary::verdict`]).

use std::fs;
use std::io;
use std::path::PathBuf;

use camino::{Utf8Path, Utf8PathBuf};
use log::{debug, trace};

use crate::error::{RelocateError, RelocateResult};

/// File name expected inside each target directory.
pub const RELEASE_ARCHIVE: &str = "release.zip";

/// Extension appended to a directory path to form the archive target.
pub const ARCHIVE_EXTENSION: &str = "zip";

/// What happened to a single child of the root directory.
#[derive(Debug)]
pub enum EntryOutcome {
    /// The child is not a directory and was skipped.
    NotADirectory {
        /// Path of the skipped child.
        path: Utf8PathBuf,
    },
    /// The child could not be listed. It may have been a directory, so it
    /// counts toward the expected total.
    Unlisted {
        /// The underlying I/O error.
        source: io::Error,
    },
    /// The child is a directory whose name is not valid UTF-8. It counts
    /// toward the expected total but is never relocated.
    NonUtf8Directory {
        /// Path of the directory.
        path: PathBuf,
    },
    /// The directory holds no `release.zip`.
    MissingArchive {
        /// Directory that was searched.
        dir: Utf8PathBuf,
    },
    /// The archive was renamed.
    Relocated {
        /// Original archive path.
        from: Utf8PathBuf,
        /// New archive path.
        to: Utf8PathBuf,
    },
    /// The archive was found but the rename failed.
    RenameFailed {
        /// Original archive path.
        from: Utf8PathBuf,
        /// Intended archive path.
        to: Utf8PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },
}

impl EntryOutcome {
    /// Returns true if the entry was, or may have been, a directory and so
    /// counts toward the expected total.
    #[must_use]
    pub fn is_candidate(&self) -> bool {
        !matches!(self, Self::NotADirectory { .. })
    }

    /// Returns true if the archive was moved.
    #[must_use]
    pub fn is_relocated(&self) -> bool {
        matches!(self, Self::Relocated { .. })
    }
}

/// Counts and per-entry outcomes of a relocation pass.
#[derive(Debug, Default)]
pub struct RelocationSummary {
    outcomes: Vec<EntryOutcome>,
    expected: usize,
    total: usize,
}

impl RelocationSummary {
    /// Tally a list of outcomes.
    #[must_use]
    pub fn from_outcomes(outcomes: Vec<EntryOutcome>) -> Self {
        let expected = outcomes.iter().filter(|o| o.is_candidate()).count();
        let total = outcomes.iter().filter(|o| o.is_relocated()).count();
        Self {
            outcomes,
            expected,
            total,
        }
    }

    /// Number of directories found under the root.
    #[must_use]
    pub fn expected(&self) -> usize {
        self.expected
    }

    /// Number of archives renamed.
    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    /// Outcomes in processing order.
    #[must_use]
    pub fn outcomes(&self) -> &[EntryOutcome] {
        &self.outcomes
    }

    /// `total - expected`, as reported in the partial failure message.
    ///
    /// This is zero or negative. It is the signed difference rather than the
    /// number of failures; `1` of `2` gives `-1`.
    #[must_use]
    pub fn failed_delta(&self) -> i128 {
        signed(self.total) - signed(self.expected)
    }

    /// Decide whether the pass as a whole succeeded.
    ///
    /// A shortfall is checked before the zero case, so an empty root is
    /// [`RelocateError::NoWork`] rather than a partial failure.
    ///
    /// # Errors
    ///
    /// Returns [`RelocateError::PartialFailure`] if any directory was not
    /// relocated, or [`RelocateError::NoWork`] if nothing was relocated.
    pub fn verdict(&self) -> RelocateResult<()> {
        if self.total < self.expected {
            return Err(RelocateError::PartialFailure {
                total: self.total,
                expected: self.expected,
                failed: self.failed_delta(),
            });
        }
        if self.total == 0 {
            return Err(RelocateError::NoWork);
        }
        Ok(())
    }
}

fn signed(count: usize) -> i128 {
    i128::try_from(count).unwrap_or(i128::MAX)
}

/// Derive the archive target for a directory: `<dir>.zip`.
///
/// # Examples
///
/// ```
/// use camino::Utf8Path;
/// use release_scripts::relocate::archive_target;
///
/// let target = archive_target(Utf8Path::new("dist/x86_64-linux"));
/// assert_eq!(target.as_str(), "dist/x86_64-linux.zip");
///
/// // Dots in the directory name are kept.
/// let target = archive_target(Utf8Path::new("dist/v1.2"));
/// assert_eq!(target.as_str(), "dist/v1.2.zip");
/// ```
#[must_use]
pub fn archive_target(dir: &Utf8Path) -> Utf8PathBuf {
    Utf8PathBuf::from(format!("{dir}.{ARCHIVE_EXTENSION}"))
}

/// Rename `release.zip` in every immediate subdirectory of `root`.
///
/// The operating system returns directory entries in no particular order.
/// Entries are sorted by file name before processing so that output and
/// renames happen in a stable order. Entries that cannot be listed are
/// reported after the sorted ones.
///
/// # Errors
///
/// Returns [`RelocateError::RootUnreadable`] if `root` cannot be listed.
/// Per-entry problems are recorded in the summary instead; call
/// [`RelocationSummary::verdict`] to turn them into an error.
pub fn relocate_releases(root: &Utf8Path) -> RelocateResult<RelocationSummary> {
    relocate_releases_with(root, &mut |_| {})
}

/// As [`relocate_releases`], calling `on_outcome` as soon as each entry has
/// been handled.
///
/// The binary uses this to print every line while the pass is still running,
/// so a pass interrupted half way has already reported what it moved.
///
/// # Errors
///
/// Returns [`RelocateError::RootUnreadable`] if `root` cannot be listed.
pub fn relocate_releases_with(
    root: &Utf8Path,
    on_outcome: &mut dyn FnMut(&EntryOutcome),
) -> RelocateResult<RelocationSummary> {
    let read_dir = fs::read_dir(root).map_err(|source| RelocateError::RootUnreadable {
        path: root.to_owned(),
        source,
    })?;

    let mut children = Vec::new();
    let mut unlisted = Vec::new();
    for entry in read_dir {
        match entry {
            Ok(entry) => children.push(entry.path()),
            Err(source) => unlisted.push(EntryOutcome::Unlisted { source }),
        }
    }
    children.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("found {} entries under {root}", children.len());

    let outcomes: Vec<EntryOutcome> = children
        .into_iter()
        .map(classify_entry)
        .chain(unlisted)
        .inspect(|outcome| on_outcome(outcome))
        .collect();

    Ok(RelocationSummary::from_outcomes(outcomes))
}

/// Route a listed child to [`relocate_entry`], or record why it cannot be.
fn classify_entry(path: PathBuf) -> EntryOutcome {
    match Utf8PathBuf::from_path_buf(path) {
        Ok(path) => relocate_entry(path),
        Err(path) if path.is_dir() => {
            trace!("directory name is not UTF-8: {}", path.display());
            EntryOutcome::NonUtf8Directory { path }
        }
        Err(path) => EntryOutcome::NotADirectory {
            path: Utf8PathBuf::from(path.to_string_lossy().into_owned()),
        },
    }
}

/// Handle one child of the root.
fn relocate_entry(path: Utf8PathBuf) -> EntryOutcome {
    if !path.is_dir() {
        trace!("skipping non-directory {path}");
        return EntryOutcome::NotADirectory { path };
    }

    let from = path.join(RELEASE_ARCHIVE);
    if !from.is_file() {
        return EntryOutcome::MissingArchive { dir: path };
    }

    let to = archive_target(&path);
    match fs::rename(&from, &to) {
        Ok(()) => {
            debug!("moved {from} to {to}");
            EntryOutcome::Relocated { from, to }
        }
        Err(source) => EntryOutcome::RenameFailed { from, to, source },
    }
}
