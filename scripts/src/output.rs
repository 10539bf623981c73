//! User-facing output for the release scripts.
//!
//! Everything the binaries print goes through this module. Informational
//! lines go to stdout and diagnostics go to stderr, so a pipeline can capture
//! the list of produced archives from stdout alone.

use std::fmt;
use std::io::Write;

use crate::relocate::{EntryOutcome, RelocationSummary};

/// Printed by `check-version` when the versions agree.
pub const VERSIONS_MATCHED: &str = "versions matched";

/// Printed by `move-releases` after a fully successful pass.
pub const DONE: &str = "done";

/// Write a line to `writer`, ignoring write failures.
///
/// Output is best effort: a closed pipe must not change the exit status that
/// the pipeline is waiting for.
pub fn write_line(writer: &mut dyn Write, message: impl fmt::Display) {
    if writeln!(writer, "{message}").is_err() {
        // Best-effort output; ignore write failures.
    }
}

/// Format the stdout/stderr line for a single relocation outcome.
///
/// Returns the message and whether it belongs on stderr.
///
/// # Examples
///
/// ```
/// use camino::Utf8PathBuf;
/// use release_scripts::output::outcome_line;
/// use release_scripts::relocate::EntryOutcome;
///
/// let outcome = EntryOutcome::MissingArchive {
///     dir: Utf8PathBuf::from("dist/x86_64-linux"),
/// };
/// let (line, is_diagnostic) = outcome_line(&outcome);
/// assert_eq!(line, "no release.zip file found in dist/x86_64-linux");
/// assert!(is_diagnostic);
/// ```
#[must_use]
pub fn outcome_line(outcome: &EntryOutcome) -> (String, bool) {
    match outcome {
        EntryOutcome::NotADirectory { path } => (format!("{path} is not a dir"), false),
        EntryOutcome::Unlisted { source } => (format!("skipping unreadable entry: {source}"), true),
        EntryOutcome::NonUtf8Directory { path } => (
            format!("cannot relocate {}: name is not valid UTF-8", path.display()),
            true,
        ),
        EntryOutcome::MissingArchive { dir } => {
            (format!("no release.zip file found in {dir}"), true)
        }
        EntryOutcome::Relocated { to, .. } => (to.to_string(), false),
        EntryOutcome::RenameFailed { from, to, source } => {
            (format!("failed to move {from} to {to}: {source}"), true)
        }
    }
}

/// Write the line for one outcome to the stream it belongs on.
pub fn write_outcome(outcome: &EntryOutcome, stdout: &mut dyn Write, stderr: &mut dyn Write) {
    let (line, is_diagnostic) = outcome_line(outcome);
    if is_diagnostic {
        write_line(stderr, line);
    } else {
        write_line(stdout, line);
    }
}

/// Write every outcome of a relocation pass, in order.
pub fn write_outcomes(
    summary: &RelocationSummary,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) {
    for outcome in summary.outcomes() {
        write_outcome(outcome, stdout, stderr);
    }
}
