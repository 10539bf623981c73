//! Declared version extraction from a project manifest.
//!
//! This is intentionally not a TOML parser. The first line that splits on `=`
//! into exactly two segments with a left-hand side of `version` wins, which
//! for a typical `Cargo.toml` is the `[package]` or `[workspace.package]`
//! version. Lines with no `=` or with more than one `=` are skipped.

use std::fmt;
use std::fs;

use camino::Utf8Path;
use log::{debug, trace};

use crate::error::{VersionCheckError, VersionCheckResult};

/// Key whose value is taken as the project version.
pub const VERSION_KEY: &str = "version";

/// A version read from a manifest, prefixed with `v`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclaredVersion(String);

impl DeclaredVersion {
    /// Build a declared version from a raw manifest value.
    ///
    /// The value is expected to be already trimmed and unquoted.
    ///
    /// # Examples
    ///
    /// ```
    /// use release_scripts::manifest::DeclaredVersion;
    ///
    /// let version = DeclaredVersion::from_raw("1.2.3");
    /// assert_eq!(version.as_str(), "v1.2.3");
    /// ```
    #[must_use]
    pub fn from_raw(value: &str) -> Self {
        Self(format!("v{value}"))
    }

    /// Get the version as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the wrapper and return the inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl AsRef<str> for DeclaredVersion {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DeclaredVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One `key = value` line, borrowed from the manifest text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManifestEntry<'a> {
    /// Trimmed left-hand side.
    pub key: &'a str,
    /// Untouched right-hand side.
    pub value: &'a str,
}

impl ManifestEntry<'_> {
    /// Return the value trimmed, with one surrounding quote removed from each
    /// end when present.
    #[must_use]
    pub fn unquoted_value(&self) -> &str {
        let trimmed = self.value.trim();
        let without_open = trimmed
            .strip_prefix(['"', '\''])
            .unwrap_or(trimmed);
        without_open
            .strip_suffix(['"', '\''])
            .unwrap_or(without_open)
    }
}

/// Split a line into a [`ManifestEntry`].
///
/// Returns `None` unless the line contains exactly one `=`.
///
/// # Examples
///
/// ```
/// use release_scripts::manifest::split_entry;
///
/// let entry = split_entry(r#"version = "0.4.1""#).expect("single '=' splits");
/// assert_eq!(entry.key, "version");
/// assert_eq!(entry.unquoted_value(), "0.4.1");
///
/// assert!(split_entry("[package]").is_none());
/// assert!(split_entry("a = b = c").is_none());
/// ```
#[must_use]
pub fn split_entry(line: &str) -> Option<ManifestEntry<'_>> {
    let mut segments = line.split('=');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(key), Some(value), None) => Some(ManifestEntry {
            key: key.trim(),
            value,
        }),
        _ => None,
    }
}

/// Find the declared version in manifest text.
///
/// Returns `None` if no line qualifies.
#[must_use]
pub fn declared_version(contents: &str) -> Option<DeclaredVersion> {
    contents.lines().enumerate().find_map(|(index, line)| {
        let entry = split_entry(line)?;
        if entry.key != VERSION_KEY {
            return None;
        }
        trace!("version entry on line {}: {line}", index + 1);
        Some(DeclaredVersion::from_raw(entry.unquoted_value()))
    })
}

/// Read a manifest from disk and return its declared version.
///
/// # Errors
///
/// Returns [`VersionCheckError::ManifestUnreadable`] if the file cannot be
/// read, or [`VersionCheckError::VersionNotFound`] if no line declares a
/// version.
pub fn read_declared_version(path: &Utf8Path) -> VersionCheckResult<DeclaredVersion> {
    let contents =
        fs::read_to_string(path).map_err(|source| VersionCheckError::ManifestUnreadable {
            path: path.to_owned(),
            source,
        })?;
    debug!("read {} bytes from {path}", contents.len());
    declared_version(&contents).ok_or(VersionCheckError::VersionNotFound)
}
