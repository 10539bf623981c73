//! Comparison of an expected release version with the manifest.
//!
//! Versions are compared as opaque strings. `v1.2.3` and `v1.2.03` differ.

use camino::Utf8Path;
use log::debug;

use crate::error::{VersionCheckError, VersionCheckResult};
use crate::manifest::{DeclaredVersion, read_declared_version};

/// Default manifest path, relative to the working directory.
pub const DEFAULT_MANIFEST: &str = "Cargo.toml";

/// Compare `expected` against the version declared in `manifest`.
///
/// Returns the declared version when both match.
///
/// # Errors
///
/// Returns [`VersionCheckError::ManifestUnreadable`] or
/// [`VersionCheckError::VersionNotFound`] when the manifest yields no version,
/// and [`VersionCheckError::VersionMismatch`] when the versions differ.
pub fn check_version(expected: &str, manifest: &Utf8Path) -> VersionCheckResult<DeclaredVersion> {
    let declared = read_declared_version(manifest)?;
    debug!("declared version {declared} in {manifest}, expected {expected}");
    ensure_matches(expected, declared)
}

/// Compare an already-read declared version with `expected`.
///
/// # Errors
///
/// Returns [`VersionCheckError::VersionMismatch`] when the strings differ.
///
/// # Examples
///
/// ```
/// use release_scripts::manifest::DeclaredVersion;
/// use release_scripts::version_check::ensure_matches;
///
/// let declared = DeclaredVersion::from_raw("1.2.3");
/// assert!(ensure_matches("v1.2.3", declared.clone()).is_ok());
/// assert!(ensure_matches("1.2.3", declared).is_err());
/// ```
pub fn ensure_matches(
    expected: &str,
    declared: DeclaredVersion,
) -> VersionCheckResult<DeclaredVersion> {
    if declared.as_str() == expected {
        Ok(declared)
    } else {
        Err(VersionCheckError::VersionMismatch {
            input: expected.to_owned(),
            declared: declared.into_inner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use std::fs;
    use tempfile::TempDir;

    struct ManifestFixture {
        // Keep the directory alive for the duration of the test.
        _dir: TempDir,
        path: Utf8PathBuf,
    }

    fn manifest_with(contents: &str) -> ManifestFixture {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join(DEFAULT_MANIFEST))
            .expect("temp dir is not UTF-8");
        fs::write(&path, contents).expect("failed to write manifest");
        ManifestFixture { _dir: dir, path }
    }

    #[fixture]
    fn versioned_manifest() -> ManifestFixture {
        manifest_with("[package]\nname = \"demo\"\nversion = \"1.2.3\"\n")
    }

    #[rstest]
    fn matching_version_succeeds(versioned_manifest: ManifestFixture) {
        let declared =
            check_version("v1.2.3", &versioned_manifest.path).expect("expected versions to match");
        assert_eq!(declared.as_str(), "v1.2.3");
    }

    #[rstest]
    #[case::other_release("v9.9.9")]
    #[case::missing_prefix("1.2.3")]
    #[case::zero_padded("v1.2.03")]
    fn differing_version_reports_both_values(
        versioned_manifest: ManifestFixture,
        #[case] expected: &str,
    ) {
        let err = check_version(expected, &versioned_manifest.path)
            .expect_err("expected a version mismatch");
        assert!(
            matches!(
                err,
                VersionCheckError::VersionMismatch { ref input, ref declared }
                    if input == expected && declared == "v1.2.3"
            ),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn manifest_without_version_is_not_found() {
        let manifest = manifest_with("[package]\nname = \"demo\"\n");
        let err = check_version("v1.2.3", &manifest.path).expect_err("expected lookup failure");
        assert!(matches!(err, VersionCheckError::VersionNotFound));
    }

    #[test]
    fn version_with_equals_sign_is_not_found() {
        let manifest = manifest_with("version = \"1.0.0=rc1\"\n");
        let err = check_version("v1.0.0=rc1", &manifest.path).expect_err("expected lookup failure");
        assert!(matches!(err, VersionCheckError::VersionNotFound));
    }
}
