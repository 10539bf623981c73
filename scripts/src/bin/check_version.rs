//! `check-version` entrypoint.
//!
//! Fails the release job when the pushed tag does not match the version
//! declared in `Cargo.toml`.

use clap::Parser;
use release_scripts::cli::CheckVersionCli;
use release_scripts::error::{VersionCheckError, VersionCheckResult};
use release_scripts::logging;
use release_scripts::output::{VERSIONS_MATCHED, write_line};
use release_scripts::version_check::check_version;
use std::io::Write;

fn main() {
    let cli = CheckVersionCli::parse();
    logging::init(cli.verbosity);

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(cli: &CheckVersionCli, stdout: &mut dyn Write) -> VersionCheckResult<()> {
    let expected = cli
        .expected
        .as_deref()
        .ok_or(VersionCheckError::MissingArgument)?;
    check_version(expected, &cli.manifest)?;
    write_line(stdout, VERSIONS_MATCHED);
    Ok(())
}

fn exit_code_for_run_result(result: VersionCheckResult<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_line(stderr, err);
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use std::fs;
    use tempfile::TempDir;

    fn manifest_dir(contents: &str) -> (TempDir, Utf8PathBuf) {
        let dir = TempDir::new().expect("failed to create temp dir");
        let path = Utf8PathBuf::from_path_buf(dir.path().join("Cargo.toml"))
            .expect("temp dir is not UTF-8");
        fs::write(&path, contents).expect("failed to write manifest");
        (dir, path)
    }

    fn cli_for(manifest: &Utf8PathBuf, version: Option<&str>) -> CheckVersionCli {
        let mut args = vec!["check-version", "--manifest", manifest.as_str()];
        args.extend(version);
        CheckVersionCli::parse_from(args)
    }

    #[test]
    fn exit_code_for_run_result_returns_zero_on_success() {
        let mut stderr = Vec::new();
        let exit_code = exit_code_for_run_result(Ok(()), &mut stderr);
        assert_eq!(exit_code, 0);
        assert!(stderr.is_empty());
    }

    #[test]
    fn exit_code_for_run_result_prints_error_and_returns_one() {
        let mut stderr = Vec::new();
        let exit_code =
            exit_code_for_run_result(Err(VersionCheckError::VersionNotFound), &mut stderr);
        assert_eq!(exit_code, 1);

        let stderr_text = String::from_utf8(stderr).expect("stderr was not UTF-8");
        assert_eq!(stderr_text, "failed to find cargo version\n");
    }

    #[test]
    fn run_prints_match_message() {
        let (_dir, manifest) = manifest_dir("[package]\nversion = \"0.5.0\"\n");
        let cli = cli_for(&manifest, Some("v0.5.0"));
        let mut stdout = Vec::new();

        run(&cli, &mut stdout).expect("expected versions to match");

        assert_eq!(stdout, b"versions matched\n");
    }

    #[test]
    fn run_without_version_writes_nothing() {
        let (_dir, manifest) = manifest_dir("[package]\nversion = \"0.5.0\"\n");
        let cli = cli_for(&manifest, None);
        let mut stdout = Vec::new();

        let err = run(&cli, &mut stdout).expect_err("expected missing argument");

        assert!(matches!(err, VersionCheckError::MissingArgument));
        assert!(stdout.is_empty());
    }

    #[test]
    fn run_mismatch_writes_nothing_to_stdout() {
        let (_dir, manifest) = manifest_dir("[package]\nversion = \"0.5.0\"\n");
        let cli = cli_for(&manifest, Some("v0.6.0"));
        let mut stdout = Vec::new();

        let err = run(&cli, &mut stdout).expect_err("expected mismatch");

        assert_eq!(
            err.to_string(),
            "version mismatch (input: v0.6.0 | cargo: v0.5.0)"
        );
        assert!(stdout.is_empty());
    }
}
