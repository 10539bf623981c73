//! `move-releases` entrypoint.
//!
//! Run after the build matrix has dropped a `release.zip` into one folder per
//! target. Prints the path of every archive it produces.

use clap::Parser;
use release_scripts::cli::MoveReleasesCli;
use release_scripts::error::{RelocateError, RelocateResult};
use release_scripts::logging;
use release_scripts::output::{DONE, write_line, write_outcome};
use release_scripts::relocate::relocate_releases_with;
use std::io::Write;

fn main() {
    let cli = MoveReleasesCli::parse();
    logging::init(cli.verbosity);

    let mut stdout = std::io::stdout();
    let mut stderr = std::io::stderr();
    let run_result = run(&cli, &mut stdout, &mut stderr);
    let exit_code = exit_code_for_run_result(run_result, &mut stderr);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}

fn run(
    cli: &MoveReleasesCli,
    stdout: &mut dyn Write,
    stderr: &mut dyn Write,
) -> RelocateResult<()> {
    let root = cli.path.as_deref().ok_or(RelocateError::NoPathArgument)?;
    let summary = relocate_releases_with(root, &mut |outcome| {
        write_outcome(outcome, stdout, stderr);
    })?;
    summary.verdict()?;
    write_line(stdout, DONE);
    Ok(())
}

fn exit_code_for_run_result(result: RelocateResult<()>, stderr: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => 0,
        Err(err) => {
            write_line(stderr, err);
            1
        }
    }
}
