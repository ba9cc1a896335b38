mod cli;
mod error;
mod exec;
mod git;
mod report;
mod status;
mod ui;

use crate::cli::Cli;
use crate::error::CheckError;
use crate::status::StatusLine;
use anyhow::Result;

/// final verdict of a check run
enum CheckOutcome {
    /// the generation command left the repository unchanged
    Clean,
    /// at least one file diverges from the last commit
    Dirty,
}

fn main() {
    let cli = Cli::parse_args();
    match run(&cli) {
        Ok(CheckOutcome::Clean) => status!("no diff found"),
        Ok(CheckOutcome::Dirty) => {
            error!("Diff found!");
            std::process::exit(1);
        }
        Err(e) => {
            error!("{:#}", e);
            std::process::exit(1);
        }
    }
}

/// one linear pass: prepare, generate, stage and inspect, report
fn run(cli: &Cli) -> Result<CheckOutcome> {
    cli.validate()?;
    let workspace = cli.workspace.as_path();

    git::mark_safe_directory(workspace).map_err(|source| CheckError::Setup {
        workspace: workspace.display().to_string(),
        source,
    })?;

    status!("running generation command: {}", cli.command);
    exec::run_shell(&cli.command, workspace).map_err(CheckError::Generate)?;

    git::stage_all(workspace).map_err(CheckError::Status)?;
    let raw = git::short_status(workspace).map_err(CheckError::Status)?;

    // the raw output is the signal: exactly empty means clean
    if raw.is_empty() {
        return Ok(CheckOutcome::Clean);
    }

    let lines = status::parse(&raw);
    summarize(&lines);

    if cli.verbose {
        report::render_all(workspace, &lines)?;
    }

    Ok(CheckOutcome::Dirty)
}

/// list the offending files before failing
fn summarize(lines: &[StatusLine]) {
    let file_count = lines.len();
    let file_word = if file_count == 1 { "file" } else { "files" };
    warning!("generation command changed {} {}:", file_count, file_word);
    for line in lines {
        info!("  {} {}", line.token, line.path);
    }
}
