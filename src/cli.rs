use anyhow::{Result, bail};
use clap::Parser;
use std::path::PathBuf;

/// check-generated: run a code-generation command and fail the build if
/// it leaves uncommitted changes behind
#[derive(Parser, Debug)]
#[command(
    name = "check-generated",
    about,
    long_about = None,
    disable_version_flag = true
)]
pub struct Cli {
    /// generation command, run via the system shell
    #[arg(long, env = "INPUT_COMMAND")]
    pub command: String,

    /// render per-file contents and diffs when changes are found
    /// (truthy values: true, 1, yes, on)
    #[arg(
        long,
        env = "INPUT_VERBOSE",
        default_value = "false",
        default_missing_value = "true",
        num_args = 0..=1,
        value_parser = parse_truthy
    )]
    pub verbose: bool,

    /// repository root the check runs in
    #[arg(long, env = "GITHUB_WORKSPACE")]
    pub workspace: PathBuf,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// reject configurations that cannot work, before any subprocess
    /// runs
    pub fn validate(&self) -> Result<()> {
        if self.command.trim().is_empty() {
            bail!("generation command must not be empty");
        }
        if self.workspace.as_os_str().is_empty() {
            bail!("workspace path must not be empty");
        }
        if !self.workspace.is_dir() {
            bail!(
                "workspace `{}` is not an accessible directory",
                self.workspace.display()
            );
        }
        Ok(())
    }
}

/// lenient boolean parsing for host-provided string inputs; anything
/// that is not recognisably truthy is false
fn parse_truthy(value: &str) -> Result<bool, std::convert::Infallible> {
    Ok(matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    ))
}
