use crate::exec::{self, ExecError};
use std::path::Path;

/// mark the workspace as a safe directory in the global git config
///
/// CI checkouts are often owned by a different uid than the job user,
/// and git refuses to operate on such repositories until the path is
/// trusted. the entry lands in the runner's global config, whose
/// lifetime is the process run on an ephemeral runner.
pub fn mark_safe_directory(workspace: &Path) -> Result<(), ExecError> {
    let path = workspace.to_string_lossy();
    exec::run_inherited(
        "git",
        &["config", "--global", "--add", "safe.directory", &path],
        workspace,
    )
}

/// stage everything, tracked and untracked, so the status query sees
/// the full effect of the generation command
pub fn stage_all(workspace: &Path) -> Result<(), ExecError> {
    exec::run_inherited("git", &["add", "--all"], workspace)
}

/// short-form status, stdout captured verbatim
///
/// the raw output is the clean/dirty signal: an exactly-empty string
/// means the working tree matches the last commit. parsing into records
/// happens separately, after that decision.
pub fn short_status(workspace: &Path) -> Result<String, ExecError> {
    exec::run_captured("git", &["status", "--short"], workspace)
}

/// diff the last commit against the staged version of a single path
pub fn diff_against_head(workspace: &Path, path: &str) -> Result<(), ExecError> {
    exec::run_inherited("git", &["diff", "@", "--", path], workspace)
}
