use crate::exec::ExecError;
use thiserror::Error;

/// everything that can abort a check, one variant per pipeline step
///
/// every variant is fatal: errors propagate uncaught to `main`, which
/// prints the message chain once and exits non-zero. the host only sees
/// pass/fail, so the message text is the sole way to tell a tooling
/// failure apart from an actual generated diff.
#[derive(Error, Debug)]
pub enum CheckError {
    /// marking the workspace as trusted failed, before the generation
    /// command ever ran
    #[error("failed to mark `{workspace}` as a safe git directory")]
    Setup {
        workspace: String,
        #[source]
        source: ExecError,
    },

    /// the caller's generation command failed; a broken generator is
    /// reported distinctly from "found a diff"
    #[error("generation command failed")]
    Generate(#[source] ExecError),

    /// staging or the short-status query failed
    #[error("failed to inspect repository status")]
    Status(#[source] ExecError),

    /// rendering one file's contents or diff failed during verbose
    /// reporting; fatal even though the check result is already known
    #[error("failed to render changes for `{path}`")]
    Render {
        path: String,
        #[source]
        source: ExecError,
    },
}
