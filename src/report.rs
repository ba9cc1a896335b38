use crate::error::CheckError;
use crate::exec::{self, ExecError};
use crate::git;
use crate::status::{StatusLine, StatusTag};
use crate::ui;
use std::path::Path;

/// what verbose mode renders for one status record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderAction {
    /// dump the whole file; a newly added file has no committed
    /// counterpart to diff against
    ShowContents,
    /// diff the last commit against the staged version of the path
    ShowDiff,
}

/// decide what to render for a tag; `None` means the record is skipped
pub fn action_for(tag: StatusTag) -> Option<RenderAction> {
    match tag {
        StatusTag::Added => Some(RenderAction::ShowContents),
        StatusTag::Modified => Some(RenderAction::ShowDiff),
        StatusTag::Other => None,
    }
}

/// render every reportable record, each in its own named log group
///
/// a rendering subprocess failure aborts the whole run even though the
/// check has already determined "diff found"; the failure names the
/// path it happened on.
pub fn render_all(workspace: &Path, lines: &[StatusLine]) -> Result<(), CheckError> {
    for line in lines {
        let Some(action) = action_for(line.tag) else {
            continue;
        };

        let title = format!("{} {}", line.token, line.path);
        ui::group(&title, || render(workspace, action, &line.path)).map_err(|source| {
            CheckError::Render {
                path: line.path.clone(),
                source,
            }
        })?;
    }

    Ok(())
}

fn render(workspace: &Path, action: RenderAction, path: &str) -> Result<(), ExecError> {
    match action {
        RenderAction::ShowContents => exec::run_inherited("cat", &[path], workspace),
        RenderAction::ShowDiff => git::diff_against_head(workspace, path),
    }
}
