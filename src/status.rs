/// change classification parsed from one short-status line
///
/// only added and modified entries get rendered in verbose mode; every
/// other tag maps to `Other` and is skipped at the dispatch site, which
/// keeps the intentionally narrow coverage visible in one match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusTag {
    Added,
    Modified,
    Other,
}

impl StatusTag {
    fn from_token(token: &str) -> Self {
        match token {
            "A" => Self::Added,
            "M" => Self::Modified,
            _ => Self::Other,
        }
    }
}

/// one record from `git status --short` output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub tag: StatusTag,
    /// the raw tag text, kept for listing changes with their original
    /// classification even when `tag` is `Other`
    pub token: String,
    pub path: String,
}

/// parse short-status output into ordered records
///
/// each line is trimmed and split on its first run of whitespace into a
/// tag token and a path. lines that are empty after trimming (such as a
/// trailing newline) are skipped, never counted as changes. the
/// clean/dirty decision is made on the raw output before this runs, so
/// skipping here only affects what gets listed and rendered.
pub fn parse(output: &str) -> Vec<StatusLine> {
    output.lines().filter_map(parse_line).collect()
}

fn parse_line(line: &str) -> Option<StatusLine> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return None;
    }

    // a token without a path cannot be listed or rendered; skip it
    let (token, rest) = trimmed.split_once(char::is_whitespace)?;

    Some(StatusLine {
        tag: StatusTag::from_token(token),
        token: token.to_string(),
        path: rest.trim_start().to_string(),
    })
}
