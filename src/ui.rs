#[macro_export]
macro_rules! warning {
    // format string literal (with or without inline formatting)
    ($fmt:literal $(, $($arg:tt)*)?) => {{
        use colored::Colorize;
        use std::io::{self, Write};
        let _ = writeln!(io::stderr(), "{}", format!($fmt $(, $($arg)*)?).yellow());
    }};
    // arbitrary expression (non-literal)
    ($expr:expr) => {{
        use colored::Colorize;
        use std::io::{self, Write};
        let _ = writeln!(io::stderr(), "{}", format!("{}", $expr).yellow());
    }};
}

#[macro_export]
macro_rules! error {
    // format string literal (with or without inline formatting)
    ($fmt:literal $(, $($arg:tt)*)?) => {{
        use colored::Colorize;
        use std::io::{self, Write};
        let _ = writeln!(io::stderr(), "{}", format!($fmt $(, $($arg)*)?).red());
    }};
    // arbitrary expression (non-literal)
    ($expr:expr) => {{
        use colored::Colorize;
        use std::io::{self, Write};
        let _ = writeln!(io::stderr(), "{}", format!("{}", $expr).red());
    }};
}

#[macro_export]
macro_rules! status {
    // format string literal (with or without inline formatting)
    ($fmt:literal $(, $($arg:tt)*)?) => {{
        use colored::Colorize;
        use std::io::{self, Write};
        let _ = writeln!(io::stdout(), "{}", format!($fmt $(, $($arg)*)?).green());
    }};
    // arbitrary expression (non-literal)
    ($expr:expr) => {{
        use colored::Colorize;
        use std::io::{self, Write};
        let _ = writeln!(io::stdout(), "{}", format!("{}", $expr).green());
    }};
}

#[macro_export]
macro_rules! info {
    () => {{
        use std::io::{self, Write};
        let _ = writeln!(io::stdout());
    }};
    // format string literal (with or without inline formatting or args)
    ($fmt:literal $(, $($arg:tt)*)?) => {{
        use std::io::{self, Write};
        let _ = writeln!(io::stdout(), $fmt $(, $($arg)*)?);
    }};
    // arbitrary expression (non-literal)
    ($expr:expr) => {{
        use std::io::{self, Write};
        let _ = writeln!(io::stdout(), "{}", $expr);
    }};
}

use crate::info;

/// wrap a block of console output in a named log group
///
/// emits the `::group::` / `::endgroup::` workflow commands that hosting
/// CI systems render as collapsible sections; on a plain terminal they
/// appear as literal marker lines. the end marker is always emitted,
/// even when the block fails, so a failed block cannot leave the rest of
/// the log swallowed by an unterminated group.
pub fn group<T>(title: &str, f: impl FnOnce() -> T) -> T {
    info!("::group::{}", title);
    let result = f();
    info!("::endgroup::");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_returns_block_result() {
        assert_eq!(group("title", || 42), 42);
    }

    #[test]
    fn group_ends_even_when_block_errors() {
        let result: Result<(), &str> = group("title", || Err("boom"));
        assert_eq!(result, Err("boom"));
    }
}
