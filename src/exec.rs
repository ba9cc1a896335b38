use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};
use thiserror::Error;

/// subprocess failure, carrying the rendered command line
///
/// a command that could not be started and a command that ran but exited
/// non-zero are distinct cases; both keep the command line so the
/// failure can be reported without reconstructing it at the call site.
#[derive(Error, Debug)]
pub enum ExecError {
    #[error("failed to run `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: io::Error,
    },

    #[error("`{command}` exited with {status}")]
    Exit { command: String, status: ExitStatus },
}

/// run a program with stdout/stderr inherited from this process
///
/// blocks until the subprocess exits; there is no timeout, so a hung
/// subprocess hangs the run.
pub fn run_inherited(program: &str, args: &[&str], dir: &Path) -> Result<(), ExecError> {
    let command = render(program, args);
    let status = Command::new(program)
        .args(args)
        .current_dir(dir)
        .status()
        .map_err(|source| ExecError::Spawn {
            command: command.clone(),
            source,
        })?;

    check(command, status)
}

/// run a program and capture its stdout verbatim
///
/// stderr stays inherited so diagnostics from the subprocess land in the
/// invocation's log rather than in the captured value.
pub fn run_captured(program: &str, args: &[&str], dir: &Path) -> Result<String, ExecError> {
    let command = render(program, args);
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stderr(Stdio::inherit())
        .output()
        .map_err(|source| ExecError::Spawn {
            command: command.clone(),
            source,
        })?;

    check(command, output.status)?;
    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}

/// run a caller-supplied command line through the system shell, streams
/// inherited
///
/// the string is handed to `sh -c` as-is, so compound and pipeline
/// commands work; the caller is trusted.
pub fn run_shell(command: &str, dir: &Path) -> Result<(), ExecError> {
    let status = Command::new("sh")
        .arg("-c")
        .arg(command)
        .current_dir(dir)
        .status()
        .map_err(|source| ExecError::Spawn {
            command: command.to_string(),
            source,
        })?;

    check(command.to_string(), status)
}

fn check(command: String, status: ExitStatus) -> Result<(), ExecError> {
    if status.success() {
        Ok(())
    } else {
        Err(ExecError::Exit { command, status })
    }
}

fn render(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_string()
    } else {
        format!("{} {}", program, args.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn here() -> &'static Path {
        Path::new(".")
    }

    #[test]
    fn captured_returns_stdout_verbatim() {
        let out = run_captured("sh", &["-c", "printf 'a\\nb\\n'"], here()).unwrap();
        assert_eq!(out, "a\nb\n");
    }

    #[test]
    fn captured_is_exactly_empty_for_silent_command() {
        let out = run_captured("true", &[], here()).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn exit_error_carries_command_line_and_status() {
        let err = run_shell("exit 3", here()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("exit 3"), "missing command: {message}");
        assert!(message.contains('3'), "missing exit code: {message}");
    }

    #[test]
    fn spawn_error_for_missing_program() {
        let err = run_inherited("definitely-not-a-real-program", &[], here()).unwrap_err();
        assert!(matches!(err, ExecError::Spawn { .. }));
    }

    #[test]
    fn shell_runs_compound_commands() {
        run_shell("true && true", here()).unwrap();
    }
}
