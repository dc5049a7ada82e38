//! Synchronous process execution for asdf

use std::fmt;
use std::io;
use std::process::Command;

#[cfg(test)]
use mockall::automock;
use tracing::{debug, trace};

/// Exit code a shell reports when the command does not exist
pub const COMMAND_NOT_FOUND: i32 = 127;

/// A command line to run, e.g. `asdf list python`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ToolCommand {
    pub fn new<I, S>(program: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    /// First argument, i.e. the asdf subcommand
    pub fn action(&self) -> Option<&str> {
        self.args.first().map(String::as_str)
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

/// Captured result of a finished process
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    pub code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: 0,
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code,
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }

    /// stdout followed by stderr, as a shell merging both streams would show
    pub fn combined(&self) -> String {
        let mut combined = self.stdout.clone();
        combined.push_str(&self.stderr);
        combined
    }
}

/// Runs external commands to completion
#[cfg_attr(test, automock)]
pub trait CommandRunner {
    fn run(&self, command: &ToolCommand) -> io::Result<CommandOutput>;
}

/// Runs commands as real child processes
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, command: &ToolCommand) -> io::Result<CommandOutput> {
        debug!("Executing: {command}");

        let output = match Command::new(&command.program)
            .args(&command.args)
            .output()
        {
            Ok(output) => output,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!("{} not found: {e}", command.program);
                return Ok(CommandOutput::failure(
                    COMMAND_NOT_FOUND,
                    format!("{}: command not found", command.program),
                ));
            }
            Err(e) => return Err(e),
        };

        let result = CommandOutput {
            code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        };

        debug!("{command} exited with {}", result.code);
        trace!("stdout: {}", result.stdout);
        if !result.stderr.is_empty() {
            trace!("stderr: {}", result.stderr);
        }

        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_command_displays_as_command_line() {
        let command = ToolCommand::new("asdf", ["where", "python", "3.6.0"]);

        assert_eq!(command.to_string(), "asdf where python 3.6.0");
        assert_eq!(command.action(), Some("where"));
    }

    #[test]
    fn combined_output_appends_stderr() {
        let output = CommandOutput {
            code: 1,
            stdout: "partial\n".to_string(),
            stderr: "boom".to_string(),
        };

        assert_eq!(output.combined(), "partial\nboom");
        assert!(!output.is_success());
    }

    #[test]
    fn system_runner_reports_missing_program_as_127() {
        let command = ToolCommand::new("tox-asdf-definitely-not-a-real-program", ["list"]);

        let output = SystemRunner.run(&command).unwrap();

        assert_eq!(output.code, COMMAND_NOT_FOUND);
    }

    #[cfg(unix)]
    #[test]
    fn system_runner_captures_exit_code_and_output() {
        let command = ToolCommand::new("sh", ["-c", "echo out; echo err >&2; exit 3"]);

        let output = SystemRunner.run(&command).unwrap();

        assert_eq!(output.code, 3);
        assert_eq!(output.stdout, "out\n");
        assert_eq!(output.stderr, "err\n");
    }
}
