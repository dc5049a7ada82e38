//! Scripted stand-in for the asdf executable

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;

use tox_asdf::asdf::{CommandOutput, CommandRunner, ToolCommand, python_executable};

/// Root of the fake asdf installs directory
pub const INSTALLS: &str = "/path/to/installs";

/// Fake asdf answering list / list-all / where / install for the python plugin
pub struct FakeAsdf {
    pythons: Vec<String>,
    all_pythons: Vec<String>,
    installed: bool,
    plugin_installed: bool,
    error: Option<(Option<String>, i32, String)>,
    calls: RefCell<Vec<ToolCommand>>,
}

impl FakeAsdf {
    pub fn new() -> Self {
        Self {
            pythons: Vec::new(),
            all_pythons: Vec::new(),
            installed: true,
            plugin_installed: true,
            error: None,
            calls: RefCell::new(Vec::new()),
        }
    }

    /// Versions reported by `asdf list python`
    pub fn with_pythons(mut self, pythons: &[&str]) -> Self {
        self.pythons = pythons.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Versions reported by `asdf list-all python`
    pub fn with_all_pythons(mut self, pythons: &[&str]) -> Self {
        self.all_pythons = pythons.iter().map(|s| s.to_string()).collect();
        self
    }

    /// Every invocation exits 127
    pub fn asdf_missing(mut self) -> Self {
        self.installed = false;
        self
    }

    /// Plugin operations exit 1 with `No such plugin: python`
    pub fn plugin_missing(mut self) -> Self {
        self.plugin_installed = false;
        self
    }

    /// Fail every invocation with `code` and `text` on stderr
    pub fn with_error(mut self, code: i32, text: &str) -> Self {
        self.error = Some((None, code, text.to_string()));
        self
    }

    /// Fail only the `action` subcommand
    pub fn with_error_on(mut self, action: &str, code: i32, text: &str) -> Self {
        self.error = Some((Some(action.to_string()), code, text.to_string()));
        self
    }

    pub fn python_home(&self, python: &str) -> PathBuf {
        PathBuf::from(INSTALLS).join("python").join(python)
    }

    pub fn python_bin(&self, python: &str) -> PathBuf {
        python_executable(&self.python_home(python))
    }

    /// Command lines received so far
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().iter().map(ToString::to_string).collect()
    }

    fn plugin_call(&self, args: &[String], length: usize, output: impl FnOnce() -> String) -> CommandOutput {
        if args.len() != length || args[1] != "python" {
            return invalid_command(args);
        }
        if !self.plugin_installed {
            return CommandOutput::failure(1, "No such plugin: python");
        }
        CommandOutput::success(output())
    }
}

fn invalid_command(args: &[String]) -> CommandOutput {
    CommandOutput::failure(
        -1,
        format!("Invalid asdf command syntax: asdf {}", args.join(" ")),
    )
}

impl CommandRunner for FakeAsdf {
    fn run(&self, command: &ToolCommand) -> io::Result<CommandOutput> {
        self.calls.borrow_mut().push(command.clone());

        if let Some((None, code, text)) = &self.error {
            return Ok(CommandOutput::failure(*code, text.as_str()));
        }
        if command.program != "asdf" || !self.installed {
            return Ok(CommandOutput::failure(127, ""));
        }

        let args = &command.args;
        let Some(action) = command.action() else {
            return Ok(invalid_command(args));
        };

        if let Some((Some(failing), code, text)) = &self.error {
            if failing == action {
                return Ok(CommandOutput::failure(*code, text.as_str()));
            }
        }

        let output = match action {
            "list" => self.plugin_call(args, 2, || self.pythons.join("\n")),
            "list-all" => self.plugin_call(args, 2, || self.all_pythons.join("\n")),
            "where" => self.plugin_call(args, 3, || {
                self.python_home(&args[2]).display().to_string()
            }),
            "install" => self.plugin_call(args, 3, String::new),
            _ => invalid_command(args),
        };

        Ok(output)
    }
}
