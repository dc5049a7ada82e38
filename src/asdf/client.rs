//! asdf python plugin client

use std::path::{Path, PathBuf};

use tracing::{debug, info, trace};

use crate::asdf::error::AsdfError;
use crate::asdf::runner::{CommandRunner, ToolCommand};
use crate::version::{Specifier, best_version};

/// Default asdf executable, looked up on PATH
pub const ASDF_PROGRAM: &str = "asdf";

/// asdf plugin managing Python installs
pub const PYTHON_PLUGIN: &str = "python";

/// Interpreter location relative to an install root
pub const PYTHON_EXECUTABLE: &[&str] = &["bin", "python"];

/// Client for the asdf operations needed to resolve a Python interpreter
pub struct Asdf<R> {
    runner: R,
    program: String,
    plugin: String,
}

impl<R: CommandRunner> Asdf<R> {
    pub fn new(runner: R) -> Self {
        Self {
            runner,
            program: ASDF_PROGRAM.to_string(),
            plugin: PYTHON_PLUGIN.to_string(),
        }
    }

    /// Use a specific asdf executable instead of the one on PATH
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    fn command(&self, action: &str, version: Option<&str>) -> ToolCommand {
        let mut args = vec![action, self.plugin.as_str()];
        args.extend(version);
        ToolCommand::new(self.program.as_str(), args)
    }

    fn execute(&self, command: &ToolCommand) -> Result<String, AsdfError> {
        let output = self
            .runner
            .run(command)
            .map_err(|e| AsdfError::from_io(command, &e))?;

        if output.is_success() {
            Ok(output.stdout)
        } else {
            debug!("`{command}` exited with {}", output.code);
            Err(AsdfError::from_failure(command, &self.plugin, &output))
        }
    }

    /// `asdf list python`
    pub fn list_installed(&self) -> Result<Vec<String>, AsdfError> {
        let output = self.execute(&self.command("list", None))?;
        Ok(parse_versions(&output))
    }

    /// `asdf list-all python`
    pub fn list_all(&self) -> Result<Vec<String>, AsdfError> {
        let output = self.execute(&self.command("list-all", None))?;
        Ok(parse_versions(&output))
    }

    /// `asdf install python <version>`
    pub fn install(&self, version: &str) -> Result<(), AsdfError> {
        info!("Installing {} {version}", self.plugin);
        let output = self.execute(&self.command("install", Some(version)))?;
        trace!("install output: {output}");
        Ok(())
    }

    /// `asdf where python <version>`: the install root of `version`
    pub fn install_root(&self, version: &str) -> Result<PathBuf, AsdfError> {
        let output = self.execute(&self.command("where", Some(version)))?;
        Ok(PathBuf::from(output.trim()))
    }

    /// Best installed version matching `specifier`
    pub fn get_installed(&self, specifier: &Specifier) -> Result<Option<String>, AsdfError> {
        let versions = self.list_installed()?;
        debug!("Installed versions: {versions:?}");
        Ok(best_version(specifier.as_str(), &versions))
    }

    /// Path of the python executable for an installed `version`
    pub fn which(&self, version: &str) -> Result<PathBuf, AsdfError> {
        let root = self.install_root(version)?;
        Ok(python_executable(&root))
    }
}

/// Join an install root with the relative interpreter path
pub fn python_executable(root: &Path) -> PathBuf {
    PYTHON_EXECUTABLE
        .iter()
        .fold(root.to_path_buf(), |path, part| path.join(part))
}

/// One version per line; asdf marks the current version with a leading `*`
pub fn parse_versions(output: &str) -> Vec<String> {
    output
        .lines()
        .map(|line| line.trim().trim_start_matches('*').trim())
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
