use thiserror::Error;

use crate::asdf::runner::{COMMAND_NOT_FOUND, CommandOutput, ToolCommand};

/// Marker asdf prints when the requested plugin is not installed
pub const NO_SUCH_PLUGIN: &str = "No such plugin:";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AsdfError {
    #[error("asdf is not installed")]
    Missing,

    #[error("{plugin} plugin is missing. Install it with `asdf plugin-add {plugin}`")]
    PluginMissing { plugin: String },

    #[error("{}", command_failed_message(.command, .code, .output))]
    CommandFailed {
        command: String,
        code: i32,
        output: String,
    },

    #[error("No candidate version found for {specifier}")]
    NoCandidate { specifier: String },

    #[error("No candidate version to install found for {specifier}")]
    NoInstallCandidate { specifier: String },
}

impl AsdfError {
    /// Classify a failed asdf invocation
    pub fn from_failure(command: &ToolCommand, plugin: &str, output: &CommandOutput) -> Self {
        let combined = output.combined();

        match output.code {
            COMMAND_NOT_FOUND => AsdfError::Missing,
            1 if combined.starts_with(NO_SUCH_PLUGIN) => AsdfError::PluginMissing {
                plugin: plugin.to_string(),
            },
            code => AsdfError::CommandFailed {
                command: command.to_string(),
                code,
                output: combined.trim().to_string(),
            },
        }
    }

    /// A process that could not be started at all
    pub fn from_io(command: &ToolCommand, err: &std::io::Error) -> Self {
        if err.kind() == std::io::ErrorKind::NotFound {
            return AsdfError::Missing;
        }
        AsdfError::CommandFailed {
            command: command.to_string(),
            code: -1,
            output: err.to_string(),
        }
    }
}

fn command_failed_message(command: &str, code: &i32, output: &str) -> String {
    if output.is_empty() {
        format!("`{command}` failed with code {code}")
    } else {
        format!("`{command}` failed with code {code} and output: \n{output}")
    }
}
