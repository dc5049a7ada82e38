//! asdf command line integration
//!
//! - [`runner`]: Process execution abstraction ([`CommandRunner`]) and its system implementation
//! - [`error`]: Classification of failed asdf invocations
//! - [`client`]: The list / list-all / install / where operations of the python plugin

pub mod client;
pub mod error;
pub mod runner;

pub use client::{ASDF_PROGRAM, Asdf, PYTHON_PLUGIN, parse_versions, python_executable};
pub use error::AsdfError;
pub use runner::{CommandOutput, CommandRunner, SystemRunner, ToolCommand};
