//! Resolve Python interpreters for tox environments through asdf
//!
//! # Modules
//!
//! - [`version`]: Version specifiers, candidate ordering and best-match selection
//! - [`asdf`]: Thin client around the `asdf` command line tool
//! - [`resolver`]: Turns a tox `basepython` into an interpreter path
//! - [`config`]: Runtime policy and host configuration
//! - [`logging`]: tracing subscriber setup for the binary

pub mod asdf;
pub mod config;
pub mod logging;
pub mod resolver;
pub mod version;
