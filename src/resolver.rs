//! Python interpreter resolution for tox environments
//!
//! Sequences the asdf calls (list, optionally list-all + install, where) for a
//! `basepython` and applies the fallback policy from [`Config`].

use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::asdf::{Asdf, AsdfError, CommandRunner};
use crate::config::Config;
use crate::version::{Specifier, best_version};

/// Per-environment configuration handed over by the host
pub trait EnvConfig {
    /// The requested base interpreter, e.g. `python3.6` or `pypy3`
    fn basepython(&self) -> &str;
}

/// Minimal environment description
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestEnv {
    pub envname: String,
    pub basepython: String,
}

impl TestEnv {
    pub fn new(envname: impl Into<String>, basepython: impl Into<String>) -> Self {
        Self {
            envname: envname.into(),
            basepython: basepython.into(),
        }
    }
}

impl EnvConfig for TestEnv {
    fn basepython(&self) -> &str {
        &self.basepython
    }
}

impl EnvConfig for str {
    fn basepython(&self) -> &str {
        self
    }
}

/// Resolves interpreters through asdf under a fixed [`Config`]
pub struct PythonResolver<R> {
    asdf: Asdf<R>,
    config: Config,
}

impl<R: CommandRunner> PythonResolver<R> {
    pub fn new(asdf: Asdf<R>, config: Config) -> Self {
        Self { asdf, config }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn asdf(&self) -> &Asdf<R> {
        &self.asdf
    }

    /// Return a python executable for the environment's `basepython`
    ///
    /// `Ok(None)` means asdf has nothing to offer and the host should use its
    /// own lookup. With `no_fallback` set, every such case becomes an error
    /// instead. A failed `asdf install` always propagates.
    pub fn get_python_executable<E>(&self, env: &E) -> Result<Option<PathBuf>, AsdfError>
    where
        E: EnvConfig + ?Sized,
    {
        let basepython = env.basepython();
        let Some(specifier) = Specifier::from_basepython(basepython, &self.config) else {
            debug!("{basepython} is not handled by asdf");
            return Ok(None);
        };
        debug!("Looking up {specifier} for {basepython}");

        let installed = match self.asdf.get_installed(&specifier) {
            Ok(installed) => installed,
            Err(e) => return self.fallback(e),
        };

        let version = match installed {
            Some(version) => version,
            None if !self.config.install => {
                return self.no_candidate(AsdfError::NoCandidate {
                    specifier: specifier.to_string(),
                });
            }
            None => {
                let available = match self.asdf.list_all() {
                    Ok(available) => available,
                    Err(e) => return self.fallback(e),
                };
                let Some(version) = best_version(specifier.as_str(), &available) else {
                    return self.no_candidate(AsdfError::NoInstallCandidate {
                        specifier: specifier.to_string(),
                    });
                };
                self.asdf.install(&version)?;
                version
            }
        };

        let python = match self.asdf.which(&version) {
            Ok(python) => python,
            Err(e) => return self.fallback(e),
        };

        info!("Using {}", python.display());
        Ok(Some(python))
    }

    fn fallback(&self, err: AsdfError) -> Result<Option<PathBuf>, AsdfError> {
        error!("{err}");
        if self.config.no_fallback {
            Err(err)
        } else {
            Ok(None)
        }
    }

    fn no_candidate(&self, err: AsdfError) -> Result<Option<PathBuf>, AsdfError> {
        if self.config.no_fallback {
            Err(err)
        } else {
            debug!("{err}, falling back");
            Ok(None)
        }
    }
}
