use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

// =============================================================================
// Defaults
// =============================================================================

/// Version substituted for `basepython = pypy`
pub const DEFAULT_PYPY2_VERSION: &str = "pypy2.7";

/// Version substituted for `basepython = pypy3`
pub const DEFAULT_PYPY3_VERSION: &str = "pypy3.8";

/// Log verbosity derived from the number of `-v` flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Verbosity {
    /// Warnings and errors only
    #[default]
    Quiet,
    /// `-v`: report the resolved interpreter
    Info,
    /// `-vv`: trace every asdf invocation
    Debug,
}

impl Verbosity {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Verbosity::Quiet,
            1 => Verbosity::Info,
            _ => Verbosity::Debug,
        }
    }

    /// Default `tracing` filter directive for this verbosity
    pub fn filter_directive(self) -> &'static str {
        match self {
            Verbosity::Quiet => "warn",
            Verbosity::Info => "info",
            Verbosity::Debug => "debug",
        }
    }
}

/// Resolution policy, built once per tox run and read by every resolution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub verbosity: Verbosity,
    /// Install the best available version when nothing installed matches
    pub install: bool,
    /// Fail instead of letting tox fall back to its own interpreter lookup
    pub no_fallback: bool,
    pub pypy2_version: String,
    pub pypy3_version: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::default(),
            install: false,
            no_fallback: false,
            pypy2_version: DEFAULT_PYPY2_VERSION.to_string(),
            pypy3_version: DEFAULT_PYPY3_VERSION.to_string(),
        }
    }
}

impl Config {
    /// Apply the `[asdf]` section of the host configuration
    pub fn with_host_config(mut self, host: &HostConfig) -> Self {
        self.pypy2_version = host.asdf.pypy2.clone();
        self.pypy3_version = host.asdf.pypy3.clone();
        self
    }
}

/// Host (tox) configuration consumed by the plugin
#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct HostConfig {
    pub asdf: AsdfSection,
}

/// The `[asdf]` section
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct AsdfSection {
    pub pypy2: String,
    pub pypy3: String,
}

impl Default for AsdfSection {
    fn default() -> Self {
        Self {
            pypy2: DEFAULT_PYPY2_VERSION.to_string(),
            pypy3: DEFAULT_PYPY3_VERSION.to_string(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid configuration in {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl HostConfig {
    /// Load host configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load host configuration if `path` exists, defaults otherwise
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}

/// Returns the path to the default host configuration file.
/// Uses $XDG_CONFIG_HOME/tox-asdf/config.json if XDG_CONFIG_HOME is set,
/// otherwise falls back to ~/.config/tox-asdf/config.json,
/// or ./tox-asdf/config.json if neither is available.
pub fn config_path() -> PathBuf {
    config_path_with_env(std::env::var("XDG_CONFIG_HOME").ok(), dirs::home_dir())
}

fn config_path_with_env(xdg_config_home: Option<String>, home_dir: Option<PathBuf>) -> PathBuf {
    let config_dir = xdg_config_home
        .map(PathBuf::from)
        .or_else(|| home_dir.map(|home| home.join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));

    config_dir.join("tox-asdf").join("config.json")
}
