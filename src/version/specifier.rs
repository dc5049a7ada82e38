//! Requested version tokens

use std::fmt;

use crate::config::Config;

/// Prefix of tox `basepython` values handled as CPython versions
pub const PYTHON_PREFIX: &str = "python";

/// A requested version, e.g. `3.6`, `pypy3` or `pypy3.8`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Specifier {
    token: String,
}

impl Specifier {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }

    /// Map a tox `basepython` onto a specifier
    ///
    /// - `python3.6` -> `3.6`
    /// - `pypy` -> the configured pypy2 version
    /// - `pypy3` -> the configured pypy3 version
    ///
    /// Anything else is not ours to resolve and yields None.
    pub fn from_basepython(basepython: &str, config: &Config) -> Option<Self> {
        if let Some(rest) = basepython.strip_prefix(PYTHON_PREFIX) {
            return Some(Self::new(rest));
        }

        match basepython {
            "pypy" => Some(Self::new(config.pypy2_version.as_str())),
            "pypy3" => Some(Self::new(config.pypy3_version.as_str())),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &str {
        &self.token
    }
}

impl fmt::Display for Specifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.token)
    }
}

impl AsRef<str> for Specifier {
    fn as_ref(&self) -> &str {
        &self.token
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("python3.6", Some("3.6"))]
    #[case("python2.7", Some("2.7"))]
    #[case("python3", Some("3"))]
    #[case("python", Some(""))]
    #[case("pypy", Some("pypy2.7"))]
    #[case("pypy3", Some("pypy3.8"))]
    #[case("pypy3.9", None)]
    #[case("jython", None)]
    #[case("*TEST*", None)]
    #[case("/usr/bin/python3", None)]
    fn from_basepython_with_defaults(#[case] basepython: &str, #[case] expected: Option<&str>) {
        let specifier = Specifier::from_basepython(basepython, &Config::default());

        assert_eq!(specifier.as_ref().map(Specifier::as_str), expected);
    }

    #[test]
    fn from_basepython_uses_configured_pypy_versions() {
        let config = Config {
            pypy2_version: "pypy2.7-7.3".to_string(),
            pypy3_version: "pypy3.9".to_string(),
            ..Config::default()
        };

        let pypy = Specifier::from_basepython("pypy", &config).unwrap();
        let pypy3 = Specifier::from_basepython("pypy3", &config).unwrap();

        assert_eq!(pypy.as_str(), "pypy2.7-7.3");
        assert_eq!(pypy3.as_str(), "pypy3.9");
    }

    #[test]
    fn displays_as_token() {
        assert_eq!(Specifier::new("pypy3.8").to_string(), "pypy3.8");
    }
}
