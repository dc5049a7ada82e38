//! Ordering key for asdf python version strings

use std::cmp::Ordering;
use std::str::FromStr;

use pep508_rs::pep440_rs::Version;

use crate::version::flavor::known_flavor;

/// Structured form of a candidate such as `3.6.10`, `3.6-dev` or `pypy3.8-7.0.0`
///
/// Keys compare by release version first (PEP 440 precedence, so `3.6.10 > 3.6.2`
/// and `3.6-dev < 3.6.0`), then by the version embedded in the flavor tag,
/// then by the raw text. Candidates whose release does not parse sort below
/// every parseable one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionKey<'a> {
    raw: &'a str,
    release: Option<Version>,
    flavor_release: Option<Version>,
}

impl<'a> VersionKey<'a> {
    pub fn parse(raw: &'a str) -> Self {
        let (release_text, flavor_release) = match known_flavor(raw) {
            Some(_) => {
                let (tag, rest) = raw.split_once('-').unwrap_or((raw, raw));
                (rest, parse_flavor_release(tag))
            }
            None => (raw, None),
        };

        Self {
            raw,
            release: Version::from_str(release_text).ok(),
            flavor_release,
        }
    }

    pub fn raw(&self) -> &'a str {
        self.raw
    }
}

impl Ord for VersionKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.release
            .cmp(&other.release)
            .then_with(|| self.flavor_release.cmp(&other.flavor_release))
            .then_with(|| self.raw.cmp(other.raw))
    }
}

impl PartialOrd for VersionKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// `pypy3.8` -> `3.8`, `anaconda3` -> `3`, `pypy` -> None
fn parse_flavor_release(tag: &str) -> Option<Version> {
    let digits = tag.trim_start_matches(|c: char| c.is_ascii_alphabetic());
    if digits.is_empty() {
        return None;
    }
    Version::from_str(digits).ok()
}
