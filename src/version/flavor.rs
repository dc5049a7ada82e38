//! Known Python runtime flavors
//!
//! asdf's python plugin reports alternative interpreters with a flavor prefix,
//! e.g. `pypy3.8-7.3.11` or `anaconda3-2020.11`.

/// Flavor prefixes recognized in version strings
pub const KNOWN_FLAVORS: &[&str] = &[
    "activepython",
    "anaconda",
    "anaconda2",
    "anaconda3",
    "graalpython",
    "ironpython",
    "jython",
    "mambaforge",
    "micropython",
    "miniconda",
    "miniconda2",
    "miniconda3",
    "miniforge3",
    "pypy",
    "pypy2",
    "pypy2.7",
    "pypy3",
    "pypy3.3",
    "pypy3.5",
    "pypy3.6",
    "pypy3.7",
    "pypy3.8",
    "pypy3.9",
    "pyston",
    "stackless",
];

/// Returns the longest known flavor that `value` starts with
pub fn known_flavor(value: &str) -> Option<&'static str> {
    KNOWN_FLAVORS
        .iter()
        .copied()
        .filter(|flavor| value.starts_with(flavor))
        .max_by_key(|flavor| flavor.len())
}
