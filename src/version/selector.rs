//! Best-match selection over asdf version candidates

use crate::version::key::VersionKey;

/// Find the best (latest stable) candidate matching `requested`
///
/// A candidate matches when its text starts with `requested`. This is a plain
/// textual prefix test: `3.6` matches `3.6.1` and `3.6-dev`, and would also
/// match `3.60.0`. The highest match under [`VersionKey`] ordering is
/// returned, so a dev release only wins when nothing else matches.
///
/// Returns None when no candidate matches.
pub fn best_version<I, S>(requested: &str, candidates: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let candidates: Vec<S> = candidates.into_iter().collect();

    candidates
        .iter()
        .map(AsRef::<str>::as_ref)
        .filter(|candidate| candidate.starts_with(requested))
        .map(VersionKey::parse)
        .max()
        .map(|key| key.raw().to_string())
}
