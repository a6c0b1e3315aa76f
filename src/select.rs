//! Spec-file selection.
//!
//! A version directory upstream usually holds exactly one OpenAPI document,
//! but some hold several. Given the listing and an optional explicit
//! override, pick exactly one deterministically, or refuse with a clear
//! error rather than guess.

use crate::error::Error;

/// Default ordered name patterns for an API key.
///
/// Upstream convention names the document after the API directory, sometimes
/// pluralized ("build" -> build.json or builds.json). Earlier patterns win.
/// Callers with a different upstream convention can pass their own list to
/// [`select`].
pub fn preferred_patterns(api: &str) -> Vec<String> {
    vec![format!("{}.json", api), format!("{}s.json", api)]
}

/// Pick exactly one file name from `candidates`.
///
/// - With `override_name`: returns it iff present, else [`Error::NotFound`]
///   reporting the full candidate set.
/// - One candidate: returns it.
/// - No candidates: [`Error::NotFound`].
/// - Several candidates: first of `patterns` present wins; otherwise
///   [`Error::AmbiguousSelection`] with the full candidate set.
///
/// Pure function; no I/O, no hidden state.
pub fn select(
    candidates: &[String],
    override_name: Option<&str>,
    patterns: &[String],
) -> Result<String, Error> {
    if let Some(name) = override_name {
        if candidates.iter().any(|c| c == name) {
            return Ok(name.to_string());
        }
        return Err(Error::NotFound(format!(
            "file '{}' not in listing, available: [{}]",
            name,
            candidates.join(", ")
        )));
    }

    match candidates {
        [] => Err(Error::NotFound(
            "no candidate spec files in listing".to_string(),
        )),
        [only] => Ok(only.clone()),
        _ => {
            for pattern in patterns {
                if candidates.iter().any(|c| c == pattern) {
                    return Ok(pattern.clone());
                }
            }
            Err(Error::AmbiguousSelection(candidates.to_vec()))
        }
    }
}
