//! Error kinds for upstream access, spec selection, and code generation.
//!
//! Every kind here is unrecoverable for the unit of work that raised it:
//! single-target commands exit nonzero, the bulk loop records it per API and
//! moves on.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A requested API, version, file, or candidate does not exist upstream.
    #[error("not found: {0}")]
    NotFound(String),

    /// Several candidate spec files and no safe default. Refusing to guess;
    /// the caller should pass an explicit file name.
    #[error("ambiguous spec selection, pass --file to choose one of: [{}]", .0.join(", "))]
    AmbiguousSelection(Vec<String>),

    /// Upstream returned a non-success HTTP status.
    #[error("upstream request failed: HTTP {status} for {url}\n{body}")]
    UpstreamRequestFailed {
        status: u16,
        url: String,
        body: String,
    },

    /// The request never produced an HTTP status (DNS, TLS, connect, ...).
    #[error("upstream request failed for {url}: {message}")]
    Transport { url: String, message: String },

    /// The code generator subprocess exited nonzero.
    #[error("openapi-generator exited with status {status}\n{stderr}")]
    GeneratorFailed { status: i32, stderr: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ambiguous_selection_lists_candidates() {
        let err = Error::AmbiguousSelection(vec!["a.json".to_string(), "b.json".to_string()]);
        let msg = err.to_string();
        assert!(msg.contains("a.json"));
        assert!(msg.contains("b.json"));
        assert!(msg.contains("--file"));
    }

    #[test]
    fn test_upstream_failure_includes_status_and_body() {
        let err = Error::UpstreamRequestFailed {
            status: 403,
            url: "https://api.github.com/x".to_string(),
            body: "rate limit exceeded".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("403"));
        assert!(msg.contains("rate limit exceeded"));
    }
}
