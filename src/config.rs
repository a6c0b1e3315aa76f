//! Upstream repository constants and environment boundary.

/// GitHub repository holding the published OpenAPI documents.
pub const UPSTREAM_REPO: &str = "MicrosoftDocs/vsts-rest-api-specs";

/// Default revision to read from when no --ref is given.
pub const DEFAULT_REF: &str = "master";

/// Top-level directory in the upstream repo containing one directory per API.
pub const SPEC_ROOT: &str = "specification";

/// Environment variable holding an optional GitHub bearer token.
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";

/// Read the optional upstream auth token from the environment.
///
/// This is the only place ambient credentials are touched; the CLI reads the
/// token once at startup and passes it into [`crate::github::GithubClient`]
/// explicitly. Empty values count as absent.
pub fn token_from_env() -> Option<String> {
    std::env::var(TOKEN_ENV_VAR)
        .ok()
        .filter(|token| !token.is_empty())
}
