//! Command handlers for the adogen CLI.

use adogen::cache::SpecCache;
use adogen::config;
use adogen::github::GithubClient;
use anyhow::Result;

pub mod generate;
pub mod latest;
pub mod list;
pub mod resolve;

/// Build the upstream client. The token is read from the environment once,
/// here at the CLI boundary, and passed in explicitly.
pub fn build_client() -> GithubClient {
    GithubClient::new(config::UPSTREAM_REPO, config::token_from_env())
}

/// Build the spec cache; `--no-cache` disables both reads and writes.
pub fn build_cache(no_cache: bool) -> Result<SpecCache> {
    Ok(SpecCache::new(SpecCache::default_root()?, !no_cache))
}
