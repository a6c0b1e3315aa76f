//! Layout of the upstream spec repository and the list/resolve/fetch steps.
//!
//! The repo publishes one directory per API under `specification/`, one
//! subdirectory per version track, and one or more OpenAPI JSON documents
//! inside each. Everything here composes the GitHub client, the selector and
//! the cache; no new decisions are made in this module.

use anyhow::Result;

use crate::cache::SpecCache;
use crate::config::SPEC_ROOT;
use crate::github::{EntryKind, GithubClient};
use crate::select;

/// API directory names under the spec root, sorted for stable output.
pub fn list_apis(client: &GithubClient, git_ref: &str) -> Result<Vec<String>> {
    let mut apis: Vec<String> = client
        .list_dir(git_ref, SPEC_ROOT)?
        .into_iter()
        .filter(|entry| entry.kind == EntryKind::Dir)
        .map(|entry| entry.name)
        .collect();
    apis.sort();
    Ok(apis)
}

/// Version directory names for one API, unordered (rank them as needed).
pub fn list_versions(client: &GithubClient, git_ref: &str, api: &str) -> Result<Vec<String>> {
    let path = format!("{}/{}", SPEC_ROOT, api);
    Ok(client
        .list_dir(git_ref, &path)?
        .into_iter()
        .filter(|entry| entry.kind == EntryKind::Dir)
        .map(|entry| entry.name)
        .collect())
}

/// JSON document names inside one API version directory.
pub fn list_spec_files(
    client: &GithubClient,
    git_ref: &str,
    api: &str,
    version: &str,
) -> Result<Vec<String>> {
    let path = format!("{}/{}/{}", SPEC_ROOT, api, version);
    Ok(client
        .list_dir(git_ref, &path)?
        .into_iter()
        .filter(|entry| entry.kind == EntryKind::File && entry.name.ends_with(".json"))
        .map(|entry| entry.name)
        .collect())
}

/// Decide which document to use for `{api, version}`.
pub fn resolve_spec_file(
    client: &GithubClient,
    git_ref: &str,
    api: &str,
    version: &str,
    override_name: Option<&str>,
) -> Result<String> {
    let candidates = list_spec_files(client, git_ref, api, version)?;
    let patterns = select::preferred_patterns(api);
    Ok(select::select(&candidates, override_name, &patterns)?)
}

/// Repo-relative path of a spec document.
pub fn spec_path(api: &str, version: &str, file: &str) -> String {
    format!("{}/{}/{}/{}", SPEC_ROOT, api, version, file)
}

/// Fetch a spec document, going through the cache.
pub fn fetch_spec(
    client: &GithubClient,
    cache: &SpecCache,
    git_ref: &str,
    api: &str,
    version: &str,
    file: &str,
) -> Result<String> {
    if let Some(cached) = cache.get(git_ref, api, version, file) {
        return Ok(cached);
    }
    let contents = client.fetch_raw(git_ref, &spec_path(api, version, file))?;
    cache.put(git_ref, api, version, file, &contents)?;
    Ok(contents)
}
