//! Resolve command: print the spec document that would be used.

use anyhow::Result;

use adogen::github::GithubClient;
use adogen::upstream;

pub fn cmd_resolve(
    client: &GithubClient,
    api: &str,
    api_version: &str,
    git_ref: &str,
    file: Option<&str>,
) -> Result<()> {
    let chosen = upstream::resolve_spec_file(client, git_ref, api, api_version, file)?;
    println!("{}", upstream::spec_path(api, api_version, &chosen));
    Ok(())
}
