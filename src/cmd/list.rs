//! List command: APIs at the spec root, or version tracks for one API.

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use adogen::github::GithubClient;
use adogen::upstream;
use adogen::version;

pub fn cmd_list(client: &GithubClient, api: Option<&str>, git_ref: &str, json: bool) -> Result<()> {
    match api {
        None => list_apis(client, git_ref, json),
        Some(api) => list_versions(client, git_ref, api, json),
    }
}

fn list_apis(client: &GithubClient, git_ref: &str, json: bool) -> Result<()> {
    let apis = upstream::list_apis(client, git_ref)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&json!({ "apis": apis }))?);
        return Ok(());
    }
    if apis.is_empty() {
        println!("{}", "No APIs found at the spec root.".yellow());
        return Ok(());
    }
    for api in &apis {
        println!("{}", api);
    }
    Ok(())
}

fn list_versions(client: &GithubClient, git_ref: &str, api: &str, json: bool) -> Result<()> {
    let versions = upstream::list_versions(client, git_ref, api)?;
    let ranked = version::rank_descending(&versions);
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({
                "api": api,
                "versions": ranked,
                "latest": version::latest(&versions),
            }))?
        );
        return Ok(());
    }
    if ranked.is_empty() {
        println!("{}", format!("No versions found for '{}'.", api).yellow());
        return Ok(());
    }
    for (i, track) in ranked.iter().enumerate() {
        if i == 0 {
            println!("{} {}", track, "(latest)".green());
        } else {
            println!("{}", track);
        }
    }
    Ok(())
}
