//! Bulk generate-latest command.
//!
//! Iterates every API upstream, picks its latest version track, and runs the
//! generation pipeline. Each API yields an explicit outcome; the loop never
//! aborts early, and the full report is printed at the end.

use anyhow::Result;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::{Path, PathBuf};

use adogen::cache::SpecCache;
use adogen::github::GithubClient;
use adogen::upstream;
use adogen::version;

use crate::cmd::generate::{generate_one, GenerateParams};

/// Result of processing one API in the bulk loop.
pub enum ApiOutcome {
    Generated {
        api: String,
        api_version: String,
        pkg_root: PathBuf,
    },
    Failed {
        api: String,
        error: String,
    },
}

pub struct BulkReport {
    pub outcomes: Vec<ApiOutcome>,
}

impl BulkReport {
    pub fn failed(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| matches!(o, ApiOutcome::Failed { .. }))
            .count()
    }

    pub fn generated(&self) -> usize {
        self.outcomes.len() - self.failed()
    }
}

pub fn cmd_generate_latest(
    client: &GithubClient,
    cache: &SpecCache,
    git_ref: &str,
    out_dir: &Path,
    scope: Option<&str>,
    pkg_version: &str,
) -> Result<()> {
    let apis = upstream::list_apis(client, git_ref)?;
    if apis.is_empty() {
        println!("{}", "No APIs found at the spec root.".yellow());
        return Ok(());
    }

    println!(
        "\n{} Generating latest SDKs for {} APIs from {}...\n",
        "→".cyan(),
        apis.len(),
        git_ref
    );

    let pb = ProgressBar::new(apis.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-"),
    );

    let mut outcomes = Vec::with_capacity(apis.len());
    for api in &apis {
        pb.set_message(api.clone());
        outcomes.push(process_api(
            client, cache, git_ref, api, out_dir, scope, pkg_version,
        ));
        pb.inc(1);
    }
    pb.finish_and_clear();

    let report = BulkReport { outcomes };
    print_report(&report);

    if report.failed() > 0 {
        anyhow::bail!(
            "{} of {} APIs failed to generate",
            report.failed(),
            report.outcomes.len()
        );
    }
    Ok(())
}

/// One API, one outcome. Any error in the pipeline becomes a Failed entry
/// rather than aborting the loop.
fn process_api(
    client: &GithubClient,
    cache: &SpecCache,
    git_ref: &str,
    api: &str,
    out_dir: &Path,
    scope: Option<&str>,
    pkg_version: &str,
) -> ApiOutcome {
    let result = upstream::list_versions(client, git_ref, api).and_then(|versions| {
        let api_version = version::latest(&versions).ok_or_else(|| {
            anyhow::Error::from(adogen::error::Error::NotFound(format!(
                "no version directories for API '{}'",
                api
            )))
        })?;
        let params = GenerateParams {
            api,
            api_version: &api_version,
            git_ref,
            file: None,
            out_dir,
            scope,
            pkg_version,
        };
        let package = generate_one(client, cache, &params)?;
        Ok((api_version, package))
    });

    match result {
        Ok((api_version, package)) => ApiOutcome::Generated {
            api: api.to_string(),
            api_version,
            pkg_root: package.pkg_root,
        },
        Err(e) => ApiOutcome::Failed {
            api: api.to_string(),
            error: format!("{:#}", e),
        },
    }
}

fn print_report(report: &BulkReport) {
    for outcome in &report.outcomes {
        match outcome {
            ApiOutcome::Generated {
                api,
                api_version,
                pkg_root,
            } => {
                println!(
                    "{} {} {} -> {}",
                    "✓".green(),
                    api,
                    api_version,
                    pkg_root.display()
                );
            }
            ApiOutcome::Failed { api, error } => {
                eprintln!("{} {}: {}", "✗".red(), api, error);
            }
        }
    }
    println!(
        "\n{} generated, {} failed",
        report.generated().to_string().green(),
        report.failed().to_string().red()
    );
}
