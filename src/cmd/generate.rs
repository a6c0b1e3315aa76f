//! Generate command: the full resolve -> fetch -> generate -> scaffold
//! pipeline for one API version.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};

use adogen::cache::SpecCache;
use adogen::generator;
use adogen::github::GithubClient;
use adogen::scaffold::{self, PackageMeta};
use adogen::upstream;

/// Everything one generation run needs besides the client and cache.
pub struct GenerateParams<'a> {
    pub api: &'a str,
    pub api_version: &'a str,
    pub git_ref: &'a str,
    pub file: Option<&'a str>,
    pub out_dir: &'a Path,
    pub scope: Option<&'a str>,
    pub pkg_version: &'a str,
}

/// Where one generated package landed.
pub struct GeneratedPackage {
    pub spec_file: String,
    pub pkg_root: PathBuf,
}

pub fn cmd_generate(
    client: &GithubClient,
    cache: &SpecCache,
    params: &GenerateParams,
) -> Result<()> {
    println!(
        "{} Generating {} {} from {}...",
        "→".cyan(),
        params.api,
        params.api_version,
        params.git_ref
    );
    let package = generate_one(client, cache, params)?;
    println!(
        "{} {} ({}) -> {}",
        "✓".green(),
        params.api,
        package.spec_file,
        package.pkg_root.display()
    );
    Ok(())
}

/// Run the pipeline for a single `{api, version}`. Shared with the bulk
/// generate-latest loop, which maps failures into its per-API report.
pub fn generate_one(
    client: &GithubClient,
    cache: &SpecCache,
    params: &GenerateParams,
) -> Result<GeneratedPackage> {
    let spec_file = upstream::resolve_spec_file(
        client,
        params.git_ref,
        params.api,
        params.api_version,
        params.file,
    )?;
    let document = upstream::fetch_spec(
        client,
        cache,
        params.git_ref,
        params.api,
        params.api_version,
        &spec_file,
    )?;

    // Generator input and output both live under the OS temp root; the
    // package tree is assembled from there.
    let workdir = tempfile::Builder::new()
        .prefix("adogen-")
        .tempdir()
        .context("Failed to create temporary working directory")?;
    let input = workdir.path().join(&spec_file);
    fs::write(&input, &document)
        .with_context(|| format!("Failed to write spec document {}", input.display()))?;

    let meta = PackageMeta {
        api: params.api,
        api_version: params.api_version,
        git_ref: params.git_ref,
        scope: params.scope,
        pkg_version: params.pkg_version,
    };
    let properties = vec![
        ("npmName".to_string(), meta.package_name()),
        ("npmVersion".to_string(), params.pkg_version.to_string()),
        ("supportsES6".to_string(), "true".to_string()),
    ];

    let generated = workdir.path().join("generated");
    generator::run_generator(&input, &generated, &properties)?;

    let pkg_root = params.out_dir.join(params.api);
    scaffold::copy_tree(&generated, &pkg_root.join("src"))?;
    scaffold::write_index(&pkg_root.join("src"))?;
    scaffold::write_package_files(&pkg_root, &meta)?;

    Ok(GeneratedPackage {
        spec_file,
        pkg_root,
    })
}
