//! CLI entry point and command dispatch for adogen.

mod cmd;

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;

use adogen::config::DEFAULT_REF;

#[derive(Parser)]
#[command(name = "adogen")]
#[command(version, long_version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_SHA"), " ", env!("BUILD_DATE"), ")"))]
#[command(about = "Generate TypeScript SDK packages from Azure DevOps OpenAPI specs", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List APIs, or the version tracks of one API (latest first)
    List {
        /// API to list version tracks for (omit to list all APIs)
        #[arg(long)]
        api: Option<String>,
        /// Upstream revision (branch, tag, or commit)
        #[arg(long, default_value = DEFAULT_REF)]
        r#ref: String,
        /// JSON output
        #[arg(long)]
        json: bool,
    },
    /// Print the spec document that would be used for an API version
    Resolve {
        /// API directory name, e.g. "build"
        #[arg(long)]
        api: String,
        /// Version track, e.g. "7.1" or "7.2-preview"
        #[arg(long)]
        api_version: String,
        /// Upstream revision (branch, tag, or commit)
        #[arg(long, default_value = DEFAULT_REF)]
        r#ref: String,
        /// Explicit spec file name, bypassing automatic selection
        #[arg(long)]
        file: Option<String>,
    },
    /// Generate an SDK package for one API version
    Generate {
        /// API directory name, e.g. "build"
        #[arg(long)]
        api: String,
        /// Version track, e.g. "7.1" or "7.2-preview"
        #[arg(long)]
        api_version: String,
        /// Upstream revision (branch, tag, or commit)
        #[arg(long, default_value = DEFAULT_REF)]
        r#ref: String,
        /// Explicit spec file name, bypassing automatic selection
        #[arg(long)]
        file: Option<String>,
        /// Directory to write the package into
        #[arg(long, default_value = "out")]
        out: PathBuf,
        /// npm scope for the package name, e.g. "@myorg"
        #[arg(long)]
        scope: Option<String>,
        /// Version for the generated package manifest
        #[arg(long, default_value = "0.1.0")]
        pkg_version: String,
        /// Bypass the local spec cache
        #[arg(long)]
        no_cache: bool,
    },
    /// Generate SDK packages for the latest version of every API
    GenerateLatest {
        /// Upstream revision (branch, tag, or commit)
        #[arg(long, default_value = DEFAULT_REF)]
        r#ref: String,
        /// Directory to write the packages into
        #[arg(long, default_value = "out")]
        out: PathBuf,
        /// npm scope for the package names, e.g. "@myorg"
        #[arg(long)]
        scope: Option<String>,
        /// Version for the generated package manifests
        #[arg(long, default_value = "0.1.0")]
        pkg_version: String,
        /// Bypass the local spec cache
        #[arg(long)]
        no_cache: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::List { api, r#ref, json } => {
            let client = cmd::build_client();
            cmd::list::cmd_list(&client, api.as_deref(), &r#ref, json)
        }
        Commands::Resolve {
            api,
            api_version,
            r#ref,
            file,
        } => {
            let client = cmd::build_client();
            cmd::resolve::cmd_resolve(&client, &api, &api_version, &r#ref, file.as_deref())
        }
        Commands::Generate {
            api,
            api_version,
            r#ref,
            file,
            out,
            scope,
            pkg_version,
            no_cache,
        } => {
            let client = cmd::build_client();
            let cache = cmd::build_cache(no_cache)?;
            let params = cmd::generate::GenerateParams {
                api: &api,
                api_version: &api_version,
                git_ref: &r#ref,
                file: file.as_deref(),
                out_dir: &out,
                scope: scope.as_deref(),
                pkg_version: &pkg_version,
            };
            cmd::generate::cmd_generate(&client, &cache, &params)
        }
        Commands::GenerateLatest {
            r#ref,
            out,
            scope,
            pkg_version,
            no_cache,
        } => {
            let client = cmd::build_client();
            let cache = cmd::build_cache(no_cache)?;
            cmd::latest::cmd_generate_latest(
                &client,
                &cache,
                &r#ref,
                &out,
                scope.as_deref(),
                &pkg_version,
            )
        }
        Commands::Completions { shell } => {
            let mut command = Cli::command();
            generate(shell, &mut command, "adogen", &mut io::stdout());
            Ok(())
        }
    }
}
