//! Packaging metadata written around the generator output.
//!
//! The generator produces bare TypeScript sources; this module wraps them
//! into something npm can build: a manifest, a compiler config, a README and
//! a re-export entry file. The file formats are fixed external conventions,
//! reproduced as-is.

use anyhow::{Context, Result};
use serde_json::json;
use std::fs;
use std::path::Path;

/// Package naming and version info for one generated SDK.
pub struct PackageMeta<'a> {
    pub api: &'a str,
    pub api_version: &'a str,
    pub git_ref: &'a str,
    /// npm scope, with or without the leading '@'.
    pub scope: Option<&'a str>,
    pub pkg_version: &'a str,
}

impl PackageMeta<'_> {
    /// npm package name: "@scope/api" when a scope is set, else the api key.
    pub fn package_name(&self) -> String {
        match self.scope {
            Some(scope) => {
                let scope = scope.strip_prefix('@').unwrap_or(scope);
                format!("@{}/{}", scope, self.api)
            }
            None => self.api.to_string(),
        }
    }

    fn description(&self) -> String {
        format!(
            "TypeScript client for the Azure DevOps {} API (version {}), generated from {}@{}",
            self.api,
            self.api_version,
            crate::config::UPSTREAM_REPO,
            self.git_ref
        )
    }
}

/// Fixed compiler configuration emitted next to every generated package.
const TSCONFIG: &str = r#"{
  "compilerOptions": {
    "target": "ES2020",
    "module": "ES2020",
    "moduleResolution": "node",
    "lib": ["ES2020", "DOM"],
    "declaration": true,
    "strict": true,
    "esModuleInterop": true,
    "skipLibCheck": true,
    "rootDir": "src",
    "outDir": "dist"
  },
  "include": ["src"]
}
"#;

/// Write package.json, tsconfig.json and README.md under `pkg_root`.
pub fn write_package_files(pkg_root: &Path, meta: &PackageMeta) -> Result<()> {
    fs::create_dir_all(pkg_root)
        .with_context(|| format!("Failed to create package directory {}", pkg_root.display()))?;

    let manifest = json!({
        "name": meta.package_name(),
        "version": meta.pkg_version,
        "description": meta.description(),
        "type": "module",
        "main": "dist/index.js",
        "types": "dist/index.d.ts",
        "files": ["dist"],
        "scripts": {
            "build": "tsc"
        }
    });
    let manifest_path = pkg_root.join("package.json");
    fs::write(
        &manifest_path,
        format!("{}\n", serde_json::to_string_pretty(&manifest)?),
    )
    .with_context(|| format!("Failed to write {}", manifest_path.display()))?;

    fs::write(pkg_root.join("tsconfig.json"), TSCONFIG).context("Failed to write tsconfig.json")?;

    let readme = format!(
        "# {}\n\n{}\n\nRegenerate with `adogen generate --api {} --api-version {}`.\n",
        meta.package_name(),
        meta.description(),
        meta.api,
        meta.api_version
    );
    fs::write(pkg_root.join("README.md"), readme).context("Failed to write README.md")?;

    Ok(())
}

/// Known generator submodules, in re-export order. Directories re-export via
/// their own index; single files re-export by module name.
const KNOWN_DIRS: &[&str] = &["apis", "models"];
const KNOWN_FILES: &[&str] = &["configuration", "runtime"];

/// Synthesize the re-export entry `index.ts` inside the copied source tree.
///
/// Re-exports whichever known generator submodules are present; falls back
/// to the generic `api.ts` entry some profiles emit; if nothing known is
/// found, leaves a comment instead of a broken import.
pub fn write_index(src_dir: &Path) -> Result<()> {
    let mut lines: Vec<String> = Vec::new();

    for dir in KNOWN_DIRS {
        if src_dir.join(dir).is_dir() {
            lines.push(format!("export * from './{}';", dir));
        }
    }
    for file in KNOWN_FILES {
        if src_dir.join(format!("{}.ts", file)).is_file() {
            lines.push(format!("export * from './{}';", file));
        }
    }

    if lines.is_empty() {
        if src_dir.join("api.ts").is_file() {
            lines.push("export * from './api';".to_string());
        } else {
            lines.push("// No known generator entrypoint found in this output.".to_string());
        }
    }

    let index_path = src_dir.join("index.ts");
    fs::write(&index_path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write {}", index_path.display()))
}

/// Recursively copy the generator output tree into the package source dir.
pub fn copy_tree(from: &Path, to: &Path) -> Result<()> {
    fs::create_dir_all(to)
        .with_context(|| format!("Failed to create directory {}", to.display()))?;
    for entry in fs::read_dir(from)
        .with_context(|| format!("Failed to read directory {}", from.display()))?
    {
        let entry = entry?;
        let target = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            copy_tree(&entry.path(), &target)?;
        } else {
            fs::copy(entry.path(), &target)
                .with_context(|| format!("Failed to copy to {}", target.display()))?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta<'a>(scope: Option<&'a str>) -> PackageMeta<'a> {
        PackageMeta {
            api: "build",
            api_version: "7.1",
            git_ref: "master",
            scope,
            pkg_version: "0.1.0",
        }
    }

    #[test]
    fn test_package_name_with_and_without_scope() {
        assert_eq!(meta(None).package_name(), "build");
        assert_eq!(meta(Some("org")).package_name(), "@org/build");
        assert_eq!(meta(Some("@org")).package_name(), "@org/build");
    }

    #[test]
    fn test_index_reexports_known_submodules() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("apis")).unwrap();
        fs::create_dir(dir.path().join("models")).unwrap();
        fs::write(dir.path().join("runtime.ts"), "export class Configuration {}").unwrap();

        write_index(dir.path()).unwrap();
        let index = fs::read_to_string(dir.path().join("index.ts")).unwrap();
        assert_eq!(
            index,
            "export * from './apis';\nexport * from './models';\nexport * from './runtime';\n"
        );
    }

    #[test]
    fn test_index_falls_back_to_generic_entry() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("api.ts"), "export const x = 1;").unwrap();

        write_index(dir.path()).unwrap();
        let index = fs::read_to_string(dir.path().join("index.ts")).unwrap();
        assert_eq!(index, "export * from './api';\n");
    }

    #[test]
    fn test_index_comment_when_nothing_known() {
        let dir = tempfile::tempdir().unwrap();
        write_index(dir.path()).unwrap();
        let index = fs::read_to_string(dir.path().join("index.ts")).unwrap();
        assert!(index.starts_with("// No known generator entrypoint"));
    }
}
