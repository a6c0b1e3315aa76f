//! Local spec-document cache.
//!
//! Fetched documents are stored under a per-user cache root keyed by
//! {ref, api, version, filename}. A hit short-circuits the network fetch.
//! Entries that do not parse as JSON are treated as misses so a truncated
//! write never poisons later runs.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

pub struct SpecCache {
    root: PathBuf,
    enabled: bool,
}

impl SpecCache {
    pub fn new(root: PathBuf, enabled: bool) -> Self {
        Self { root, enabled }
    }

    /// Default per-user cache root, e.g. ~/.cache/adogen on Linux.
    pub fn default_root() -> Result<PathBuf> {
        dirs::cache_dir()
            .map(|dir| dir.join("adogen"))
            .context("Could not determine user cache directory")
    }

    fn entry_path(&self, git_ref: &str, api: &str, version: &str, file: &str) -> PathBuf {
        self.root.join(git_ref).join(api).join(version).join(file)
    }

    /// Cached document text, or None on miss, disabled cache, or a cached
    /// entry that is not valid JSON.
    pub fn get(&self, git_ref: &str, api: &str, version: &str, file: &str) -> Option<String> {
        if !self.enabled {
            return None;
        }
        let contents = fs::read_to_string(self.entry_path(git_ref, api, version, file)).ok()?;
        if serde_json::from_str::<serde_json::Value>(&contents).is_err() {
            return None;
        }
        Some(contents)
    }

    /// Store a fetched document. No-op when the cache is disabled.
    pub fn put(
        &self,
        git_ref: &str,
        api: &str,
        version: &str,
        file: &str,
        contents: &str,
    ) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let path = self.entry_path(git_ref, api, version, file);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create cache directory {}", parent.display()))?;
        }
        fs::write(&path, contents)
            .with_context(|| format!("Failed to write cache entry {}", path.display()))
    }
}
