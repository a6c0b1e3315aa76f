//! Minimal blocking client for the GitHub contents API.
//!
//! Two operations: list a directory at a ref, fetch raw file bytes at a ref.
//! The bearer token is a constructor argument so callers (and tests) control
//! credentials explicitly; this module never reads the environment.

use serde::Deserialize;
use ureq::Agent;
use url::Url;

use crate::error::Error;

/// What a directory listing entry names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Dir,
    /// Symlinks, submodules and anything GitHub adds later; ignored by callers.
    #[serde(other)]
    Other,
}

/// One entry of an upstream directory listing, consumed read-only.
#[derive(Debug, Clone, Deserialize)]
pub struct Entry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

pub struct GithubClient {
    agent: Agent,
    repo: String,
    token: Option<String>,
}

impl GithubClient {
    /// `repo` is "owner/name"; `token` is an optional bearer token for
    /// authenticated requests (higher rate limits, private repos).
    pub fn new(repo: impl Into<String>, token: Option<String>) -> Self {
        Self {
            agent: Agent::new(),
            repo: repo.into(),
            token,
        }
    }

    /// List the entries of `path` in the repo at `git_ref`.
    ///
    /// A 404 maps to [`Error::NotFound`] (missing API, version, or ref);
    /// any other non-success status is [`Error::UpstreamRequestFailed`].
    pub fn list_dir(&self, git_ref: &str, path: &str) -> Result<Vec<Entry>, Error> {
        let url = self.contents_url(git_ref, path)?;
        let response = self.get(url.as_str())?;
        response
            .into_json::<Vec<Entry>>()
            .map_err(|e| Error::Transport {
                url: url.to_string(),
                message: format!("bad listing payload: {}", e),
            })
    }

    /// Fetch the raw text of `path` in the repo at `git_ref`.
    pub fn fetch_raw(&self, git_ref: &str, path: &str) -> Result<String, Error> {
        let raw = format!(
            "https://raw.githubusercontent.com/{}/{}/{}",
            self.repo, git_ref, path
        );
        let url = Url::parse(&raw).map_err(|e| Error::Transport {
            url: raw.clone(),
            message: e.to_string(),
        })?;
        let response = self.get(url.as_str())?;
        response.into_string().map_err(|e| Error::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })
    }

    fn contents_url(&self, git_ref: &str, path: &str) -> Result<Url, Error> {
        let base = format!("https://api.github.com/repos/{}/contents/{}", self.repo, path);
        let mut url = Url::parse(&base).map_err(|e| Error::Transport {
            url: base.clone(),
            message: e.to_string(),
        })?;
        url.query_pairs_mut().append_pair("ref", git_ref);
        Ok(url)
    }

    fn get(&self, url: &str) -> Result<ureq::Response, Error> {
        let mut request = self
            .agent
            .get(url)
            .set("User-Agent", "adogen")
            .set("Accept", "application/vnd.github+json");
        if let Some(token) = &self.token {
            request = request.set("Authorization", &format!("Bearer {}", token));
        }

        match request.call() {
            Ok(response) => Ok(response),
            Err(ureq::Error::Status(404, _)) => {
                Err(Error::NotFound(format!("upstream path does not exist: {}", url)))
            }
            Err(ureq::Error::Status(status, response)) => {
                let body = response.into_string().unwrap_or_default();
                Err(Error::UpstreamRequestFailed {
                    status,
                    url: url.to_string(),
                    body,
                })
            }
            Err(e) => Err(Error::Transport {
                url: url.to_string(),
                message: e.to_string(),
            }),
        }
    }
}
