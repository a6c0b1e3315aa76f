//! # adogen - TypeScript SDK generation from Azure DevOps OpenAPI specs
//!
//! adogen turns the OpenAPI documents published in
//! `MicrosoftDocs/vsts-rest-api-specs` into buildable npm packages. The
//! pipeline is linear: list the upstream repo, resolve which document to
//! use, fetch it (through a local cache), hand it to `openapi-generator-cli`,
//! and scaffold packaging metadata around the output.
//!
//! ## Modules
//!
//! - [`select`] - picks one spec document out of a version directory listing
//! - [`version`] - ranks version-track labels to find the latest stable one
//! - [`github`] - blocking client for the upstream contents/raw API
//! - [`upstream`] - repo layout: list APIs/versions/files, resolve, fetch
//! - [`cache`] - per-user spec document cache
//! - [`generator`] - `openapi-generator-cli` subprocess invocation
//! - [`scaffold`] - package.json / tsconfig / README / index.ts synthesis
//! - [`error`] - the error kinds the pipeline can fail with
//!
//! ## Example
//!
//! ```
//! use adogen::version::{latest, rank_descending};
//!
//! let tracks = vec![
//!     "7.0".to_string(),
//!     "7.2-preview".to_string(),
//!     "7.1".to_string(),
//! ];
//! assert_eq!(rank_descending(&tracks)[0], "7.1");
//! assert_eq!(latest(&tracks), Some("7.1".to_string()));
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod generator;
pub mod github;
pub mod scaffold;
pub mod select;
pub mod upstream;
pub mod version;
