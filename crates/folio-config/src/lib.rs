//! Configuration document for Folio.
//!
//! The whole site is described by one YAML document (default `config.yaml`).
//! This crate provides:
//!
//! - [`Portfolio`]: typed model of the document, tolerant of missing keys
//! - [`ConfigLoader`] / [`load_config`]: memoized loading with missing-file recovery
//! - [`replace_blog_posts`]: the maintenance-time `blog_posts` rewrite
//!
//! ## Schema
//!
//! ```yaml
//! profile:
//!   name: Ada Lovelace
//!   title: ML Engineer
//!   current_role: Staff Engineer @ Analytical Engines
//!   location: London
//! social_links:
//!   GitHub: https://github.com/ada
//! skills:
//!   Languages: [Python, Rust]        # bare list
//!   MLOps:
//!     items:                         # or a mapping with `items`
//!       - name: Kubeflow
//!         level: Advanced
//!         years: 3
//! blog_posts:
//!   - title: Notes
//!     readme_path: https://raw.githubusercontent.com/ada/notes/main/README.md
//! ```
//!
//! Fields left out of the document fall back to [`Fallbacks`], which can be
//! overridden under a top-level `fallbacks:` key.

mod de;
mod loader;
mod migrate;
mod model;

use std::path::PathBuf;

pub use de::Ordered;
pub use loader::{ConfigLoader, DEFAULT_CONFIG_PATH, LoadedConfig, load_config};
pub use migrate::{RemotePost, replace_blog_posts};
pub use model::{
    BlogPost, Contact, Fallbacks, HeroMetric, PostBody, Portfolio, Profile, Project, ProjectLinks,
    Skill, SkillCategory,
};

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found where one is required.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// File exists but could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Malformed YAML or a document that does not match the schema.
    #[error("YAML parse error in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
    /// Structurally valid YAML that cannot be used.
    #[error("Configuration error: {0}")]
    Validation(String),
}
