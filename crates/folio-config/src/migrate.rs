//! One-shot rewrite of the `blog_posts` section.
//!
//! Operates on the raw YAML tree rather than [`Portfolio`](crate::Portfolio)
//! so that keys the model does not know about survive the rewrite, in their
//! original order.

use std::path::Path;

use serde::Serialize;
use serde_yaml::{Mapping, Value};

use crate::ConfigError;

/// Blog post entry written by the migration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RemotePost {
    pub title: String,
    pub date: String,
    pub tags: Vec<String>,
    /// URL of the README holding the post body.
    pub readme_path: String,
}

/// Replace `blog_posts` in the document at `path` with `posts`.
///
/// Other top-level keys keep their position. An empty document becomes a
/// mapping holding only `blog_posts`.
///
/// # Errors
///
/// Returns [`ConfigError::NotFound`] if the file does not exist,
/// [`ConfigError::Parse`] if it is not valid YAML, and
/// [`ConfigError::Validation`] if the top level is not a mapping.
pub fn replace_blog_posts(path: &Path, posts: &[RemotePost]) -> Result<(), ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let io_err = |source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    };

    let content = std::fs::read_to_string(path).map_err(io_err)?;
    let updated = with_blog_posts(&content, posts).map_err(|err| match err {
        MigrateError::Yaml(source) => ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        },
        MigrateError::NotMapping => ConfigError::Validation(format!(
            "{}: top level of the document must be a mapping",
            path.display()
        )),
    })?;
    std::fs::write(path, updated).map_err(io_err)?;

    tracing::info!(path = %path.display(), posts = posts.len(), "rewrote blog_posts");
    Ok(())
}

enum MigrateError {
    Yaml(serde_yaml::Error),
    NotMapping,
}

impl From<serde_yaml::Error> for MigrateError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Yaml(err)
    }
}

fn with_blog_posts(content: &str, posts: &[RemotePost]) -> Result<String, MigrateError> {
    let document: Value = if content.trim().is_empty() {
        Value::Null
    } else {
        serde_yaml::from_str(content)?
    };

    let mut root = match document {
        Value::Mapping(mapping) => mapping,
        Value::Null => Mapping::new(),
        _ => return Err(MigrateError::NotMapping),
    };
    root.insert(Value::from("blog_posts"), serde_yaml::to_value(posts)?);

    Ok(serde_yaml::to_string(&Value::Mapping(root))?)
}
