//! Memoized configuration loading.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, LazyLock};

use folio_cache::Memo;

use crate::ConfigError;
use crate::model::Portfolio;

/// Conventional configuration filename.
pub const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Result of loading a configuration document.
#[derive(Debug, Default)]
pub struct LoadedConfig {
    /// Parsed document (empty when the file was missing).
    pub portfolio: Portfolio,
    /// User-visible warnings produced while loading.
    pub notices: Vec<String>,
}

/// Loader that parses each configuration path at most once.
///
/// Successful loads, including the empty result for a missing file, are
/// kept for the lifetime of the loader. Failed loads are not remembered.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    memo: Memo<PathBuf, Arc<LoadedConfig>>,
}

impl ConfigLoader {
    /// Create a loader with an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the configuration at `path`.
    ///
    /// A missing file yields an empty portfolio with a notice. Repeated calls
    /// with the same path return the same shared value without touching the
    /// filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed documents and
    /// [`ConfigError::Io`] when the file exists but cannot be read.
    pub fn load(&self, path: &Path) -> Result<Arc<LoadedConfig>, ConfigError> {
        if let Some(loaded) = self.memo.get(path) {
            return Ok(loaded);
        }

        let loaded = Arc::new(read_config(path)?);
        self.memo.insert(path.to_path_buf(), Arc::clone(&loaded));
        Ok(loaded)
    }
}

/// Load the configuration at `path` through a process-wide [`ConfigLoader`].
///
/// # Errors
///
/// See [`ConfigLoader::load`].
pub fn load_config(path: &Path) -> Result<Arc<LoadedConfig>, ConfigError> {
    static LOADER: LazyLock<ConfigLoader> = LazyLock::new(ConfigLoader::new);
    LOADER.load(path)
}

fn read_config(path: &Path) -> Result<LoadedConfig, ConfigError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "configuration file not found, rendering empty site");
            return Ok(LoadedConfig {
                portfolio: Portfolio::default(),
                notices: vec![missing_notice(path)],
            });
        }
        Err(source) => {
            return Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let portfolio = Portfolio::from_yaml(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!(
        path = %path.display(),
        projects = portfolio.projects.len(),
        posts = portfolio.blog_posts.len(),
        "loaded configuration"
    );

    Ok(LoadedConfig {
        portfolio,
        notices: Vec::new(),
    })
}

fn missing_notice(path: &Path) -> String {
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
    format!(
        "Configuration file `{name}` not found. \
         Please create it based on the template included in this project."
    )
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    use super::*;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.yaml");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_missing_file_returns_empty_with_notice() {
        let tmp = TempDir::new().unwrap();
        let loader = ConfigLoader::new();

        let loaded = loader.load(&tmp.path().join("config.yaml")).unwrap();

        assert_eq!(loaded.portfolio, Portfolio::default());
        assert_eq!(loaded.notices.len(), 1);
        assert!(loaded.notices[0].contains("`config.yaml` not found"));
    }

    #[test]
    fn test_empty_file_returns_empty_without_notice() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "");

        let loaded = ConfigLoader::new().load(&path).unwrap();

        assert_eq!(loaded.portfolio, Portfolio::default());
        assert!(loaded.notices.is_empty());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "profile:\n  name: [broken\n");

        let err = ConfigLoader::new().load(&path).unwrap_err();

        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("config.yaml"));
    }

    #[test]
    fn test_directory_path_is_io_error() {
        let tmp = TempDir::new().unwrap();

        let err = ConfigLoader::new().load(tmp.path()).unwrap_err();

        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_second_load_does_not_read_file() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "profile:\n  name: Ada\n");
        let loader = ConfigLoader::new();

        let first = loader.load(&path).unwrap();
        fs::write(&path, "profile:\n  name: Grace\n").unwrap();
        let second = loader.load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(second.portfolio.name(), "Ada");
    }

    #[test]
    fn test_memoized_result_survives_file_removal() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "profile:\n  name: Ada\n");
        let loader = ConfigLoader::new();

        let first = loader.load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        let second = loader.load(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
        assert!(second.notices.is_empty());
    }

    #[test]
    fn test_failed_load_is_not_memoized() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "projects: [");
        let loader = ConfigLoader::new();

        assert!(loader.load(&path).is_err());
        fs::write(&path, "projects: []").unwrap();

        assert!(loader.load(&path).is_ok());
    }

    #[test]
    fn test_distinct_paths_load_independently() {
        let tmp = TempDir::new().unwrap();
        let a = tmp.path().join("a.yaml");
        let b = tmp.path().join("b.yaml");
        fs::write(&a, "profile:\n  name: A\n").unwrap();
        fs::write(&b, "profile:\n  name: B\n").unwrap();
        let loader = ConfigLoader::new();

        assert_eq!(loader.load(&a).unwrap().portfolio.name(), "A");
        assert_eq!(loader.load(&b).unwrap().portfolio.name(), "B");
    }

    #[test]
    fn test_process_wide_loader_memoizes() {
        let tmp = TempDir::new().unwrap();
        let path = write_config(&tmp, "contact:\n  email: a@b.c\n");

        let first = load_config(&path).unwrap();
        let second = load_config(&path).unwrap();

        assert!(Arc::ptr_eq(&first, &second));
    }
}
