//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use picker_catalog::InMemoryCatalog;

use crate::config::{CliConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
    /// The config file in use, if one was found.
    pub config_file: Option<PathBuf>,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_file) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            output,
            cwd,
            config_file,
        })
    }

    /// Directory that relative paths in the config are resolved against.
    pub fn base_dir(&self) -> PathBuf {
        self.config_file
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.cwd.clone())
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }

    /// Load the configured catalog fixture.
    pub async fn catalog(&self) -> Result<InMemoryCatalog> {
        let fixture = &self.config.catalog.fixture;
        let path = if Path::new(fixture).is_absolute() {
            PathBuf::from(fixture)
        } else {
            self.base_dir().join(fixture)
        };

        self.output.debug(&format!("Loading catalog from {}", path.display()));
        InMemoryCatalog::from_json_file(&path)
            .await
            .with_context(|| format!("Failed to load catalog: {}", path.display()))
    }
}

/// Find a config file in the directory tree, starting at `start`.
pub fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
    let mut current = start.to_path_buf();
    loop {
        for name in &CONFIG_FILE_NAMES {
            let config_path = current.join(name);
            if config_path.exists() {
                if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                    return Some((config, config_path));
                }
            }
        }

        if !current.pop() {
            break;
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_config_in_parent() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("picker.toml"),
            "[catalog]\nfixture = \"shop.json\"\n",
        )
        .unwrap();
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, path) = find_config(&nested).unwrap();
        assert_eq!(config.catalog.fixture, "shop.json");
        assert_eq!(path, dir.path().join("picker.toml"));
    }

    #[test]
    fn test_toml_preferred_over_json() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("picker.toml"), "[catalog]\nfixture = \"a.json\"\n").unwrap();
        std::fs::write(dir.path().join("picker.json"), r#"{"catalog": {"fixture": "b.json"}}"#).unwrap();

        let (config, _) = find_config(dir.path()).unwrap();
        assert_eq!(config.catalog.fixture, "a.json");
    }

    #[tokio::test]
    async fn test_fixture_resolved_against_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("shop.json"), r#"[{"id": 1, "title": "Towel"}]"#).unwrap();
        let config_path = dir.path().join("picker.toml");
        std::fs::write(&config_path, "[catalog]\nfixture = \"shop.json\"\n").unwrap();

        let ctx = Context::load(config_path.to_str(), Output::new(false, true)).unwrap();
        let catalog = ctx.catalog().await.unwrap();
        assert_eq!(catalog.len(), 1);
    }
}
