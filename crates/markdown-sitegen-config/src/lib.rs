use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name of the site configuration, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "sitegen.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

/// Locations of a site's inputs and output.
///
/// Missing keys fall back to the defaults, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markdown sources, mirrored into `output_dir`.
    pub content_dir: PathBuf,
    /// Assets copied verbatim into `output_dir`.
    pub static_dir: PathBuf,
    /// Cleared and rebuilt on every build.
    pub output_dir: PathBuf,
    /// HTML page template with `{{ Title }}` and `{{ Content }}` placeholders.
    pub template_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            output_dir: PathBuf::from("public"),
            template_path: PathBuf::from("template.html"),
        }
    }
}

impl Config {
    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        Ok(Some(config.expanded()))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        Self::load_from_path(Self::config_path())
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        PathBuf::from(CONFIG_FILE_NAME)
    }

    /// Expands shell variables and tilde in every path, keeping a path as
    /// written if it does not expand.
    fn expanded(self) -> Self {
        let expand = |path: PathBuf| Self::expand_path(&path).unwrap_or(path);
        Self {
            content_dir: expand(self.content_dir),
            static_dir: expand(self.static_dir),
            output_dir: expand(self.output_dir),
            template_path: expand(self.template_path),
        }
    }

    fn expand_path(path: &Path) -> Option<PathBuf> {
        let path_str = path.to_string_lossy();
        match shellexpand::full(&path_str) {
            Ok(expanded) => Some(PathBuf::from(expanded.as_ref())),
            Err(_) => None,
        }
    }
}
