use std::io;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::debug;

use crate::config::MultiKubeConfig;
use crate::error::ConfigError;

/// Directory under the home directory holding multikube state.
pub const CONFIG_DIR: &str = ".multikube";

/// File name of the config inside [`CONFIG_DIR`].
pub const CONFIG_FILE: &str = "config";

/// Loads and saves a [`MultiKubeConfig`] at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
  path: PathBuf,
}

impl ConfigStore {
  /// Create a store backed by the given file.
  pub fn new(path: impl Into<PathBuf>) -> Self {
    Self { path: path.into() }
  }

  /// The store at `~/.multikube/config`.
  pub fn default_location() -> Result<Self, ConfigError> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(Self::new(home.join(CONFIG_DIR).join(CONFIG_FILE)))
  }

  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Whether the config file is present.
  pub async fn exists(&self) -> bool {
    fs::try_exists(&self.path).await.unwrap_or(false)
  }

  /// Load the config. A missing or empty file yields the default config.
  pub async fn load(&self) -> Result<MultiKubeConfig, ConfigError> {
    let content = match fs::read_to_string(&self.path).await {
      Ok(content) => content,
      Err(e) if e.kind() == io::ErrorKind::NotFound => {
        debug!(path = %self.path.display(), "config_missing");
        return Ok(MultiKubeConfig::default());
      }
      Err(source) => {
        return Err(ConfigError::Read {
          path: self.path.clone(),
          source,
        });
      }
    };

    if content.trim().is_empty() {
      return Ok(MultiKubeConfig::default());
    }

    serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
      path: self.path.clone(),
      source,
    })
  }

  /// Write the config, creating the parent directory if needed.
  pub async fn save(&self, config: &MultiKubeConfig) -> Result<(), ConfigError> {
    let content = serde_yaml::to_string(config)?;

    if let Some(parent) = self.path.parent() {
      fs::create_dir_all(parent)
        .await
        .map_err(|source| ConfigError::Write {
          path: parent.to_path_buf(),
          source,
        })?;
    }

    fs::write(&self.path, content)
      .await
      .map_err(|source| ConfigError::Write {
        path: self.path.clone(),
        source,
      })?;

    debug!(
      path = %self.path.display(),
      contexts = config.contexts.len(),
      "config_saved"
    );
    Ok(())
  }

  /// Delete the config file. Returns false if there was nothing to delete.
  pub async fn remove(&self) -> Result<bool, ConfigError> {
    match fs::remove_file(&self.path).await {
      Ok(()) => Ok(true),
      Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(false),
      Err(source) => Err(ConfigError::Write {
        path: self.path.clone(),
        source,
      }),
    }
  }
}
