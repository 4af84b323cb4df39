use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors reading or writing the multikube config file.
#[derive(Debug, Error)]
pub enum ConfigError {
  /// No home directory to place `~/.multikube` in.
  #[error("could not determine home directory")]
  NoHomeDir,

  #[error("failed to read config {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to parse config {}: {source}", path.display())]
  Parse {
    path: PathBuf,
    source: serde_yaml::Error,
  },

  #[error("failed to serialize config: {0}")]
  Serialize(#[from] serde_yaml::Error),

  #[error("failed to write config {}: {source}", path.display())]
  Write { path: PathBuf, source: io::Error },
}
