use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a run before anything is dispatched.
#[derive(Debug, Error)]
pub enum ResolveError {
  /// The kubeconfig could not be read.
  #[error("failed to read kubeconfig {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  /// The kubeconfig is not valid YAML or has an unexpected shape.
  #[error("failed to parse kubeconfig {}: {source}", path.display())]
  Parse {
    path: PathBuf,
    source: serde_yaml::Error,
  },

  /// No kubeconfig path was given and there is no home directory to look in.
  #[error("could not determine kubeconfig path: no home directory")]
  NoHomeDir,

  /// Selection left nothing to run against.
  #[error("no valid contexts found")]
  NoTargets,
}
