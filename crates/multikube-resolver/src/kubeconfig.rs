use std::path::{Path, PathBuf};

use serde::Deserialize;
use tokio::fs;
use tracing::debug;

use crate::error::ResolveError;
use crate::source::TargetSource;

/// The parts of a kubeconfig file multikube reads.
///
/// Clusters, users and credentials are left to kubectl.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct KubeConfig {
  #[serde(default)]
  pub current_context: Option<String>,
  #[serde(default)]
  pub contexts: Option<Vec<NamedContext>>,
}

/// An entry of the kubeconfig `contexts` list.
///
/// Only the name is read. The context body belongs to kubectl and may have
/// any shape, including `null`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedContext {
  pub name: String,
}

/// Contexts from a single kubeconfig file.
#[derive(Debug, Clone)]
pub struct KubeconfigResolver {
  path: PathBuf,
  config: KubeConfig,
}

impl KubeconfigResolver {
  /// Read and parse the kubeconfig at `path`.
  pub async fn load(path: impl Into<PathBuf>) -> Result<Self, ResolveError> {
    let path = path.into();
    let content = fs::read_to_string(&path)
      .await
      .map_err(|source| ResolveError::Read {
        path: path.clone(),
        source,
      })?;

    Self::from_yaml(path, &content)
  }

  /// Parse kubeconfig YAML that was read from `path`.
  pub fn from_yaml(path: impl Into<PathBuf>, content: &str) -> Result<Self, ResolveError> {
    let path = path.into();
    let config = if content.trim().is_empty() {
      KubeConfig::default()
    } else {
      serde_yaml::from_str(content).map_err(|source| ResolveError::Parse {
        path: path.clone(),
        source,
      })?
    };

    let resolver = Self { path, config };
    debug!(
      path = %resolver.path.display(),
      contexts = resolver.context_entries().len(),
      "kubeconfig_loaded"
    );
    Ok(resolver)
  }

  /// Context names in file order.
  pub fn contexts(&self) -> Vec<String> {
    self
      .context_entries()
      .iter()
      .map(|c| c.name.clone())
      .collect()
  }

  /// The kubeconfig's `current-context`, if set.
  pub fn current_context(&self) -> Option<&str> {
    self
      .config
      .current_context
      .as_deref()
      .filter(|c| !c.is_empty())
  }

  /// Path the kubeconfig was loaded from.
  pub fn kubeconfig_path(&self) -> &Path {
    &self.path
  }

  fn context_entries(&self) -> &[NamedContext] {
    self.config.contexts.as_deref().unwrap_or_default()
  }
}

impl TargetSource for KubeconfigResolver {
  fn targets(&self) -> Vec<String> {
    self.contexts()
  }
}
