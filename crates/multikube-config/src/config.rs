use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Saved multikube settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MultiKubeConfig {
  /// Contexts used when none are given on the command line.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub contexts: Vec<String>,

  /// Kubeconfig used when `--kubeconfig` is not given.
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub kubeconfig: Option<PathBuf>,
}

impl MultiKubeConfig {
  /// Append a context. Returns false if it was already configured.
  pub fn add_context(&mut self, context: &str) -> bool {
    if self.has_context(context) {
      return false;
    }
    self.contexts.push(context.to_string());
    true
  }

  /// Remove a context. Returns false if it was not configured.
  pub fn remove_context(&mut self, context: &str) -> bool {
    match self.contexts.iter().position(|c| c == context) {
      Some(index) => {
        self.contexts.remove(index);
        true
      }
      None => false,
    }
  }

  pub fn has_context(&self, context: &str) -> bool {
    self.contexts.iter().any(|c| c == context)
  }

  /// Replace the configured contexts.
  pub fn set_contexts(&mut self, contexts: Vec<String>) {
    self.contexts = contexts;
  }
}
