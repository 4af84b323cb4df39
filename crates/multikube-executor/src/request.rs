//! Execution request.

use std::path::{Path, PathBuf};
use std::time::Duration;

/// Everything the dispatcher needs for one run.
///
/// Built once by the caller and only read afterwards; the dispatcher never
/// consults global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionRequest {
  targets: Vec<String>,
  command: Vec<String>,
  timeout: Duration,
  kubeconfig: Option<PathBuf>,
}

impl ExecutionRequest {
  /// Create a request for `command` against `targets`, in that order.
  pub fn new(targets: Vec<String>, command: Vec<String>, timeout: Duration) -> Self {
    Self {
      targets,
      command,
      timeout,
      kubeconfig: None,
    }
  }

  /// Pass an explicit kubeconfig path to every invocation.
  pub fn with_kubeconfig(mut self, path: impl Into<PathBuf>) -> Self {
    self.kubeconfig = Some(path.into());
    self
  }

  /// Target contexts, in output order.
  pub fn targets(&self) -> &[String] {
    &self.targets
  }

  /// Command tokens passed verbatim after the context selector.
  pub fn command(&self) -> &[String] {
    &self.command
  }

  /// Deadline applied to each target independently.
  pub fn timeout(&self) -> Duration {
    self.timeout
  }

  pub fn kubeconfig(&self) -> Option<&Path> {
    self.kubeconfig.as_deref()
  }
}
