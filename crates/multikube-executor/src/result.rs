//! Execution results.

use crate::error::TargetError;

/// Raw output of one subprocess invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
  /// Captured standard output.
  pub stdout: String,
  /// Captured standard error, never mixed into `stdout`.
  pub stderr: String,
  /// Exit code, `None` when the process was terminated by a signal.
  pub exit_code: Option<i32>,
}

impl CommandOutput {
  /// Whether the process exited with status zero.
  pub fn success(&self) -> bool {
    self.exit_code == Some(0)
  }

  /// Classify the output: stdout on success, a stderr-derived error otherwise.
  pub fn into_outcome(self) -> Result<String, TargetError> {
    if self.success() {
      Ok(self.stdout)
    } else {
      Err(TargetError::from_stderr(&self.stderr, self.exit_code))
    }
  }
}

/// Result of running the command against a single target.
///
/// Exactly one is created per requested target. Output is only reachable
/// when the target succeeded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
  target: String,
  outcome: Result<String, TargetError>,
}

impl ExecutionResult {
  pub fn new(target: impl Into<String>, outcome: Result<String, TargetError>) -> Self {
    Self {
      target: target.into(),
      outcome,
    }
  }

  /// A successful result carrying captured stdout.
  pub fn success(target: impl Into<String>, output: impl Into<String>) -> Self {
    Self::new(target, Ok(output.into()))
  }

  /// A failed result.
  pub fn failure(target: impl Into<String>, error: TargetError) -> Self {
    Self::new(target, Err(error))
  }

  /// The context this result belongs to.
  pub fn target(&self) -> &str {
    &self.target
  }

  pub fn is_success(&self) -> bool {
    self.outcome.is_ok()
  }

  /// Captured stdout, only for successful targets.
  pub fn output(&self) -> Option<&str> {
    self.outcome.as_deref().ok()
  }

  pub fn error(&self) -> Option<&TargetError> {
    self.outcome.as_ref().err()
  }

  pub fn outcome(&self) -> Result<&str, &TargetError> {
    self.outcome.as_deref()
  }
}
