//! Per-target execution errors.

use std::time::Duration;

/// Errors that can end a single target's invocation.
///
/// None of these abort a run. Each is recorded in the failing target's
/// [`ExecutionResult`](crate::ExecutionResult) and rendered inline by the
/// output merger.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TargetError {
  /// The subprocess could not be started.
  #[error("failed to start {program}: {message}")]
  Spawn { program: String, message: String },

  /// The subprocess exited with a nonzero status.
  #[error("{message}")]
  Execution {
    message: String,
    exit_code: Option<i32>,
  },

  /// The per-target deadline expired and the subprocess was killed.
  #[error("timed out after {timeout:?}")]
  Timeout { timeout: Duration },

  /// The run was cancelled before this target finished.
  #[error("cancelled")]
  Cancelled,

  /// The worker task ended abnormally.
  #[error("worker failed: {message}")]
  Worker { message: String },
}

impl TargetError {
  /// Create an execution error from the captured stderr of a failed process.
  ///
  /// Trailing whitespace is trimmed. An empty stderr falls back to the exit
  /// status so the rendered error is never blank.
  pub fn from_stderr(stderr: &str, exit_code: Option<i32>) -> Self {
    let trimmed = stderr.trim_end();
    let message = if !trimmed.is_empty() {
      trimmed.to_string()
    } else {
      match exit_code {
        Some(code) => format!("exit status {}", code),
        None => "terminated by signal".to_string(),
      }
    };

    Self::Execution { message, exit_code }
  }

  /// The process exit code, when the error carries one.
  pub fn exit_code(&self) -> Option<i32> {
    match self {
      Self::Execution { exit_code, .. } => *exit_code,
      _ => None,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_from_stderr_trims_trailing_whitespace() {
    let err = TargetError::from_stderr("error: the server doesn't have a resource type\n\n", Some(1));

    assert_eq!(
      err.to_string(),
      "error: the server doesn't have a resource type"
    );
    assert_eq!(err.exit_code(), Some(1));
  }

  #[test]
  fn test_from_stderr_empty_uses_exit_status() {
    let err = TargetError::from_stderr("  \n", Some(2));
    assert_eq!(err.to_string(), "exit status 2");

    let err = TargetError::from_stderr("", None);
    assert_eq!(err.to_string(), "terminated by signal");
    assert_eq!(err.exit_code(), None);
  }

  #[test]
  fn test_display() {
    let err = TargetError::Timeout {
      timeout: Duration::from_secs(30),
    };
    assert_eq!(err.to_string(), "timed out after 30s");

    let err = TargetError::Spawn {
      program: "kubectl".to_string(),
      message: "No such file or directory (os error 2)".to_string(),
    };
    assert_eq!(
      err.to_string(),
      "failed to start kubectl: No such file or directory (os error 2)"
    );
    assert_eq!(err.exit_code(), None);
  }
}
