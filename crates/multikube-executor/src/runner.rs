//! Subprocess invocation.

use std::ffi::OsString;
use std::io;
use std::path::PathBuf;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::result::CommandOutput;

/// Program invoked by [`KubectlRunner::new`].
pub const DEFAULT_PROGRAM: &str = "kubectl";

/// A single subprocess call against one target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
  /// Context passed as the explicit selector.
  pub target: String,
  /// Kubeconfig passed explicitly, when set.
  pub kubeconfig: Option<PathBuf>,
  /// Caller-supplied command tokens, passed through verbatim.
  pub command: Vec<String>,
}

impl Invocation {
  /// Full argument vector: `[--kubeconfig <path>] --context <target> <command...>`.
  pub fn args(&self) -> Vec<OsString> {
    let mut args = Vec::with_capacity(self.command.len() + 4);
    if let Some(path) = &self.kubeconfig {
      args.push(OsString::from("--kubeconfig"));
      args.push(path.clone().into_os_string());
    }
    args.push(OsString::from("--context"));
    args.push(OsString::from(&self.target));
    args.extend(self.command.iter().map(OsString::from));
    args
  }
}

/// Capability to run one invocation to completion.
///
/// Implementations capture stdout and stderr separately. Deadlines are owned
/// by the caller: the returned future may be dropped at any point, and
/// implementations must release the subprocess when that happens.
#[async_trait]
pub trait CommandRunner: Send + Sync {
  /// Name of the program, used when reporting spawn failures.
  fn program(&self) -> String;

  /// Run the invocation. `Err` means the process could not be started.
  async fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput>;
}

/// Runs invocations as real `kubectl` subprocesses.
#[derive(Debug, Clone)]
pub struct KubectlRunner {
  program: PathBuf,
}

impl KubectlRunner {
  /// Runner for `kubectl` resolved through `PATH`.
  pub fn new() -> Self {
    Self::with_program(DEFAULT_PROGRAM)
  }

  /// Runner for a specific executable.
  pub fn with_program(program: impl Into<PathBuf>) -> Self {
    Self {
      program: program.into(),
    }
  }
}

impl Default for KubectlRunner {
  fn default() -> Self {
    Self::new()
  }
}

#[async_trait]
impl CommandRunner for KubectlRunner {
  fn program(&self) -> String {
    self.program.to_string_lossy().into_owned()
  }

  async fn run(&self, invocation: &Invocation) -> io::Result<CommandOutput> {
    // kill_on_drop ties the child to this future, so a dispatcher deadline
    // that drops us also terminates the process.
    let output = Command::new(&self.program)
      .args(invocation.args())
      .stdin(Stdio::null())
      .stdout(Stdio::piped())
      .stderr(Stdio::piped())
      .kill_on_drop(true)
      .output()
      .await?;

    Ok(CommandOutput {
      stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
      stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
      exit_code: output.status.code(),
    })
  }
}
