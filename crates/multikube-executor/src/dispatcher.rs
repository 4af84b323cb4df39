//! Fan-out dispatcher.

use std::sync::Arc;
use std::time::{Duration, Instant};

use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, instrument};

use crate::error::TargetError;
use crate::request::ExecutionRequest;
use crate::result::ExecutionResult;
use crate::runner::{CommandRunner, Invocation, KubectlRunner};

/// Runs one command against many targets concurrently.
///
/// Each target gets its own tokio task, its own deadline and its own child
/// cancellation token. [`Dispatcher::execute`] returns once every worker has
/// reached a terminal state.
pub struct Dispatcher {
  runner: Arc<dyn CommandRunner>,
}

impl Dispatcher {
  /// Create a dispatcher that starts subprocesses through `runner`.
  pub fn new(runner: Arc<dyn CommandRunner>) -> Self {
    Self { runner }
  }

  /// Create a dispatcher backed by the real `kubectl` binary.
  pub fn kubectl() -> Self {
    Self::new(Arc::new(KubectlRunner::new()))
  }

  /// Execute the request against all of its targets.
  ///
  /// The returned list has one entry per target, in request order, no matter
  /// which worker finished first. Cancelling `cancel` stops every worker that
  /// is still running; their results carry [`TargetError::Cancelled`].
  #[instrument(
    name = "dispatch",
    skip(self, request, cancel),
    fields(
      targets = request.targets().len(),
    )
  )]
  pub async fn execute(
    &self,
    request: &ExecutionRequest,
    cancel: CancellationToken,
  ) -> Vec<ExecutionResult> {
    let execution_id = uuid::Uuid::new_v4().to_string();
    let started = Instant::now();

    info!(
      execution_id = %execution_id,
      command = ?request.command(),
      timeout = ?request.timeout(),
      "dispatch_started"
    );

    let handles: Vec<_> = request
      .targets()
      .iter()
      .map(|target| {
        let invocation = Invocation {
          target: target.clone(),
          kubeconfig: request.kubeconfig().map(|p| p.to_path_buf()),
          command: request.command().to_vec(),
        };

        tokio::spawn(run_target(
          Arc::clone(&self.runner),
          invocation,
          request.timeout(),
          cancel.child_token(),
          execution_id.clone(),
        ))
      })
      .collect();

    let joined = futures::future::join_all(handles).await;

    let results: Vec<ExecutionResult> = joined
      .into_iter()
      .zip(request.targets())
      .map(|(joined, target)| match joined {
        Ok(result) => result,
        Err(e) => {
          error!(
            execution_id = %execution_id,
            target = %target,
            error = %e,
            "worker_failed"
          );
          ExecutionResult::failure(
            target.clone(),
            TargetError::Worker {
              message: e.to_string(),
            },
          )
        }
      })
      .collect();

    let failed = results.iter().filter(|r| !r.is_success()).count();
    info!(
      execution_id = %execution_id,
      succeeded = results.len() - failed,
      failed,
      elapsed_ms = elapsed_ms(started),
      "dispatch_completed"
    );

    results
  }
}

/// Run one target until it succeeds, fails, times out or is cancelled.
#[instrument(
  name = "target",
  skip_all,
  fields(
    execution_id = %execution_id,
    target = %invocation.target,
  )
)]
async fn run_target(
  runner: Arc<dyn CommandRunner>,
  invocation: Invocation,
  timeout: Duration,
  cancel: CancellationToken,
  execution_id: String,
) -> ExecutionResult {
  let started = Instant::now();
  debug!(args = ?invocation.args(), "target_started");

  // Losing branches are dropped, which kills the subprocess.
  let outcome = tokio::select! {
    biased;
    _ = cancel.cancelled() => Err(TargetError::Cancelled),
    output = runner.run(&invocation) => match output {
      Ok(output) => output.into_outcome(),
      Err(e) => Err(TargetError::Spawn {
        program: runner.program(),
        message: e.to_string(),
      }),
    },
    _ = tokio::time::sleep(timeout) => Err(TargetError::Timeout { timeout }),
  };

  let elapsed_ms = elapsed_ms(started);
  match &outcome {
    Ok(stdout) => {
      info!(elapsed_ms, bytes = stdout.len(), "target_completed");
    }
    Err(TargetError::Timeout { .. }) => {
      info!(elapsed_ms, "target_timed_out");
    }
    Err(TargetError::Cancelled) => {
      info!(elapsed_ms, "target_cancelled");
    }
    Err(e) => {
      info!(elapsed_ms, exit_code = ?e.exit_code(), error = %e, "target_failed");
    }
  }

  ExecutionResult::new(invocation.target, outcome)
}

fn elapsed_ms(started: Instant) -> u64 {
  started.elapsed().as_millis() as u64
}
