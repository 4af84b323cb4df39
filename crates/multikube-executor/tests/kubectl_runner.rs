//! Integration tests for the dispatcher driving real subprocesses.
//!
//! A small shell script stands in for kubectl. It echoes the context it was
//! given and behaves according to the first command token. Contexts whose
//! name starts with `slow` never finish.

#![cfg(unix)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::PathBuf;
use std::sync::{Arc, LazyLock};
use std::time::{Duration, Instant};

use multikube_executor::{Dispatcher, ExecutionRequest, KubectlRunner, TargetError};
use tokio_util::sync::CancellationToken;

const FAKE_KUBECTL: &str = r#"#!/bin/sh
if [ "$1" = "--kubeconfig" ]; then
  echo "kubeconfig=$2"
  shift 2
fi
context="$2"
shift 2
case "$context" in
  slow*) exec sleep 30 ;;
esac
case "$1" in
  get)
    echo "NAME      READY   STATUS"
    echo "pod-$context   1/1     Running"
    ;;
  fail)
    echo "should not be read"
    echo "error: no route to $context" >&2
    echo "" >&2
    exit 3
    ;;
  warn)
    echo "Warning: deprecated" >&2
    echo "fine"
    ;;
  *)
    echo "unknown command $1" >&2
    exit 1
    ;;
esac
"#;

/// The script is written once, before any test spawns a process, so no
/// forked child can inherit an open write handle to it.
static FAKE: LazyLock<(tempfile::TempDir, PathBuf)> = LazyLock::new(|| {
  let dir = tempfile::tempdir().expect("failed to create temp dir");
  let path = dir.path().join("kubectl");
  fs::write(&path, FAKE_KUBECTL).expect("failed to write fake kubectl");
  fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
    .expect("failed to make fake kubectl executable");
  (dir, path)
});

fn dispatcher() -> Dispatcher {
  Dispatcher::new(Arc::new(KubectlRunner::with_program(&FAKE.1)))
}

fn request(targets: &[&str], command: &[&str], timeout: Duration) -> ExecutionRequest {
  ExecutionRequest::new(
    targets.iter().map(|t| t.to_string()).collect(),
    command.iter().map(|t| t.to_string()).collect(),
    timeout,
  )
}

#[tokio::test]
async fn test_captures_stdout_per_context() {
  let results = dispatcher()
    .execute(
      &request(&["alpha", "beta"], &["get", "pods"], Duration::from_secs(10)),
      CancellationToken::new(),
    )
    .await;

  assert_eq!(results.len(), 2);
  assert_eq!(results[0].target(), "alpha");
  assert_eq!(
    results[0].output(),
    Some("NAME      READY   STATUS\npod-alpha   1/1     Running\n")
  );
  assert_eq!(results[1].target(), "beta");
  assert_eq!(
    results[1].output(),
    Some("NAME      READY   STATUS\npod-beta   1/1     Running\n")
  );
}

#[tokio::test]
async fn test_stderr_is_kept_separate() {
  let results = dispatcher()
    .execute(
      &request(&["alpha"], &["warn"], Duration::from_secs(10)),
      CancellationToken::new(),
    )
    .await;

  assert_eq!(results[0].output(), Some("fine\n"));
}

#[tokio::test]
async fn test_nonzero_exit_reports_trimmed_stderr() {
  let results = dispatcher()
    .execute(
      &request(&["gamma"], &["fail"], Duration::from_secs(10)),
      CancellationToken::new(),
    )
    .await;

  assert_eq!(
    results[0].error(),
    Some(&TargetError::Execution {
      message: "error: no route to gamma".to_string(),
      exit_code: Some(3),
    })
  );
  assert_eq!(results[0].output(), None);
}

#[tokio::test]
async fn test_kubeconfig_is_passed_explicitly() {
  let request =
    request(&["alpha"], &["get", "pods"], Duration::from_secs(10)).with_kubeconfig("/tmp/kc");

  let results = dispatcher().execute(&request, CancellationToken::new()).await;

  let output = results[0].output().expect("should succeed");
  assert!(output.starts_with("kubeconfig=/tmp/kc\n"), "{output}");
}

#[tokio::test]
async fn test_missing_executable_is_spawn_error() {
  let runner = KubectlRunner::with_program("/nonexistent/path/to/kubectl");
  let dispatcher = Dispatcher::new(Arc::new(runner));

  let results = dispatcher
    .execute(
      &request(&["alpha"], &["get", "pods"], Duration::from_secs(10)),
      CancellationToken::new(),
    )
    .await;

  match results[0].error() {
    Some(TargetError::Spawn { program, .. }) => {
      assert_eq!(program, "/nonexistent/path/to/kubectl");
    }
    other => panic!("expected spawn error, got {:?}", other),
  }
}

#[tokio::test]
async fn test_slow_context_is_killed_at_deadline() {
  let started = Instant::now();
  let request = request(
    &["fast", "slow-east", "also-fast"],
    &["get", "pods"],
    Duration::from_millis(500),
  );

  let results = dispatcher().execute(&request, CancellationToken::new()).await;

  assert!(started.elapsed() < Duration::from_secs(10));
  assert!(results[0].is_success());
  assert_eq!(
    results[1].error(),
    Some(&TargetError::Timeout {
      timeout: Duration::from_millis(500)
    })
  );
  assert!(results[2].is_success());
}
