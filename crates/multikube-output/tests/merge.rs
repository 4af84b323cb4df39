//! Merge behavior over realistic kubectl output from several contexts.

use multikube_executor::{ExecutionResult, TargetError};
use multikube_output::{OutputMode, merge, merge_grouped, merge_tabular};

const PODS_EAST: &str = "\
NAME                     READY   STATUS    RESTARTS   AGE
web-6d4cf56db6-7xk2p     1/1     Running   0          3d
web-6d4cf56db6-q8jzt     1/1     Running   0          3d
";

const PODS_WEST: &str = "\
NAME                     READY   STATUS    RESTARTS   AGE
api-5f9b8c7d4-lm2nb      1/1     Running   2          12h
";

fn execution_error(message: &str) -> TargetError {
  TargetError::Execution {
    message: message.to_string(),
    exit_code: Some(1),
  }
}

#[test]
fn test_tabular_single_header_across_contexts() {
  let results = vec![
    ExecutionResult::success("east", PODS_EAST),
    ExecutionResult::success("west", PODS_WEST),
  ];

  let merged = merge_tabular(&results);
  let lines: Vec<&str> = merged.lines().collect();

  assert_eq!(lines.len(), 4);
  assert!(lines[0].starts_with("CLUSTER   NAME"));
  assert!(lines[1].starts_with("east      web-6d4cf56db6-7xk2p"));
  assert!(lines[2].starts_with("east      web-6d4cf56db6-q8jzt"));
  assert!(lines[3].starts_with("west      api-5f9b8c7d4-lm2nb"));
  assert_eq!(
    merged.matches("READY   STATUS").count(),
    1,
    "duplicate headers must be suppressed"
  );
}

#[test]
fn test_tabular_with_one_failed_context() {
  let results = vec![
    ExecutionResult::success("east", PODS_WEST),
    ExecutionResult::failure("west", execution_error("boom")),
  ];

  let merged = merge_tabular(&results);
  let lines: Vec<&str> = merged.lines().collect();

  assert_eq!(lines.len(), 3);
  assert!(lines[0].starts_with("CLUSTER"));
  assert!(lines[1].starts_with("east"));
  assert_eq!(lines[2], "# Error from cluster west: boom");
  assert!(!merged.contains("west   "));
}

#[test]
fn test_tabular_single_result_only_adds_prefix() {
  let results = vec![ExecutionResult::success("only", PODS_EAST)];

  let merged = merge_tabular(&results);
  let stripped: Vec<&str> = merged.lines().map(|line| &line[10..]).collect();
  let original: Vec<&str> = PODS_EAST.lines().collect();

  assert_eq!(stripped, original);
}

#[test]
fn test_tabular_follows_input_order() {
  let results = vec![
    ExecutionResult::success("zeta", "NAME   AGE\nz      1d\n"),
    ExecutionResult::success("alpha", "NAME   AGE\na      1d\n"),
  ];

  let merged = merge_tabular(&results);

  let zeta = merged.find("zeta").expect("zeta row");
  let alpha = merged.find("alpha").expect("alpha row");
  assert!(zeta < alpha);
}

#[test]
fn test_tabular_timeout_renders_inline() {
  let results = vec![ExecutionResult::failure(
    "slow",
    TargetError::Timeout {
      timeout: std::time::Duration::from_secs(30),
    },
  )];

  assert_eq!(
    merge_tabular(&results),
    "# Error from cluster slow: timed out after 30s\n"
  );
}

#[test]
fn test_grouped_exact_layout() {
  let results = vec![
    ExecutionResult::success("A", "abc"),
    ExecutionResult::failure("B", execution_error("boom")),
  ];

  assert_eq!(
    merge_grouped(&results),
    "=== Cluster: A ===\nabc\n\n=== Cluster: B (Error: boom) ===\n\n"
  );
}

#[test]
fn test_grouped_output_is_verbatim() {
  let logs = "2024-01-01T00:00:00Z starting\n  indented detail\n\nNAME   STATUS\n";
  let results = vec![ExecutionResult::success("east", logs)];

  assert_eq!(
    merge_grouped(&results),
    format!("=== Cluster: east ===\n{logs}\n")
  );
}

#[test]
fn test_mode_from_command_drives_merge() {
  let results = vec![
    ExecutionResult::success("east", "line\n"),
    ExecutionResult::success("west", "line\n"),
  ];

  let logs = merge(&results, OutputMode::for_command(&["logs", "web"]));
  assert!(logs.text.starts_with("=== Cluster: east ===\n"));
  assert!(!logs.any_failed);

  let get = merge(&results, OutputMode::for_command(&["get", "pods"]));
  assert_eq!(get.text, "east      line\nwest      line\n");
}

#[test]
fn test_any_failed_reflects_errors() {
  let results = vec![
    ExecutionResult::success("east", PODS_EAST),
    ExecutionResult::failure(
      "west",
      TargetError::Spawn {
        program: "kubectl".to_string(),
        message: "No such file or directory".to_string(),
      },
    ),
  ];

  let merged = merge(&results, OutputMode::Tabular);

  assert!(merged.any_failed);
  assert!(
    merged
      .text
      .contains("# Error from cluster west: failed to start kubectl: No such file or directory")
  );
}
