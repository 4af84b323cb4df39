//! Tabular and grouped merge algorithms.

use multikube_executor::ExecutionResult;
use tracing::debug;

use crate::header::is_header_line;
use crate::mode::OutputMode;

/// Label of the column prepended to tabular output.
pub const CLUSTER_LABEL: &str = "CLUSTER";

/// Separator between the cluster column and the original line.
const COLUMN_GAP: &str = "   ";

/// Merged text plus whether any context failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergedOutput {
  pub text: String,
  pub any_failed: bool,
}

/// Merge results with the algorithm selected by `mode`.
///
/// Never fails: per-context errors are rendered inline and reflected in
/// [`MergedOutput::any_failed`].
pub fn merge(results: &[ExecutionResult], mode: OutputMode) -> MergedOutput {
  let text = match mode {
    OutputMode::Tabular => merge_tabular(results),
    OutputMode::Grouped => merge_grouped(results),
  };

  let failed = results.iter().filter(|r| !r.is_success()).count();
  debug!(
    mode = ?mode,
    results = results.len(),
    failed,
    bytes = text.len(),
    "output_merged"
  );

  MergedOutput {
    text,
    any_failed: failed > 0,
  }
}

/// Merge table output under a single header with a leading `CLUSTER` column.
///
/// The first header found is printed once, later ones are dropped. Failed
/// contexts contribute a single `# Error from cluster ...` comment line.
pub fn merge_tabular(results: &[ExecutionResult]) -> String {
  let width = results
    .iter()
    .map(|r| r.target().chars().count())
    .fold(CLUSTER_LABEL.len(), usize::max);

  let mut merged = String::new();
  let mut header_written = false;

  for result in results {
    let output = match result.outcome() {
      Ok(output) => output,
      Err(e) => {
        merged.push_str(&format!(
          "# Error from cluster {}: {}\n",
          result.target(),
          e
        ));
        continue;
      }
    };

    let body = output.strip_suffix('\n').unwrap_or(output);
    if body.is_empty() {
      continue;
    }

    for (i, line) in body.split('\n').enumerate() {
      if i == 0 && is_header_line(line) {
        if !header_written {
          push_row(&mut merged, CLUSTER_LABEL, line, width);
          header_written = true;
        }
        continue;
      }

      push_row(&mut merged, result.target(), line, width);
    }
  }

  merged
}

/// Merge free-form output as one delimited block per context.
pub fn merge_grouped(results: &[ExecutionResult]) -> String {
  let mut merged = String::new();

  for result in results {
    match result.outcome() {
      Ok(output) => {
        merged.push_str(&format!("=== Cluster: {} ===\n", result.target()));
        if !output.is_empty() {
          merged.push_str(output);
          if !output.ends_with('\n') {
            merged.push('\n');
          }
        }
      }
      Err(e) => {
        merged.push_str(&format!(
          "=== Cluster: {} (Error: {}) ===\n",
          result.target(),
          e
        ));
      }
    }
    merged.push('\n');
  }

  merged
}

fn push_row(merged: &mut String, label: &str, line: &str, width: usize) {
  merged.push_str(&format!("{:<width$}{}{}\n", label, COLUMN_GAP, line));
}
