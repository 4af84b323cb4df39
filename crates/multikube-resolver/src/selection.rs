use tracing::debug;

use crate::error::ResolveError;
use crate::source::TargetSource;

/// Inputs that decide which contexts a run targets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSelection {
  /// Contexts named with `--contexts`.
  pub requested: Vec<String>,
  /// `--all-contexts` was given.
  pub all: bool,
  /// Contexts saved in the multikube config.
  pub configured: Vec<String>,
}

/// Pick the contexts for a run.
///
/// Explicitly requested contexts come first, then `all`, then the configured
/// contexts, and finally every context the source knows. Named contexts are
/// filtered against the source. An empty result is [`ResolveError::NoTargets`].
pub fn select_targets(
  source: &dyn TargetSource,
  selection: &TargetSelection,
) -> Result<Vec<String>, ResolveError> {
  let (origin, targets) = if !selection.requested.is_empty() {
    ("flag", filter_logged(source, &selection.requested))
  } else if selection.all {
    ("all", source.targets())
  } else if !selection.configured.is_empty() {
    ("config", filter_logged(source, &selection.configured))
  } else {
    ("all", source.targets())
  };

  debug!(origin, targets = ?targets, "targets_selected");

  if targets.is_empty() {
    return Err(ResolveError::NoTargets);
  }
  Ok(targets)
}

fn filter_logged(source: &dyn TargetSource, requested: &[String]) -> Vec<String> {
  let filtered = source.filter_targets(requested);
  for name in requested {
    if !filtered.contains(name) {
      debug!(context = %name, "unknown_context_dropped");
    }
  }
  filtered
}
