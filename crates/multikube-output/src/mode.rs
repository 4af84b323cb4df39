//! Choosing between tabular and grouped output.

/// kubectl subcommands whose output is not a table.
pub const NON_TABULAR_COMMANDS: &[&str] = &[
  "logs",
  "describe",
  "explain",
  "edit",
  "exec",
  "attach",
  "port-forward",
  "proxy",
  "cp",
];

/// How per-context output is combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
  /// One table with a leading `CLUSTER` column.
  #[default]
  Tabular,
  /// One delimited block per context.
  Grouped,
}

impl OutputMode {
  /// Pick the mode for a kubectl command.
  ///
  /// Only the first token is looked at, so `get pods -o yaml` is still
  /// tabular. An empty command is tabular.
  pub fn for_command<S: AsRef<str>>(command: &[S]) -> Self {
    match command.first() {
      Some(verb) if NON_TABULAR_COMMANDS.contains(&verb.as_ref()) => OutputMode::Grouped,
      _ => OutputMode::Tabular,
    }
  }
}
