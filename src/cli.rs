use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::duration::parse_duration;

/// First arguments that are handled by clap rather than passed to kubectl.
pub const RESERVED_FIRST_ARGS: &[&str] = &["config", "help", "--help", "-h", "--version", "-V"];

/// Our flags that take a value.
const VALUE_FLAGS: &[&str] = &["--kubeconfig", "--contexts", "--timeout"];

/// Our flags that take no value.
const SWITCH_FLAGS: &[&str] = &["--all-contexts"];

/// multikubectl - run kubectl commands across multiple clusters
#[derive(Parser, Debug)]
#[command(name = "multikubectl")]
#[command(version, about, long_about = None)]
#[command(after_help = "\
Any other arguments are passed to kubectl unchanged.

Examples:
  multikubectl get pods
  multikubectl --contexts=prod-east,prod-west get pods -n kube-system
  multikubectl --all-contexts get deployments
  multikubectl logs deploy/web --timeout 1m")]
pub struct Cli {
  #[command(flatten)]
  pub global: GlobalArgs,

  #[command(subcommand)]
  pub command: Option<Commands>,
}

/// Flags shared by kubectl passthrough and the `config` subcommands.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct GlobalArgs {
  /// Path to the kubeconfig file
  #[arg(long, global = true)]
  pub kubeconfig: Option<PathBuf>,

  /// Comma-separated list of contexts to use (overrides config)
  #[arg(long, value_delimiter = ',')]
  pub contexts: Vec<String>,

  /// Use all contexts from the kubeconfig (ignores config)
  #[arg(long)]
  pub all_contexts: bool,

  /// Timeout for each kubectl invocation (e.g. 30s, 1m30s)
  #[arg(long, value_parser = parse_duration, default_value = "30s")]
  pub timeout: Duration,
}

impl GlobalArgs {
  /// Requested contexts with blanks removed.
  pub fn requested_contexts(&self) -> Vec<String> {
    self
      .contexts
      .iter()
      .map(|c| c.trim())
      .filter(|c| !c.is_empty())
      .map(str::to_string)
      .collect()
  }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
  /// Manage which contexts multikubectl operates on
  ///
  /// Configuration is stored in ~/.multikube/config. When it lists contexts,
  /// only those are used by default.
  Config {
    #[command(subcommand)]
    action: ConfigCommand,
  },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommand {
  /// List all kubeconfig contexts and mark the configured ones
  List,

  /// Add contexts to the configuration
  Add {
    #[arg(required = true)]
    contexts: Vec<String>,
  },

  /// Remove contexts from the configuration
  Remove {
    #[arg(required = true)]
    contexts: Vec<String>,
  },

  /// Replace the configured contexts with a comma-separated list
  Use { contexts: String },

  /// Delete the configuration and go back to using every context
  Clear,

  /// Show the current configuration
  Show,
}

/// Split raw arguments into our own flags and the kubectl command.
///
/// Our flags may appear anywhere, as `--flag value` or `--flag=value`. A
/// value is only taken from the next argument when it does not look like a
/// flag. Everything after a bare `--` belongs to kubectl.
pub fn separate_args(args: &[String]) -> (Vec<String>, Vec<String>) {
  let mut ours = Vec::new();
  let mut kubectl = Vec::new();
  let mut iter = args.iter().peekable();

  while let Some(arg) = iter.next() {
    if arg == "--" {
      kubectl.push(arg.clone());
      kubectl.extend(iter.cloned());
      break;
    }

    let name = arg.split_once('=').map_or(arg.as_str(), |(name, _)| name);

    if VALUE_FLAGS.contains(&name) {
      ours.push(arg.clone());
      if !arg.contains('=')
        && let Some(value) = iter.next_if(|next| !next.starts_with('-'))
      {
        ours.push(value.clone());
      }
    } else if SWITCH_FLAGS.contains(&name) {
      ours.push(arg.clone());
    } else {
      kubectl.push(arg.clone());
    }
  }

  (ours, kubectl)
}
