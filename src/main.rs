use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

mod cli;
mod config_cmd;
mod duration;
mod run;

use cli::{Cli, Commands, RESERVED_FIRST_ARGS, separate_args};
use multikube_config::ConfigStore;

fn main() -> Result<ExitCode> {
  init_tracing();

  let args: Vec<String> = std::env::args_os()
    .skip(1)
    .map(|arg| arg.to_string_lossy().into_owned())
    .collect();

  let Some(first) = args.first() else {
    Cli::command().print_help()?;
    return Ok(ExitCode::SUCCESS);
  };

  if RESERVED_FIRST_ARGS.contains(&first.as_str()) {
    let cli = Cli::parse();
    return match cli.command {
      Some(Commands::Config { action }) => {
        let store = ConfigStore::default_location().context("failed to locate multikube config")?;
        let rt = tokio::runtime::Runtime::new()?;
        rt.block_on(config_cmd::run_config(
          action,
          &store,
          cli.global.kubeconfig,
          &mut std::io::stdout().lock(),
        ))?;
        Ok(ExitCode::SUCCESS)
      }
      None => {
        Cli::command().print_help()?;
        Ok(ExitCode::SUCCESS)
      }
    };
  }

  let (ours, kubectl_args) = separate_args(&args);
  let cli = Cli::try_parse_from(std::iter::once("multikubectl".to_string()).chain(ours))
    .unwrap_or_else(|e| e.exit());

  if kubectl_args.is_empty() {
    Cli::command().print_help()?;
    return Ok(ExitCode::SUCCESS);
  }

  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(run::run_kubectl(cli.global, kubectl_args))
}

/// Log to stderr so merged output on stdout stays clean. `RUST_LOG`
/// overrides the default `warn` level.
fn init_tracing() {
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

  tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .init();
}
