use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use multikube_config::ConfigStore;
use multikube_executor::{Dispatcher, ExecutionRequest};
use multikube_output::{OutputMode, merge};
use multikube_resolver::{
  KubeconfigResolver, TargetSelection, resolve_kubeconfig_path, select_targets,
};

use crate::cli::GlobalArgs;

/// Run `command` against every selected context and print the merged output.
///
/// Returns failure if any context failed, after all output has been written.
pub async fn run_kubectl(global: GlobalArgs, command: Vec<String>) -> Result<ExitCode> {
  let store = ConfigStore::default_location().context("failed to locate multikube config")?;
  let saved = store
    .load()
    .await
    .context("failed to load multikube config")?;

  let kubeconfig = resolve_kubeconfig_path(global.kubeconfig.clone(), saved.kubeconfig.clone())?;
  let resolver = KubeconfigResolver::load(&kubeconfig)
    .await
    .context("failed to load kubeconfig")?;

  let selection = TargetSelection {
    requested: global.requested_contexts(),
    all: global.all_contexts,
    configured: saved.contexts,
  };
  let targets = select_targets(&resolver, &selection)?;

  let mode = OutputMode::for_command(&command);
  debug!(mode = ?mode, targets = targets.len(), "mode_selected");

  let request = ExecutionRequest::new(targets, command, global.timeout)
    .with_kubeconfig(resolver.kubeconfig_path());

  let cancel = CancellationToken::new();
  let interrupt = cancel.clone();
  tokio::spawn(async move {
    if tokio::signal::ctrl_c().await.is_ok() {
      warn!("interrupted");
      interrupt.cancel();
    }
  });

  let results = Dispatcher::kubectl().execute(&request, cancel).await;
  let merged = merge(&results, mode);

  let mut stdout = io::stdout().lock();
  stdout
    .write_all(merged.text.as_bytes())
    .and_then(|()| stdout.flush())
    .context("failed to write output")?;

  Ok(if merged.any_failed {
    ExitCode::FAILURE
  } else {
    ExitCode::SUCCESS
  })
}
