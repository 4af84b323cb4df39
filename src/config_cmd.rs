use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use multikube_config::{ConfigStore, MultiKubeConfig};
use multikube_resolver::{KubeconfigResolver, resolve_kubeconfig_path};

use crate::cli::ConfigCommand;

/// Run a `config` subcommand against `store`, writing the report to `out`.
///
/// Skipped contexts are reported on stderr.
pub async fn run_config(
  action: ConfigCommand,
  store: &ConfigStore,
  kubeconfig: Option<PathBuf>,
  out: &mut dyn Write,
) -> Result<()> {
  let config = store
    .load()
    .await
    .context("failed to load multikube config")?;

  match action {
    ConfigCommand::List => {
      let resolver = load_kubeconfig(kubeconfig, &config).await?;
      list(store, &config, &resolver, out).await
    }
    ConfigCommand::Add { contexts } => {
      let resolver = load_kubeconfig(kubeconfig, &config).await?;
      add(store, config, &resolver, &contexts, out).await
    }
    ConfigCommand::Remove { contexts } => remove(store, config, &contexts, out).await,
    ConfigCommand::Use { contexts } => {
      let resolver = load_kubeconfig(kubeconfig, &config).await?;
      use_contexts(store, config, &resolver, &contexts, out).await
    }
    ConfigCommand::Clear => clear(store, out).await,
    ConfigCommand::Show => show(store, &config, out).await,
  }
}

async fn load_kubeconfig(
  flag: Option<PathBuf>,
  config: &MultiKubeConfig,
) -> Result<KubeconfigResolver> {
  let path = resolve_kubeconfig_path(flag, config.kubeconfig.clone())?;
  KubeconfigResolver::load(&path)
    .await
    .context("failed to load kubeconfig")
}

async fn list(
  store: &ConfigStore,
  config: &MultiKubeConfig,
  resolver: &KubeconfigResolver,
  out: &mut dyn Write,
) -> Result<()> {
  let all = resolver.contexts();
  let current = resolver.current_context();
  let configured = store.exists().await && !config.contexts.is_empty();

  writeln!(out, "Available contexts from kubeconfig:")?;
  writeln!(out)?;
  for context in &all {
    let marker = if configured && config.has_context(context) {
      "* "
    } else {
      "  "
    };
    let suffix = if Some(context.as_str()) == current {
      " (current)"
    } else {
      ""
    };
    writeln!(out, "{marker}{context}{suffix}")?;
  }
  writeln!(out)?;

  if configured {
    writeln!(
      out,
      "Configured contexts (* marked): {}/{}",
      config.contexts.len(),
      all.len()
    )?;
    writeln!(out, "Config file: {}", store.path().display())?;
  } else {
    writeln!(out, "No multikube config found. Using all contexts.")?;
    writeln!(
      out,
      "Run 'multikubectl config use <contexts>' to configure specific contexts."
    )?;
  }
  Ok(())
}

async fn add(
  store: &ConfigStore,
  mut config: MultiKubeConfig,
  resolver: &KubeconfigResolver,
  contexts: &[String],
  out: &mut dyn Write,
) -> Result<()> {
  let available = resolver.contexts();
  let mut added = 0;

  for context in contexts {
    if !available.contains(context) {
      eprintln!("Warning: context '{context}' not found in kubeconfig, skipping");
      continue;
    }
    if config.add_context(context) {
      writeln!(out, "Added context: {context}")?;
      added += 1;
    } else {
      writeln!(out, "Context already configured: {context}")?;
    }
  }

  if added > 0 {
    save(store, &config, out).await?;
  }
  Ok(())
}

async fn remove(
  store: &ConfigStore,
  mut config: MultiKubeConfig,
  contexts: &[String],
  out: &mut dyn Write,
) -> Result<()> {
  let mut removed = 0;

  for context in contexts {
    if config.remove_context(context) {
      writeln!(out, "Removed context: {context}")?;
      removed += 1;
    } else {
      writeln!(out, "Context not found in config: {context}")?;
    }
  }

  if removed > 0 {
    save(store, &config, out).await?;
  }
  Ok(())
}

async fn use_contexts(
  store: &ConfigStore,
  mut config: MultiKubeConfig,
  resolver: &KubeconfigResolver,
  contexts: &str,
  out: &mut dyn Write,
) -> Result<()> {
  let available = resolver.contexts();
  let mut valid: Vec<String> = Vec::new();

  for context in contexts.split(',').map(str::trim).filter(|c| !c.is_empty()) {
    if !available.iter().any(|a| a == context) {
      eprintln!("Warning: context '{context}' not found in kubeconfig, skipping");
      continue;
    }
    if !valid.iter().any(|v| v == context) {
      valid.push(context.to_string());
    }
  }

  if valid.is_empty() {
    bail!("no valid contexts specified");
  }

  writeln!(out, "Configured contexts:")?;
  for context in &valid {
    writeln!(out, "  - {context}")?;
  }
  config.set_contexts(valid);
  save(store, &config, out).await
}

async fn clear(store: &ConfigStore, out: &mut dyn Write) -> Result<()> {
  let removed = store
    .remove()
    .await
    .context("failed to remove multikube config")?;

  if removed {
    writeln!(
      out,
      "Configuration cleared. Removed {}",
      store.path().display()
    )?;
    writeln!(out, "multikubectl will now use all contexts from kubeconfig.")?;
  } else {
    writeln!(out, "No configuration file exists.")?;
  }
  Ok(())
}

async fn show(store: &ConfigStore, config: &MultiKubeConfig, out: &mut dyn Write) -> Result<()> {
  if !store.exists().await {
    writeln!(out, "No multikube configuration file exists.")?;
    writeln!(out, "Using all contexts from kubeconfig.")?;
    return Ok(());
  }

  writeln!(out, "Config file: {}", store.path().display())?;
  writeln!(out)?;

  if config.contexts.is_empty() {
    writeln!(out, "No contexts configured.")?;
  } else {
    writeln!(out, "Configured contexts:")?;
    for context in &config.contexts {
      writeln!(out, "  - {context}")?;
    }
  }

  if let Some(kubeconfig) = &config.kubeconfig {
    writeln!(out)?;
    writeln!(out, "Kubeconfig: {}", kubeconfig.display())?;
  }
  Ok(())
}

async fn save(store: &ConfigStore, config: &MultiKubeConfig, out: &mut dyn Write) -> Result<()> {
  store
    .save(config)
    .await
    .context("failed to save multikube config")?;
  writeln!(out)?;
  writeln!(out, "Configuration saved to {}", store.path().display())?;
  Ok(())
}
