use std::ffi::OsString;
use std::path::PathBuf;

use crate::error::ResolveError;

/// Environment variable kubectl reads its kubeconfig path from.
pub const KUBECONFIG_ENV: &str = "KUBECONFIG";

/// The kubeconfig to use for a run.
///
/// An explicit flag wins over the path saved in the multikube config, then
/// `$KUBECONFIG`, then `~/.kube/config`. `KUBECONFIG` is taken as a single
/// path, even if it contains separators.
pub fn resolve_kubeconfig_path(
  flag: Option<PathBuf>,
  configured: Option<PathBuf>,
) -> Result<PathBuf, ResolveError> {
  pick_path(
    flag,
    configured,
    std::env::var_os(KUBECONFIG_ENV),
    dirs::home_dir(),
  )
}

fn pick_path(
  flag: Option<PathBuf>,
  configured: Option<PathBuf>,
  env: Option<OsString>,
  home: Option<PathBuf>,
) -> Result<PathBuf, ResolveError> {
  let non_empty = |p: &PathBuf| !p.as_os_str().is_empty();

  if let Some(path) = flag.filter(non_empty) {
    return Ok(path);
  }
  if let Some(path) = configured.filter(non_empty) {
    return Ok(path);
  }
  if let Some(path) = env.map(PathBuf::from).filter(non_empty) {
    return Ok(path);
  }

  home
    .map(|home| home.join(".kube").join("config"))
    .ok_or(ResolveError::NoHomeDir)
}
