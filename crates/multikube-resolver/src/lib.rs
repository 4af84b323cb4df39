//! Multikube Resolver
//!
//! Finds the cluster contexts a command can be fanned out to. Contexts come
//! from a kubeconfig file ([`KubeconfigResolver`]); which of them are used
//! for a run is decided by [`select_targets`] from the command line flags and
//! the saved multikube config.

mod error;
mod kubeconfig;
mod path;
mod selection;
mod source;

pub use error::ResolveError;
pub use kubeconfig::{KubeConfig, KubeconfigResolver, NamedContext};
pub use path::{KUBECONFIG_ENV, resolve_kubeconfig_path};
pub use selection::{TargetSelection, select_targets};
pub use source::TargetSource;
