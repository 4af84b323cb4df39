//! Multikube Config
//!
//! The user's persistent context selection, stored as YAML in
//! `~/.multikube/config`:
//!
//! ```yaml
//! contexts:
//!   - prod-east
//!   - prod-west
//! kubeconfig: /home/me/.kube/fleet
//! ```
//!
//! Both fields are optional. A missing file behaves like an empty one.

mod config;
mod error;
mod store;

pub use config::MultiKubeConfig;
pub use error::ConfigError;
pub use store::{CONFIG_DIR, CONFIG_FILE, ConfigStore};
