//! Concurrent command dispatch for multikube.
//!
//! This crate provides the [`Dispatcher`], which fans one kubectl command out
//! to every requested cluster context, runs the invocations concurrently with
//! an independent deadline each, and joins them back into a list of
//! [`ExecutionResult`]s aligned with the requested targets.
//!
//! Subprocesses are started through the [`CommandRunner`] capability so the
//! dispatcher can be driven by a scripted fake in tests. [`KubectlRunner`] is
//! the production implementation.

mod dispatcher;
mod error;
mod request;
mod result;
mod runner;

pub use dispatcher::Dispatcher;
pub use error::TargetError;
pub use request::ExecutionRequest;
pub use result::{CommandOutput, ExecutionResult};
pub use runner::{CommandRunner, DEFAULT_PROGRAM, Invocation, KubectlRunner};
