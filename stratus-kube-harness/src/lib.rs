//! Stratus Kubernetes test harness
//!
//! Integration-test plumbing over a single `kube::Client`: create, get and
//! delete cluster objects, poll until they are ready or gone, and tear
//! everything down through a LIFO finalizer queue.

pub mod cleanup;
pub mod config;
pub mod context;
pub mod error;
pub mod harness;
pub mod poll;

pub use cleanup::Finalizers;
pub use config::{HarnessConfig, resolve_kubeconfig_path};
pub use context::TestContext;
pub use error::{HarnessError, HarnessResult};
pub use harness::Harness;
pub use poll::poll_until;
