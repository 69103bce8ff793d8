//! Group controller for the RAN lifecycle manager.
//!
//! Watches `Group` custom resources and ensures each cluster they name has
//! a corresponding `PlacementRule`:
//!
//! - **Store**: trait seam over the cluster API with kube-backed and
//!   in-memory implementations
//! - **Reconciler**: the convergence pass, idempotent by construction
//! - **Controller**: kube runtime wiring, triggers and requeue policy
//!
//! Created rules are owned by their Group, so deleting a Group cascades to
//! its rules without any logic here.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod controller;
pub mod error;
pub mod reconcile;
pub mod store;
pub mod types;

// Re-export main types
pub use error::{Error, Result};
pub use reconcile::GroupReconciler;
pub use store::{InMemoryStore, KubeStore, Store};
pub use types::{CreateOutcome, NamespacedName};
