//! Runtime wiring for the Group controller.
//!
//! Binds the reconciler to the kube runtime: watch Groups, watch the
//! placement rules they own (so dependent churn retriggers the parent), and
//! hand each trigger to [`GroupReconciler::reconcile`] as a namespaced name.

use std::sync::Arc;
use std::time::Duration;

use futures::StreamExt;
use kube::Client;
use kube::api::{Api, DynamicObject};
use kube::runtime::controller::{Action, Controller};
use kube::runtime::watcher;
use tracing::{debug, info, warn};

use ran_lcm_api::{Group, placement_rule_resource};

use crate::error::{Error, Result};
use crate::reconcile::GroupReconciler;
use crate::store::KubeStore;
use crate::types::NamespacedName;

/// Requeue delay applied after a failed reconciliation.
const ERROR_REQUEUE: Duration = Duration::from_secs(5);

/// Run the controller until shutdown.
///
/// With `namespace` set the watches are scoped to that namespace; otherwise
/// the whole cluster is watched. The runtime serialises reconciliations per
/// Group while letting distinct Groups converge in parallel.
pub async fn run(client: Client, namespace: Option<&str>) -> Result<()> {
    let groups: Api<Group> = match namespace {
        Some(ns) => Api::namespaced(client.clone(), ns),
        None => Api::all(client.clone()),
    };

    let rule_resource = placement_rule_resource();
    let rules: Api<DynamicObject> = match namespace {
        Some(ns) => Api::namespaced_with(client.clone(), ns, &rule_resource),
        None => Api::all_with(client.clone(), &rule_resource),
    };

    let reconciler = Arc::new(GroupReconciler::new(Arc::new(KubeStore::new(client))));

    info!(scope = namespace.unwrap_or("cluster"), "Starting Group controller");

    Controller::new(groups, watcher::Config::default())
        .owns_with(rules, rule_resource, watcher::Config::default())
        .shutdown_on_signal()
        .run(reconcile_group, error_policy, reconciler)
        .for_each(|result| async {
            match result {
                Ok((group, _)) => debug!(group = %group, "Reconciliation finished"),
                Err(err) => warn!(error = %err, "Reconciliation failed"),
            }
        })
        .await;

    Ok(())
}

async fn reconcile_group(group: Arc<Group>, ctx: Arc<GroupReconciler>) -> Result<Action> {
    let key = NamespacedName::from_resource(group.as_ref());
    ctx.reconcile(&key).await?;
    Ok(Action::await_change())
}

fn error_policy(group: Arc<Group>, err: &Error, _ctx: Arc<GroupReconciler>) -> Action {
    let key = NamespacedName::from_resource(group.as_ref());
    warn!(group = %key, error = %err, "Requeueing after reconciliation error");
    Action::requeue(ERROR_REQUEUE)
}
