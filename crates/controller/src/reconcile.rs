//! Group reconciliation.
//!
//! One pass converges the store toward what a Group implies: every cluster
//! named in the spec gets a placement rule, missing rules are created,
//! existing rules are left untouched. Re-running with no external change is
//! a no-op because the rule name is a deterministic function of (group,
//! cluster) and creation is always preceded by an existence probe.
//!
//! Rules whose cluster has been removed from the spec are intentionally not
//! deleted; cleanup is owner-reference garbage collection when the whole
//! Group goes away.

use std::sync::Arc;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::OwnerReference;
use kube::Resource;
use tracing::{debug, info};

use ran_lcm_api::{Group, build_placement_rule, placement_rule_name};

use crate::error::{Error, Result};
use crate::store::Store;
use crate::types::{CreateOutcome, NamespacedName};

/// Converges placement rules for Group objects.
pub struct GroupReconciler {
    store: Arc<dyn Store>,
}

impl GroupReconciler {
    /// Create a new reconciler over the given store.
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Run one reconciliation pass for the Group identified by `key`.
    ///
    /// A missing Group is not an error: the object was deleted between the
    /// trigger and this pass, and its rules are cleaned up by the garbage
    /// collector. Every other failure propagates so the runtime requeues
    /// with backoff.
    pub async fn reconcile(&self, key: &NamespacedName) -> Result<()> {
        let Some(group) = self.store.get_group(key).await? else {
            debug!(group = %key, "Group is gone, nothing to converge");
            return Ok(());
        };

        self.ensure_placement_rules(key, &group).await
    }

    /// Ensure one placement rule exists per cluster, in spec order.
    async fn ensure_placement_rules(&self, key: &NamespacedName, group: &Group) -> Result<()> {
        let owner = group
            .controller_owner_ref(&())
            .ok_or_else(|| Error::owner_identity(key.clone()))?;

        for cluster in &group.spec.clusters {
            self.ensure_placement_rule(key, &owner, cluster).await?;
        }

        Ok(())
    }

    async fn ensure_placement_rule(
        &self,
        key: &NamespacedName,
        owner: &OwnerReference,
        cluster: &str,
    ) -> Result<()> {
        let mut rule = build_placement_rule(&key.name, &key.namespace, cluster);
        rule.metadata.owner_references = Some(vec![owner.clone()]);

        let rule_key =
            NamespacedName::new(&key.namespace, placement_rule_name(&key.name, cluster));
        if self.store.get_placement_rule(&rule_key).await?.is_some() {
            debug!(group = %key, cluster, "Placement rule already present");
            return Ok(());
        }

        match self.store.create_placement_rule(&rule).await? {
            CreateOutcome::Created => {
                info!(group = %key, cluster, rule = %rule_key.name, "Created placement rule");
            }
            CreateOutcome::AlreadyExists => {
                debug!(group = %key, cluster, "Placement rule created concurrently");
            }
        }

        Ok(())
    }
}
