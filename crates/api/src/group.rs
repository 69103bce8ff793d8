//! The `Group` custom resource.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Desired state for a group of clusters.
///
/// A `Group` names the clusters that should each receive a placement rule.
/// The list is ordered and may contain duplicates; the controller tolerates
/// duplicates because the derived rule name is deterministic per cluster.
#[derive(CustomResource, Clone, Debug, Default, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
#[kube(
    group = "ran.openshift.io",
    version = "v1alpha1",
    kind = "Group",
    namespaced
)]
pub struct GroupSpec {
    /// Target cluster names, in the order they should be converged.
    #[serde(default)]
    pub clusters: Vec<String>,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn group_spec_deserializes_cluster_list() {
        let spec: GroupSpec =
            serde_json::from_value(serde_json::json!({ "clusters": ["east", "west"] })).unwrap();
        assert_eq!(spec.clusters, vec!["east", "west"]);
    }

    #[test]
    fn group_spec_defaults_to_empty_clusters() {
        let spec: GroupSpec = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(spec.clusters.is_empty());
    }
}
