//! Factory for per-cluster `PlacementRule` objects.
//!
//! `PlacementRule` (`apps.open-cluster-management.io/v1`) is defined by an
//! external system, so it is modelled as a [`DynamicObject`] rather than a
//! typed schema. The factory here is the only producer of that shape; it is
//! a pure function of (parent name, parent namespace, cluster).

use std::collections::BTreeMap;

use kube::api::{ApiResource, DynamicObject, GroupVersionKind, ObjectMeta};
use kube::core::TypeMeta;
use serde_json::json;

/// API group of the placement rule type.
pub const PLACEMENT_RULE_GROUP: &str = "apps.open-cluster-management.io";
/// API version of the placement rule type.
pub const PLACEMENT_RULE_VERSION: &str = "v1";
/// Kind of the placement rule type.
pub const PLACEMENT_RULE_KIND: &str = "PlacementRule";

/// Label key marking objects managed by this controller.
pub const OWNER_LABEL_KEY: &str = "app";
/// Label value marking objects managed by this controller.
pub const OWNER_LABEL_VALUE: &str = "ran-lcm";

/// The placement rule [`GroupVersionKind`].
pub fn placement_rule_gvk() -> GroupVersionKind {
    GroupVersionKind::gvk(
        PLACEMENT_RULE_GROUP,
        PLACEMENT_RULE_VERSION,
        PLACEMENT_RULE_KIND,
    )
}

/// The [`ApiResource`] used to address placement rules dynamically.
pub fn placement_rule_resource() -> ApiResource {
    ApiResource::from_gvk(&placement_rule_gvk())
}

/// Deterministic name of the rule for one (group, cluster) pair.
///
/// Both the factory and the reconciler's existence probe use this
/// derivation, which is what makes re-runs idempotent.
pub fn placement_rule_name(group_name: &str, cluster: &str) -> String {
    format!("{group_name}-{cluster}-placement-rule")
}

/// Render the candidate placement rule for `cluster`.
///
/// The result carries no owner reference; the reconciler links ownership
/// before anything is written to the store.
pub fn build_placement_rule(group_name: &str, namespace: &str, cluster: &str) -> DynamicObject {
    DynamicObject {
        types: Some(TypeMeta {
            api_version: format!("{PLACEMENT_RULE_GROUP}/{PLACEMENT_RULE_VERSION}"),
            kind: PLACEMENT_RULE_KIND.to_string(),
        }),
        metadata: ObjectMeta {
            name: Some(placement_rule_name(group_name, cluster)),
            namespace: Some(namespace.to_string()),
            labels: Some(BTreeMap::from([(
                OWNER_LABEL_KEY.to_string(),
                OWNER_LABEL_VALUE.to_string(),
            )])),
            ..ObjectMeta::default()
        },
        data: json!({
            "spec": {
                "clusterConditions": [
                    { "type": "OK" }
                ],
                "clusters": [
                    { "name": cluster }
                ]
            }
        }),
    }
}
