//! API types for the RAN lifecycle manager.
//!
//! This crate carries the `Group` custom resource and the factory that
//! renders the per-cluster `PlacementRule` objects a `Group` implies. It is
//! pure data: no client, no I/O.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod group;
pub mod placement;

pub use group::{Group, GroupSpec};
pub use placement::{
    OWNER_LABEL_KEY, OWNER_LABEL_VALUE, PLACEMENT_RULE_GROUP, PLACEMENT_RULE_KIND,
    PLACEMENT_RULE_VERSION, build_placement_rule, placement_rule_gvk, placement_rule_name,
    placement_rule_resource,
};
