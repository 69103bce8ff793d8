//! Error types for the controller.
//!
//! Not-found is never an error here: a missing Group means the object was
//! deleted before the trigger was processed, and a missing placement rule is
//! what prompts creation. Everything below is a failure that must reach the
//! runtime so it can requeue with backoff.

use thiserror::Error;

use crate::types::NamespacedName;

/// Result type alias for controller operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Controller error types.
#[derive(Debug, Error)]
pub enum Error {
    /// Fetching the Group failed for a reason other than not-found.
    #[error("failed to get Group '{key}': {reason}")]
    GroupGetFailed { key: NamespacedName, reason: String },

    /// The placement rule existence probe failed for a reason other than
    /// not-found.
    #[error("failed to get PlacementRule '{key}': {reason}")]
    PlacementRuleGetFailed { key: NamespacedName, reason: String },

    /// Creating a placement rule failed. Already-exists never lands here;
    /// the store reports it as a success outcome.
    #[error("failed to create PlacementRule '{name}': {reason}")]
    PlacementRuleCreateFailed { name: String, reason: String },

    /// The Group carries no persisted identity (name/uid), so no owner
    /// reference can be linked.
    #[error("Group '{key}' has no persisted identity for an owner reference")]
    OwnerIdentity { key: NamespacedName },
}

impl Error {
    /// Create a Group fetch error.
    pub fn group_get_failed(key: NamespacedName, reason: impl Into<String>) -> Self {
        Self::GroupGetFailed {
            key,
            reason: reason.into(),
        }
    }

    /// Create a placement rule probe error.
    pub fn placement_rule_get_failed(key: NamespacedName, reason: impl Into<String>) -> Self {
        Self::PlacementRuleGetFailed {
            key,
            reason: reason.into(),
        }
    }

    /// Create a placement rule creation error.
    pub fn placement_rule_create_failed(
        name: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::PlacementRuleCreateFailed {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an owner identity error.
    pub fn owner_identity(key: NamespacedName) -> Self {
        Self::OwnerIdentity { key }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_key_and_reason() {
        let err = Error::group_get_failed(NamespacedName::new("ztp", "du-group"), "timed out");
        assert!(err.to_string().contains("ztp/du-group"));
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn create_failure_names_the_rule() {
        let err = Error::placement_rule_create_failed("du-group-east-placement-rule", "denied");
        assert!(err.to_string().contains("du-group-east-placement-rule"));
    }
}
