//! Shared types for the controller.

use std::fmt;

use kube::ResourceExt;

/// Namespaced identity of an object in the store.
///
/// This is the request key handed to the reconciler and the probe key used
/// for placement rule lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespacedName {
    /// Namespace the object lives in.
    pub namespace: String,
    /// Object name within the namespace.
    pub name: String,
}

impl NamespacedName {
    /// Create a new namespaced name.
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    /// Derive the key of a stored object from its metadata.
    pub fn from_resource(obj: &impl ResourceExt) -> Self {
        Self {
            namespace: obj.namespace().unwrap_or_default(),
            name: obj.name_any(),
        }
    }
}

impl fmt::Display for NamespacedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.name)
    }
}

/// Outcome of a create call against the store.
///
/// A concurrent actor may create the object between the existence probe and
/// the create call; the store reports that as `AlreadyExists`, which the
/// reconciler treats as convergence, not failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// The object was written by this call.
    Created,
    /// The object was already present when the write landed.
    AlreadyExists,
}
