//! Store trait and implementations.
//!
//! The reconciler talks to the cluster through the [`Store`] trait so the
//! convergence logic can be exercised against an in-memory backend. The
//! contract distinguishes not-found (`Ok(None)`, expected) from transient
//! failures (`Err`, surfaced for requeue), and reports already-exists on
//! create as a success outcome.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use kube::api::{Api, ApiResource, DynamicObject, PostParams};
use kube::{Client, ResourceExt};
use tokio::sync::RwLock;

use ran_lcm_api::{Group, placement_rule_resource};

use crate::error::{Error, Result};
use crate::types::{CreateOutcome, NamespacedName};

/// Trait for the object store the reconciler converges against.
#[async_trait]
pub trait Store: Send + Sync {
    /// Fetch a Group by key. `None` means the object does not exist.
    async fn get_group(&self, key: &NamespacedName) -> Result<Option<Group>>;

    /// Probe for a placement rule by key. `None` means the object does not
    /// exist.
    async fn get_placement_rule(&self, key: &NamespacedName) -> Result<Option<DynamicObject>>;

    /// Create a placement rule. A concurrent creation of the same name is
    /// reported as [`CreateOutcome::AlreadyExists`], not an error.
    async fn create_placement_rule(&self, rule: &DynamicObject) -> Result<CreateOutcome>;
}

/// Store backed by the Kubernetes API server.
pub struct KubeStore {
    client: Client,
    rule_resource: ApiResource,
}

impl KubeStore {
    /// Create a new store wrapping the given client.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            rule_resource: placement_rule_resource(),
        }
    }

    fn rules_in(&self, namespace: &str) -> Api<DynamicObject> {
        Api::namespaced_with(self.client.clone(), namespace, &self.rule_resource)
    }
}

#[async_trait]
impl Store for KubeStore {
    async fn get_group(&self, key: &NamespacedName) -> Result<Option<Group>> {
        let api: Api<Group> = Api::namespaced(self.client.clone(), &key.namespace);
        api.get_opt(&key.name)
            .await
            .map_err(|err| Error::group_get_failed(key.clone(), err.to_string()))
    }

    async fn get_placement_rule(&self, key: &NamespacedName) -> Result<Option<DynamicObject>> {
        self.rules_in(&key.namespace)
            .get_opt(&key.name)
            .await
            .map_err(|err| Error::placement_rule_get_failed(key.clone(), err.to_string()))
    }

    async fn create_placement_rule(&self, rule: &DynamicObject) -> Result<CreateOutcome> {
        let name = rule.name_any();
        let namespace = rule
            .namespace()
            .ok_or_else(|| Error::placement_rule_create_failed(&name, "missing namespace"))?;

        match self
            .rules_in(&namespace)
            .create(&PostParams::default(), rule)
            .await
        {
            Ok(_) => Ok(CreateOutcome::Created),
            Err(kube::Error::Api(resp)) if resp.code == 409 => Ok(CreateOutcome::AlreadyExists),
            Err(err) => Err(Error::placement_rule_create_failed(&name, err.to_string())),
        }
    }
}

/// In-memory store for testing.
#[derive(Default)]
pub struct InMemoryStore {
    groups: RwLock<HashMap<NamespacedName, Group>>,
    rules: RwLock<HashMap<NamespacedName, DynamicObject>>,
    create_calls: AtomicUsize,
}

impl InMemoryStore {
    /// Create a new in-memory store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new in-memory store wrapped in an Arc.
    pub fn new_arc() -> Arc<Self> {
        Arc::new(Self::new())
    }

    /// Seed a Group.
    pub async fn insert_group(&self, group: Group) {
        let key = NamespacedName::from_resource(&group);
        self.groups.write().await.insert(key, group);
    }

    /// Seed a placement rule, bypassing the create counter.
    pub async fn insert_placement_rule(&self, rule: DynamicObject) {
        let key = NamespacedName::from_resource(&rule);
        self.rules.write().await.insert(key, rule);
    }

    /// Read back a stored placement rule.
    pub async fn placement_rule(&self, key: &NamespacedName) -> Option<DynamicObject> {
        self.rules.read().await.get(key).cloned()
    }

    /// Number of placement rules currently stored.
    pub async fn placement_rule_count(&self) -> usize {
        self.rules.read().await.len()
    }

    /// Number of create calls issued against this store.
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Store for InMemoryStore {
    async fn get_group(&self, key: &NamespacedName) -> Result<Option<Group>> {
        Ok(self.groups.read().await.get(key).cloned())
    }

    async fn get_placement_rule(&self, key: &NamespacedName) -> Result<Option<DynamicObject>> {
        Ok(self.rules.read().await.get(key).cloned())
    }

    async fn create_placement_rule(&self, rule: &DynamicObject) -> Result<CreateOutcome> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);

        let key = NamespacedName::from_resource(rule);
        let mut rules = self.rules.write().await;
        if rules.contains_key(&key) {
            return Ok(CreateOutcome::AlreadyExists);
        }
        rules.insert(key, rule.clone());
        Ok(CreateOutcome::Created)
    }
}
