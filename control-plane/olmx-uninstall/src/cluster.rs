use std::fmt;

use async_trait::async_trait;
use olmx_models::{ClusterServiceVersion, Subscription};

/// Object kinds the uninstall path touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Subscription,
    ClusterServiceVersion,
    CustomResourceDefinition,
    OperatorGroup,
}

impl ResourceKind {
    /// Plural form used in list error messages.
    pub fn plural(&self) -> &'static str {
        match self {
            ResourceKind::Subscription => "subscriptions",
            ResourceKind::ClusterServiceVersion => "clusterserviceversions",
            ResourceKind::CustomResourceDefinition => {
                "customresourcedefinitions"
            }
            ResourceKind::OperatorGroup => "operatorgroups",
        }
    }

    pub fn is_cluster_scoped(&self) -> bool {
        matches!(self, ResourceKind::CustomResourceDefinition)
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceKind::Subscription => write!(f, "subscription"),
            ResourceKind::ClusterServiceVersion => write!(f, "csv"),
            ResourceKind::CustomResourceDefinition => write!(f, "crd"),
            ResourceKind::OperatorGroup => write!(f, "operatorgroup"),
        }
    }
}

/// Cluster operations that can fail with context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Delete,
}

impl fmt::Display for Verb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verb::Get => write!(f, "get"),
            Verb::Delete => write!(f, "delete"),
        }
    }
}

/// Identity of a single object: kind, namespace (None when cluster scoped), name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ResourceRef {
    pub kind: ResourceKind,
    pub namespace: Option<String>,
    pub name: String,
}

impl ResourceRef {
    pub fn namespaced(
        kind: ResourceKind,
        namespace: &str,
        name: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            namespace: Some(namespace.to_string()),
            name: name.into(),
        }
    }

    pub fn cluster(kind: ResourceKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            namespace: None,
            name: name.into(),
        }
    }
}

impl fmt::Display for ResourceRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.namespace {
            Some(ns) => write!(f, "{} {}/{}", self.kind, ns, self.name),
            None => write!(f, "{} {}", self.kind, self.name),
        }
    }
}

/// The cluster capabilities the uninstall run needs. Nothing here creates,
/// updates or patches; `delete` is the only write.
#[async_trait]
pub trait OperatorCluster: Send + Sync {
    async fn list_subscriptions(
        &self,
        namespace: &str,
    ) -> Result<Vec<Subscription>, kube::Error>;

    async fn get_csv(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<ClusterServiceVersion, kube::Error>;

    async fn list_csv_names(
        &self,
        namespace: &str,
    ) -> Result<Vec<String>, kube::Error>;

    async fn list_operator_group_names(
        &self,
        namespace: &str,
    ) -> Result<Vec<String>, kube::Error>;

    async fn delete(&self, target: &ResourceRef) -> Result<(), kube::Error>;
}

/// True when the API server answered 404.
pub fn is_not_found(err: &kube::Error) -> bool {
    matches!(err, kube::Error::Api(ae) if ae.code == 404)
}
