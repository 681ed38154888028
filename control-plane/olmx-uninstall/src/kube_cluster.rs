use async_trait::async_trait;
use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use kube::{
    Client, ResourceExt,
    api::{Api, DeleteParams, ListParams},
    core::request,
};
use olmx_models::{ClusterServiceVersion, OperatorGroup, Subscription};
use tracing::{instrument, trace};

use crate::cluster::{OperatorCluster, ResourceKind, ResourceRef};

/// [`OperatorCluster`] backed by a live API server.
#[derive(Clone)]
pub struct KubeCluster {
    client: Client,
}

impl KubeCluster {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn delete_by_name<K>(
        &self,
        api: Api<K>,
        name: &str,
    ) -> Result<(), kube::Error>
    where
        K: Clone + serde::de::DeserializeOwned + std::fmt::Debug,
    {
        let _ = api.delete(name, &DeleteParams::default()).await?;
        Ok(())
    }
}

/// Namespace for a namespaced delete. A namespaced kind without one is
/// rejected before any request is built.
fn namespace_of(target: &ResourceRef) -> Result<&str, kube::Error> {
    target.namespace.as_deref().ok_or_else(|| {
        kube::Error::BuildRequest(request::Error::Validation(format!(
            "{} {:?} has no namespace",
            target.kind, target.name
        )))
    })
}

#[async_trait]
impl OperatorCluster for KubeCluster {
    #[instrument(level = "trace", skip(self))]
    async fn list_subscriptions(
        &self,
        namespace: &str,
    ) -> Result<Vec<Subscription>, kube::Error> {
        let api: Api<Subscription> =
            Api::namespaced(self.client.clone(), namespace);
        let list = api.list(&ListParams::default()).await?;
        trace!(count = list.items.len(), "listed subscriptions");
        Ok(list.items)
    }

    #[instrument(level = "trace", skip(self))]
    async fn get_csv(
        &self,
        namespace: &str,
        name: &str,
    ) -> Result<ClusterServiceVersion, kube::Error> {
        let api: Api<ClusterServiceVersion> =
            Api::namespaced(self.client.clone(), namespace);
        api.get(name).await
    }

    #[instrument(level = "trace", skip(self))]
    async fn list_csv_names(
        &self,
        namespace: &str,
    ) -> Result<Vec<String>, kube::Error> {
        let api: Api<ClusterServiceVersion> =
            Api::namespaced(self.client.clone(), namespace);
        let list = api.list_metadata(&ListParams::default()).await?;
        Ok(list.items.iter().map(|m| m.name_any()).collect())
    }

    #[instrument(level = "trace", skip(self))]
    async fn list_operator_group_names(
        &self,
        namespace: &str,
    ) -> Result<Vec<String>, kube::Error> {
        let api: Api<OperatorGroup> =
            Api::namespaced(self.client.clone(), namespace);
        let list = api.list_metadata(&ListParams::default()).await?;
        Ok(list.items.iter().map(|m| m.name_any()).collect())
    }

    #[instrument(level = "trace", skip(self, target), fields(target = %target))]
    async fn delete(&self, target: &ResourceRef) -> Result<(), kube::Error> {
        let client = self.client.clone();
        match target.kind {
            ResourceKind::Subscription => {
                let api: Api<Subscription> =
                    Api::namespaced(client, namespace_of(target)?);
                self.delete_by_name(api, &target.name).await
            }
            ResourceKind::ClusterServiceVersion => {
                let api: Api<ClusterServiceVersion> =
                    Api::namespaced(client, namespace_of(target)?);
                self.delete_by_name(api, &target.name).await
            }
            ResourceKind::OperatorGroup => {
                let api: Api<OperatorGroup> =
                    Api::namespaced(client, namespace_of(target)?);
                self.delete_by_name(api, &target.name).await
            }
            ResourceKind::CustomResourceDefinition => {
                let api: Api<CustomResourceDefinition> = Api::all(client);
                self.delete_by_name(api, &target.name).await
            }
        }
    }
}
