use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Binds a package to a catalog channel within a namespace.
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, JsonSchema, Default)]
#[kube(
    group = "operators.coreos.com",
    version = "v1alpha1",
    kind = "Subscription",
    plural = "subscriptions",
    shortname = "sub",
    namespaced,
    status = "SubscriptionStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionSpec {
    /// Package name inside the catalog (serialized as `name`)
    #[serde(rename = "name")]
    pub package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// CatalogSource the package is resolved from
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub source_namespace: String,
    #[serde(
        rename = "startingCSV",
        skip_serializing_if = "Option::is_none"
    )]
    pub starting_csv: Option<String>,
    /// `Automatic` or `Manual`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub install_plan_approval: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, Default)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionStatus {
    /// CSV the subscription currently wants installed
    #[serde(rename = "currentCSV", skip_serializing_if = "Option::is_none")]
    pub current_csv: Option<String>,
    /// CSV that is actually installed
    #[serde(rename = "installedCSV", skip_serializing_if = "Option::is_none")]
    pub installed_csv: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated: Option<String>,
}

impl Subscription {
    /// Returns the `currentCSV` status field, treating empty as unset.
    pub fn current_csv(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|s| s.current_csv.as_deref())
            .filter(|n| !n.is_empty())
    }

    /// Returns the `installedCSV` status field, treating empty as unset.
    pub fn installed_csv(&self) -> Option<&str> {
        self.status
            .as_ref()
            .and_then(|s| s.installed_csv.as_deref())
            .filter(|n| !n.is_empty())
    }
}
