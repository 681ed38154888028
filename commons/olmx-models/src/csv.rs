use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One installed version of an operator. Only the fields the uninstall path
/// reads are modelled; unknown fields are ignored on deserialization.
#[derive(CustomResource, Deserialize, Serialize, Clone, Debug, JsonSchema, Default)]
#[kube(
    group = "operators.coreos.com",
    version = "v1alpha1",
    kind = "ClusterServiceVersion",
    plural = "clusterserviceversions",
    shortname = "csv",
    namespaced,
    status = "ClusterServiceVersionStatus"
)]
#[serde(rename_all = "camelCase")]
pub struct ClusterServiceVersionSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Name of the CSV this one upgrades from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub replaces: Option<String>,
    #[serde(default)]
    pub customresourcedefinitions: CustomResourceDefinitions,
}

#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, Default)]
pub struct CustomResourceDefinitions {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub owned: Vec<CrdDescription>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<CrdDescription>,
}

#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CrdDescription {
    /// Full CRD name, e.g. `widgets.example.com`
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

#[derive(Deserialize, Serialize, Clone, Debug, JsonSchema, Default)]
pub struct ClusterServiceVersionStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ClusterServiceVersion {
    /// Names of the CRDs this CSV declares as owned, in declaration order.
    pub fn owned_crd_names(&self) -> impl Iterator<Item = &str> {
        self.spec
            .customresourcedefinitions
            .owned
            .iter()
            .map(|d| d.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn owned_names_follow_declaration_order() {
        let csv: ClusterServiceVersion = serde_json::from_value(json!({
            "apiVersion": "operators.coreos.com/v1alpha1",
            "kind": "ClusterServiceVersion",
            "metadata": {"name": "widgets.v1", "namespace": "operators"},
            "spec": {
                "displayName": "Widgets",
                "install": {"strategy": "deployment"},
                "customresourcedefinitions": {
                    "owned": [
                        {"name": "widgets.example.com", "version": "v1", "kind": "Widget"},
                        {"name": "gadgets.example.com", "version": "v1", "kind": "Gadget"}
                    ],
                    "required": [
                        {"name": "things.other.io", "version": "v1", "kind": "Thing"}
                    ]
                }
            }
        }))
        .unwrap();
        let owned: Vec<&str> = csv.owned_crd_names().collect();
        assert_eq!(owned, vec!["widgets.example.com", "gadgets.example.com"]);
        assert_eq!(csv.spec.customresourcedefinitions.required.len(), 1);
    }

    #[test]
    fn missing_crd_section_means_nothing_owned() {
        let csv: ClusterServiceVersion = serde_json::from_value(json!({
            "apiVersion": "operators.coreos.com/v1alpha1",
            "kind": "ClusterServiceVersion",
            "metadata": {"name": "bare.v1"},
            "spec": {}
        }))
        .unwrap();
        assert_eq!(csv.owned_crd_names().count(), 0);
    }
}
