#![allow(dead_code)]

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use kube::core::ErrorResponse;
use olmx_models::{
    ClusterServiceVersion, ClusterServiceVersionSpec, CrdDescription,
    CustomResourceDefinitions, Subscription, SubscriptionSpec,
    SubscriptionStatus,
};
use olmx_uninstall::{OperatorCluster, ResourceKind, ResourceRef, Reporter};

pub const NS: &str = "operators";

pub fn api_error(code: u16, reason: &str) -> kube::Error {
    kube::Error::Api(ErrorResponse {
        status: "Failure".into(),
        message: format!("{reason} (fake)"),
        reason: reason.into(),
        code,
    })
}

pub fn not_found() -> kube::Error {
    api_error(404, "NotFound")
}

pub fn subscription(
    name: &str,
    package: &str,
    current: &str,
    installed: &str,
) -> Subscription {
    let mut sub = Subscription::new(
        name,
        SubscriptionSpec {
            package: package.into(),
            channel: Some("stable".into()),
            source: "operatorhubio-catalog".into(),
            source_namespace: "olm".into(),
            ..Default::default()
        },
    );
    sub.metadata.namespace = Some(NS.into());
    sub.status = Some(SubscriptionStatus {
        current_csv: Some(current.into()),
        installed_csv: Some(installed.into()),
        ..Default::default()
    });
    sub
}

pub fn csv(name: &str, owned: &[&str]) -> ClusterServiceVersion {
    let mut csv = ClusterServiceVersion::new(
        name,
        ClusterServiceVersionSpec {
            customresourcedefinitions: CustomResourceDefinitions {
                owned: owned
                    .iter()
                    .map(|n| CrdDescription {
                        name: n.to_string(),
                        version: "v1".into(),
                        ..Default::default()
                    })
                    .collect(),
                required: vec![],
            },
            ..Default::default()
        },
    );
    csv.metadata.namespace = Some(NS.into());
    csv
}

#[derive(Default)]
struct State {
    subscriptions: Vec<Subscription>,
    csvs: BTreeMap<String, ClusterServiceVersion>,
    crds: Vec<String>,
    operator_groups: Vec<String>,
    calls: Vec<String>,
    /// Errors injected by call label, e.g. "delete crd widgets.example.com".
    failures: HashMap<String, kube::Error>,
}

/// In-memory cluster that applies deletes to its own state and records
/// every call as a label like `get csv foo.v1`.
#[derive(Default, Clone)]
pub struct FakeCluster {
    state: Arc<Mutex<State>>,
}

impl FakeCluster {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subscription(self, sub: Subscription) -> Self {
        self.state.lock().unwrap().subscriptions.push(sub);
        self
    }

    pub fn with_csv(self, csv: ClusterServiceVersion) -> Self {
        let name = kube::ResourceExt::name_any(&csv);
        self.state.lock().unwrap().csvs.insert(name, csv);
        self
    }

    pub fn with_crd(self, name: &str) -> Self {
        self.state.lock().unwrap().crds.push(name.into());
        self
    }

    pub fn with_operator_group(self, name: &str) -> Self {
        self.state.lock().unwrap().operator_groups.push(name.into());
        self
    }

    pub fn failing(self, call: &str, err: kube::Error) -> Self {
        self.state
            .lock()
            .unwrap()
            .failures
            .insert(call.into(), err);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn delete_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| c.starts_with("delete "))
            .collect()
    }

    pub fn csv_names(&self) -> Vec<String> {
        self.state.lock().unwrap().csvs.keys().cloned().collect()
    }

    pub fn crd_names(&self) -> Vec<String> {
        self.state.lock().unwrap().crds.clone()
    }

    pub fn operator_group_names(&self) -> Vec<String> {
        self.state.lock().unwrap().operator_groups.clone()
    }

    pub fn subscription_names(&self) -> Vec<String> {
        self.state
            .lock()
            .unwrap()
            .subscriptions
            .iter()
            .map(kube::ResourceExt::name_any)
            .collect()
    }

    fn record(&self, call: String) -> Result<(), kube::Error> {
        let mut st = self.state.lock().unwrap();
        st.calls.push(call.clone());
        match st.failures.remove(&call) {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn label(kind: ResourceKind) -> &'static str {
    match kind {
        ResourceKind::Subscription => "subscription",
        ResourceKind::ClusterServiceVersion => "csv",
        ResourceKind::CustomResourceDefinition => "crd",
        ResourceKind::OperatorGroup => "operatorgroup",
    }
}

#[async_trait]
impl OperatorCluster for FakeCluster {
    async fn list_subscriptions(
        &self,
        namespace: &str,
    ) -> Result<Vec<Subscription>, kube::Error> {
        self.record("list subscriptions".into())?;
        let st = self.state.lock().unwrap();
        Ok(st
            .subscriptions
            .iter()
            .filter(|s| s.metadata.namespace.as_deref() == Some(namespace))
            .cloned()
            .collect())
    }

    async fn get_csv(
        &self,
        _namespace: &str,
        name: &str,
    ) -> Result<ClusterServiceVersion, kube::Error> {
        self.record(format!("get csv {name}"))?;
        let st = self.state.lock().unwrap();
        st.csvs.get(name).cloned().ok_or_else(not_found)
    }

    async fn list_csv_names(
        &self,
        _namespace: &str,
    ) -> Result<Vec<String>, kube::Error> {
        self.record("list csvs".into())?;
        Ok(self.csv_names())
    }

    async fn list_operator_group_names(
        &self,
        _namespace: &str,
    ) -> Result<Vec<String>, kube::Error> {
        self.record("list operatorgroups".into())?;
        Ok(self.operator_group_names())
    }

    async fn delete(&self, target: &ResourceRef) -> Result<(), kube::Error> {
        self.record(format!("delete {} {}", label(target.kind), target.name))?;
        let mut st = self.state.lock().unwrap();
        let removed = match target.kind {
            ResourceKind::Subscription => {
                let before = st.subscriptions.len();
                st.subscriptions
                    .retain(|s| kube::ResourceExt::name_any(s) != target.name);
                before != st.subscriptions.len()
            }
            ResourceKind::ClusterServiceVersion => {
                st.csvs.remove(&target.name).is_some()
            }
            ResourceKind::CustomResourceDefinition => {
                let before = st.crds.len();
                st.crds.retain(|n| n != &target.name);
                before != st.crds.len()
            }
            ResourceKind::OperatorGroup => {
                let before = st.operator_groups.len();
                st.operator_groups.retain(|n| n != &target.name);
                before != st.operator_groups.len()
            }
        };
        if removed { Ok(()) } else { Err(not_found()) }
    }
}

/// Reporter that keeps every line, plus the handle to read them back.
pub fn line_sink() -> (Arc<dyn Reporter>, Arc<Mutex<Vec<String>>>) {
    let lines = Arc::new(Mutex::new(Vec::new()));
    let sink = lines.clone();
    let reporter: Arc<dyn Reporter> = Arc::new(move |line: &str| {
        sink.lock().unwrap().push(line.to_string());
    });
    (reporter, lines)
}
