use kube::ResourceExt;
use olmx_models::Subscription;
use tracing::{debug, instrument};

use crate::cluster::{OperatorCluster, ResourceKind};
use crate::error::UninstallError;

/// List the namespace's subscriptions and return the one for `package`.
#[instrument(level = "debug", skip(cluster))]
pub async fn resolve_subscription<C: OperatorCluster + ?Sized>(
    cluster: &C,
    namespace: &str,
    package: &str,
) -> Result<Subscription, UninstallError> {
    let subs = cluster
        .list_subscriptions(namespace)
        .await
        .map_err(|e| UninstallError::list(ResourceKind::Subscription, e))?;
    debug!(count = subs.len(), "listed subscriptions");
    select_subscription(subs, package)
}

/// Pick the single subscription whose package matches. More than one match
/// is refused rather than resolved by list order, which the API server does
/// not keep stable.
pub fn select_subscription(
    subs: Vec<Subscription>,
    package: &str,
) -> Result<Subscription, UninstallError> {
    let mut matching: Vec<Subscription> = subs
        .into_iter()
        .filter(|s| s.spec.package == package)
        .collect();
    match matching.len() {
        0 => Err(UninstallError::PackageNotFound(package.to_string())),
        1 => Ok(matching.remove(0)),
        _ => Err(UninstallError::AmbiguousPackage {
            package: package.to_string(),
            subscriptions: matching.iter().map(|s| s.name_any()).collect(),
        }),
    }
}
