use tracing::{debug, instrument};

use crate::cluster::{OperatorCluster, ResourceKind, ResourceRef};
use crate::error::UninstallError;
use crate::report::OperatorGroupCleanup;
use crate::uninstall::RunState;

/// Delete the namespace's operator groups, but only when no CSV remains.
/// The check is point in time: a CSV created right after it is not seen.
#[instrument(level = "debug", skip(run), fields(ns = %run.namespace))]
pub(crate) async fn cleanup_operator_groups<C: OperatorCluster + ?Sized>(
    run: &mut RunState<'_, C>,
) -> Result<OperatorGroupCleanup, UninstallError> {
    let remaining = run
        .cluster
        .list_csv_names(run.namespace)
        .await
        .map_err(|e| UninstallError::list(ResourceKind::ClusterServiceVersion, e))?;
    if !remaining.is_empty() {
        debug!(remaining = ?remaining, "csvs remain; keeping operator groups");
        return Ok(OperatorGroupCleanup::Retained {
            remaining_csvs: remaining.len(),
        });
    }

    let groups = run
        .cluster
        .list_operator_group_names(run.namespace)
        .await
        .map_err(|e| UninstallError::list(ResourceKind::OperatorGroup, e))?;
    let ns = run.namespace;
    for name in groups {
        run.delete(ResourceRef::namespaced(ResourceKind::OperatorGroup, ns, name))
            .await?;
    }
    Ok(OperatorGroupCleanup::Cleaned)
}
