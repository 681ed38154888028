use tracing::{debug, instrument};

use crate::cascade::delete_owned_crds;
use crate::cluster::{OperatorCluster, ResourceKind, ResourceRef, Verb, is_not_found};
use crate::error::UninstallError;
use crate::uninstall::RunState;

/// Delete one CSV, cascading into its owned CRDs first when requested.
///
/// With `tolerate_missing` a not-found on the initial get ends the call
/// quietly and the CSV is recorded as skipped. Any other get failure, and
/// every delete failure, aborts the run.
#[instrument(level = "debug", skip(run), fields(ns = %run.namespace))]
pub(crate) async fn delete_version<C: OperatorCluster + ?Sized>(
    run: &mut RunState<'_, C>,
    csv_name: &str,
    tolerate_missing: bool,
) -> Result<(), UninstallError> {
    let target = ResourceRef::namespaced(
        ResourceKind::ClusterServiceVersion,
        run.namespace,
        csv_name,
    );
    let csv = match run.cluster.get_csv(run.namespace, csv_name).await {
        Ok(csv) => csv,
        Err(e) if tolerate_missing && is_not_found(&e) => {
            debug!(csv = csv_name, "csv not found; nothing to delete");
            run.skipped(target);
            return Ok(());
        }
        Err(e) => {
            return Err(UninstallError::object(
                Verb::Get,
                ResourceKind::ClusterServiceVersion,
                csv_name,
                e,
            ));
        }
    };

    if run.options.delete_crds() {
        delete_owned_crds(run, &csv).await?;
    }

    run.delete(target).await
}
