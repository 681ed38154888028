use olmx_models::ClusterServiceVersion;
use tracing::{debug, instrument};

use crate::cluster::{OperatorCluster, ResourceKind, ResourceRef};
use crate::error::UninstallError;
use crate::uninstall::RunState;

/// Delete every CRD the CSV declares as owned, in declaration order. The
/// first failure stops the loop so the owning CSV is left in place.
///
/// A CRD already deleted earlier in the run (shared by the superseding and
/// installed CSVs) is recorded as skipped without a second request.
#[instrument(level = "debug", skip_all, fields(csv = %kube::ResourceExt::name_any(csv)))]
pub(crate) async fn delete_owned_crds<C: OperatorCluster + ?Sized>(
    run: &mut RunState<'_, C>,
    csv: &ClusterServiceVersion,
) -> Result<(), UninstallError> {
    let owned: Vec<String> = csv.owned_crd_names().map(str::to_string).collect();
    debug!(count = owned.len(), "deleting owned crds");
    for name in owned {
        let target =
            ResourceRef::cluster(ResourceKind::CustomResourceDefinition, name);
        if run.has_deleted(&target) {
            debug!(crd = %target.name, "crd already deleted in this run");
            run.skipped(target);
            continue;
        }
        run.delete(target).await?;
    }
    Ok(())
}
