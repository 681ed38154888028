use std::sync::Arc;

use tracing::{debug, info, instrument};

use crate::cluster::{OperatorCluster, ResourceKind, ResourceRef, Verb, is_not_found};
use crate::config::UninstallOptions;
use crate::error::UninstallError;
use crate::group::cleanup_operator_groups;
use crate::report::UninstallReport;
use crate::reporter::{Reporter, TracingReporter};
use crate::resolver::resolve_subscription;
use crate::stage::{Plan, Stage};
use crate::versions::delete_version;

/// Removes one operator package from a namespace.
///
/// The run walks the stages of [`Plan::stages`] in order and stops at the
/// first fatal error, leaving whatever was already deleted deleted. Dropping
/// the future returned by [`Uninstaller::run`] aborts the in-flight request.
pub struct Uninstaller<C> {
    cluster: C,
    namespace: String,
    options: UninstallOptions,
    reporter: Arc<dyn Reporter>,
}

impl<C: OperatorCluster> Uninstaller<C> {
    pub fn new(
        cluster: C,
        namespace: impl Into<String>,
        options: UninstallOptions,
    ) -> Self {
        Self {
            cluster,
            namespace: namespace.into(),
            options,
            reporter: Arc::new(TracingReporter),
        }
    }

    pub fn with_reporter(mut self, reporter: Arc<dyn Reporter>) -> Self {
        self.reporter = reporter;
        self
    }

    #[instrument(skip(self), fields(ns = %self.namespace, package = %self.options.package()))]
    pub async fn run(&self) -> Result<UninstallReport, UninstallError> {
        self.options.validate()?;
        let mut state = RunState {
            cluster: &self.cluster,
            namespace: &self.namespace,
            options: &self.options,
            reporter: self.reporter.as_ref(),
            report: UninstallReport::new(&self.namespace),
        };

        debug!("resolving subscription");
        let sub = resolve_subscription(
            &self.cluster,
            &self.namespace,
            self.options.package(),
        )
        .await?;
        let plan = Plan::new(&sub, &self.options);
        state.report.subscription = plan.subscription.clone();

        for stage in plan.stages() {
            debug!(stage = %stage, "entering stage");
            match &stage {
                Stage::DeleteSubscription => {
                    state.delete_subscription(&plan.subscription).await?;
                }
                Stage::DeleteSupersedingVersion(csv)
                | Stage::DeleteInstalledVersion(csv) => {
                    delete_version(&mut state, csv, stage.tolerates_missing())
                        .await?;
                }
                Stage::CleanupOperatorGroup => {
                    state.report.operator_groups =
                        cleanup_operator_groups(&mut state).await?;
                }
            }
        }

        info!(
            deleted = state.report.deleted.len(),
            skipped = state.report.skipped.len(),
            "uninstall complete"
        );
        Ok(state.report)
    }
}

/// Borrowed view of a single run, threaded through the stage helpers.
pub(crate) struct RunState<'a, C: ?Sized> {
    pub cluster: &'a C,
    pub namespace: &'a str,
    pub options: &'a UninstallOptions,
    reporter: &'a dyn Reporter,
    report: UninstallReport,
}

impl<C: OperatorCluster + ?Sized> RunState<'_, C> {
    /// Delete `target`; every failure, not-found included, is fatal.
    pub async fn delete(&mut self, target: ResourceRef) -> Result<(), UninstallError> {
        self.cluster.delete(&target).await.map_err(|e| {
            UninstallError::object(Verb::Delete, target.kind, target.name.clone(), e)
        })?;
        self.deleted(target);
        Ok(())
    }

    /// The subscription may already be gone (an earlier failed run, or
    /// another actor); that is not an error.
    async fn delete_subscription(&mut self, name: &str) -> Result<(), UninstallError> {
        let target =
            ResourceRef::namespaced(ResourceKind::Subscription, self.namespace, name);
        match self.cluster.delete(&target).await {
            Ok(()) => {
                self.deleted(target);
                Ok(())
            }
            Err(e) if is_not_found(&e) => {
                debug!(subscription = name, "subscription already gone");
                self.skipped(target);
                Ok(())
            }
            Err(e) => Err(UninstallError::object(
                Verb::Delete,
                ResourceKind::Subscription,
                name,
                e,
            )),
        }
    }

    pub fn has_deleted(&self, target: &ResourceRef) -> bool {
        self.report.deleted.contains(target)
    }

    pub fn skipped(&mut self, target: ResourceRef) {
        self.report.skipped.push(target);
    }

    fn deleted(&mut self, target: ResourceRef) {
        self.reporter
            .report(&format!("{} {:?} deleted", target.kind, target.name));
        self.report.deleted.push(target);
    }
}
