use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use envconfig::Envconfig;
use kube::{Client, Config};
use olmx_uninstall::{
    ClusterConfig, KubeCluster, OperatorGroupCleanup, Reporter,
    UninstallError, UninstallOptions, UninstallReport, Uninstaller,
};
use tracing::{debug, info, warn};

use crate::types::{ClusterArgs, UninstallArgs};

/// Ways a run ends without an answer from the uninstall core.
#[derive(thiserror::Error, Debug)]
pub enum RunAbort {
    #[error("interrupted")]
    Interrupted,
    #[error("deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
}

pub async fn handle_uninstall_command(
    opt: &UninstallArgs,
    conn: &ClusterArgs,
) -> anyhow::Result<()> {
    let env = ClusterConfig::init_from_env()?;

    let mut config = Config::infer().await?;
    config.read_timeout = env.request_timeout();
    let namespace =
        env.resolve_namespace(conn.namespace.as_deref(), &config.default_namespace);
    let client = Client::try_from(config)?;

    let options = UninstallOptions::new(opt.package.as_str())
        .with_delete_crds(opt.delete_crds)
        .with_delete_operator_group(opt.delete_operator_group);
    debug!(%namespace, ?options, "uninstalling operator");

    let reporter: Arc<dyn Reporter> = Arc::new(|line: &str| eprintln!("{line}"));
    let uninstaller =
        Uninstaller::new(KubeCluster::new(client), namespace, options)
            .with_reporter(reporter);

    let deadline = conn
        .timeout
        .filter(|s| *s > 0)
        .map(Duration::from_secs)
        .or_else(|| env.run_timeout());
    let report = run_with_cancellation(uninstaller.run(), deadline).await?;
    log_summary(&report);
    Ok(())
}

/// Drive `fut` until it finishes, Ctrl-C arrives, or `deadline` passes.
/// Losing the race drops `fut`, which aborts its in-flight request.
pub async fn run_with_cancellation<F, T>(
    fut: F,
    deadline: Option<Duration>,
) -> anyhow::Result<T>
where
    F: Future<Output = Result<T, UninstallError>>,
{
    race(fut, deadline, tokio::signal::ctrl_c()).await
}

/// Only a delivered interrupt cancels the run. If the listener itself fails
/// the run keeps going without Ctrl-C handling.
async fn race<F, T, I>(
    fut: F,
    deadline: Option<Duration>,
    interrupt: I,
) -> anyhow::Result<T>
where
    F: Future<Output = Result<T, UninstallError>>,
    I: Future<Output = std::io::Result<()>>,
{
    let bounded = async {
        match deadline {
            Some(d) => match tokio::time::timeout(d, fut).await {
                Ok(res) => res.map_err(anyhow::Error::from),
                Err(_) => Err(RunAbort::DeadlineExceeded(d).into()),
            },
            None => fut.await.map_err(anyhow::Error::from),
        }
    };
    let interrupted = async {
        if let Err(e) = interrupt.await {
            warn!(error = %e, "cannot listen for ctrl-c; continuing without it");
            std::future::pending::<()>().await;
        }
    };
    tokio::select! {
        res = bounded => res,
        () = interrupted => Err(RunAbort::Interrupted.into()),
    }
}

fn log_summary(report: &UninstallReport) {
    let groups = match &report.operator_groups {
        OperatorGroupCleanup::NotRequested => "not requested".to_string(),
        OperatorGroupCleanup::Retained { remaining_csvs } => {
            format!("kept ({remaining_csvs} csvs remain)")
        }
        OperatorGroupCleanup::Cleaned => "cleaned".to_string(),
    };
    info!(
        ns = %report.namespace,
        subscription = %report.subscription,
        deleted = report.deleted.len(),
        skipped = report.skipped.len(),
        operator_groups = %groups,
        "operator uninstalled"
    );
}

/// Process exit status for a failed command: 2 for bad input, 130 when
/// interrupted, 124 on deadline, 1 otherwise.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    if let Some(e) = err.downcast_ref::<UninstallError>() {
        return if e.is_user_error() { 2 } else { 1 };
    }
    match err.downcast_ref::<RunAbort>() {
        Some(RunAbort::Interrupted) => 130,
        Some(RunAbort::DeadlineExceeded(_)) => 124,
        None => 1,
    }
}
