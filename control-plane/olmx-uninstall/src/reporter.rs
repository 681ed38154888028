use tracing::info;

/// Sink for the one-line messages emitted after each successful delete,
/// e.g. `subscription "etcd" deleted`. Never called on failure paths.
pub trait Reporter: Send + Sync {
    fn report(&self, message: &str);
}

impl<F> Reporter for F
where
    F: Fn(&str) + Send + Sync,
{
    fn report(&self, message: &str) {
        self(message)
    }
}

/// Forwards delete lines to the `tracing` subscriber at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn report(&self, message: &str) {
        info!("{message}");
    }
}
