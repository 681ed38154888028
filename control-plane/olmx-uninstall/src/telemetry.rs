use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    EnvFilter, layer::SubscriberExt, util::SubscriberInitExt,
    util::TryInitError,
};

/// Filter read from `var`, falling back to `default` when the variable is
/// unset or unparsable.
pub fn env_filter(default: LevelFilter, var: &str) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(default.into())
        .with_env_var(var)
        .from_env_lossy()
}

/// Install a global fmt subscriber on stderr filtered by `RUST_LOG`.
///
/// Fails when a global subscriber is already set.
pub fn init_tracing(default: LevelFilter) -> Result<(), TryInitError> {
    init_tracing_from(default, EnvFilter::DEFAULT_ENV)
}

/// Same as [`init_tracing`] with the filter taken from `var`.
pub fn init_tracing_from(
    default: LevelFilter,
    var: &str,
) -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr),
        )
        .with(env_filter(default, var))
        .try_init()
}
