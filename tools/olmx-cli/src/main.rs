use clap::Parser;
use tracing::level_filters::LevelFilter;

use olmx_cli::OlmxCli;

#[tokio::main]
async fn main() {
    init_log();
    let cli = OlmxCli::parse();
    olmx_cli::run(cli).await
}

fn init_log() {
    if let Err(e) =
        olmx_uninstall::telemetry::init_tracing_from(LevelFilter::WARN, "OLMX_LOG")
    {
        eprintln!("logging disabled: {e}");
    }
}
