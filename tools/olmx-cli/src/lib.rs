mod commands;
mod types;

use std::process;

pub use commands::{RunAbort, exit_code};
pub use types::{ClusterArgs, OlmxCli, OlmxCommands, UninstallArgs};

pub async fn run(cli: OlmxCli) {
    match &cli.command {
        OlmxCommands::Uninstall { opt, conn } => {
            if let Err(e) = commands::handle_uninstall_command(opt, conn).await {
                eprintln!("Uninstall failed: {}", e);
                process::exit(exit_code(&e));
            }
        }
    }
}
