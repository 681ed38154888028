/// Main CLI structure
#[derive(clap::Parser, Clone, Debug)]
#[clap(author, version, about, long_about = None)]
pub struct OlmxCli {
    #[command(subcommand)]
    pub command: OlmxCommands,
}

/// Available CLI commands
#[derive(clap::Subcommand, Clone, Debug)]
pub enum OlmxCommands {
    /// Uninstall an operator package from a namespace
    #[clap(aliases = &["rm", "un"])]
    Uninstall {
        #[clap(flatten)]
        opt: UninstallArgs,
        #[clap(flatten)]
        conn: ClusterArgs,
    },
}

/// Operator uninstall options
#[derive(clap::Args, Clone, Debug)]
pub struct UninstallArgs {
    /// Name of the operator package to remove
    pub package: String,
    /// delete all owned CRDs and all CRs
    #[arg(long, default_value_t = false)]
    pub delete_crds: bool,
    /// delete operator group if no other operators remain
    #[arg(long, default_value_t = false)]
    pub delete_operator_group: bool,
}

/// Cluster targeting arguments
#[derive(clap::Args, Clone, Debug, Default)]
pub struct ClusterArgs {
    /// Namespace to operate in (defaults to OLMX_K8S_NAMESPACE, then the kubeconfig context)
    #[arg(short, long)]
    pub namespace: Option<String>,
    /// Abort the whole run after this many seconds (overrides OLMX_RUN_TIMEOUT_SECS)
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}
