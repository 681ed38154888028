mod cascade;
pub mod cluster;
pub mod config;
pub mod error;
mod group;
pub mod kube_cluster;
pub mod report;
pub mod reporter;
pub mod resolver;
pub mod stage;
pub mod telemetry;
pub mod uninstall;
mod versions;

pub use cluster::{OperatorCluster, ResourceKind, ResourceRef, Verb, is_not_found};
pub use config::{ClusterConfig, UninstallOptions};
pub use error::UninstallError;
pub use kube_cluster::KubeCluster;
pub use report::{OperatorGroupCleanup, UninstallReport};
pub use reporter::{Reporter, TracingReporter};
pub use resolver::{resolve_subscription, select_subscription};
pub use stage::{Plan, Stage};
pub use telemetry::init_tracing;
pub use uninstall::Uninstaller;

