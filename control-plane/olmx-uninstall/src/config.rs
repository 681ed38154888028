use std::time::Duration;

use envconfig::Envconfig;

use crate::error::UninstallError;

/// Environment-level settings for talking to the cluster.
#[derive(Envconfig, Clone, Debug)]
pub struct ClusterConfig {
    /// Namespace to operate in when no flag is given. Falls back to the
    /// kubeconfig context namespace when unset.
    /// Env: OLMX_K8S_NAMESPACE
    #[envconfig(from = "OLMX_K8S_NAMESPACE")]
    pub namespace: Option<String>,

    /// Per-request read timeout applied to the kube client.
    /// Env: OLMX_REQUEST_TIMEOUT_SECS
    #[envconfig(from = "OLMX_REQUEST_TIMEOUT_SECS", default = "30")]
    pub request_timeout_secs: u64,

    /// Deadline for the whole run; unset means no deadline.
    /// Env: OLMX_RUN_TIMEOUT_SECS
    #[envconfig(from = "OLMX_RUN_TIMEOUT_SECS")]
    pub run_timeout_secs: Option<u64>,
}

impl ClusterConfig {
    pub fn request_timeout(&self) -> Option<Duration> {
        (self.request_timeout_secs > 0)
            .then(|| Duration::from_secs(self.request_timeout_secs))
    }

    pub fn run_timeout(&self) -> Option<Duration> {
        self.run_timeout_secs
            .filter(|s| *s > 0)
            .map(Duration::from_secs)
    }

    /// Pick the namespace: explicit flag, then env, then the client default.
    pub fn resolve_namespace(
        &self,
        flag: Option<&str>,
        client_default: &str,
    ) -> String {
        flag.or(self.namespace.as_deref())
            .map(str::trim)
            .filter(|ns| !ns.is_empty())
            .unwrap_or(client_default)
            .to_string()
    }
}

/// What to uninstall and how far to cascade. Built once by the caller and
/// never changed during the run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UninstallOptions {
    package: String,
    delete_crds: bool,
    delete_operator_group: bool,
}

impl UninstallOptions {
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into().trim().to_string(),
            delete_crds: false,
            delete_operator_group: false,
        }
    }

    /// Delete every CRD the removed CSVs declare as owned (and with them all CRs).
    pub fn with_delete_crds(mut self, enabled: bool) -> Self {
        self.delete_crds = enabled;
        self
    }

    /// Delete the namespace's operator groups when no CSVs remain.
    pub fn with_delete_operator_group(mut self, enabled: bool) -> Self {
        self.delete_operator_group = enabled;
        self
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    pub fn delete_crds(&self) -> bool {
        self.delete_crds
    }

    pub fn delete_operator_group(&self) -> bool {
        self.delete_operator_group
    }

    pub fn validate(&self) -> Result<(), UninstallError> {
        if self.package.is_empty() {
            return Err(UninstallError::EmptyPackage);
        }
        Ok(())
    }
}
