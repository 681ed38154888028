use crate::cluster::{ResourceKind, Verb};

/// Failures that abort an uninstall run. The first one wins; nothing is
/// accumulated.
#[derive(thiserror::Error, Debug)]
pub enum UninstallError {
    #[error("operator package name must not be empty")]
    EmptyPackage,

    #[error("operator package {0:?} not found")]
    PackageNotFound(String),

    #[error(
        "operator package {package:?} matches {} subscriptions: {}",
        .subscriptions.len(),
        .subscriptions.join(", ")
    )]
    AmbiguousPackage {
        package: String,
        subscriptions: Vec<String>,
    },

    #[error("{verb} {kind} {name:?}: {source}")]
    Object {
        verb: Verb,
        kind: ResourceKind,
        name: String,
        source: kube::Error,
    },

    #[error("list {}: {source}", .kind.plural())]
    List {
        kind: ResourceKind,
        source: kube::Error,
    },
}

impl UninstallError {
    pub(crate) fn object(
        verb: Verb,
        kind: ResourceKind,
        name: impl Into<String>,
        source: kube::Error,
    ) -> Self {
        Self::Object {
            verb,
            kind,
            name: name.into(),
            source,
        }
    }

    pub(crate) fn list(kind: ResourceKind, source: kube::Error) -> Self {
        Self::List { kind, source }
    }

    /// Bad input from the operator running the command, as opposed to a
    /// cluster or transport failure.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            UninstallError::EmptyPackage
                | UninstallError::PackageNotFound(_)
                | UninstallError::AmbiguousPackage { .. }
        )
    }

    /// The underlying cluster error, if any.
    pub fn cluster_error(&self) -> Option<&kube::Error> {
        match self {
            UninstallError::Object { source, .. }
            | UninstallError::List { source, .. } => Some(source),
            _ => None,
        }
    }
}
