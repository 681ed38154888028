use crate::cluster::{ResourceKind, ResourceRef};

/// What happened to the namespace's operator groups.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum OperatorGroupCleanup {
    NotRequested,
    /// Other CSVs still live in the namespace, so nothing was touched.
    Retained { remaining_csvs: usize },
    Cleaned,
}

/// Outcome of a completed uninstall run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UninstallReport {
    pub namespace: String,
    pub subscription: String,
    /// Objects deleted by this run, in deletion order.
    pub deleted: Vec<ResourceRef>,
    /// Objects that were already gone where that is tolerated.
    pub skipped: Vec<ResourceRef>,
    pub operator_groups: OperatorGroupCleanup,
}

impl UninstallReport {
    pub(crate) fn new(namespace: &str) -> Self {
        Self {
            namespace: namespace.to_string(),
            subscription: String::new(),
            deleted: Vec::new(),
            skipped: Vec::new(),
            operator_groups: OperatorGroupCleanup::NotRequested,
        }
    }

    pub fn deleted_names(&self, kind: ResourceKind) -> Vec<&str> {
        self.deleted
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.name.as_str())
            .collect()
    }

    pub fn skipped_names(&self, kind: ResourceKind) -> Vec<&str> {
        self.skipped
            .iter()
            .filter(|r| r.kind == kind)
            .map(|r| r.name.as_str())
            .collect()
    }
}
