use std::fmt;

use olmx_models::Subscription;

use crate::config::UninstallOptions;

/// Steps an uninstall run executes after resolving its subscription, in the
/// only order they may run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Stage {
    DeleteSubscription,
    /// The CSV an in-flight upgrade is moving to; may never have been created.
    DeleteSupersedingVersion(String),
    DeleteInstalledVersion(String),
    CleanupOperatorGroup,
}

impl Stage {
    /// Whether a not-found on the initial lookup in this stage is swallowed.
    pub fn tolerates_missing(&self) -> bool {
        matches!(self, Stage::DeleteSupersedingVersion(_))
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::DeleteSubscription => write!(f, "delete-subscription"),
            Stage::DeleteSupersedingVersion(n) => {
                write!(f, "delete-superseding-version({n})")
            }
            Stage::DeleteInstalledVersion(n) => {
                write!(f, "delete-installed-version({n})")
            }
            Stage::CleanupOperatorGroup => write!(f, "cleanup-operator-group"),
        }
    }
}

/// Work derived from a resolved subscription and the run options.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plan {
    pub subscription: String,
    pub superseding_csv: Option<String>,
    pub installed_csv: Option<String>,
    pub cleanup_operator_group: bool,
}

impl Plan {
    pub fn new(sub: &Subscription, opts: &UninstallOptions) -> Self {
        use kube::ResourceExt;

        let installed = sub.installed_csv().map(str::to_string);
        let superseding = sub
            .current_csv()
            .filter(|current| Some(*current) != installed.as_deref())
            .map(str::to_string);
        Self {
            subscription: sub.name_any(),
            superseding_csv: superseding,
            installed_csv: installed,
            cleanup_operator_group: opts.delete_operator_group(),
        }
    }

    /// Stages that follow subscription resolution.
    pub fn stages(&self) -> Vec<Stage> {
        let mut stages = vec![Stage::DeleteSubscription];
        if let Some(csv) = &self.superseding_csv {
            stages.push(Stage::DeleteSupersedingVersion(csv.clone()));
        }
        if let Some(csv) = &self.installed_csv {
            stages.push(Stage::DeleteInstalledVersion(csv.clone()));
        }
        if self.cleanup_operator_group {
            stages.push(Stage::CleanupOperatorGroup);
        }
        stages
    }
}

#[cfg(test)]
#[path = "stage_tests.rs"]
mod stage_tests;
