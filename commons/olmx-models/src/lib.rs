pub mod csv;
pub mod operator_group;
pub mod subscription;

pub use csv::{
    ClusterServiceVersion, ClusterServiceVersionSpec,
    ClusterServiceVersionStatus, CrdDescription, CustomResourceDefinitions,
};
pub use operator_group::{OperatorGroup, OperatorGroupSelector, OperatorGroupSpec};
pub use subscription::{Subscription, SubscriptionSpec, SubscriptionStatus};
