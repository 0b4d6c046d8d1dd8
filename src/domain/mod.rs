//! Domain types: settings groups, the master config and the sku registry

pub mod groups;
pub mod master;
pub mod registry;
pub mod sku;

pub use groups::{
    DataPartitionDeploymentConfig, DataPartitionDeploymentOverride, ExampleSettings,
    ExampleSettingsOverride, MsiDataPlaneConfig, MsiDataPlaneOverride,
};
pub use master::MasterConfig;
pub use registry::SkuDefinitions;
pub use sku::SkuConfiguration;
