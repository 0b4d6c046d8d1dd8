//! Master configuration: the effective settings overrides are merged into

use serde::{Deserialize, Serialize};

use super::groups::{DataPartitionDeploymentConfig, ExampleSettings, MsiDataPlaneConfig};
use super::registry::SkuDefinitions;
use crate::merge::{Container, Member, MemberMut};

/// Live configuration holding at most one instance of each settings group.
///
/// A group missing from the document stays `None`. Its slot still counts for
/// type uniqueness, but the locator finds nothing there and overrides for it
/// are skipped.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MasterConfig {
    #[serde(rename = "DataPartitionDeploymentConfig", skip_serializing_if = "Option::is_none")]
    pub data_partition_deployment_config: Option<DataPartitionDeploymentConfig>,

    #[serde(rename = "MsiDataPlaneConfig", skip_serializing_if = "Option::is_none")]
    pub msi_data_plane_config: Option<MsiDataPlaneConfig>,

    #[serde(rename = "ExampleSettings", skip_serializing_if = "Option::is_none")]
    pub example_settings: Option<ExampleSettings>,

    #[serde(rename = "SkuDefinitions")]
    pub sku_definitions: SkuDefinitions,
}

impl Container for MasterConfig {
    fn container_name(&self) -> &'static str {
        "MasterConfig"
    }

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::optional("DataPartitionDeploymentConfig", &self.data_partition_deployment_config),
            Member::optional("MsiDataPlaneConfig", &self.msi_data_plane_config),
            Member::optional("ExampleSettings", &self.example_settings),
            Member::new("SkuDefinitions", &self.sku_definitions),
        ]
    }

    fn members_mut(&mut self) -> Vec<MemberMut<'_>> {
        vec![
            MemberMut::optional("DataPartitionDeploymentConfig", &mut self.data_partition_deployment_config),
            MemberMut::optional("MsiDataPlaneConfig", &mut self.msi_data_plane_config),
            MemberMut::optional("ExampleSettings", &mut self.example_settings),
            MemberMut::new("SkuDefinitions", &mut self.sku_definitions),
        ]
    }
}
