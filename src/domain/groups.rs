//! Settings groups that a sku may override

use std::collections::BTreeMap;

use crate::settings_group;

settings_group! {
    /// Data partition deployment limits and provisioning parameters.
    pub struct DataPartitionDeploymentConfig => DataPartitionDeploymentOverride {
        /// Whether keyvault secrets are required.
        keyvault_secrets_required: bool = "keyvaultSecretsRequired",
        /// Template spec resource group name.
        data_partition_id: String = "DataPartitionId",
        role_assignment_parameters: BTreeMap<String, String> = "RoleAssignmentParameters",
        data_partition_storage_accounts_prefix: BTreeMap<String, String> = "DataPartitionStorageAccountsPrefix",
        /// Minimum number of data partitions per instance.
        min_data_partition_count: i64 = "MinDataPartitionCount",
        /// Maximum number of data partitions per instance.
        max_data_partition_count: i64 = "MaxDataPartitionCount",
    }
}

settings_group! {
    /// Managed identity data plane settings.
    pub struct MsiDataPlaneConfig => MsiDataPlaneOverride {
        /// Whether customer managed keys are enabled.
        cmek_enabled: bool = "CMEKEnabled",
        cmek_for_cosmos_db_enabled: bool = "CMEKForCosmosDBEnabled",
        cmek_for_storage_account_enabled: bool = "CMEKForStorageAccountEnabled",
        /// API version used against the MSI data plane.
        api_version: String = "ApiVersion",
        /// AAD client id of the managed identity.
        client_id: String = "ClientID",
        client_secret_name: String = "ClientSecretName",
        service_audience_endpoint: String = "ServiceAudienceEndpoint",
        mirp_tenant_id: String = "MIRPTenantId",
        mi_resource_endpoint: String = "MIResourceEndpoint",
        app_id: String = "AppId",
        /// Certificate holding the client secret.
        mi_client_cert_name: String = "MIClientCertName",
        delay_in_retries_seconds: i64 = "DelayInRetriesSeconds",
        /// ARM control plane endpoint used for provisioning calls.
        arm_cp_endpoint: String = "ARMCPEndpoint",
        sts_endpoint: String = "STSEndpoint",
    }
}

settings_group! {
    /// Demonstration group covering every leaf kind.
    pub struct ExampleSettings => ExampleSettingsOverride {
        boolean_value: bool = "BooleanValue",
        int_value: i64 = "IntValue",
        string_value: String = "StringValue",
        float_value: f64 = "FloatValue",
    }
}
