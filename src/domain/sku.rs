//! Sku/tier specific override bundle

use serde::{Deserialize, Serialize};

use super::groups::{
    DataPartitionDeploymentConfig, DataPartitionDeploymentOverride, ExampleSettings,
    ExampleSettingsOverride, MsiDataPlaneConfig, MsiDataPlaneOverride,
};
use crate::error::{ConfigError, Result};
use crate::merge::{
    apply_group, apply_to_group, locate, preview_group, ChangedFields, Container, GroupOverride,
    Member, MemberMut, MergeReport, SettingsGroup,
};

/// One typed merge step: apply a single override group of `sku` onto `target`.
type MergeStep<C> = fn(&SkuConfiguration, &mut C) -> Result<MergeReport>;

/// Read-only counterpart of [`MergeStep`].
type PreviewStep<C> = fn(&SkuConfiguration, &C) -> Result<MergeReport>;

/// Overrides for one (sku, tier) pair.
///
/// A freshly constructed value has every group fully unset; only what the
/// document supplies is treated as explicitly configured.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkuConfiguration {
    /// Sku level these settings apply to.
    #[serde(rename = "SkuName", skip_serializing_if = "Option::is_none")]
    pub sku_name: Option<String>,

    /// Tier level these settings apply to.
    #[serde(rename = "SkuTier", skip_serializing_if = "Option::is_none")]
    pub sku_tier: Option<String>,

    #[serde(rename = "DataPartitionDeploymentConfig")]
    pub data_partition_deployment_config: DataPartitionDeploymentOverride,

    #[serde(rename = "MsiDataPlaneConfig")]
    pub msi_data_plane_config: MsiDataPlaneOverride,

    #[serde(rename = "ExampleSettings")]
    pub example_settings: ExampleSettingsOverride,
}

impl SkuConfiguration {
    pub fn new(sku: impl Into<String>, tier: impl Into<String>) -> Self {
        Self { sku_name: Some(sku.into()), sku_tier: Some(tier.into()), ..Self::default() }
    }

    /// Display label, `<sku>/<tier>` with `?` for a missing part.
    pub fn label(&self) -> String {
        format!(
            "{}/{}",
            self.sku_name.as_deref().unwrap_or("?"),
            self.sku_tier.as_deref().unwrap_or("?")
        )
    }

    /// Case-insensitive match on both identity components.
    ///
    /// An entry missing its name or tier never matches.
    pub fn matches(&self, sku: &str, tier: &str) -> bool {
        match (&self.sku_name, &self.sku_tier) {
            (Some(name), Some(own_tier)) => eq_ignore_case(name, sku) && eq_ignore_case(own_tier, tier),
            _ => false,
        }
    }

    /// Names of the settings groups this override bundle can carry.
    pub fn group_names() -> [&'static str; 3] {
        [DataPartitionDeploymentConfig::NAME, MsiDataPlaneConfig::NAME, ExampleSettings::NAME]
    }

    /// Explicitly configured fields of the override for group `G`.
    ///
    /// Empty when this bundle carries no override of that group.
    pub fn modified_values<G: SettingsGroup>(&self) -> Result<ChangedFields> {
        Ok(locate::<G::Override, _>(self)?.map(GroupOverride::changed_fields).unwrap_or_default())
    }

    /// Changed fields of every group, in declaration order.
    pub fn changes_by_group(&self) -> [(&'static str, ChangedFields); 3] {
        [
            (DataPartitionDeploymentConfig::NAME, self.data_partition_deployment_config.changed_fields()),
            (MsiDataPlaneConfig::NAME, self.msi_data_plane_config.changed_fields()),
            (ExampleSettings::NAME, self.example_settings.changed_fields()),
        ]
    }

    /// Apply the override for group `G` onto an instance of `G` directly.
    pub fn modify_object<G: SettingsGroup>(&self, group: &mut G) -> Result<MergeReport> {
        match locate::<G::Override, _>(self)? {
            Some(over) => Ok(apply_to_group(over, group)),
            None => Ok(MergeReport::new()),
        }
    }

    /// Apply the override for group `G` onto the `G` member of `target`.
    pub fn modify_parent_object<G, C>(&self, target: &mut C) -> Result<MergeReport>
    where
        G: SettingsGroup,
        C: Container + ?Sized,
    {
        match locate::<G::Override, _>(self)? {
            Some(over) => apply_group(over, target),
            None => Ok(MergeReport::new()),
        }
    }

    /// Apply every override group onto `target` in one pass.
    pub fn update_all_settings<C: Container + ?Sized>(&self, target: &mut C) -> Result<MergeReport> {
        let mut report = MergeReport::new();
        for (_, step) in Self::merge_steps::<C>() {
            report.absorb(step(self, target)?);
        }
        Ok(report)
    }

    /// Apply the single override group called `group` (case-insensitive).
    pub fn update_group<C: Container + ?Sized>(&self, group: &str, target: &mut C) -> Result<MergeReport> {
        let step = find_step(Self::merge_steps::<C>(), group)?;
        step(self, target)
    }

    /// What [`update_all_settings`](Self::update_all_settings) would change, without writing.
    pub fn preview_all_settings<C: Container + ?Sized>(&self, target: &C) -> Result<MergeReport> {
        let mut report = MergeReport::new();
        for (_, step) in Self::preview_steps::<C>() {
            report.absorb(step(self, target)?);
        }
        Ok(report)
    }

    pub fn preview_update_group<C: Container + ?Sized>(&self, group: &str, target: &C) -> Result<MergeReport> {
        let step = find_step(Self::preview_steps::<C>(), group)?;
        step(self, target)
    }

    fn preview_steps<C: Container + ?Sized>() -> [(&'static str, PreviewStep<C>); 3] {
        [
            (DataPartitionDeploymentConfig::NAME, |sku, target| {
                preview_group(&sku.data_partition_deployment_config, target)
            }),
            (MsiDataPlaneConfig::NAME, |sku, target| preview_group(&sku.msi_data_plane_config, target)),
            (ExampleSettings::NAME, |sku, target| preview_group(&sku.example_settings, target)),
        ]
    }

    fn merge_steps<C: Container + ?Sized>() -> [(&'static str, MergeStep<C>); 3] {
        [
            (DataPartitionDeploymentConfig::NAME, |sku, target| {
                apply_group(&sku.data_partition_deployment_config, target)
            }),
            (MsiDataPlaneConfig::NAME, |sku, target| apply_group(&sku.msi_data_plane_config, target)),
            (ExampleSettings::NAME, |sku, target| apply_group(&sku.example_settings, target)),
        ]
    }
}

impl Container for SkuConfiguration {
    fn container_name(&self) -> &'static str {
        "SkuConfiguration"
    }

    fn members(&self) -> Vec<Member<'_>> {
        vec![
            Member::new("DataPartitionDeploymentConfig", &self.data_partition_deployment_config),
            Member::new("MsiDataPlaneConfig", &self.msi_data_plane_config),
            Member::new("ExampleSettings", &self.example_settings),
        ]
    }

    fn members_mut(&mut self) -> Vec<MemberMut<'_>> {
        vec![
            MemberMut::new("DataPartitionDeploymentConfig", &mut self.data_partition_deployment_config),
            MemberMut::new("MsiDataPlaneConfig", &mut self.msi_data_plane_config),
            MemberMut::new("ExampleSettings", &mut self.example_settings),
        ]
    }
}

fn find_step<S>(steps: [(&'static str, S); 3], group: &str) -> Result<S> {
    steps
        .into_iter()
        .find(|(name, _)| eq_ignore_case(name, group))
        .map(|(_, step)| step)
        .ok_or_else(|| ConfigError::UnknownGroup {
            name: group.to_string(),
            known: SkuConfiguration::group_names().to_vec(),
        })
}

pub(crate) fn eq_ignore_case(left: &str, right: &str) -> bool {
    left.to_lowercase() == right.to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::MasterConfig;
    use crate::merge::FieldValue;

    crate::settings_group! {
        struct QuotaSettings => QuotaOverride {
            limit: i64 = "Limit",
        }
    }

    #[test]
    fn test_new_is_fully_unset() {
        let sku = SkuConfiguration::new("Standard", "Standard");
        assert!(sku.changes_by_group().iter().all(|(_, changed)| changed.is_empty()));
    }

    #[test]
    fn test_matches_ignores_case() {
        let sku = SkuConfiguration::new("Standard", "Standard");
        assert!(sku.matches("STANDARD", "standard"));
        assert!(!sku.matches("Standard", "Premium"));
        assert!(!SkuConfiguration::default().matches("", ""));
    }

    #[test]
    fn test_modified_values_for_group() {
        let mut sku = SkuConfiguration::new("developer", "developer");
        sku.data_partition_deployment_config.max_data_partition_count = Some(1);

        let changed = sku.modified_values::<DataPartitionDeploymentConfig>().expect("unique");
        assert_eq!(changed.len(), 1);
        assert_eq!(changed.get("MaxDataPartitionCount"), Some(&FieldValue::Int(1)));
        assert!(sku.modified_values::<MsiDataPlaneConfig>().expect("unique").is_empty());
    }

    #[test]
    fn test_modify_object_leaves_override_untouched() {
        let mut sku = SkuConfiguration::new("developer", "developer");
        sku.example_settings.int_value = Some(7);
        let before = sku.clone();

        let mut settings = ExampleSettings { int_value: 1, string_value: "kept".into(), ..Default::default() };
        let report = sku.modify_object(&mut settings).expect("merge");

        assert_eq!(settings.int_value, 7);
        assert_eq!(settings.string_value, "kept");
        assert_eq!(report.changes.len(), 1);
        assert_eq!(sku, before);
    }

    #[test]
    fn test_update_group_rejects_unknown_name() {
        let sku = SkuConfiguration::new("developer", "developer");
        let mut other = SkuConfiguration::default();
        let err = sku.update_group("NoSuchGroup", &mut other).err().expect("unknown group");
        assert!(matches!(err, ConfigError::UnknownGroup { .. }));
        assert_eq!(
            err.to_string(),
            "unknown settings group 'NoSuchGroup' (expected one of: DataPartitionDeploymentConfig, \
             MsiDataPlaneConfig, ExampleSettings)"
        );
        assert!(sku.preview_update_group("NoSuchGroup", &other).is_err());
    }

    #[test]
    fn test_group_not_carried_by_sku_yields_nothing() {
        let mut sku = SkuConfiguration::new("developer", "developer");
        sku.example_settings.int_value = Some(7);

        assert!(sku.modified_values::<QuotaSettings>().expect("unique").is_empty());

        let mut quota = QuotaSettings { limit: 3 };
        assert!(sku.modify_object(&mut quota).expect("merge").is_empty());
        assert_eq!(quota.limit, 3);

        let mut target = SkuConfiguration::default();
        assert!(sku.modify_parent_object::<QuotaSettings, _>(&mut target).expect("merge").is_empty());
        assert_eq!(target, SkuConfiguration::default());
    }

    #[test]
    fn test_preview_leaves_target_untouched() {
        let mut sku = SkuConfiguration::new("developer", "developer");
        sku.example_settings.int_value = Some(7);
        sku.msi_data_plane_config.cmek_enabled = Some(false);

        let target = MasterConfig {
            example_settings: Some(ExampleSettings { int_value: 1, ..Default::default() }),
            ..Default::default()
        };
        let before = target.clone();

        let preview = sku.preview_all_settings(&target).expect("preview");
        assert_eq!(target, before);
        assert_eq!(preview.changes.len(), 1);
        assert_eq!(preview.changes[0].previous, FieldValue::Int(1));
        assert_eq!(preview.skipped.len(), 1);

        let scoped = sku.preview_update_group("exampleSETTINGS", &target).expect("preview");
        assert_eq!(scoped.changes, preview.changes);
        assert!(scoped.skipped.is_empty());

        let mut applied = before;
        assert_eq!(sku.update_all_settings(&mut applied).expect("merge"), preview);
    }

    #[test]
    fn test_label() {
        assert_eq!(SkuConfiguration::new("Standard", "Basic").label(), "Standard/Basic");
        assert_eq!(SkuConfiguration::default().label(), "?/?");
    }

    #[test]
    fn test_deserialize_partial_sku() {
        let json = r#"{
            "SkuName": "developer",
            "SkuTier": "developer",
            "MsiDataPlaneConfig": {"CMEKEnabled": false}
        }"#;
        let sku: SkuConfiguration = serde_json::from_str(json).expect("parse");
        let changed = sku.modified_values::<MsiDataPlaneConfig>().expect("unique");
        assert_eq!(changed.get("CMEKEnabled"), Some(&FieldValue::Bool(false)));
        assert!(sku.modified_values::<ExampleSettings>().expect("unique").is_empty());
    }
}
