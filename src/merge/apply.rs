//! Override application
//!
//! Copies the explicitly configured fields of an override onto the group of
//! the same type held by a target container. Groups missing from the target and
//! fields missing from a target group are skipped, never reported as errors.

use serde::Serialize;

use super::detect::ChangedFields;
use super::locate::{locate, locate_mut, Container};
use super::schema::{GroupOverride, SetOutcome, SettingsGroup};
use super::value::{FieldKind, FieldValue};
use crate::error::Result;

/// One field rewritten on the target.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldChange {
    pub group: &'static str,
    pub field: &'static str,
    pub previous: FieldValue,
    pub value: FieldValue,
}

/// Something the applicator deliberately left alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Skip {
    /// The target holds no group of the override's type.
    GroupAbsent { group: &'static str },
    /// The target group has no field with the changed field's name.
    UnknownField { group: &'static str, field: &'static str },
    KindMismatch { group: &'static str, field: &'static str, expected: FieldKind, found: FieldKind },
}

/// Everything one merge call did to its target.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MergeReport {
    pub changes: Vec<FieldChange>,
    pub skipped: Vec<Skip>,
}

impl MergeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty() && self.skipped.is_empty()
    }

    pub fn absorb(&mut self, other: MergeReport) {
        self.changes.extend(other.changes);
        self.skipped.extend(other.skipped);
    }
}

/// Apply `over` directly onto a group instance.
pub fn apply_to_group<O: GroupOverride>(over: &O, group: &mut O::Target) -> MergeReport {
    apply_changes(over.changed_fields(), group)
}

/// Locate the group of `over`'s target type inside `target` and apply onto it.
///
/// An override with nothing configured never touches the target. Fails only
/// when the target holds more than one group of that type.
pub fn apply_group<O, C>(over: &O, target: &mut C) -> Result<MergeReport>
where
    O: GroupOverride,
    C: Container + ?Sized,
{
    let changed = over.changed_fields();
    if changed.is_empty() {
        return Ok(MergeReport::new());
    }

    let group_name = <O::Target as SettingsGroup>::NAME;
    let container_name = target.container_name();
    match locate_mut::<O::Target, C>(target)? {
        Some(group) => Ok(apply_changes(changed, group)),
        None => {
            tracing::debug!("{} not present on {}, skipping", group_name, container_name);
            let mut report = MergeReport::new();
            report.skipped.push(Skip::GroupAbsent { group: group_name });
            Ok(report)
        }
    }
}

/// Report what [`apply_group`] would do to `target`, leaving it untouched.
pub fn preview_group<O, C>(over: &O, target: &C) -> Result<MergeReport>
where
    O: GroupOverride,
    C: Container + ?Sized,
{
    let changed = over.changed_fields();
    if changed.is_empty() {
        return Ok(MergeReport::new());
    }

    let group_name = <O::Target as SettingsGroup>::NAME;
    match locate::<O::Target, C>(target)? {
        Some(group) => Ok(preview_changes(&changed, group)),
        None => {
            let mut report = MergeReport::new();
            report.skipped.push(Skip::GroupAbsent { group: group_name });
            Ok(report)
        }
    }
}

fn preview_changes<G: SettingsGroup>(changed: &ChangedFields, group: &G) -> MergeReport {
    let mut report = MergeReport::new();

    for (field, value) in changed.iter() {
        let found = value.kind();
        match group.field(field) {
            Some(current) if current.kind() == found => report.changes.push(FieldChange {
                group: G::NAME,
                field,
                previous: current,
                value: value.clone(),
            }),
            Some(current) => report.skipped.push(Skip::KindMismatch {
                group: G::NAME,
                field,
                expected: current.kind(),
                found,
            }),
            None => report.skipped.push(Skip::UnknownField { group: G::NAME, field }),
        }
    }

    report
}

fn apply_changes<G: SettingsGroup>(changed: ChangedFields, group: &mut G) -> MergeReport {
    let mut report = MergeReport::new();

    for (field, value) in changed {
        let found = value.kind();
        match group.set_field(field, value.clone()) {
            SetOutcome::Updated { previous } => {
                tracing::info!(group = G::NAME, field, "updating {} with {} - {}", G::NAME, field, value);
                report.changes.push(FieldChange { group: G::NAME, field, previous, value });
            }
            SetOutcome::UnknownField => {
                tracing::debug!(
                    "{} has no field {} (declares {}), skipping",
                    G::NAME,
                    field,
                    G::FIELDS.join(", ")
                );
                report.skipped.push(Skip::UnknownField { group: G::NAME, field });
            }
            SetOutcome::KindMismatch { expected } => {
                tracing::warn!(
                    "{}.{} expects a {} value but the override holds a {}, skipping",
                    G::NAME,
                    field,
                    expected,
                    found
                );
                report.skipped.push(Skip::KindMismatch { group: G::NAME, field, expected, found });
            }
        }
    }

    report
}
