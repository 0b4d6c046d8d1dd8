//! Settings group schema
//!
//! Every mergeable group is declared once through [`settings_group!`], which
//! expands to two structs sharing one field table:
//!
//! - the group itself, holding live values (what a master config contains)
//! - its override, where every field is `Option<T>` (what a sku contains)
//!
//! The expansion also provides the name-keyed accessors used by the
//! applicator and the change detector for the override. No runtime
//! reflection is involved; the field table is fixed at compile time.

use std::any::Any;

use super::detect::ChangedFields;
use super::value::{FieldKind, FieldValue, Leaf};

/// Result of assigning one field on a settings group.
#[derive(Debug, Clone, PartialEq)]
pub enum SetOutcome {
    Updated { previous: FieldValue },
    /// The group declares no field with that name.
    UnknownField,
    /// The field exists but holds a different kind of value.
    KindMismatch { expected: FieldKind },
}

/// A bundle of leaf settings that is merged as one typed unit.
pub trait SettingsGroup: Any + Default {
    /// The override form of this group.
    type Override: GroupOverride<Target = Self>;

    /// Group type name, used in logs and reports.
    const NAME: &'static str;

    /// Field identifiers as they appear in the configuration document.
    const FIELDS: &'static [&'static str];

    /// Current value of a field, or `None` when the group has no such field.
    fn field(&self, name: &str) -> Option<FieldValue>;

    fn set_field(&mut self, name: &str, value: FieldValue) -> SetOutcome;
}

/// The sku-specific form of a settings group.
pub trait GroupOverride: Any + Default {
    /// The group type whose instance receives this override's values.
    type Target: SettingsGroup;

    /// Fields explicitly configured on this override.
    fn changed_fields(&self) -> ChangedFields;
}

/// Assign `value` to `slot` if the kinds agree.
pub fn assign<T: Leaf>(slot: &mut T, value: FieldValue) -> SetOutcome {
    match T::from_value(value) {
        Some(new_value) => {
            let previous = slot.to_value();
            *slot = new_value;
            SetOutcome::Updated { previous }
        }
        None => SetOutcome::KindMismatch { expected: T::KIND },
    }
}

/// Declare a settings group together with its override form.
///
/// ```
/// use sku_config::settings_group;
///
/// settings_group! {
///     /// Retry tuning.
///     pub struct RetrySettings => RetryOverride {
///         /// Attempts before giving up.
///         attempts: i64 = "Attempts",
///         jitter: bool = "Jitter",
///     }
/// }
///
/// use sku_config::merge::GroupOverride;
/// let over = RetryOverride { attempts: Some(5), ..Default::default() };
/// assert_eq!(over.changed_fields().len(), 1);
/// ```
#[macro_export]
macro_rules! settings_group {
    (
        $(#[$group_meta:meta])*
        $vis:vis struct $group:ident => $override:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $ty:ty = $key:literal
            ),* $(,)?
        }
    ) => {
        $(#[$group_meta])*
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        $vis struct $group {
            $(
                $(#[$field_meta])*
                #[serde(rename = $key)]
                pub $field: $ty,
            )*
        }

        #[doc = concat!("Sku-specific overrides for [`", stringify!($group), "`]. `None` means not configured.")]
        #[derive(Debug, Clone, Default, PartialEq, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(default)]
        $vis struct $override {
            $(
                #[serde(rename = $key, skip_serializing_if = "Option::is_none")]
                pub $field: ::std::option::Option<$ty>,
            )*
        }

        impl $crate::merge::SettingsGroup for $group {
            type Override = $override;

            const NAME: &'static str = stringify!($group);
            const FIELDS: &'static [&'static str] = &[$($key),*];

            fn field(&self, name: &str) -> ::std::option::Option<$crate::merge::FieldValue> {
                match name {
                    $($key => ::std::option::Option::Some($crate::merge::Leaf::to_value(&self.$field)),)*
                    _ => ::std::option::Option::None,
                }
            }

            fn set_field(
                &mut self,
                name: &str,
                value: $crate::merge::FieldValue,
            ) -> $crate::merge::SetOutcome {
                match name {
                    $($key => $crate::merge::schema::assign(&mut self.$field, value),)*
                    _ => {
                        let _ = value;
                        $crate::merge::SetOutcome::UnknownField
                    }
                }
            }
        }

        impl $crate::merge::GroupOverride for $override {
            type Target = $group;

            fn changed_fields(&self) -> $crate::merge::ChangedFields {
                let mut changed = $crate::merge::ChangedFields::new();
                $(changed.record($key, &self.$field);)*
                changed
            }
        }
    };
}
