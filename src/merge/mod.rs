//! Override-merge engine
//!
//! Detects which fields of a sku override were explicitly set, locates the
//! matching settings group on a target container by type, and copies only
//! those fields across.

pub mod apply;
pub mod detect;
pub mod locate;
pub mod schema;
pub mod sentinel;
pub mod value;

pub use apply::{apply_group, apply_to_group, preview_group, FieldChange, MergeReport, Skip};
pub use detect::ChangedFields;
pub use locate::{locate, locate_mut, validate_container, Container, Member, MemberMut};
pub use schema::{GroupOverride, SetOutcome, SettingsGroup};
pub use sentinel::{Unset, FLOAT_EPSILON, UNSET_FLOAT, UNSET_NUMERIC};
pub use value::{FieldKind, FieldValue, Leaf};
