//! Type-directed member lookup
//!
//! A [`Container`] lists its members explicitly. Lookup matches the exact
//! member type through `TypeId`, so there is no subtype or trait matching.

use std::any::{type_name, Any, TypeId};

use crate::error::{ConfigError, Result};

/// A shared view of one declared container slot.
///
/// `value` is `None` for an optional slot the document left empty. The slot
/// still counts towards type uniqueness.
pub struct Member<'a> {
    pub name: &'static str,
    pub type_id: TypeId,
    pub type_name: &'static str,
    pub value: Option<&'a dyn Any>,
}

impl<'a> Member<'a> {
    pub fn new<T: Any>(name: &'static str, value: &'a T) -> Self {
        Self { name, type_id: TypeId::of::<T>(), type_name: type_name::<T>(), value: Some(value as &dyn Any) }
    }

    pub fn optional<T: Any>(name: &'static str, slot: &'a Option<T>) -> Self {
        Self {
            name,
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
            value: slot.as_ref().map(|value| value as &dyn Any),
        }
    }
}

/// A mutable view of one declared container slot.
pub struct MemberMut<'a> {
    pub name: &'static str,
    pub type_id: TypeId,
    pub value: Option<&'a mut dyn Any>,
}

impl<'a> MemberMut<'a> {
    pub fn new<T: Any>(name: &'static str, value: &'a mut T) -> Self {
        Self { name, type_id: TypeId::of::<T>(), value: Some(value as &mut dyn Any) }
    }

    pub fn optional<T: Any>(name: &'static str, slot: &'a mut Option<T>) -> Self {
        Self { name, type_id: TypeId::of::<T>(), value: slot.as_mut().map(|value| value as &mut dyn Any) }
    }
}

/// An object whose settings groups can be found by type.
///
/// `members` and `members_mut` must list every declared slot, populated or
/// not, in the same order.
pub trait Container {
    fn container_name(&self) -> &'static str;

    fn members(&self) -> Vec<Member<'_>>;

    fn members_mut(&mut self) -> Vec<MemberMut<'_>>;
}

/// Find the single member of type `G`.
///
/// Returns `Ok(None)` when no slot has that type or the only such slot is
/// empty, and [`ConfigError::AmbiguousSchema`] when more than one slot is
/// declared with it.
pub fn locate<G: Any, C: Container + ?Sized>(container: &C) -> Result<Option<&G>> {
    let mut matches: Vec<Member<'_>> =
        container.members().into_iter().filter(|m| m.type_id == TypeId::of::<G>()).collect();

    if matches.len() > 1 {
        return Err(ambiguous::<G>(
            container.container_name(),
            matches.iter().map(|m| m.name).collect(),
        ));
    }

    match matches.pop() {
        Some(Member { value: Some(value), .. }) => Ok(value.downcast_ref::<G>()),
        Some(Member { name, value: None, .. }) => {
            tracing::debug!("{}.{} is empty", container.container_name(), name);
            Ok(None)
        }
        None => {
            tracing::debug!(
                "{} has no member of type {}",
                container.container_name(),
                type_name::<G>()
            );
            Ok(None)
        }
    }
}

/// Mutable counterpart of [`locate`].
pub fn locate_mut<G: Any, C: Container + ?Sized>(container: &mut C) -> Result<Option<&mut G>> {
    let container_name = container.container_name();
    let mut matches: Vec<MemberMut<'_>> =
        container.members_mut().into_iter().filter(|m| m.type_id == TypeId::of::<G>()).collect();

    if matches.len() > 1 {
        return Err(ambiguous::<G>(container_name, matches.iter().map(|m| m.name).collect()));
    }

    match matches.pop() {
        Some(MemberMut { value: Some(value), .. }) => Ok(value.downcast_mut::<G>()),
        Some(MemberMut { name, value: None, .. }) => {
            tracing::debug!("{}.{} is empty", container_name, name);
            Ok(None)
        }
        None => {
            tracing::debug!("{} has no member of type {}", container_name, type_name::<G>());
            Ok(None)
        }
    }
}

/// Check that no two declared slots of `container` share a type, whether or
/// not they are populated.
pub fn validate_container<C: Container + ?Sized>(container: &C) -> Result<()> {
    let members = container.members();
    for (i, member) in members.iter().enumerate() {
        let duplicates: Vec<&'static str> = members[i..]
            .iter()
            .filter(|other| other.type_id == member.type_id)
            .map(|other| other.name)
            .collect();
        if duplicates.len() > 1 {
            return Err(ConfigError::AmbiguousSchema {
                container: container.container_name(),
                type_name: member.type_name,
                fields: duplicates,
            });
        }
    }
    Ok(())
}

fn ambiguous<G: Any>(container: &'static str, fields: Vec<&'static str>) -> ConfigError {
    ConfigError::AmbiguousSchema { container, type_name: type_name::<G>(), fields }
}
