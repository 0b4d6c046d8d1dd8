//! Field-change detection
//!
//! Produces the fields of an override that were explicitly configured, in
//! declaration order.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::sentinel::Unset;
use super::value::{FieldValue, Leaf};

/// Field name to value, for exactly the fields that differ from their sentinel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ChangedFields {
    entries: Vec<(&'static str, FieldValue)>,
}

impl ChangedFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `slot` under `name` when it holds an explicitly set value.
    ///
    /// `None` and present-but-sentinel values are ignored.
    pub fn record<T: Leaf>(&mut self, name: &'static str, slot: &Option<T>) {
        if slot.is_unset() {
            return;
        }
        if let Some(value) = slot {
            self.insert(name, value.to_value());
        }
    }

    /// Insert or replace a change.
    pub fn insert(&mut self, name: &'static str, value: FieldValue) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.entries.iter().find(|(existing, _)| *existing == name).map(|(_, value)| value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &FieldValue)> {
        self.entries.iter().map(|(name, value)| (*name, value))
    }
}

impl Serialize for ChangedFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl IntoIterator for ChangedFields {
    type Item = (&'static str, FieldValue);
    type IntoIter = std::vec::IntoIter<(&'static str, FieldValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::merge::sentinel::UNSET_NUMERIC;
    use std::collections::BTreeMap;

    #[test]
    fn test_record_skips_none_and_sentinels() {
        let mut changed = ChangedFields::new();
        changed.record::<i64>("MinDataPartitionCount", &None);
        changed.record("MaxDataPartitionCount", &Some(UNSET_NUMERIC));
        changed.record("DataPartitionId", &Some(String::new()));
        changed.record("RoleAssignmentParameters", &Some(BTreeMap::<String, String>::new()));
        assert!(changed.is_empty());
    }

    #[test]
    fn test_record_keeps_explicit_false() {
        let mut changed = ChangedFields::new();
        changed.record("CMEKEnabled", &Some(false));
        assert_eq!(changed.len(), 1);
        assert_eq!(changed.get("CMEKEnabled"), Some(&FieldValue::Bool(false)));
    }

    #[test]
    fn test_declaration_order_is_preserved() {
        let mut changed = ChangedFields::new();
        changed.record("b", &Some(2_i64));
        changed.record("a", &Some(1_i64));
        let names: Vec<_> = changed.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["b", "a"]);
    }

    #[test]
    fn test_serializes_as_object() {
        let mut changed = ChangedFields::new();
        changed.record("MaxDataPartitionCount", &Some(50_i64));
        let json = serde_json::to_value(&changed).expect("serialize");
        assert_eq!(json, serde_json::json!({"MaxDataPartitionCount": 50}));
    }

    #[test]
    fn test_insert_replaces_existing() {
        let mut changed = ChangedFields::new();
        changed.insert("IntValue", FieldValue::Int(1));
        changed.insert("IntValue", FieldValue::Int(2));
        assert_eq!(changed.len(), 1);
        assert_eq!(changed.get("IntValue"), Some(&FieldValue::Int(2)));
    }
}
