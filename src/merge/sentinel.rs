//! Unset sentinels for leaf settings
//!
//! Override fields are `Option<T>`, so `None` is the primary "not configured"
//! state. Documents written against the older sentinel convention still put a
//! reserved value in the field instead of omitting it; those values count as
//! unset too:
//!
//! - integers: `-1`
//! - floats: `-1.0`, compared within [`FLOAT_EPSILON`]
//! - strings and maps: empty
//!
//! Booleans have no spare value, so only `None` means unset for them.

use std::collections::BTreeMap;

/// Reserved out-of-range value meaning "not set" for integer fields.
pub const UNSET_NUMERIC: i64 = -1;

/// Reserved value meaning "not set" for float fields.
pub const UNSET_FLOAT: f64 = -1.0;

/// Tolerance used when comparing a float against [`UNSET_FLOAT`].
pub const FLOAT_EPSILON: f64 = 1e-9;

/// Whether a present value still carries the unset sentinel.
pub trait Unset {
    fn is_unset(&self) -> bool;
}

impl Unset for bool {
    fn is_unset(&self) -> bool {
        false
    }
}

impl Unset for i64 {
    fn is_unset(&self) -> bool {
        *self == UNSET_NUMERIC
    }
}

impl Unset for f64 {
    fn is_unset(&self) -> bool {
        (*self - UNSET_FLOAT).abs() < FLOAT_EPSILON
    }
}

impl Unset for String {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl Unset for BTreeMap<String, String> {
    fn is_unset(&self) -> bool {
        self.is_empty()
    }
}

impl<T: Unset> Unset for Option<T> {
    fn is_unset(&self) -> bool {
        self.as_ref().map_or(true, Unset::is_unset)
    }
}
