//! Set-of-strings policy value.

use std::collections::BTreeSet;

use devpol_parcel::{Parcel, Parcelable};

use crate::error::{PolicyError, PolicyResult};
use crate::limits::PolicyLimits;

/// Label reported by validation failures for policy value elements.
const VALUE_LABEL: &str = "policyValue";

/// An immutable set of unique strings carried as one policy value.
///
/// Construction takes ownership of the set, so no caller-retained handle can
/// mutate it afterwards. Equality and hashing are set-based: element order never
/// matters, and equal sets always hash equal.
///
/// Wire form: `int32` element count, then each element as a length-prefixed
/// string. Decode collapses duplicates and runs the same length validation as
/// direct construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringSetPolicyValue {
    value: BTreeSet<String>,
}

impl StringSetPolicyValue {
    /// Wrap a set of strings, validating element lengths when size tracking is
    /// enabled in `limits`. The first oversized element fails construction.
    pub fn new(value: BTreeSet<String>, limits: &PolicyLimits) -> PolicyResult<Self> {
        if limits.size_tracking_enabled() {
            for element in &value {
                limits.enforce_max_string_length(element, VALUE_LABEL)?;
            }
        }
        Ok(Self { value })
    }

    /// The wrapped set.
    pub fn value(&self) -> &BTreeSet<String> {
        &self.value
    }

    /// Consume the value, yielding the set.
    pub fn into_value(self) -> BTreeSet<String> {
        self.value
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.value.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether `element` is in the set.
    pub fn contains(&self, element: &str) -> bool {
        self.value.contains(element)
    }
}

impl Parcelable for StringSetPolicyValue {
    type Error = PolicyError;
    type Context = PolicyLimits;

    /// # Panics
    ///
    /// Panics if the set holds more than `i32::MAX` elements, which the wire
    /// format cannot represent.
    fn write_to_parcel(&self, dest: &mut Parcel) {
        let count = i32::try_from(self.value.len()).expect("set size exceeds i32::MAX");
        dest.write_i32(count);
        for element in &self.value {
            dest.write_string(element);
        }
    }

    fn create_from_parcel(source: &mut Parcel, limits: &PolicyLimits) -> PolicyResult<Self> {
        let count = source.read_size()?;
        let mut value = BTreeSet::new();
        for _ in 0..count {
            value.insert(source.read_string()?);
        }
        Self::new(value, limits)
    }
}

impl std::fmt::Display for StringSetPolicyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StringSetPolicyValue {{ {:?} }}", self.value)
    }
}
