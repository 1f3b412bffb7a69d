//! Single-string policy value.

use devpol_parcel::{Parcel, Parcelable};

use crate::error::{PolicyError, PolicyResult};
use crate::limits::PolicyLimits;

const VALUE_LABEL: &str = "policyValue";

/// An immutable single-string policy value.
///
/// Wire form: one length-prefixed string, no count prefix.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringPolicyValue {
    value: String,
}

impl StringPolicyValue {
    /// Wrap a string, validating its length when size tracking is enabled.
    pub fn new(value: String, limits: &PolicyLimits) -> PolicyResult<Self> {
        limits.enforce_max_string_length(&value, VALUE_LABEL)?;
        Ok(Self { value })
    }

    /// The wrapped string.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Consume the value, yielding the string.
    pub fn into_value(self) -> String {
        self.value
    }
}

impl Parcelable for StringPolicyValue {
    type Error = PolicyError;
    type Context = PolicyLimits;

    fn write_to_parcel(&self, dest: &mut Parcel) {
        dest.write_string(&self.value);
    }

    fn create_from_parcel(source: &mut Parcel, limits: &PolicyLimits) -> PolicyResult<Self> {
        Self::new(source.read_string()?, limits)
    }
}

impl std::fmt::Display for StringPolicyValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "StringPolicyValue {{ {} }}", self.value)
    }
}
