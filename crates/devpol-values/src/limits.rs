//! Size-tracking limits for policy values.
//!
//! The enclosing management service decides whether stored policy strings are
//! length-capped. Rather than a process-wide flag, the decision is carried in a
//! [`PolicyLimits`] value injected into every constructor, so tests and embedders
//! can flip it per call site.

use serde::{Deserialize, Serialize};

use crate::error::{PolicyError, PolicyResult};

/// Default per-string byte cap when size tracking is enabled.
pub const DEFAULT_MAX_STRING_LENGTH: usize = 65_535;

/// Validation limits applied at policy value construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyLimits {
    /// Whether string lengths are enforced at all. Off by default.
    #[serde(default)]
    pub size_tracking: bool,

    /// Maximum byte length of any stored policy string.
    #[serde(default = "default_max_string_length")]
    pub max_string_length: usize,
}

fn default_max_string_length() -> usize {
    DEFAULT_MAX_STRING_LENGTH
}

impl Default for PolicyLimits {
    fn default() -> Self {
        Self {
            size_tracking: false,
            max_string_length: DEFAULT_MAX_STRING_LENGTH,
        }
    }
}

impl PolicyLimits {
    /// Limits with size tracking enabled at the default cap.
    pub fn enforced() -> Self {
        Self {
            size_tracking: true,
            ..Self::default()
        }
    }

    /// Limits with size tracking enabled at a specific cap.
    pub fn with_max_string_length(max: usize) -> Self {
        Self {
            size_tracking: true,
            max_string_length: max,
        }
    }

    /// Whether size tracking is enabled.
    pub fn size_tracking_enabled(&self) -> bool {
        self.size_tracking
    }

    /// Reject `value` if size tracking is on and it exceeds the cap.
    ///
    /// `label` names the field being checked and appears in the error.
    pub fn enforce_max_string_length(&self, value: &str, label: &str) -> PolicyResult<()> {
        if !self.size_tracking {
            return Ok(());
        }
        if value.len() > self.max_string_length {
            return Err(PolicyError::ValueTooLarge {
                label: label.to_string(),
                length: value.len(),
                max: self.max_string_length,
            });
        }
        Ok(())
    }

    /// Parse limits from YAML, absent fields defaulting.
    pub fn from_yaml(yaml: &str) -> PolicyResult<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tracking_off() {
        let limits = PolicyLimits::default();
        assert!(!limits.size_tracking_enabled());
        assert_eq!(limits.max_string_length, DEFAULT_MAX_STRING_LENGTH);
    }

    #[test]
    fn test_enforce_disabled_allows_anything() {
        let limits = PolicyLimits::default();
        let huge = "x".repeat(DEFAULT_MAX_STRING_LENGTH + 1);
        assert!(limits.enforce_max_string_length(&huge, "policyValue").is_ok());
    }

    #[test]
    fn test_enforce_enabled_rejects_oversized() {
        let limits = PolicyLimits::with_max_string_length(4);
        let err = limits
            .enforce_max_string_length("toolong", "policyValue")
            .unwrap_err();
        assert!(err.is_validation());
        assert!(matches!(
            err,
            PolicyError::ValueTooLarge {
                length: 7,
                max: 4,
                ..
            }
        ));
    }

    #[test]
    fn test_enforce_enabled_allows_at_cap() {
        let limits = PolicyLimits::with_max_string_length(4);
        assert!(limits.enforce_max_string_length("four", "policyValue").is_ok());
    }

    #[test]
    fn test_from_yaml_defaults() {
        let limits = PolicyLimits::from_yaml("{}").unwrap();
        assert_eq!(limits, PolicyLimits::default());
    }

    #[test]
    fn test_from_yaml_explicit() {
        let limits = PolicyLimits::from_yaml("size_tracking: true\nmax_string_length: 128").unwrap();
        assert!(limits.size_tracking_enabled());
        assert_eq!(limits.max_string_length, 128);
    }

    #[test]
    fn test_from_yaml_invalid() {
        let err = PolicyLimits::from_yaml("max_string_length: [not, a, number]").unwrap_err();
        assert!(matches!(err, PolicyError::Config(_)));
    }
}
