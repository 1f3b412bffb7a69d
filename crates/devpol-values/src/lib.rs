//! Typed device-policy values with size-tracked validation.
//!
//! A policy value wraps one configurable administrative setting. Each value type
//! is an immutable value object with a parcel wire form, validated at
//! construction when size tracking is enabled:
//!
//! - [`StringSetPolicyValue`] — a set of unique strings
//! - [`StringPolicyValue`] — a single string
//!
//! Validation limits are injected per call site via [`PolicyLimits`] rather than
//! read from process-wide state, so the gate is testable and embedder-controlled.
//!
//! # Quick Start
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use devpol_parcel::{Parcel, Parcelable};
//! use devpol_values::{PolicyLimits, StringSetPolicyValue};
//!
//! # fn example() -> devpol_values::PolicyResult<()> {
//! let limits = PolicyLimits::enforced();
//! let packages: BTreeSet<String> =
//!     ["com.example.a", "com.example.b"].iter().map(|s| s.to_string()).collect();
//! let value = StringSetPolicyValue::new(packages, &limits)?;
//!
//! let mut parcel = Parcel::new();
//! value.write_to_parcel(&mut parcel);
//!
//! let mut parcel = Parcel::from_bytes(parcel.into_bytes());
//! let decoded = StringSetPolicyValue::create_from_parcel(&mut parcel, &limits)?;
//! assert_eq!(decoded, value);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod error;
pub mod limits;
pub mod string;
pub mod string_set;

pub use error::{PolicyError, PolicyResult};
pub use limits::{PolicyLimits, DEFAULT_MAX_STRING_LENGTH};
pub use string::StringPolicyValue;
pub use string_set::StringSetPolicyValue;
