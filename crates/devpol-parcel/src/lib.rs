//! Parcel wire format for device-policy values.
//!
//! This crate provides:
//!
//! - [`Parcel`] — an owned byte cursor with `read_i32` / `read_string` /
//!   `write_i32` / `write_string`, little-endian framing
//! - [`ParcelError`] — the stream-format error taxonomy
//! - [`Parcelable`] — the decode/encode capability a serialization framework needs
//!   from a value type, including absent-array allocation
//! - [`write_array`] / [`read_array`] — generic counted-array codec
//!
//! # Quick Start
//!
//! ```
//! use devpol_parcel::Parcel;
//!
//! # fn example() -> devpol_parcel::ParcelResult<()> {
//! let mut parcel = Parcel::new();
//! parcel.write_i32(1);
//! parcel.write_string("policy");
//!
//! let mut parcel = Parcel::from_bytes(parcel.into_bytes());
//! assert_eq!(parcel.read_i32()?, 1);
//! assert_eq!(parcel.read_string()?, "policy");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod error;
pub mod parcel;
pub mod parcelable;

pub use error::{ParcelError, ParcelResult};
pub use parcel::Parcel;
pub use parcelable::{read_array, write_array, Parcelable};
