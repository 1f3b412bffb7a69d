//! The [`Parcelable`] trait and generic array (de)serialization.
//!
//! Replaces out-of-band creator registration with a trait: a type that can write
//! itself to a [`Parcel`] and be reconstructed from one. Decoding may need
//! caller-supplied context (validation limits, feature gates), which the associated
//! `Context` type carries through the generic helpers.

use tracing::trace;

use crate::error::ParcelError;
use crate::parcel::Parcel;

/// A value with a parcel wire representation.
pub trait Parcelable: Sized {
    /// Error produced by decoding. Must absorb raw stream-format errors so the
    /// array helpers can report framing failures through the same channel.
    type Error: From<ParcelError>;

    /// Context threaded into decoding (validation limits and the like). Use `()`
    /// when construction is unconditional.
    type Context;

    /// Append this value's wire form to `dest`.
    fn write_to_parcel(&self, dest: &mut Parcel);

    /// Decode one value from `source`, leaving the cursor immediately after it.
    fn create_from_parcel(source: &mut Parcel, ctx: &Self::Context) -> Result<Self, Self::Error>;

    /// Framework descriptor for special content (file descriptors and the like).
    /// Plain data values report `0`.
    fn describe_contents(&self) -> i32 {
        0
    }

    /// Allocate an array of `len` absent instances. Slots stay `None` until the
    /// deserialization path populates them.
    fn new_array(len: usize) -> Vec<Option<Self>> {
        std::iter::repeat_with(|| None).take(len).collect()
    }
}

/// Write a counted array of parcelables: `int32` element count, then each element.
///
/// # Panics
///
/// Panics if the slice holds more than `i32::MAX` elements. Such a count cannot
/// be represented in the wire format.
pub fn write_array<P: Parcelable>(dest: &mut Parcel, values: &[P]) {
    trace!(len = values.len(), "writing parcelable array");
    let count = i32::try_from(values.len()).expect("array count exceeds i32::MAX");
    dest.write_i32(count);
    for value in values {
        value.write_to_parcel(dest);
    }
}

/// Read a counted array of parcelables written by [`write_array`].
///
/// Allocates via [`Parcelable::new_array`] and populates every slot; a decode
/// failure at any element aborts the whole read.
pub fn read_array<P: Parcelable>(source: &mut Parcel, ctx: &P::Context) -> Result<Vec<P>, P::Error> {
    let count = source.read_size()?;
    trace!(count, "reading parcelable array");
    let mut slots = P::new_array(count);
    for slot in &mut slots {
        *slot = Some(P::create_from_parcel(source, ctx)?);
    }
    Ok(slots.into_iter().flatten().collect())
}
