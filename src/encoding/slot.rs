//! Fixed-width storage slots.
//!
//! A slot is the raw container value in little-endian order, the same layout
//! the storage engine uses for its byte, short, int and long columns.

use crate::{
    errors::{GeoHashError, Result},
    precision::Width,
    value::GeoHash,
};
use bytes::{Buf, BufMut};

/// Appends `value` as one slot of its own width.
pub fn put_slot<B: BufMut>(value: GeoHash, buf: &mut B) {
    match value {
        GeoHash::Byte(v) => buf.put_i8(v),
        GeoHash::Short(v) => buf.put_i16_le(v),
        GeoHash::Int(v) => buf.put_i32_le(v),
        GeoHash::Long(v) => buf.put_i64_le(v),
    }
}

/// Reads one slot of the given width from the front of `buf`.
pub fn get_slot<B: Buf>(width: Width, buf: &mut B) -> Result<GeoHash> {
    let needed = width.size_bytes();
    if buf.remaining() < needed {
        return Err(GeoHashError::SlotUnderflow {
            needed,
            available: buf.remaining(),
        });
    }
    Ok(match width {
        Width::Byte => GeoHash::Byte(buf.get_i8()),
        Width::Short => GeoHash::Short(buf.get_i16_le()),
        Width::Int => GeoHash::Int(buf.get_i32_le()),
        Width::Long => GeoHash::Long(buf.get_i64_le()),
    })
}
