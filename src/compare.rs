//! # Comparing geohash values
//!
//! Two values of different precision are compared at the coarser of the two:
//! the more precise operand is narrowed first. NULL on either side makes the
//! result unknown, which is `None` here.
//!
//! Aligned equality is not transitive across precisions (`questdb` equals
//! `quest`, `quest` equals `questzz`, `questdb` does not equal `questzz`), so
//! [`TypedGeoHash`] implements neither `PartialEq` nor `PartialOrd`.

use crate::{cast::narrow, value::TypedGeoHash};
use std::cmp::Ordering;

/// Aligns both operands to their common precision and returns the two codes,
/// or `None` if either is NULL.
pub fn align(a: TypedGeoHash, b: TypedGeoHash) -> Option<(u64, u64)> {
    let (a, b) = if a.ty.bits() > b.ty.bits() {
        (narrow(a.value, a.ty, b.ty).typed(b.ty), b)
    } else if b.ty.bits() > a.ty.bits() {
        (a, narrow(b.value, b.ty, a.ty).typed(a.ty))
    } else {
        (a, b)
    };
    Some((a.code()?, b.code()?))
}

/// SQL `=`.
///
/// ```
/// use geohash_type::prelude::*;
///
/// let c7 = GeoHashType::from_chars(7).unwrap();
/// let c5 = GeoHashType::from_chars(5).unwrap();
///
/// let a = encode_strict("questdb", c7).unwrap().typed(c7);
/// let b = encode_strict("quest", c5).unwrap().typed(c5);
///
/// assert_eq!(equals(a, b), Some(true));
/// assert_eq!(equals(a, TypedGeoHash::null(c7)), None);
/// ```
pub fn equals(a: TypedGeoHash, b: TypedGeoHash) -> Option<bool> { align(a, b).map(|(a, b)| a == b) }

/// SQL `!=`.
pub fn not_equals(a: TypedGeoHash, b: TypedGeoHash) -> Option<bool> { equals(a, b).map(|eq| !eq) }

/// Orders two values at their common precision, treating codes as unsigned.
pub fn compare(a: TypedGeoHash, b: TypedGeoHash) -> Option<Ordering> { align(a, b).map(|(a, b)| a.cmp(&b)) }
