//! # Casting between geohash precisions
//!
//! Casts only ever narrow. Dropping the low bits of a code keeps its leading
//! characters, which name the coarser cell that contains the original one.
//!
//! ```
//! use geohash_type::prelude::*;
//!
//! let c7 = GeoHashType::from_chars(7).unwrap();
//! let c6 = GeoHashType::from_chars(6).unwrap();
//!
//! let hash = cast(CastSource::Text("questdb"), c7).unwrap();
//! let narrowed = cast(CastSource::GeoHash(hash, c7), c6).unwrap();
//! assert_eq!(decode_to_text(narrowed, c6), "questd");
//!
//! let widened = cast(CastSource::GeoHash(narrowed, c6), c7);
//! assert_eq!(
//!     widened.unwrap_err().to_string(),
//!     "CAST cannot decrease precision from GEOHASH(30b) to GEOHASH(35b)"
//! );
//! ```

use crate::{
    encoding::encode_strict,
    errors::{GeoHashError, Result},
    precision::GeoHashType,
    util::low_mask,
    value::GeoHash,
};

/// Narrows `value` from type `from` to type `to`.
///
/// Fails with [`GeoHashError::PrecisionIncrease`] whenever `to` has more bits
/// than `from`, NULL or not. NULL narrows to the NULL of `to`.
pub fn downcast(value: GeoHash, from: GeoHashType, to: GeoHashType) -> Result<GeoHash> {
    if to.bits() > from.bits() {
        return Err(GeoHashError::PrecisionIncrease {
            from: from.bits(),
            to: to.bits(),
        });
    }
    Ok(narrow(value, from, to))
}

/// Narrowing without the direction check, for callers that already ordered
/// the operands.
pub(crate) fn narrow(value: GeoHash, from: GeoHashType, to: GeoHashType) -> GeoHash {
    debug_assert!(to.bits() <= from.bits());
    match value.code() {
        Some(code) => {
            let shift = from.bits() - to.bits();
            GeoHash::from_code(to.width(), (code & low_mask(from.bits())) >> shift)
        }
        None => to.null(),
    }
}

/// The operand of `CAST(x AS GEOHASH(p))`.
#[derive(Debug, Copy, Clone)]
pub enum CastSource<'a> {
    /// An untyped NULL.
    Null,
    /// A string expression.
    Text(&'a str),
    /// A value that already is a geohash of the given type.
    GeoHash(GeoHash, GeoHashType),
}

/// Evaluates `CAST(source AS to)`.
pub fn cast(source: CastSource, to: GeoHashType) -> Result<GeoHash> {
    match source {
        CastSource::Null => Ok(to.null()),
        CastSource::Text(text) => encode_strict(text, to),
        CastSource::GeoHash(value, from) => downcast(value, from, to),
    }
}
