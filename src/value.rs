//! # Stored geohash values
//!
//! A [`GeoHash`] is a code packed into one of four signed containers. The
//! container minimum is NULL; for any other value the low `precision` bits hold
//! the code, first character in the most significant position, and the bits
//! above the precision are zero.
//!
//! A value does not know its own precision. That lives in the column's
//! [`GeoHashType`], which is why most operations take both.

use crate::{
    encoding::container::{pack_width, unpack},
    from_fn,
    precision::{GeoHashType, Width},
};

/// A packed geohash value in its backing container.
///
/// The derived equality is bit-pattern equality, as storage sees it. SQL
/// equality, which aligns precisions and treats NULL as unknown, lives in
/// [`compare`](crate::compare).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum GeoHash {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
}

from_fn!(GeoHash, i8, GeoHash::Byte);
from_fn!(GeoHash, i16, GeoHash::Short);
from_fn!(GeoHash, i32, GeoHash::Int);
from_fn!(GeoHash, i64, GeoHash::Long);

impl GeoHash {
    /// The NULL value of a container.
    pub fn null(width: Width) -> GeoHash { pack_width(width, None) }

    /// Packs a code into a container, truncating bits the container cannot
    /// hold.
    pub fn from_code(width: Width, code: u64) -> GeoHash { pack_width(width, Some(code)) }

    pub fn width(self) -> Width {
        match self {
            GeoHash::Byte(_) => Width::Byte,
            GeoHash::Short(_) => Width::Short,
            GeoHash::Int(_) => Width::Int,
            GeoHash::Long(_) => Width::Long,
        }
    }

    pub fn is_null(self) -> bool { self.code().is_none() }

    /// The zero-extended code, or `None` for NULL.
    pub fn code(self) -> Option<u64> {
        match self {
            GeoHash::Byte(v) => unpack(v),
            GeoHash::Short(v) => unpack(v),
            GeoHash::Int(v) => unpack(v),
            GeoHash::Long(v) => unpack(v),
        }
    }

    /// The raw container value sign-extended to 64 bits.
    pub fn to_i64(self) -> i64 {
        match self {
            GeoHash::Byte(v) => v as i64,
            GeoHash::Short(v) => v as i64,
            GeoHash::Int(v) => v as i64,
            GeoHash::Long(v) => v,
        }
    }

    /// Pairs this value with its type.
    pub fn typed(self, ty: GeoHashType) -> TypedGeoHash { TypedGeoHash::new(self, ty) }
}

/// A stored value together with the type it was stored under.
#[derive(Debug, Copy, Clone)]
pub struct TypedGeoHash {
    pub value: GeoHash,
    pub ty: GeoHashType,
}

impl TypedGeoHash {
    pub fn new(value: GeoHash, ty: GeoHashType) -> TypedGeoHash { TypedGeoHash { value, ty } }

    /// NULL of the given type.
    pub fn null(ty: GeoHashType) -> TypedGeoHash { TypedGeoHash::new(ty.null(), ty) }

    pub fn is_null(&self) -> bool { self.value.is_null() }

    /// The code restricted to the type's precision, or `None` for NULL.
    pub fn code(&self) -> Option<u64> {
        self.value
            .code()
            .map(|c| c & crate::util::low_mask(self.ty.bits()))
    }
}
