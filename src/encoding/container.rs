use crate::{precision::Width, value::GeoHash};
use num_traits::{PrimInt, Signed};

/// A signed integer that can back a geohash column.
///
/// The codec is written once against this trait; the four implementations
/// only differ in how a raw code is truncated into, or zero-extended out of,
/// the container.
pub trait Container: PrimInt + Signed {
    /// The container class this integer implements.
    const WIDTH: Width;

    /// Truncates `code` into the container.
    fn from_code(code: u64) -> Self;

    /// Zero-extends the container's bit pattern.
    fn to_code(self) -> u64;

    /// Tags the raw value with its width.
    fn into_geohash(self) -> GeoHash;

    /// The reserved NULL pattern, the container's minimum value.
    #[inline]
    fn null() -> Self { Self::min_value() }

    #[inline]
    fn is_null(self) -> bool { self == Self::min_value() }
}

macro_rules! container {
    ($t:ty, $u:ty, $width:expr, $ctor:expr) => {
        #[allow(trivial_numeric_casts)]
        impl Container for $t {
            const WIDTH: Width = $width;

            #[inline]
            fn from_code(code: u64) -> $t { code as $u as $t }

            #[inline]
            fn to_code(self) -> u64 { self as $u as u64 }

            #[inline]
            fn into_geohash(self) -> GeoHash { $ctor(self) }
        }
    };
}

container!(i8, u8, Width::Byte, GeoHash::Byte);
container!(i16, u16, Width::Short, GeoHash::Short);
container!(i32, u32, Width::Int, GeoHash::Int);
container!(i64, u64, Width::Long, GeoHash::Long);

/// Packs `code` into container `C`. `None` packs NULL.
#[inline]
pub fn pack<C: Container>(code: Option<u64>) -> GeoHash {
    match code {
        Some(code) => C::from_code(code).into_geohash(),
        None => C::null().into_geohash(),
    }
}

/// Packs `code` into the container named by `width`.
#[inline]
pub fn pack_width(width: Width, code: Option<u64>) -> GeoHash {
    match width {
        Width::Byte => pack::<i8>(code),
        Width::Short => pack::<i16>(code),
        Width::Int => pack::<i32>(code),
        Width::Long => pack::<i64>(code),
    }
}

/// Reads the code out of a raw container value, `None` for NULL.
#[inline]
pub fn unpack<C: Container>(raw: C) -> Option<u64> {
    if raw.is_null() {
        None
    } else {
        Some(raw.to_code())
    }
}
