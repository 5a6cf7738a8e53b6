//! # Precision model
//!
//! A geohash precision is a bit count in `[1, 60]`. Each precision is stored in
//! the smallest signed container that holds it:
//!
//! | bits  | container | width |
//! |-------|-----------|-------|
//! | 1-8   | byte      | 8     |
//! | 9-16  | short     | 16    |
//! | 17-32 | int       | 32    |
//! | 33-60 | long      | 64    |
//!
//! The minimum two's-complement value of each container is reserved as NULL.

use crate::{
    alphabet::BITS_PER_CHAR,
    errors::{GeoHashError, Result},
    literal,
    value::GeoHash,
};
#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};
use std::{convert::TryFrom, fmt, str::FromStr};

/// Smallest supported precision, in bits.
pub const MIN_BITS: u8 = 1;
/// Largest supported precision, in bits.
pub const MAX_BITS: u8 = 60;
/// Largest supported precision, in hash characters.
pub const MAX_CHARS: u8 = MAX_BITS / BITS_PER_CHAR;

/// Converts a precision declared in characters to bits.
///
/// ```
/// use geohash_type::precision::chars_to_bits;
///
/// assert_eq!(chars_to_bits(7), 35);
/// ```
pub fn chars_to_bits(chars: i64) -> i64 { chars.saturating_mul(BITS_PER_CHAR as i64) }

/// Backing container class of a geohash column.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Width {
    Byte,
    Short,
    Int,
    Long,
}

impl Width {
    /// Picks the container for a precision of `bits` bits.
    ///
    /// # Example
    ///
    /// ```
    /// use geohash_type::precision::Width;
    ///
    /// assert_eq!(Width::for_bits(8).unwrap(), Width::Byte);
    /// assert_eq!(Width::for_bits(9).unwrap(), Width::Short);
    /// assert_eq!(Width::for_bits(60).unwrap(), Width::Long);
    /// assert!(Width::for_bits(0).is_err());
    /// ```
    pub fn for_bits(bits: i64) -> Result<Width> {
        match bits {
            1..=8 => Ok(Width::Byte),
            9..=16 => Ok(Width::Short),
            17..=32 => Ok(Width::Int),
            33..=60 => Ok(Width::Long),
            _ => Err(GeoHashError::PrecisionRange { bits }),
        }
    }

    /// Size of the container in bits.
    pub fn size_bits(self) -> u8 {
        match self {
            Width::Byte => 8,
            Width::Short => 16,
            Width::Int => 32,
            Width::Long => 64,
        }
    }

    /// Size of the container in bytes, i.e. the on-disk slot size.
    pub fn size_bytes(self) -> usize { self.size_bits() as usize / 8 }

    /// The NULL value of this container.
    pub fn null_sentinel(self) -> GeoHash { GeoHash::null(self) }
}

/// Resolves the backing container for a precision.
pub fn resolve_container(bits: i64) -> Result<Width> { Width::for_bits(bits) }

/// Resolves the NULL value of a container.
pub fn null_sentinel(width: Width) -> GeoHash { width.null_sentinel() }

/// Type descriptor of a geohash column or expression: a precision in bits and
/// the container holding it.
///
/// Descriptors are only constructed through validating constructors, so a
/// `GeoHashType` always holds a precision in `[1, 60]` and the matching width.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serialize",
    derive(Serialize, Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct GeoHashType {
    bits: u8,
    width: Width,
}

impl GeoHashType {
    /// Builds a descriptor for a precision given in bits.
    pub fn from_bits(bits: i64) -> Result<GeoHashType> {
        let width = Width::for_bits(bits)?;
        Ok(GeoHashType {
            bits: bits as u8,
            width,
        })
    }

    /// Builds a descriptor for a precision given in hash characters.
    ///
    /// ```
    /// use geohash_type::prelude::*;
    ///
    /// let ty = GeoHashType::from_chars(8).unwrap();
    /// assert_eq!(ty.bits(), 40);
    /// assert_eq!(ty.width(), Width::Long);
    /// ```
    pub fn from_chars(chars: i64) -> Result<GeoHashType> { GeoHashType::from_bits(chars_to_bits(chars)) }

    pub fn bits(self) -> u8 { self.bits }

    pub fn width(self) -> Width { self.width }

    /// The precision in whole characters, if it is a multiple of 5 bits.
    pub fn chars(self) -> Option<u8> {
        if self.is_char_aligned() {
            Some(self.bits / BITS_PER_CHAR)
        } else {
            None
        }
    }

    /// Whether values of this type render as hash characters rather than bits.
    pub fn is_char_aligned(self) -> bool { self.bits % BITS_PER_CHAR == 0 }

    /// The NULL value of this type's container.
    pub fn null(self) -> GeoHash { GeoHash::null(self.width) }
}

impl fmt::Display for GeoHashType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.chars() {
            Some(chars) => write!(f, "GEOHASH({}c)", chars),
            None => write!(f, "GEOHASH({}b)", self.bits),
        }
    }
}

impl FromStr for GeoHashType {
    type Err = GeoHashError;

    /// Parses a complete type literal such as `GEOHASH(8c)`.
    fn from_str(s: &str) -> Result<GeoHashType> {
        let start = s.len() - s.trim_start().len();
        let lit = literal::parse_type_literal(s, start)?;
        literal::expect_end(s, lit.end)?;
        Ok(lit.ty)
    }
}

impl TryFrom<String> for GeoHashType {
    type Error = GeoHashError;

    fn try_from(s: String) -> Result<GeoHashType> { s.parse() }
}

impl From<GeoHashType> for String {
    fn from(ty: GeoHashType) -> String { ty.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn width_boundaries() {
        let expected = [
            (1, Width::Byte),
            (8, Width::Byte),
            (9, Width::Short),
            (16, Width::Short),
            (17, Width::Int),
            (32, Width::Int),
            (33, Width::Long),
            (60, Width::Long),
        ];
        for &(bits, width) in expected.iter() {
            assert_eq!(resolve_container(bits).unwrap(), width, "bits {}", bits);
        }
    }

    #[test]
    fn out_of_range() {
        for &bits in [-1, 0, 61, 64, i64::max_value()].iter() {
            assert_eq!(
                resolve_container(bits),
                Err(GeoHashError::PrecisionRange { bits })
            );
        }
        assert!(GeoHashType::from_chars(13).is_err());
        assert!(GeoHashType::from_chars(i64::max_value()).is_err());
    }

    #[test]
    fn null_sentinels() {
        assert_eq!(null_sentinel(Width::Byte), GeoHash::Byte(i8::min_value()));
        assert_eq!(null_sentinel(Width::Short), GeoHash::Short(i16::min_value()));
        assert_eq!(null_sentinel(Width::Int), GeoHash::Int(i32::min_value()));
        assert_eq!(null_sentinel(Width::Long), GeoHash::Long(i64::min_value()));
    }

    #[test]
    fn type_names() {
        assert_eq!(GeoHashType::from_chars(12).unwrap().to_string(), "GEOHASH(12c)");
        assert_eq!(GeoHashType::from_bits(35).unwrap().to_string(), "GEOHASH(7c)");
        assert_eq!(GeoHashType::from_bits(13).unwrap().to_string(), "GEOHASH(13b)");
        assert_eq!(GeoHashType::from_bits(1).unwrap().to_string(), "GEOHASH(1b)");
    }

    #[test]
    fn from_str() {
        let ty: GeoHashType = "geohash(7c)".parse().unwrap();
        assert_eq!(ty, GeoHashType::from_bits(35).unwrap());
        let ty: GeoHashType = "  GEOHASH( 13b )  ".parse().unwrap();
        assert_eq!(ty.bits(), 13);
        assert!("GEOHASH(7c) x".parse::<GeoHashType>().is_err());
    }

    #[test]
    fn display_parses_back() {
        for bits in MIN_BITS..=MAX_BITS {
            let ty = GeoHashType::from_bits(bits as i64).unwrap();
            assert_eq!(ty.to_string().parse::<GeoHashType>().unwrap(), ty);
        }
    }
}
