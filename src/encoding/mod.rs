//! # Geohash value codec
//!
//! Encoding turns hash text into a [`GeoHash`] packed for a given
//! [`GeoHashType`]; decoding renders a stored value back to text.
//!
//! # Example
//!
//! ```
//! use geohash_type::prelude::*;
//!
//! // a 7 character column
//! let ty = GeoHashType::from_chars(7).unwrap();
//!
//! // encode some text into it
//! let hash = encode_strict("questdb", ty).unwrap();
//!
//! // 35 bits fit in a long
//! assert_eq!(hash.width(), Width::Long);
//!
//! // and it renders back the same
//! assert_eq!(decode_to_text(hash, ty), "questdb");
//!
//! // Note: encoding returns a `Result`
//! let too_short = encode_strict("ques", ty);
//! assert_eq!(too_short, Err(GeoHashError::TooShort));
//! ```
//!
//! Text longer than the precision needs is read only as far as required, so a
//! 16 character hash stored in an 8 character column keeps its first 8
//! characters. Precisions that are not a multiple of 5 bits keep the leading
//! bits of the last character read.

use crate::{
    errors::{GeoHashError, Result},
    precision::GeoHashType,
    value::GeoHash,
};

pub mod container;
pub mod de;
pub use de::{read, split_literal, Form, Scratch};
pub mod ser;
pub use ser::render;
pub mod slot;
pub use slot::{get_slot, put_slot};
mod constants;
use constants::SCRATCH_BITS;

/// Encodes `text` for a column of type `ty`, failing if the text cannot fill
/// the precision.
///
/// # Arguments
///
/// * `text: &str` - A hash string, `#`-prefixed hash literal, or
///   `##`-prefixed bit literal. Empty text encodes NULL.
/// * `ty: GeoHashType` - The target type.
///
/// # Example
///
/// ```
/// use geohash_type::prelude::*;
///
/// let ty = GeoHashType::from_bits(3).unwrap();
///
/// let bits = encode_strict("##1011", ty).unwrap();
/// assert_eq!(bits.code(), Some(0b101));
/// ```
pub fn encode_strict(text: &str, ty: GeoHashType) -> Result<GeoHash> {
    if text.is_empty() {
        return Ok(ty.null());
    }
    let (form, body) = split_literal(text);
    let needed = form.symbols_for(ty.bits());
    if de::count_symbols(body, needed) < needed {
        return Err(GeoHashError::TooShort);
    }
    let scratch = read(body, form, needed)?;
    encode_scratch(scratch.code, scratch.bits, ty)
}

/// Packs the leading `ty.bits()` bits of a scratch register holding
/// `code_bits` bits of code.
///
/// ```
/// use geohash_type::prelude::*;
///
/// let ty = GeoHashType::from_bits(4).unwrap();
/// assert_eq!(encode_scratch(0b1_0110, 5, ty).unwrap().code(), Some(0b1011));
/// assert!(encode_scratch(0b101, 3, ty).is_err());
/// ```
pub fn encode_scratch(code: u64, code_bits: u8, ty: GeoHashType) -> Result<GeoHash> {
    let scratch = Scratch {
        code,
        bits: code_bits.min(SCRATCH_BITS),
    };
    scratch
        .narrow(ty.bits())
        .map(|code| GeoHash::from_code(ty.width(), code))
        .ok_or(GeoHashError::TooShort)
}

/// Renders a stored value of type `ty`; NULL renders as the empty string.
pub fn decode_to_text(value: GeoHash, ty: GeoHashType) -> String { value.typed(ty).to_string() }
