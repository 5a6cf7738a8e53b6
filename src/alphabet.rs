//! # Geohash alphabet
//!
//! Table-driven conversion between hash characters and their 5-bit codes, and
//! between binary digits and single bits.
//!
//! The base-32 alphabet is the standard geohash one: the ten digits followed by
//! the lowercase latin letters without `a`, `i`, `l` and `o`. Decoding is
//! case-insensitive, encoding always produces lowercase.

use crate::errors::{GeoHashError, Result};

/// Bits carried by one base-32 character.
pub const BITS_PER_CHAR: u8 = 5;

/// The 32 hash characters, indexed by code.
pub const BASE32: [u8; 32] = *b"0123456789bcdefghjkmnpqrstuvwxyz";

const INVALID: u8 = 0xff;

const fn build_lookup() -> [u8; 128] {
    let mut table = [INVALID; 128];
    let mut code = 0;
    while code < BASE32.len() {
        let c = BASE32[code];
        table[c as usize] = code as u8;
        if c.is_ascii_lowercase() {
            table[c.to_ascii_uppercase() as usize] = code as u8;
        }
        code += 1;
    }
    table
}

static LOOKUP: [u8; 128] = build_lookup();

#[inline]
fn lookup(c: char) -> Option<u8> {
    let i = c as u32;
    if i < 128 {
        let code = LOOKUP[i as usize];
        if code != INVALID {
            return Some(code);
        }
    }
    None
}

/// Decodes one hash character into its 5-bit code.
///
/// # Example
///
/// ```
/// use geohash_type::alphabet::decode_char;
///
/// assert_eq!(decode_char('s').unwrap(), 24);
/// assert_eq!(decode_char('S').unwrap(), 24);
/// assert!(decode_char('a').is_err());
/// ```
#[inline]
pub fn decode_char(c: char) -> Result<u8> { lookup(c).ok_or(GeoHashError::InvalidCharacter { ch: c }) }

/// Decodes one binary digit.
#[inline]
pub fn decode_bit(c: char) -> Result<u8> {
    match c {
        '0' => Ok(0),
        '1' => Ok(1),
        _ => Err(GeoHashError::InvalidCharacter { ch: c }),
    }
}

/// The hash character for the low 5 bits of `code`.
#[inline]
pub fn encode_char(code: u64) -> char { BASE32[(code & 0x1f) as usize] as char }

/// The binary digit for the lowest bit of `bit`.
#[inline]
pub fn encode_bit(bit: u64) -> char {
    if bit & 1 == 1 {
        '1'
    } else {
        '0'
    }
}
