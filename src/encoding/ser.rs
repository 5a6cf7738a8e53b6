//! Rendering stored values as display text.

use crate::{
    alphabet::{encode_bit, encode_char, BITS_PER_CHAR},
    value::TypedGeoHash,
};
use std::fmt::{self, Write};

/// Writes the low `bits` bits of `code`, most significant first.
///
/// Precisions that are a whole number of characters render as hash
/// characters, anything else renders as binary digits.
pub fn render<W: Write>(code: u64, bits: u8, out: &mut W) -> fmt::Result {
    if bits % BITS_PER_CHAR == 0 {
        for i in (0..bits / BITS_PER_CHAR).rev() {
            out.write_char(encode_char(code >> (i * BITS_PER_CHAR)))?;
        }
    } else {
        for i in (0..bits).rev() {
            out.write_char(encode_bit(code >> i))?;
        }
    }
    Ok(())
}

impl fmt::Display for TypedGeoHash {
    /// NULL renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.code() {
            Some(code) => render(code, self.ty.bits(), f),
            None => Ok(()),
        }
    }
}
