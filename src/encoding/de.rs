//! Reading hash text into a scratch register.
//!
//! These are the primitives shared by the strict encoder used by SQL and the
//! lenient one used by ingestion. Neither policy lives here: the readers report
//! what they found and the callers decide whether that is an error.

use super::constants::*;
use crate::{
    alphabet::{decode_bit, decode_char, BITS_PER_CHAR},
    errors::Result,
    precision::MAX_BITS,
    util::{chars_for_bits, low_mask},
};

/// How the symbols of a literal are to be read.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Form {
    /// Base-32 hash characters, 5 bits each.
    Chars,
    /// Binary digits, 1 bit each.
    Bits,
}

impl Form {
    /// Bits carried by one symbol.
    pub fn symbol_bits(self) -> u8 {
        match self {
            Form::Chars => BITS_PER_CHAR,
            Form::Bits => 1,
        }
    }

    /// Symbols needed to cover `bits` bits.
    pub fn symbols_for(self, bits: u8) -> usize {
        match self {
            Form::Chars => chars_for_bits(bits),
            Form::Bits => bits as usize,
        }
    }

    /// The longest body a geohash of this form can have.
    pub fn max_symbols(self) -> usize { self.symbols_for(MAX_BITS) }

    #[inline]
    fn decode(self, c: char) -> Result<u8> {
        match self {
            Form::Chars => decode_char(c),
            Form::Bits => decode_bit(c),
        }
    }
}

/// Splits a literal into its form and body.
///
/// `##` introduces a bit literal and `#` a hash-character literal; anything
/// else is a bare hash-character string.
pub fn split_literal(text: &str) -> (Form, &str) {
    if let Some(body) = text.strip_prefix(BIT_LITERAL_PREFIX) {
        (Form::Bits, body)
    } else if let Some(body) = text.strip_prefix(CHAR_LITERAL_PREFIX) {
        (Form::Chars, body)
    } else {
        (Form::Chars, text)
    }
}

/// Bits accumulated from a literal, most significant first.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Scratch {
    pub code: u64,
    pub bits: u8,
}

impl Scratch {
    #[inline]
    fn push(&mut self, group: u8, width: u8) {
        debug_assert!(self.bits + width <= SCRATCH_BITS);
        self.code = (self.code << width) | group as u64;
        self.bits += width;
    }

    /// Keeps the leading `bits` bits, dropping the rest.
    ///
    /// Returns `None` when fewer than `bits` bits were accumulated.
    pub fn narrow(self, bits: u8) -> Option<u64> {
        if self.bits < bits {
            None
        } else {
            Some((self.code & low_mask(self.bits)) >> (self.bits - bits))
        }
    }
}

/// Reads at most `max_symbols` symbols from the front of `body`.
///
/// Fails on the first symbol that is not part of the form's alphabet.
pub fn read(body: &str, form: Form, max_symbols: usize) -> Result<Scratch> {
    debug_assert!(max_symbols * form.symbol_bits() as usize <= SCRATCH_BITS as usize);
    let width = form.symbol_bits();
    let mut scratch = Scratch::default();
    for c in body.chars().take(max_symbols) {
        scratch.push(form.decode(c)?, width);
    }
    Ok(scratch)
}

/// Number of symbols in `body`, counting no further than `limit + 1`.
pub fn count_symbols(body: &str, limit: usize) -> usize { body.chars().take(limit + 1).count() }

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::GeoHashError;

    #[test]
    fn literal_forms() {
        assert_eq!(split_literal("##0101"), (Form::Bits, "0101"));
        assert_eq!(split_literal("#sp05"), (Form::Chars, "sp05"));
        assert_eq!(split_literal("sp05"), (Form::Chars, "sp05"));
        assert_eq!(split_literal(""), (Form::Chars, ""));
    }

    #[test]
    fn reads_chars() {
        let s = read("9v1", Form::Chars, 3).unwrap();
        assert_eq!(s.bits, 15);
        assert_eq!(s.code, 0b01001_11011_00001);
    }

    #[test]
    fn reads_no_further_than_asked() {
        let s = read("9v1-", Form::Chars, 3).unwrap();
        assert_eq!(s.bits, 15);
        assert_eq!(
            read("9v1-", Form::Chars, 4),
            Err(GeoHashError::InvalidCharacter { ch: '-' })
        );
    }

    #[test]
    fn reads_bits() {
        let s = read("1011", Form::Bits, 60).unwrap();
        assert_eq!(s, Scratch { code: 0b1011, bits: 4 });
        assert!(read("10b", Form::Bits, 60).is_err());
    }

    #[test]
    fn narrowing() {
        let s = Scratch { code: 0b01001_11011_00001, bits: 15 };
        assert_eq!(s.narrow(13), Some(0b0100111011000));
        assert_eq!(s.narrow(15), Some(s.code));
        assert_eq!(s.narrow(16), None);
    }

    #[test]
    fn counting() {
        assert_eq!(count_symbols("abc", 12), 3);
        assert_eq!(count_symbols("9v1s8hm7wpkssv1h", 12), 13);
    }
}
