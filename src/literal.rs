//! # `GEOHASH(<n><unit>)` type literals
//!
//! The parser walks the source text left to right over byte offsets and every
//! failure carries the absolute offset it was detected at, so callers can point
//! at the offending character in the original statement.
//!
//! ```
//! use geohash_type::literal::parse_type_literal;
//!
//! let sql = "alter table pos add hash geohash(11c 1)";
//! let err = parse_type_literal(sql, 25).unwrap_err();
//!
//! assert_eq!(err.to_string(), "invalid GEOHASH type literal, expected ')' found='1'");
//! assert_eq!(err.position(), Some("alter table pos add hash geohash(11c ".len()));
//! ```

use crate::{
    errors::{GeoHashError, Grammar, Result},
    precision::{GeoHashType, MAX_BITS, MIN_BITS},
};
use log::trace;

const KEYWORD: &str = "geohash";

/// A successfully parsed type literal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct TypeLiteral {
    pub ty: GeoHashType,
    /// Offset just past the closing `)`.
    pub end: usize,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum Unit {
    Chars,
    Bits,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
enum State {
    /// Looking for the start of the size token.
    Size,
    /// Inside the size token, which started at the given offset.
    Token(usize),
    /// Looking for `)` after a size token.
    Close { bits: u64, token: usize },
}

fn is_space(b: u8) -> bool { b.is_ascii_whitespace() }

fn is_token_end(b: u8) -> bool { is_space(b) || b == b'(' || b == b')' }

fn char_at(src: &str, pos: usize) -> char { src[pos..].chars().next().unwrap_or('\u{fffd}') }

fn skip_space(src: &[u8], mut pos: usize) -> usize {
    while pos < src.len() && is_space(src[pos]) {
        pos += 1;
    }
    pos
}

/// Parses a literal whose `GEOHASH` keyword starts at byte offset `at`.
///
/// The keyword is matched case-insensitively and may be followed by
/// whitespace before `(`. A keyword with no `(` after it reports a missing
/// precision where the `(` was expected.
pub fn parse_type_literal(src: &str, at: usize) -> Result<TypeLiteral> {
    let bytes = src.as_bytes();
    let kw_end = at + KEYWORD.len();
    if kw_end > bytes.len() || !bytes[at..kw_end].eq_ignore_ascii_case(KEYWORD.as_bytes()) {
        return Err(GeoHashError::grammar(Grammar::ExpectedKeyword, at));
    }
    let open = skip_space(bytes, kw_end);
    if open >= bytes.len() || bytes[open] != b'(' {
        return Err(GeoHashError::grammar(Grammar::MissingPrecision, open));
    }
    parse_precision(src, open)
}

/// Parses the `<digits><unit>)` tail of a literal whose `(` is at byte offset
/// `open`.
pub fn parse_precision(src: &str, open: usize) -> Result<TypeLiteral> {
    debug_assert_eq!(src.as_bytes().get(open), Some(&b'('));
    let bytes = src.as_bytes();
    let mut state = State::Size;
    let mut pos = open + 1;
    loop {
        let b = bytes.get(pos).copied();
        state = match state {
            State::Size => match b {
                Some(b) if is_space(b) => {
                    pos += 1;
                    State::Size
                }
                None | Some(b')') => {
                    return Err(GeoHashError::grammar(Grammar::MissingPrecision, pos));
                }
                Some(_) => State::Token(pos),
            },
            State::Token(start) => match b {
                Some(b) if !is_token_end(b) => {
                    pos += 1;
                    State::Token(start)
                }
                _ => State::Close {
                    bits: size_token(&src[start..pos], start)?,
                    token: start,
                },
            },
            State::Close { bits, token } => match b {
                Some(b) if is_space(b) => {
                    pos += 1;
                    state
                }
                Some(b')') => {
                    let ty = in_range(bits, token)?;
                    trace!("parsed {} at {}..{}", ty, open, pos + 1);
                    return Ok(TypeLiteral { ty, end: pos + 1 });
                }
                Some(_) => {
                    return Err(GeoHashError::grammar(
                        Grammar::UnexpectedChar(char_at(src, pos)),
                        pos,
                    ));
                }
                None => return Err(GeoHashError::grammar(Grammar::MissingClose, pos)),
            },
        };
    }
}

/// Checks that nothing but whitespace follows a literal ending at `end`.
pub fn expect_end(src: &str, end: usize) -> Result<()> {
    let pos = skip_space(src.as_bytes(), end);
    if pos < src.len() {
        Err(GeoHashError::grammar(
            Grammar::TrailingInput(char_at(src, pos)),
            pos,
        ))
    } else {
        Ok(())
    }
}

/// Interprets a size token such as `12c` or `37b`, returning its bit count.
fn size_token(token: &str, start: usize) -> Result<u64> {
    let invalid_size = || GeoHashError::grammar(Grammar::InvalidSize, start);
    let bytes = token.as_bytes();
    if bytes.len() < 2 {
        return Err(invalid_size());
    }
    let (digits, unit) = bytes.split_at(bytes.len() - 1);
    let mut n: u64 = 0;
    for &d in digits {
        if !d.is_ascii_digit() {
            return Err(invalid_size());
        }
        n = n
            .checked_mul(10)
            .and_then(|n| n.checked_add((d - b'0') as u64))
            .ok_or_else(invalid_size)?;
    }
    let unit = match unit[0] {
        b'c' | b'C' => Unit::Chars,
        b'b' | b'B' => Unit::Bits,
        _ => return Err(GeoHashError::grammar(Grammar::InvalidUnits, start)),
    };
    match unit {
        Unit::Chars => n.checked_mul(5).ok_or_else(invalid_size),
        Unit::Bits => Ok(n),
    }
}

fn in_range(bits: u64, position: usize) -> Result<GeoHashType> {
    if bits < MIN_BITS as u64 || bits > MAX_BITS as u64 {
        return Err(GeoHashError::LiteralRange { bits, position });
    }
    GeoHashType::from_bits(bits as i64)
}
