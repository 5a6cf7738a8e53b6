use failure::Fail;
use std::fmt;

/// Grammar failures of a `GEOHASH(<n><unit>)` type literal.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Grammar {
    /// The literal does not start with `GEOHASH`.
    ExpectedKeyword,
    /// Nothing where the size token should be.
    MissingPrecision,
    /// The size token is not a number followed by a unit character.
    InvalidSize,
    /// The size token ends in something other than `c`, `C`, `b` or `B`.
    InvalidUnits,
    /// Something other than `)` follows the size token.
    UnexpectedChar(char),
    /// Input ended before `)`.
    MissingClose,
    /// A complete literal is followed by more input.
    TrailingInput(char),
}

impl fmt::Display for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Grammar::ExpectedKeyword => f.write_str("expected GEOHASH type literal"),
            Grammar::MissingPrecision => f.write_str("missing GEOHASH precision"),
            Grammar::InvalidSize => f.write_str(
                "invalid GEOHASH size, must be number followed by 'C' or 'B' character",
            ),
            Grammar::InvalidUnits => f.write_str(
                "invalid GEOHASH size units, must be 'c'/'C' for chars, or 'b'/'B' for bits",
            ),
            Grammar::UnexpectedChar(c) => write!(
                f,
                "invalid GEOHASH type literal, expected ')' found='{}'",
                c
            ),
            Grammar::MissingClose => f.write_str("invalid GEOHASH type literal, expected ')'"),
            Grammar::TrailingInput(c) => write!(
                f,
                "unexpected input after GEOHASH type literal found='{}'",
                c
            ),
        }
    }
}

/// Coarse classification of a [`GeoHashError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Range,
    Grammar,
    PrecisionIncrease,
    TooShort,
    TooLong,
    InvalidCharacter,
    Storage,
}

#[derive(Debug, Clone, PartialEq, Eq, Fail)]
/// An error raised by the geohash codec, parser or cast engine.
pub enum GeoHashError {
    /// A precision argument outside `[1, 60]` bits.
    #[fail(display = "precision must be in [1..60] range")]
    PrecisionRange { bits: i64 },

    /// A type literal that is well formed but names an unsupported precision.
    #[fail(
        display = "invalid GEOHASH type precision range, must be [1, 60] bits, provided={}",
        bits
    )]
    LiteralRange { bits: u64, position: usize },

    /// A malformed type literal.
    #[fail(display = "{}", kind)]
    Grammar { kind: Grammar, position: usize },

    /// A cast that would need to invent precision.
    #[fail(
        display = "CAST cannot decrease precision from GEOHASH({}b) to GEOHASH({}b)",
        from, to
    )]
    PrecisionIncrease { from: u8, to: u8 },

    #[fail(display = "string is too short to cast to chosen GEOHASH precision")]
    TooShort,

    /// A token longer than any geohash can be.
    #[fail(
        display = "string is too long to be a GEOHASH, at most {} symbols allowed",
        limit
    )]
    TooLong { limit: usize },

    #[fail(display = "invalid GEOHASH character '{}'", ch)]
    InvalidCharacter { ch: char },

    /// A storage buffer holding fewer bytes than one slot.
    #[fail(
        display = "GEOHASH slot needs {} bytes, buffer has {}",
        needed, available
    )]
    SlotUnderflow { needed: usize, available: usize },
}

impl GeoHashError {
    pub(crate) fn grammar(kind: Grammar, position: usize) -> Self {
        GeoHashError::Grammar { kind, position }
    }

    /// The class this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeoHashError::PrecisionRange { .. } | GeoHashError::LiteralRange { .. } => {
                ErrorKind::Range
            }
            GeoHashError::Grammar { .. } => ErrorKind::Grammar,
            GeoHashError::PrecisionIncrease { .. } => ErrorKind::PrecisionIncrease,
            GeoHashError::TooShort => ErrorKind::TooShort,
            GeoHashError::TooLong { .. } => ErrorKind::TooLong,
            GeoHashError::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            GeoHashError::SlotUnderflow { .. } => ErrorKind::Storage,
        }
    }

    /// Absolute byte offset into the source text, for errors raised while
    /// parsing a type literal.
    pub fn position(&self) -> Option<usize> {
        match self {
            GeoHashError::Grammar { position, .. } | GeoHashError::LiteralRange { position, .. } => {
                Some(*position)
            }
            _ => None,
        }
    }

    /// Whether the ingestion path may swallow this error and store null.
    pub fn is_value_error(&self) -> bool {
        match self.kind() {
            ErrorKind::TooShort | ErrorKind::TooLong | ErrorKind::InvalidCharacter => true,
            _ => false,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeoHashError>;
