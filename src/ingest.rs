//! # Line protocol ingestion
//!
//! Streaming ingestion never rejects a row because of one bad geohash. A token
//! that is not a usable geohash for its column is stored as the column's NULL
//! and every other field of the row goes through unchanged.
//!
//! ```
//! use geohash_type::prelude::*;
//!
//! let ty = GeoHashType::from_bits(14).unwrap();
//!
//! // too long to be any geohash
//! assert!(encode_lenient("9v1s8hm7wpkssv1h", ty).is_null());
//!
//! // long enough, and truncated to the column's precision
//! let v = encode_lenient("9v1", GeoHashType::from_bits(13).unwrap());
//! assert_eq!(decode_to_text(v, GeoHashType::from_bits(13).unwrap()), "0100111011000");
//! ```
//!
//! Unlike [`encode_strict`](crate::encoding::encode_strict), the lenient
//! encoder reads the whole token: trailing garbage makes the token unusable
//! rather than being skipped.

use crate::{
    encoding::{de::count_symbols, encode_scratch, read, split_literal},
    errors::{GeoHashError, Result},
    precision::GeoHashType,
    value::GeoHash,
};
use log::debug;

/// Encodes a wire-protocol token for a column of type `ty`, storing NULL if
/// the token is unusable.
pub fn encode_lenient(token: &str, ty: GeoHashType) -> GeoHash {
    match encode_whole(token, ty) {
        Ok(value) => value,
        Err(e) => {
            debug_assert!(e.is_value_error(), "{:?} from lenient encoding", e);
            debug!("storing NULL for GEOHASH token {:?} into {}: {}", token, ty, e);
            ty.null()
        }
    }
}

/// Reads a complete token and narrows it to `ty`.
fn encode_whole(token: &str, ty: GeoHashType) -> Result<GeoHash> {
    if token.is_empty() {
        return Ok(ty.null());
    }
    let (form, body) = split_literal(token);
    let limit = form.max_symbols();
    if count_symbols(body, limit) > limit {
        return Err(GeoHashError::TooLong { limit });
    }
    let scratch = read(body, form, limit)?;
    encode_scratch(scratch.code, scratch.bits, ty)
}

/// Declared type of a destination column, as far as ingestion cares.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ColumnType {
    GeoHash(GeoHashType),
    Symbol,
    String,
}

impl ColumnType {
    /// The value stored when a row carries no field for the column.
    pub fn absent<'a>(self) -> FieldValue<'a> {
        match self {
            ColumnType::GeoHash(ty) => FieldValue::GeoHash(ty.null()),
            ColumnType::Symbol | ColumnType::String => FieldValue::Null,
        }
    }
}

/// A destination column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub name: String,
    pub ty: ColumnType,
}

impl Column {
    pub fn new<S: Into<String>>(name: S, ty: ColumnType) -> Column {
        Column {
            name: name.into(),
            ty,
        }
    }
}

/// A field value ready for the row writer.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    GeoHash(GeoHash),
    Text(&'a str),
    Null,
}

/// Converts one token for its destination column.
///
/// Only GEOHASH columns go through [`encode_lenient`]; symbol and string
/// columns keep the token verbatim, however much it looks like a geohash.
pub fn ingest_field(token: &str, column: ColumnType) -> FieldValue {
    match column {
        ColumnType::GeoHash(ty) => FieldValue::GeoHash(encode_lenient(token, ty)),
        ColumnType::Symbol | ColumnType::String => FieldValue::Text(token),
    }
}

/// Assembles one row from `(field name, token)` pairs.
///
/// The result has one value per column, in column order. Columns without a
/// field get their absent value, fields without a column are skipped, and a
/// repeated field keeps its last token.
pub fn ingest_row<'a>(columns: &[Column], fields: &[(&str, &'a str)]) -> Vec<FieldValue<'a>> {
    let mut row: Vec<FieldValue<'a>> = columns.iter().map(|c| c.ty.absent()).collect();
    for &(name, token) in fields {
        match columns.iter().position(|c| c.name.eq_ignore_ascii_case(name)) {
            Some(i) => row[i] = ingest_field(token, columns[i].ty),
            None => debug!("skipping field {:?} with no matching column", name),
        }
    }
    row
}
