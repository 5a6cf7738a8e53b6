//! # GEOHASH column type
//!
//! The GEOHASH type stores a geohash as a fixed-width packed integer. This
//! crate holds everything about the type that both the SQL layer and the line
//! protocol ingestion path depend on: the precision model, the type literal
//! parser, the value codec, narrowing casts, comparisons, and random values.
//!
//! # Usage
//!
//! Everything commonly needed is in the prelude.
//!
//! ```
//! use geohash_type::prelude::*;
//!
//! // `GEOHASH(7c)` as it would appear in a column declaration
//! let ty: GeoHashType = "GEOHASH(7c)".parse().unwrap();
//!
//! // encode
//! let hash = encode_strict("questdb", ty).unwrap();
//!
//! // and then immediately decode
//! assert_eq!(decode_to_text(hash, ty), "questdb");
//! ```
//!
//! # Precision and storage
//!
//! A precision is a number of bits between 1 and 60. A hash character carries
//! 5 bits, so `GEOHASH(12c)` and `GEOHASH(60b)` are the same type. Values are
//! stored in the smallest of four signed containers that fits:
//!
//! ```
//! use geohash_type::prelude::*;
//!
//! assert_eq!(GeoHashType::from_bits(8).unwrap().width(), Width::Byte);
//! assert_eq!(GeoHashType::from_chars(3).unwrap().width(), Width::Short);
//! assert_eq!(GeoHashType::from_chars(4).unwrap().width(), Width::Int);
//! assert_eq!(GeoHashType::from_chars(12).unwrap().width(), Width::Long);
//! ```
//!
//! The code occupies the low bits of the container with the first character in
//! the most significant position. The minimum value of each container is NULL.
//! A column whose precision fills its container exactly (8, 16 or 32 bits) has
//! one code that shares its bit pattern with NULL; such a value reads back as
//! NULL.
//!
//! See also: [`precision`] and [`value`].
//!
//! # Text forms
//!
//! Bare strings and `#`-prefixed literals are read as hash characters,
//! `##`-prefixed literals as bits. Values render as hash characters when the
//! precision is a whole number of characters and as bits otherwise.
//!
//! ```
//! use geohash_type::prelude::*;
//!
//! let c2 = GeoHashType::from_chars(2).unwrap();
//! let b7 = GeoHashType::from_bits(7).unwrap();
//!
//! assert_eq!(decode_to_text(encode_strict("#sp", c2).unwrap(), c2), "sp");
//! assert_eq!(decode_to_text(encode_strict("sp", b7).unwrap(), b7), "1100010");
//! assert_eq!(decode_to_text(encode_strict("##1100010", b7).unwrap(), b7), "1100010");
//! ```
//!
//! See also: [`encoding`].
//!
//! # Strict and lenient encoding
//!
//! SQL statements use [`encode_strict`](encoding::encode_strict), which fails
//! when the text cannot fill the precision. The line protocol uses
//! [`encode_lenient`](ingest::encode_lenient), which stores NULL instead so
//! that the rest of the row is still written.
//!
//! ```
//! use geohash_type::prelude::*;
//!
//! let c8 = GeoHashType::from_chars(8).unwrap();
//!
//! assert_eq!(encode_strict("f91t", c8), Err(GeoHashError::TooShort));
//! assert!(encode_lenient("f91t", c8).is_null());
//! ```
//!
//! # Casts and comparisons
//!
//! Casts narrow only; widening fails. Comparisons narrow the more precise
//! operand first and treat NULL as unknown.
//!
//! ```
//! use geohash_type::prelude::*;
//!
//! let c7 = GeoHashType::from_chars(7).unwrap();
//! let c6 = GeoHashType::from_chars(6).unwrap();
//!
//! let q7 = encode_strict("questdb", c7).unwrap();
//! let q6 = downcast(q7, c7, c6).unwrap();
//!
//! assert_eq!(decode_to_text(q6, c6), "questd");
//! assert!(downcast(q6, c6, c7).is_err());
//! assert_eq!(equals(q7.typed(c7), q6.typed(c6)), Some(true));
//! ```
//!
//! # Features
//!
//! * `serialize` - `serde` support for [`GeoHashType`](precision::GeoHashType)
//!   (as its type name) and [`Width`](precision::Width).

#![warn(
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    unreachable_pub,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::inconsistent_digit_grouping)]

pub mod alphabet;
pub mod cast;
pub mod compare;
pub mod encoding;
pub mod errors;
pub mod ingest;
pub mod literal;
pub mod precision;
pub mod prelude;
pub mod random;
pub mod util;
pub mod value;

pub use errors::{GeoHashError, Result};
pub use precision::{GeoHashType, Width};
pub use value::GeoHash;
