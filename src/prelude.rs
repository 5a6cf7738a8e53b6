pub use crate::{
    alphabet::{decode_bit, decode_char, encode_bit, encode_char},
    cast::{cast, downcast, CastSource},
    compare::{compare, equals, not_equals},
    encoding::{decode_to_text, encode_scratch, encode_strict, get_slot, put_slot},
    errors::{ErrorKind, GeoHashError, Grammar},
    ingest::{encode_lenient, ingest_field, ingest_row, Column, ColumnType, FieldValue},
    literal::{parse_type_literal, TypeLiteral},
    precision::{chars_to_bits, null_sentinel, resolve_container, GeoHashType, Width},
    random::{random_typed, random_value},
    value::{GeoHash, TypedGeoHash},
};
pub use std::{convert::TryFrom, str::FromStr};
