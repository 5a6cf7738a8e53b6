use geohash_type::{
    precision::{MAX_BITS, MAX_CHARS, MIN_BITS},
    util::low_mask,
    GeoHash, GeoHashType,
};
use proptest::prelude::*;

/// Regex matching one geohash character, lowercase.
pub const HASH_CHAR: &str = "[0-9b-hjkmnp-z]";

/// arbitrary precision in bits, for use with proptest
pub fn arb_bits() -> impl Strategy<Value = i64> { (MIN_BITS as i64)..=(MAX_BITS as i64) }

/// arbitrary GeoHashType for use with proptest
pub fn arb_type() -> impl Strategy<Value = GeoHashType> {
    arb_bits().prop_map(|b| GeoHashType::from_bits(b).unwrap())
}

/// arbitrary pair of types, the first at least as precise as the second
pub fn arb_narrowing() -> impl Strategy<Value = (GeoHashType, GeoHashType)> {
    arb_bits().prop_flat_map(|from| {
        (1..=from).prop_map(move |to| {
            (
                GeoHashType::from_bits(from).unwrap(),
                GeoHashType::from_bits(to).unwrap(),
            )
        })
    })
}

/// arbitrary hash string of `min..=max` characters
pub fn arb_hash(min: usize, max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("{}{{{},{}}}", HASH_CHAR, min, max)).unwrap()
}

/// arbitrary hash string that is long enough to fill `ty`, possibly longer
pub fn arb_hash_for(ty: GeoHashType) -> impl Strategy<Value = String> {
    let needed = (ty.bits() as usize + 4) / 5;
    arb_hash(needed, MAX_CHARS as usize + 4)
}

/// arbitrary type together with a hash string that fills it
pub fn arb_typed_hash() -> impl Strategy<Value = (GeoHashType, String)> {
    arb_type().prop_flat_map(|ty| (Just(ty), arb_hash_for(ty)))
}

/// arbitrary bit literal body of `min..=max` digits
pub fn arb_bit_literal(min: usize, max: usize) -> impl Strategy<Value = String> {
    proptest::string::string_regex(&format!("[01]{{{},{}}}", min, max)).unwrap()
}

/// arbitrary non-NULL value of type `ty`
pub fn arb_value(ty: GeoHashType) -> impl Strategy<Value = GeoHash> {
    any::<u64>()
        .prop_map(move |u| GeoHash::from_code(ty.width(), u & low_mask(ty.bits())))
        .prop_filter("NULL pattern", |v| !v.is_null())
}

/// arbitrary type with a non-NULL value of it
pub fn arb_typed_value() -> impl Strategy<Value = (GeoHashType, GeoHash)> {
    arb_type().prop_flat_map(|ty| (Just(ty), arb_value(ty)))
}
