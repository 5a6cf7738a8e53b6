use geohash_strategy::*;
use geohash_type::{prelude::*, util::low_mask};
use proptest::prelude::*;

/// The leading `bits` bits of a hash string, as binary digits.
fn leading_bits(s: &str, bits: u8) -> String {
    s.chars()
        .map(|c| format!("{:05b}", decode_char(c).unwrap()))
        .collect::<String>()[..bits as usize]
        .to_string()
}

/// `to_bits` clamped so the result is no more precise than `from`.
fn narrower(from: GeoHashType, to_bits: u8) -> GeoHashType {
    GeoHashType::from_bits(to_bits.min(from.bits()) as i64).unwrap()
}

/// Whether a code lands on its container's NULL pattern.
fn aliases_null(v: GeoHash) -> bool { v.is_null() }

proptest! {
    #![proptest_config(ProptestConfig { cases: 1_000, ..ProptestConfig::default() })]

    #[test]
    fn text_round_trips_within_precision((ty, s) in arb_typed_hash()) {
        let v = encode_strict(&s, ty).unwrap();
        prop_assume!(!aliases_null(v));

        let expected = match ty.chars() {
            Some(n) => s[..n as usize].to_string(),
            None => leading_bits(&s, ty.bits()),
        };
        prop_assert_eq!(decode_to_text(v, ty), expected);
    }

    #[test]
    fn upper_case_encodes_the_same((ty, s) in arb_typed_hash()) {
        prop_assert_eq!(
            encode_strict(&s.to_uppercase(), ty).unwrap(),
            encode_strict(&s, ty).unwrap()
        );
    }

    #[test]
    fn bit_literals_match_hash_text((ty, s) in arb_typed_hash()) {
        let literal = format!("##{}", leading_bits(&s, ty.bits()));
        prop_assert_eq!(encode_strict(&literal, ty).unwrap(), encode_strict(&s, ty).unwrap());
    }

    #[test]
    fn downcast_is_idempotent((from, v) in arb_typed_value(), to_bits in 1u8..=60) {
        let to = narrower(from, to_bits);
        let once = downcast(v, from, to).unwrap();
        prop_assert_eq!(downcast(once, to, to).unwrap(), once);
        prop_assert_eq!(once.width(), to.width());
    }

    #[test]
    fn downcast_keeps_leading_bits((from, v) in arb_typed_value(), to_bits in 1u8..=60) {
        let to = narrower(from, to_bits);
        let d = downcast(v, from, to).unwrap();
        prop_assume!(!d.is_null());
        prop_assert_eq!(d.code(), v.code().map(|c| c >> (from.bits() - to.bits())));
    }

    #[test]
    fn upcast_always_fails((to, from) in arb_narrowing(), u in any::<u64>(), null in any::<bool>()) {
        prop_assume!(to.bits() > from.bits());
        let v = if null {
            from.null()
        } else {
            GeoHash::from_code(from.width(), u & low_mask(from.bits()))
        };
        prop_assert_eq!(
            downcast(v, from, to),
            Err(GeoHashError::PrecisionIncrease { from: from.bits(), to: to.bits() })
        );
    }

    #[test]
    fn null_survives_downcast((from, to) in arb_narrowing()) {
        let d = downcast(from.null(), from, to).unwrap();
        prop_assert!(d.is_null());
        prop_assert_eq!(d, to.null());
    }

    #[test]
    fn narrowed_values_compare_equal((from, v) in arb_typed_value(), to_bits in 1u8..=60) {
        let to = narrower(from, to_bits);
        let d = downcast(v, from, to).unwrap();
        prop_assume!(!d.is_null());
        prop_assert_eq!(equals(v.typed(from), d.typed(to)), Some(true));
        prop_assert_eq!(compare(d.typed(to), v.typed(from)), Some(std::cmp::Ordering::Equal));
    }

    #[test]
    fn bit_literals_round_trip(
        (ty, body) in arb_type().prop_flat_map(|ty| (Just(ty), arb_bit_literal(ty.bits() as usize, 60)))
    ) {
        let v = encode_strict(&format!("##{}", body), ty).unwrap();
        prop_assume!(!aliases_null(v));
        let expected = u64::from_str_radix(&body[..ty.bits() as usize], 2).unwrap();
        prop_assert_eq!(v.code(), Some(expected));
        prop_assert_eq!(encode_lenient(&format!("##{}", body), ty), v);
    }

    #[test]
    fn lenient_rejects_long_bit_literals(ty in arb_type(), body in arb_bit_literal(61, 80)) {
        let token = format!("##{}", body);
        prop_assert!(encode_lenient(&token, ty).is_null());
        prop_assert!(encode_strict(&token, ty).is_ok());
    }

    #[test]
    fn lenient_agrees_with_strict_on_clean_tokens(ty in arb_type(), s in arb_hash(1, 12)) {
        match encode_strict(&s, ty) {
            Ok(v) => prop_assert_eq!(encode_lenient(&s, ty), v),
            Err(e) => {
                prop_assert_eq!(e, GeoHashError::TooShort);
                prop_assert!(encode_lenient(&s, ty).is_null());
            }
        }
    }

    #[test]
    fn lenient_rejects_long_tokens(ty in arb_type(), s in arb_hash(13, 20)) {
        prop_assert!(encode_lenient(&s, ty).is_null());
    }

    #[test]
    fn random_values_stay_in_range(bits in -10i64..80, seed in any::<u64>()) {
        use rand::{rngs::StdRng, SeedableRng};
        let rng = &mut StdRng::seed_from_u64(seed);
        match random_value(bits, rng) {
            Ok(v) => {
                prop_assert!(bits >= 1 && bits <= 60);
                let ty = GeoHashType::from_bits(bits).unwrap();
                prop_assert_eq!(v.width(), ty.width());
                if let Some(code) = v.code() {
                    prop_assert_eq!(code & !low_mask(ty.bits()), 0);
                }
            }
            Err(e) => {
                prop_assert!(bits < 1 || bits > 60);
                prop_assert_eq!(e.to_string(), "precision must be in [1..60] range");
            }
        }
    }

    #[test]
    fn type_names_parse_back(ty in arb_type()) {
        prop_assert_eq!(ty.to_string().parse::<GeoHashType>().unwrap(), ty);
    }

    #[test]
    fn type_literal_errors_are_in_bounds(tail in "[0-9cCbB() x]{0,8}") {
        let src = format!("geohash{}", tail);
        if let Err(e) = parse_type_literal(&src, 0) {
            let pos = e.position().unwrap();
            prop_assert!(pos >= "geohash".len() && pos <= src.len());
        }
    }
}
