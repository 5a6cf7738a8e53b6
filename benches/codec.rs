#[macro_use]
extern crate criterion;

use criterion::{black_box, Criterion};

use geohash_type::prelude::*;

const TOKENS: [&str; 10] = [
    "9v1s8hm7wpks",
    "46swgj10r88k",
    "jnw97u4yuquw",
    "zfuqd3bf1hxm",
    "hp4yqj8rw4kk",
    "wh4b6vntyfry",
    "s2zq5tqd69jt",
    "1cjjwk6r9jjn",
    "mmt894w2zkzc",
    "71ftmpbyq8hs",
];

fn column(chars: i64) -> GeoHashType { GeoHashType::from_chars(chars).unwrap() }

fn bench_encode(c: &mut Criterion) {
    for &chars in [2, 6, 12].iter() {
        let ty = column(chars);
        c.bench_function(&format!("encode_strict {}", ty), |b| {
            b.iter(|| {
                for t in TOKENS.iter() {
                    let _ = black_box(encode_strict(black_box(t), ty));
                }
            })
        });
        c.bench_function(&format!("encode_lenient {}", ty), |b| {
            b.iter(|| {
                for t in TOKENS.iter() {
                    black_box(encode_lenient(black_box(t), ty));
                }
            })
        });
    }
}

fn bench_decode(c: &mut Criterion) {
    let c12 = column(12);
    let b37 = GeoHashType::from_bits(37).unwrap();
    let values: Vec<GeoHash> = TOKENS
        .iter()
        .map(|t| encode_strict(t, c12).unwrap())
        .collect();
    let narrowed: Vec<GeoHash> = values
        .iter()
        .map(|&v| downcast(v, c12, b37).unwrap())
        .collect();

    c.bench_function("decode_to_text GEOHASH(12c)", |b| {
        b.iter(|| {
            for &v in values.iter() {
                black_box(decode_to_text(black_box(v), c12));
            }
        })
    });
    c.bench_function("decode_to_text GEOHASH(37b)", |b| {
        b.iter(|| {
            for &v in narrowed.iter() {
                black_box(decode_to_text(black_box(v), b37));
            }
        })
    });
}

fn bench_cast(c: &mut Criterion) {
    let c12 = column(12);
    let values: Vec<GeoHash> = TOKENS
        .iter()
        .map(|t| encode_strict(t, c12).unwrap())
        .collect();
    for &to in [column(6), column(1)].iter() {
        c.bench_function(&format!("downcast GEOHASH(12c) to {}", to), |b| {
            b.iter(|| {
                for &v in values.iter() {
                    let _ = black_box(downcast(black_box(v), c12, to));
                }
            })
        });
    }
}

fn bench_literals(c: &mut Criterion) {
    let sql = [
        "alter table pos add hash geohash(12c)",
        "alter table pos add hash GEOHASH ( 37b )",
        "alter table pos add hash geohash(61b)",
    ];
    let at = "alter table pos add hash ".len();
    c.bench_function("parse_type_literal", |b| {
        b.iter(|| {
            for s in sql.iter() {
                let _ = black_box(parse_type_literal(black_box(s), at));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_encode,
    bench_decode,
    bench_cast,
    bench_literals
);
criterion_main!(benches);
