//! # Random geohash values
//!
//! Backs `rnd_geohash(bits)`. The caller owns the random source.

use crate::{
    errors::Result,
    precision::GeoHashType,
    util::low_mask,
    value::GeoHash,
};
use rand::RngCore;

/// A uniformly distributed value of `bits` bits of precision.
///
/// # Example
///
/// ```
/// use geohash_type::prelude::*;
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let rng = &mut StdRng::seed_from_u64(7);
///
/// let v = random_value(20, rng).unwrap();
/// assert_eq!(v.width(), Width::Int);
///
/// assert_eq!(
///     random_value(61, rng).unwrap_err().to_string(),
///     "precision must be in [1..60] range"
/// );
/// ```
pub fn random_value<R: RngCore + ?Sized>(bits: i64, rng: &mut R) -> Result<GeoHash> {
    let ty = GeoHashType::from_bits(bits)?;
    Ok(random_typed(ty, rng))
}

/// A uniformly distributed value of type `ty`.
pub fn random_typed<R: RngCore + ?Sized>(ty: GeoHashType, rng: &mut R) -> GeoHash {
    GeoHash::from_code(ty.width(), rng.next_u64() & low_mask(ty.bits()))
}
