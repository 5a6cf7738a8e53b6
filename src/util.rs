/// Mask covering the low `bits` bits of a `u64`.
///
/// # Arguments
///
/// * `bits: u8` - Number of low bits to keep, at most 64.
///
/// # Example
///
/// ```
/// use geohash_type::util::low_mask;
///
/// assert_eq!(low_mask(0), 0);
/// assert_eq!(low_mask(5), 0b1_1111);
/// assert_eq!(low_mask(64), u64::max_value());
/// ```
pub fn low_mask(bits: u8) -> u64 {
    debug_assert!(bits <= 64);
    if bits >= 64 {
        u64::max_value()
    } else {
        (1u64 << bits) - 1
    }
}

/// Number of whole base-32 characters needed to cover `bits` bits.
pub fn chars_for_bits(bits: u8) -> usize { (bits as usize + 4) / 5 }

#[macro_export]
/// Helper macro to make implementing `From` easier.
macro_rules! from_fn {
    ($to:ty, $from:ty, $fn:expr) => {
        impl From<$from> for $to {
            fn from(f: $from) -> $to { $fn(f) }
        }
    };
}
