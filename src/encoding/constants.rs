/// Prefix of a bit literal, `##0101`.
pub(crate) const BIT_LITERAL_PREFIX: &str = "##";
/// Prefix of a hash-character literal, `#sp052w`.
pub(crate) const CHAR_LITERAL_PREFIX: &str = "#";
/// Scratch register size, in bits.
pub(crate) const SCRATCH_BITS: u8 = 64;
