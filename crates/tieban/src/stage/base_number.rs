//! Base number (基本数) resolution.

use crate::error::Result;
use crate::hexagram::HexagramPair;
use crate::lut;

/// Returns the base number of `pair`: the upper table value of its upper
/// trigram plus the lower table value of its lower trigram.
///
/// ```
/// use tieban::{stage, HexagramPair, Trigram};
///
/// assert_eq!(stage::base_number(HexagramPair::new(Trigram::ZHEN, Trigram::DUI)), 2790);
/// ```
#[inline]
#[must_use]
pub const fn base_number(pair: HexagramPair) -> u32 {
    lut::base_upper(pair.upper.bits()) + lut::base_lower(pair.lower.bits())
}

/// Resolves the base number of a pair given by trigram names.
///
/// # Errors
///
/// Returns [`crate::Error::UnknownHexagram`] if either name is not a trigram.
pub fn base_number_of(upper: &str, lower: &str) -> Result<u32> {
    HexagramPair::from_names(upper, lower).map(base_number)
}
