//! Body-life hexagram (身命卦) derivation.

use crate::core::constants::TRIGRAM_COUNT;
use crate::core::pillar::FourPillars;
use crate::core::scheme::NumberScheme;
use crate::error::Result;
use crate::hexagram::HexagramPair;
use crate::trigram::{Trigram, TrigramOrder};

use super::wrap_zero;

/// The body-life pair and the parity split it was read from.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BodyLife {
    /// The derived (upper, lower) pair.
    pub pair: HexagramPair,
    /// Pre-heaven ordinal of the upper trigram, in `1..=8`.
    pub upper_ordinal: u32,
    /// Pre-heaven ordinal of the lower trigram, in `1..=8`.
    pub lower_ordinal: u32,
    /// Sum of the odd He-Luo codes.
    pub odd_sum: u32,
    /// How many of the eight He-Luo codes are odd.
    pub odd_count: u32,
    /// Sum of the even He-Luo codes.
    pub even_sum: u32,
}

/// Derives the body-life pair of `pillars`.
///
/// The He-Luo codes of the eight symbols are split by parity. The upper
/// ordinal is `(odd sum + odd count) mod 8`, the lower ordinal
/// `even sum mod 8`, each with 0 read as 8, and both name trigrams through
/// the pre-heaven order.
///
/// # Errors
///
/// Cannot fail on a well-formed table; the ordinal lookup is propagated
/// rather than assumed.
///
/// # Example
///
/// ```
/// use tieban::{stage, FourPillars, HexagramPair, Trigram};
///
/// let pillars = FourPillars::parse("壬子", "丙午", "庚午", "壬午").unwrap();
/// let body = stage::body_life(&pillars).unwrap();
/// assert_eq!(body.pair, HexagramPair::new(Trigram::ZHEN, Trigram::DUI));
/// ```
pub fn body_life(pillars: &FourPillars) -> Result<BodyLife> {
    let (odds, evens): (Vec<u32>, Vec<u32>) = pillars
        .codes(NumberScheme::HeLuo)
        .into_iter()
        .partition(|code| code % 2 == 1);

    let odd_sum: u32 = odds.iter().sum();
    let odd_count = odds.len() as u32;
    let even_sum: u32 = evens.iter().sum();

    let modulus = TRIGRAM_COUNT as u32;
    let upper_ordinal = wrap_zero(odd_sum + odd_count, modulus);
    let lower_ordinal = wrap_zero(even_sum, modulus);

    let pair = HexagramPair::new(
        Trigram::from_ordinal(TrigramOrder::PreHeaven, upper_ordinal)?,
        Trigram::from_ordinal(TrigramOrder::PreHeaven, lower_ordinal)?,
    );

    Ok(BodyLife {
        pair,
        upper_ordinal,
        lower_ordinal,
        odd_sum,
        odd_count,
        even_sum,
    })
}
