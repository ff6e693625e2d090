//! Hexagram pairs: an upper and a lower trigram forming six lines.
//!
//! Line numbering runs bottom to top across the whole figure: lines 0–2 are
//! the lower trigram, lines 3–5 the upper trigram.
//!
//! ```text
//! 5 ─ upper top
//! 4 ─ upper middle
//! 3 ─ upper bottom
//! 2 ─ lower top
//! 1 ─ lower middle
//! 0 ─ lower bottom
//! ```

use core::fmt;

use crate::core::constants::{HEXAGRAM_LINES, TRIGRAM_LINES};
use crate::core::traits::Structural;
use crate::error::Result;
use crate::trigram::Trigram;

/// An ordered (upper, lower) trigram pair.
///
/// (震, 兑) and (兑, 震) are different figures.
///
/// # Example
///
/// ```
/// use tieban::{HexagramPair, Trigram};
///
/// let gui_mei = HexagramPair::from_names("震", "兑").unwrap();
/// assert_eq!(gui_mei, HexagramPair::new(Trigram::ZHEN, Trigram::DUI));
/// assert_eq!(gui_mei.to_string(), "震/兑");
/// assert_eq!(gui_mei.six_lines().lines(), [1, 1, 0, 1, 0, 0]);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexagramPair {
    /// The upper (outer) trigram.
    pub upper: Trigram,
    /// The lower (inner) trigram.
    pub lower: Trigram,
}

impl HexagramPair {
    /// Creates a pair.
    #[inline]
    #[must_use]
    pub const fn new(upper: Trigram, lower: Trigram) -> Self {
        Self { upper, lower }
    }

    /// Creates a pair from two trigram names.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnknownHexagram`] naming the first name that
    /// is not a trigram.
    pub fn from_names(upper: &str, lower: &str) -> Result<Self> {
        Ok(Self::new(upper.parse()?, lower.parse()?))
    }

    /// Reassembles a pair from its six lines.
    #[inline]
    #[must_use]
    pub const fn from_six_lines(lines: SixLines) -> Self {
        Self::new(lines.window(TRIGRAM_LINES), lines.window(0))
    }

    /// Returns the six lines, lower trigram first.
    #[inline]
    #[must_use]
    pub const fn six_lines(self) -> SixLines {
        SixLines(self.lower.bits() | (self.upper.bits() << TRIGRAM_LINES))
    }

    /// Returns the mutual hexagram (互卦).
    ///
    /// The new lower trigram is lines 1–3 and the new upper trigram lines
    /// 2–4; lines 2 and 3 appear in both halves.
    #[inline]
    #[must_use]
    pub const fn mutual(self) -> Self {
        let lines = self.six_lines();
        Self::new(lines.window(2), lines.window(1))
    }

    /// Applies `upper_op` to the upper and `lower_op` to the lower trigram.
    #[inline]
    #[must_use]
    pub fn map(
        self,
        upper_op: impl Fn(Trigram) -> Trigram,
        lower_op: impl Fn(Trigram) -> Trigram,
    ) -> Self {
        Self::new(upper_op(self.upper), lower_op(self.lower))
    }

    /// Upper pre-heaven number times ten plus lower pre-heaven number.
    #[inline]
    #[must_use]
    pub const fn pre_heaven_code(self) -> u32 {
        self.upper.pre_heaven() * 10 + self.lower.pre_heaven()
    }
}

impl Structural for HexagramPair {
    #[inline]
    fn invert(self) -> Self {
        self.map(Trigram::invert, Trigram::invert)
    }

    #[inline]
    fn reverse(self) -> Self {
        self.map(Trigram::reverse, Trigram::reverse)
    }
}

impl fmt::Display for HexagramPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.upper, self.lower)
    }
}

/// The six lines of a hexagram pair packed into the low six bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct SixLines(u8);

impl SixLines {
    /// Mask of the six meaningful bits.
    pub const MASK: u8 = (1 << HEXAGRAM_LINES) - 1;

    /// Returns the packed pattern.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns the lines, bottom to top.
    #[must_use]
    pub const fn lines(self) -> [u8; HEXAGRAM_LINES] {
        let mut out = [0u8; HEXAGRAM_LINES];
        let mut i = 0;
        while i < HEXAGRAM_LINES {
            out[i] = (self.0 >> i) & 1;
            i += 1;
        }
        out
    }

    /// Returns the three-line window starting at line `offset`.
    ///
    /// Offsets 0 and 3 give the lower and upper trigram; 1 and 2 give the
    /// two nuclear trigrams.
    #[inline]
    #[must_use]
    pub const fn window(self, offset: usize) -> Trigram {
        Trigram::from_low_bits(self.0 >> offset)
    }

    /// Flips every line whose bit is set in `mask`.
    #[inline]
    #[must_use]
    pub const fn flip(self, mask: u8) -> Self {
        Self((self.0 ^ mask) & Self::MASK)
    }
}
