//! Trigrams (卦) and their bit-level algebra.
//!
//! A [`Trigram`] wraps a validated 3-line pattern. The pattern IS the
//! identity; name, glyph and every ordinal are computed properties read
//! from [`crate::lut`], so they can never drift out of sync with the lines.
//!
//! # Encoding
//!
//! ```text
//! bit 0 = bottom line, bit 2 = top line, 1 = yang (solid), 0 = yin (broken)
//!
//! 乾 ☰ 0b111   兑 ☱ 0b011   离 ☲ 0b101   震 ☳ 0b001
//! 巽 ☴ 0b110   坎 ☵ 0b010   艮 ☶ 0b100   坤 ☷ 0b000
//! ```
//!
//! # Example
//!
//! ```
//! use tieban::{Structural, Trigram};
//!
//! let zhen = Trigram::ZHEN;
//! assert_eq!(zhen.lines(), [1, 0, 0]);
//! assert_eq!(zhen.invert(), Trigram::XUN);
//! assert_eq!(zhen.reverse(), Trigram::GEN);
//! assert_eq!(Trigram::from_lines([1, 1, 0]).unwrap(), Trigram::DUI);
//! assert!(Trigram::from_lines([1, 2, 0]).is_err());
//! ```

use core::fmt;
use core::str::FromStr;

use crate::core::constants::{TRIGRAM_COUNT, TRIGRAM_LINES};
use crate::core::traits::Structural;
use crate::error::{Error, Result};
use crate::lut;

/// Codepoint of ☰, the first of the eight trigram symbols (U+2630–U+2637),
/// which run in pre-heaven order.
pub const TRIGRAM_SYMBOL_BASE: u32 = 0x2630;

/// One of the eight trigrams.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Trigram(u8);

/// The three independent integer orderings of the trigrams.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum TrigramOrder {
    /// Fu Xi's pre-heaven order (先天数), 乾 = 1 … 坤 = 8.
    PreHeaven,
    /// King Wen's post-heaven order (后天数), 坎 = 1 … 离 = 9, 5 unused.
    PostHeaven,
    /// Luo Shu square numbers (洛书数), 坤 = 1 … 乾 = 9, 5 unused.
    LuoShu,
}

impl TrigramOrder {
    /// All orderings.
    pub const ALL: [Self; 3] = [Self::PreHeaven, Self::PostHeaven, Self::LuoShu];

    /// Returns the short name (slug) of the ordering.
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::PreHeaven => "pre-heaven",
            Self::PostHeaven => "post-heaven",
            Self::LuoShu => "luo-shu",
        }
    }
}

impl fmt::Display for TrigramOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl Trigram {
    /// 乾 ☰ heaven.
    pub const QIAN: Self = Self(0b111);
    /// 兑 ☱ lake.
    pub const DUI: Self = Self(0b011);
    /// 离 ☲ fire.
    pub const LI: Self = Self(0b101);
    /// 震 ☳ thunder.
    pub const ZHEN: Self = Self(0b001);
    /// 巽 ☴ wind.
    pub const XUN: Self = Self(0b110);
    /// 坎 ☵ water.
    pub const KAN: Self = Self(0b010);
    /// 艮 ☶ mountain.
    pub const GEN: Self = Self(0b100);
    /// 坤 ☷ earth.
    pub const KUN: Self = Self(0b000);

    /// All trigrams in pre-heaven order.
    pub const ALL: [Self; TRIGRAM_COUNT] = [
        Self::QIAN,
        Self::DUI,
        Self::LI,
        Self::ZHEN,
        Self::XUN,
        Self::KAN,
        Self::GEN,
        Self::KUN,
    ];

    /// Creates a trigram from a packed line pattern (bit 0 = bottom line).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPattern`] if `bits` has any bit above bit 2.
    pub fn from_bits(bits: u8) -> Result<Self> {
        if (bits as usize) < TRIGRAM_COUNT {
            Ok(Self(bits))
        } else {
            let width = 8 - bits.leading_zeros() as usize;
            Err(Error::UnknownPattern {
                lines: (0..width).map(|i| (bits >> i) & 1).collect(),
            })
        }
    }

    /// Creates a trigram from its lines, bottom to top.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownPattern`] if any line is neither 0 nor 1.
    pub fn from_lines(lines: [u8; TRIGRAM_LINES]) -> Result<Self> {
        if lines.iter().any(|&line| line > 1) {
            return Err(Error::UnknownPattern {
                lines: lines.to_vec(),
            });
        }
        Ok(Self(lines[0] | (lines[1] << 1) | (lines[2] << 2)))
    }

    /// Creates a trigram from the low three bits of `bits`.
    ///
    /// Total: higher bits are discarded, which is what sliding a window over
    /// a six-line figure needs.
    #[inline]
    #[must_use]
    pub(crate) const fn from_low_bits(bits: u8) -> Self {
        Self(bits & 0b111)
    }

    /// Looks up the trigram carrying `ordinal` under `order`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OrdinalOutOfRange`] if no trigram carries it, e.g.
    /// 0, anything above 9, or the post-heaven / Luo Shu centre 5.
    ///
    /// # Example
    ///
    /// ```
    /// use tieban::{Trigram, TrigramOrder};
    ///
    /// assert_eq!(Trigram::from_ordinal(TrigramOrder::PreHeaven, 4).unwrap(), Trigram::ZHEN);
    /// assert_eq!(Trigram::from_ordinal(TrigramOrder::PostHeaven, 1).unwrap(), Trigram::KAN);
    /// assert!(Trigram::from_ordinal(TrigramOrder::PostHeaven, 5).is_err());
    /// ```
    pub fn from_ordinal(order: TrigramOrder, ordinal: u32) -> Result<Self> {
        if order == TrigramOrder::PreHeaven && (1..=TRIGRAM_COUNT as u32).contains(&ordinal) {
            return Ok(Self(lut::PRE_HEAVEN_PATTERNS[ordinal as usize - 1]));
        }
        Self::ALL
            .into_iter()
            .find(|t| t.ordinal(order) == ordinal)
            .ok_or(Error::OrdinalOutOfRange { order, ordinal })
    }

    /// Returns the packed line pattern.
    #[inline]
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns the lines, bottom to top.
    #[inline]
    #[must_use]
    pub const fn lines(self) -> [u8; TRIGRAM_LINES] {
        [self.0 & 1, (self.0 >> 1) & 1, (self.0 >> 2) & 1]
    }

    /// Returns the number this trigram carries under `order`.
    #[inline]
    #[must_use]
    pub const fn ordinal(self, order: TrigramOrder) -> u32 {
        match order {
            TrigramOrder::PreHeaven => lut::pre_heaven(self.0),
            TrigramOrder::PostHeaven => lut::post_heaven(self.0),
            TrigramOrder::LuoShu => lut::luo_shu(self.0),
        }
    }

    /// Shorthand for the pre-heaven ordinal, the one most stages read.
    #[inline]
    #[must_use]
    pub const fn pre_heaven(self) -> u32 {
        lut::pre_heaven(self.0)
    }

    /// Returns the simplified-script name glyph.
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        lut::TRIGRAM_GLYPHS[self.0 as usize]
    }

    /// Returns the toneless pinyin name.
    #[inline]
    #[must_use]
    pub const fn pinyin(self) -> &'static str {
        lut::TRIGRAM_PINYIN[self.0 as usize]
    }

    /// Returns the Unicode trigram symbol (☰ … ☷).
    #[must_use]
    pub fn symbol(self) -> char {
        char::from_u32(TRIGRAM_SYMBOL_BASE + self.pre_heaven() - 1).unwrap_or('?')
    }
}

impl Structural for Trigram {
    #[inline]
    fn invert(self) -> Self {
        Self(lut::invert(self.0))
    }

    #[inline]
    fn reverse(self) -> Self {
        Self(lut::reverse(self.0))
    }
}

impl fmt::Debug for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:03b})", self.glyph(), self.0)
    }
}

impl fmt::Display for Trigram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Trigram {
    type Err = Error;

    /// Parses a name glyph in either script (`"离"`, `"離"`), a pinyin name
    /// (`"li"`) or a trigram symbol (`"☲"`).
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let single = match (chars.next(), chars.next()) {
            (Some(c), None) => Some(c),
            _ => None,
        };
        Self::ALL
            .into_iter()
            .find(|t| {
                let bits = t.0 as usize;
                single.is_some_and(|c| {
                    c == lut::TRIGRAM_GLYPHS[bits]
                        || c == lut::TRIGRAM_TRADITIONAL[bits]
                        || c == t.symbol()
                }) || trimmed.eq_ignore_ascii_case(t.pinyin())
            })
            .ok_or_else(|| Error::unknown_hexagram(s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Trigram {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_char(self.glyph())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Trigram {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = <String as serde::Deserialize>::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}
