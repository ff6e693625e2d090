//! Heavenly stems (天干).
//!
//! A closed set of ten symbols. Each stem carries one code per
//! [`NumberScheme`]; the codes live in [`crate::lut`] and are never
//! mutable at runtime.

use core::fmt;
use core::str::FromStr;

use super::constants::STEM_COUNT;
use super::scheme::NumberScheme;
use crate::error::{Error, SymbolKind};
use crate::lut::{stem_he_luo, stem_mystic};

/// One of the ten heavenly stems.
///
/// # Example
///
/// ```
/// use tieban::{NumberScheme, Stem};
///
/// let s: Stem = "庚".parse().unwrap();
/// assert_eq!(s, Stem::Geng);
/// assert_eq!(s.code(NumberScheme::Mystic), 8);
/// assert_eq!(s.code(NumberScheme::HeLuo), 3);
/// assert!(s.is_yang());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Stem {
    /// 甲
    #[cfg_attr(feature = "serde", serde(rename = "甲"))]
    Jia = 0,
    /// 乙
    #[cfg_attr(feature = "serde", serde(rename = "乙"))]
    Yi = 1,
    /// 丙
    #[cfg_attr(feature = "serde", serde(rename = "丙"))]
    Bing = 2,
    /// 丁
    #[cfg_attr(feature = "serde", serde(rename = "丁"))]
    Ding = 3,
    /// 戊
    #[cfg_attr(feature = "serde", serde(rename = "戊"))]
    Wu = 4,
    /// 己
    #[cfg_attr(feature = "serde", serde(rename = "己"))]
    Ji = 5,
    /// 庚
    #[cfg_attr(feature = "serde", serde(rename = "庚"))]
    Geng = 6,
    /// 辛
    #[cfg_attr(feature = "serde", serde(rename = "辛"))]
    Xin = 7,
    /// 壬
    #[cfg_attr(feature = "serde", serde(rename = "壬"))]
    Ren = 8,
    /// 癸
    #[cfg_attr(feature = "serde", serde(rename = "癸"))]
    Gui = 9,
}

const GLYPHS: [char; STEM_COUNT] = ['甲', '乙', '丙', '丁', '戊', '己', '庚', '辛', '壬', '癸'];

const PINYIN: [&str; STEM_COUNT] = [
    "jia", "yi", "bing", "ding", "wu", "ji", "geng", "xin", "ren", "gui",
];

impl Stem {
    /// All stems in cyclic order.
    pub const ALL: [Self; STEM_COUNT] = [
        Self::Jia,
        Self::Yi,
        Self::Bing,
        Self::Ding,
        Self::Wu,
        Self::Ji,
        Self::Geng,
        Self::Xin,
        Self::Ren,
        Self::Gui,
    ];

    /// Returns the position in the cycle (甲 = 0).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the Chinese glyph.
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        GLYPHS[self as usize]
    }

    /// Returns the toneless pinyin spelling.
    #[inline]
    #[must_use]
    pub const fn pinyin(self) -> &'static str {
        PINYIN[self as usize]
    }

    /// Returns the stem's code under `scheme`.
    #[inline]
    #[must_use]
    pub const fn code(self, scheme: NumberScheme) -> u32 {
        match scheme {
            NumberScheme::Mystic => stem_mystic(self.index()),
            NumberScheme::HeLuo => stem_he_luo(self.index()),
        }
    }

    /// Returns true for the five yang stems 甲 丙 戊 庚 壬.
    ///
    /// A day whose stem is yang is a "yang day" for the four-gate method.
    #[inline]
    #[must_use]
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

impl fmt::Display for Stem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Stem {
    type Err = Error;

    /// Parses a glyph (`"壬"`) or a pinyin spelling (`"ren"`, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|stem| {
                let mut chars = trimmed.chars();
                (chars.next() == Some(stem.glyph()) && chars.next().is_none())
                    || trimmed.eq_ignore_ascii_case(stem.pinyin())
            })
            .ok_or_else(|| Error::unknown_symbol(SymbolKind::Stem, s))
    }
}
