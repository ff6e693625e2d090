//! Earthly branches (地支).

use core::fmt;
use core::str::FromStr;

use super::constants::BRANCH_COUNT;
use super::scheme::NumberScheme;
use crate::error::{Error, SymbolKind};
use crate::lut::{branch_he_luo, branch_mystic};

/// One of the twelve earthly branches.
///
/// # Example
///
/// ```
/// use tieban::{Branch, NumberScheme};
///
/// let b: Branch = "wu".parse().unwrap();
/// assert_eq!(b, Branch::Wu);
/// assert_eq!(b.glyph(), '午');
/// assert_eq!(b.code(NumberScheme::Mystic), 9);
/// assert_eq!(b.code(NumberScheme::HeLuo), 7);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Branch {
    /// 子
    #[cfg_attr(feature = "serde", serde(rename = "子"))]
    Zi = 0,
    /// 丑
    #[cfg_attr(feature = "serde", serde(rename = "丑"))]
    Chou = 1,
    /// 寅
    #[cfg_attr(feature = "serde", serde(rename = "寅"))]
    Yin = 2,
    /// 卯
    #[cfg_attr(feature = "serde", serde(rename = "卯"))]
    Mao = 3,
    /// 辰
    #[cfg_attr(feature = "serde", serde(rename = "辰"))]
    Chen = 4,
    /// 巳
    #[cfg_attr(feature = "serde", serde(rename = "巳"))]
    Si = 5,
    /// 午
    #[cfg_attr(feature = "serde", serde(rename = "午"))]
    Wu = 6,
    /// 未
    #[cfg_attr(feature = "serde", serde(rename = "未"))]
    Wei = 7,
    /// 申
    #[cfg_attr(feature = "serde", serde(rename = "申"))]
    Shen = 8,
    /// 酉
    #[cfg_attr(feature = "serde", serde(rename = "酉"))]
    You = 9,
    /// 戌
    #[cfg_attr(feature = "serde", serde(rename = "戌"))]
    Xu = 10,
    /// 亥
    #[cfg_attr(feature = "serde", serde(rename = "亥"))]
    Hai = 11,
}

const GLYPHS: [char; BRANCH_COUNT] = [
    '子', '丑', '寅', '卯', '辰', '巳', '午', '未', '申', '酉', '戌', '亥',
];

const PINYIN: [&str; BRANCH_COUNT] = [
    "zi", "chou", "yin", "mao", "chen", "si", "wu", "wei", "shen", "you", "xu", "hai",
];

impl Branch {
    /// All branches in cyclic order.
    pub const ALL: [Self; BRANCH_COUNT] = [
        Self::Zi,
        Self::Chou,
        Self::Yin,
        Self::Mao,
        Self::Chen,
        Self::Si,
        Self::Wu,
        Self::Wei,
        Self::Shen,
        Self::You,
        Self::Xu,
        Self::Hai,
    ];

    /// Returns the position in the cycle (子 = 0).
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

    /// Returns the branch's code under `scheme`.
    #[inline]
    #[must_use]
    pub const fn code(self, scheme: NumberScheme) -> u32 {
        match scheme {
            NumberScheme::Mystic => branch_mystic(self.index()),
            NumberScheme::HeLuo => branch_he_luo(self.index()),
        }
    }

    /// Returns true for the six yang branches 子 寅 辰 午 申 戌.
    #[inline]
    #[must_use]
    pub const fn is_yang(self) -> bool {
        self.index() % 2 == 0
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Branch {
    type Err = Error;

    /// Parses a glyph (`"午"`) or a pinyin spelling (`"wu"`, any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|branch| {
                let mut chars = trimmed.chars();
                (chars.next() == Some(branch.glyph()) && chars.next().is_none())
                    || trimmed.eq_ignore_ascii_case(branch.pinyin())
            })
            .ok_or_else(|| Error::unknown_symbol(SymbolKind::Branch, s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mystic_codes_pair_opposites() {
        // 子午9 丑未8 寅申7 卯酉6 辰戌5 巳亥4
        for i in 0..6 {
            let a = Branch::ALL[i];
            let b = Branch::ALL[i + 6];
            assert_eq!(a.code(NumberScheme::Mystic), b.code(NumberScheme::Mystic));
            assert_eq!(a.code(NumberScheme::Mystic), 9 - i as u32);
        }
    }

    #[test]
    fn test_mystic_never_zero() {
        for b in Branch::ALL {
            assert!(b.code(NumberScheme::Mystic) >= 4);
        }
    }

    #[test]
    fn test_he_luo_codes() {
        let codes: Vec<u32> = Branch::ALL
            .iter()
            .map(|b| b.code(NumberScheme::HeLuo))
            .collect();
        assert_eq!(codes, vec![6, 5, 3, 8, 5, 2, 7, 5, 4, 9, 5, 1]);
    }

    #[test]
    fn test_parse_glyph_and_pinyin() {
        for b in Branch::ALL {
            assert_eq!(b.glyph().to_string().parse::<Branch>(), Ok(b));
            assert_eq!(b.pinyin().parse::<Branch>(), Ok(b));
        }
        assert!("甲".parse::<Branch>().is_err());
    }
}
