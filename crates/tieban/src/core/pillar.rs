//! Pillars (柱) and the four-pillar input.

use core::fmt;
use core::str::FromStr;

use super::branch::Branch;
use super::constants::SYMBOL_COUNT;
use super::scheme::NumberScheme;
use super::stem::Stem;
use crate::error::{Error, SymbolKind};

/// A stem+branch pair naming one temporal unit.
///
/// Any stem may be paired with any branch; the engine does not require the
/// pair to belong to the sexagenary cycle.
///
/// # Example
///
/// ```
/// use tieban::{Branch, Pillar, Stem};
///
/// let p: Pillar = "壬子".parse().unwrap();
/// assert_eq!(p, Pillar::new(Stem::Ren, Branch::Zi));
/// assert_eq!("ren-zi".parse::<Pillar>().unwrap(), p);
/// assert_eq!(p.to_string(), "壬子");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pillar {
    /// The heavenly stem.
    pub stem: Stem,
    /// The earthly branch.
    pub branch: Branch,
}

impl Pillar {
    /// Creates a pillar.
    #[inline]
    #[must_use]
    pub const fn new(stem: Stem, branch: Branch) -> Self {
        Self { stem, branch }
    }

    /// Returns `(stem code, branch code)` under `scheme`.
    #[inline]
    #[must_use]
    pub const fn codes(self, scheme: NumberScheme) -> (u32, u32) {
        (self.stem.code(scheme), self.branch.code(scheme))
    }

    /// Returns true when stem and branch share polarity, i.e. the pair is
    /// one of the sixty cyclic pillars.
    #[inline]
    #[must_use]
    pub const fn is_sexagenary(self) -> bool {
        self.stem.is_yang() == self.branch.is_yang()
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.stem, self.branch)
    }
}

impl FromStr for Pillar {
    type Err = Error;

    /// Accepts two glyphs (`"壬子"`) or two spellings joined by `-`, `/`
    /// or whitespace (`"ren-zi"`, `"壬 子"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parts: Vec<&str> = trimmed
            .split(|c: char| c == '-' || c == '/' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        let (stem, branch) = match parts.as_slice() {
            [stem, branch] => (*stem, *branch),
            [joined] => {
                let mut chars = joined.char_indices();
                match (chars.next(), chars.next(), chars.next()) {
                    (Some(_), Some((split, _)), None) => joined.split_at(split),
                    _ => return Err(Error::unknown_symbol(SymbolKind::Pillar, s)),
                }
            }
            _ => return Err(Error::unknown_symbol(SymbolKind::Pillar, s)),
        };

        Ok(Self::new(stem.parse()?, branch.parse()?))
    }
}

/// The year, month, day and hour pillars of one instant.
///
/// Immutable once constructed. Symbol order everywhere is year stem, year
/// branch, month stem, month branch, day stem, day branch, hour stem, hour
/// branch.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FourPillars {
    year: Pillar,
    month: Pillar,
    day: Pillar,
    hour: Pillar,
}

impl FourPillars {
    /// Creates the four pillars.
    #[must_use]
    pub const fn new(year: Pillar, month: Pillar, day: Pillar, hour: Pillar) -> Self {
        Self {
            year,
            month,
            day,
            hour,
        }
    }

    /// Parses four pillars from text, in year, month, day, hour order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSymbol`] if any pillar fails to parse.
    pub fn parse(year: &str, month: &str, day: &str, hour: &str) -> Result<Self, Error> {
        Ok(Self::new(
            year.parse()?,
            month.parse()?,
            day.parse()?,
            hour.parse()?,
        ))
    }

    /// The year pillar.
    #[inline]
    #[must_use]
    pub const fn year(&self) -> Pillar {
        self.year
    }

    /// The month pillar.
    #[inline]
    #[must_use]
    pub const fn month(&self) -> Pillar {
        self.month
    }

    /// The day pillar.
    #[inline]
    #[must_use]
    pub const fn day(&self) -> Pillar {
        self.day
    }

    /// The hour pillar.
    #[inline]
    #[must_use]
    pub const fn hour(&self) -> Pillar {
        self.hour
    }

    /// The pillars in year, month, day, hour order.
    #[inline]
    #[must_use]
    pub const fn pillars(&self) -> [Pillar; 4] {
        [self.year, self.month, self.day, self.hour]
    }

    /// The codes of all eight symbols under `scheme`, stem before branch.
    #[must_use]
    pub fn codes(&self, scheme: NumberScheme) -> [u32; SYMBOL_COUNT] {
        let mut out = [0; SYMBOL_COUNT];
        for (i, pillar) in self.pillars().iter().enumerate() {
            out[2 * i] = pillar.stem.code(scheme);
            out[2 * i + 1] = pillar.branch.code(scheme);
        }
        out
    }

    /// True when the day stem is yang (甲 丙 戊 庚 壬).
    #[inline]
    #[must_use]
    pub const fn is_yang_day(&self) -> bool {
        self.day.stem.is_yang()
    }
}

impl fmt::Display for FourPillars {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.year, self.month, self.day, self.hour)
    }
}
