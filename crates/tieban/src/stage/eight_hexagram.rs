//! Eight-hexagram roll (八卦滚): four pairs derived from the body-life pair.
//!
//! | # | stage | derivation |
//! |---|-------|------------|
//! | 1 | 互卦 | mutual of the base pair |
//! | 2 | 互卦之变卦 | stage 1 with the year's moving lines flipped |
//! | 3 | 第一卦之错卦 | inversion of stage 1 |
//! | 4 | 第二卦之错卦 | inversion of stage 2 |

use core::fmt;

use crate::core::constants::MOVING_LINE_MODULUS;
use crate::core::gender::Gender;
use crate::core::pillar::Pillar;
use crate::core::scheme::NumberScheme;
use crate::core::traits::Structural;
use crate::error::{Error, Result};
use crate::hexagram::HexagramPair;

use super::wrap_zero;

/// Position of an entry in the eight-hexagram roll.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum RollStage {
    /// 互卦
    #[cfg_attr(feature = "serde", serde(rename = "互卦"))]
    Mutual,
    /// 互卦之变卦
    #[cfg_attr(feature = "serde", serde(rename = "互卦之变卦"))]
    ChangedMutual,
    /// 第一卦之错卦
    #[cfg_attr(feature = "serde", serde(rename = "第一卦之错卦"))]
    InvertedFirst,
    /// 第二卦之错卦
    #[cfg_attr(feature = "serde", serde(rename = "第二卦之错卦"))]
    InvertedSecond,
}

impl RollStage {
    /// All stages in roll order.
    pub const ALL: [Self; 4] = [
        Self::Mutual,
        Self::ChangedMutual,
        Self::InvertedFirst,
        Self::InvertedSecond,
    ];

    /// Returns the traditional label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Mutual => "互卦",
            Self::ChangedMutual => "互卦之变卦",
            Self::InvertedFirst => "第一卦之错卦",
            Self::InvertedSecond => "第二卦之错卦",
        }
    }
}

impl fmt::Display for RollStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// How the year pillar and base number turn into the moving-line value.
///
/// `v = stem code × stem multiplier + branch code × branch multiplier + base`
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct YearStep {
    /// Scheme the year codes are read in.
    pub scheme: NumberScheme,
    /// Multiplier of the year stem code.
    pub stem_multiplier: u32,
    /// Multiplier of the year branch code.
    pub branch_multiplier: u32,
}

impl Default for YearStep {
    /// Lower-era (下元) form: mystic codes, stem × 1, branch × 10.
    fn default() -> Self {
        Self {
            scheme: NumberScheme::Mystic,
            stem_multiplier: 1,
            branch_multiplier: 10,
        }
    }
}

impl YearStep {
    /// Returns `v` for the given year pillar and base number.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if the multipliers push `v` past `u32`.
    pub fn value(self, year: Pillar, base_number: u32) -> Result<u32> {
        let (stem, branch) = year.codes(self.scheme);
        stem.checked_mul(self.stem_multiplier)
            .and_then(|v| v.checked_add(branch.checked_mul(self.branch_multiplier)?))
            .and_then(|v| v.checked_add(base_number))
            .ok_or(Error::Overflow {
                quantity: "year step",
            })
    }
}

/// The lines that move in stage 2, selected by `m = v mod 9` (0 read as 9).
///
/// | m | lines |
/// |---|-------|
/// | 1–6 | `m − 1` |
/// | 7 | 0, 3 |
/// | 8 | 1, 4 |
/// | 9 | 2, 5 |
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MovingLines {
    residue: u32,
    mask: u8,
}

impl MovingLines {
    /// Selects the moving lines for step value `value`.
    #[must_use]
    pub const fn from_value(value: u32) -> Self {
        let residue = wrap_zero(value, MOVING_LINE_MODULUS);
        let mask = match residue {
            1..=6 => 1 << (residue - 1),
            // 7, 8, 9: one line in each trigram, same position
            _ => 0b1001 << (residue - 7),
        };
        Self { residue, mask }
    }

    /// Returns `m`, in `1..=9`.
    #[inline]
    #[must_use]
    pub const fn residue(self) -> u32 {
        self.residue
    }

    /// Returns the moving lines as a six-bit mask.
    #[inline]
    #[must_use]
    pub const fn mask(self) -> u8 {
        self.mask
    }

    /// Returns the moving line indices, bottom first.
    pub fn lines(self) -> impl Iterator<Item = usize> {
        (0..6).filter(move |i| (self.mask >> i) & 1 == 1)
    }
}

/// One labelled pair of a roll.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RollEntry {
    /// Where in the roll the pair sits.
    pub stage: RollStage,
    /// The derived pair.
    pub pair: HexagramPair,
}

/// The four-entry roll plus its moving-line trace.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EightHexagramRoll {
    /// Entries in [`RollStage::ALL`] order.
    pub entries: [RollEntry; 4],
    /// The year step value `v`.
    pub step_value: u32,
    /// The lines flipped in stage 2.
    pub moving: MovingLines,
}

impl EightHexagramRoll {
    /// Returns the pairs in roll order.
    #[must_use]
    pub fn pairs(&self) -> [HexagramPair; 4] {
        self.entries.map(|entry| entry.pair)
    }
}

/// Rolls the four pairs from the body-life `base` pair.
///
/// `gender` is reserved for selecting the era (元运) formula and does not
/// change the result.
///
/// # Errors
///
/// Returns [`Error::Overflow`] if the year step overflows.
///
/// # Example
///
/// ```
/// use tieban::stage::{self, YearStep};
/// use tieban::{Gender, HexagramPair, Pillar, Trigram};
///
/// let base = HexagramPair::new(Trigram::ZHEN, Trigram::DUI);
/// let year: Pillar = "壬子".parse().unwrap();
/// let roll = stage::eight_hexagram(base, year, 2790, Gender::Male, YearStep::default()).unwrap();
/// assert_eq!(roll.step_value, 2886);
/// assert_eq!(roll.moving.residue(), 6);
/// assert_eq!(roll.entries[1].pair, HexagramPair::new(Trigram::XUN, Trigram::LI));
/// ```
pub fn eight_hexagram(
    base: HexagramPair,
    year: Pillar,
    base_number: u32,
    _gender: Gender,
    step: YearStep,
) -> Result<EightHexagramRoll> {
    let mutual = base.mutual();
    let step_value = step.value(year, base_number)?;
    let moving = MovingLines::from_value(step_value);
    let changed = HexagramPair::from_six_lines(mutual.six_lines().flip(moving.mask()));

    let entry = |stage, pair| RollEntry { stage, pair };

    Ok(EightHexagramRoll {
        entries: [
            entry(RollStage::Mutual, mutual),
            entry(RollStage::ChangedMutual, changed),
            entry(RollStage::InvertedFirst, mutual.invert()),
            entry(RollStage::InvertedSecond, changed.invert()),
        ],
        step_value,
        moving,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trigram::Trigram;

    #[test]
    fn test_moving_line_table() {
        let expected: [&[usize]; 9] = [
            &[0],
            &[1],
            &[2],
            &[3],
            &[4],
            &[5],
            &[0, 3],
            &[1, 4],
            &[2, 5],
        ];
        for (m, lines) in (1..=9).zip(expected) {
            let moving = MovingLines::from_value(m);
            assert_eq!(moving.residue(), m);
            assert_eq!(moving.lines().collect::<Vec<_>>(), lines);
        }
    }

    #[test]
    fn test_multiple_of_nine_moves_top_pair() {
        let moving = MovingLines::from_value(2889);
        assert_eq!(moving.residue(), 9);
        assert_eq!(moving.mask(), 0b100100);
    }

    #[test]
    fn test_year_step_default() {
        let year: Pillar = "壬子".parse().unwrap();
        // 壬 6 × 1 + 子 9 × 10 + 2790
        assert_eq!(YearStep::default().value(year, 2790), Ok(2886));
    }

    #[test]
    fn test_year_step_overflow_is_an_error() {
        let year: Pillar = "壬子".parse().unwrap();
        let step = YearStep {
            branch_multiplier: u32::MAX,
            ..YearStep::default()
        };
        assert_eq!(
            step.value(year, 2790),
            Err(Error::Overflow {
                quantity: "year step"
            })
        );
        let base = HexagramPair::new(Trigram::ZHEN, Trigram::DUI);
        assert!(eight_hexagram(base, year, 2790, Gender::Male, step).is_err());
    }

    #[test]
    fn test_year_step_at_limit() {
        // 甲 9 × 1 + 子 9 × 0 + base
        let year: Pillar = "甲子".parse().unwrap();
        let step = YearStep {
            branch_multiplier: 0,
            ..YearStep::default()
        };
        assert_eq!(step.value(year, u32::MAX - 9), Ok(u32::MAX));
        assert!(step.value(year, u32::MAX - 8).is_err());
    }

    #[test]
    fn test_year_step_he_luo() {
        let year: Pillar = "壬子".parse().unwrap();
        let step = YearStep {
            scheme: NumberScheme::HeLuo,
            ..YearStep::default()
        };
        // 壬 6 × 1 + 子 6 × 10 + 2790
        assert_eq!(step.value(year, 2790), Ok(2856));
    }

    #[test]
    fn test_worked_example_roll() {
        let base = HexagramPair::new(Trigram::ZHEN, Trigram::DUI);
        let year: Pillar = "壬子".parse().unwrap();
        let roll = eight_hexagram(base, year, 2790, Gender::Female, YearStep::default()).unwrap();
        assert_eq!(
            roll.pairs(),
            [
                HexagramPair::new(Trigram::KAN, Trigram::LI),
                HexagramPair::new(Trigram::XUN, Trigram::LI),
                HexagramPair::new(Trigram::LI, Trigram::KAN),
                HexagramPair::new(Trigram::ZHEN, Trigram::KAN),
            ]
        );
        for (entry, stage) in roll.entries.iter().zip(RollStage::ALL) {
            assert_eq!(entry.stage, stage);
        }
    }

    #[test]
    fn test_gender_ignored() {
        let base = HexagramPair::new(Trigram::GEN, Trigram::KAN);
        let year: Pillar = "甲子".parse().unwrap();
        let a = eight_hexagram(base, year, 3720, Gender::Male, YearStep::default()).unwrap();
        let b = eight_hexagram(base, year, 3720, Gender::Female, YearStep::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_inverted_entries() {
        let base = HexagramPair::new(Trigram::LI, Trigram::XUN);
        let year: Pillar = "丁卯".parse().unwrap();
        let roll = eight_hexagram(base, year, 3000, Gender::Male, YearStep::default()).unwrap();
        assert_eq!(roll.entries[2].pair, roll.entries[0].pair.invert());
        assert_eq!(roll.entries[3].pair, roll.entries[1].pair.invert());
    }
}
