//! Four-gate secret numbers (四门变数).
//!
//! Each rolled pair is read through the gate table: the upper trigram
//! contributes a stem-like code, the lower trigram a branch-like code.
//!
//! ```text
//! yang day:  H = su × 10 + bl        yin day:  H = su + bl × 10
//! Y   = pre(u) × 10 + pre(l)
//! Jia = H × K − 7                    K = secret constant, A = 19
//! M   = Y × X + Jia                  X = line multiplier, 47
//! ```
//!
//! The rule sits behind [`SecretRule`] so that the other gate readings of
//! the reference text can be slotted in without touching the engine.

use core::fmt;
use core::str::FromStr;

use crate::core::constants::{JIA_OFFSET, LINE_MULTIPLIER, SECRET_CONSTANTS};
use crate::error::{Error, Result, SymbolKind};
use crate::hexagram::HexagramPair;
use crate::lut;
use crate::trigram::Trigram;

use super::eight_hexagram::RollEntry;

/// One of the six secret constants A … F.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SecretConstant {
    /// 19
    #[default]
    A,
    /// 37
    B,
    /// 53
    C,
    /// 79
    D,
    /// 103
    E,
    /// 239
    F,
}

impl SecretConstant {
    /// All constants in letter order.
    pub const ALL: [Self; 6] = [Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Returns the numeric value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i64 {
        SECRET_CONSTANTS[self as usize]
    }

    /// Returns the letter.
    #[must_use]
    pub const fn letter(self) -> char {
        (b'A' + self as u8) as char
    }
}

impl fmt::Display for SecretConstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for SecretConstant {
    type Err = Error;

    /// Parses a letter, either case.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| {
                let mut chars = trimmed.chars();
                chars.next().is_some_and(|ch| ch.eq_ignore_ascii_case(&c.letter()))
                    && chars.next().is_none()
            })
            .ok_or_else(|| Error::unknown_symbol(SymbolKind::SecretConstant, s))
    }
}

/// Returns the gate stem code of `trigram` (upper position).
#[inline]
#[must_use]
pub const fn gate_stem_code(trigram: Trigram) -> u32 {
    lut::gate_stem(trigram.bits())
}

/// Returns the gate branch code of `trigram` (lower position).
#[inline]
#[must_use]
pub const fn gate_branch_code(trigram: Trigram) -> u32 {
    lut::gate_branch(trigram.bits())
}

/// The intermediate codes and secret number of one pair.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SecretResult {
    /// The pair that was read.
    pub pair: HexagramPair,
    /// Combined gate code.
    pub h: i64,
    /// Pre-heaven code of the pair.
    pub y: i64,
    /// `H × K − 7`.
    pub jia: i64,
    /// The secret number.
    pub m: i64,
}

/// A rule turning a rolled pair into a secret number.
pub trait SecretRule {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Reads `pair` on a yang (`true`) or yin day.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] if a configured factor pushes the secret
    /// number out of range.
    fn derive(&self, pair: HexagramPair, yang_day: bool) -> Result<SecretResult>;
}

/// The first-gate rule with a configurable constant and line multiplier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FourGate {
    /// The constant `K` in `Jia = H × K − 7`.
    pub constant: SecretConstant,
    /// The multiplier `X` in `M = Y × X + Jia`.
    pub line_multiplier: i64,
}

impl Default for FourGate {
    fn default() -> Self {
        Self {
            constant: SecretConstant::A,
            line_multiplier: LINE_MULTIPLIER,
        }
    }
}

impl FourGate {
    /// Creates the rule.
    #[must_use]
    pub const fn new(constant: SecretConstant, line_multiplier: i64) -> Self {
        Self {
            constant,
            line_multiplier,
        }
    }

    /// Combines the gate codes of `pair` according to the day's parity.
    #[must_use]
    pub const fn h(pair: HexagramPair, yang_day: bool) -> i64 {
        let su = gate_stem_code(pair.upper) as i64;
        let bl = gate_branch_code(pair.lower) as i64;
        if yang_day {
            su * 10 + bl
        } else {
            su + bl * 10
        }
    }

    /// `H × K − 7`.
    ///
    /// Total: `H` is at most 99 and `K` at most 239.
    #[must_use]
    pub const fn jia(&self, h: i64) -> i64 {
        h * self.constant.value() - JIA_OFFSET
    }
}

impl SecretRule for FourGate {
    fn name(&self) -> &'static str {
        "four-gate"
    }

    fn derive(&self, pair: HexagramPair, yang_day: bool) -> Result<SecretResult> {
        let h = Self::h(pair, yang_day);
        let y = i64::from(pair.pre_heaven_code());
        let jia = self.jia(h);
        let m = y
            .checked_mul(self.line_multiplier)
            .and_then(|v| v.checked_add(jia))
            .ok_or(Error::Overflow {
                quantity: "secret number",
            })?;
        Ok(SecretResult { pair, h, y, jia, m })
    }
}

/// Applies `rule` to every rolled entry, in order.
///
/// # Errors
///
/// Returns the first error `rule` reports.
pub fn four_gate<R: SecretRule + ?Sized>(
    rule: &R,
    entries: &[RollEntry; 4],
    yang_day: bool,
) -> Result<[SecretResult; 4]> {
    let [first, second, third, fourth] = entries;
    Ok([
        rule.derive(first.pair, yang_day)?,
        rule.derive(second.pair, yang_day)?,
        rule.derive(third.pair, yang_day)?,
        rule.derive(fourth.pair, yang_day)?,
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stage::eight_hexagram::RollStage;

    fn pair(upper: &str, lower: &str) -> HexagramPair {
        HexagramPair::from_names(upper, lower).unwrap()
    }

    #[test]
    fn test_jia_of_zero() {
        assert_eq!(FourGate::default().jia(0), -7);
    }

    #[test]
    fn test_constants() {
        let values: Vec<i64> = SecretConstant::ALL.iter().map(|c| c.value()).collect();
        assert_eq!(values, vec![19, 37, 53, 79, 103, 239]);
        assert_eq!(SecretConstant::default(), SecretConstant::A);
    }

    #[test]
    fn test_parse_constant() {
        assert_eq!("c".parse::<SecretConstant>(), Ok(SecretConstant::C));
        assert_eq!(" F ".parse::<SecretConstant>(), Ok(SecretConstant::F));
        assert!(matches!(
            "G".parse::<SecretConstant>(),
            Err(Error::UnknownSymbol {
                kind: SymbolKind::SecretConstant,
                ..
            })
        ));
        assert!("AB".parse::<SecretConstant>().is_err());
    }

    #[test]
    fn test_gate_codes() {
        assert_eq!(gate_stem_code(Trigram::QIAN), 9);
        assert_eq!(gate_branch_code(Trigram::QIAN), 7);
        assert_eq!(gate_stem_code(Trigram::KAN), 5);
        assert_eq!(gate_branch_code(Trigram::KAN), 9);
    }

    #[test]
    fn test_parity_swaps_digits() {
        let p = pair("坎", "离");
        assert_eq!(FourGate::h(p, true), 54);
        assert_eq!(FourGate::h(p, false), 45);
    }

    #[test]
    fn test_kan_over_li_yang_day() {
        let result = FourGate::default().derive(pair("坎", "离"), true).unwrap();
        assert_eq!((result.h, result.y, result.jia, result.m), (54, 63, 1019, 3980));
    }

    #[test]
    fn test_other_constant() {
        let rule = FourGate::new(SecretConstant::F, 47);
        let result = rule.derive(pair("坎", "离"), true).unwrap();
        assert_eq!(result.jia, 54 * 239 - 7);
        assert_eq!(result.m, 63 * 47 + 54 * 239 - 7);
    }

    #[test]
    fn test_applies_in_order() {
        let entries = [
            RollEntry { stage: RollStage::Mutual, pair: pair("坎", "离") },
            RollEntry { stage: RollStage::ChangedMutual, pair: pair("巽", "离") },
            RollEntry { stage: RollStage::InvertedFirst, pair: pair("离", "坎") },
            RollEntry { stage: RollStage::InvertedSecond, pair: pair("震", "坎") },
        ];
        let results = four_gate(&FourGate::default(), &entries, true).unwrap();
        let m: Vec<i64> = results.iter().map(|r| r.m).collect();
        assert_eq!(m, vec![3980, 3890, 3566, 3846]);
        for (result, entry) in results.iter().zip(&entries) {
            assert_eq!(result.pair, entry.pair);
        }
    }

    struct Constant;

    impl SecretRule for Constant {
        fn name(&self) -> &'static str {
            "constant"
        }

        fn derive(&self, pair: HexagramPair, _yang_day: bool) -> Result<SecretResult> {
            Ok(SecretResult { pair, h: 0, y: 0, jia: 0, m: 1 })
        }
    }

    #[test]
    fn test_rule_is_pluggable() {
        let entry = RollEntry { stage: RollStage::Mutual, pair: pair("乾", "坤") };
        let results = four_gate(&Constant as &dyn SecretRule, &[entry; 4], false).unwrap();
        assert!(results.iter().all(|r| r.m == 1));
    }

    #[test]
    fn test_line_multiplier_overflow_is_an_error() {
        let rule = FourGate::new(SecretConstant::A, i64::MAX);
        assert_eq!(
            rule.derive(pair("坎", "离"), true),
            Err(Error::Overflow {
                quantity: "secret number"
            })
        );
        let entry = RollEntry { stage: RollStage::Mutual, pair: pair("坎", "离") };
        assert!(four_gate(&rule, &[entry; 4], true).is_err());
    }

    #[test]
    fn test_negative_line_multiplier_stays_in_range() {
        // 坎/离: Y 63, Jia 1019
        let rule = FourGate::new(SecretConstant::A, -47);
        assert_eq!(rule.derive(pair("坎", "离"), true).unwrap().m, 1019 - 63 * 47);
    }
}
