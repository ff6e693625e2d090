//! Eight-corner roll (八角滚): eight fixed structural variations of the
//! body-life pair.
//!
//! Every rule reads the original base pair; no entry feeds the next.

use core::fmt;

use crate::core::traits::Structural;
use crate::hexagram::HexagramPair;

/// One of the eight corner rules, in roll order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum CornerRule {
    /// 基本卦: `(u, l)`
    #[cfg_attr(feature = "serde", serde(rename = "基本卦"))]
    Base,
    /// 上下翻转: `(rev u, rev l)`
    #[cfg_attr(feature = "serde", serde(rename = "上下翻转"))]
    ReverseBoth,
    /// 阴阳错位: `(inv u, inv l)`
    #[cfg_attr(feature = "serde", serde(rename = "阴阳错位"))]
    InvertBoth,
    /// 上不动下翻: `(u, rev l)`
    #[cfg_attr(feature = "serde", serde(rename = "上不动下翻"))]
    ReverseLower,
    /// 上翻下不动: `(rev u, l)`
    #[cfg_attr(feature = "serde", serde(rename = "上翻下不动"))]
    ReverseUpper,
    /// 上错下不动: `(inv u, l)`
    #[cfg_attr(feature = "serde", serde(rename = "上错下不动"))]
    InvertUpper,
    /// 下成上上翻下: `(l, rev u)`
    #[cfg_attr(feature = "serde", serde(rename = "下成上上翻下"))]
    LowerRises,
    /// 上成下下翻上: `(rev l, u)`
    #[cfg_attr(feature = "serde", serde(rename = "上成下下翻上"))]
    UpperSinks,
}

impl CornerRule {
    /// All rules in roll order.
    pub const ALL: [Self; 8] = [
        Self::Base,
        Self::ReverseBoth,
        Self::InvertBoth,
        Self::ReverseLower,
        Self::ReverseUpper,
        Self::InvertUpper,
        Self::LowerRises,
        Self::UpperSinks,
    ];

    /// Returns the traditional label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Base => "基本卦",
            Self::ReverseBoth => "上下翻转",
            Self::InvertBoth => "阴阳错位",
            Self::ReverseLower => "上不动下翻",
            Self::ReverseUpper => "上翻下不动",
            Self::InvertUpper => "上错下不动",
            Self::LowerRises => "下成上上翻下",
            Self::UpperSinks => "上成下下翻上",
        }
    }

    /// Applies the rule to `base`.
    #[must_use]
    pub fn apply(self, base: HexagramPair) -> HexagramPair {
        let HexagramPair { upper: u, lower: l } = base;
        match self {
            Self::Base => base,
            Self::ReverseBoth => base.reverse(),
            Self::InvertBoth => base.invert(),
            Self::ReverseLower => HexagramPair::new(u, l.reverse()),
            Self::ReverseUpper => HexagramPair::new(u.reverse(), l),
            Self::InvertUpper => HexagramPair::new(u.invert(), l),
            Self::LowerRises => HexagramPair::new(l, u.reverse()),
            Self::UpperSinks => HexagramPair::new(l.reverse(), u),
        }
    }
}

impl fmt::Display for CornerRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One labelled corner pair and its number head (数码头).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CornerEntry {
    /// The rule that produced the pair.
    pub rule: CornerRule,
    /// The derived pair.
    pub pair: HexagramPair,
    /// `pre(upper) × 1000 + pre(lower) × 100`.
    pub number_head: u32,
}

impl CornerEntry {
    fn new(rule: CornerRule, base: HexagramPair) -> Self {
        let pair = rule.apply(base);
        Self {
            rule,
            pair,
            number_head: pair.pre_heaven_code() * 100,
        }
    }
}

/// Rolls the eight corner pairs of `base`.
///
/// ```
/// use tieban::{stage, HexagramPair, Trigram};
///
/// let corners = stage::eight_corner(HexagramPair::new(Trigram::ZHEN, Trigram::DUI));
/// assert_eq!(corners[1].pair, HexagramPair::new(Trigram::GEN, Trigram::XUN));
/// assert_eq!(corners[1].number_head, 7500);
/// ```
#[must_use]
pub fn eight_corner(base: HexagramPair) -> [CornerEntry; 8] {
    CornerRule::ALL.map(|rule| CornerEntry::new(rule, base))
}
