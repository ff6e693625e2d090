//! Numbering schemes for stems and branches.
//!
//! Every stem and branch carries two independent integer codes. Which code
//! a stage reads is always named explicitly through [`NumberScheme`].

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, SymbolKind};

/// One of the two stem/branch numbering systems.
///
/// # Example
///
/// ```
/// use tieban::{NumberScheme, Stem};
///
/// assert_eq!(Stem::Ren.code(NumberScheme::Mystic), 6);
/// assert_eq!(Stem::Bing.code(NumberScheme::HeLuo), 8);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum NumberScheme {
    /// Scheme A, the "mystic number" (太玄数). Feeds the time slice, the
    /// moving-line step and the four-gate codes.
    #[default]
    Mystic,

    /// Scheme B, the "river-chart number" (河洛数). Feeds the body-life
    /// hexagram.
    HeLuo,
}

impl NumberScheme {
    /// Both schemes in canonical order.
    pub const ALL: [Self; 2] = [Self::Mystic, Self::HeLuo];

    /// Returns the Chinese name of the scheme.
    #[inline]
    #[must_use]
    pub const fn glyphs(self) -> &'static str {
        match self {
            Self::Mystic => "太玄数",
            Self::HeLuo => "河洛数",
        }
    }

    /// Returns the short name (slug) of the scheme.
    #[inline]
    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Mystic => "mystic",
            Self::HeLuo => "he-luo",
        }
    }
}

impl fmt::Display for NumberScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for NumberScheme {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|scheme| scheme.slug() == s || scheme.glyphs() == s)
            .ok_or_else(|| Error::unknown_symbol(SymbolKind::Scheme, s))
    }
}
