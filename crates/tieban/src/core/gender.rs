//! The querent's gender.

use core::fmt;
use core::str::FromStr;

use crate::error::{Error, SymbolKind};

/// Gender of the person the reading is cast for.
///
/// Accepted by the eight-hexagram roll for the era (元运) selection of the
/// reference text. No implemented formula reads it yet, so it never changes
/// a result.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Gender {
    /// 男
    #[default]
    Male,
    /// 女
    Female,
}

impl Gender {
    /// Returns the Chinese glyph.
    #[inline]
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Male => '男',
            Self::Female => '女',
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" | "m" | "男" => Ok(Self::Male),
            "female" | "f" | "女" => Ok(Self::Female),
            _ => Err(Error::unknown_symbol(SymbolKind::Gender, s)),
        }
    }
}
