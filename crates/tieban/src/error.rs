//! Error taxonomy of the engine.
//!
//! Every failure is a local validation failure on malformed input. None is
//! transient, so none is retried; a calculation either succeeds as a whole
//! or is rejected as a whole.

use core::fmt;

use thiserror::Error;

use crate::trigram::TrigramOrder;

/// Crate-level result alias.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The closed symbol families that can be named by text.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SymbolKind {
    /// A heavenly stem (甲 … 癸).
    Stem,
    /// An earthly branch (子 … 亥).
    Branch,
    /// A stem+branch pillar.
    Pillar,
    /// A stem/branch numbering scheme.
    Scheme,
    /// A four-gate secret constant (A … F).
    SecretConstant,
    /// The querent's gender.
    Gender,
}

impl SymbolKind {
    /// Returns the lowercase name used in error messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Stem => "stem",
            Self::Branch => "branch",
            Self::Pillar => "pillar",
            Self::Scheme => "numbering scheme",
            Self::SecretConstant => "secret constant",
            Self::Gender => "gender",
        }
    }
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors surfaced by symbol lookups and the calculation stages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// A stem, branch or other closed-domain symbol was not recognised.
    #[error("unknown {kind} {symbol:?}")]
    UnknownSymbol {
        /// Which family the symbol was parsed as.
        kind: SymbolKind,
        /// The offending input text.
        symbol: String,
    },

    /// A line pattern is not one of the eight trigram patterns.
    #[error("line pattern {lines:?} is not a trigram")]
    UnknownPattern {
        /// The offending lines, bottom to top.
        lines: Vec<u8>,
    },

    /// The hour-branch code used as the time-slice divisor is zero.
    #[error("time-slice divisor is zero")]
    DivisorZero,

    /// A trigram name at the integration boundary was not recognised.
    #[error("unknown hexagram {symbol:?}")]
    UnknownHexagram {
        /// The offending input text.
        symbol: String,
    },

    /// A configured multiplier pushed an intermediate value out of range.
    #[error("{quantity} overflows with the configured multipliers")]
    Overflow {
        /// The quantity being computed.
        quantity: &'static str,
    },

    /// An ordinal names no trigram under the given ordering.
    #[error("ordinal {ordinal} names no trigram in the {order} order")]
    OrdinalOutOfRange {
        /// The ordering that was consulted.
        order: TrigramOrder,
        /// The offending ordinal.
        ordinal: u32,
    },
}

impl Error {
    pub(crate) fn unknown_symbol(kind: SymbolKind, symbol: &str) -> Self {
        Self::UnknownSymbol {
            kind,
            symbol: symbol.to_owned(),
        }
    }

    pub(crate) fn unknown_hexagram(symbol: &str) -> Self {
        Self::UnknownHexagram {
            symbol: symbol.to_owned(),
        }
    }
}
