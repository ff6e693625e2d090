//! Engine tunables.
//!
//! The reference text leaves a few constants open: which numbering scheme
//! and multipliers feed the year step, and which secret constant and line
//! multiplier the four-gate rule uses. [`EngineConfig`] collects them with
//! the lower-era defaults. Every field is optional when deserialising:
//!
//! ```toml
//! year_step_scheme = "he-luo"
//! secret_constant = "B"
//! ```

use crate::core::constants::LINE_MULTIPLIER;
use crate::core::scheme::NumberScheme;
use crate::stage::eight_hexagram::YearStep;
use crate::stage::four_gate::{FourGate, SecretConstant};

/// Tunables of a calculation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct EngineConfig {
    /// Scheme the year pillar is coded in for the moving-line step.
    pub year_step_scheme: NumberScheme,
    /// Multiplier of the year stem code.
    pub year_stem_multiplier: u32,
    /// Multiplier of the year branch code.
    pub year_branch_multiplier: u32,
    /// Secret constant feeding `Jia`.
    pub secret_constant: SecretConstant,
    /// Multiplier of `Y` in the secret number.
    pub line_multiplier: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        let step = YearStep::default();
        Self {
            year_step_scheme: step.scheme,
            year_stem_multiplier: step.stem_multiplier,
            year_branch_multiplier: step.branch_multiplier,
            secret_constant: SecretConstant::default(),
            line_multiplier: LINE_MULTIPLIER,
        }
    }
}

impl EngineConfig {
    /// The year step these settings describe.
    #[must_use]
    pub const fn year_step(&self) -> YearStep {
        YearStep {
            scheme: self.year_step_scheme,
            stem_multiplier: self.year_stem_multiplier,
            branch_multiplier: self.year_branch_multiplier,
        }
    }

    /// The four-gate rule these settings describe.
    #[must_use]
    pub const fn secret_rule(&self) -> FourGate {
        FourGate::new(self.secret_constant, self.line_multiplier)
    }
}
