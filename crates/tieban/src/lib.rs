//! Iron-Plate Divine Number (铁版神数) calculation engine.
//!
//! Turns a four-pillar temporal signature (year, month, day and hour, each a
//! heavenly stem plus an earthly branch) into the raw numbers of the
//! Iron-Plate method: a time slice, a body-life hexagram pair with its base
//! number, two rolled hexagram sequences and the four-gate secret numbers.
//! Looking the numbers up in the verse book is left to the caller.
//!
//! # Pipeline
//!
//! ```text
//! FourPillars
//!   ├─ time_slice      Σ mystic codes mod hour-branch code      → ke 1..=8
//!   └─ body_life       He-Luo codes split by parity             → (upper, lower)
//!        └─ base_number  upper table + lower table              → e.g. 2790
//!             ├─ eight_hexagram  mutual, moving lines, inversions → 4 pairs
//!             │    └─ four_gate  gate codes, K = 19, X = 47       → 4 secret numbers
//!             └─ eight_corner    eight structural variations      → 8 pairs
//! ```
//!
//! # Trigram Encoding
//!
//! A [`Trigram`] is a validated 3-bit line pattern, bit 0 the bottom line and
//! 1 a yang line. Names and the three orderings (pre-heaven, post-heaven,
//! Luo Shu) are computed from the pattern through [`lut`].
//!
//! | Trigram | Lines | Pre-heaven | Base (upper) | Base (lower) |
//! |---------|-------|------------|--------------|--------------|
//! | 乾 ☰ | 111 | 1 | 180 | 450 |
//! | 兑 ☱ | 110 | 2 | 720 | 990 |
//! | 离 ☲ | 101 | 3 | 1260 | 1530 |
//! | 震 ☳ | 100 | 4 | 1800 | 2070 |
//! | 巽 ☴ | 011 | 5 | 2340 | 2610 |
//! | 坎 ☵ | 010 | 6 | 2880 | 3150 |
//! | 艮 ☶ | 001 | 7 | 3420 | 3690 |
//! | 坤 ☷ | 000 | 8 | 3960 | 4230 |
//!
//! (Lines are written bottom to top.)
//!
//! # Example
//!
//! ```
//! use tieban::{Engine, FourPillars, Gender, HexagramPair, Request, Trigram};
//!
//! let pillars = FourPillars::parse("壬子", "丙午", "庚午", "壬午").unwrap();
//! let reading = Engine::default()
//!     .calculate(&Request::new(pillars, Gender::Male))
//!     .unwrap();
//!
//! assert_eq!(reading.time_slice.ke, 8);
//! assert_eq!(reading.base_pair(), HexagramPair::new(Trigram::ZHEN, Trigram::DUI));
//! assert_eq!(reading.base_number, 2790);
//! assert_eq!(reading.roll.entries[1].pair.to_string(), "巽/离");
//! ```
//!
//! # Design Principles
//!
//! - **Pure stages**: every stage is a function of its inputs and the tables
//! - **Closed domains**: stems, branches and trigrams are closed types;
//!   invalid symbols fail at the parsing boundary
//! - **Whole-input rejection**: a calculation succeeds entirely or not at all

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

// Core data types (stem, branch, pillar, scheme, gender, constants, traits)
mod core;

// Error taxonomy
pub mod error;

// Precomputed lookup tables
pub mod lut;

// Trigram algebra
pub mod trigram;

// Six-line figures
pub mod hexagram;

// Derivation stages
pub mod stage;

// Engine tunables
pub mod config;

// Full calculation
pub mod engine;

// Re-export submodules for external access
pub use core::branch;
pub use core::constants;
pub use core::gender;
pub use core::pillar;
pub use core::scheme;
pub use core::stem;
pub use core::traits;

// Re-export core types at crate root
pub use core::branch::Branch;
pub use core::gender::Gender;
pub use core::pillar::{FourPillars, Pillar};
pub use core::scheme::NumberScheme;
pub use core::stem::Stem;
pub use core::traits::Structural;

pub use config::EngineConfig;
pub use engine::{Engine, Reading, Request};
pub use error::{Error, Result, SymbolKind};
pub use hexagram::{HexagramPair, SixLines};
pub use trigram::{Trigram, TrigramOrder};

/// Prelude module for convenient imports.
///
/// ```
/// use tieban::prelude::*;
///
/// let pair = HexagramPair::new(Trigram::KAN, Trigram::LI);
/// assert_eq!(pair.invert(), HexagramPair::new(Trigram::LI, Trigram::KAN));
/// ```
pub mod prelude {
    // Symbols
    pub use crate::core::branch::Branch;
    pub use crate::core::gender::Gender;
    pub use crate::core::pillar::{FourPillars, Pillar};
    pub use crate::core::scheme::NumberScheme;
    pub use crate::core::stem::Stem;
    pub use crate::core::traits::Structural;

    // Trigram algebra
    pub use crate::hexagram::{HexagramPair, SixLines};
    pub use crate::trigram::{Trigram, TrigramOrder};

    // Stages
    pub use crate::stage::{
        BodyLife, CornerEntry, CornerRule, EightHexagramRoll, FourGate, MovingLines, RollEntry,
        RollStage, SecretConstant, SecretResult, SecretRule, TimeSlice, YearStep,
    };

    // Engine
    pub use crate::config::EngineConfig;
    pub use crate::engine::{Engine, Reading, Request};
    pub use crate::error::{Error, Result};
}
