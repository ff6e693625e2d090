//! The derivation stages of a reading.
//!
//! Each stage is a pure function of its inputs and the constant tables in
//! [`crate::lut`]. [`crate::Engine`] chains them:
//!
//! ```text
//! FourPillars ─┬─ time_slice ───────────────────────────────┐
//!              └─ body_life ── base_number ─┬─ eight_hexagram ── four_gate
//!                                           └─ eight_corner
//! ```

pub mod base_number;
pub mod body_life;
pub mod eight_corner;
pub mod eight_hexagram;
pub mod four_gate;
pub mod time_slice;

pub use base_number::base_number;
pub use body_life::{body_life, BodyLife};
pub use eight_corner::{eight_corner, CornerEntry, CornerRule};
pub use eight_hexagram::{
    eight_hexagram, EightHexagramRoll, MovingLines, RollEntry, RollStage, YearStep,
};
pub use four_gate::{four_gate, FourGate, SecretConstant, SecretResult, SecretRule};
pub use time_slice::{time_slice, TimeSlice};

/// Maps a residue to a 1-based position, reading 0 as `modulus`.
///
/// The reference text counts "no remainder" as the last slot of the cycle.
#[inline]
pub(crate) const fn wrap_zero(value: u32, modulus: u32) -> u32 {
    match value % modulus {
        0 => modulus,
        r => r,
    }
}
