//! Core data types and constants.
//!
//! - [`stem::Stem`], [`branch::Branch`]: the closed symbol sets
//! - [`pillar::Pillar`], [`pillar::FourPillars`]: the calculation input
//! - [`scheme::NumberScheme`]: which of the two codes a stage reads
//! - [`gender::Gender`]: the reserved era-selection flag
//! - [`constants`]: cardinalities and secret constants
//! - [`traits::Structural`]: invert / reverse

pub mod branch;
pub mod constants;
pub mod gender;
pub mod pillar;
pub mod scheme;
pub mod stem;
pub mod traits;
