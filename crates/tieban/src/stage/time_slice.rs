//! Time-slice (刻分) calculation.

use crate::core::pillar::FourPillars;
use crate::core::scheme::NumberScheme;
use crate::error::{Error, Result};

/// Upper bound of the time slice.
pub const KE_MAX: u32 = 8;

/// The time slice together with the arithmetic that produced it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TimeSlice {
    /// The slice, in `1..=8`.
    pub ke: u32,
    /// Sum of the mystic codes of all eight symbols.
    pub sum: u32,
    /// Mystic code of the hour branch.
    pub divisor: u32,
    /// `sum % divisor`.
    pub remainder: u32,
}

/// Computes the time slice of `pillars`.
///
/// The eight mystic codes are summed and divided by the hour branch's mystic
/// code. A zero remainder reads as slice 8.
///
/// # Errors
///
/// Returns [`Error::DivisorZero`] if the hour-branch code is zero. No branch
/// carries a zero mystic code, so this only fires on corrupted tables.
///
/// # Example
///
/// ```
/// use tieban::{stage, FourPillars};
///
/// let pillars = FourPillars::parse("壬子", "丙午", "庚午", "壬午").unwrap();
/// let slice = stage::time_slice(&pillars).unwrap();
/// assert_eq!((slice.sum, slice.divisor, slice.remainder, slice.ke), (63, 9, 0, 8));
/// ```
pub fn time_slice(pillars: &FourPillars) -> Result<TimeSlice> {
    let sum = pillars.codes(NumberScheme::Mystic).iter().sum();
    let divisor = pillars.hour().branch.code(NumberScheme::Mystic);
    from_parts(sum, divisor)
}

fn from_parts(sum: u32, divisor: u32) -> Result<TimeSlice> {
    let remainder = sum.checked_rem(divisor).ok_or(Error::DivisorZero)?;
    let ke = if remainder == 0 { KE_MAX } else { remainder };
    Ok(TimeSlice {
        ke,
        sum,
        divisor,
        remainder,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_divisor_rejected() {
        assert_eq!(from_parts(63, 0), Err(Error::DivisorZero));
    }

    #[test]
    fn test_zero_remainder_reads_as_eight() {
        let slice = from_parts(45, 9).unwrap();
        assert_eq!(slice.remainder, 0);
        assert_eq!(slice.ke, 8);
    }

    #[test]
    fn test_plain_remainder() {
        let slice = from_parts(50, 9).unwrap();
        assert_eq!(slice.remainder, 5);
        assert_eq!(slice.ke, 5);
    }

    #[test]
    fn test_divisor_is_hour_branch() {
        let pillars = FourPillars::parse("甲子", "甲子", "甲子", "甲巳").unwrap();
        let slice = time_slice(&pillars).unwrap();
        assert_eq!(slice.divisor, 4);
        // 9+9 three times, then 9+4
        assert_eq!(slice.sum, 67);
        assert_eq!(slice.ke, 3);
    }
}
