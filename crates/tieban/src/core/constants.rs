//! Cardinalities and secret constants.
//!
//! The cardinalities describe the closed symbol domains. The secret
//! constants are the fixed multipliers of the four-gate method; they are
//! taken from the reference text and are not derived from anything else.

/// Number of heavenly stems (甲 … 癸).
pub const STEM_COUNT: usize = 10;

/// Number of earthly branches (子 … 亥).
pub const BRANCH_COUNT: usize = 12;

/// Number of trigrams, and the modulus of every ordinal reduction.
pub const TRIGRAM_COUNT: usize = 8;

/// Lines in one trigram.
pub const TRIGRAM_LINES: usize = 3;

/// Lines in a hexagram pair (upper + lower trigram).
pub const HEXAGRAM_LINES: usize = 2 * TRIGRAM_LINES;

/// Number of pillars (year, month, day, hour).
pub const PILLAR_COUNT: usize = 4;

/// Number of symbols carried by four pillars.
pub const SYMBOL_COUNT: usize = 2 * PILLAR_COUNT;

/// Modulus of the moving-line step of the eight-hexagram roll.
pub const MOVING_LINE_MODULUS: u32 = 9;

/// Secret line multiplier `X` of the four-gate method.
pub const LINE_MULTIPLIER: i64 = 47;

/// Constant subtracted from every `H × constant` product (`甲 = H × A − 7`).
pub const JIA_OFFSET: i64 = 7;

/// The six secret constants of the four-gate method, in order A … F.
pub const SECRET_CONSTANTS: [i64; 6] = [19, 37, 53, 79, 103, 239];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_counts() {
        assert_eq!(HEXAGRAM_LINES, 6);
        assert_eq!(1 << TRIGRAM_LINES, TRIGRAM_COUNT);
    }

    #[test]
    fn test_symbol_count() {
        assert_eq!(SYMBOL_COUNT, 8);
    }

    #[test]
    fn test_secret_constants_are_prime_and_distinct_from_x() {
        for c in SECRET_CONSTANTS {
            assert!((2..c).all(|d| c % d != 0), "{c} is not prime");
            assert_ne!(c, LINE_MULTIPLIER);
        }
    }
}
