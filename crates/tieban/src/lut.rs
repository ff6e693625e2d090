//! Precomputed lookup tables for every symbol code.
//!
//! All tables are immutable statics. Stem and branch tables are indexed by
//! cycle position (甲 = 0, 子 = 0); trigram tables are indexed by the
//! trigram's line pattern, bit `i` holding line `i` counted from the bottom
//! (坤 = 0b000, 震 = 0b001, …, 乾 = 0b111).
//!
//! # Tables Provided
//!
//! - **Mystic (太玄数)**: stem and branch scheme-A codes
//! - **He Luo (河洛数)**: stem and branch scheme-B codes
//! - **Orderings**: pre-heaven, post-heaven and Luo Shu trigram numbers
//! - **Base values**: upper-slot and lower-slot base numbers per trigram
//! - **Gate codes**: stem-like and branch-like four-gate codes per trigram
//! - **Structural**: invert and reverse as pattern → pattern maps
//!
//! # Example
//!
//! ```
//! use tieban::lut::{base_lower, base_upper, pre_heaven};
//!
//! // 震 = 0b001, 兑 = 0b011
//! assert_eq!(base_upper(0b001) + base_lower(0b011), 2790);
//! assert_eq!(pre_heaven(0b001), 4);
//! ```

use crate::core::constants::{BRANCH_COUNT, STEM_COUNT, TRIGRAM_COUNT};

// ============================================================================
// Stem / branch codes
// ============================================================================

/// Scheme-A code per stem: 甲己9 乙庚8 丙辛7 丁壬6 戊癸5.
pub static STEM_MYSTIC: [u32; STEM_COUNT] = [9, 8, 7, 6, 5, 9, 8, 7, 6, 5];

/// Scheme-B code per stem: 壬甲6 乙癸2 辛4 庚3 戊1 己9 丙8 丁7.
pub static STEM_HE_LUO: [u32; STEM_COUNT] = [6, 2, 8, 7, 1, 9, 3, 4, 6, 2];

/// Scheme-A code per branch: 子午9 丑未8 寅申7 卯酉6 辰戌5 巳亥4.
pub static BRANCH_MYSTIC: [u32; BRANCH_COUNT] = {
    let mut table = [0u32; BRANCH_COUNT];
    let mut i = 0;
    while i < BRANCH_COUNT {
        table[i] = 9 - (i % 6) as u32;
        i += 1;
    }
    table
};

/// Scheme-B code per branch: 子6 丑未辰戌5 寅3 卯8 巳2 午7 申4 酉9 亥1.
pub static BRANCH_HE_LUO: [u32; BRANCH_COUNT] = [6, 5, 3, 8, 5, 2, 7, 5, 4, 9, 5, 1];

/// Scheme-A code of the stem at cycle position `index`.
#[inline]
pub const fn stem_mystic(index: usize) -> u32 {
    STEM_MYSTIC[index]
}

/// Scheme-B code of the stem at cycle position `index`.
#[inline]
pub const fn stem_he_luo(index: usize) -> u32 {
    STEM_HE_LUO[index]
}

/// Scheme-A code of the branch at cycle position `index`.
#[inline]
pub const fn branch_mystic(index: usize) -> u32 {
    BRANCH_MYSTIC[index]
}

/// Scheme-B code of the branch at cycle position `index`.
#[inline]
pub const fn branch_he_luo(index: usize) -> u32 {
    BRANCH_HE_LUO[index]
}

// ============================================================================
// Trigram names
// ============================================================================

/// Glyph per line pattern.
pub static TRIGRAM_GLYPHS: [char; TRIGRAM_COUNT] = ['坤', '震', '坎', '兑', '艮', '离', '巽', '乾'];

/// Traditional-script glyph per line pattern, where it differs.
pub static TRIGRAM_TRADITIONAL: [char; TRIGRAM_COUNT] =
    ['坤', '震', '坎', '兌', '艮', '離', '巽', '乾'];

/// Toneless pinyin per line pattern.
pub static TRIGRAM_PINYIN: [&str; TRIGRAM_COUNT] =
    ["kun", "zhen", "kan", "dui", "gen", "li", "xun", "qian"];

// ============================================================================
// Trigram orderings
// ============================================================================

/// Pre-heaven (先天) number per line pattern: 乾1 兑2 离3 震4 巽5 坎6 艮7 坤8.
pub static PRE_HEAVEN: [u32; TRIGRAM_COUNT] = [8, 4, 6, 2, 7, 3, 5, 1];

/// Post-heaven (后天) number per line pattern: 坎1 坤2 震3 巽4 乾6 兑7 艮8 离9.
///
/// 5 is the centre of the post-heaven square and names no trigram.
pub static POST_HEAVEN: [u32; TRIGRAM_COUNT] = [2, 3, 1, 7, 8, 9, 4, 6];

/// Luo Shu (洛书) number per line pattern: 乾9 兑4 离3 震8 巽2 坎7 艮6 坤1.
pub static LUO_SHU: [u32; TRIGRAM_COUNT] = [1, 8, 7, 4, 6, 3, 2, 9];

/// Line pattern per pre-heaven number minus one (乾 first, 坤 last).
pub static PRE_HEAVEN_PATTERNS: [u8; TRIGRAM_COUNT] = {
    let mut table = [0u8; TRIGRAM_COUNT];
    let mut bits = 0;
    while bits < TRIGRAM_COUNT {
        table[PRE_HEAVEN[bits] as usize - 1] = bits as u8;
        bits += 1;
    }
    table
};

/// Pre-heaven number of the trigram with line pattern `bits`.
#[inline]
pub const fn pre_heaven(bits: u8) -> u32 {
    PRE_HEAVEN[bits as usize]
}

/// Post-heaven number of the trigram with line pattern `bits`.
#[inline]
pub const fn post_heaven(bits: u8) -> u32 {
    POST_HEAVEN[bits as usize]
}

/// Luo Shu number of the trigram with line pattern `bits`.
#[inline]
pub const fn luo_shu(bits: u8) -> u32 {
    LUO_SHU[bits as usize]
}

// ============================================================================
// Base numbers (八卦基本数序)
// ============================================================================

/// Base value of a trigram in the upper slot.
///
/// `180 + 540 × (pre-heaven − 1)`: 乾180 兑720 … 坤3960.
pub static BASE_UPPER: [u32; TRIGRAM_COUNT] = {
    let mut table = [0u32; TRIGRAM_COUNT];
    let mut bits = 0;
    while bits < TRIGRAM_COUNT {
        table[bits] = 180 + 540 * (PRE_HEAVEN[bits] - 1);
        bits += 1;
    }
    table
};

/// Base value of a trigram in the lower slot: the upper value plus 270.
pub static BASE_LOWER: [u32; TRIGRAM_COUNT] = {
    let mut table = [0u32; TRIGRAM_COUNT];
    let mut bits = 0;
    while bits < TRIGRAM_COUNT {
        table[bits] = BASE_UPPER[bits] + 270;
        bits += 1;
    }
    table
};

/// Upper-slot base value of the trigram with line pattern `bits`.
#[inline]
pub const fn base_upper(bits: u8) -> u32 {
    BASE_UPPER[bits as usize]
}

/// Lower-slot base value of the trigram with line pattern `bits`.
#[inline]
pub const fn base_lower(bits: u8) -> u32 {
    BASE_LOWER[bits as usize]
}

// ============================================================================
// Four-gate codes
// ============================================================================

/// Stem-like code of a trigram in the upper slot.
///
/// 乾9 坤8 震8 巽7 坎5 离9 艮7 兑6.
pub static GATE_STEM: [u32; TRIGRAM_COUNT] = [8, 8, 5, 6, 7, 9, 7, 9];

/// Branch-like code of a trigram in the lower slot.
///
/// 乾7 坤8 震7 巽5 坎9 离4 艮5 兑5.
pub static GATE_BRANCH: [u32; TRIGRAM_COUNT] = [8, 7, 9, 5, 5, 4, 5, 7];

/// Four-gate stem code of the trigram with line pattern `bits`.
#[inline]
pub const fn gate_stem(bits: u8) -> u32 {
    GATE_STEM[bits as usize]
}

/// Four-gate branch code of the trigram with line pattern `bits`.
#[inline]
pub const fn gate_branch(bits: u8) -> u32 {
    GATE_BRANCH[bits as usize]
}

// ============================================================================
// Structural maps
// ============================================================================

/// Pattern with every line flipped.
pub static INVERT: [u8; TRIGRAM_COUNT] = {
    let mut table = [0u8; TRIGRAM_COUNT];
    let mut bits = 0;
    while bits < TRIGRAM_COUNT {
        table[bits] = (bits as u8) ^ 0b111;
        bits += 1;
    }
    table
};

/// Pattern with bottom and top lines exchanged.
pub static REVERSE: [u8; TRIGRAM_COUNT] = {
    let mut table = [0u8; TRIGRAM_COUNT];
    let mut bits = 0;
    while bits < TRIGRAM_COUNT {
        let b = bits as u8;
        table[bits] = ((b & 0b001) << 2) | (b & 0b010) | ((b & 0b100) >> 2);
        bits += 1;
    }
    table
};

/// O(1) inversion of a line pattern.
#[inline]
pub const fn invert(bits: u8) -> u8 {
    INVERT[bits as usize]
}

/// O(1) reversal of a line pattern.
#[inline]
pub const fn reverse(bits: u8) -> u8 {
    REVERSE[bits as usize]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn is_permutation_of_1_to_8(table: &[u32; TRIGRAM_COUNT]) -> bool {
        let mut seen = [false; TRIGRAM_COUNT + 1];
        for &v in table {
            if !(1..=8).contains(&v) || seen[v as usize] {
                return false;
            }
            seen[v as usize] = true;
        }
        true
    }

    #[test]
    fn test_branch_mystic_table() {
        assert_eq!(BRANCH_MYSTIC, [9, 8, 7, 6, 5, 4, 9, 8, 7, 6, 5, 4]);
    }

    #[test]
    fn test_pre_heaven_is_bijective() {
        assert!(is_permutation_of_1_to_8(&PRE_HEAVEN));
        for (i, &bits) in PRE_HEAVEN_PATTERNS.iter().enumerate() {
            assert_eq!(pre_heaven(bits), i as u32 + 1);
        }
    }

    #[test]
    fn test_pre_heaven_patterns() {
        // 乾 兑 离 震 巽 坎 艮 坤
        assert_eq!(
            PRE_HEAVEN_PATTERNS,
            [0b111, 0b011, 0b101, 0b001, 0b110, 0b010, 0b100, 0b000]
        );
    }

    #[test]
    fn test_luo_shu_skips_centre() {
        assert!(!LUO_SHU.contains(&5));
        let mut sorted = LUO_SHU;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn test_post_heaven_skips_centre() {
        assert!(!POST_HEAVEN.contains(&5));
        let mut sorted = POST_HEAVEN;
        sorted.sort_unstable();
        assert_eq!(sorted, [1, 2, 3, 4, 6, 7, 8, 9]);
    }

    #[test]
    fn test_luo_shu_opposites_sum_to_ten() {
        for bits in 0..TRIGRAM_COUNT as u8 {
            assert_eq!(luo_shu(bits) + luo_shu(invert(bits)), 10);
        }
    }

    #[test]
    fn test_base_tables() {
        assert_eq!(
            BASE_UPPER,
            [3960, 1800, 2880, 720, 3420, 1260, 2340, 180]
        );
        assert_eq!(
            BASE_LOWER,
            [4230, 2070, 3150, 990, 3690, 1530, 2610, 450]
        );
    }

    #[test]
    fn test_gate_codes() {
        // 乾 = 0b111: (9, 7); 坎 = 0b010: (5, 9)
        assert_eq!((gate_stem(0b111), gate_branch(0b111)), (9, 7));
        assert_eq!((gate_stem(0b010), gate_branch(0b010)), (5, 9));
        assert_eq!((gate_stem(0b101), gate_branch(0b101)), (9, 4));
    }

    #[test]
    fn test_structural_maps_are_involutions() {
        for bits in 0..TRIGRAM_COUNT as u8 {
            assert_eq!(invert(invert(bits)), bits);
            assert_eq!(reverse(reverse(bits)), bits);
        }
    }

    #[test]
    fn test_reverse_fixes_palindromes() {
        // 乾 坤 离 坎 read the same both ways
        for bits in [0b111, 0b000, 0b101, 0b010] {
            assert_eq!(reverse(bits), bits);
        }
        assert_eq!(reverse(0b001), 0b100); // 震 → 艮
        assert_eq!(reverse(0b011), 0b110); // 兑 → 巽
    }
}
