//! Property-based tests for the trigram algebra and the stages.
//!
//! Pillars are drawn from the full 10 × 12 stem/branch product, not only the
//! sixty sexagenary pairs, so every table entry is exercised.

use proptest::prelude::*;
use tieban::prelude::*;
use tieban::stage;

fn trigram() -> impl Strategy<Value = Trigram> {
    (0u8..8).prop_map(|bits| Trigram::from_bits(bits).unwrap())
}

fn pair() -> impl Strategy<Value = HexagramPair> {
    (trigram(), trigram()).prop_map(|(upper, lower)| HexagramPair::new(upper, lower))
}

fn pillar() -> impl Strategy<Value = Pillar> {
    (0usize..10, 0usize..12).prop_map(|(s, b)| Pillar::new(Stem::ALL[s], Branch::ALL[b]))
}

fn pillars() -> impl Strategy<Value = FourPillars> {
    (pillar(), pillar(), pillar(), pillar())
        .prop_map(|(year, month, day, hour)| FourPillars::new(year, month, day, hour))
}

// =============================================================================
// Trigram Algebra
// =============================================================================

proptest! {
    /// invert and reverse are involutions on pairs
    #[test]
    fn prop_involutions(p in pair()) {
        prop_assert_eq!(p.invert().invert(), p);
        prop_assert_eq!(p.reverse().reverse(), p);
    }

    /// invert and reverse commute
    #[test]
    fn prop_invert_reverse_commute(t in trigram()) {
        prop_assert_eq!(t.invert().reverse(), t.reverse().invert());
    }

    /// invert flips every line
    #[test]
    fn prop_invert_flips_lines(t in trigram()) {
        let flipped = t.invert().lines();
        for (a, b) in t.lines().iter().zip(flipped) {
            prop_assert_eq!(a + b, 1);
        }
    }

    /// any 0/1 triple is a trigram, anything else is rejected
    #[test]
    fn prop_from_lines(lines in prop::array::uniform3(0u8..3)) {
        match Trigram::from_lines(lines) {
            Ok(t) => prop_assert_eq!(t.lines(), lines),
            Err(err) => {
                prop_assert!(lines.iter().any(|&l| l > 1));
                prop_assert_eq!(err, Error::UnknownPattern { lines: lines.to_vec() });
            }
        }
    }

    /// the mutual pair shares lines 2 and 3 between its halves
    #[test]
    fn prop_mutual_overlap(p in pair()) {
        let six = p.six_lines().lines();
        let mutual = p.mutual();
        prop_assert_eq!(mutual.lower.lines(), [six[1], six[2], six[3]]);
        prop_assert_eq!(mutual.upper.lines(), [six[2], six[3], six[4]]);
    }

    /// flipping the same mask twice is the identity
    #[test]
    fn prop_flip_involution(p in pair(), mask in 0u8..64) {
        let six = p.six_lines();
        prop_assert_eq!(six.flip(mask).flip(mask), six);
    }
}

// =============================================================================
// Stage Ranges
// =============================================================================

proptest! {
    /// the time slice is always in 1..=8 and consistent with its trace
    #[test]
    fn prop_time_slice_range(p in pillars()) {
        let slice = stage::time_slice(&p).unwrap();
        prop_assert!((1..=8).contains(&slice.ke));
        prop_assert_eq!(slice.remainder, slice.sum % slice.divisor);
        prop_assert_eq!(slice.ke == 8, slice.remainder == 0 || slice.remainder == 8);
    }

    /// body-life ordinals are in 1..=8 and name the derived pair
    #[test]
    fn prop_body_life_range(p in pillars()) {
        let body = stage::body_life(&p).unwrap();
        prop_assert!((1..=8).contains(&body.upper_ordinal));
        prop_assert!((1..=8).contains(&body.lower_ordinal));
        prop_assert_eq!(body.pair.upper.pre_heaven(), body.upper_ordinal);
        prop_assert_eq!(body.pair.lower.pre_heaven(), body.lower_ordinal);
        prop_assert!(body.odd_count <= 8);
    }

    /// the base number only depends on the pair
    #[test]
    fn prop_base_number_pure(p in pair()) {
        let n = stage::base_number(p);
        prop_assert_eq!(n, stage::base_number(HexagramPair::new(p.upper, p.lower)));
        prop_assert!((630..=8190).contains(&n));
    }

    /// the moving-line residue is in 1..=9 and moves one or two lines
    #[test]
    fn prop_moving_lines(v in any::<u32>()) {
        let moving = MovingLines::from_value(v);
        prop_assert!((1..=9).contains(&moving.residue()));
        let count = moving.lines().count();
        prop_assert_eq!(count, if moving.residue() <= 6 { 1 } else { 2 });
    }

    /// corner entries 2 and 3 relate through invert∘reverse
    #[test]
    fn prop_corner_relation(p in pair()) {
        let corners = stage::eight_corner(p);
        prop_assert_eq!(corners[0].pair, p);
        prop_assert_eq!(corners[2].pair, corners[1].pair.invert_reverse());
    }

    /// every secret number follows M = Y × 47 + H × 19 − 7
    #[test]
    fn prop_secret_formula(p in pair(), yang in any::<bool>()) {
        let result = FourGate::default().derive(p, yang).unwrap();
        prop_assert_eq!(result.jia, result.h * 19 - 7);
        prop_assert_eq!(result.m, result.y * 47 + result.jia);
    }

    /// calculations are deterministic
    #[test]
    fn prop_deterministic(p in pillars(), female in any::<bool>()) {
        let gender = if female { Gender::Female } else { Gender::Male };
        let engine = Engine::default();
        let request = Request::new(p, gender);
        prop_assert_eq!(engine.calculate(&request).unwrap(), engine.calculate(&request).unwrap());
    }
}
