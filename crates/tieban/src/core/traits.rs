//! Structural operations shared by trigrams and hexagram pairs.

/// The two line-level involutions of the trigram algebra.
///
/// For a hexagram pair both operations act on the upper and lower trigram
/// independently; the pair is never reversed as a six-line whole.
pub trait Structural: Copy {
    /// Flips every line (yin ↔ yang), giving the opposing figure (错卦).
    #[must_use]
    fn invert(self) -> Self;

    /// Reverses line order (bottom ↔ top), giving the mirrored figure (综卦).
    #[must_use]
    fn reverse(self) -> Self;

    /// Inverts and mirrors. The two operations commute, so the order does
    /// not matter.
    #[inline]
    #[must_use]
    fn invert_reverse(self) -> Self {
        self.invert().reverse()
    }
}
