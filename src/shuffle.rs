//! Deck shuffling.

use rand::Rng;

/// Shuffles `cards` in place with a Fisher-Yates pass.
///
/// The pass walks from the last index down to the first and swaps each
/// position with a uniformly chosen index at or before it. The generator is
/// supplied by the caller so a seeded generator reproduces the same order.
pub fn shuffle<T, R>(cards: &mut [T], rng: &mut R)
where
    R: Rng + ?Sized,
{
    for i in (0..cards.len()).rev() {
        let j = rng.random_range(0..=i);
        cards.swap(i, j);
    }
}
