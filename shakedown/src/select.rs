//! Uniform random selection over finite collections.
//!
//! All helpers draw from an explicit [`RandomProvider`], so a seeded provider
//! makes target selection reproducible.

use shakedown_core::RandomProvider;

/// Pick one item uniformly at random.
///
/// Each item is chosen with probability `1 / items.len()`. The caller must
/// check for emptiness first; an empty slice panics.
pub fn select_random_item<'a, T, R: RandomProvider>(random: &R, items: &'a [T]) -> &'a T {
    debug_assert!(!items.is_empty(), "select_random_item on an empty slice");
    &items[random.random_range(0..items.len())]
}

/// Shuffle `items` in place (Fisher-Yates).
pub fn shuffle<T, R: RandomProvider>(random: &R, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = random.random_range(0..i + 1);
        items.swap(i, j);
    }
}
