//! Fisher–Yates shuffle.

use rand::Rng;

/// Shuffle `items` in place so every permutation is equally likely, given an
/// unbiased `rng`. Empty and single-element slices are left untouched.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.random_range(0..=i);
        items.swap(i, j);
    }
}

/// Shuffle a copy of `items`, leaving the original order intact.
pub fn shuffled<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut copy = items.to_vec();
    shuffle(&mut copy, rng);
    copy
}
