//! Random input helpers shared by the hashing tests.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A reproducible generator for test inputs.
pub(crate) fn seeded_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// `size` random integers drawn from `[low, high]`.
///
/// With `unique` set, no value repeats; the range must then hold at least `size` values.
pub(crate) fn rand_array<R: Rng>(
    rng: &mut R,
    size: usize,
    low: i32,
    high: i32,
    unique: bool,
) -> Vec<i32> {
    assert!(low <= high);

    if !unique {
        return (0..size).map(|_| rng.gen_range(low..=high)).collect();
    }

    assert!((high as i64 - low as i64 + 1) as usize >= size);

    let mut seen = HashSet::with_capacity(size);
    let mut out = Vec::with_capacity(size);
    while out.len() < size {
        let v = rng.gen_range(low..=high);
        if seen.insert(v) {
            out.push(v);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rand_array_bounds_and_uniqueness() {
        let mut rng = seeded_rng(42);
        let values = rand_array(&mut rng, 11, 0, 10, true);

        assert_eq!(values.len(), 11);
        let distinct: HashSet<_> = values.iter().collect();
        assert_eq!(distinct.len(), 11);
        assert!(values.iter().all(|v| (0..=10).contains(v)));

        let values = rand_array(&mut rng, 50, -3, 3, false);
        assert!(values.iter().all(|v| (-3..=3).contains(v)));
    }
}
