//! Hash functions and the double-hashing probe sequence.
//!
//! - Primary hash picks the home slot (`hash1`)
//! - Secondary hash turns the home slot into a fixed step (`hash2`)
//! - Probe sequence: home, home + step, home + 2*step, ... (mod capacity)

use std::hash::{BuildHasher, RandomState};

/// Maps a key to its home slot in a table of `capacity` slots
///
/// Implementations must be deterministic: the same key and capacity
/// always give the same index, and the index is always `< capacity`.
pub trait KeyHasher {
    fn home_slot(&self, key: &str, capacity: usize) -> usize;
}

/// Additive checksum over character codes, each contributing `code - 96`
///
/// Lowercase ASCII letters map to 1..=26. Characters below 96 contribute
/// negatively, the sum is reduced with a Euclidean remainder so the index
/// is always in range.
#[derive(Clone, Copy, Debug, Default)]
pub struct Checksum;

impl Checksum {
    const OFFSET: i64 = 96;

    /// Raw checksum before reduction
    #[inline]
    pub fn sum(key: &str) -> i64 {
        key.chars().map(|c| c as i64 - Self::OFFSET).sum()
    }
}

impl KeyHasher for Checksum {
    #[inline]
    fn home_slot(&self, key: &str, capacity: usize) -> usize {
        debug_assert!(capacity > 0);
        Self::sum(key).rem_euclid(capacity as i64) as usize
    }
}

/// Adapter plugging any `BuildHasher` in as the primary hash
#[derive(Clone, Debug, Default)]
pub struct StdHasher<S = RandomState>(pub S);

impl<S: BuildHasher> KeyHasher for StdHasher<S> {
    #[inline]
    fn home_slot(&self, key: &str, capacity: usize) -> usize {
        debug_assert!(capacity > 0);
        (self.0.hash_one(key) % capacity as u64) as usize
    }
}

/// Step size for a key whose home slot is `home`
///
/// Always in `[1, modulus]`, never zero.
#[inline]
pub fn step(home: usize, modulus: usize) -> usize {
    modulus - (home % modulus)
}

/// The indices visited for one key, in order
///
/// Yields exactly `capacity` indices. When `step` and `capacity` are
/// coprime these are all distinct; otherwise the sequence repeats a
/// strict subset of slots.
#[derive(Clone, Debug)]
pub struct ProbeSequence {
    index: usize,
    step: usize,
    capacity: usize,
    remaining: usize,
}

impl ProbeSequence {
    pub(crate) fn new(home: usize, step: usize, capacity: usize) -> Self {
        Self {
            index: home,
            step,
            capacity,
            remaining: capacity,
        }
    }

    /// Fixed increment between successive indices
    #[inline]
    pub fn step(&self) -> usize {
        self.step
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let current = self.index;
        self.index = (self.index + self.step) % self.capacity;
        Some(current)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_checksum() {
        assert_eq!(Checksum::sum("abc"), 6);
        assert_eq!(Checksum::sum("John"), 15);
        assert_eq!(Checksum::sum("Jane"), -2);

        assert_eq!(Checksum.home_slot("John", 11), 4);
        // negative sums wrap into range
        assert_eq!(Checksum.home_slot("Jane", 11), 9);
        assert_eq!(Checksum.home_slot("", 11), 0);
    }

    #[test]
    fn test_std_hasher_in_range() {
        let hasher = StdHasher(RandomState::new());
        for i in 0..100 {
            let key = format!("key{}", i);
            let slot = hasher.home_slot(&key, 7);
            assert!(slot < 7);
            assert_eq!(slot, hasher.home_slot(&key, 7));
        }
    }

    #[test]
    fn test_step_range() {
        for home in 0..50 {
            let s = step(home, 7);
            assert!((1..=7).contains(&s), "step {} out of range", s);
        }
        assert_eq!(step(4, 7), 3);
        assert_eq!(step(7, 7), 7);
    }

    #[test]
    fn test_probe_sequence_prime_covers_all() {
        let seq: Vec<usize> = ProbeSequence::new(4, 3, 11).collect();
        assert_eq!(seq.len(), 11);
        assert_eq!(&seq[..4], &[4, 7, 10, 2]);

        let distinct: HashSet<usize> = seq.into_iter().collect();
        assert_eq!(distinct.len(), 11);
    }

    #[test]
    fn test_probe_sequence_non_prime_cycles() {
        // step 2 on 10 slots only ever sees the odd indices
        let seq: Vec<usize> = ProbeSequence::new(5, 2, 10).collect();
        assert_eq!(seq, vec![5, 7, 9, 1, 3, 5, 7, 9, 1, 3]);
    }
}
