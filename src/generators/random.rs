//! Injectable randomness for the mock generators.
//!
//! Every number on the dashboard comes from a random draw inside a tick, so
//! the draw itself is behind a trait: live sessions use the thread RNG,
//! `--seed` runs use a ChaCha stream for reproducibility, and tests script
//! the exact values they want to see.

use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of random draws for the generators.
pub trait RandomSource {
    /// Uniform draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Uniform integer draw in `[lo, hi)`. Callers guarantee `lo < hi`.
    fn next_range(&mut self, lo: u64, hi: u64) -> u64;

    /// Uniform index into a catalog of `len` entries.
    fn pick_index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        self.next_range(0, len as u64) as usize
    }
}

/// Thread-local RNG for live sessions.
#[derive(Default)]
pub struct ThreadRandom {
    rng: ThreadRng,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RandomSource for ThreadRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    fn next_range(&mut self, lo: u64, hi: u64) -> u64 {
        self.rng.gen_range(lo..hi)
    }
}

/// Deterministic ChaCha-backed RNG for reproducible (`--seed`) sessions.
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RandomSource for SeededRandom {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    fn next_range(&mut self, lo: u64, hi: u64) -> u64 {
        self.rng.gen_range(lo..hi)
    }
}

/// Build the session RNG: seeded when a seed is given, thread-local otherwise.
pub fn make_source(seed: Option<u64>) -> Box<dyn RandomSource> {
    match seed {
        Some(seed) => Box::new(SeededRandom::new(seed)),
        None => Box::new(ThreadRandom::new()),
    }
}

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A 9-character base-36 identifier for thought steps.
pub fn step_id(rng: &mut dyn RandomSource) -> String {
    (0..9)
        .map(|_| ID_ALPHABET[rng.pick_index(ID_ALPHABET.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_streams_are_reproducible() {
        let mut a = SeededRandom::new(42);
        let mut b = SeededRandom::new(42);
        for _ in 0..20 {
            assert_eq!(a.next_range(0, 1000), b.next_range(0, 1000));
        }
    }

    #[test]
    fn range_draws_stay_in_bounds() {
        let mut rng = SeededRandom::new(7);
        for _ in 0..500 {
            let v = rng.next_range(30, 90);
            assert!((30..90).contains(&v));
        }
    }

    #[test]
    fn step_ids_are_nine_base36_chars() {
        let mut rng = SeededRandom::new(1);
        let id = step_id(&mut rng);
        assert_eq!(id.len(), 9);
        assert!(id.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
