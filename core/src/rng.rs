//! Deterministic random number generation.
//!
//! RULE: Nothing in the engine may call any platform RNG. All randomness
//! flows through the single RosterRng created from the run seed, and
//! every consumption point (quota bonus sampling, fair-deficit tie
//! breaks, combo and remote-set selection) draws in a fixed order
//! relative to the algorithm, so a fixed seed yields a fixed schedule.

use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64Mcg;

/// The one random stream of a scheduling run.
pub struct RosterRng {
    inner: Pcg64Mcg,
}

impl RosterRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: Pcg64Mcg::seed_from_u64(seed),
        }
    }

    /// Roll a u64 in [0, n).
    pub fn below(&mut self, n: u64) -> u64 {
        assert!(n > 0, "n must be > 0");
        self.inner.next_u64() % n
    }

    /// Pick one element uniformly. `None` on an empty slice; nothing is
    /// drawn from the stream in that case.
    pub fn choose<'a, T>(&mut self, items: &'a [T]) -> Option<&'a T> {
        if items.is_empty() {
            return None;
        }
        let idx = self.below(items.len() as u64) as usize;
        Some(&items[idx])
    }

    /// Draw `k` distinct indices from `0..n`, uniformly, via a partial
    /// Fisher-Yates shuffle. Panics if `k > n`.
    pub fn sample_indices(&mut self, n: usize, k: usize) -> Vec<usize> {
        assert!(k <= n, "cannot sample {k} of {n}");
        let mut pool: Vec<usize> = (0..n).collect();
        for i in 0..k {
            let j = i + self.below((n - i) as u64) as usize;
            pool.swap(i, j);
        }
        pool.truncate(k);
        pool
    }
}
