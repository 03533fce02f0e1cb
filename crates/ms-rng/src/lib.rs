//! UnityEngine.Random emulation - Rust port
//!
//! Monster Sanctuary drives all of its seed-based generation through
//! UnityEngine.Random, which is a 128-bit xorshift generator behind a
//! `InitState(int)` seeding routine. This crate reproduces both, so that a
//! given seed replays the exact draw sequence the game consumes.
//!
//! Every downstream procedure depends on exact draw order and count: one
//! extra or missing draw desynchronizes all subsequent output for a seed.
//! The generator is deliberately minimal and swappable behind the
//! `init_state` / `range` / `value` / `skip` surface.

use serde::{Deserialize, Serialize};

/// Multiplier used by Unity's `InitState` to spread one 32-bit seed over
/// the four xorshift state words (the MT19937 initialization constant).
const INIT_STATE_MULTIPLIER: u32 = 0x6C07_8965;

/// Unity random number generator state (xorshift128).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnityRng {
    /// The four xorshift state words
    state: [u32; 4],
    /// Total number of raw u32 values consumed
    call_count: u64,
}

impl UnityRng {
    /// Create a generator seeded like `UnityEngine.Random.InitState(seed)`.
    pub fn new(seed: i32) -> Self {
        let mut rng = Self {
            state: [0; 4],
            call_count: 0,
        };
        rng.init_state(seed);
        rng
    }

    /// Reset all state purely as a function of `seed`.
    ///
    /// Calling this twice in a row is equivalent to calling it once; no
    /// draw leaks across a reseed.
    pub fn init_state(&mut self, seed: i32) {
        let s0 = seed as u32;
        let s1 = s0.wrapping_mul(INIT_STATE_MULTIPLIER).wrapping_add(1);
        let s2 = s1.wrapping_mul(INIT_STATE_MULTIPLIER).wrapping_add(1);
        let s3 = s2.wrapping_mul(INIT_STATE_MULTIPLIER).wrapping_add(1);
        self.state = [s0, s1, s2, s3];
        self.call_count = 0;
    }

    /// Get the next raw u32 (one xorshift128 step).
    #[inline]
    pub fn next_u32(&mut self) -> u32 {
        let mut t = self.state[0];
        t ^= t << 11;
        t ^= t >> 8;

        let w = self.state[3];
        self.state[0] = self.state[1];
        self.state[1] = self.state[2];
        self.state[2] = w;

        let v = w ^ (w >> 19) ^ t;
        self.state[3] = v;
        self.call_count += 1;
        v
    }

    /// Uniform draw over `[min, max)` - matches `Random.Range(int, int)`.
    ///
    /// Returns `min` when the span is empty.
    pub fn range(&mut self, min: i32, max: i32) -> i32 {
        if max <= min {
            return min;
        }
        let span = (max as i64 - min as i64) as u32;
        min.wrapping_add((self.next_u32() % span) as i32)
    }

    /// Uniform f32 draw over `[0, 1]` - matches `Random.value`.
    ///
    /// Unity keeps only the low 23 bits of the raw draw, so the result is
    /// inclusive of both endpoints.
    #[inline]
    pub fn value(&mut self) -> f32 {
        (self.next_u32() & 0x7F_FFFF) as f32 / 0x7F_FFFF as f32
    }

    /// Uniform f32 draw over `[min, max]` - matches `Random.Range(float, float)`.
    pub fn range_float(&mut self, min: f32, max: f32) -> f32 {
        min + self.value() * (max - min)
    }

    /// Advance the state by `n` draws without using the values.
    ///
    /// The game performs incidental draws (prefab instantiation during
    /// monster setup) whose results are irrelevant here but whose
    /// consumption must still happen to stay synchronized.
    pub fn skip(&mut self, n: u32) {
        for _ in 0..n {
            self.next_u32();
        }
    }

    /// Total number of raw u32 draws since the last reseed.
    pub fn call_count(&self) -> u64 {
        self.call_count
    }
}

impl Default for UnityRng {
    fn default() -> Self {
        Self::new(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = UnityRng::new(12345);
        let mut b = UnityRng::new(12345);
        for _ in 0..1000 {
            assert_eq!(a.next_u32(), b.next_u32());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = UnityRng::new(1);
        let mut b = UnityRng::new(2);
        let same = (0..64).filter(|_| a.next_u32() == b.next_u32()).count();
        assert!(same < 64);
    }

    #[test]
    fn reseed_is_idempotent() {
        let mut once = UnityRng::new(777);
        let mut twice = UnityRng::new(777);
        twice.init_state(777);
        for _ in 0..100 {
            assert_eq!(once.next_u32(), twice.next_u32());
        }
    }

    #[test]
    fn reseed_discards_consumed_draws() {
        let mut fresh = UnityRng::new(42);
        let mut reused = UnityRng::new(42);
        reused.skip(500);
        reused.init_state(42);
        assert_eq!(reused.call_count(), 0);
        for _ in 0..100 {
            assert_eq!(fresh.next_u32(), reused.next_u32());
        }
    }

    #[test]
    fn range_bounds() {
        let mut rng = UnityRng::new(9);
        for _ in 0..1000 {
            let v = rng.range(0, 13);
            assert!((0..13).contains(&v));
        }
        for _ in 0..1000 {
            let v = rng.range(4, 110);
            assert!((4..110).contains(&v));
        }
    }

    #[test]
    fn range_empty_span_returns_min_without_draw() {
        let mut rng = UnityRng::new(3);
        assert_eq!(rng.range(5, 5), 5);
        assert_eq!(rng.range(5, 4), 5);
        assert_eq!(rng.call_count(), 0);
    }

    #[test]
    fn value_is_unit_interval() {
        let mut rng = UnityRng::new(31337);
        for _ in 0..1000 {
            let v = rng.value();
            assert!((0.0..=1.0).contains(&v));
        }
    }

    #[test]
    fn skip_advances_like_draws() {
        let mut skipped = UnityRng::new(100);
        let mut drawn = skipped.clone();
        skipped.skip(37);
        for _ in 0..37 {
            drawn.next_u32();
        }
        for _ in 0..10 {
            assert_eq!(skipped.next_u32(), drawn.next_u32());
        }
    }

    #[test]
    fn call_count_tracks_every_draw_kind() {
        let mut rng = UnityRng::new(5);
        rng.range(0, 10);
        rng.value();
        rng.range_float(0.0, 1.0);
        rng.skip(2);
        assert_eq!(rng.call_count(), 5);
    }

    proptest! {
        #[test]
        fn range_stays_in_bounds(seed in any::<i32>(), min in -1000i32..1000, span in 1i32..1000) {
            let mut rng = UnityRng::new(seed);
            let max = min + span;
            for _ in 0..50 {
                let v = rng.range(min, max);
                prop_assert!(v >= min && v < max);
            }
        }

        #[test]
        fn sequences_are_deterministic(seed in any::<i32>()) {
            let mut a = UnityRng::new(seed);
            let mut b = UnityRng::new(seed);
            for _ in 0..20 {
                prop_assert_eq!(a.next_u32(), b.next_u32());
            }
        }
    }
}
