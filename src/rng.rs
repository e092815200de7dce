//! Small deterministic PRNG for animation randomness.
//!
//! A seedable xorshift32 is plenty for cosmetic effects and keeps the
//! crate free of a `rand` dependency in `no_std`. Not suitable for
//! anything security-related.

/// Xorshift32 pseudo-random generator
#[derive(Debug, Clone)]
pub struct XorShift32 {
    state: u32,
}

impl XorShift32 {
    /// Create a generator from a seed. A zero seed is remapped, since the
    /// all-zero state is a fixed point of xorshift.
    pub const fn new(seed: u32) -> Self {
        let state = if seed == 0 { 0x9e37_79b9 } else { seed };
        Self { state }
    }

    /// Next raw 32-bit value
    pub fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Uniform draw from the inclusive range `[min, max]`.
    ///
    /// Modulo bias is negligible for the tiny ranges used here.
    pub fn range_inclusive(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        let span = max - min + 1;
        min + self.next_u32() % span
    }

    /// Uniform index into a collection of `len` elements
    pub fn index(&mut self, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        #[allow(clippy::cast_possible_truncation)]
        let len32 = len as u32;
        (self.next_u32() % len32) as usize
    }
}
