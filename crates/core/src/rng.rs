//! RNG module - seeded generator for daily grids
//!
//! A small linear congruential generator. The constants are part of the
//! puzzle: changing them changes every day's grid.

/// LCG multiplier
const MULTIPLIER: i64 = 9301;
/// LCG increment
const INCREMENT: i64 = 49297;
/// LCG modulus
const MODULUS: i64 = 233_280;

/// Simple LCG (Linear Congruential Generator) RNG
///
/// `state = (state * 9301 + 49297) mod 233280`, output `state / 233280`.
/// Construct a fresh instance per generation; there is no shared generator.
#[derive(Debug, Clone)]
pub struct SeededRng {
    state: i64,
}

impl SeededRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: i64) -> Self {
        // Reducing up front keeps the multiply in range for any i64 seed and
        // does not change the sequence. Euclidean remainder keeps pre-epoch
        // seeds non-negative.
        Self {
            state: seed.rem_euclid(MODULUS),
        }
    }

    /// Advance and return the raw state in `[0, 233280)`
    pub fn next_state(&mut self) -> i64 {
        self.state = (self.state * MULTIPLIER + INCREMENT).rem_euclid(MODULUS);
        self.state
    }

    /// Generate next value in `[0, 1)`
    pub fn next_f64(&mut self) -> f64 {
        self.next_state() as f64 / MODULUS as f64
    }

    /// Generate an index in `[0, len)` as `floor(next_f64() * len)`
    pub fn next_index(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64).floor() as usize
    }
}
