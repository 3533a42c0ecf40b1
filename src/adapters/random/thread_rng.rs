//! Thread-local RNG adapter.

use rand::Rng;

use crate::ports::RandomSource;

/// Uniform samples from `rand::thread_rng`.
///
/// Holds no state of its own, so one instance can be shared freely between
/// concurrent requests.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandomSource;

impl ThreadRandomSource {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandomSource {
    fn next_unit(&self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}
