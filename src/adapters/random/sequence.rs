//! Deterministic random source for tests and reproducible runs.
//!
//! # Example
//!
//! ```ignore
//! let source = SequenceRandomSource::new(vec![0.0, 0.5, 0.99]);
//! assert_eq!(source.next_unit(), 0.0);
//! assert_eq!(source.next_unit(), 0.5);
//! ```

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::ports::RandomSource;

/// Replays a fixed list of samples, cycling when exhausted.
#[derive(Debug)]
pub struct SequenceRandomSource {
    samples: Vec<f64>,
    cursor: AtomicUsize,
}

impl SequenceRandomSource {
    /// Creates a source replaying `samples`. An empty list always yields `0.0`.
    pub fn new(samples: Vec<f64>) -> Self {
        Self {
            samples,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Source that always returns `sample`.
    pub fn constant(sample: f64) -> Self {
        Self::new(vec![sample])
    }

    /// Number of samples drawn so far.
    pub fn draws(&self) -> usize {
        self.cursor.load(Ordering::SeqCst)
    }
}

impl RandomSource for SequenceRandomSource {
    fn next_unit(&self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let position = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.samples[position % self.samples.len()]
    }
}
