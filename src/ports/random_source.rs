//! RandomSource port - uniform samples for content selection.

/// Source of uniformly distributed samples in `[0, 1)`.
///
/// Production code uses a thread-local RNG; tests plug in a fixed sequence
/// so that selection is reproducible.
pub trait RandomSource: Send + Sync {
    fn next_unit(&self) -> f64;
}
