//! Random number generator abstraction for determinism.
//!
//! Production wraps a real RNG; tests inject fixed or scripted picks.

/// Abstraction over random index selection.
pub trait DeterministicRng: Send + Sync {
    /// Uniformly random index in `[0, upper)`. `upper` is never zero.
    fn next_index(&mut self, upper: usize) -> usize;
}
