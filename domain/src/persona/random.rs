//! Random source port
//!
//! Model and persona selection is randomized. The source is injected so
//! that tests can replay a seeded or scripted sequence.

/// Source of uniformly distributed indices.
pub trait RandomSource: Send + Sync {
    /// Return an index in `0..upper`. `upper` is always at least 1.
    fn next_index(&self, upper: usize) -> usize;
}

/// Always returns the first index.
#[cfg(test)]
pub(crate) struct FirstChoice;

#[cfg(test)]
impl RandomSource for FirstChoice {
    fn next_index(&self, _upper: usize) -> usize {
        0
    }
}
