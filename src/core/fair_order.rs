//! Cyclic permutation of pool indices, consumed round-robin.
//!
//! "Whose turn" is decided here and "is it available" is decided by the
//! [`AvailabilityTracker`](super::AvailabilityTracker). Keeping them apart lets
//! the scheduler skip a busy actor without handing out a second turn to anyone
//! else before the cycle completes.

use rand::seq::SliceRandom;
use rand::Rng;

/// Permutation of `0..len` plus a cursor in `0..=len`.
#[derive(Debug, Clone, Default)]
pub struct FairOrder {
    order: Vec<usize>,
    cursor: usize,
}

impl FairOrder {
    /// Identity permutation over `len` indices.
    #[must_use]
    pub fn new(len: usize) -> Self {
        Self {
            order: (0..len).collect(),
            cursor: 0,
        }
    }

    /// Restore the identity permutation for a pool of `len` members.
    pub fn rebuild(&mut self, len: usize) {
        self.order.clear();
        self.order.extend(0..len);
        self.cursor = 0;
    }

    /// Begin a new cycle, shuffling (Fisher-Yates) when `randomize` is set.
    pub fn reset<R: Rng + ?Sized>(&mut self, randomize: bool, rng: &mut R) {
        self.cursor = 0;
        if randomize {
            self.order.shuffle(rng);
        }
    }

    /// Take the next index of the current cycle, or `None` once it is exhausted.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<usize> {
        let idx = *self.order.get(self.cursor)?;
        self.cursor += 1;
        Some(idx)
    }

    /// Whether every index of the current cycle has been handed out.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.order.len()
    }

    /// Number of indices in the permutation.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// True when the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Position of the next index to hand out.
    #[must_use]
    pub const fn cursor(&self) -> usize {
        self.cursor
    }

    /// The current permutation.
    #[must_use]
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }
}
