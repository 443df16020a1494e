//! Element types for tests that watch ownership and layout behaviour.

use std::cell::Cell;
use std::rc::Rc;

/// Counts how many of its clones have been dropped. Push clones into a
/// container, drop or clear the container, then read [`DropCounter::count`]
/// from the original handle.
#[derive(Debug, Clone)]
pub(crate) struct DropCounter(Rc<Cell<usize>>);

impl DropCounter {
    pub(crate) fn new() -> DropCounter {
        DropCounter(Rc::new(Cell::new(0)))
    }

    /// Drops observed so far, not counting this handle itself.
    pub(crate) fn count(&self) -> usize {
        self.0.get()
    }
}

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.set(self.0.get() + 1);
    }
}

/// A zero-sized element type for layout edge cases.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Zst;
