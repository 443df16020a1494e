use std::num::NonZero;

/// The length of a non-empty chain. Wrapping [`NonZero`] means the `Full`
/// state cannot record zero elements, and `checked_sub` reaching zero is the
/// signal to collapse back to `Empty`.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub(crate) struct Length(NonZero<usize>);

pub(crate) const ONE: Length = Length(NonZero::<usize>::MIN);

impl Length {
    pub(crate) const fn get(self) -> usize {
        self.0.get()
    }

    pub(crate) fn checked_add(self, rhs: usize) -> Option<Length> {
        self.0.checked_add(rhs).map(Length)
    }

    pub(crate) fn checked_sub(self, rhs: usize) -> Option<Length> {
        self.0.get().checked_sub(rhs).and_then(NonZero::new).map(Length)
    }
}
