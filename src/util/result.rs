use std::fmt::Display;

/// Panic with an error's own message instead of unwrapping it.
pub(crate) trait Throw<T> {
    /// Like [`Result::unwrap`], except the panic message is the error's
    /// [`Display`] output rather than its [`Debug`] one.
    ///
    /// # Panics
    /// Panics if the value is an [`Err`].
    fn throw(self) -> T;
}

impl<T, E: Display> Throw<T> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(value) => value,
            Err(error) => panic!("{error}"),
        }
    }
}
