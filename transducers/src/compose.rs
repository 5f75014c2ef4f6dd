//! [`Compose`] and [`Identity`].
use crate::Transducer;

/// Two transducers chained so inputs flow through `First`, then `Second`.
///
/// Applying wraps with `Second` first, then `First`, making `First` the outermost stage.
#[must_use = "transducers do nothing unless applied"]
#[derive(Debug, Clone, Copy)]
pub struct Compose<First, Second> {
    first: First,
    second: Second,
}

impl<First, Second> Compose<First, Second> {
    /// Creates from the `first` (outer) and `second` (inner) stages.
    pub fn new(first: First, second: Second) -> Self {
        Self { first, second }
    }
}

impl<First, Second, R> Transducer<R> for Compose<First, Second>
where
    Second: Transducer<R>,
    First: Transducer<Second::Output>,
{
    type Output = First::Output;

    fn apply(self, inner: R) -> Self::Output {
        self.first.apply(self.second.apply(inner))
    }
}

/// The transducer which returns its inner reducer unchanged. Unit of [`Compose`].
#[must_use = "transducers do nothing unless applied"]
#[derive(Debug, Default, Clone, Copy)]
pub struct Identity;

impl<R> Transducer<R> for Identity {
    type Output = R;

    fn apply(self, inner: R) -> R {
        inner
    }
}
