//! [`Skip`] and related items.
use crate::{Reducer, Reply, Transducer};

/// Same as [`core::iter::Skip`] but as a [`Transducer`].
///
/// Drops the first `count` inputs, then forwards the rest unchanged. Never halts on its own.
#[must_use = "transducers do nothing unless applied"]
#[derive(Debug, Clone, Copy)]
pub struct Skip {
    count: usize,
}

impl Skip {
    /// Creates with the `count` of inputs to drop.
    pub fn new(count: usize) -> Self {
        Self { count }
    }
}

impl<R> Transducer<R> for Skip {
    type Output = SkipReducer<R>;

    fn apply(self, inner: R) -> Self::Output {
        SkipReducer {
            inner,
            count: self.count,
        }
    }
}

/// [`Reducer`] for [`Skip`]. State is `(still_to_drop, inner_state)`.
#[derive(Debug, Clone)]
pub struct SkipReducer<R> {
    inner: R,
    count: usize,
}

impl<R, Item> Reducer<Item> for SkipReducer<R>
where
    R: Reducer<Item>,
{
    type State = (usize, R::State);
    type Output = R::Output;

    fn initial(&self) -> Reply<Self::State> {
        let count = self.count;
        self.inner.initial().map(|state| (count, state))
    }

    fn step(&mut self, input: Item, (pending, state): Self::State) -> Reply<Self::State> {
        match pending.checked_sub(1) {
            Some(pending) => Reply::Continue((pending, state)),
            None => self.inner.step(input, state).map(|state| (0, state)),
        }
    }

    fn finish(self, (_pending, state): Self::State) -> R::Output {
        self.inner.finish(state)
    }
}
