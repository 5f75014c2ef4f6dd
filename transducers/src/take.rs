//! [`Take`] and related items.
use crate::{Reducer, Reply, Transducer};

/// Same as [`core::iter::Take`] but as a [`Transducer`].
///
/// Forwards at most `count` inputs to the inner reducer, halting on the input that uses the last
/// slot. A `count` of zero or less halts up front, so the inner step never runs. A halt from the
/// inner reducer is honored immediately.
#[must_use = "transducers do nothing unless applied"]
#[derive(Debug, Clone, Copy)]
pub struct Take {
    count: isize,
}

impl Take {
    /// Creates with the maximum `count` of inputs to forward.
    pub fn new(count: isize) -> Self {
        Self { count }
    }
}

impl<R> Transducer<R> for Take {
    type Output = TakeReducer<R>;

    fn apply(self, inner: R) -> Self::Output {
        TakeReducer {
            inner,
            count: self.count,
        }
    }
}

/// [`Reducer`] for [`Take`]. State is `(remaining, inner_state)`.
#[derive(Debug, Clone)]
pub struct TakeReducer<R> {
    inner: R,
    count: isize,
}

impl<R, Item> Reducer<Item> for TakeReducer<R>
where
    R: Reducer<Item>,
{
    type State = (isize, R::State);
    type Output = R::Output;

    fn initial(&self) -> Reply<Self::State> {
        let count = self.count;
        let reply = self.inner.initial().map(|state| (count, state));
        if count <= 0 { reply.halt() } else { reply }
    }

    fn step(&mut self, input: Item, (remaining, state): Self::State) -> Reply<Self::State> {
        let reply = self.inner.step(input, state).map(|state| (remaining - 1, state));
        if remaining <= 1 {
            tracing::trace!(count = self.count, "take exhausted");
            reply.halt()
        } else {
            reply
        }
    }

    fn finish(self, (_remaining, state): Self::State) -> R::Output {
        self.inner.finish(state)
    }
}
