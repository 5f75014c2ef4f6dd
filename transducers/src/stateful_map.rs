//! [`StatefulMap`] and related items.
use either::Either;

use crate::{Reducer, Reply, Transducer};

/// [`Transducer`] driven by a private state transition.
///
/// For each input, `func` receives the input and the current private state and returns either
/// `Left(private)` to halt without calling the inner reducer, or `Right((output, private))` to
/// forward `output` inward. The produced reducer's state is `(private, inner_state)`.
///
/// Counting, limiting, deduplicating, and windowing stages are all instances of this shape.
#[must_use = "transducers do nothing unless applied"]
#[derive(Debug, Clone, Copy)]
pub struct StatefulMap<Private, Func> {
    initial: Private,
    func: Func,
}

impl<Private, Func> StatefulMap<Private, Func> {
    /// Creates with the `initial` private state and transition `func`.
    pub fn new(initial: Private, func: Func) -> Self {
        Self { initial, func }
    }
}

impl<Private, Func, R> Transducer<R> for StatefulMap<Private, Func> {
    type Output = StatefulMapReducer<R, Private, Func>;

    fn apply(self, inner: R) -> Self::Output {
        StatefulMapReducer {
            inner,
            initial: self.initial,
            func: self.func,
        }
    }
}

/// [`Reducer`] for [`StatefulMap`].
#[derive(Debug, Clone)]
pub struct StatefulMapReducer<R, Private, Func> {
    inner: R,
    initial: Private,
    func: Func,
}

impl<R, Private, Func, Item, ItemOut> Reducer<Item> for StatefulMapReducer<R, Private, Func>
where
    R: Reducer<ItemOut>,
    Private: Clone,
    Func: FnMut(Item, Private) -> Either<Private, (ItemOut, Private)>,
{
    type State = (Private, R::State);
    type Output = R::Output;

    fn initial(&self) -> Reply<Self::State> {
        let private = self.initial.clone();
        self.inner.initial().map(|state| (private, state))
    }

    fn step(&mut self, input: Item, (private, state): Self::State) -> Reply<Self::State> {
        match (self.func)(input, private) {
            Either::Left(private) => Reply::Halt((private, state)),
            Either::Right((output, private)) => {
                self.inner.step(output, state).map(|state| (private, state))
            }
        }
    }

    fn finish(self, (_private, state): Self::State) -> R::Output {
        self.inner.finish(state)
    }
}
