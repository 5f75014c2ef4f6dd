//! [`Fold`] and [`Length`] terminal reducers.
use crate::{Reducer, Reply};

/// Same as [`Iterator::fold`] but as a [`Reducer`]. Never halts.
#[derive(Debug, Clone, Copy)]
pub struct Fold<Accum, Func> {
    init: Accum,
    func: Func,
}

impl<Accum, Func> Fold<Accum, Func> {
    /// Creates with the `init` accumulator and folding `func`.
    pub fn new(init: Accum, func: Func) -> Self {
        Self { init, func }
    }
}

impl<Accum, Func, Item> Reducer<Item> for Fold<Accum, Func>
where
    Accum: Clone,
    Func: FnMut(Accum, Item) -> Accum,
{
    type State = Accum;
    type Output = Accum;

    fn initial(&self) -> Reply<Accum> {
        Reply::Continue(self.init.clone())
    }

    fn step(&mut self, input: Item, state: Accum) -> Reply<Accum> {
        Reply::Continue((self.func)(state, input))
    }

    fn finish(self, state: Accum) -> Accum {
        state
    }
}

/// Counts inputs. Never halts.
#[derive(Debug, Default, Clone, Copy)]
pub struct Length;

impl<Item> Reducer<Item> for Length {
    type State = usize;
    type Output = usize;

    fn initial(&self) -> Reply<usize> {
        Reply::Continue(0)
    }

    fn step(&mut self, _input: Item, state: usize) -> Reply<usize> {
        Reply::Continue(state + 1)
    }

    fn finish(self, state: usize) -> usize {
        state
    }
}
