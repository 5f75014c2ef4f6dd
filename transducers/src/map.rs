//! [`Map`] and related items.
use crate::{Reducer, Reply, Transducer};

/// Same as [`core::iter::Map`] but as a [`Transducer`].
///
/// Transforms each input before handing it to the inner reducer. Adds no state.
#[must_use = "transducers do nothing unless applied"]
#[derive(Debug, Clone, Copy)]
pub struct Map<Func> {
    func: Func,
}

impl<Func> Map<Func> {
    /// Creates with mapping `func`.
    pub fn new(func: Func) -> Self {
        Self { func }
    }
}

impl<Func, R> Transducer<R> for Map<Func> {
    type Output = MapReducer<R, Func>;

    fn apply(self, inner: R) -> Self::Output {
        MapReducer {
            inner,
            func: self.func,
        }
    }
}

/// [`Reducer`] for [`Map`], also returned by [`Reducer::map_input`].
#[derive(Debug, Clone)]
pub struct MapReducer<R, Func> {
    inner: R,
    func: Func,
}

impl<R, Func> MapReducer<R, Func> {
    /// Creates with mapping `func` and next reducer `inner`.
    pub fn new<Item>(func: Func, inner: R) -> Self
    where
        Self: Reducer<Item>,
    {
        Self { inner, func }
    }
}

impl<R, Func, Item, ItemOut> Reducer<Item> for MapReducer<R, Func>
where
    R: Reducer<ItemOut>,
    Func: FnMut(Item) -> ItemOut,
{
    type State = R::State;
    type Output = R::Output;

    fn initial(&self) -> Reply<R::State> {
        self.inner.initial()
    }

    fn step(&mut self, input: Item, state: R::State) -> Reply<R::State> {
        let item = (self.func)(input);
        self.inner.step(item, state)
    }

    fn finish(self, state: R::State) -> R::Output {
        self.inner.finish(state)
    }
}

/// [`Reducer`] which transforms the output of `R`. Returned by [`Reducer::map_output`].
#[derive(Debug, Clone)]
pub struct MapOutput<R, Func> {
    inner: R,
    func: Func,
}

impl<R, Func> MapOutput<R, Func> {
    /// Creates with output mapping `func` and reducer `inner`.
    pub fn new(func: Func, inner: R) -> Self {
        Self { inner, func }
    }
}

impl<R, Func, Item, Out> Reducer<Item> for MapOutput<R, Func>
where
    R: Reducer<Item>,
    Func: FnOnce(R::Output) -> Out,
{
    type State = R::State;
    type Output = Out;

    fn initial(&self) -> Reply<R::State> {
        self.inner.initial()
    }

    fn step(&mut self, input: Item, state: R::State) -> Reply<R::State> {
        self.inner.step(input, state)
    }

    fn finish(self, state: R::State) -> Out {
        (self.func)(self.inner.finish(state))
    }
}
