//! [`Filter`] and related items.
use crate::{Reducer, Reply, Transducer};

/// Same as [`core::iter::Filter`] but as a [`Transducer`].
///
/// Rejected inputs leave the inner state untouched and never halt.
#[must_use = "transducers do nothing unless applied"]
#[derive(Debug, Clone, Copy)]
pub struct Filter<Func> {
    func: Func,
}

impl<Func> Filter<Func> {
    /// Creates with filtering `func`.
    pub fn new(func: Func) -> Self {
        Self { func }
    }
}

impl<Func, R> Transducer<R> for Filter<Func> {
    type Output = FilterReducer<R, Func>;

    fn apply(self, inner: R) -> Self::Output {
        FilterReducer {
            inner,
            func: self.func,
        }
    }
}

/// [`Reducer`] for [`Filter`].
#[derive(Debug, Clone)]
pub struct FilterReducer<R, Func> {
    inner: R,
    func: Func,
}

impl<R, Func, Item> Reducer<Item> for FilterReducer<R, Func>
where
    R: Reducer<Item>,
    Func: FnMut(&Item) -> bool,
{
    type State = R::State;
    type Output = R::Output;

    fn initial(&self) -> Reply<R::State> {
        self.inner.initial()
    }

    fn step(&mut self, input: Item, state: R::State) -> Reply<R::State> {
        if (self.func)(&input) {
            self.inner.step(input, state)
        } else {
            Reply::Continue(state)
        }
    }

    fn finish(self, state: R::State) -> R::Output {
        self.inner.finish(state)
    }
}

#[cfg(test)]
mod test {
    use crate::{apply, collect, compose, filter, reduce_iter, take};

    #[test]
    fn test_filter() {
        let r = apply(filter(|x: &i32| *x % 2 == 0), collect::<Vec<i32>>());
        assert_eq!(vec![2, 4, 6], reduce_iter(r, 1..=6));
    }

    #[test]
    fn test_filter_then_take() {
        // Take counts only what passes the filter.
        let t = compose(filter(|x: &u32| x % 3 == 0), take(3));
        let r = apply(t, collect::<Vec<u32>>());
        assert_eq!(vec![0, 3, 6], reduce_iter(r, 0..));
    }
}
