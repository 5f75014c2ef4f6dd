//! [`FnReducer`] and [`FnTransducer`], built from closures.
use core::marker::PhantomData;

use crate::{Reducer, Reply, Transducer};

/// [`Reducer`] made of an initial reply and step and finish closures.
///
/// Created by [`crate::reducer`].
#[derive(Debug, Clone)]
pub struct FnReducer<State, StepFn, FinishFn> {
    initial: Reply<State>,
    step: StepFn,
    finish: FinishFn,
}

impl<State, StepFn, FinishFn> FnReducer<State, StepFn, FinishFn> {
    /// Creates from the `initial` reply, `step`, and `finish`.
    pub fn new(initial: Reply<State>, step: StepFn, finish: FinishFn) -> Self {
        Self {
            initial,
            step,
            finish,
        }
    }
}

impl<State, In, Out, StepFn, FinishFn> Reducer<In> for FnReducer<State, StepFn, FinishFn>
where
    State: Clone,
    StepFn: FnMut(In, State) -> Reply<State>,
    FinishFn: FnOnce(State) -> Out,
{
    type State = State;
    type Output = Out;

    fn initial(&self) -> Reply<State> {
        self.initial.clone()
    }

    fn step(&mut self, input: In, state: State) -> Reply<State> {
        (self.step)(input, state)
    }

    fn finish(self, state: State) -> Out {
        (self.finish)(state)
    }
}

/// [`Transducer`] made of three lifting closures over inner reducers taking `RIn`.
///
/// Created by [`crate::transducer`].
pub struct FnTransducer<RIn, InitFn, StepFn, FinishFn> {
    init: InitFn,
    step: StepFn,
    finish: FinishFn,
    _phantom: PhantomData<fn(RIn)>,
}

impl<RIn, InitFn, StepFn, FinishFn> FnTransducer<RIn, InitFn, StepFn, FinishFn> {
    /// Creates from the `init`, `step`, and `finish` lifting closures.
    pub fn new(init: InitFn, step: StepFn, finish: FinishFn) -> Self {
        Self {
            init,
            step,
            finish,
            _phantom: PhantomData,
        }
    }
}

impl<RIn, InitFn, StepFn, FinishFn> Clone for FnTransducer<RIn, InitFn, StepFn, FinishFn>
where
    InitFn: Clone,
    StepFn: Clone,
    FinishFn: Clone,
{
    fn clone(&self) -> Self {
        Self::new(self.init.clone(), self.step.clone(), self.finish.clone())
    }
}

impl<R, RIn, InitFn, StepFn, FinishFn> Transducer<R> for FnTransducer<RIn, InitFn, StepFn, FinishFn> {
    type Output = Lifted<R, RIn, InitFn, StepFn, FinishFn>;

    fn apply(self, inner: R) -> Self::Output {
        Lifted {
            inner,
            init: self.init,
            step: self.step,
            finish: self.finish,
            _phantom: PhantomData,
        }
    }
}

/// [`Reducer`] produced by applying an [`FnTransducer`].
pub struct Lifted<R, RIn, InitFn, StepFn, FinishFn> {
    inner: R,
    init: InitFn,
    step: StepFn,
    finish: FinishFn,
    _phantom: PhantomData<fn(RIn)>,
}

impl<R, RIn, TIn, TState, Out, InitFn, StepFn, FinishFn> Reducer<TIn>
    for Lifted<R, RIn, InitFn, StepFn, FinishFn>
where
    R: Reducer<RIn>,
    InitFn: Fn(Reply<R::State>) -> Reply<TState>,
    StepFn: FnMut(&mut R, TIn, TState) -> Reply<TState>,
    FinishFn: FnOnce(R, TState) -> Out,
{
    type State = TState;
    type Output = Out;

    fn initial(&self) -> Reply<TState> {
        (self.init)(self.inner.initial())
    }

    fn step(&mut self, input: TIn, state: TState) -> Reply<TState> {
        (self.step)(&mut self.inner, input, state)
    }

    fn finish(self, state: TState) -> Out {
        (self.finish)(self.inner, state)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::fold::Fold;
    use crate::{apply, fold, reduce_iter, reducer, transducer};

    #[test]
    fn test_reducer_verbatim() {
        let sum_until_ten = reducer(
            Reply::Continue(0),
            |x: i32, acc: i32| {
                if acc + x >= 10 {
                    Reply::Halt(acc + x)
                } else {
                    Reply::Continue(acc + x)
                }
            },
            |acc| acc * 100,
        );
        assert_eq!(1000, reduce_iter(sum_until_ten.clone(), 1..));
        assert_eq!(600, reduce_iter(sum_until_ten, 1..=3));
    }

    #[test]
    fn test_reducer_initial_halt() {
        let r = reducer(Reply::Halt(7), |_: i32, _: i32| unreachable!(), |s| s);
        assert_eq!(7, reduce_iter(r, [1, 2, 3]));
    }

    type Sum = Fold<i64, fn(i64, i64) -> i64>;

    #[test]
    fn test_transducer_counts_and_doubles() {
        // Pairs a private counter with the inner state, forwards doubled inputs,
        // and reports the count alongside the inner result.
        let counting = transducer::<Sum, i64, _, _, _, _, _, _>(
            |reply: Reply<i64>| reply.map(|s| (0_usize, s)),
            |inner: &mut Sum, x: i64, (n, s): (usize, i64)| {
                inner.step(x * 2, s).map(|s| (n + 1, s))
            },
            |inner: Sum, (n, s): (usize, i64)| (n, Reducer::<i64>::finish(inner, s)),
        );
        let add: fn(i64, i64) -> i64 = |a, b| a + b;
        let sum: Sum = fold(0, add);
        assert_eq!((4, 20), reduce_iter(apply(counting, sum), [1, 2, 3, 4]));
    }
}
