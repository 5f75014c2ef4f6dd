#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod collect;
pub mod compose;
pub mod expect_sequence;
pub mod filter;
pub mod fold;
pub mod from_fn;
pub mod map;
pub mod member;
pub mod reply;
pub mod skip;
pub mod stateful_map;
pub mod stepper;
pub mod take;
pub mod with_index;

pub use either::Either;

use collect::Collect;
pub use compose::{Compose, Identity};
use expect_sequence::ExpectSequence;
pub use expect_sequence::SequenceMismatch;
use filter::Filter;
use fold::{Fold, Length};
use from_fn::{FnReducer, FnTransducer};
use map::{Map, MapOutput, MapReducer};
use member::{IsEmpty, Member};
pub use reply::Reply;
use skip::Skip;
use stateful_map::StatefulMap;
pub use stepper::{IterStepper, Stepper};
use take::Take;
pub use with_index::with_index;

/// Consumes inputs one at a time, threading an explicit state, and produces a final output.
///
/// A reducer is the `(initial, step, finish)` triple. The reducer value itself holds no
/// per-reduction state: everything that changes during traversal lives in [`Self::State`] and is
/// passed in and out through [`Reply`]s.
pub trait Reducer<Input> {
    /// State threaded through each step.
    type State;
    /// Result produced by [`Self::finish`].
    type Output;

    /// The starting reply. May already be [`Reply::Halt`] if this reducer accepts no input.
    fn initial(&self) -> Reply<Self::State>;

    /// Consumes one `input`.
    ///
    /// Drivers must only call this while the current reply is [`Reply::Continue`].
    fn step(&mut self, input: Input, state: Self::State) -> Reply<Self::State>;

    /// Produces the output from the last state, whether traversal ended by exhaustion or by
    /// [`Reply::Halt`].
    fn finish(self, state: Self::State) -> Self::Output;

    /// Transforms each input with `func` before this reducer sees it.
    ///
    /// Same as `apply(map(func), self)`.
    fn map_input<Func, In>(self, func: Func) -> MapReducer<Self, Func>
    where
        Self: Sized,
        Func: FnMut(In) -> Input,
    {
        MapReducer::new::<In>(func, self)
    }

    /// Transforms the finished output with `func`.
    fn map_output<Func, Out>(self, func: Func) -> MapOutput<Self, Func>
    where
        Self: Sized,
        Func: FnOnce(Self::Output) -> Out,
    {
        MapOutput::new(func, self)
    }
}

/// Wraps an `Inner` reducer to produce a new [`Reducer`].
///
/// A transducer has no state of its own until it is applied. Any private state it needs is paired
/// with the inner reducer's state in the produced reducer's [`Reducer::State`]. Transducers are
/// plain values: clone one to apply it more than once.
pub trait Transducer<Inner> {
    /// The reducer produced by wrapping `Inner`.
    type Output;

    /// Wraps `inner`.
    fn apply(self, inner: Inner) -> Self::Output;
}

/// Materializes `transducer` around `reducer`.
pub fn apply<T, R>(transducer: T, reducer: R) -> T::Output
where
    T: Transducer<R>,
{
    transducer.apply(reducer)
}

/// Composes two transducers so that data flows through `first`, then `second`.
///
/// When applied, `second` wraps the reducer first and `first` wraps the result, so `first` is
/// outermost and sees every input before `second` does.
pub fn compose<First, Second>(first: First, second: Second) -> Compose<First, Second> {
    Compose::new(first, second)
}

/// Runs `reducer` over `collection` using `stepper`.
///
/// `finish` runs exactly once, on the state of the last reply, whether traversal was exhausted or
/// halted.
pub fn reduce<St, R, Collection>(stepper: St, mut reducer: R, collection: Collection) -> R::Output
where
    St: Stepper<Collection>,
    R: Reducer<St::Item>,
{
    let initial = reducer.initial();
    let mut steps = 0_usize;
    let last = stepper.step_through(
        |item, state| {
            steps += 1;
            reducer.step(item, state)
        },
        initial,
        collection,
    );
    tracing::trace!(steps, halted = last.is_halt(), "reduction finished");
    reducer.finish(last.into_state())
}

/// Runs `reducer` over any [`IntoIterator`], in iteration order.
pub fn reduce_iter<R, I>(reducer: R, iter: I) -> R::Output
where
    I: IntoIterator,
    R: Reducer<I::Item>,
{
    reduce(IterStepper, reducer, iter)
}

/// Creates a [`Reducer`] from an initial reply and step and finish functions, verbatim.
///
/// The initial state is cloned at the start of each reduction.
pub fn reducer<State, In, Out, StepFn, FinishFn>(
    initial: Reply<State>,
    step: StepFn,
    finish: FinishFn,
) -> FnReducer<State, StepFn, FinishFn>
where
    State: Clone,
    StepFn: FnMut(In, State) -> Reply<State>,
    FinishFn: FnOnce(State) -> Out,
{
    FnReducer::new(initial, step, finish)
}

/// Creates a [`Transducer`] over the concrete inner reducer `R` from three lifting functions.
///
/// * `init` maps the inner initial reply to the outer one.
/// * `step` is the outer step. It receives the inner reducer to call [`Reducer::step`] on.
/// * `finish` is the outer finish. It receives the inner reducer to call [`Reducer::finish`] on.
///
/// Closures cannot be generic, so the result only wraps reducers of type `R`. Combinators that
/// must wrap any reducer (like [`map`] or [`take`]) are their own types instead.
pub fn transducer<R, RIn, TIn, TState, Out, InitFn, StepFn, FinishFn>(
    init: InitFn,
    step: StepFn,
    finish: FinishFn,
) -> FnTransducer<RIn, InitFn, StepFn, FinishFn>
where
    R: Reducer<RIn>,
    InitFn: Fn(Reply<R::State>) -> Reply<TState>,
    StepFn: FnMut(&mut R, TIn, TState) -> Reply<TState>,
    FinishFn: FnOnce(R, TState) -> Out,
{
    FnTransducer::new(init, step, finish)
}

/// Creates a [`Map`] transducer which applies `func` to each input.
pub fn map<Func>(func: Func) -> Map<Func> {
    Map::new(func)
}

/// Creates a [`StatefulMap`] transducer from an initial private state and a transition.
///
/// `func` receives each input and the current private state, and returns either
/// [`Either::Left`] with a new private state to halt without forwarding anything, or
/// [`Either::Right`] with an output to forward and the next private state.
pub fn stateful_map<Private, Func, In, Out>(initial: Private, func: Func) -> StatefulMap<Private, Func>
where
    Private: Clone,
    Func: FnMut(In, Private) -> Either<Private, (Out, Private)>,
{
    StatefulMap::new(initial, func)
}

/// Creates a [`Take`] transducer which forwards at most `count` inputs, then halts.
///
/// A `count` of zero or less halts before any input is consumed.
pub fn take(count: isize) -> Take {
    Take::new(count)
}

/// Creates a [`Filter`] transducer which forwards only inputs matching `func`.
pub fn filter<Func, Item>(func: Func) -> Filter<Func>
where
    Func: FnMut(&Item) -> bool,
{
    Filter::new(func)
}

/// Creates a [`Skip`] transducer which drops the first `count` inputs.
pub fn skip(count: usize) -> Skip {
    Skip::new(count)
}

/// Creates a [`Collect`] reducer which extends a default `Coll` with every input.
pub fn collect<Coll>() -> Collect<Coll> {
    Collect::new()
}

/// Creates a [`Fold`] reducer which left-folds inputs into `init` with `func`.
pub fn fold<Accum, Func, Item>(init: Accum, func: Func) -> Fold<Accum, Func>
where
    Accum: Clone,
    Func: FnMut(Accum, Item) -> Accum,
{
    Fold::new(init, func)
}

/// Creates a [`Length`] reducer which counts inputs.
pub fn length() -> Length {
    Length
}

/// Creates an [`IsEmpty`] reducer which halts on the first input.
pub fn is_empty() -> IsEmpty {
    IsEmpty
}

/// Creates a [`Member`] reducer which halts on the first input equal to `value`.
pub fn member<Item>(value: Item) -> Member<Item>
where
    Item: PartialEq,
{
    Member::new(value)
}

/// Creates an [`ExpectSequence`] reducer which checks that the inputs are exactly `expected`.
pub fn expect_sequence<Item>(expected: impl Into<Vec<Item>>) -> ExpectSequence<Item>
where
    Item: PartialEq + Clone + core::fmt::Debug,
{
    ExpectSequence::new(expected.into())
}

/// Composes any number of transducers, outermost first.
///
/// `compose!(a, b, c)` is `compose(a, compose(b, c))`: inputs flow through `a`, then `b`, then `c`.
#[macro_export]
macro_rules! compose {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::compose($first, $crate::compose!($($rest),+))
    };
}
