//! [`Stepper`] and the [`IterStepper`] list traversal.
use core::ops::ControlFlow;

use crate::Reply;

/// A traversal strategy for one collection type.
///
/// Implementations visit the elements of a `Collection` in its natural order, feeding each to
/// `step` along with the current state. They must stop as soon as a [`Reply::Halt`] is observed
/// (including an initial `Halt`), never call `step` again after that, and return exactly the last
/// reply they saw.
pub trait Stepper<Collection> {
    /// Element type handed to the step function.
    type Item;

    /// Drives `step` over `collection`, starting from `initial`.
    fn step_through<State, Step>(
        &self,
        step: Step,
        initial: Reply<State>,
        collection: Collection,
    ) -> Reply<State>
    where
        Step: FnMut(Self::Item, State) -> Reply<State>;
}

/// [`Stepper`] for anything [`IntoIterator`], in iteration order.
///
/// No element is pulled from the iterator once a `Halt` has been seen.
#[derive(Debug, Default, Clone, Copy)]
pub struct IterStepper;

impl<Collection> Stepper<Collection> for IterStepper
where
    Collection: IntoIterator,
{
    type Item = Collection::Item;

    fn step_through<State, Step>(
        &self,
        mut step: Step,
        initial: Reply<State>,
        collection: Collection,
    ) -> Reply<State>
    where
        Step: FnMut(Self::Item, State) -> Reply<State>,
    {
        let state = match initial {
            Reply::Continue(state) => state,
            halt @ Reply::Halt(_) => return halt,
        };
        collection
            .into_iter()
            .try_fold(state, |state, item| ControlFlow::from(step(item, state)))
            .into()
    }
}
