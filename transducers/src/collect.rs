//! [`Collect`] terminal reducer.
use core::marker::PhantomData;

use crate::{Reducer, Reply};

/// Same as [`Iterator::collect`] but as a [`Reducer`].
///
/// Extends a `Coll::default()` with every input. Never halts.
pub struct Collect<Coll>(PhantomData<fn() -> Coll>);

impl<Coll> Collect<Coll> {
    /// Creates a new collecting reducer.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<Coll> Default for Collect<Coll> {
    fn default() -> Self {
        Self(PhantomData)
    }
}

impl<Coll> Clone for Collect<Coll> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<Coll> Copy for Collect<Coll> {}

impl<Coll> core::fmt::Debug for Collect<Coll> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Collect")
    }
}

impl<Coll, Item> Reducer<Item> for Collect<Coll>
where
    Coll: Default + Extend<Item>,
{
    type State = Coll;
    type Output = Coll;

    fn initial(&self) -> Reply<Coll> {
        Reply::Continue(Coll::default())
    }

    fn step(&mut self, input: Item, mut state: Coll) -> Reply<Coll> {
        state.extend(core::iter::once(input));
        Reply::Continue(state)
    }

    fn finish(self, state: Coll) -> Coll {
        state
    }
}
