//! [`Member`] and [`IsEmpty`], search reducers which halt as soon as the answer is known.
use crate::{Reducer, Reply};

/// Finds whether any input equals `value`. Halts with `true` on the first match.
#[derive(Debug, Clone, Copy)]
pub struct Member<Item> {
    value: Item,
}

impl<Item> Member<Item> {
    /// Creates, searching for `value`.
    pub fn new(value: Item) -> Self {
        Self { value }
    }
}

impl<Item> Reducer<Item> for Member<Item>
where
    Item: PartialEq,
{
    type State = bool;
    type Output = bool;

    fn initial(&self) -> Reply<bool> {
        Reply::Continue(false)
    }

    fn step(&mut self, input: Item, _found: bool) -> Reply<bool> {
        if input == self.value {
            Reply::Halt(true)
        } else {
            Reply::Continue(false)
        }
    }

    fn finish(self, found: bool) -> bool {
        found
    }
}

/// Finds whether there are no inputs. Halts with `false` on the first input.
#[derive(Debug, Default, Clone, Copy)]
pub struct IsEmpty;

impl<Item> Reducer<Item> for IsEmpty {
    type State = bool;
    type Output = bool;

    fn initial(&self) -> Reply<bool> {
        Reply::Continue(true)
    }

    fn step(&mut self, _input: Item, _empty: bool) -> Reply<bool> {
        Reply::Halt(false)
    }

    fn finish(self, empty: bool) -> bool {
        empty
    }
}
