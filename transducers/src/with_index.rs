//! [`with_index`].
use either::Either;

use crate::stateful_map::StatefulMap;

/// Pairs each input with its position, starting from zero. Never halts on its own.
///
/// Same as [`Iterator::enumerate`], built on [`stateful_map`](crate::stateful_map()) with a
/// `usize` counter as the private state.
pub fn with_index<Item>()
-> StatefulMap<usize, impl FnMut(Item, usize) -> Either<usize, ((usize, Item), usize)> + Clone> {
    crate::stateful_map(0, |item: Item, index: usize| {
        Either::Right(((index, item), index + 1))
    })
}
