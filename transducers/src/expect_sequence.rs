//! [`ExpectSequence`] terminal reducer and its [`SequenceMismatch`] error.
use core::fmt::Debug;

use crate::{Reducer, Reply};

/// How the received inputs differed from the expected sequence.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SequenceMismatch<Item: Debug> {
    /// An input did not equal the expected item at its position.
    #[error("item {index}: expected {expected:?}, received {actual:?}")]
    Differs {
        /// Position of the input.
        index: usize,
        /// The expected item.
        expected: Item,
        /// The received input.
        actual: Item,
    },
    /// An input arrived after the whole expected sequence had been matched.
    #[error("item {index}: received {actual:?} past the end of the expected sequence")]
    Unexpected {
        /// Position of the input.
        index: usize,
        /// The received input.
        actual: Item,
    },
    /// Traversal ended before the whole expected sequence was received.
    #[error("received {received} items, expected {expected_len}")]
    Missing {
        /// Number of inputs received.
        received: usize,
        /// Length of the expected sequence.
        expected_len: usize,
    },
}

/// Checks that the inputs are exactly `expected`, in order.
///
/// Halts on the first mismatch or extra input. Finishes with `Ok(())` only if every expected item
/// was received and nothing else.
#[derive(Debug, Clone)]
pub struct ExpectSequence<Item> {
    expected: Vec<Item>,
}

impl<Item> ExpectSequence<Item> {
    /// Creates, expecting exactly `expected`.
    pub fn new(expected: Vec<Item>) -> Self {
        Self { expected }
    }
}

impl<Item> Reducer<Item> for ExpectSequence<Item>
where
    Item: PartialEq + Clone + Debug,
{
    /// Number of inputs matched so far, or the mismatch.
    type State = Result<usize, SequenceMismatch<Item>>;
    type Output = Result<(), SequenceMismatch<Item>>;

    fn initial(&self) -> Reply<Self::State> {
        Reply::Continue(Ok(0))
    }

    fn step(&mut self, input: Item, state: Self::State) -> Reply<Self::State> {
        let index = match state {
            Ok(index) => index,
            Err(mismatch) => return Reply::Halt(Err(mismatch)),
        };
        match self.expected.get(index) {
            Some(expected) if *expected == input => Reply::Continue(Ok(index + 1)),
            Some(expected) => Reply::Halt(Err(SequenceMismatch::Differs {
                index,
                expected: expected.clone(),
                actual: input,
            })),
            None => Reply::Halt(Err(SequenceMismatch::Unexpected {
                index,
                actual: input,
            })),
        }
    }

    fn finish(self, state: Self::State) -> Self::Output {
        let received = state?;
        if received == self.expected.len() {
            Ok(())
        } else {
            Err(SequenceMismatch::Missing {
                received,
                expected_len: self.expected.len(),
            })
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{expect_sequence, reduce_iter};

    #[test]
    fn test_exact_match() {
        assert_eq!(Ok(()), reduce_iter(expect_sequence([1, 2, 3]), [1, 2, 3]));
        assert_eq!(Ok(()), reduce_iter(expect_sequence(Vec::<u8>::new()), []));
    }

    #[test]
    fn test_differs() {
        assert_eq!(
            Err(SequenceMismatch::Differs {
                index: 1,
                expected: 'b',
                actual: 'x',
            }),
            reduce_iter(expect_sequence(['a', 'b', 'c']), "axc".chars())
        );
    }

    #[test]
    fn test_unexpected_halts() {
        let result = reduce_iter(expect_sequence([1]), 1..);
        assert_eq!(
            Err(SequenceMismatch::Unexpected {
                index: 1,
                actual: 2
            }),
            result
        );
    }

    #[test]
    fn test_missing() {
        let result = reduce_iter(expect_sequence([1, 2, 3]), [1, 2]);
        assert_eq!(
            Err(SequenceMismatch::Missing {
                received: 2,
                expected_len: 3
            }),
            result
        );
        assert_eq!(
            "received 2 items, expected 3",
            result.unwrap_err().to_string()
        );
    }
}
