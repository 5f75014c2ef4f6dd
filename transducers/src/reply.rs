//! [`Reply`], the early-termination envelope returned by every reducer step.
use core::ops::ControlFlow;

/// A state value tagged with whether traversal should keep going.
///
/// Both variants always carry a state. `Halt` means the state is final for the reducer that
/// produced it, but `finish` still runs on it.
#[must_use = "a reply carries the only copy of the reduction state"]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Reply<State> {
    /// Traversal should proceed with this state.
    Continue(State),
    /// Traversal must stop. This is the last state for this reducer.
    Halt(State),
}

impl<State> Reply<State> {
    /// Applies `func` to the carried state, keeping the tag.
    pub fn map<Out, Func>(self, func: Func) -> Reply<Out>
    where
        Func: FnOnce(State) -> Out,
    {
        match self {
            Self::Continue(state) => Reply::Continue(func(state)),
            Self::Halt(state) => Reply::Halt(func(state)),
        }
    }

    /// Runs `func` on a `Continue` state. A `Halt` is returned unchanged.
    pub fn and_then<Func>(self, func: Func) -> Self
    where
        Func: FnOnce(State) -> Self,
    {
        match self {
            Self::Continue(state) => func(state),
            halt @ Self::Halt(_) => halt,
        }
    }

    /// Retags as `Halt`, keeping the state.
    pub fn halt(self) -> Self {
        Self::Halt(self.into_state())
    }

    /// Borrows the carried state, whatever the tag.
    pub fn state(&self) -> &State {
        match self {
            Self::Continue(state) | Self::Halt(state) => state,
        }
    }

    /// Mutably borrows the carried state, whatever the tag.
    pub fn state_mut(&mut self) -> &mut State {
        match self {
            Self::Continue(state) | Self::Halt(state) => state,
        }
    }

    /// Unwraps the carried state, whatever the tag.
    pub fn into_state(self) -> State {
        match self {
            Self::Continue(state) | Self::Halt(state) => state,
        }
    }

    /// `true` for [`Reply::Continue`].
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }

    /// `true` for [`Reply::Halt`].
    pub fn is_halt(&self) -> bool {
        matches!(self, Self::Halt(_))
    }
}

impl<State> From<Reply<State>> for ControlFlow<State, State> {
    fn from(reply: Reply<State>) -> Self {
        match reply {
            Reply::Continue(state) => Self::Continue(state),
            Reply::Halt(state) => Self::Break(state),
        }
    }
}

impl<State> From<ControlFlow<State, State>> for Reply<State> {
    fn from(flow: ControlFlow<State, State>) -> Self {
        match flow {
            ControlFlow::Continue(state) => Self::Continue(state),
            ControlFlow::Break(state) => Self::Halt(state),
        }
    }
}
