use crate::{CompileError, CompileResult};
use std::fmt;

/// A state ID in the NFA
pub type StateId = usize;

/// A Thompson NFA state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum State {
    /// The unique entry point. Consumes nothing.
    Start { next: StateId },

    /// Epsilon branch to two states. `out2` is the edge that may be left
    /// dangling: an optional quantifier at the end of a pattern never gets a
    /// successor for its skip edge.
    Split { out1: StateId, out2: Option<StateId> },

    /// Consumes exactly one character equal to `label`. `next` is `None` on
    /// the last state of a path through the pattern.
    Char { label: char, next: Option<StateId>, accepting: bool },
}

impl State {
    pub fn is_accepting(&self) -> bool {
        matches!(*self, State::Char { accepting: true, .. })
    }

    /// The outgoing edges of this state, in priority order. An absent edge
    /// is reported as `None`.
    pub fn edges(&self) -> [Option<StateId>; 2] {
        match *self {
            State::Start { next } => [Some(next), None],
            State::Split { out1, out2 } => [Some(out1), out2],
            State::Char { next, .. } => [next, None],
        }
    }
}

/// Which outgoing edge of a state a hole refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// `State::Char::next`
    Next,
    /// `State::Split::out2`
    Skip,
}

/// An unconnected outgoing edge of a fragment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hole {
    pub state: StateId,
    pub slot: Slot,
}

impl Hole {
    pub fn next(state: StateId) -> Hole {
        Hole { state, slot: Slot::Next }
    }

    pub fn skip(state: StateId) -> Hole {
        Hole { state, slot: Slot::Skip }
    }
}

/// A partially built piece of an NFA: where to enter it and which of its
/// edges still need a successor.
#[derive(Debug, Clone)]
pub struct Fragment {
    pub entry: StateId,
    pub holes: Vec<Hole>,
}

/// Mutable arena used while compiling. States can only be patched here;
/// [`Builder::build`] freezes the result into an [`NFA`].
#[derive(Debug, Default)]
pub struct Builder {
    states: Vec<State>,
    size_limit: Option<usize>,
}

impl Builder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail with [`CompileError::TooBig`] once more than `limit` states
    /// (including the start state) would be allocated.
    pub fn with_size_limit(limit: Option<usize>) -> Self {
        Self { states: Vec::new(), size_limit: limit }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Add a new state and return its ID
    pub fn add(&mut self, state: State) -> CompileResult<StateId> {
        if let Some(limit) = self.size_limit {
            if self.states.len() >= limit {
                return Err(CompileError::TooBig(limit));
            }
        }
        let id = self.states.len();
        self.states.push(state);
        Ok(id)
    }

    pub fn add_char(&mut self, label: char, accepting: bool) -> CompileResult<StateId> {
        self.add(State::Char { label, next: None, accepting })
    }

    pub fn add_split(&mut self, out1: StateId, out2: Option<StateId>) -> CompileResult<StateId> {
        self.add(State::Split { out1, out2 })
    }

    /// Point the edge described by `hole` at `target`.
    ///
    /// Every hole is filled at most once; patching a filled edge, or an edge
    /// of the wrong kind, is an internal error.
    pub fn patch(&mut self, hole: Hole, target: StateId) -> CompileResult<()> {
        if target >= self.states.len() {
            return Err(CompileError::Internal(format!(
                "patch target {} does not exist",
                target
            )));
        }
        let state = self.states.get_mut(hole.state).ok_or_else(|| {
            CompileError::Internal(format!("hole refers to missing state {}", hole.state))
        })?;
        let edge = match (state, hole.slot) {
            (State::Char { next, .. }, Slot::Next) => next,
            (State::Split { out2, .. }, Slot::Skip) => out2,
            (state, slot) => {
                return Err(CompileError::Internal(format!(
                    "cannot patch {:?} slot of {:?}",
                    slot, state
                )))
            }
        };
        if edge.is_some() {
            return Err(CompileError::Internal(format!(
                "state {} is already patched",
                hole.state
            )));
        }
        *edge = Some(target);
        Ok(())
    }

    /// Add the start state in front of `entry` and freeze the graph.
    pub fn build(mut self, entry: StateId) -> CompileResult<NFA> {
        if entry >= self.states.len() {
            return Err(CompileError::Internal(format!(
                "entry state {} does not exist",
                entry
            )));
        }
        let start = self.add(State::Start { next: entry })?;
        Ok(NFA { states: self.states, start })
    }
}

/// A compiled Thompson NFA.
///
/// The graph is immutable: nothing can add states or change edges after
/// compilation. It is therefore safe to share one NFA between threads and
/// run any number of matches against it concurrently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NFA {
    states: Vec<State>,
    start: StateId,
}

impl NFA {
    /// The ID of the [`State::Start`] state.
    pub fn start(&self) -> StateId {
        self.start
    }

    /// Returns the state with the given ID.
    ///
    /// # Panics
    ///
    /// When `id` did not come from this NFA.
    pub fn state(&self, id: StateId) -> &State {
        &self.states[id]
    }

    pub fn states(&self) -> &[State] {
        &self.states
    }

    /// The number of states, including the start state.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl fmt::Display for NFA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn target(id: Option<StateId>) -> String {
            match id {
                Some(id) => format!("{:>04}", id),
                None => "END".to_string(),
            }
        }

        writeln!(f, "start: {:>04}", self.start)?;
        for (id, state) in self.states.iter().enumerate() {
            write!(f, "{:>04}: ", id)?;
            match *state {
                State::Start { next } => writeln!(f, "START -> {:>04}", next)?,
                State::Split { out1, out2 } => {
                    writeln!(f, "SPLIT -> {:>04}, {}", out1, target(out2))?
                }
                State::Char { label, next, accepting } => {
                    write!(f, "{:?} -> {}", label, target(next))?;
                    if accepting {
                        write!(f, " (accepting)")?;
                    }
                    writeln!(f)?;
                }
            }
        }
        Ok(())
    }
}
