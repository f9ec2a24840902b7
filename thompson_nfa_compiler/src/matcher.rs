use crate::{
    nfa::{State, StateId, NFA},
    sparse::StateSet,
    MatchError,
};

/// A matcher that simulates a Thompson NFA against input
///
/// Matching is anchored at both ends: the whole input must be consumed by a
/// path through the automaton. The simulation keeps the set of states that
/// are active after each character and never backtracks, so a match costs at
/// most `O(input length * NFA size)`.
///
/// A `Matcher` only borrows the NFA. All bookkeeping for a match is allocated
/// by that match, so any number of matchers can run over one NFA at once.
#[derive(Clone, Copy, Debug)]
pub struct Matcher<'a> {
    nfa: &'a NFA,
}

/// Scratch space for one match.
struct Frontier {
    current: StateSet,
    next: StateSet,
    /// Split states already expanded in the current pass.
    seen: StateSet,
    stack: Vec<StateId>,
}

impl Frontier {
    fn new(nfa: &NFA) -> Frontier {
        Frontier {
            current: StateSet::new(nfa.len()),
            next: StateSet::new(nfa.len()),
            seen: StateSet::new(nfa.len()),
            stack: Vec::new(),
        }
    }
}

impl<'a> Matcher<'a> {
    /// Create a new matcher for the given NFA
    pub fn new(nfa: &'a NFA) -> Self {
        Self { nfa }
    }

    /// Check if the entire input matches
    pub fn is_match(&self, input: &str) -> bool {
        self.is_match_chars(input.chars())
    }

    /// Like [`Matcher::is_match`], for input that is already a sequence of
    /// characters.
    pub fn is_match_chars<I>(&self, input: I) -> bool
    where
        I: IntoIterator<Item = char>,
    {
        let mut frontier = Frontier::new(self.nfa);
        frontier.current.insert(self.nfa.start());

        for c in input {
            self.step(c, &mut frontier);
            std::mem::swap(&mut frontier.current, &mut frontier.next);
            frontier.next.clear();
            trace!("after {:?}: {} active states", c, frontier.current.len());
            if frontier.current.is_empty() {
                return false;
            }
        }
        self.accepts(&mut frontier)
    }

    /// Like [`Matcher::is_match`], for raw bytes. Input that is not valid
    /// UTF-8 is rejected before any matching happens.
    pub fn is_match_bytes(&self, input: &[u8]) -> Result<bool, MatchError> {
        let input = std::str::from_utf8(input)
            .map_err(|err| MatchError::InvalidInput { offset: err.valid_up_to() })?;
        Ok(self.is_match(input))
    }

    /// Follow every edge out of the active states, passing through split
    /// states without consuming anything, and collect the char states
    /// labelled `c` into `frontier.next`.
    fn step(&self, c: char, frontier: &mut Frontier) {
        let Frontier { current, next, seen, stack } = frontier;
        seen.clear();
        for &id in current.iter() {
            stack.extend(self.nfa.state(id).edges().into_iter().flatten());
            while let Some(target) = stack.pop() {
                match *self.nfa.state(target) {
                    State::Split { out1, out2 } => {
                        if seen.insert(target) {
                            stack.extend(out2);
                            stack.push(out1);
                        }
                    }
                    State::Char { label, .. } => {
                        if label == c {
                            next.insert(target);
                        }
                    }
                    // Nothing points at the start state.
                    State::Start { .. } => {}
                }
            }
        }
    }

    /// Whether the input may end with `frontier.current` active.
    ///
    /// That holds for an accepting char state, and for any state whose
    /// epsilon expansion reaches a split with a dangling skip edge: an
    /// optional quantifier at the end of the pattern that can be skipped.
    fn accepts(&self, frontier: &mut Frontier) -> bool {
        let Frontier { current, seen, stack, .. } = frontier;
        seen.clear();
        for &id in current.iter() {
            if self.nfa.state(id).is_accepting() {
                return true;
            }
            stack.extend(self.nfa.state(id).edges().into_iter().flatten());
            while let Some(target) = stack.pop() {
                if let State::Split { out1, out2 } = *self.nfa.state(target) {
                    match out2 {
                        None => return true,
                        Some(out2) => {
                            if seen.insert(target) {
                                stack.push(out2);
                                stack.push(out1);
                            }
                        }
                    }
                }
            }
        }
        false
    }
}

/// Check whether `input` matches `nfa` in its entirety.
pub fn is_match(nfa: &NFA, input: &str) -> bool {
    Matcher::new(nfa).is_match(input)
}
