use crate::{validation, Violation};

use super::{Dfa, StateId, Symbol, Transition};

/// Helper struct for the construction of a [`Dfa`]. It collects the alphabet, the states, the
/// initial state, the accepting states and the transitions, each in the order in which they are given.
///
/// # Example
///
/// We want to create a DFA with two states `s0` and `s1` over the alphabet `{a, b}`, which moves
/// from `s0` to `s1` on `a` and back on `b`. Further, `s0` should be initial and `s1` accepting.
/// ```
/// use dfa_lab::prelude::*;
///
/// let dfa = Dfa::builder()
///     .with_alphabet(["a", "b"])
///     .with_states(["s0", "s1"])
///     .with_initial("s0")
///     .with_accepting(["s1"])
///     .with_transitions([("s0", "a", "s1"), ("s1", "b", "s0")])
///     .build()
///     .unwrap();
/// assert!(dfa.accepts("aba"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DfaBuilder {
    alphabet: Vec<Symbol>,
    states: Vec<StateId>,
    initial: Option<StateId>,
    accepting: Vec<StateId>,
    transitions: Vec<Transition>,
}

impl DfaBuilder {
    /// Appends the given symbols to the alphabet.
    pub fn with_alphabet<I, S>(mut self, symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        self.alphabet.extend(symbols.into_iter().map(Into::into));
        self
    }

    /// Appends the given states.
    pub fn with_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        self.states.extend(states.into_iter().map(Into::into));
        self
    }

    /// Sets the initial state. If none is given, the first state is used.
    pub fn with_initial(mut self, state: impl Into<StateId>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Marks the given states as accepting.
    pub fn with_accepting<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<StateId>,
    {
        self.accepting.extend(states.into_iter().map(Into::into));
        self
    }

    /// Appends the given transitions, which may be anything that converts into a [`Transition`],
    /// most notably `(from, symbol, to)` triples.
    pub fn with_transitions<I, T>(mut self, transitions: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Transition>,
    {
        self.transitions
            .extend(transitions.into_iter().map(Into::into));
        self
    }

    /// Assembles the [`Dfa`] without validating it.
    pub fn build_unchecked(self) -> Dfa {
        let initial = self
            .initial
            .or_else(|| self.states.first().cloned())
            .unwrap_or_default();
        Dfa::new(
            self.alphabet,
            self.states,
            initial,
            self.accepting,
            self.transitions,
        )
    }

    /// Assembles the [`Dfa`] and validates it, returning the first [`Violation`] if there is one.
    pub fn build(self) -> Result<Dfa, Violation> {
        let dfa = self.build_unchecked();
        match validation::first_violation(&dfa) {
            Some(violation) => Err(violation),
            None => Ok(dfa),
        }
    }
}
