use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::trace;

use crate::{Dfa, Set, StateId, Symbol};

/// A failure of one of the structural invariants of a [`Dfa`]. Violations are data, callers decide
/// whether they are fatal (e.g. refusing an edit) or merely worth a warning.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Error, Serialize, Deserialize)]
pub enum Violation {
    /// The initial state is not among the states.
    #[error("Initial state '{0}' is not in the set of states")]
    UnknownInitialState(StateId),
    /// An accepting state is not among the states.
    #[error("Accepting state '{0}' is not in the set of states")]
    UnknownAcceptingState(StateId),
    /// A transition leaves a state that is not declared.
    #[error("Transition from state '{0}' which is not defined")]
    UnknownSource(StateId),
    /// A transition leads to a state that is not declared.
    #[error("Transition to state '{0}' which is not defined")]
    UnknownTarget(StateId),
    /// A transition is labelled with a symbol outside of the alphabet.
    #[error("Transition symbol '{0}' is not in the alphabet")]
    UnknownSymbol(Symbol),
    /// Two or more transitions share the same origin and symbol.
    #[error("Multiple transitions from state '{state}' with symbol '{symbol}'")]
    Nondeterministic {
        /// The origin shared by the transitions.
        state: StateId,
        /// The symbol shared by the transitions.
        symbol: Symbol,
    },
    /// A state is declared more than once.
    #[error("State '{0}' is declared more than once")]
    DuplicateState(StateId),
    /// A symbol appears more than once in the alphabet.
    #[error("Symbol '{0}' appears more than once in the alphabet")]
    DuplicateSymbol(Symbol),
}

/// Checks all invariants of `dfa` and returns every violation that was found, an empty list means
/// that `dfa` is valid. The checks are performed in a fixed order: the initial state, the accepting
/// states, the endpoints and symbol of each transition, determinism and finally uniqueness of states
/// and symbols.
pub fn validate(dfa: &Dfa) -> Vec<Violation> {
    let mut violations = vec![];

    if !dfa.has_state(dfa.initial_state()) {
        violations.push(Violation::UnknownInitialState(
            dfa.initial_state().to_string(),
        ));
    }

    for state in dfa.accepting_states() {
        if !dfa.has_state(state) {
            violations.push(Violation::UnknownAcceptingState(state.clone()));
        }
    }

    for t in dfa.transitions() {
        if !dfa.has_state(&t.from) {
            violations.push(Violation::UnknownSource(t.from.clone()));
        }
        if !dfa.has_state(&t.to) {
            violations.push(Violation::UnknownTarget(t.to.clone()));
        }
        if !dfa.has_symbol(&t.symbol) {
            violations.push(Violation::UnknownSymbol(t.symbol.clone()));
        }
    }

    let mut seen = Set::default();
    let mut reported = Set::default();
    for t in dfa.transitions() {
        let key = (t.from.as_str(), t.symbol.as_str());
        if !seen.insert(key) && reported.insert(key) {
            violations.push(Violation::Nondeterministic {
                state: t.from.clone(),
                symbol: t.symbol.clone(),
            });
        }
    }

    violations.extend(duplicates(dfa.states()).map(Violation::DuplicateState));
    violations.extend(duplicates(dfa.alphabet()).map(Violation::DuplicateSymbol));

    trace!("validation found {} violations", violations.len());
    violations
}

/// Returns the first violation that [`validate`] would report, if any.
pub fn first_violation(dfa: &Dfa) -> Option<Violation> {
    validate(dfa).into_iter().next()
}

fn duplicates(names: &[String]) -> impl Iterator<Item = String> + '_ {
    let mut seen = Set::default();
    let mut reported = Set::default();
    names
        .iter()
        .filter(move |name| !seen.insert(name.as_str()) && reported.insert(name.as_str()))
        .cloned()
}

impl Dfa {
    /// Shorthand for [`validate`].
    pub fn validate(&self) -> Vec<Violation> {
        validate(self)
    }

    /// Returns true if [`validate`] finds no violations.
    pub fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{canonical_dfa, contains_aa};

    #[test]
    fn valid_automata() {
        assert!(canonical_dfa().is_valid());
        assert!(contains_aa().is_valid());
    }

    #[test]
    fn unknown_identifiers() {
        let dfa = Dfa::builder()
            .with_alphabet(["a"])
            .with_states(["s0"])
            .with_initial("q")
            .with_accepting(["f"])
            .with_transitions([("x", "a", "s0"), ("s0", "c", "y")])
            .build_unchecked();

        assert_eq!(
            validate(&dfa),
            vec![
                Violation::UnknownInitialState("q".into()),
                Violation::UnknownAcceptingState("f".into()),
                Violation::UnknownSource("x".into()),
                Violation::UnknownTarget("y".into()),
                Violation::UnknownSymbol("c".into()),
            ]
        );
        assert_eq!(
            first_violation(&dfa).unwrap().to_string(),
            "Initial state 'q' is not in the set of states"
        );
    }

    #[test]
    fn nondeterminism_is_reported_per_pair() {
        let dfa = Dfa::builder()
            .with_alphabet(["a"])
            .with_states(["s0", "s1", "s2"])
            .with_transitions([
                ("s0", "a", "s1"),
                ("s0", "a", "s2"),
                ("s0", "a", "s0"),
            ])
            .build_unchecked();

        let violations = validate(&dfa);
        assert_eq!(
            violations,
            vec![Violation::Nondeterministic {
                state: "s0".into(),
                symbol: "a".into()
            }]
        );
        let message = violations[0].to_string();
        assert!(message.contains("s0") && message.contains("'a'"));
        assert!(message.starts_with("Multiple transitions"));
    }

    #[test]
    fn duplicates_are_reported_once() {
        let dfa = Dfa::builder()
            .with_alphabet(["a", "a", "a"])
            .with_states(["s0", "s0"])
            .build_unchecked();
        assert_eq!(
            validate(&dfa),
            vec![
                Violation::DuplicateState("s0".into()),
                Violation::DuplicateSymbol("a".into())
            ]
        );
    }
}
