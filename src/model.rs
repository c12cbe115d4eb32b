use serde::{Deserialize, Serialize};

use crate::{format::FormatError, validation, Show};

mod builder;
pub use builder::DfaBuilder;

mod edit;
pub use edit::{Edit, EditError};

/// Identifies a state. Identifiers are opaque, case sensitive and non-empty.
pub type StateId = String;
/// A symbol of the alphabet. Conventionally a single character, but the length is not enforced.
pub type Symbol = String;

/// A single mapping from a state and a symbol to a successor state.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    /// The origin of the transition.
    pub from: StateId,
    /// The symbol on which the transition is taken.
    pub symbol: Symbol,
    /// The target of the transition.
    pub to: StateId,
}

impl Transition {
    /// Creates a new transition from `from` to `to` on `symbol`.
    pub fn new(from: impl Into<StateId>, symbol: impl Into<Symbol>, to: impl Into<StateId>) -> Self {
        Self {
            from: from.into(),
            symbol: symbol.into(),
            to: to.into(),
        }
    }
}

impl<F: Into<StateId>, S: Into<Symbol>, T: Into<StateId>> From<(F, S, T)> for Transition {
    fn from((from, symbol, to): (F, S, T)) -> Self {
        Transition::new(from, symbol, to)
    }
}

impl Show for Transition {
    fn show(&self) -> String {
        format!("{}:{}>{}", self.from, self.symbol, self.to)
    }
}

/// A deterministic finite automaton. All sequences keep the order in which their elements were
/// given, which is also the order used for display and for breaking ties in searches.
///
/// A `Dfa` is a value: it is never changed in place. Use [`Dfa::apply`] to obtain an edited copy.
/// Whether the invariants hold is determined by [`crate::validate`], constructing a `Dfa` through
/// [`Dfa::new`] or [`DfaBuilder::build_unchecked`] does not check anything.
///
/// The struct serializes to a JSON object with keys `alphabet`, `states`, `initialState`,
/// `acceptingStates` and `transitions`.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dfa {
    alphabet: Vec<Symbol>,
    states: Vec<StateId>,
    initial_state: StateId,
    accepting_states: Vec<StateId>,
    transitions: Vec<Transition>,
}

impl Dfa {
    /// Assembles a `Dfa` from its components without validating them.
    pub fn new(
        alphabet: Vec<Symbol>,
        states: Vec<StateId>,
        initial_state: StateId,
        accepting_states: Vec<StateId>,
        transitions: Vec<Transition>,
    ) -> Self {
        Self {
            alphabet,
            states,
            initial_state,
            accepting_states,
            transitions,
        }
    }

    /// Returns a [`DfaBuilder`] without any states, symbols or transitions.
    pub fn builder() -> DfaBuilder {
        DfaBuilder::default()
    }

    /// The symbols of the alphabet, in insertion order.
    pub fn alphabet(&self) -> &[Symbol] {
        &self.alphabet
    }

    /// All states, in insertion order.
    pub fn states(&self) -> &[StateId] {
        &self.states
    }

    /// The designated initial state.
    pub fn initial_state(&self) -> &str {
        &self.initial_state
    }

    /// The accepting states, in insertion order. May be empty.
    pub fn accepting_states(&self) -> &[StateId] {
        &self.accepting_states
    }

    /// All transitions, in declaration order.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// Returns true if and only if `state` is one of the accepting states.
    pub fn is_accepting(&self, state: &str) -> bool {
        self.accepting_states.iter().any(|q| q == state)
    }

    /// Returns true if `state` is declared.
    pub fn has_state(&self, state: &str) -> bool {
        self.states.iter().any(|q| q == state)
    }

    /// Returns true if `symbol` belongs to the alphabet.
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.alphabet.iter().any(|a| a == symbol)
    }

    /// Iterates over the outgoing transitions of `state` in declaration order.
    pub fn transitions_from<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a Transition> {
        self.transitions.iter().filter(move |t| t.from == state)
    }

    /// Looks up the transition leaving `state` on `symbol`. If the automaton is not deterministic,
    /// the first matching transition is returned.
    pub fn transition(&self, state: &str, symbol: &str) -> Option<&Transition> {
        self.transitions
            .iter()
            .find(|t| t.from == state && t.symbol == symbol)
    }

    /// Returns the successor of `state` on `symbol`, if a transition is defined.
    pub fn successor(&self, state: &str, symbol: &str) -> Option<&str> {
        self.transition(state, symbol).map(|t| t.to.as_str())
    }

    /// Returns the symbols of the alphabet for which `state` has no outgoing transition.
    pub fn undefined_symbols<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a Symbol> {
        self.alphabet
            .iter()
            .filter(move |a| self.transition(state, a).is_none())
    }

    /// Serializes `self` into pretty printed JSON.
    pub fn to_json(&self) -> String {
        // serializing plain strings and vectors cannot fail
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Deserializes a `Dfa` from JSON and validates it. Fails with [`FormatError::Json`] if the
    /// payload is not a well formed definition and with [`FormatError::Invalid`] if it describes
    /// an automaton that violates one of the invariants.
    pub fn from_json(json: &str) -> Result<Self, FormatError> {
        let dfa: Dfa =
            serde_json::from_str(json).map_err(|e| FormatError::Json(e.to_string()))?;
        match validation::first_violation(&dfa) {
            Some(violation) => Err(FormatError::Invalid(violation)),
            None => Ok(dfa),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{prelude::*, tests::canonical_dfa};

    #[test]
    fn queries() {
        let dfa = canonical_dfa();
        assert!(dfa.is_accepting("s1"));
        assert!(!dfa.is_accepting("s0"));
        assert_eq!(dfa.successor("s0", "a"), Some("s1"));
        assert_eq!(dfa.successor("s0", "b"), None);
        assert_eq!(
            dfa.undefined_symbols("s0").collect::<Vec<_>>(),
            vec![&"b".to_string()]
        );
        assert_eq!(dfa.transitions_from("s1").count(), 1);
    }

    #[test]
    fn json_keys_and_order() {
        let dfa = canonical_dfa();
        let value: serde_json::Value = serde_json::from_str(&dfa.to_json()).unwrap();
        assert_eq!(value["initialState"], "s0");
        assert_eq!(value["acceptingStates"], serde_json::json!(["s1"]));
        assert_eq!(value["alphabet"], serde_json::json!(["a", "b"]));
        assert_eq!(
            value["transitions"][1],
            serde_json::json!({"from": "s1", "symbol": "b", "to": "s0"})
        );

        assert_eq!(Dfa::from_json(&dfa.to_json()), Ok(dfa));
    }

    #[test]
    fn json_rejects_invalid_payloads() {
        assert!(matches!(
            Dfa::from_json("{\"alphabet\": []}"),
            Err(FormatError::Json(_))
        ));

        let payload = r#"{
            "alphabet": ["a"],
            "states": ["s0"],
            "initialState": "s1",
            "acceptingStates": [],
            "transitions": []
        }"#;
        assert_eq!(
            Dfa::from_json(payload),
            Err(FormatError::Invalid(Violation::UnknownInitialState(
                "s1".to_string()
            )))
        );
    }
}
