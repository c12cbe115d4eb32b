use thiserror::Error;
use tracing::{debug, trace};

use crate::{validation, Show, Violation};

use super::{Dfa, StateId, Symbol, Transition};

/// A single change that an editing surface may propose for a [`Dfa`].
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Edit {
    /// Declares a new state.
    AddState(StateId),
    /// Removes a state together with all transitions touching it.
    RemoveState(StateId),
    /// Adds a symbol to the alphabet.
    AddSymbol(Symbol),
    /// Removes a symbol together with all transitions labelled with it.
    RemoveSymbol(Symbol),
    /// Appends a transition.
    AddTransition(Transition),
    /// Removes the transition at the given position.
    RemoveTransition(usize),
    /// Makes an accepting state rejecting and vice versa.
    ToggleAccepting(StateId),
}

/// The reasons for which an [`Edit`] can be refused.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[allow(missing_docs)]
pub enum EditError {
    #[error("Names of states and symbols must not be empty")]
    EmptyName,
    #[error("State '{0}' already exists")]
    StateExists(StateId),
    #[error("State '{0}' does not exist")]
    NoSuchState(StateId),
    #[error("Cannot remove the initial state")]
    RemovesInitial,
    #[error("Symbol '{0}' already exists in the alphabet")]
    SymbolExists(Symbol),
    #[error("Symbol '{0}' is not in the alphabet")]
    NoSuchSymbol(Symbol),
    #[error("All transition fields are required")]
    IncompleteTransition,
    #[error("Transition from '{from}' with symbol '{symbol}' already exists")]
    TransitionExists { from: StateId, symbol: Symbol },
    #[error("There is no transition at position {0}")]
    NoSuchTransition(usize),
    #[error("{0}")]
    Invalid(Violation),
}

impl Dfa {
    /// Applies `edit` to a copy of `self` and returns the copy, provided that the edit makes sense
    /// and that the resulting automaton passes validation. `self` is left untouched in any case.
    pub fn apply(&self, edit: Edit) -> Result<Dfa, EditError> {
        trace!("applying {edit:?}");
        let edited = self.edited(edit).inspect_err(|e| debug!("refused edit: {e}"))?;
        if let Some(violation) = validation::first_violation(&edited) {
            debug!("edit leads to invalid automaton: {violation}");
            return Err(EditError::Invalid(violation));
        }
        Ok(edited)
    }

    /// Applies all edits in order, stopping at the first one that is refused.
    pub fn apply_all<I: IntoIterator<Item = Edit>>(&self, edits: I) -> Result<Dfa, EditError> {
        edits
            .into_iter()
            .try_fold(self.clone(), |dfa, edit| dfa.apply(edit))
    }

    fn edited(&self, edit: Edit) -> Result<Dfa, EditError> {
        let mut next = self.clone();
        match edit {
            Edit::AddState(state) => {
                let state = non_blank(state)?;
                if self.has_state(&state) {
                    return Err(EditError::StateExists(state));
                }
                next.states.push(state);
            }
            Edit::RemoveState(state) => {
                if state == self.initial_state {
                    return Err(EditError::RemovesInitial);
                }
                if !self.has_state(&state) {
                    return Err(EditError::NoSuchState(state));
                }
                next.states.retain(|q| *q != state);
                next.accepting_states.retain(|q| *q != state);
                next.transitions
                    .retain(|t| t.from != state && t.to != state);
            }
            Edit::AddSymbol(symbol) => {
                let symbol = non_blank(symbol)?;
                if self.has_symbol(&symbol) {
                    return Err(EditError::SymbolExists(symbol));
                }
                next.alphabet.push(symbol);
            }
            Edit::RemoveSymbol(symbol) => {
                if !self.has_symbol(&symbol) {
                    return Err(EditError::NoSuchSymbol(symbol));
                }
                next.alphabet.retain(|a| *a != symbol);
                next.transitions.retain(|t| t.symbol != symbol);
            }
            Edit::AddTransition(transition) => {
                if [&transition.from, &transition.symbol, &transition.to]
                    .iter()
                    .any(|field| field.trim().is_empty())
                {
                    return Err(EditError::IncompleteTransition);
                }
                if self.transition(&transition.from, &transition.symbol).is_some() {
                    return Err(EditError::TransitionExists {
                        from: transition.from,
                        symbol: transition.symbol,
                    });
                }
                trace!("adding transition {}", transition.show());
                next.transitions.push(transition);
            }
            Edit::RemoveTransition(index) => {
                if index >= self.transitions.len() {
                    return Err(EditError::NoSuchTransition(index));
                }
                next.transitions.remove(index);
            }
            Edit::ToggleAccepting(state) => {
                if !self.has_state(&state) {
                    return Err(EditError::NoSuchState(state));
                }
                if self.is_accepting(&state) {
                    next.accepting_states.retain(|q| *q != state);
                } else {
                    next.accepting_states.push(state);
                }
            }
        }
        Ok(next)
    }
}

fn non_blank(name: String) -> Result<String, EditError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        Err(EditError::EmptyName)
    } else {
        Ok(trimmed.to_string())
    }
}
