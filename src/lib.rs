//! Library for defining, validating, simulating and probing deterministic finite automata.
//!
//! A [`Dfa`] is a plain value consisting of an alphabet, a list of states, a designated initial
//! state, a set of accepting states and a list of transitions. It is produced wholesale, either by
//! [`parse`]-ing the bilingual text format (see [`format`]), by deserializing JSON through
//! [`Dfa::from_json`] or by using the [`DfaBuilder`]. Once produced, a [`Dfa`] is never mutated in
//! place. Edits go through [`Dfa::apply`], which yields a new, fully validated automaton.
//!
//! The remaining functionality consumes such a snapshot:
//! - [`validate`] checks the structural invariants and determinism, returning a list of [`Violation`]s.
//! - [`simulate`] runs the automaton on an input and returns the full trace of visited states, which can
//!   be replayed with a [`Playback`].
//! - [`shortest_path`] searches the transition graph breadth first, and the [`oracle`] module builds on
//!   top of it to produce words that are accepted or rejected by an automaton.
//! - [`TestSuite`] runs a batch of inputs and summarizes the verdicts.
//!
//! Note that completeness is never required. A missing transition makes the automaton reject, it is
//! not an error.
#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use dfa_lab::prelude::*;` should be enough to use the package.
pub mod prelude {
    #[cfg(feature = "random")]
    pub use super::oracle::{
        generate_accepted, generate_rejected, Oracle, OracleConfig, RejectionStrategy,
    };
    pub use super::{
        format::{parse, FormatError, Section},
        model::{Dfa, DfaBuilder, Edit, EditError, StateId, Symbol, Transition},
        oracle::{shortest_path, MinimalRepresentatives},
        simulation::{simulate, Playback, SimulationResult, Step},
        suite::{SuiteReport, TestOutcome, TestSuite},
        validation::{first_violation, validate, Violation},
        Set, Show,
    };
}

/// Defines the automaton itself, its construction and the edits that can be applied to it.
pub mod model;
pub use model::{Dfa, DfaBuilder, Edit, EditError, StateId, Symbol, Transition};

/// Reading and writing the line oriented text format.
pub mod format;
pub use format::{parse, FormatError};

/// Structural well-formedness and determinism checks.
pub mod validation;
pub use validation::{validate, Violation};

/// Step by step simulation of an automaton on an input.
pub mod simulation;
pub use simulation::{simulate, Playback, SimulationResult, Step};

/// Shortest paths and generation of accepted or rejected words.
pub mod oracle;
pub use oracle::shortest_path;
#[cfg(feature = "random")]
pub use oracle::{generate_accepted, generate_rejected};

/// Running a batch of inputs against an automaton.
pub mod suite;
pub use suite::TestSuite;

use itertools::Itertools;

/// Helper trait which can be used to display states, transitions and such.
pub trait Show {
    /// Returns a compact human readable representation of `self`, for a transition from `s0` to `s1`
    /// on `a` that is `s0:a>s1`, for a simulation step it is the state together with the position.
    /// This is mainly used for logging and debugging purposes.
    fn show(&self) -> String;
    /// Show a collection of the thing. By default the individual elements are shown, separated
    /// by commas and wrapped in braces.
    fn show_collection<'a, I>(iter: I) -> String
    where
        Self: 'a,
        I: IntoIterator<Item = &'a Self>,
    {
        format!("{{{}}}", iter.into_iter().map(|x| x.show()).join(", "))
    }
}

impl Show for String {
    fn show(&self) -> String {
        self.clone()
    }
}

impl Show for bool {
    fn show(&self) -> String {
        match self {
            true => "+",
            false => "-",
        }
        .to_string()
    }
}

impl<S: Show> Show for [S] {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show> Show for Vec<S> {
    fn show(&self) -> String {
        S::show_collection(self.iter())
    }
}

impl<S: Show, T: Show> Show for (S, T) {
    fn show(&self) -> String {
        format!("({}, {})", self.0.show(), self.1.show())
    }
}

impl<S: Show + ?Sized> Show for &S {
    fn show(&self) -> String {
        S::show(*self)
    }
}

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;

#[cfg(test)]
pub(crate) mod tests {
    use crate::prelude::*;

    /// The definition that the exporter produces for [`canonical_dfa`].
    pub const CANONICAL: &str = "Alfabeto Σ = { a, b }

Estados Q = { s0, s1 }

Estado inicial q0 = s0
Estado(s) aceitador(es) F = { s1 }

Transições (formato s:e>s'):
s0:a>s1, s1:b>s0";

    pub fn canonical_dfa() -> Dfa {
        Dfa::builder()
            .with_alphabet(["a", "b"])
            .with_states(["s0", "s1"])
            .with_initial("s0")
            .with_accepting(["s1"])
            .with_transitions([("s0", "a", "s1"), ("s1", "b", "s0")])
            .build_unchecked()
    }

    /// Accepts all words over `{a, b}` that contain `aa` as an infix, `s2` is a sink.
    pub fn contains_aa() -> Dfa {
        Dfa::builder()
            .with_alphabet(["a", "b"])
            .with_states(["s0", "s1", "s2"])
            .with_initial("s0")
            .with_accepting(["s2"])
            .with_transitions([
                ("s0", "a", "s1"),
                ("s0", "b", "s0"),
                ("s1", "a", "s2"),
                ("s1", "b", "s0"),
                ("s2", "a", "s2"),
                ("s2", "b", "s2"),
            ])
            .build_unchecked()
    }

    #[test]
    fn show_collections() {
        let dfa = canonical_dfa();
        assert_eq!(dfa.transitions().show(), "{s0:a>s1, s1:b>s0}");
        assert_eq!(vec![true, false].show(), "{+, -}");
        assert_eq!(("s0".to_string(), true).show(), "(s0, +)");
    }
}
