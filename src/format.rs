//! The line oriented text format in which automata are usually exchanged. A definition consists
//! of four sections followed by a list of transitions, keywords are accepted in Portuguese as well
//! as in English:
//! ```text
//! Alfabeto Σ = { a, b }
//!
//! Estados Q = { s0, s1 }
//!
//! Estado inicial q0 = s0
//! Estado(s) aceitador(es) F = { s1 }
//!
//! Transições (formato s:e>s'):
//! s0:a>s1, s1:b>s0
//! ```
//! The sections may appear in any order, except for the transitions which must come last. Every
//! non-blank line following the transitions header is treated as a comma separated list of
//! transitions of the form `from:symbol>to`.
use thiserror::Error;

use crate::Violation;

mod line;
pub use line::Section;

mod input;
pub use input::parse;

mod output;

/// Abstracts the types of errors that can occur when parsing a [`crate::Dfa`] from a string.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FormatError {
    /// No line introduces the given section.
    #[error("{0} definition not found")]
    MissingSection(Section),
    /// The line of a section does not contain a `{ ... }` list.
    #[error("Invalid {} format: `{line}`", .section.noun())]
    MalformedList {
        /// The section whose list is malformed.
        section: Section,
        /// The offending line.
        line: String,
    },
    /// The initial state line has no identifier after `=`.
    #[error("Invalid initial state format: `{line}`")]
    MissingValue {
        /// The offending line.
        line: String,
    },
    /// A transition token is not of the form `from:symbol>to`.
    #[error("Invalid transition format: {0}")]
    MalformedTransition(String),
    /// The definition is well formed but describes an automaton that violates an invariant.
    #[error("{0}")]
    Invalid(Violation),
    /// A JSON payload could not be deserialized.
    #[error("Invalid JSON definition: {0}")]
    Json(String),
}

impl From<Violation> for FormatError {
    fn from(value: Violation) -> Self {
        FormatError::Invalid(value)
    }
}
