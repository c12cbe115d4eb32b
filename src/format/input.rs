use std::str::FromStr;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::{validation, Dfa, Show, StateId, Symbol, Transition};

use super::{
    line::{assigned_word, brace_list, comma_separated, transition_parts},
    FormatError, Section,
};

/// The sections of a definition after they were located and parsed, but before they are assembled
/// into a [`Dfa`] and validated.
#[derive(Debug, Clone, Eq, PartialEq)]
struct Sections {
    alphabet: Vec<Symbol>,
    states: Vec<StateId>,
    initial: StateId,
    accepting: Vec<StateId>,
    transitions: Vec<Transition>,
}

impl Sections {
    fn read(lines: &[&str]) -> Result<Self, FormatError> {
        let line_of = |section: Section| {
            section
                .locate(lines)
                .ok_or(FormatError::MissingSection(section))
                .inspect(|i| trace!("found {} definition in line {}", section.noun(), i + 1))
        };
        let list_of = |section: Section| -> Result<Vec<String>, FormatError> {
            let line = lines[line_of(section)?];
            brace_list(line).ok_or_else(|| FormatError::MalformedList {
                section,
                line: line.to_string(),
            })
        };

        let alphabet = list_of(Section::Alphabet)?;
        let states = list_of(Section::States)?;

        let initial_line = lines[line_of(Section::Initial)?];
        let initial = assigned_word(initial_line)
            .ok_or_else(|| FormatError::MissingValue {
                line: initial_line.to_string(),
            })?
            .to_string();

        let accepting = list_of(Section::Accepting)?;

        let header = line_of(Section::Transitions)?;
        let transitions = transition_tokens(lines, header)
            .map(|token| {
                transition_parts(&token)
                    .map(|(from, symbol, to)| Transition::new(from, symbol, to))
                    .ok_or(FormatError::MalformedTransition(token))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            alphabet,
            states,
            initial,
            accepting,
            transitions,
        })
    }

    fn into_dfa(self) -> Dfa {
        Dfa::new(
            self.alphabet,
            self.states,
            self.initial,
            self.accepting,
            self.transitions,
        )
    }
}

/// Collects the transition tokens, which are all comma separated entries in the non-blank lines
/// after the header. If no such line exists, whatever follows `):` on the header itself is used.
fn transition_tokens(lines: &[&str], header: usize) -> impl Iterator<Item = String> {
    let mut text: String = lines[header + 1..]
        .iter()
        .filter(|line| !line.is_empty())
        .map(|line| format!("{line}, "))
        .collect();

    if text.trim().is_empty() {
        text = lines[header]
            .split_once("):")
            .map(|(_, rest)| rest.to_string())
            .unwrap_or_default();
    }

    comma_separated(&text).collect_vec().into_iter()
}

/// Parses a [`Dfa`] from its textual definition and validates it. Parsing is all or nothing, either
/// a valid automaton is returned or the first problem that was encountered, which is also the case
/// if the definition is well formed but the automaton it describes violates one of the invariants.
///
/// ```
/// use dfa_lab::prelude::*;
///
/// let dfa = parse("Alphabet = { a }
/// States = { s0 }
/// Initial state = s0
/// F = { s0 }
/// Transitions:
/// s0:a>s0").unwrap();
/// assert!(dfa.accepts("aaa"));
///
/// assert!(matches!(parse("Alfabeto = { a }"), Err(FormatError::MissingSection(_))));
/// ```
pub fn parse(text: &str) -> Result<Dfa, FormatError> {
    let lines = text.split('\n').map(str::trim).collect_vec();

    let dfa = Sections::read(&lines)
        .inspect_err(|e| debug!("could not parse definition: {e}"))?
        .into_dfa();

    if let Some(violation) = validation::first_violation(&dfa) {
        debug!("parsed definition is not a valid DFA: {violation}");
        return Err(FormatError::Invalid(violation));
    }

    trace!(
        "parsed DFA with states {} and transitions {}",
        dfa.states().show(),
        dfa.transitions().show()
    );
    Ok(dfa)
}

impl FromStr for Dfa {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
