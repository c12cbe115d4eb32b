use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{Dfa, Show, StateId};

mod playback;
pub use playback::Playback;

/// One entry of a simulation trace: the state the automaton is in after `position` symbols of
/// the input have been consumed.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// The state the automaton is in.
    pub current_state: StateId,
    /// The number of symbols consumed so far, `0` means before reading anything.
    pub position: usize,
}

impl Step {
    fn new(state: &str, position: usize) -> Self {
        Self {
            current_state: state.to_string(),
            position,
        }
    }
}

impl Show for Step {
    fn show(&self) -> String {
        format!("({}, {})", self.current_state, self.position)
    }
}

/// The outcome of [`simulate`], a trace of the visited states and the verdict.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct SimulationResult {
    /// The visited states, starting with the initial state at position `0`.
    pub steps: Vec<Step>,
    /// Whether the input is accepted.
    pub accepted: bool,
}

impl SimulationResult {
    /// The state in which the run ended. This is the state in which the automaton got stuck if
    /// it encountered an undefined transition.
    pub fn final_state(&self) -> &str {
        self.steps
            .last()
            .map(|step| step.current_state.as_str())
            .unwrap_or_default()
    }

    /// The number of steps that were recorded, which is one more than the number of symbols read.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Never true for a result produced by [`simulate`], whose trace contains at least the initial step.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Show for SimulationResult {
    fn show(&self) -> String {
        format!(
            "{} [{}]",
            self.steps.iter().map(|s| s.current_state.as_str()).join(" -> "),
            if self.accepted { "accepted" } else { "rejected" }
        )
    }
}

/// Runs `dfa` on `input`, reading it one `char` at a time from left to right. The trace starts with
/// the initial state at position `0` and gets one step for every symbol that is read. If a symbol has
/// no transition from the current state, a final step repeating the current state is recorded and
/// the input is rejected right away. Otherwise the input is accepted if and only if the run ends in
/// an accepting state.
///
/// A symbol outside the alphabet is treated just like a symbol for which no transition is defined.
pub fn simulate(dfa: &Dfa, input: &str) -> SimulationResult {
    let mut current = dfa.initial_state();
    let mut steps = vec![Step::new(current, 0)];
    let mut buf = [0u8; 4];

    for (i, sym) in input.chars().enumerate() {
        match dfa.successor(current, sym.encode_utf8(&mut buf)) {
            Some(next) => {
                current = next;
                steps.push(Step::new(current, i + 1));
            }
            None => {
                trace!("no transition from {current} on {sym}, rejecting");
                steps.push(Step::new(current, i + 1));
                return SimulationResult {
                    steps,
                    accepted: false,
                };
            }
        }
    }

    SimulationResult {
        steps,
        accepted: dfa.is_accepting(current),
    }
}

impl Dfa {
    /// Shorthand for [`simulate`].
    pub fn simulate(&self, input: &str) -> SimulationResult {
        simulate(self, input)
    }

    /// Returns true if `self` accepts `input`.
    pub fn accepts(&self, input: &str) -> bool {
        simulate(self, input).accepted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::{canonical_dfa, contains_aa, CANONICAL};

    fn trace(result: &SimulationResult) -> Vec<(&str, usize)> {
        result
            .steps
            .iter()
            .map(|s| (s.current_state.as_str(), s.position))
            .collect()
    }

    #[test]
    fn canonical_runs() {
        let dfa = crate::parse(CANONICAL).unwrap();

        let ab = simulate(&dfa, "ab");
        assert_eq!(trace(&ab), vec![("s0", 0), ("s1", 1), ("s0", 2)]);
        assert!(!ab.accepted);

        let a = simulate(&dfa, "a");
        assert_eq!(trace(&a), vec![("s0", 0), ("s1", 1)]);
        assert!(a.accepted);
        assert_eq!(a.final_state(), "s1");
    }

    #[test]
    fn empty_input() {
        let result = simulate(&canonical_dfa(), "");
        assert_eq!(trace(&result), vec![("s0", 0)]);
        assert!(!result.accepted);
    }

    #[test]
    fn undefined_transition_sticks() {
        let dfa = canonical_dfa();
        // s0 has no transition on b, the remaining input is never read
        let result = simulate(&dfa, "abbaa");
        assert_eq!(trace(&result), vec![("s0", 0), ("s1", 1), ("s0", 2), ("s0", 3)]);
        assert!(!result.accepted);

        // symbols outside of the alphabet behave the same
        let result = simulate(&dfa, "az");
        assert_eq!(trace(&result), vec![("s0", 0), ("s1", 1), ("s1", 2)]);
        assert!(!result.accepted);
    }

    #[test]
    fn trace_length_and_acceptance_consistency() {
        let dfa = contains_aa();
        for input in ["", "a", "ab", "aab", "babaa", "bbbbbbab", "abc", "cab"] {
            let result = simulate(&dfa, input);
            let mut expected = input.chars().count() + 1;
            let mut q = dfa.initial_state();
            for (i, c) in input.chars().enumerate() {
                match dfa.successor(q, &c.to_string()) {
                    Some(p) => q = p,
                    None => {
                        expected = i + 2;
                        break;
                    }
                }
            }
            assert_eq!(result.len(), expected, "trace length for {input}");
            if result.accepted {
                assert_eq!(result.len(), input.chars().count() + 1);
                assert!(dfa.is_accepting(result.final_state()));
                for (step, next) in result.steps.iter().tuple_windows() {
                    let sym = input.chars().nth(step.position).unwrap().to_string();
                    assert_eq!(
                        dfa.successor(&step.current_state, &sym),
                        Some(next.current_state.as_str())
                    );
                }
            }
        }
        assert_eq!(simulate(&dfa, "cab").len(), 2);
        assert_eq!(simulate(&dfa, "abc").len(), 4);
    }

    #[test]
    fn deterministic_replay() {
        let dfa = contains_aa();
        assert_eq!(simulate(&dfa, "abaab"), simulate(&dfa, "abaab"));
        assert!(dfa.accepts("abaab"));
    }

    #[test]
    fn show_trace() {
        assert_eq!(
            simulate(&canonical_dfa(), "ab").show(),
            "s0 -> s1 -> s0 [rejected]"
        );
        assert_eq!(
            serde_json::to_value(Step::new("s0", 0)).unwrap(),
            serde_json::json!({"currentState": "s0", "position": 0})
        );
    }
}
