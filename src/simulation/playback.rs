use crate::{Dfa, Transition};

use super::{SimulationResult, Step};

/// Replays the trace of a single simulation. The trace is computed once and never changes, the
/// playback merely moves an index over it, which allows stepping forward and backward or jumping to
/// an arbitrary step. Timing, e.g. automatically advancing, is left to the caller.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Playback {
    input: Vec<char>,
    result: SimulationResult,
    index: usize,
}

impl Playback {
    /// Creates a new playback positioned at the first step of `result`, which must have been
    /// obtained by simulating `input`.
    pub fn new(input: &str, result: SimulationResult) -> Self {
        Self {
            input: input.chars().collect(),
            result,
            index: 0,
        }
    }

    /// Simulates `dfa` on `input` and creates a playback for the trace.
    pub fn simulate(dfa: &Dfa, input: &str) -> Self {
        Self::new(input, super::simulate(dfa, input))
    }

    /// The underlying simulation result.
    pub fn result(&self) -> &SimulationResult {
        &self.result
    }

    /// The index of the current step.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The current step, `None` only if the trace is empty.
    pub fn current(&self) -> Option<&Step> {
        self.result.steps.get(self.index)
    }

    /// Moves to the next step, returns `false` if the last step was already reached.
    pub fn step_forward(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        self.index += 1;
        true
    }

    /// Moves to the previous step, returns `false` if the playback is at the first step.
    pub fn step_back(&mut self) -> bool {
        if self.index == 0 {
            return false;
        }
        self.index -= 1;
        true
    }

    /// Jumps to step `index`, which is clamped to the last step.
    pub fn seek(&mut self, index: usize) {
        self.index = index.min(self.last_index());
    }

    /// Jumps back to the initial step.
    pub fn rewind(&mut self) {
        self.index = 0;
    }

    /// Jumps to the last step.
    pub fn finish(&mut self) {
        self.index = self.last_index();
    }

    /// Returns true if the current step is the last one.
    pub fn is_finished(&self) -> bool {
        self.index == self.last_index()
    }

    /// The part of the input that has been read up to the current step.
    pub fn consumed(&self) -> String {
        self.input[..self.position()].iter().collect()
    }

    /// The part of the input that remains to be read after the current step.
    pub fn remaining(&self) -> String {
        self.input[self.position()..].iter().collect()
    }

    /// The transition that leads from the current step to the next one. There is none if the
    /// playback is finished or if the next step was recorded because no transition was defined.
    pub fn active_transition<'a>(&self, dfa: &'a Dfa) -> Option<&'a Transition> {
        let next = self.result.steps.get(self.index + 1)?;
        let current = self.current()?;
        let symbol = self.input.get(current.position)?.to_string();
        dfa.transitions().iter().find(|t| {
            t.from == current.current_state && t.to == next.current_state && t.symbol == symbol
        })
    }

    fn position(&self) -> usize {
        self.current()
            .map_or(0, |step| step.position)
            .min(self.input.len())
    }

    fn last_index(&self) -> usize {
        self.result.steps.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use crate::{prelude::*, tests::canonical_dfa};

    #[test]
    fn navigation() {
        let dfa = canonical_dfa();
        let mut playback = Playback::simulate(&dfa, "ab");

        assert_eq!(playback.current().unwrap().current_state, "s0");
        assert!(!playback.step_back());
        assert_eq!(
            playback.active_transition(&dfa),
            Some(&Transition::new("s0", "a", "s1"))
        );

        assert!(playback.step_forward());
        assert_eq!(playback.consumed(), "a");
        assert_eq!(playback.remaining(), "b");
        assert_eq!(
            playback.active_transition(&dfa),
            Some(&Transition::new("s1", "b", "s0"))
        );

        assert!(playback.step_forward());
        assert!(playback.is_finished());
        assert!(!playback.step_forward());
        assert_eq!(playback.active_transition(&dfa), None);

        playback.rewind();
        assert_eq!(playback.index(), 0);
        playback.seek(17);
        assert_eq!(playback.index(), 2);
        playback.seek(1);
        assert_eq!(playback.current().unwrap().current_state, "s1");
        playback.finish();
        assert_eq!(playback.consumed(), "ab");
    }

    #[test]
    fn stuck_step_has_no_active_transition() {
        let dfa = canonical_dfa();
        let mut playback = Playback::simulate(&dfa, "b");
        assert_eq!(playback.result().steps.len(), 2);
        assert_eq!(playback.active_transition(&dfa), None);
        playback.finish();
        assert_eq!(playback.current().unwrap().current_state, "s0");
        assert!(!playback.result().accepted);
    }

    #[test]
    fn empty_trace() {
        let dfa = canonical_dfa();
        let empty = SimulationResult {
            steps: vec![],
            accepted: false,
        };
        let mut playback = Playback::new("ab", empty);
        assert_eq!(playback.current(), None);
        assert!(playback.is_finished());
        assert!(!playback.step_forward());
        assert!(!playback.step_back());
        playback.seek(3);
        assert_eq!(playback.index(), 0);
        assert_eq!(playback.consumed(), "");
        assert_eq!(playback.remaining(), "ab");
        assert_eq!(playback.active_transition(&dfa), None);
    }
}
