use std::fmt::Display;

use itertools::Itertools;
use tracing::{debug, trace};

use crate::Dfa;

use super::{shortest_path, OracleConfig};

/// The ways in which [`Oracle::rejected`] attempts to build a rejected word.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum RejectionStrategy {
    /// A few random alphabet symbols followed by a character that is not in the alphabet.
    InvalidSymbol,
    /// A shortest word leading to a random rejecting state, extended by a symbol that has no
    /// transition from there if the state has any outgoing transitions at all.
    DeadEnd,
    /// A long random word over the alphabet, kept only if the automaton rejects it.
    LongRandom,
}

impl RejectionStrategy {
    /// All strategies.
    pub const ALL: [RejectionStrategy; 3] = [
        RejectionStrategy::InvalidSymbol,
        RejectionStrategy::DeadEnd,
        RejectionStrategy::LongRandom,
    ];
}

impl Display for RejectionStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            RejectionStrategy::InvalidSymbol => "invalid symbol",
            RejectionStrategy::DeadEnd => "dead end",
            RejectionStrategy::LongRandom => "long random word",
        };
        write!(f, "{name}")
    }
}

/// Generates words that a given [`Dfa`] accepts or rejects. The oracle owns its source of randomness,
/// use [`Oracle::with_seed`] to obtain reproducible words. Every method performs a bounded amount of
/// work and always terminates.
#[derive(Debug, Clone)]
pub struct Oracle<'a> {
    dfa: &'a Dfa,
    config: OracleConfig,
    rng: fastrand::Rng,
}

impl<'a> Oracle<'a> {
    /// Creates an oracle for `dfa` with the default configuration and a randomly seeded generator.
    pub fn new(dfa: &'a Dfa) -> Self {
        Self {
            dfa,
            config: OracleConfig::default(),
            rng: fastrand::Rng::new(),
        }
    }

    /// Creates an oracle whose generator is seeded with `seed`.
    pub fn with_seed(dfa: &'a Dfa, seed: u64) -> Self {
        Self {
            rng: fastrand::Rng::with_seed(seed),
            ..Self::new(dfa)
        }
    }

    /// Replaces the configuration.
    pub fn with_config(self, config: OracleConfig) -> Self {
        Self { config, ..self }
    }

    /// Produces a word that is accepted. First, a bounded number of random walks from the initial
    /// state is attempted, each stopping as soon as an accepting state is reached. If none of them
    /// succeeds, the first non-empty shortest path to one of the accepting states is returned.
    ///
    /// The empty word is returned if there are no accepting states, if none of them is reachable or
    /// if the initial state itself is accepting.
    pub fn accepted(&mut self) -> String {
        let dfa = self.dfa;
        if dfa.accepting_states().is_empty() {
            debug!("no accepting states, cannot produce an accepted word");
            return String::new();
        }

        for attempt in 0..self.config.walks {
            if let Some(word) = self.random_walk() {
                trace!("random walk {attempt} reached acceptance with \"{word}\"");
                return word;
            }
        }

        debug!("random walks failed, falling back to shortest paths");
        dfa.accepting_states()
            .iter()
            .find_map(|target| {
                shortest_path(dfa, dfa.initial_state(), target).filter(|word| !word.is_empty())
            })
            .unwrap_or_default()
    }

    /// Produces a word that is rejected. The [`RejectionStrategy`]s are tried in a random order and
    /// the first non-empty word one of them produces is returned. If all of them fail, the filler
    /// symbol is repeated (which is likely, but not guaranteed, to be rejected) or, for an empty
    /// alphabet, the last resort word is returned.
    pub fn rejected(&mut self) -> String {
        let mut strategies = RejectionStrategy::ALL;
        self.rng.shuffle(&mut strategies);

        for strategy in strategies {
            if let Some(word) = self.attempt(strategy) {
                trace!("{strategy} strategy produced \"{word}\"");
                return word;
            }
            trace!("{strategy} strategy failed");
        }

        debug!("all rejection strategies failed, using fallback");
        if self.dfa.alphabet().is_empty() {
            self.config.last_resort.clone()
        } else {
            std::iter::repeat(self.config.filler)
                .take(self.config.filler_repeat)
                .collect()
        }
    }

    /// Runs a single rejection strategy. An empty word counts as a failure.
    pub fn attempt(&mut self, strategy: RejectionStrategy) -> Option<String> {
        match strategy {
            RejectionStrategy::InvalidSymbol => self.invalid_symbol(),
            RejectionStrategy::DeadEnd => self.dead_end(),
            RejectionStrategy::LongRandom => self.long_random(),
        }
        .filter(|word| !word.is_empty())
    }

    fn random_walk(&mut self) -> Option<String> {
        let dfa = self.dfa;
        let mut current = dfa.initial_state();
        let mut word = String::new();
        let mut length = 0;

        while !dfa.is_accepting(current) && length < self.config.walk_length {
            let Some(t) = self.rng.choice(dfa.transitions_from(current).collect_vec()) else {
                break;
            };
            word.push_str(&t.symbol);
            length += 1;
            current = &t.to;
        }

        dfa.is_accepting(current).then_some(word)
    }

    fn invalid_symbol(&mut self) -> Option<String> {
        let dfa = self.dfa;
        if dfa.alphabet().is_empty() {
            return None;
        }

        let invalid = self
            .config
            .invalid_universe
            .chars()
            .filter(|c| !dfa.has_symbol(&c.to_string()))
            .collect_vec();
        let symbol = self.rng.choice(invalid)?;

        let range = self.config.invalid_prefix.clone();
        let length = if range.is_empty() {
            *range.start()
        } else {
            self.rng.usize(range)
        };
        let mut word = self.random_symbols(length);
        word.push(symbol);
        Some(word)
    }

    fn dead_end(&mut self) -> Option<String> {
        let dfa = self.dfa;
        let rejecting = dfa
            .states()
            .iter()
            .filter(|q| !dfa.is_accepting(q))
            .collect_vec();
        let target = self.rng.choice(rejecting)?;
        let path = shortest_path(dfa, dfa.initial_state(), target)?;

        if dfa.transitions_from(target).next().is_none() {
            return Some(path);
        }

        let symbol = self.rng.choice(dfa.undefined_symbols(target).collect_vec())?;
        Some(path + symbol)
    }

    fn long_random(&mut self) -> Option<String> {
        let dfa = self.dfa;
        if dfa.alphabet().is_empty() {
            return None;
        }

        let range = self.config.long_word.clone();
        let length = if range.is_empty() {
            range.start
        } else {
            self.rng.usize(range)
        };
        let word = self.random_symbols(length);
        (!dfa.accepts(&word)).then_some(word)
    }

    fn random_symbols(&mut self, length: usize) -> String {
        let alphabet = self.dfa.alphabet();
        if alphabet.is_empty() {
            return String::new();
        }
        (0..length)
            .map(|_| alphabet[self.rng.usize(..alphabet.len())].as_str())
            .collect()
    }
}

/// Produces a word that `dfa` accepts, see [`Oracle::accepted`].
pub fn generate_accepted(dfa: &Dfa) -> String {
    Oracle::new(dfa).accepted()
}

/// Produces a word that `dfa` (most likely) rejects, see [`Oracle::rejected`].
pub fn generate_rejected(dfa: &Dfa) -> String {
    Oracle::new(dfa).rejected()
}
