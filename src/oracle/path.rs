use std::collections::VecDeque;

use crate::{Dfa, Set};

/// Type alias for a minimal representative of a state, which is the first shortest word that leads
/// to it from the origin, together with the state itself.
pub type MinimalRepresentative<'a> = (String, &'a str);

/// Iterates over the states reachable from some origin in breadth first order, yielding each state
/// together with its minimal representative. Successors are explored in the order in which the
/// transitions are declared, so among several shortest words the one using earlier transitions wins.
#[derive(Debug, Clone)]
pub struct MinimalRepresentatives<'a> {
    dfa: &'a Dfa,
    seen: Set<&'a str>,
    queue: VecDeque<MinimalRepresentative<'a>>,
}

impl<'a> MinimalRepresentatives<'a> {
    /// Starts the search in `origin`, which is yielded first with the empty word.
    pub fn new(dfa: &'a Dfa, origin: &'a str) -> Self {
        let seen = Set::from_iter([origin]);
        let queue = [(String::new(), origin)].into_iter().collect();
        Self { dfa, seen, queue }
    }
}

impl<'a> Iterator for MinimalRepresentatives<'a> {
    type Item = MinimalRepresentative<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let dfa = self.dfa;
        let (access, q) = self.queue.pop_front()?;
        for t in dfa.transitions_from(q) {
            if self.seen.insert(t.to.as_str()) {
                self.queue
                    .push_back((format!("{access}{}", t.symbol), t.to.as_str()));
            }
        }
        Some((access, q))
    }
}

/// Finds the shortest word leading from `start` to `target`. Returns `Some("")` if both coincide
/// and `None` if `target` is not reachable from `start` or if either of them is not a state of `dfa`.
pub fn shortest_path(dfa: &Dfa, start: &str, target: &str) -> Option<String> {
    if !dfa.has_state(start) || !dfa.has_state(target) {
        return None;
    }
    MinimalRepresentatives::new(dfa, start)
        .find(|(_, q)| *q == target)
        .map(|(word, _)| word)
}

impl Dfa {
    /// Iterates over the states reachable from the initial state, see [`MinimalRepresentatives`].
    pub fn minimal_representatives(&self) -> MinimalRepresentatives<'_> {
        MinimalRepresentatives::new(self, self.initial_state())
    }

    /// Iterates over the states reachable from the initial state in breadth first order.
    pub fn reachable_states(&self) -> impl Iterator<Item = &str> + '_ {
        self.minimal_representatives().map(|(_, q)| q)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::{
        prelude::*,
        tests::{canonical_dfa, contains_aa, CANONICAL},
    };

    #[test]
    fn canonical_paths() {
        let dfa = parse(CANONICAL).unwrap();
        assert_eq!(shortest_path(&dfa, "s0", "s1"), Some("a".to_string()));
        assert_eq!(shortest_path(&dfa, "s1", "s0"), Some("b".to_string()));
        assert_eq!(shortest_path(&dfa, "s0", "s0"), Some(String::new()));
    }

    #[test]
    fn unreachable_targets() {
        let dfa = Dfa::builder()
            .with_alphabet(["a"])
            .with_states(["s0", "s1", "s2"])
            .with_transitions([("s0", "a", "s1"), ("s2", "a", "s0")])
            .build()
            .unwrap();
        assert_eq!(shortest_path(&dfa, "s0", "s2"), None);
        assert_eq!(shortest_path(&dfa, "s1", "s0"), None);
        assert_eq!(shortest_path(&dfa, "s2", "s1"), Some("aa".to_string()));
        assert_eq!(dfa.reachable_states().collect_vec(), vec!["s0", "s1"]);
    }

    #[test]
    fn undeclared_states_have_no_path() {
        let dfa = contains_aa();
        assert_eq!(shortest_path(&dfa, "nope", "nope"), None);
        assert_eq!(shortest_path(&dfa, "nope", "s0"), None);
        assert_eq!(shortest_path(&dfa, "s0", "nope"), None);
    }

    #[test]
    fn ties_follow_declaration_order() {
        let dfa = Dfa::builder()
            .with_alphabet(["a", "b"])
            .with_states(["p", "q"])
            .with_transitions([("p", "b", "q"), ("p", "a", "q")])
            .build()
            .unwrap();
        assert_eq!(shortest_path(&dfa, "p", "q"), Some("b".to_string()));
    }

    #[test]
    fn minimal_representatives() {
        assert_eq!(
            contains_aa().minimal_representatives().collect_vec(),
            vec![
                (String::new(), "s0"),
                ("a".to_string(), "s1"),
                ("aa".to_string(), "s2")
            ]
        );
        assert_eq!(
            canonical_dfa().reachable_states().collect_vec(),
            vec!["s0", "s1"]
        );
    }
}
