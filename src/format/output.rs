use std::fmt::Display;

use itertools::Itertools;

use crate::{Dfa, Show};

impl Dfa {
    /// Writes `self` in the (Portuguese) text format, which [`super::parse`] reads back.
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl Display for Dfa {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Alfabeto Σ = {{ {} }}", self.alphabet().iter().join(", "))?;
        writeln!(f)?;
        writeln!(f, "Estados Q = {{ {} }}", self.states().iter().join(", "))?;
        writeln!(f)?;
        writeln!(f, "Estado inicial q0 = {}", self.initial_state())?;
        writeln!(
            f,
            "Estado(s) aceitador(es) F = {{ {} }}",
            self.accepting_states().iter().join(", ")
        )?;
        writeln!(f)?;
        writeln!(f, "Transições (formato s:e>s'):")?;
        write!(f, "{}", self.transitions().iter().map(Show::show).join(", "))
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        prelude::*,
        tests::{canonical_dfa, contains_aa, CANONICAL},
    };

    #[test]
    fn canonical_text() {
        assert_eq!(canonical_dfa().to_text(), CANONICAL);
    }

    #[test]
    fn text_round_trip() {
        for dfa in [canonical_dfa(), contains_aa()] {
            assert_eq!(parse(&dfa.to_text()), Ok(dfa));
        }

        let bare = Dfa::builder()
            .with_alphabet(["a"])
            .with_states(["s0"])
            .build()
            .unwrap();
        assert_eq!(parse(&bare.to_text()), Ok(bare));
    }
}
