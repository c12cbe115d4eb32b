use std::ops::{Range, RangeInclusive};

use serde::{Deserialize, Serialize};

/// The knobs of an [`super::Oracle`]. The defaults bound the work done for a single word: at most
/// five random walks of at most twenty symbols each, and three rejection strategies.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OracleConfig {
    /// How many random walks are attempted before falling back to shortest paths.
    pub walks: usize,
    /// The maximal number of symbols of a single random walk.
    pub walk_length: usize,
    /// The characters from which a symbol outside of the alphabet is drawn.
    pub invalid_universe: String,
    /// How many alphabet symbols precede the invalid symbol.
    pub invalid_prefix: RangeInclusive<usize>,
    /// The length of a long random word, the end is exclusive.
    pub long_word: Range<usize>,
    /// The symbol that is repeated if all rejection strategies fail.
    pub filler: char,
    /// How often the filler is repeated.
    pub filler_repeat: usize,
    /// The word returned if all rejection strategies fail for an empty alphabet.
    pub last_resort: String,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            walks: 5,
            walk_length: 20,
            invalid_universe: "abcdefghijklmnopqrstuvwxyz0123456789".to_string(),
            invalid_prefix: 1..=5,
            long_word: 15..25,
            filler: 'x',
            filler_repeat: 5,
            last_resort: "abcdefghij".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::OracleConfig;

    #[test]
    fn partial_config() {
        let config: OracleConfig = serde_json::from_str(r#"{"walks": 2, "filler": "z"}"#).unwrap();
        assert_eq!(config.walks, 2);
        assert_eq!(config.filler, 'z');
        assert_eq!(config.walk_length, 20);
        assert_eq!(config.long_word, 15..25);
    }
}
