use std::fmt::Display;

/// The sections of a textual definition. Each section is introduced by a line that is recognized
/// through a literal prefix or substring, see [`Section::matches`].
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq)]
pub enum Section {
    /// `Alfabeto Σ = { a, b }` or `Alphabet ...`
    Alphabet,
    /// `Estados Q = { s0, s1 }` or `States ...`
    States,
    /// `Estado inicial q0 = s0`, `Initial state ...` or any line containing `q0 =`
    Initial,
    /// `Estado(s) aceitador(es) F = { s1 }` or any line containing `F =`
    Accepting,
    /// `Transições (formato s:e>s'):` or `Transitions ...`
    Transitions,
}

impl Section {
    /// Decides whether the (trimmed) `line` introduces `self`.
    pub fn matches(&self, line: &str) -> bool {
        match self {
            Section::Alphabet => line.starts_with("Alfabeto") || line.starts_with("Alphabet"),
            Section::States => line.starts_with("Estados") || line.starts_with("States"),
            Section::Initial => {
                line.starts_with("Estado inicial")
                    || line.starts_with("Initial state")
                    || line.contains("q0 =")
            }
            Section::Accepting => {
                line.starts_with("Estado(s) aceitador(es)") || line.contains("F =")
            }
            Section::Transitions => {
                line.starts_with("Transições") || line.starts_with("Transitions")
            }
        }
    }

    /// Returns the position of the first line that introduces `self`.
    pub(crate) fn locate<S: AsRef<str>>(&self, lines: &[S]) -> Option<usize> {
        lines.iter().position(|line| self.matches(line.as_ref()))
    }

    pub(crate) fn noun(&self) -> &'static str {
        match self {
            Section::Alphabet => "alphabet",
            Section::States => "states",
            Section::Initial => "initial state",
            Section::Accepting => "accepting states",
            Section::Transitions => "transitions",
        }
    }
}

impl Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Section::Alphabet => "Alphabet",
            Section::States => "States",
            Section::Initial => "Initial state",
            Section::Accepting => "Accepting states",
            Section::Transitions => "Transitions",
        };
        write!(f, "{name}")
    }
}

/// Extracts the elements of the first `{ ... }` list in `line`. Elements are trimmed and empty
/// elements are dropped, so `{ }` yields an empty list.
pub(crate) fn brace_list(line: &str) -> Option<Vec<String>> {
    let open = line.find('{')?;
    let len = line[open + 1..].find('}')?;
    Some(comma_separated(&line[open + 1..open + 1 + len]).collect())
}

pub(crate) fn comma_separated(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Word characters in the sense of `\w`, i.e. ASCII letters, digits and the underscore.
fn is_word(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn leading_word(text: &str) -> &str {
    let end = text.find(|c| !is_word(c)).unwrap_or(text.len());
    &text[..end]
}

fn trailing_word(text: &str) -> &str {
    let start = text
        .rfind(|c| !is_word(c))
        .map(|i| i + text[i..].chars().next().map_or(1, char::len_utf8))
        .unwrap_or(0);
    &text[start..]
}

/// Returns the word that follows the first `=` in `line` that is followed by one, skipping
/// whitespace in between.
pub(crate) fn assigned_word(line: &str) -> Option<&str> {
    line.match_indices('=').find_map(|(i, _)| {
        let word = leading_word(line[i + 1..].trim_start());
        (!word.is_empty()).then_some(word)
    })
}

/// Finds the leftmost occurrence of `word:word>word` in `token` and returns its three parts.
pub(crate) fn transition_parts(token: &str) -> Option<(&str, &str, &str)> {
    token.match_indices(':').find_map(|(colon, _)| {
        let from = trailing_word(&token[..colon]);
        let rest = &token[colon + 1..];
        let symbol = leading_word(rest);
        let to = leading_word(rest[symbol.len()..].strip_prefix('>')?);
        (!from.is_empty() && !symbol.is_empty() && !to.is_empty()).then_some((from, symbol, to))
    })
}
