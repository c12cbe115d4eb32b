use std::fmt::Display;

use owo_colors::OwoColorize;
use serde::{Deserialize, Serialize};
use tabled::{settings::Style, Table, Tabled};
use tracing::debug;

use crate::{simulate, Dfa, StateId};

/// A batch of inputs that are run against an automaton.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct TestSuite {
    inputs: Vec<String>,
}

impl TestSuite {
    /// Creates a suite from the given inputs.
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
        }
    }

    /// Reads one input per line, lines are trimmed and blank lines are skipped. This also accepts
    /// a single column CSV file.
    pub fn from_lines(text: &str) -> Self {
        Self::new(text.lines().map(str::trim).filter(|line| !line.is_empty()))
    }

    /// The inputs of the suite.
    pub fn inputs(&self) -> &[String] {
        &self.inputs
    }

    /// Simulates `dfa` on every input.
    pub fn run(&self, dfa: &Dfa) -> SuiteReport {
        let results = self
            .inputs
            .iter()
            .map(|input| {
                let result = simulate(dfa, input);
                TestOutcome {
                    input: input.clone(),
                    accepted: result.accepted,
                    final_state: result.final_state().to_string(),
                    steps: result.len(),
                }
            })
            .collect();
        let report = SuiteReport { results };
        debug!("ran {} inputs, acceptance {}", report.results.len(), report.summary());
        report
    }
}

/// The verdict for a single input of a [`TestSuite`].
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestOutcome {
    /// The input that was simulated.
    pub input: String,
    /// Whether it was accepted.
    pub accepted: bool,
    /// The state in which the run ended.
    pub final_state: StateId,
    /// The length of the trace.
    pub steps: usize,
}

/// The outcomes of running a [`TestSuite`].
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct SuiteReport {
    /// One outcome per input, in the order of the inputs.
    pub results: Vec<TestOutcome>,
}

impl SuiteReport {
    /// Number of accepted inputs.
    pub fn accepted(&self) -> usize {
        self.results.iter().filter(|r| r.accepted).count()
    }

    /// The share of accepted inputs in percent, `None` if the suite was empty.
    pub fn acceptance_rate(&self) -> Option<f64> {
        if self.results.is_empty() {
            return None;
        }
        Some(self.accepted() as f64 / self.results.len() as f64 * 100.0)
    }

    /// Summarizes the acceptance rate as e.g. `50.0% (1/2)`, or `N/A` for an empty suite.
    pub fn summary(&self) -> String {
        match self.acceptance_rate() {
            None => "N/A".to_string(),
            Some(rate) => format!("{rate:.1}% ({}/{})", self.accepted(), self.results.len()),
        }
    }

    /// Renders the outcomes as CSV with the columns `Input`, `Accepted`, `Final State` and `Steps`.
    pub fn to_csv(&self) -> String {
        let mut csv = String::from("Input,Accepted,Final State,Steps\n");
        for r in &self.results {
            csv.push_str(&format!(
                "\"{}\",{},{},{}\n",
                r.input.replace('"', "\"\""),
                r.accepted,
                r.final_state,
                r.steps
            ));
        }
        csv
    }
}

#[derive(Tabled)]
struct Row {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Result")]
    verdict: String,
    #[tabled(rename = "Final State")]
    final_state: String,
    #[tabled(rename = "Steps")]
    steps: usize,
}

impl Display for SuiteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rows = self.results.iter().enumerate().map(|(i, r)| Row {
            index: i + 1,
            input: r.input.clone(),
            verdict: if r.accepted {
                "accepted".green().to_string()
            } else {
                "rejected".red().to_string()
            },
            final_state: r.final_state.clone(),
            steps: r.steps,
        });
        writeln!(f, "{}", Table::new(rows).with(Style::rounded()))?;
        write!(f, "acceptance rate: {}", self.summary())
    }
}

#[cfg(test)]
mod tests {
    use crate::{prelude::*, tests::canonical_dfa};

    #[test]
    fn run_suite() {
        let suite = TestSuite::from_lines("a\n\n  ab \naba\nb\n");
        assert_eq!(suite.inputs(), ["a", "ab", "aba", "b"]);

        let report = suite.run(&canonical_dfa());
        assert_eq!(report.accepted(), 2);
        assert_eq!(report.summary(), "50.0% (2/4)");
        assert_eq!(
            report.results[3],
            TestOutcome {
                input: "b".into(),
                accepted: false,
                final_state: "s0".into(),
                steps: 2
            }
        );

        assert_eq!(
            report.to_csv(),
            "Input,Accepted,Final State,Steps\n\
             \"a\",true,s1,2\n\
             \"ab\",false,s0,3\n\
             \"aba\",true,s1,4\n\
             \"b\",false,s0,2\n"
        );

        let rendered = report.to_string();
        assert!(rendered.contains("Final State"));
        assert!(rendered.ends_with("acceptance rate: 50.0% (2/4)"));
    }

    #[test]
    fn empty_suite() {
        let report = TestSuite::default().run(&canonical_dfa());
        assert_eq!(report.acceptance_rate(), None);
        assert_eq!(report.summary(), "N/A");
        assert_eq!(report.to_csv(), "Input,Accepted,Final State,Steps\n");
    }
}
