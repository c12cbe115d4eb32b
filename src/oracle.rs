//! Probing an automaton with words that are known (or at least very likely) to be accepted or
//! rejected. The search for a shortest path between two states is deterministic and always
//! available, generating words relies on randomness and requires the `random` feature.
mod path;
pub use path::{shortest_path, MinimalRepresentative, MinimalRepresentatives};

#[cfg(feature = "random")]
mod config;
#[cfg(feature = "random")]
pub use config::OracleConfig;

#[cfg(feature = "random")]
mod generate;
#[cfg(feature = "random")]
pub use generate::{generate_accepted, generate_rejected, Oracle, RejectionStrategy};
