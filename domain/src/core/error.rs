//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DomainError {
    /// The registry yielded zero agents. This is a misconfiguration, distinct
    /// from "nothing matched" (which resolves via the fallback agent).
    #[error("No agents available")]
    NoAgents,
}
