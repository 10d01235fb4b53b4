//! Port for loading agent definitions.
//!
//! The registry is an external collaborator: it owns the source document and
//! yields [`Agent`] records in document order. Implementations must exclude
//! the `pm` agent (case-insensitive) — it coordinates dispatch and is never
//! itself a routing target.

use dispatch_domain::Agent;
use std::path::PathBuf;
use thiserror::Error;

/// Errors from loading the agent registry.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Agent definitions not found: {0}")]
    NotFound(PathBuf),

    #[error("Failed to read agent definitions: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid agent definitions: {0}")]
    Invalid(String),
}

/// Port for loading the ordered agent registry.
///
/// Swappable by backend: the production implementation parses a markdown
/// document, a structured-config implementation backs tests and alternate
/// deployments. Document order is significant — the selector breaks score
/// ties toward the first-listed agent.
pub trait AgentRegistry {
    /// Load all routable agents, in source-document order.
    fn load_agents(&self) -> Result<Vec<Agent>, RegistryError>;
}

/// In-memory registry for tests and embedding.
pub struct StaticAgentRegistry {
    agents: Vec<Agent>,
}

impl StaticAgentRegistry {
    pub fn new(agents: Vec<Agent>) -> Self {
        Self { agents }
    }
}

impl AgentRegistry for StaticAgentRegistry {
    fn load_agents(&self) -> Result<Vec<Agent>, RegistryError> {
        Ok(self.agents.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_registry_preserves_order() {
        let registry = StaticAgentRegistry::new(vec![
            Agent::new("first"),
            Agent::new("second"),
            Agent::new("third"),
        ]);

        let agents = registry.load_agents().unwrap();
        let names: Vec<&str> = agents.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["first", "second", "third"]);
    }
}
