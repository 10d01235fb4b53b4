//! TOML-backed agent registry.
//!
//! Structured alternative to the markdown document, useful for tests and
//! deployments that keep agent definitions in configuration:
//!
//! ```toml
//! [[agents]]
//! name = "backend-dev"
//! keywords = ["database", "api"]
//! description = "Handles server side work"
//! ```

use dispatch_application::{AgentRegistry, RegistryError};
use dispatch_domain::Agent;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
struct RegistryFile {
    #[serde(default)]
    agents: Vec<AgentDef>,
}

#[derive(Debug, Deserialize)]
struct AgentDef {
    name: String,
    #[serde(default)]
    keywords: Vec<String>,
    #[serde(default)]
    description: String,
}

/// Agent name excluded from routing (the dispatcher itself).
const EXCLUDED_AGENT: &str = "pm";

/// Registry backed by a TOML definitions file.
pub struct TomlAgentRegistry {
    path: PathBuf,
}

impl TomlAgentRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn parse(source: &str) -> Result<Vec<Agent>, RegistryError> {
        let file: RegistryFile =
            ::toml::from_str(source).map_err(|e| RegistryError::Invalid(e.to_string()))?;

        Ok(file
            .agents
            .into_iter()
            .filter(|def| !def.name.eq_ignore_ascii_case(EXCLUDED_AGENT))
            .map(|def| {
                Agent::new(def.name)
                    .with_keywords(def.keywords)
                    .with_description(def.description)
            })
            .collect())
    }
}

impl AgentRegistry for TomlAgentRegistry {
    fn load_agents(&self) -> Result<Vec<Agent>, RegistryError> {
        if !self.path.exists() {
            return Err(RegistryError::NotFound(self.path.clone()));
        }

        let source = fs::read_to_string(&self.path)?;
        Self::parse(&source)
    }
}
