//! Agent domain entities

use serde::{Deserialize, Serialize};

/// Name of the synthetic fallback agent returned when nothing matches.
pub const FALLBACK_AGENT_NAME: &str = "general";

/// Description text of the fallback agent.
const FALLBACK_DESCRIPTION: &str = "Default general-purpose agent";

/// A named work-role eligible to receive a routed task (Entity).
///
/// Agents are loaded from an external registry and are immutable for the
/// duration of one dispatch. Keywords are stored lower-cased; matching
/// against task text is case-insensitive substring matching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    /// Unique agent name (e.g., "backend-dev")
    pub name: String,
    /// Lower-cased match keywords, in registry order (may be empty)
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Free-text description of the agent's responsibilities (may be empty)
    #[serde(default)]
    pub description: String,
}

impl Agent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keywords: Vec::new(),
            description: String::new(),
        }
    }

    /// Add a single keyword (lower-cased on the way in).
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into().to_lowercase());
        self
    }

    /// Replace the keyword list (each entry lower-cased).
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords
            .into_iter()
            .map(|k| k.into().to_lowercase())
            .collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// The synthetic "general" fallback agent.
    ///
    /// Never drawn from the registry; returned by the selector when every
    /// registry agent scores zero.
    pub fn fallback() -> Self {
        Self::new(FALLBACK_AGENT_NAME).with_description(FALLBACK_DESCRIPTION)
    }
}

/// An agent paired with its confidence score for one task description.
///
/// Produced fresh per dispatch; scores never carry over between invocations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredAgent {
    pub agent: Agent,
    /// Non-negative confidence score; higher is better
    pub score: u32,
}

impl ScoredAgent {
    pub fn new(agent: Agent, score: u32) -> Self {
        Self { agent, score }
    }

    /// The fallback agent with its fixed zero score.
    pub fn fallback() -> Self {
        Self::new(Agent::fallback(), 0)
    }

    /// Check whether this is the synthetic fallback rather than a registry hit.
    pub fn is_fallback(&self) -> bool {
        self.score == 0 && self.agent.name == FALLBACK_AGENT_NAME
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_builder_lowercases_keywords() {
        let agent = Agent::new("backend-dev")
            .with_keyword("Database")
            .with_keyword("API");

        assert_eq!(agent.keywords, vec!["database", "api"]);
    }

    #[test]
    fn test_agent_with_keywords_replaces_list() {
        let agent = Agent::new("qa")
            .with_keyword("old")
            .with_keywords(["Test", "Spec"]);

        assert_eq!(agent.keywords, vec!["test", "spec"]);
    }

    #[test]
    fn test_fallback_agent_shape() {
        let fallback = ScoredAgent::fallback();

        assert_eq!(fallback.agent.name, FALLBACK_AGENT_NAME);
        assert!(fallback.agent.keywords.is_empty());
        assert!(!fallback.agent.description.is_empty());
        assert_eq!(fallback.score, 0);
        assert!(fallback.is_fallback());
    }

    #[test]
    fn test_registry_general_agent_with_score_is_not_fallback() {
        let scored = ScoredAgent::new(Agent::new("general"), 12);
        assert!(!scored.is_fallback());
    }
}
