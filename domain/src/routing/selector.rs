//! Winner selection across the agent registry.
//!
//! Runs the pattern detector once, scores every agent, and picks the highest
//! scorer. Ties break toward the agent listed first in the registry (stable
//! sort). An all-zero scoreboard resolves to the synthetic fallback agent;
//! an empty registry is an error, not a fallback.

use crate::agent::entities::{Agent, ScoredAgent};
use crate::core::error::DomainError;
use crate::routing::pattern::detect_patterns;
use crate::routing::scorer::score_agent;

/// Select the best-matching agent for `task_text`.
///
/// Pure selection — persistence of the outcome belongs to the caller.
///
/// # Errors
///
/// Returns [`DomainError::NoAgents`] when `agents` is empty. Every other
/// input, including an empty or gibberish task description, produces a
/// result (possibly the fallback).
pub fn select_agent(task_text: &str, agents: &[Agent]) -> Result<ScoredAgent, DomainError> {
    if agents.is_empty() {
        return Err(DomainError::NoAgents);
    }

    let detected = detect_patterns(task_text);

    let mut scored: Vec<ScoredAgent> = agents
        .iter()
        .map(|agent| ScoredAgent::new(agent.clone(), score_agent(agent, task_text, &detected)))
        .collect();

    // Stable sort: among equal scores the first-listed agent stays first
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    match scored.into_iter().next() {
        Some(top) if top.score > 0 => Ok(top),
        _ => Ok(ScoredAgent::fallback()),
    }
}
