//! Confidence scoring for one agent against one task description.
//!
//! The score is the sum of three independent components, each non-negative
//! and uncapped:
//!
//! 1. **Keywords**: 10 points per agent keyword occurring as a substring of
//!    the lower-cased task text (duplicates counted independently)
//! 2. **Patterns**: 15 points per detected [`PatternCategory`] whose name is
//!    a substring of the lower-cased agent name
//! 3. **Description overlap**: 2 points per word shared between the agent
//!    description and the task text (whitespace tokens, case-folded, exact
//!    equality)
//!
//! The pattern component is deliberately a substring test against the agent's
//! own name rather than a category lookup table: agents self-identify by
//! naming convention (an agent named "frontend-dev" claims the frontend
//! category).

use crate::agent::entities::Agent;
use crate::routing::pattern::PatternCategory;
use std::collections::{BTreeSet, HashSet};

/// Points per keyword found in the task text.
pub const KEYWORD_MATCH_POINTS: u32 = 10;

/// Points per detected category named in the agent's own name.
pub const PATTERN_MATCH_POINTS: u32 = 15;

/// Points per word shared between agent description and task text.
pub const DESCRIPTION_WORD_POINTS: u32 = 2;

/// Compute the confidence score for `agent` against `task_text`.
///
/// Pure function of its inputs: no randomness, no external state, no
/// iteration-order dependence.
pub fn score_agent(
    agent: &Agent,
    task_text: &str,
    detected: &BTreeSet<PatternCategory>,
) -> u32 {
    let task_lower = task_text.to_lowercase();
    let mut score = 0;

    // Keyword matching (keywords are stored lower-cased). An empty keyword
    // is a substring of every task and scores like any other.
    for keyword in &agent.keywords {
        if task_lower.contains(keyword.as_str()) {
            score += KEYWORD_MATCH_POINTS;
        }
    }

    // Pattern matching against the agent's own name
    let name_lower = agent.name.to_lowercase();
    for category in detected {
        if name_lower.contains(category.as_str()) {
            score += PATTERN_MATCH_POINTS;
        }
    }

    // Description similarity: exact word overlap, case-folded
    let description_lower = agent.description.to_lowercase();
    let description_words: HashSet<&str> = description_lower.split_whitespace().collect();
    let task_words: HashSet<&str> = task_lower.split_whitespace().collect();
    let common = description_words.intersection(&task_words).count() as u32;
    score += common * DESCRIPTION_WORD_POINTS;

    score
}
