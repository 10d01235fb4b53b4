//! Domain layer for task-dispatch
//!
//! This crate contains the core routing logic: agent entities, the pattern
//! detector, the scorer, and the selector. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Routing
//!
//! A free-text task description is matched against a registry of agents
//! (named work-roles). Each agent receives a confidence score computed from
//! keyword hits, detected domain patterns, and description-word overlap.
//! The highest-scoring agent wins; ties go to the agent listed first in the
//! registry, and an all-zero scoreboard falls back to the synthetic
//! "general" agent.
//!
//! Everything in this crate is pure and synchronous — scores are recomputed
//! from scratch for every invocation.

pub mod agent;
pub mod core;
pub mod routing;

// Re-export commonly used types
pub use agent::entities::{Agent, FALLBACK_AGENT_NAME, ScoredAgent};
pub use core::error::DomainError;
pub use routing::{
    pattern::{PatternCategory, detect_patterns},
    scorer::{
        DESCRIPTION_WORD_POINTS, KEYWORD_MATCH_POINTS, PATTERN_MATCH_POINTS, score_agent,
    },
    selector::select_agent,
};
