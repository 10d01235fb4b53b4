//! Routing logic: pattern detection, scoring, and selection
//!
//! The three stages run in order for each dispatch:
//!
//! 1. [`pattern::detect_patterns`] scans the task text for domain categories
//! 2. [`scorer::score_agent`] computes one confidence score per agent
//! 3. [`selector::select_agent`] sorts the scoreboard and picks the winner

pub mod pattern;
pub mod scorer;
pub mod selector;
