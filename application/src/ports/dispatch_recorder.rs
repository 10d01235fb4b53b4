//! Port for recording dispatch decisions.
//!
//! Defines the [`DispatchRecorder`] trait for appending each routing outcome
//! to an audit log. This is separate from `tracing`-based operation logs:
//! tracing handles human-readable diagnostics, while this port captures the
//! decision record in a machine-readable form.

use chrono::{DateTime, Utc};
use dispatch_domain::ScoredAgent;
use serde::{Deserialize, Serialize};

/// The persisted record of one routing outcome.
///
/// Timestamps serialize as RFC 3339 / ISO-8601 strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// When the decision was made (UTC)
    pub timestamp: DateTime<Utc>,
    /// The task description that was routed
    pub task_text: String,
    /// Name of the selected agent (registry agent or "general")
    pub agent_name: String,
    /// Confidence score of the selection (0 for the fallback)
    pub score: u32,
}

impl Decision {
    /// Create a decision for `selected` with the current UTC timestamp.
    pub fn new(task_text: impl Into<String>, selected: &ScoredAgent) -> Self {
        Self {
            timestamp: Utc::now(),
            task_text: task_text.into(),
            agent_name: selected.agent.name.clone(),
            score: selected.score,
        }
    }
}

/// Port for recording dispatch decisions.
///
/// The `record` method is intentionally synchronous and non-fallible:
/// persistence failures must never disrupt dispatch, so implementations log
/// them and carry on.
pub trait DispatchRecorder {
    /// Record one dispatch decision.
    fn record(&self, decision: &Decision);
}

/// No-op implementation for tests and when recording is disabled.
pub struct NoDispatchRecorder;

impl DispatchRecorder for NoDispatchRecorder {
    fn record(&self, _decision: &Decision) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_domain::Agent;

    #[test]
    fn test_decision_copies_selection_fields() {
        let selected = ScoredAgent::new(Agent::new("backend-dev"), 25);
        let decision = Decision::new("tune the database", &selected);

        assert_eq!(decision.agent_name, "backend-dev");
        assert_eq!(decision.score, 25);
        assert_eq!(decision.task_text, "tune the database");
    }

    #[test]
    fn test_decision_serializes_iso8601_timestamp() {
        let decision = Decision::new("fix a bug", &ScoredAgent::fallback());
        let json = serde_json::to_value(&decision).unwrap();

        let timestamp = json["timestamp"].as_str().unwrap();
        // RFC 3339: date, 'T' separator, UTC offset
        assert!(timestamp.contains('T'));
        assert!(
            DateTime::parse_from_rfc3339(timestamp).is_ok(),
            "not RFC 3339: {timestamp}"
        );
        assert_eq!(json["agent_name"], "general");
        assert_eq!(json["score"], 0);
    }
}
