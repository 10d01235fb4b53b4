//! Dispatch task use case
//!
//! Orchestrates one routing decision: load agents, select a winner, record
//! the decision. Selection itself is pure; this use case owns the side
//! effects around it.

use crate::ports::agent_registry::{AgentRegistry, RegistryError};
use crate::ports::dispatch_recorder::{Decision, DispatchRecorder};
use dispatch_domain::{
    DomainError, PatternCategory, ScoredAgent, detect_patterns, select_agent,
};
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during dispatch
#[derive(Error, Debug)]
pub enum DispatchTaskError {
    /// The registry loaded but yielded zero agents — a misconfiguration,
    /// not a "nothing matched" condition. No decision is recorded.
    #[error("No agents available in the registry")]
    NoAgents,

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),
}

/// Result of one dispatch: the winning agent plus audit context.
#[derive(Debug, Clone)]
pub struct DispatchOutcome {
    /// The selected agent with its confidence score
    pub selected: ScoredAgent,
    /// Domain categories detected in the task text
    pub detected: BTreeSet<PatternCategory>,
    /// The decision record handed to the recorder
    pub decision: Decision,
}

/// Use case for routing one task description to an agent.
pub struct DispatchTaskUseCase<R: AgentRegistry> {
    registry: Arc<R>,
    recorder: Arc<dyn DispatchRecorder>,
}

impl<R: AgentRegistry> DispatchTaskUseCase<R> {
    pub fn new(registry: Arc<R>, recorder: Arc<dyn DispatchRecorder>) -> Self {
        Self { registry, recorder }
    }

    /// Execute one dispatch for `task_text`.
    ///
    /// A decision is recorded for every successful selection, fallback
    /// included. Registry failures abort before anything is written.
    pub fn execute(&self, task_text: &str) -> Result<DispatchOutcome, DispatchTaskError> {
        let agents = self.registry.load_agents()?;
        info!("Loaded {} agents from registry", agents.len());

        let selected = select_agent(task_text, &agents).map_err(|e| match e {
            DomainError::NoAgents => DispatchTaskError::NoAgents,
        })?;

        let detected = detect_patterns(task_text);
        debug!(
            agent = %selected.agent.name,
            score = selected.score,
            patterns = ?detected,
            "Selected agent"
        );

        let decision = Decision::new(task_text, &selected);
        self.recorder.record(&decision);

        Ok(DispatchOutcome {
            selected,
            detected,
            decision,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::agent_registry::StaticAgentRegistry;
    use dispatch_domain::Agent;
    use std::sync::Mutex;

    /// Recorder that captures decisions for assertions.
    #[derive(Default)]
    struct CapturingRecorder {
        decisions: Mutex<Vec<Decision>>,
    }

    impl DispatchRecorder for CapturingRecorder {
        fn record(&self, decision: &Decision) {
            self.decisions.lock().unwrap().push(decision.clone());
        }
    }

    fn use_case(
        agents: Vec<Agent>,
    ) -> (
        DispatchTaskUseCase<StaticAgentRegistry>,
        Arc<CapturingRecorder>,
    ) {
        let recorder = Arc::new(CapturingRecorder::default());
        let use_case = DispatchTaskUseCase::new(
            Arc::new(StaticAgentRegistry::new(agents)),
            recorder.clone(),
        );
        (use_case, recorder)
    }

    #[test]
    fn test_execute_records_exactly_one_decision() {
        let (use_case, recorder) = use_case(vec![
            Agent::new("backend-dev").with_keywords(["database", "api"]),
        ]);

        let outcome = use_case.execute("Design a new REST API endpoint").unwrap();

        assert_eq!(outcome.selected.agent.name, "backend-dev");
        assert_eq!(outcome.selected.score, 10);
        assert!(outcome.detected.contains(&PatternCategory::Api));

        let decisions = recorder.decisions.lock().unwrap();
        assert_eq!(decisions.len(), 1);
        assert_eq!(decisions[0].agent_name, "backend-dev");
        assert_eq!(decisions[0].score, 10);
    }

    #[test]
    fn test_empty_registry_records_nothing() {
        let (use_case, recorder) = use_case(vec![]);

        let result = use_case.execute("anything");
        assert!(matches!(result, Err(DispatchTaskError::NoAgents)));
        assert!(recorder.decisions.lock().unwrap().is_empty());
    }

    #[test]
    fn test_fallback_selection_still_records_a_decision() {
        let (use_case, recorder) = use_case(vec![Agent::new("frontend")]);

        let outcome = use_case.execute("fix a bug").unwrap();

        assert!(outcome.selected.is_fallback());
        assert_eq!(outcome.decision.agent_name, "general");
        assert_eq!(outcome.decision.score, 0);
        assert_eq!(recorder.decisions.lock().unwrap().len(), 1);
    }
}
