//! Application layer for task-dispatch
//!
//! This crate contains the dispatch use case and the port definitions for
//! the external collaborators (agent registry, history recorder).
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    agent_registry::{AgentRegistry, RegistryError, StaticAgentRegistry},
    dispatch_recorder::{Decision, DispatchRecorder, NoDispatchRecorder},
};
pub use use_cases::dispatch_task::{DispatchOutcome, DispatchTaskError, DispatchTaskUseCase};
