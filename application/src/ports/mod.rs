//! Port definitions (interfaces to external collaborators)

pub mod agent_registry;
pub mod dispatch_recorder;
