//! Infrastructure layer for task-dispatch
//!
//! This crate contains adapters that implement the ports defined in the
//! application layer, plus configuration file loading.

pub mod config;
pub mod history;
pub mod registry;

// Re-export commonly used types
pub use config::{ConfigLoader, FileConfig, FileHistoryConfig, FileRegistryConfig};
pub use history::JsonDispatchRecorder;
pub use registry::{MarkdownAgentRegistry, TomlAgentRegistry};
