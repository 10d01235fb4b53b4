//! Agent registry adapters
//!
//! Two backends implement the [`AgentRegistry`] port: the markdown document
//! used in production and a structured TOML file for tests and alternate
//! deployments.
//!
//! [`AgentRegistry`]: dispatch_application::AgentRegistry

pub mod markdown;
pub mod toml;

pub use markdown::MarkdownAgentRegistry;
pub use toml::TomlAgentRegistry;
