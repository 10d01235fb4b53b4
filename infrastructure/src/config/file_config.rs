//! File-based configuration schema

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for task-dispatch.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub registry: FileRegistryConfig,
    pub history: FileHistoryConfig,
}

/// Where agent definitions are loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileRegistryConfig {
    /// Path to the agent definitions markdown document
    pub path: PathBuf,
}

impl Default for FileRegistryConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("AGENT_DEFINITIONS.md"),
        }
    }
}

/// Where dispatch history is persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileHistoryConfig {
    /// State directory for the history log and last-dispatch snapshot
    pub dir: PathBuf,
    /// Disable to skip history recording entirely
    pub enabled: bool,
}

impl Default for FileHistoryConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(".dispatch/state"),
            enabled: true,
        }
    }
}
