//! Markdown-backed agent registry.
//!
//! Parses an agent definitions document of the form:
//!
//! ```markdown
//! ## backend-dev
//! **Keywords**
//! - database
//! - api
//!
//! **Description**
//! Handles server side work.
//! ```
//!
//! Both English and Japanese section markers (`**Keywords**` /
//! `**キーワード**`, `**Description**` / `**説明**`) are accepted. Agents
//! appear in the result in document order. The `pm` agent is skipped
//! case-insensitively — it is never a routing target.

use dispatch_application::{AgentRegistry, RegistryError};
use dispatch_domain::Agent;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const KEYWORD_MARKERS: [&str; 2] = ["**Keywords**", "**キーワード**"];
const DESCRIPTION_MARKERS: [&str; 2] = ["**Description**", "**説明**"];

/// Agent name excluded from routing (the dispatcher itself).
const EXCLUDED_AGENT: &str = "pm";

/// Registry backed by a markdown definitions document.
pub struct MarkdownAgentRegistry {
    path: PathBuf,
}

impl MarkdownAgentRegistry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse agent definitions from markdown source.
    fn parse(source: &str) -> Vec<Agent> {
        let lines: Vec<&str> = source.lines().collect();
        let mut agents = Vec::new();
        let mut current: Option<Agent> = None;

        let mut i = 0;
        while i < lines.len() {
            let line = lines[i];

            if let Some(heading) = line.strip_prefix("## ") {
                if let Some(agent) = current.take() {
                    agents.push(agent);
                }
                let name = heading.trim();
                if name.eq_ignore_ascii_case(EXCLUDED_AGENT) {
                    debug!("Skipping excluded agent: {name}");
                } else if !name.is_empty() {
                    current = Some(Agent::new(name));
                }
            } else if let Some(agent) = current.as_mut() {
                if KEYWORD_MARKERS.iter().any(|m| line.contains(m)) {
                    // Keyword list: one `- item` per line until a blank line
                    let mut j = i + 1;
                    while j < lines.len() && !lines[j].trim().is_empty() {
                        if let Some(item) = lines[j].trim().strip_prefix('-') {
                            agent.keywords.push(item.trim().to_lowercase());
                        }
                        j += 1;
                    }
                    i = j;
                    continue;
                } else if DESCRIPTION_MARKERS.iter().any(|m| line.contains(m)) {
                    // Description: prose until the next heading, joined with spaces
                    let mut parts = Vec::new();
                    let mut j = i + 1;
                    while j < lines.len() && !lines[j].starts_with('#') {
                        let text = lines[j].trim();
                        if !text.is_empty() {
                            parts.push(text);
                        }
                        j += 1;
                    }
                    agent.description = parts.join(" ");
                    i = j;
                    continue;
                }
            }

            i += 1;
        }

        if let Some(agent) = current {
            agents.push(agent);
        }

        agents
    }
}

impl AgentRegistry for MarkdownAgentRegistry {
    fn load_agents(&self) -> Result<Vec<Agent>, RegistryError> {
        if !self.path.exists() {
            return Err(RegistryError::NotFound(self.path.clone()));
        }

        let source = fs::read_to_string(&self.path)?;
        Ok(Self::parse(&source))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
# Agent Definitions

## pm
**Keywords**
- project

**Description**
Coordinates the other agents.

## backend-dev
**Keywords**
- Database
- API

**Description**
Handles server side work
and data stores.

## frontend-dev
**キーワード**
- ui
- コンポーネント

**説明**
画面まわりの実装を担当。
";

    #[test]
    fn test_parse_preserves_document_order() {
        let agents = MarkdownAgentRegistry::parse(SAMPLE);
        let names: Vec<&str> = agents.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["backend-dev", "frontend-dev"]);
    }

    #[test]
    fn test_pm_agent_is_excluded() {
        let agents = MarkdownAgentRegistry::parse(SAMPLE);
        assert!(agents.iter().all(|a| !a.name.eq_ignore_ascii_case("pm")));

        let agents = MarkdownAgentRegistry::parse("## PM\n**Keywords**\n- x\n");
        assert!(agents.is_empty());
    }

    #[test]
    fn test_keywords_are_lowercased() {
        let agents = MarkdownAgentRegistry::parse(SAMPLE);
        assert_eq!(agents[0].keywords, vec!["database", "api"]);
    }

    #[test]
    fn test_multiline_description_joined_with_spaces() {
        let agents = MarkdownAgentRegistry::parse(SAMPLE);
        assert_eq!(
            agents[0].description,
            "Handles server side work and data stores."
        );
    }

    #[test]
    fn test_japanese_markers_accepted() {
        let agents = MarkdownAgentRegistry::parse(SAMPLE);
        let frontend = &agents[1];
        assert_eq!(frontend.keywords, vec!["ui", "コンポーネント"]);
        assert_eq!(frontend.description, "画面まわりの実装を担当。");
    }

    #[test]
    fn test_agent_without_sections_is_kept_empty() {
        let agents = MarkdownAgentRegistry::parse("## mystery\n\n## other\n");
        assert_eq!(agents.len(), 2);
        assert!(agents[0].keywords.is_empty());
        assert!(agents[0].description.is_empty());
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let registry = MarkdownAgentRegistry::new("/nonexistent/AGENT_DEFINITIONS.md");
        assert!(matches!(
            registry.load_agents(),
            Err(RegistryError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let registry = MarkdownAgentRegistry::new(file.path());
        let agents = registry.load_agents().unwrap();
        assert_eq!(agents.len(), 2);
    }
}
