//! Console output formatter for dispatch results

use colored::Colorize;
use dispatch_application::DispatchOutcome;

/// Formats dispatch outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the report header shown before analysis.
    pub fn header(task_text: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n", "=== Task Dispatcher ===".cyan().bold()));
        output.push('\n');
        output.push_str(&format!("{} {}\n", "Task:".cyan().bold(), task_text));

        output
    }

    /// Format the complete dispatch result.
    ///
    /// Ends with a machine-readable `SELECTED_AGENT=<name>` line consumed
    /// by wrapping scripts; that line is deliberately left uncolored.
    pub fn format(outcome: &DispatchOutcome) -> String {
        let mut output = String::new();

        if outcome.detected.is_empty() {
            output.push_str(&format!("{} none\n", "Detected patterns:".cyan().bold()));
        } else {
            let patterns: Vec<String> =
                outcome.detected.iter().map(|c| c.to_string()).collect();
            output.push_str(&format!(
                "{} {}\n",
                "Detected patterns:".cyan().bold(),
                patterns.join(", ")
            ));
        }

        output.push('\n');
        output.push_str(&format!(
            "{} {}\n",
            "Selected agent:".green().bold(),
            outcome.selected.agent.name.yellow().bold()
        ));
        output.push_str(&format!(
            "{} {}\n",
            "Confidence score:".green().bold(),
            outcome.selected.score
        ));

        if outcome.selected.is_fallback() {
            output.push_str(&format!(
                "{}\n",
                "No agent scored above zero - using the general fallback".yellow()
            ));
        }

        output.push('\n');
        output.push_str(&format!("SELECTED_AGENT={}\n", outcome.selected.agent.name));

        output
    }

    /// Format as JSON.
    pub fn format_json(outcome: &DispatchOutcome) -> String {
        let patterns: Vec<String> = outcome.detected.iter().map(|c| c.to_string()).collect();

        let value = serde_json::json!({
            "timestamp": outcome.decision.timestamp.to_rfc3339(),
            "task_text": outcome.decision.task_text,
            "agent": outcome.selected.agent.name,
            "score": outcome.selected.score,
            "fallback": outcome.selected.is_fallback(),
            "patterns": patterns,
        });

        serde_json::to_string_pretty(&value).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dispatch_application::Decision;
    use dispatch_domain::{Agent, ScoredAgent, detect_patterns};

    fn outcome(task: &str, agent: ScoredAgent) -> DispatchOutcome {
        DispatchOutcome {
            decision: Decision::new(task, &agent),
            detected: detect_patterns(task),
            selected: agent,
        }
    }

    #[test]
    fn test_format_includes_agent_and_machine_readable_line() {
        let outcome = outcome(
            "Design a new REST API endpoint",
            ScoredAgent::new(Agent::new("backend-dev"), 10),
        );
        let text = ConsoleFormatter::format(&outcome);

        assert!(text.contains("backend-dev"));
        assert!(text.contains("10"));
        assert!(text.contains("SELECTED_AGENT=backend-dev"));
        assert!(text.contains("api"));
    }

    #[test]
    fn test_format_marks_fallback() {
        let outcome = outcome("fix a bug", ScoredAgent::fallback());
        let text = ConsoleFormatter::format(&outcome);

        assert!(text.contains("SELECTED_AGENT=general"));
        assert!(text.contains("general fallback"));
    }

    #[test]
    fn test_format_json_shape() {
        let outcome = outcome(
            "Design a new REST API endpoint",
            ScoredAgent::new(Agent::new("backend-dev"), 10),
        );
        let value: serde_json::Value =
            serde_json::from_str(&ConsoleFormatter::format_json(&outcome)).unwrap();

        assert_eq!(value["agent"], "backend-dev");
        assert_eq!(value["score"], 10);
        assert_eq!(value["fallback"], false);
        assert!(
            value["patterns"]
                .as_array()
                .unwrap()
                .contains(&serde_json::json!("api"))
        );
    }
}
