//! JSON file recorder for dispatch decisions.
//!
//! Maintains two files in a state directory:
//!
//! - `dispatch_history.json` — append-only audit log, a JSON array bounded
//!   to the most recent [`MAX_HISTORY_ENTRIES`] decisions (oldest evicted
//!   first)
//! - `last_dispatch.json` — always-overwritten snapshot of the latest
//!   decision, consumed by downstream automation
//!
//! Both files are replaced via temp-file-plus-rename so concurrent writers
//! never leave interleaved records; last-writer-wins for the snapshot.
//! Write failures are logged and swallowed per the recorder contract.

use chrono::{DateTime, Utc};
use dispatch_application::{Decision, DispatchRecorder};
use serde::Serialize;
use std::fs;
use std::io;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Maximum number of decisions retained in the history log.
pub const MAX_HISTORY_ENTRIES: usize = 100;

const HISTORY_FILE: &str = "dispatch_history.json";
const LAST_DISPATCH_FILE: &str = "last_dispatch.json";

/// Snapshot record written to `last_dispatch.json`.
#[derive(Debug, Serialize)]
struct LastDispatch<'a> {
    timestamp: DateTime<Utc>,
    task_text: &'a str,
    primary_agent: &'a str,
    /// Always false for single-agent dispatch
    requires_pm: bool,
    related_agents: Vec<&'a str>,
    confidence_score: u32,
}

impl<'a> LastDispatch<'a> {
    fn from_decision(decision: &'a Decision) -> Self {
        Self {
            timestamp: decision.timestamp,
            task_text: &decision.task_text,
            primary_agent: &decision.agent_name,
            requires_pm: false,
            related_agents: vec![&decision.agent_name],
            confidence_score: decision.score,
        }
    }
}

/// Recorder persisting decisions as JSON under a state directory.
pub struct JsonDispatchRecorder {
    state_dir: PathBuf,
}

impl JsonDispatchRecorder {
    pub fn new(state_dir: impl Into<PathBuf>) -> Self {
        Self {
            state_dir: state_dir.into(),
        }
    }

    pub fn history_path(&self) -> PathBuf {
        self.state_dir.join(HISTORY_FILE)
    }

    pub fn last_dispatch_path(&self) -> PathBuf {
        self.state_dir.join(LAST_DISPATCH_FILE)
    }

    fn append_history(&self, decision: &Decision) -> io::Result<()> {
        let path = self.history_path();

        // Corrupt or missing history starts over empty
        let mut history: Vec<Decision> = match fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Vec::new(),
        };

        history.push(decision.clone());
        if history.len() > MAX_HISTORY_ENTRIES {
            let excess = history.len() - MAX_HISTORY_ENTRIES;
            history.drain(..excess);
        }

        let bytes = serde_json::to_vec_pretty(&history).map_err(io::Error::other)?;
        write_atomic(&path, &bytes)
    }

    fn write_last_dispatch(&self, decision: &Decision) -> io::Result<()> {
        let snapshot = LastDispatch::from_decision(decision);
        let bytes = serde_json::to_vec_pretty(&snapshot).map_err(io::Error::other)?;
        write_atomic(&self.last_dispatch_path(), &bytes)
    }
}

impl DispatchRecorder for JsonDispatchRecorder {
    fn record(&self, decision: &Decision) {
        if let Err(e) = fs::create_dir_all(&self.state_dir) {
            warn!(
                "Could not create dispatch state directory {}: {}",
                self.state_dir.display(),
                e
            );
            return;
        }

        if let Err(e) = self.append_history(decision) {
            warn!("Could not append dispatch history: {}", e);
        }

        if let Err(e) = self.write_last_dispatch(decision) {
            warn!("Could not write last dispatch snapshot: {}", e);
        }
    }
}

/// Write `bytes` to `path` via a uniquely-named temp file and atomic rename.
///
/// Each writer gets its own temp file, so concurrent recorders never
/// interleave; the final rename decides the winner.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
