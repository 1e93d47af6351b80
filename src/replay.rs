//! Feeding a recorded action log through the global store.
//!
//! The log is JSON lines: one action object per line. Blank lines and lines
//! starting with `#` are skipped.

use std::io::BufRead;

use thiserror::Error;

use crate::app::{AppAction, AppStore};

#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("Failed to read action log: {source}")]
    Read {
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid action on line {line}: {source}")]
    Decode {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

/// Outcome of a replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplaySummary {
    pub dispatched: usize,
    /// Actions whose kind the reducer does not know (dispatched as no-ops).
    pub unrecognized: usize,
}

/// Decode every action in the log, in order.
pub fn decode_actions<R: BufRead>(reader: R) -> Result<Vec<AppAction>, ReplayError> {
    let mut actions = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| ReplayError::Read { source })?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let action = serde_json::from_str(trimmed).map_err(|source| ReplayError::Decode {
            line: index + 1,
            source,
        })?;
        actions.push(action);
    }
    Ok(actions)
}

/// Decode the whole log, then dispatch it.
///
/// Nothing is dispatched if any line fails to decode.
pub fn replay<R: BufRead>(store: &AppStore, reader: R) -> Result<ReplaySummary, ReplayError> {
    let actions = decode_actions(reader)?;
    let mut summary = ReplaySummary::default();

    for action in actions {
        if matches!(action, AppAction::Unrecognized(_)) {
            summary.unrecognized += 1;
        }
        store.dispatch(action);
        summary.dispatched += 1;
    }

    tracing::info!(
        dispatched = summary.dispatched,
        unrecognized = summary.unrecognized,
        "Replay finished"
    );
    Ok(summary)
}
