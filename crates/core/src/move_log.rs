//! Move log - timestamped record of accepted moves and terminal events
//!
//! Timestamps are milliseconds since the first interaction of the session.
//! Peg numbers are written 1-indexed, the way the player sees them.

use std::fmt;

use serde::Serialize;

use crate::types::{PegId, TerminalEvent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum MoveLogEntry {
    Move {
        start_ms: u64,
        end_ms: u64,
        from: PegId,
        to: PegId,
    },
    Terminal {
        at_ms: u64,
        event: TerminalEvent,
    },
}

impl MoveLogEntry {
    pub fn is_terminal(&self) -> bool {
        matches!(self, MoveLogEntry::Terminal { .. })
    }
}

impl fmt::Display for MoveLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveLogEntry::Move {
                start_ms,
                end_ms,
                from,
                to,
            } => write!(f, "{}, {}, {}, {}", start_ms, end_ms, from, to),
            MoveLogEntry::Terminal { at_ms, event } => write!(f, "{}, {}", at_ms, event),
        }
    }
}

/// Ordered log for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    entries: Vec<MoveLogEntry>,
}

impl MoveLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_move(&mut self, start_ms: u64, end_ms: u64, from: PegId, to: PegId) {
        self.entries.push(MoveLogEntry::Move {
            start_ms,
            end_ms,
            from,
            to,
        });
    }

    pub fn push_terminal(&mut self, at_ms: u64, event: TerminalEvent) {
        self.entries.push(MoveLogEntry::Terminal { at_ms, event });
    }

    pub fn entries(&self) -> &[MoveLogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&MoveLogEntry> {
        self.entries.last()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// The log as the text shown in the log panel, one entry per line
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_entries_render_one_indexed() {
        let mut log = MoveLog::new();
        log.push_move(0, 420, PegId::Source, PegId::Destination);
        assert_eq!(log.entries()[0].to_string(), "0, 420, 1, 3");
    }

    #[test]
    fn terminal_entries_render_tag() {
        let mut log = MoveLog::new();
        log.push_terminal(5000, TerminalEvent::Success);
        log.push_terminal(6000, TerminalEvent::GameOver);
        assert_eq!(log.to_text(), "5000, Success!\n6000, GAMEOVER");
        assert!(log.last().unwrap().is_terminal());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let entry = MoveLogEntry::Move {
            start_ms: 1,
            end_ms: 2,
            from: PegId::Auxiliary,
            to: PegId::Source,
        };
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json["kind"], "move");
        assert_eq!(json["start_ms"], 1);
        assert_eq!(json["from"], "auxiliary");
    }
}
