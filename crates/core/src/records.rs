//! Record store - append-only list of saved session summaries
//!
//! Records are taken on explicit save, which may happen mid-game. Once
//! appended a record is never changed; the store only hands out read-only
//! views for the table panel and the exporters.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::countdown::format_mm_ss;
use crate::error::HanoiError;

/// Live session figures captured at save time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTotals {
    pub num_discs: u8,
    pub moves: u32,
    pub rule_break_attempts: u32,
    pub timer_minutes: u8,
    pub remaining_seconds: Option<u32>,
    pub elapsed_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    pub name: String,
    pub num_discs: u8,
    pub moves: u32,
    pub rule_break_attempts: u32,
    pub timer_minutes: u8,
    /// `None` when the countdown was disabled or never armed
    pub remaining_seconds: Option<u32>,
    pub elapsed_ms: u64,
}

impl SessionRecord {
    /// Configured countdown as `M:00`, `0:00` when disabled
    pub fn timer_label(&self) -> String {
        if self.timer_minutes >= 1 {
            format!("{}:00", self.timer_minutes)
        } else {
            "0:00".to_string()
        }
    }

    /// Remaining countdown as `MM:SS`, `0:00` when there was none
    pub fn remaining_label(&self) -> String {
        match self.remaining_seconds {
            Some(s) if self.timer_minutes >= 1 => format_mm_ss(s),
            _ => "0:00".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<SessionRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record for `name`.
    ///
    /// The name is trimmed; an empty result is rejected with
    /// [`HanoiError::EmptyName`] and nothing is appended.
    pub fn save(&mut self, name: &str, totals: SessionTotals) -> Result<&SessionRecord, HanoiError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HanoiError::EmptyName);
        }

        self.records.push(SessionRecord {
            name: name.to_string(),
            num_discs: totals.num_discs,
            moves: totals.moves,
            rule_break_attempts: totals.rule_break_attempts,
            timer_minutes: totals.timer_minutes,
            remaining_seconds: totals.remaining_seconds,
            elapsed_ms: totals.elapsed_ms,
        });
        info!(
            name,
            moves = totals.moves,
            rule_breaks = totals.rule_break_attempts,
            total = self.records.len(),
            "record saved"
        );

        // Just pushed.
        Ok(&self.records[self.records.len() - 1])
    }

    pub fn records(&self) -> &[SessionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
