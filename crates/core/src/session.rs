//! Session tracker - phase machine and counters for one game
//!
//! ```text
//! Idle ──first interaction──▶ InProgress ──all discs on peg 3──▶ Won
//!                                  │
//!                                  └──────countdown hits 0──────▶ TimedOut
//! ```
//!
//! `Won` and `TimedOut` are terminal until a new game replaces the session.

use serde::Serialize;

/// Generation token for one session.
///
/// Scheduled callbacks (countdown ticks, solver steps) carry the token that
/// was live when they were scheduled; the game drops callbacks whose token no
/// longer matches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct SessionToken(pub u32);

impl SessionToken {
    pub fn next(self) -> Self {
        SessionToken(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Phase {
    #[default]
    Idle,
    InProgress,
    Won,
    TimedOut,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::TimedOut)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::InProgress => "inProgress",
            Phase::Won => "won",
            Phase::TimedOut => "timedOut",
        }
    }
}

/// Counters, gates and elapsed-time bookkeeping for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    phase: Phase,
    moves: u32,
    rule_break_attempts: u32,
    solving: bool,
    interactions_enabled: bool,
    /// Clock reading of the first interaction
    baseline_ms: Option<u64>,
    /// Frozen elapsed time once the session is terminal
    completed_elapsed_ms: Option<u64>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            interactions_enabled: true,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn rule_break_attempts(&self) -> u32 {
        self.rule_break_attempts
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    pub fn solving(&self) -> bool {
        self.solving
    }

    pub fn interactions_enabled(&self) -> bool {
        self.interactions_enabled
    }

    pub fn started(&self) -> bool {
        self.baseline_ms.is_some()
    }

    /// Human input is processed only while this holds
    pub fn accepts_input(&self) -> bool {
        self.interactions_enabled && !self.solving && !self.game_over()
    }

    /// Record an interaction at clock reading `now_ms`.
    ///
    /// The first one sets the elapsed-time baseline and moves `Idle` to
    /// `InProgress`; returns true in that case.
    pub fn touch(&mut self, now_ms: u64) -> bool {
        if self.baseline_ms.is_some() || self.game_over() {
            return false;
        }
        self.baseline_ms = Some(now_ms);
        self.phase = Phase::InProgress;
        true
    }

    /// Milliseconds since the first interaction (0 before it).
    ///
    /// Frozen at the terminal transition.
    pub fn elapsed_at(&self, now_ms: u64) -> u64 {
        if let Some(done) = self.completed_elapsed_ms {
            return done;
        }
        self.baseline_ms
            .map(|base| now_ms.saturating_sub(base))
            .unwrap_or(0)
    }

    pub fn completed_elapsed_ms(&self) -> Option<u64> {
        self.completed_elapsed_ms
    }

    pub(crate) fn record_move(&mut self) {
        self.moves += 1;
    }

    pub(crate) fn record_rule_break(&mut self) {
        self.rule_break_attempts += 1;
    }

    /// Hand the board to (or take it back from) the solver
    pub(crate) fn set_solving(&mut self, solving: bool) {
        self.solving = solving;
        self.interactions_enabled = !solving && !self.game_over();
    }

    /// Enter a terminal phase; returns the final elapsed milliseconds.
    pub(crate) fn finish(&mut self, phase: Phase, now_ms: u64) -> u64 {
        debug_assert!(phase.is_terminal());
        let elapsed = self.elapsed_at(now_ms);
        self.phase = phase;
        self.solving = false;
        self.interactions_enabled = false;
        self.completed_elapsed_ms = Some(elapsed);
        elapsed
    }
}
