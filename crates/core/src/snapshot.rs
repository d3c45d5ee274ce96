use serde::Serialize;

use crate::session::{Phase, SessionToken};
use crate::tower::PegSizes;
use crate::types::{PegId, PEG_COUNT};

/// Read-only view of a game for renderers and serializers
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GameSnapshot {
    /// Disc sizes per peg, bottom-to-top
    pub pegs: [PegSizes; PEG_COUNT],
    pub num_discs: u8,
    pub moves: u32,
    pub rule_break_attempts: u32,
    pub phase: Phase,
    pub game_over: bool,
    pub solving: bool,
    pub interactions_enabled: bool,
    pub timer_minutes: u8,
    pub seconds_left: Option<u32>,
    /// Peg whose top disc is currently lifted
    pub lifted: Option<PegId>,
    /// `(position, planned)` while the solver runs
    pub solver_progress: Option<(usize, usize)>,
    pub min_moves: u64,
    pub elapsed_ms: u64,
    pub token: SessionToken,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        for peg in self.pegs.iter_mut() {
            peg.clear();
        }
        self.num_discs = 0;
        self.moves = 0;
        self.rule_break_attempts = 0;
        self.phase = Phase::Idle;
        self.game_over = false;
        self.solving = false;
        self.interactions_enabled = true;
        self.timer_minutes = 0;
        self.seconds_left = None;
        self.lifted = None;
        self.solver_progress = None;
        self.min_moves = 0;
        self.elapsed_ms = 0;
        self.token = SessionToken::default();
    }

    pub fn playable(&self) -> bool {
        self.interactions_enabled && !self.game_over && !self.solving
    }

    /// Size of the top disc on `peg`
    pub fn top_size(&self, peg: PegId) -> Option<u8> {
        self.pegs[peg.index()].last().copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            pegs: Default::default(),
            num_discs: 0,
            moves: 0,
            rule_break_attempts: 0,
            phase: Phase::Idle,
            game_over: false,
            solving: false,
            interactions_enabled: true,
            timer_minutes: 0,
            seconds_left: None,
            lifted: None,
            solver_progress: None,
            min_moves: 0,
            elapsed_ms: 0,
            token: SessionToken::default(),
        }
    }
}
