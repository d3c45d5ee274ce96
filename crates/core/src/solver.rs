//! Optimal solver and replay sequencer
//!
//! Planning is a pure function: [`solve`] returns the classic minimal move
//! list (`2^n - 1` moves) without touching any game state. Replaying that
//! list against a live tower is the job of [`Sequencer`] together with
//! [`crate::game::Game::solver_step`], which submits one planned move per
//! scheduled step through the regular validator.

use serde::Serialize;

use crate::types::{PegId, MAX_DISCS};

/// One planned `(from, to)` move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct PlannedMove {
    pub from: PegId,
    pub to: PegId,
}

impl PlannedMove {
    pub fn new(from: PegId, to: PegId) -> Self {
        Self { from, to }
    }

    /// `(from, to)` as 0-based indices
    pub fn indices(&self) -> (usize, usize) {
        (self.from.index(), self.to.index())
    }
}

/// Minimal move list moving `n` discs from the source to the destination peg.
///
/// # Examples
///
/// ```
/// use tui_hanoi_core::solver::solve;
///
/// let plan = solve(3);
/// let pairs: Vec<_> = plan.iter().map(|m| m.indices()).collect();
/// assert_eq!(pairs, vec![(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]);
/// ```
pub fn solve(n: u8) -> Vec<PlannedMove> {
    let mut moves = Vec::with_capacity(plan_capacity(n));
    solve_into(
        n,
        PegId::Source,
        PegId::Destination,
        PegId::Auxiliary,
        &mut moves,
    );
    moves
}

/// Append the moves for `n` discs from `src` to `dst` via `aux`
pub fn solve_into(n: u8, src: PegId, dst: PegId, aux: PegId, out: &mut Vec<PlannedMove>) {
    if n == 0 {
        return;
    }
    solve_into(n - 1, src, aux, dst, out);
    out.push(PlannedMove::new(src, dst));
    solve_into(n - 1, aux, dst, src, out);
}

/// Up-front allocation for a plan: exact for playable sizes, none beyond.
fn plan_capacity(n: u8) -> usize {
    if n <= MAX_DISCS {
        min_moves(n) as usize
    } else {
        0
    }
}

/// Minimum number of moves for `n` discs (`2^n - 1`)
pub fn min_moves(n: u8) -> u64 {
    if n >= 64 {
        return u64::MAX;
    }
    (1u64 << n) - 1
}

/// Cursor over a solver plan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequencer {
    plan: Vec<PlannedMove>,
    cursor: usize,
}

impl Sequencer {
    pub fn new(plan: Vec<PlannedMove>) -> Self {
        Self { plan, cursor: 0 }
    }

    /// Take the next planned move
    pub fn next_move(&mut self) -> Option<PlannedMove> {
        let mv = self.plan.get(self.cursor).copied()?;
        self.cursor += 1;
        Some(mv)
    }

    pub fn is_finished(&self) -> bool {
        self.cursor >= self.plan.len()
    }

    /// Planned moves already taken
    pub fn position(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.plan.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plan.is_empty()
    }

    pub fn remaining(&self) -> usize {
        self.plan.len() - self.cursor
    }
}
