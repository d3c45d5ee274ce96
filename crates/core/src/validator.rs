//! Move validator - pure arbitration of candidate moves
//!
//! Given a tower and a `(disc, from, to)` candidate this decides whether the
//! move is legal. It never mutates anything and does not care whether the
//! candidate came from a player gesture or the solver; side effects belong to
//! [`crate::game::Game`].

use crate::tower::Tower;
use crate::types::{DiscId, MoveOutcome, PegId};

/// Arbitrate a candidate move.
///
/// - `NoOp` when `to == from`, or when `disc` is not the top of `from`
/// - `RuleBreak` when the top of `to` is strictly smaller than `disc`
/// - `Accepted` when `to` is empty or its top is strictly larger
pub fn validate(tower: &Tower, disc: DiscId, from: PegId, to: PegId) -> MoveOutcome {
    if from == to {
        return MoveOutcome::NoOp;
    }

    // Stale or invalid reference.
    if tower.top(from) != Some(disc) {
        return MoveOutcome::NoOp;
    }
    let Some(size) = tower.size_of(disc) else {
        return MoveOutcome::NoOp;
    };

    match tower.top_size(to) {
        None => MoveOutcome::Accepted,
        Some(top) if top > size => MoveOutcome::Accepted,
        Some(top) if top < size => MoveOutcome::RuleBreak,
        Some(_) => MoveOutcome::NoOp,
    }
}

/// Arbitrate a planned `(from, to)` move using whatever disc is on top of `from`.
///
/// Returns the disc together with the outcome, or `None` when `from` is empty.
pub fn validate_planned(tower: &Tower, from: PegId, to: PegId) -> Option<(DiscId, MoveOutcome)> {
    let disc = tower.top(from)?;
    Some((disc, validate(tower, disc, from, to)))
}
