//! Error types for core operations.
//!
//! Every variant is a recoverable, reported outcome; state is left untouched
//! when one is returned.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HanoiError {
    #[error("player name is empty")]
    EmptyName,

    #[error("solver needs the starting position; restart the game first")]
    SolverPreconditionUnmet,

    #[error("solver is already running")]
    SolverBusy,

    #[error("session is over; start a new game")]
    SessionOver,

    #[error("disc count {0} is outside 3..=8")]
    InvalidDiscCount(u8),

    #[error("timer minutes {0} is outside 0..=99")]
    InvalidTimerMinutes(u8),
}
