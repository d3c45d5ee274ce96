//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and all session state. It has no
//! dependency on the terminal, input devices or files, so the same engine can
//! sit behind the TUI, a test harness or a benchmark.
//!
//! # Module Structure
//!
//! - [`tower`]: three pegs of disc ids plus per-disc sizes
//! - [`validator`]: pure arbitration of `(disc, from, to)` candidates
//! - [`session`]: phase machine, counters and the session token
//! - [`countdown`]: optional per-session countdown
//! - [`move_log`]: timestamped log of accepted moves and terminal events
//! - [`solver`]: minimal move plan and its replay cursor
//! - [`records`]: append-only saved session summaries
//! - [`game`]: the facade that owns all of the above
//!
//! # Rules
//!
//! - Only the top disc of a peg can move.
//! - A disc may land on an empty peg or on a strictly larger disc. Landing on
//!   a smaller disc is a rule break: counted, never applied.
//! - The game is won when the destination peg (the third) holds every disc.
//! - With a countdown configured, reaching zero ends the game.
//!
//! # Example
//!
//! ```
//! use tui_hanoi_core::{Game, GameConfig, Phase};
//! use tui_hanoi_core::clock::ManualClock;
//! use tui_hanoi_core::types::{MoveOutcome, PegId};
//!
//! let mut game = Game::with_clock(GameConfig::default(), ManualClock::new());
//!
//! let disc = game.pick_up(PegId::Source).unwrap();
//! let report = game.attempt_move(disc, PegId::Source, PegId::Destination);
//! assert_eq!(report.outcome, MoveOutcome::Accepted);
//! assert_eq!(game.phase(), Phase::InProgress);
//!
//! // The next disc is larger than the one now on peg 3.
//! let disc = game.pick_up(PegId::Source).unwrap();
//! let report = game.attempt_move(disc, PegId::Source, PegId::Destination);
//! assert_eq!(report.outcome, MoveOutcome::RuleBreak);
//! assert_eq!(report.rule_break_attempts, 1);
//! ```
//!
//! # Timing
//!
//! The core never sleeps or spawns. The caller schedules:
//! - [`Game::tick`](game::Game::tick) every `TIMER_TICK_MS` (1000 ms) while the countdown runs
//! - [`Game::solver_step`](game::Game::solver_step) every `SOLVER_STEP_MS` (120 ms) while solving

pub mod clock;
pub mod config;
pub mod countdown;
pub mod error;
pub mod game;
pub mod move_log;
pub mod records;
pub mod session;
pub mod snapshot;
pub mod solver;
pub mod tower;
pub mod validator;

pub use tui_hanoi_types as types;

// Re-export commonly used types for convenience
pub use clock::{Clock, ManualClock, MonotonicClock};
pub use config::GameConfig;
pub use countdown::{format_mm_ss, Countdown, CountdownTick};
pub use error::HanoiError;
pub use game::{Game, Interaction, MoveReport, SolverStep, TickOutcome};
pub use move_log::{MoveLog, MoveLogEntry};
pub use records::{RecordStore, SessionRecord, SessionTotals};
pub use session::{Phase, Session, SessionToken};
pub use snapshot::GameSnapshot;
pub use solver::{min_moves, solve, PlannedMove, Sequencer};
pub use tower::{PegSizes, Tower};
pub use validator::{validate, validate_planned};
