//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no runtime dependencies, making them usable
//! in any context (core rules, terminal rendering, key mapping).
//!
//! # Pegs
//!
//! Three pegs exist for the whole session:
//!
//! | Peg | Index | Shown as | Role |
//! |-----|-------|----------|------|
//! | `Source` | 0 | 1 | Canonical start, all discs spawn here |
//! | `Auxiliary` | 1 | 2 | Spare peg used by the solver |
//! | `Destination` | 2 | 3 | Goal peg, checked by win detection |
//!
//! # Limits and Cadences
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_DISCS` | 3 | Smallest playable tower |
//! | `MAX_DISCS` | 8 | Largest playable tower |
//! | `MAX_TIMER_MINUTES` | 99 | Countdown upper bound (0 disables it) |
//! | `TIMER_TICK_MS` | 1000 | Countdown tick interval |
//! | `SOLVER_STEP_MS` | 120 | Delay between two solver moves |
//! | `FRAME_MS` | 16 | Front-end poll/render interval (~60 FPS) |
//!
//! # Examples
//!
//! ```
//! use tui_hanoi_types::{GameAction, MoveOutcome, PegId, MAX_DISCS, MIN_DISCS};
//!
//! // Pegs are 0-indexed internally and 1-indexed for display
//! let peg = PegId::from_index(2).unwrap();
//! assert_eq!(peg, PegId::Destination);
//! assert_eq!(peg.number(), 3);
//!
//! // Parse a front-end action
//! let action = GameAction::from_str("solve").unwrap();
//! assert_eq!(action, GameAction::Solve);
//!
//! assert!(MoveOutcome::Accepted.is_accepted());
//! assert!(MIN_DISCS < MAX_DISCS);
//! ```

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Number of pegs on the board
pub const PEG_COUNT: usize = 3;

/// Smallest disc count a session can be configured with
pub const MIN_DISCS: u8 = 3;

/// Largest disc count a session can be configured with
pub const MAX_DISCS: u8 = 8;

/// Disc count used when nothing else is configured
pub const DEFAULT_DISCS: u8 = 3;

/// Largest countdown, in minutes (0 disables the countdown)
pub const MAX_TIMER_MINUTES: u8 = 99;

/// Countdown tick interval (one second)
pub const TIMER_TICK_MS: u32 = 1000;

/// Delay between two consecutive solver moves
pub const SOLVER_STEP_MS: u32 = 120;

/// Front-end frame interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u32 = 16;

/// Longest player name accepted by the name entry field
pub const MAX_NAME_LEN: usize = 24;


/// One of the three pegs.
///
/// The discriminant is the 0-based index used by the core. The solver
/// convention names peg 0 the source, peg 1 the auxiliary and peg 2 the
/// destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PegId {
    Source = 0,
    Auxiliary = 1,
    Destination = 2,
}

impl PegId {
    /// All pegs in index order
    pub const ALL: [PegId; PEG_COUNT] = [PegId::Source, PegId::Auxiliary, PegId::Destination];

    /// Peg for a 0-based index
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_hanoi_types::PegId;
    ///
    /// assert_eq!(PegId::from_index(0), Some(PegId::Source));
    /// assert_eq!(PegId::from_index(7), None);
    /// ```
    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(PegId::Source),
            1 => Some(PegId::Auxiliary),
            2 => Some(PegId::Destination),
            _ => None,
        }
    }

    /// Peg for a 1-based display number
    pub fn from_number(number: u8) -> Option<Self> {
        number
            .checked_sub(1)
            .and_then(|i| Self::from_index(i as usize))
    }

    /// 0-based index
    pub fn index(self) -> usize {
        self as usize
    }

    /// 1-based number shown to the player and written to the move log
    pub fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Neighbour to the left, saturating at the source peg
    pub fn left(self) -> Self {
        match self {
            PegId::Source | PegId::Auxiliary => PegId::Source,
            PegId::Destination => PegId::Auxiliary,
        }
    }

    /// Neighbour to the right, saturating at the destination peg
    pub fn right(self) -> Self {
        match self {
            PegId::Source => PegId::Auxiliary,
            PegId::Auxiliary | PegId::Destination => PegId::Destination,
        }
    }
}

impl fmt::Display for PegId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Identity of a disc within one session.
///
/// Ids are handed out in spawn order, so the largest disc of a fresh tower
/// is `DiscId(0)`. An id says nothing about the disc's size; look the size up
/// in the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DiscId(pub u8);

impl DiscId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Result of arbitrating one candidate move
///
/// - **Accepted**: the disc moved, `moves` went up by one
/// - **RuleBreak**: the disc would have landed on a smaller one; counted, not applied
/// - **NoOp**: nothing happened (same peg, stale disc reference, input gated)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveOutcome {
    Accepted,
    RuleBreak,
    NoOp,
}

impl MoveOutcome {
    pub fn is_accepted(self) -> bool {
        self == MoveOutcome::Accepted
    }

    pub fn as_str(self) -> &'static str {
        match self {
            MoveOutcome::Accepted => "accepted",
            MoveOutcome::RuleBreak => "ruleBreak",
            MoveOutcome::NoOp => "noOp",
        }
    }
}

/// Front-end actions
///
/// These are produced by the key mapper and consumed by the app loop. Only
/// `Grab`/`SelectPeg` end up as candidate moves; the rest drive session
/// controls and panels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Jump the cursor to a peg and grab/drop there
    SelectPeg(PegId),
    /// Move the peg cursor one peg left
    CursorLeft,
    /// Move the peg cursor one peg right
    CursorRight,
    /// Grab the top disc under the cursor, or drop the held disc there
    Grab,
    /// Put the held disc back where it came from
    Cancel,
    /// Run the optimal solver from the canonical start
    Solve,
    /// Start a new session with the current configuration
    Restart,
    /// One more disc (restarts the session)
    MoreDiscs,
    /// One fewer disc (restarts the session)
    FewerDiscs,
    /// One more countdown minute
    TimerUp,
    /// One fewer countdown minute
    TimerDown,
    /// Show or hide the move log panel
    ToggleLog,
    /// Show or hide the records table
    ToggleRecords,
    /// Start typing a player name for saving
    EditName,
    /// Write the record store to the export path
    Export,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_hanoi_types::{GameAction, PegId};
    ///
    /// assert_eq!(GameAction::from_str("grab"), Some(GameAction::Grab));
    /// assert_eq!(GameAction::from_str("peg2"), Some(GameAction::SelectPeg(PegId::Auxiliary)));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        let lower = s.to_lowercase();
        if let Some(n) = lower.strip_prefix("peg") {
            return n
                .parse::<u8>()
                .ok()
                .and_then(PegId::from_number)
                .map(GameAction::SelectPeg);
        }
        match lower.as_str() {
            "cursorleft" => Some(GameAction::CursorLeft),
            "cursorright" => Some(GameAction::CursorRight),
            "grab" => Some(GameAction::Grab),
            "cancel" => Some(GameAction::Cancel),
            "solve" => Some(GameAction::Solve),
            "restart" => Some(GameAction::Restart),
            "morediscs" => Some(GameAction::MoreDiscs),
            "fewerdiscs" => Some(GameAction::FewerDiscs),
            "timerup" => Some(GameAction::TimerUp),
            "timerdown" => Some(GameAction::TimerDown),
            "togglelog" => Some(GameAction::ToggleLog),
            "togglerecords" => Some(GameAction::ToggleRecords),
            "editname" => Some(GameAction::EditName),
            "export" => Some(GameAction::Export),
            _ => None,
        }
    }

    /// camelCase name, the inverse of [`GameAction::from_str`]
    pub fn name(&self) -> String {
        match self {
            GameAction::SelectPeg(peg) => format!("peg{}", peg.number()),
            GameAction::CursorLeft => "cursorLeft".to_string(),
            GameAction::CursorRight => "cursorRight".to_string(),
            GameAction::Grab => "grab".to_string(),
            GameAction::Cancel => "cancel".to_string(),
            GameAction::Solve => "solve".to_string(),
            GameAction::Restart => "restart".to_string(),
            GameAction::MoreDiscs => "moreDiscs".to_string(),
            GameAction::FewerDiscs => "fewerDiscs".to_string(),
            GameAction::TimerUp => "timerUp".to_string(),
            GameAction::TimerDown => "timerDown".to_string(),
            GameAction::ToggleLog => "toggleLog".to_string(),
            GameAction::ToggleRecords => "toggleRecords".to_string(),
            GameAction::EditName => "editName".to_string(),
            GameAction::Export => "export".to_string(),
        }
    }
}

/// Terminal events written to the move log
///
/// The tags are the literal strings shown in the log window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TerminalEvent {
    /// Countdown reached zero
    GameOver,
    /// All discs reached the destination peg
    Success,
}

impl TerminalEvent {
    pub fn tag(self) -> &'static str {
        match self {
            TerminalEvent::GameOver => "GAMEOVER",
            TerminalEvent::Success => "Success!",
        }
    }
}

impl fmt::Display for TerminalEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
