//! Terminal input module (game-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`], turns peg
//! actions into pick-up/drop gestures, and handles the player-name field.
//! Nothing here knows the rules; the game arbitrates every gesture.

pub mod handler;
pub mod map;
pub mod text;

pub use tui_hanoi_types as types;

pub use handler::{Gesture, GrabHandler, Held};
pub use map::{handle_key_event, should_quit};
pub use text::{NameEdit, NameField};
