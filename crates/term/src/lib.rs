//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids
//! widget/layout libraries and renders into a plain framebuffer that is
//! diffed and flushed to the terminal.
//!
//! - [`fb`]: styled cell framebuffer
//! - [`game_view`]: snapshot + HUD state to framebuffer (pure)
//! - [`palette`]: pastel disc colors
//! - [`renderer`]: diff encoder and terminal lifecycle

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use tui_hanoi_core as core;
pub use tui_hanoi_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HudView, Viewport};
pub use palette::Palette;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
