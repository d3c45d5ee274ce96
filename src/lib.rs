//! TUI Tower of Hanoi (workspace facade crate).
//!
//! The rules engine, key mapping and renderer live in dedicated crates under
//! `crates/`; this package re-exports them as `tui_hanoi::{core,input,term,types}`
//! and adds the front-end glue used by the binary.

pub mod app;
pub mod config;
pub mod export;
pub mod logging;
pub mod schedule;

pub use tui_hanoi_core as core;
pub use tui_hanoi_input as input;
pub use tui_hanoi_term as term;
pub use tui_hanoi_types as types;
