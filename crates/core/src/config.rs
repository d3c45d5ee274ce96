//! Session configuration.

use crate::error::HanoiError;
use crate::types::{DEFAULT_DISCS, MAX_DISCS, MAX_TIMER_MINUTES, MIN_DISCS};

/// Disc count and countdown minutes for a session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    num_discs: u8,
    /// 0 disables the countdown
    timer_minutes: u8,
}

impl GameConfig {
    /// Validated constructor
    pub fn new(num_discs: u8, timer_minutes: u8) -> Result<Self, HanoiError> {
        if !(MIN_DISCS..=MAX_DISCS).contains(&num_discs) {
            return Err(HanoiError::InvalidDiscCount(num_discs));
        }
        if timer_minutes > MAX_TIMER_MINUTES {
            return Err(HanoiError::InvalidTimerMinutes(timer_minutes));
        }
        Ok(Self {
            num_discs,
            timer_minutes,
        })
    }

    /// Clamp arbitrary values into range
    pub fn clamped(num_discs: i64, timer_minutes: i64) -> Self {
        Self {
            num_discs: num_discs.clamp(MIN_DISCS as i64, MAX_DISCS as i64) as u8,
            timer_minutes: timer_minutes.clamp(0, MAX_TIMER_MINUTES as i64) as u8,
        }
    }

    pub fn num_discs(&self) -> u8 {
        self.num_discs
    }

    pub fn timer_minutes(&self) -> u8 {
        self.timer_minutes
    }

    pub fn timer_enabled(&self) -> bool {
        self.timer_minutes >= 1
    }

    /// Step the disc count, clamped to the playable range
    pub fn with_disc_step(self, delta: i8) -> Self {
        Self::clamped(
            self.num_discs as i64 + delta as i64,
            self.timer_minutes as i64,
        )
    }

    pub fn with_more_discs(self) -> Self {
        self.with_disc_step(1)
    }

    pub fn with_fewer_discs(self) -> Self {
        self.with_disc_step(-1)
    }

    /// Step the countdown minutes, clamped to `0..=99`
    pub fn with_timer_step(self, delta: i8) -> Self {
        Self::clamped(
            self.num_discs as i64,
            self.timer_minutes as i64 + delta as i64,
        )
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            num_discs: DEFAULT_DISCS,
            timer_minutes: 0,
        }
    }
}
