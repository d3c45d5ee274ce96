//! Countdown timer state machine
//!
//! The countdown is absent until armed by the first interaction of a session
//! (and only when the configured minutes are at least 1). Each tick removes
//! one second; reaching zero is reported exactly once.

/// Result of one countdown tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownTick {
    /// Not armed, or already expired
    Idle,
    /// Seconds remaining after this tick
    Running(u32),
    /// This tick reached zero
    Expired,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Countdown {
    seconds_left: Option<u32>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm with `minutes * 60` seconds.
    ///
    /// Does nothing (and returns false) when `minutes` is 0 or the countdown
    /// is already armed.
    pub fn arm(&mut self, minutes: u8) -> bool {
        if minutes == 0 || self.seconds_left.is_some() {
            return false;
        }
        self.seconds_left = Some(minutes as u32 * 60);
        true
    }

    pub fn tick(&mut self) -> CountdownTick {
        match self.seconds_left {
            None | Some(0) => CountdownTick::Idle,
            Some(s) => {
                let left = s - 1;
                self.seconds_left = Some(left);
                if left == 0 {
                    CountdownTick::Expired
                } else {
                    CountdownTick::Running(left)
                }
            }
        }
    }

    pub fn reset(&mut self) {
        self.seconds_left = None;
    }

    pub fn seconds_left(&self) -> Option<u32> {
        self.seconds_left
    }

    pub fn is_armed(&self) -> bool {
        self.seconds_left.is_some()
    }

    pub fn is_expired(&self) -> bool {
        self.seconds_left == Some(0)
    }

    /// `MM:SS`, or `00:00` when not armed
    pub fn display(&self) -> String {
        format_mm_ss(self.seconds_left.unwrap_or(0))
    }
}

/// Zero-padded `MM:SS`
pub fn format_mm_ss(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_minutes_never_arms() {
        let mut c = Countdown::new();
        assert!(!c.arm(0));
        assert_eq!(c.seconds_left(), None);
        assert_eq!(c.tick(), CountdownTick::Idle);
        assert_eq!(c.display(), "00:00");
    }

    #[test]
    fn arms_once() {
        let mut c = Countdown::new();
        assert!(c.arm(2));
        assert_eq!(c.seconds_left(), Some(120));
        assert!(!c.arm(5));
        assert_eq!(c.seconds_left(), Some(120));
        assert_eq!(c.display(), "02:00");
    }

    #[test]
    fn expires_exactly_once() {
        let mut c = Countdown::new();
        c.arm(1);
        for expected in (1..60).rev() {
            assert_eq!(c.tick(), CountdownTick::Running(expected));
        }
        assert_eq!(c.tick(), CountdownTick::Expired);
        assert!(c.is_expired());
        assert_eq!(c.tick(), CountdownTick::Idle);
        assert_eq!(c.seconds_left(), Some(0));
    }

    #[test]
    fn reset_clears_state() {
        let mut c = Countdown::new();
        c.arm(3);
        c.tick();
        c.reset();
        assert!(!c.is_armed());
        assert!(c.arm(1));
    }

    #[test]
    fn mm_ss_formatting() {
        assert_eq!(format_mm_ss(0), "00:00");
        assert_eq!(format_mm_ss(59), "00:59");
        assert_eq!(format_mm_ss(61), "01:01");
        assert_eq!(format_mm_ss(99 * 60), "99:00");
    }
}
