//! Fixed-interval callback slots and the render throttle.
//!
//! The main loop polls these every frame. A [`Schedule`] remembers which
//! session armed it; the token it hands back goes straight into
//! `Game::tick` / `Game::solver_step`, which drop it if the session changed.

use tui_hanoi_core::SessionToken;

#[derive(Debug, Clone)]
pub struct Schedule {
    interval_ms: u64,
    next_due_ms: Option<u64>,
    token: SessionToken,
}

impl Schedule {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms: interval_ms.max(1),
            next_due_ms: None,
            token: SessionToken::default(),
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// First fire one interval after `now_ms`
    pub fn arm(&mut self, now_ms: u64, token: SessionToken) {
        self.next_due_ms = Some(now_ms.saturating_add(self.interval_ms));
        self.token = token;
    }

    pub fn cancel(&mut self) {
        self.next_due_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due_ms.is_some()
    }

    pub fn token(&self) -> Option<SessionToken> {
        self.next_due_ms.map(|_| self.token)
    }

    /// Fire at most once per call when due.
    ///
    /// Deadlines advance by whole intervals, so a late poll does not shift the
    /// cadence; a long stall is worked off one interval per poll.
    pub fn poll(&mut self, now_ms: u64) -> Option<SessionToken> {
        let due = self.next_due_ms?;
        if now_ms < due {
            return None;
        }
        self.next_due_ms = Some(due.saturating_add(self.interval_ms));
        Some(self.token)
    }

    /// Milliseconds until the next fire, if armed
    pub fn remaining_ms(&self, now_ms: u64) -> Option<u64> {
        self.next_due_ms.map(|due| due.saturating_sub(now_ms))
    }
}

#[derive(Debug, Clone)]
pub struct RenderThrottle {
    min_static_interval_ms: u64,
    last_render_ms: u64,
    last_fingerprint: u64,
    has_rendered: bool,
}

impl RenderThrottle {
    pub fn new(min_static_interval_ms: u64) -> Self {
        Self {
            min_static_interval_ms,
            last_render_ms: 0,
            last_fingerprint: 0,
            has_rendered: false,
        }
    }

    /// Force the next call to render (e.g. after a resize)
    pub fn invalidate(&mut self) {
        self.has_rendered = false;
    }

    /// Decide whether to render a new frame.
    ///
    /// Renders immediately when the fingerprint changes, otherwise at most
    /// once per `min_static_interval_ms`.
    pub fn should_render(&mut self, now_ms: u64, fingerprint: u64) -> bool {
        if !self.has_rendered || fingerprint != self.last_fingerprint {
            self.has_rendered = true;
            self.last_render_ms = now_ms;
            self.last_fingerprint = fingerprint;
            return true;
        }

        if now_ms.saturating_sub(self.last_render_ms) >= self.min_static_interval_ms {
            self.last_render_ms = now_ms;
            return true;
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unarmed_schedule_never_fires() {
        let mut s = Schedule::new(1000);
        assert_eq!(s.poll(10_000), None);
        assert_eq!(s.token(), None);
    }

    #[test]
    fn fires_on_cadence_with_token() {
        let mut s = Schedule::new(120);
        s.arm(1_000, SessionToken(3));
        assert_eq!(s.poll(1_119), None);
        assert_eq!(s.poll(1_120), Some(SessionToken(3)));
        assert_eq!(s.poll(1_130), None);
        // Late poll keeps the original cadence.
        assert_eq!(s.poll(1_250), Some(SessionToken(3)));
        assert_eq!(s.remaining_ms(1_250), Some(110));
    }

    #[test]
    fn stall_is_worked_off_one_per_poll() {
        let mut s = Schedule::new(100);
        s.arm(0, SessionToken(1));
        let fired = (0..10).filter(|_| s.poll(350).is_some()).count();
        assert_eq!(fired, 3);
    }

    #[test]
    fn cancel_and_rearm() {
        let mut s = Schedule::new(100);
        s.arm(0, SessionToken(1));
        s.cancel();
        assert!(!s.is_armed());
        assert_eq!(s.poll(500), None);
        s.arm(500, SessionToken(2));
        assert_eq!(s.poll(600), Some(SessionToken(2)));
    }

    #[test]
    fn throttle_renders_on_change_or_interval() {
        let mut t = RenderThrottle::new(250);
        assert!(t.should_render(0, 7));
        assert!(!t.should_render(16, 7));
        assert!(t.should_render(32, 8));
        assert!(!t.should_render(200, 8));
        assert!(t.should_render(282, 8));
        t.invalidate();
        assert!(t.should_render(283, 8));
    }
}
