//! Game - the single owner of all session state
//!
//! [`Game`] ties the tower, validator, session tracker, countdown, move log,
//! solver sequencer and record store together. Every mutation goes through
//! one of its methods:
//!
//! - human gestures arrive as [`Game::pick_up`] + [`Game::attempt_move`]
//! - the countdown advances through [`Game::tick`]
//! - solver replay advances through [`Game::solver_step`]
//!
//! `tick` and `solver_step` are driven by the caller's scheduler. Each call
//! carries the [`SessionToken`] that was live when it was scheduled; calls
//! for a previous session are ignored.

use tracing::{debug, info, warn};

use crate::clock::{Clock, MonotonicClock};
use crate::config::GameConfig;
use crate::countdown::{Countdown, CountdownTick};
use crate::error::HanoiError;
use crate::move_log::MoveLog;
use crate::records::{RecordStore, SessionRecord, SessionTotals};
use crate::session::{Phase, Session, SessionToken};
use crate::snapshot::GameSnapshot;
use crate::solver::{self, PlannedMove, Sequencer};
use crate::tower::Tower;
use crate::types::{DiscId, MoveOutcome, PegId, TerminalEvent};
use crate::validator::{validate, validate_planned};

/// A lifted disc waiting to be dropped
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interaction {
    pub disc: DiscId,
    pub from: PegId,
    /// Elapsed ms at pick-up; becomes the log entry's start time
    pub start_ms: u64,
}

/// Result of [`Game::attempt_move`] with the counters after it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveReport {
    pub outcome: MoveOutcome,
    pub moves: u32,
    pub rule_break_attempts: u32,
    pub phase: Phase,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverStep {
    /// A planned move was applied; more remain
    Moved(PlannedMove),
    /// The plan is exhausted; carries the move applied by this step, if any
    Finished(Option<PlannedMove>),
    /// No solve in progress
    Idle,
    /// Scheduled for an earlier session
    Stale,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Countdown not running
    Idle,
    /// Seconds left after this tick
    Running(u32),
    /// This tick ended the session
    TimedOut,
    /// Scheduled for an earlier session
    Stale,
}

pub struct Game<C: Clock = MonotonicClock> {
    clock: C,
    config: GameConfig,
    tower: Tower,
    session: Session,
    countdown: Countdown,
    log: MoveLog,
    sequencer: Option<Sequencer>,
    records: RecordStore,
    token: SessionToken,
    pending: Option<Interaction>,
}

impl Game<MonotonicClock> {
    pub fn new(config: GameConfig) -> Self {
        Self::with_clock(config, MonotonicClock::new())
    }
}

impl Default for Game<MonotonicClock> {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}

impl<C: Clock> Game<C> {
    pub fn with_clock(config: GameConfig, clock: C) -> Self {
        Self {
            clock,
            config,
            tower: Tower::new(config.num_discs()),
            session: Session::new(),
            countdown: Countdown::new(),
            log: MoveLog::new(),
            sequencer: None,
            records: RecordStore::new(),
            token: SessionToken::default(),
            pending: None,
        }
    }

    /// Replace the session with a fresh one built from `config`.
    ///
    /// Records survive; everything else is reset and the session token moves
    /// on so callbacks scheduled for the old session are dropped.
    pub fn new_game(&mut self, config: GameConfig) {
        self.token = self.token.next();
        self.config = config;
        self.tower = Tower::new(config.num_discs());
        self.session = Session::new();
        self.countdown.reset();
        self.log.clear();
        self.sequencer = None;
        self.pending = None;
        info!(
            token = self.token.0,
            discs = config.num_discs(),
            timer_minutes = config.timer_minutes(),
            "new game"
        );
    }

    pub fn restart(&mut self) {
        self.new_game(self.config);
    }

    /// Step the disc count by `delta` (clamped). Starts a new game when the
    /// count actually changes; returns whether it did.
    pub fn change_discs(&mut self, delta: i8) -> bool {
        let next = self.config.with_disc_step(delta);
        if next.num_discs() == self.config.num_discs() {
            return false;
        }
        self.new_game(next);
        true
    }

    /// Set the countdown length. Takes effect when the countdown is next
    /// armed; a running countdown keeps its remaining time.
    pub fn set_timer_minutes(&mut self, minutes: u8) -> Result<(), HanoiError> {
        self.config = GameConfig::new(self.config.num_discs(), minutes)?;
        Ok(())
    }

    /// Step the countdown length by `delta` (clamped); returns the new value
    pub fn step_timer(&mut self, delta: i8) -> u8 {
        self.config = self.config.with_timer_step(delta);
        self.config.timer_minutes()
    }

    /// Lift the top disc of `peg`.
    ///
    /// Counts as an interaction (elapsed baseline, countdown arming). Returns
    /// `None` when input is gated or the peg is empty.
    pub fn pick_up(&mut self, peg: PegId) -> Option<DiscId> {
        if !self.session.accepts_input() {
            return None;
        }
        let disc = self.tower.top(peg)?;
        let start_ms = self.begin_interaction();
        self.pending = Some(Interaction {
            disc,
            from: peg,
            start_ms,
        });
        Some(disc)
    }

    /// Put a lifted disc back without attempting a move
    pub fn cancel_pick_up(&mut self) -> Option<Interaction> {
        self.pending.take()
    }

    /// Arbitrate and, when legal, apply a player move.
    pub fn attempt_move(&mut self, disc: DiscId, from: PegId, to: PegId) -> MoveReport {
        let pending = self.pending.take();

        if !self.session.accepts_input() {
            return self.report(MoveOutcome::NoOp);
        }

        let outcome = validate(&self.tower, disc, from, to);
        match outcome {
            MoveOutcome::NoOp => {}
            MoveOutcome::RuleBreak => {
                self.begin_interaction();
                self.session.record_rule_break();
                debug!(
                    disc = disc.0,
                    from = from.number(),
                    to = to.number(),
                    attempts = self.session.rule_break_attempts(),
                    "rule break"
                );
            }
            MoveOutcome::Accepted => {
                let end_ms = self.begin_interaction();
                let start_ms = pending
                    .filter(|p| p.disc == disc && p.from == from)
                    .map(|p| p.start_ms)
                    .unwrap_or(end_ms);
                self.apply_accepted(from, to, start_ms, end_ms);
                self.check_win();
            }
        }

        self.report(outcome)
    }

    /// Begin replaying the optimal plan; returns the number of planned moves.
    pub fn start_solve(&mut self) -> Result<usize, HanoiError> {
        if self.session.game_over() {
            return Err(HanoiError::SessionOver);
        }
        if self.session.solving() {
            return Err(HanoiError::SolverBusy);
        }
        if !self.tower.is_canonical() {
            return Err(HanoiError::SolverPreconditionUnmet);
        }

        let plan = solver::solve(self.tower.num_discs());
        let len = plan.len();
        self.sequencer = Some(Sequencer::new(plan));
        self.pending = None;
        self.session.set_solving(true);
        info!(token = self.token.0, planned = len, "solver started");
        Ok(len)
    }

    /// Apply the next applicable planned move.
    ///
    /// Planned moves that no longer apply (empty source, size violation) are
    /// skipped within the same step. The win check runs once the plan is
    /// exhausted.
    pub fn solver_step(&mut self, token: SessionToken) -> SolverStep {
        if token != self.token {
            warn!(
                stale = token.0,
                live = self.token.0,
                "dropping solver step for old session"
            );
            return SolverStep::Stale;
        }
        if !self.session.solving() {
            return SolverStep::Idle;
        }
        let Some(mut seq) = self.sequencer.take() else {
            self.session.set_solving(false);
            return SolverStep::Idle;
        };

        loop {
            let Some(mv) = seq.next_move() else {
                self.finish_solve();
                return SolverStep::Finished(None);
            };

            match validate_planned(&self.tower, mv.from, mv.to) {
                Some((_, MoveOutcome::Accepted)) => {
                    let at = self.begin_interaction();
                    self.apply_accepted(mv.from, mv.to, at, at);
                    if seq.is_finished() {
                        self.finish_solve();
                        return SolverStep::Finished(Some(mv));
                    }
                    self.sequencer = Some(seq);
                    return SolverStep::Moved(mv);
                }
                other => {
                    warn!(
                        step = seq.position(),
                        from = mv.from.number(),
                        to = mv.to.number(),
                        outcome = other.map(|(_, o)| o.as_str()).unwrap_or("empty"),
                        "skipping planned move"
                    );
                }
            }
        }
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self, token: SessionToken) -> TickOutcome {
        if token != self.token {
            warn!(
                stale = token.0,
                live = self.token.0,
                "dropping timer tick for old session"
            );
            return TickOutcome::Stale;
        }
        if self.session.game_over() {
            return TickOutcome::Idle;
        }

        match self.countdown.tick() {
            CountdownTick::Idle => TickOutcome::Idle,
            CountdownTick::Running(left) => TickOutcome::Running(left),
            CountdownTick::Expired => {
                self.finish(Phase::TimedOut);
                TickOutcome::TimedOut
            }
        }
    }

    /// Save a record of the live session under `name`.
    pub fn save_record(&mut self, name: &str) -> Result<&SessionRecord, HanoiError> {
        let totals = SessionTotals {
            num_discs: self.config.num_discs(),
            moves: self.session.moves(),
            rule_break_attempts: self.session.rule_break_attempts(),
            timer_minutes: self.config.timer_minutes(),
            remaining_seconds: if self.config.timer_enabled() {
                self.countdown.seconds_left()
            } else {
                None
            },
            elapsed_ms: self.elapsed_ms(),
        };
        self.records.save(name, totals)
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn tower(&self) -> &Tower {
        &self.tower
    }

    pub fn phase(&self) -> Phase {
        self.session.phase()
    }

    pub fn moves(&self) -> u32 {
        self.session.moves()
    }

    pub fn rule_break_attempts(&self) -> u32 {
        self.session.rule_break_attempts()
    }

    pub fn is_game_over(&self) -> bool {
        self.session.game_over()
    }

    pub fn is_solving(&self) -> bool {
        self.session.solving()
    }

    pub fn interactions_enabled(&self) -> bool {
        self.session.interactions_enabled()
    }

    /// Whether human input is currently processed
    pub fn accepts_input(&self) -> bool {
        self.session.accepts_input()
    }

    pub fn seconds_left(&self) -> Option<u32> {
        self.countdown.seconds_left()
    }

    /// Countdown as `MM:SS`
    pub fn timer_display(&self) -> String {
        self.countdown.display()
    }

    /// True while the countdown should keep receiving ticks
    pub fn countdown_running(&self) -> bool {
        self.countdown.is_armed() && !self.countdown.is_expired() && !self.session.game_over()
    }

    pub fn move_log(&self) -> &MoveLog {
        &self.log
    }

    pub fn records(&self) -> &[SessionRecord] {
        self.records.records()
    }

    pub fn min_moves(&self) -> u64 {
        solver::min_moves(self.tower.num_discs())
    }

    /// Milliseconds since the first interaction, frozen once the game is over
    pub fn elapsed_ms(&self) -> u64 {
        self.session.elapsed_at(self.clock.now_ms())
    }

    pub fn token(&self) -> SessionToken {
        self.token
    }

    pub fn pending(&self) -> Option<Interaction> {
        self.pending
    }

    /// `(applied or skipped, planned)` while a solve is running
    pub fn solver_progress(&self) -> Option<(usize, usize)> {
        self.sequencer.as_ref().map(|s| (s.position(), s.len()))
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for peg in PegId::ALL {
            out.pegs[peg.index()] = self.tower.sizes_on(peg);
        }
        out.num_discs = self.tower.num_discs();
        out.moves = self.session.moves();
        out.rule_break_attempts = self.session.rule_break_attempts();
        out.phase = self.session.phase();
        out.game_over = self.session.game_over();
        out.solving = self.session.solving();
        out.interactions_enabled = self.session.interactions_enabled();
        out.timer_minutes = self.config.timer_minutes();
        out.seconds_left = self.countdown.seconds_left();
        out.lifted = self.pending.map(|p| p.from);
        out.solver_progress = self.solver_progress();
        out.min_moves = self.min_moves();
        out.elapsed_ms = self.elapsed_ms();
        out.token = self.token;
    }

    fn report(&self, outcome: MoveOutcome) -> MoveReport {
        MoveReport {
            outcome,
            moves: self.session.moves(),
            rule_break_attempts: self.session.rule_break_attempts(),
            phase: self.session.phase(),
        }
    }

    /// Mark an interaction; returns elapsed ms at this moment.
    fn begin_interaction(&mut self) -> u64 {
        let now = self.clock.now_ms();
        if self.session.touch(now) {
            debug!(token = self.token.0, "first interaction");
        }
        if self.countdown.arm(self.config.timer_minutes()) {
            info!(minutes = self.config.timer_minutes(), "countdown armed");
        }
        self.session.elapsed_at(now)
    }

    fn apply_accepted(&mut self, from: PegId, to: PegId, start_ms: u64, end_ms: u64) {
        if let Some(disc) = self.tower.move_top(from, to) {
            self.session.record_move();
            self.log.push_move(start_ms, end_ms, from, to);
            debug!(
                disc = disc.0,
                from = from.number(),
                to = to.number(),
                moves = self.session.moves(),
                "move accepted"
            );
        }
    }

    fn check_win(&mut self) -> bool {
        let n = self.tower.num_discs() as usize;
        if self.tower.height(PegId::Destination) == n && !self.session.game_over() {
            self.finish(Phase::Won);
            return true;
        }
        false
    }

    fn finish_solve(&mut self) {
        self.sequencer = None;
        self.session.set_solving(false);
        let won = self.check_win();
        info!(token = self.token.0, won, "solver finished");
    }

    fn finish(&mut self, phase: Phase) {
        let elapsed = self.session.finish(phase, self.clock.now_ms());
        self.sequencer = None;
        self.pending = None;
        let event = match phase {
            Phase::Won => TerminalEvent::Success,
            _ => TerminalEvent::GameOver,
        };
        self.log.push_terminal(elapsed, event);
        info!(
            token = self.token.0,
            outcome = event.tag(),
            moves = self.session.moves(),
            rule_breaks = self.session.rule_break_attempts(),
            elapsed_ms = elapsed,
            "session over"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::move_log::MoveLogEntry;

    fn game(discs: u8, minutes: u8) -> (Game<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let cfg = GameConfig::new(discs, minutes).unwrap();
        (Game::with_clock(cfg, clock.clone()), clock)
    }

    fn drag(game: &mut Game<ManualClock>, from: PegId, to: PegId) -> MoveReport {
        let disc = game.pick_up(from).expect("disc on peg");
        game.attempt_move(disc, from, to)
    }

    fn play_optimal(game: &mut Game<ManualClock>) {
        for mv in solver::solve(game.tower().num_discs()) {
            drag(game, mv.from, mv.to);
        }
    }

    #[test]
    fn first_pick_up_starts_session() {
        let (mut g, clock) = game(3, 0);
        assert_eq!(g.phase(), Phase::Idle);
        clock.set(500);
        g.pick_up(PegId::Source).unwrap();
        assert_eq!(g.phase(), Phase::InProgress);
        clock.set(1_700);
        assert_eq!(g.elapsed_ms(), 1_200);
    }

    #[test]
    fn accepted_move_logs_gesture_times() {
        let (mut g, clock) = game(3, 0);
        clock.set(1_000);
        let disc = g.pick_up(PegId::Source).unwrap();
        clock.set(1_450);
        let report = g.attempt_move(disc, PegId::Source, PegId::Destination);
        assert_eq!(report.outcome, MoveOutcome::Accepted);
        assert_eq!(report.moves, 1);
        assert_eq!(
            g.move_log().last(),
            Some(&MoveLogEntry::Move {
                start_ms: 0,
                end_ms: 450,
                from: PegId::Source,
                to: PegId::Destination,
            })
        );
        assert_eq!(g.move_log().to_text(), "0, 450, 1, 3");
    }

    #[test]
    fn rule_break_counts_and_leaves_tower() {
        let (mut g, _) = game(3, 0);
        drag(&mut g, PegId::Source, PegId::Destination);
        let before = g.tower().clone();
        let report = drag(&mut g, PegId::Source, PegId::Destination);
        assert_eq!(report.outcome, MoveOutcome::RuleBreak);
        assert_eq!(report.moves, 1);
        assert_eq!(report.rule_break_attempts, 1);
        assert_eq!(g.tower(), &before);
        assert_eq!(g.move_log().len(), 1);
    }

    #[test]
    fn same_peg_drop_is_noop() {
        let (mut g, _) = game(3, 0);
        let report = drag(&mut g, PegId::Source, PegId::Source);
        assert_eq!(report.outcome, MoveOutcome::NoOp);
        assert_eq!(report.moves, 0);
        assert_eq!(report.rule_break_attempts, 0);
    }

    #[test]
    fn pick_up_on_empty_peg_is_none() {
        let (mut g, _) = game(3, 0);
        assert_eq!(g.pick_up(PegId::Auxiliary), None);
        assert_eq!(g.phase(), Phase::Idle);
    }

    #[test]
    fn win_fires_once() {
        let (mut g, _) = game(3, 0);
        play_optimal(&mut g);
        assert_eq!(g.phase(), Phase::Won);
        assert!(g.is_game_over());
        assert!(!g.interactions_enabled());
        assert_eq!(g.moves(), 7);

        let terminals = g
            .move_log()
            .entries()
            .iter()
            .filter(|e| e.is_terminal())
            .count();
        assert_eq!(terminals, 1);
        assert_eq!(g.pick_up(PegId::Destination), None);
        let top = g.tower().top(PegId::Destination).unwrap();
        let report = g.attempt_move(top, PegId::Destination, PegId::Source);
        assert_eq!(report.outcome, MoveOutcome::NoOp);
        assert_eq!(report.moves, 7);
    }

    #[test]
    fn win_freezes_elapsed() {
        let (mut g, clock) = game(3, 0);
        clock.set(100);
        play_optimal(&mut g);
        clock.set(900);
        let frozen = g.elapsed_ms();
        clock.set(50_000);
        assert_eq!(g.elapsed_ms(), frozen);
    }

    #[test]
    fn countdown_arms_on_first_interaction() {
        let (mut g, _) = game(3, 1);
        let token = g.token();
        assert_eq!(g.tick(token), TickOutcome::Idle);
        assert_eq!(g.seconds_left(), None);
        assert_eq!(g.timer_display(), "00:00");

        g.pick_up(PegId::Source);
        assert_eq!(g.seconds_left(), Some(60));
        assert!(g.countdown_running());
        assert_eq!(g.tick(token), TickOutcome::Running(59));
        assert_eq!(g.timer_display(), "00:59");
    }

    #[test]
    fn disabled_countdown_never_arms() {
        let (mut g, _) = game(3, 0);
        drag(&mut g, PegId::Source, PegId::Destination);
        assert_eq!(g.seconds_left(), None);
        assert!(!g.countdown_running());
        assert_eq!(g.tick(g.token()), TickOutcome::Idle);
    }

    #[test]
    fn timeout_fires_once_and_gates_input() {
        let (mut g, _) = game(3, 1);
        let token = g.token();
        drag(&mut g, PegId::Source, PegId::Destination);

        let mut timed_out = 0;
        for _ in 0..120 {
            if g.tick(token) == TickOutcome::TimedOut {
                timed_out += 1;
            }
        }
        assert_eq!(timed_out, 1);
        assert_eq!(g.phase(), Phase::TimedOut);
        assert_eq!(g.seconds_left(), Some(0));
        assert!(matches!(
            g.move_log().last(),
            Some(MoveLogEntry::Terminal {
                event: TerminalEvent::GameOver,
                ..
            })
        ));

        let top = g.tower().top(PegId::Source).unwrap();
        let report = g.attempt_move(top, PegId::Source, PegId::Auxiliary);
        assert_eq!(report.outcome, MoveOutcome::NoOp);
    }

    #[test]
    fn stale_tokens_are_ignored() {
        let (mut g, _) = game(3, 1);
        let old = g.token();
        g.pick_up(PegId::Source);
        g.restart();
        assert_ne!(g.token(), old);
        assert_eq!(g.tick(old), TickOutcome::Stale);
        assert_eq!(g.solver_step(old), SolverStep::Stale);
        assert_eq!(g.seconds_left(), None);
    }

    #[test]
    fn new_game_keeps_records() {
        let (mut g, _) = game(4, 0);
        drag(&mut g, PegId::Source, PegId::Auxiliary);
        g.save_record("Alice").unwrap();
        g.restart();
        assert_eq!(g.moves(), 0);
        assert!(g.move_log().is_empty());
        assert_eq!(g.records().len(), 1);
        assert_eq!(g.tower().num_discs(), 4);
    }

    #[test]
    fn change_discs_restarts_only_on_change() {
        let (mut g, _) = game(3, 0);
        let token = g.token();
        assert!(!g.change_discs(-1));
        assert_eq!(g.token(), token);
        assert!(g.change_discs(1));
        assert_eq!(g.tower().num_discs(), 4);
        assert_ne!(g.token(), token);
        assert_eq!(g.min_moves(), 15);
    }

    #[test]
    fn timer_change_applies_when_armed() {
        let (mut g, _) = game(3, 0);
        assert_eq!(g.step_timer(2), 2);
        g.pick_up(PegId::Source);
        assert_eq!(g.seconds_left(), Some(120));
        g.set_timer_minutes(5).unwrap();
        assert_eq!(g.seconds_left(), Some(120));
        assert_eq!(
            g.set_timer_minutes(100),
            Err(HanoiError::InvalidTimerMinutes(100))
        );
    }

    #[test]
    fn solver_replays_canonical_plan() {
        let (mut g, _) = game(3, 0);
        assert_eq!(g.start_solve(), Ok(7));
        assert!(g.is_solving());
        assert!(!g.interactions_enabled());
        assert_eq!(g.pick_up(PegId::Source), None);

        let token = g.token();
        let mut applied = Vec::new();
        loop {
            match g.solver_step(token) {
                SolverStep::Moved(mv) => applied.push(mv.indices()),
                SolverStep::Finished(last) => {
                    applied.extend(last.map(|m| m.indices()));
                    break;
                }
                other => panic!("unexpected step {:?}", other),
            }
        }

        assert_eq!(
            applied,
            vec![(0, 2), (0, 1), (2, 1), (0, 2), (1, 0), (1, 2), (0, 2)]
        );
        assert_eq!(g.moves(), 7);
        assert_eq!(g.phase(), Phase::Won);
        assert!(!g.is_solving());
        assert_eq!(g.tower().sizes_on(PegId::Destination).as_slice(), &[3, 2, 1]);
        assert_eq!(g.solver_step(token), SolverStep::Idle);
    }

    #[test]
    fn solver_rejects_non_canonical_start() {
        let (mut g, _) = game(3, 0);
        drag(&mut g, PegId::Source, PegId::Auxiliary);
        assert_eq!(g.start_solve(), Err(HanoiError::SolverPreconditionUnmet));
        assert!(!g.is_solving());
        g.restart();
        assert_eq!(g.start_solve(), Ok(7));
    }

    #[test]
    fn solver_rejects_busy_and_over() {
        let (mut g, _) = game(3, 0);
        g.start_solve().unwrap();
        assert_eq!(g.start_solve(), Err(HanoiError::SolverBusy));

        let (mut g, _) = game(3, 0);
        play_optimal(&mut g);
        assert_eq!(g.start_solve(), Err(HanoiError::SessionOver));
    }

    #[test]
    fn solver_skips_moves_broken_by_interference() {
        let (mut g, _) = game(3, 0);
        g.start_solve().unwrap();
        let token = g.token();

        // Smallest disc moved aside behind the solver's back.
        g.tower.move_top(PegId::Source, PegId::Auxiliary);

        let mut steps = 0;
        while let SolverStep::Moved(_) = g.solver_step(token) {
            steps += 1;
            assert!(steps < 16);
        }
        assert!(!g.is_solving());
        assert!(g.tower().is_ordered());
        // Applied: (1,3), (2,1), (1,3). Every other planned move is skipped.
        assert_eq!(g.moves(), 3);
        assert_eq!(g.tower().sizes_on(PegId::Source).as_slice(), &[3]);
        assert!(g.tower().is_empty(PegId::Auxiliary));
        assert_eq!(g.tower().sizes_on(PegId::Destination).as_slice(), &[2, 1]);
        assert_eq!(g.rule_break_attempts(), 0);
        assert_ne!(g.phase(), Phase::Won);
    }

    #[test]
    fn timeout_during_solve_stops_replay() {
        let (mut g, _) = game(3, 1);
        let token = g.token();
        g.start_solve().unwrap();
        g.solver_step(token);
        for _ in 0..60 {
            g.tick(token);
        }
        assert_eq!(g.phase(), Phase::TimedOut);
        assert!(!g.is_solving());
        assert_eq!(g.solver_step(token), SolverStep::Idle);
    }

    #[test]
    fn save_record_matches_live_counters() {
        let (mut g, clock) = game(3, 2);
        clock.set(10);
        drag(&mut g, PegId::Source, PegId::Destination);
        drag(&mut g, PegId::Source, PegId::Destination);
        g.tick(g.token());
        clock.set(2_010);

        assert_eq!(g.save_record("   "), Err(HanoiError::EmptyName));
        let rec = g.save_record("Alice").unwrap().clone();
        assert_eq!(rec.name, "Alice");
        assert_eq!(rec.num_discs, 3);
        assert_eq!(rec.moves, 1);
        assert_eq!(rec.rule_break_attempts, 1);
        assert_eq!(rec.timer_minutes, 2);
        assert_eq!(rec.remaining_seconds, Some(119));
        assert_eq!(rec.elapsed_ms, 2_000);
        assert_eq!(g.records().len(), 1);
    }

    #[test]
    fn snapshot_reflects_state() {
        let (mut g, _) = game(3, 0);
        g.pick_up(PegId::Source);
        let snap = g.snapshot();
        assert_eq!(snap.pegs[0].as_slice(), &[3, 2, 1]);
        assert_eq!(snap.lifted, Some(PegId::Source));
        assert_eq!(snap.min_moves, 7);
        assert_eq!(snap.phase, Phase::InProgress);
        assert!(snap.pegs[2].is_empty());
    }
}
