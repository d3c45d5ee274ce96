//! App: glues key input, the game, the schedules and the panels together.
//!
//! Everything here is driven by explicit `now_ms` readings so the whole
//! front end can be exercised with a manual clock.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::path::PathBuf;

use crossterm::event::KeyEvent;
use tracing::{info, warn};

use tui_hanoi_core::{
    Clock, Game, GameSnapshot, HanoiError, Phase, SessionToken, SolverStep, TickOutcome,
};
use tui_hanoi_input::{handle_key_event, should_quit, Gesture, GrabHandler, NameEdit, NameField};
use tui_hanoi_term::HudView;
use tui_hanoi_types::{GameAction, MoveOutcome, SOLVER_STEP_MS, TIMER_TICK_MS};

use crate::config::AppConfig;
use crate::export::{self, NoRecords};
use crate::schedule::Schedule;

pub struct App<C: Clock> {
    game: Game<C>,
    grab: GrabHandler,
    name: Option<NameField>,
    show_log: bool,
    show_records: bool,
    status: Option<String>,
    timer: Schedule,
    solver: Schedule,
    export_path: PathBuf,
    quit: bool,
}

impl<C: Clock> App<C> {
    pub fn new(config: &AppConfig, clock: C) -> Self {
        Self {
            game: Game::with_clock(config.game_config(), clock),
            grab: GrabHandler::new(),
            name: None,
            show_log: false,
            show_records: false,
            status: None,
            timer: Schedule::new(TIMER_TICK_MS as u64),
            solver: Schedule::new(SOLVER_STEP_MS as u64),
            export_path: config.export_path.clone(),
            quit: false,
        }
    }

    pub fn game(&self) -> &Game<C> {
        &self.game
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn is_editing_name(&self) -> bool {
        self.name.is_some()
    }

    pub fn timer_schedule(&self) -> &Schedule {
        &self.timer
    }

    pub fn solver_schedule(&self) -> &Schedule {
        &self.solver
    }

    /// Route one key press.
    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64) {
        if let Some(field) = self.name.as_mut() {
            match field.handle_key(key) {
                NameEdit::Editing => {}
                NameEdit::Abort => self.name = None,
                NameEdit::Submit(text) => {
                    self.name = None;
                    self.save_record(&text);
                }
            }
            return;
        }

        if should_quit(key) {
            self.quit = true;
            return;
        }
        if let Some(action) = handle_key_event(key) {
            self.handle_action(action, now_ms);
        }
    }

    pub fn handle_action(&mut self, action: GameAction, now_ms: u64) {
        match action {
            GameAction::SelectPeg(_)
            | GameAction::CursorLeft
            | GameAction::CursorRight
            | GameAction::Grab
            | GameAction::Cancel => {
                if let Some(gesture) = self.grab.handle_action(action) {
                    self.apply_gesture(gesture);
                }
            }
            GameAction::Solve => match self.game.start_solve() {
                Ok(planned) => {
                    self.grab.reset();
                    let token = self.game.token();
                    self.solver.arm(now_ms, token);
                    self.status = Some(format!("Solving: {} moves", planned));
                    // First planned move lands on the key press.
                    self.step_solver(token);
                }
                Err(e) => {
                    warn!(error = %e, "solve refused");
                    self.status = Some(e.to_string());
                }
            },
            GameAction::Restart => {
                self.game.restart();
                self.reset_front();
            }
            GameAction::MoreDiscs | GameAction::FewerDiscs => {
                let delta = if action == GameAction::MoreDiscs { 1 } else { -1 };
                if self.game.change_discs(delta) {
                    self.reset_front();
                }
            }
            GameAction::TimerUp | GameAction::TimerDown => {
                let delta = if action == GameAction::TimerUp { 1 } else { -1 };
                let minutes = self.game.step_timer(delta);
                self.status = Some(format!("Timer: {} min", minutes));
            }
            GameAction::ToggleLog => self.show_log = !self.show_log,
            GameAction::ToggleRecords => self.show_records = !self.show_records,
            GameAction::EditName => self.name = Some(NameField::new()),
            GameAction::Export => self.export(),
        }
        self.sync_timer(now_ms);
    }

    /// Fire due schedules.
    pub fn update(&mut self, now_ms: u64) {
        while let Some(token) = self.timer.poll(now_ms) {
            match self.game.tick(token) {
                TickOutcome::Running(_) => {}
                TickOutcome::TimedOut => {
                    self.timer.cancel();
                    self.solver.cancel();
                    self.grab.reset();
                    self.status = Some("Time is up!".to_string());
                }
                TickOutcome::Idle | TickOutcome::Stale => self.timer.cancel(),
            }
        }

        if let Some(token) = self.solver.poll(now_ms) {
            self.step_solver(token);
        }

        self.sync_timer(now_ms);
    }

    pub fn snapshot(&self) -> GameSnapshot {
        self.game.snapshot()
    }

    pub fn hud(&self) -> HudView<'_> {
        HudView {
            cursor: self.grab.cursor(),
            log: self.show_log.then(|| self.game.move_log().entries()),
            records: self.show_records.then(|| self.game.records()),
            name_entry: self.name.as_ref().map(|f| f.text()),
            status: self.status.as_deref(),
        }
    }

    /// Hash of everything on screen, elapsed time at tenth-of-a-second grain
    pub fn fingerprint(&self, snap: &GameSnapshot) -> u64 {
        let mut h = DefaultHasher::new();
        let mut coarse = snap.clone();
        coarse.elapsed_ms /= 100;
        coarse.hash(&mut h);

        let hud = self.hud();
        hud.cursor.hash(&mut h);
        hud.log.map(|l| l.len()).hash(&mut h);
        hud.records.map(|r| r.len()).hash(&mut h);
        hud.name_entry.hash(&mut h);
        hud.status.hash(&mut h);
        h.finish()
    }

    fn apply_gesture(&mut self, gesture: Gesture) {
        match gesture {
            Gesture::PickUp(peg) => {
                if let Some(disc) = self.game.pick_up(peg) {
                    self.grab.hold(disc, peg);
                }
            }
            Gesture::Drop { disc, from, to } => {
                let report = self.game.attempt_move(disc, from, to);
                match report.outcome {
                    MoveOutcome::RuleBreak => {
                        self.status = Some("A larger disc cannot go on a smaller one".to_string());
                    }
                    MoveOutcome::Accepted if report.phase == Phase::Won => {
                        self.status = Some(format!("You win in {} moves!", report.moves));
                    }
                    _ => {}
                }
            }
            Gesture::Cancel { .. } => {
                self.game.cancel_pick_up();
            }
        }
    }

    fn step_solver(&mut self, token: SessionToken) {
        match self.game.solver_step(token) {
            SolverStep::Moved(_) => {}
            SolverStep::Finished(_) => {
                self.solver.cancel();
                self.status = Some(if self.game.phase() == Phase::Won {
                    "Solved!".to_string()
                } else {
                    "Solver finished".to_string()
                });
            }
            SolverStep::Idle | SolverStep::Stale => self.solver.cancel(),
        }
    }

    fn save_record(&mut self, name: &str) {
        self.status = Some(match self.game.save_record(name) {
            Ok(rec) => format!("Saved record for {}", rec.name),
            Err(HanoiError::EmptyName) => "Enter a name to save".to_string(),
            Err(e) => e.to_string(),
        });
    }

    fn export(&mut self) {
        let path = self.export_path.clone();
        self.status = Some(match export::write_records(&path, self.game.records()) {
            Ok(format) => format!(
                "Exported {} records to {} ({})",
                self.game.records().len(),
                path.display(),
                format.as_str()
            ),
            Err(e) if e.downcast_ref::<NoRecords>().is_some() => "No records to export".to_string(),
            Err(e) => {
                warn!(error = %format!("{:#}", e), "export failed");
                format!("Export failed: {:#}", e)
            }
        });
    }

    /// Keep the countdown schedule in step with the game's countdown.
    fn sync_timer(&mut self, now_ms: u64) {
        let running = self.game.countdown_running();
        if running && self.timer.token() != Some(self.game.token()) {
            info!(token = self.game.token().0, "countdown schedule armed");
            self.timer.arm(now_ms, self.game.token());
        } else if !running && self.timer.is_armed() {
            self.timer.cancel();
        }
    }

    fn reset_front(&mut self) {
        self.grab.reset();
        self.timer.cancel();
        self.solver.cancel();
        self.status = None;
    }
}
