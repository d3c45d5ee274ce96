//! Session rules through the public API

use tui_hanoi::core::{
    Game, GameConfig, HanoiError, ManualClock, MoveLogEntry, Phase, TickOutcome,
};
use tui_hanoi::types::{MoveOutcome, PegId, TerminalEvent};

fn new_game(discs: u8, minutes: u8) -> (Game<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let game = Game::with_clock(GameConfig::new(discs, minutes).unwrap(), clock.clone());
    (game, clock)
}

fn play(game: &mut Game<ManualClock>, from: PegId, to: PegId) -> MoveOutcome {
    match game.pick_up(from) {
        Some(disc) => game.attempt_move(disc, from, to).outcome,
        None => MoveOutcome::NoOp,
    }
}

#[test]
fn accepted_moves_keep_pegs_ordered() {
    let (mut game, _) = new_game(4, 0);
    let script = [
        (PegId::Source, PegId::Auxiliary),
        (PegId::Source, PegId::Destination),
        (PegId::Source, PegId::Auxiliary),
        (PegId::Auxiliary, PegId::Destination),
        (PegId::Source, PegId::Auxiliary),
    ];
    for (from, to) in script {
        play(&mut game, from, to);
        assert!(game.tower().is_ordered());
    }
    assert_eq!(game.moves(), 4);
    assert_eq!(game.rule_break_attempts(), 1);
}

/// Fixed-seed LCG so the walk is the same on every run
struct Lcg(u64);

impl Lcg {
    fn next_peg(&mut self) -> PegId {
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        PegId::ALL[((self.0 >> 33) % 3) as usize]
    }
}

#[test]
fn random_walk_never_breaks_ordering() {
    for n in 3..=8u8 {
        let (mut game, _) = new_game(n, 0);
        let mut rng = Lcg(0x5EED ^ n as u64);
        let (mut accepted, mut breaks) = (0u32, 0u32);

        for _ in 0..2_000 {
            if game.phase() == Phase::Won {
                break;
            }
            let (from, to) = (rng.next_peg(), rng.next_peg());
            match play(&mut game, from, to) {
                MoveOutcome::Accepted => {
                    accepted += 1;
                    assert!(game.tower().is_ordered(), "n={} after {}->{}", n, from, to);
                }
                MoveOutcome::RuleBreak => breaks += 1,
                MoveOutcome::NoOp => {}
            }
            let total: usize = PegId::ALL.iter().map(|&p| game.tower().height(p)).sum();
            assert_eq!(total, n as usize);
        }

        assert_eq!(game.moves(), accepted);
        assert_eq!(game.rule_break_attempts(), breaks);
        assert!(accepted > 0, "n={} walk made no moves", n);
    }
}

#[test]
fn rule_break_leaves_pegs_and_moves_alone() {
    let (mut game, _) = new_game(3, 0);
    assert_eq!(play(&mut game, PegId::Source, PegId::Auxiliary), MoveOutcome::Accepted);
    let tower = game.tower().clone();

    assert_eq!(play(&mut game, PegId::Source, PegId::Auxiliary), MoveOutcome::RuleBreak);
    assert_eq!(game.tower(), &tower);
    assert_eq!(game.moves(), 1);
    assert_eq!(game.rule_break_attempts(), 1);
}

#[test]
fn same_peg_and_stale_discs_are_noops() {
    let (mut game, _) = new_game(3, 0);
    assert_eq!(play(&mut game, PegId::Source, PegId::Source), MoveOutcome::NoOp);

    // The bottom disc is not on top.
    let bottom = game.tower().peg(PegId::Source)[0];
    let report = game.attempt_move(bottom, PegId::Source, PegId::Destination);
    assert_eq!(report.outcome, MoveOutcome::NoOp);
    assert_eq!(report.moves, 0);
    assert_eq!(report.rule_break_attempts, 0);
}

#[test]
fn win_is_reported_once_with_elapsed_time() {
    let (mut game, clock) = new_game(3, 0);
    let plan = tui_hanoi::core::solve(3);
    for (i, mv) in plan.iter().enumerate() {
        clock.set(1_000 + i as u64 * 500);
        play(&mut game, mv.from, mv.to);
    }
    assert_eq!(game.phase(), Phase::Won);

    let terminal: Vec<_> = game
        .move_log()
        .entries()
        .iter()
        .filter(|e| e.is_terminal())
        .collect();
    assert_eq!(
        terminal,
        vec![&MoveLogEntry::Terminal {
            at_ms: 3_000,
            event: TerminalEvent::Success,
        }]
    );

    clock.set(99_000);
    assert_eq!(game.elapsed_ms(), 3_000);
    assert_eq!(play(&mut game, PegId::Destination, PegId::Source), MoveOutcome::NoOp);
}

#[test]
fn timeout_then_everything_is_noop() {
    let (mut game, _) = new_game(5, 1);
    let token = game.token();
    play(&mut game, PegId::Source, PegId::Destination);

    let outcomes: Vec<_> = (0..65).map(|_| game.tick(token)).collect();
    assert_eq!(outcomes[58], TickOutcome::Running(1));
    assert_eq!(outcomes[59], TickOutcome::TimedOut);
    assert!(outcomes[60..].iter().all(|o| *o == TickOutcome::Idle));

    assert_eq!(game.phase(), Phase::TimedOut);
    for (from, to) in [(PegId::Source, PegId::Auxiliary), (PegId::Destination, PegId::Auxiliary)] {
        let top = game.tower().top(from).unwrap();
        assert_eq!(game.attempt_move(top, from, to).outcome, MoveOutcome::NoOp);
    }
    assert_eq!(game.start_solve(), Err(HanoiError::SessionOver));
}

#[test]
fn stale_tick_after_new_game_is_ignored() {
    let (mut game, _) = new_game(3, 1);
    let old = game.token();
    play(&mut game, PegId::Source, PegId::Destination);
    game.new_game(GameConfig::new(3, 1).unwrap());

    assert_eq!(game.tick(old), TickOutcome::Stale);
    assert_eq!(game.phase(), Phase::Idle);
    assert_eq!(game.seconds_left(), None);
}

#[test]
fn records_snapshot_live_counters() {
    let (mut game, clock) = new_game(3, 0);
    assert_eq!(game.save_record(""), Err(HanoiError::EmptyName));
    assert_eq!(game.save_record("   "), Err(HanoiError::EmptyName));

    clock.set(200);
    play(&mut game, PegId::Source, PegId::Auxiliary);
    clock.set(1_200);
    let rec = game.save_record("Alice").unwrap().clone();
    assert_eq!(rec.name, "Alice");
    assert_eq!(rec.moves, game.moves());
    assert_eq!(rec.rule_break_attempts, game.rule_break_attempts());
    assert_eq!(rec.elapsed_ms, 1_000);
    assert_eq!(rec.remaining_seconds, None);
    assert_eq!(rec.timer_label(), "0:00");
    assert_eq!(game.records().len(), 1);
}
