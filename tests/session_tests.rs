//! Session tests - frame ordering, top-out and reset through the public API

use lumines_tui::core::{
    GameSession, GameSnapshot, PieceEvent, SessionOutcome, SimpleRng, FOOTPRINT,
};
use lumines_tui::types::{Command, BLOCK_SIZE, BOARD_WIDTH, SPAWN_GRACE_CYCLES};

const SCRIPT: [Command; 5] = [
    Command::MoveLeft,
    Command::RotateCw,
    Command::SlamPressed,
    Command::SlamReleased,
    Command::MoveRight,
];

fn play_script(session: &mut GameSession, frames: usize) {
    for i in 0..frames {
        if i % 7 == 0 {
            session.apply_command(SCRIPT[(i / 7) % SCRIPT.len()]);
        }
        session.update();
    }
}

/// Slam every piece into the spawn column until the session ends.
fn play_until_top_out(session: &mut GameSession) {
    for _ in 0..20_000 {
        if session.is_over() {
            return;
        }
        session.apply_command(Command::SlamReleased);
        session.apply_command(Command::SlamPressed);
        session.update();
    }
    panic!("session never topped out");
}

#[test]
fn test_new_session_is_empty() {
    let session = GameSession::new(1);
    assert_eq!(session.score(), 0);
    assert_eq!(session.frame(), 0);
    assert!(!session.is_over());
    assert_eq!(session.board().filled_count(), 0);
    assert!(!session.pieces().piece().active);
}

#[test]
fn test_first_update_spawns() {
    let mut session = GameSession::new(1);
    let report = session.update();
    assert_eq!(report.piece, PieceEvent::Spawned);
    assert_eq!(report.outcome, None);
    assert_eq!(session.frame(), 1);
}

#[test]
fn test_same_seed_and_inputs_replay_identically() {
    let mut a = GameSession::new(99);
    let mut b = GameSession::new(99);
    play_script(&mut a, 2_000);
    play_script(&mut b, 2_000);
    assert_eq!(a.snapshot(), b.snapshot());
}

#[test]
fn test_commit_schedules_settling_gravity() {
    let mut session = GameSession::new(3);
    session.update();
    assert!(session.apply_command(Command::SlamPressed));

    let mut last = session.update();
    for _ in 0..SPAWN_GRACE_CYCLES {
        last = session.update();
    }
    assert_eq!(last.piece, PieceEvent::Committed);
    assert!(session.gravity_pending());
    assert_eq!(session.board().filled_count(), 4);
}

#[test]
fn test_timeline_advances_one_unit_per_frame() {
    let mut session = GameSession::new(5);
    for _ in 0..BLOCK_SIZE as u32 * 3 + 4 {
        session.update();
    }
    let snap = session.snapshot();
    assert_eq!(snap.timeline.column, 3);
    assert_eq!(snap.timeline.phase, 4);
    assert!(snap.timeline.column < BOARD_WIDTH);
}

#[test]
fn test_top_out_is_terminal_and_keeps_score() {
    let mut session = GameSession::new(11);
    play_until_top_out(&mut session);

    let outcome = session.outcome().expect("topped out");
    let SessionOutcome::TopOut { final_score } = outcome;
    assert_eq!(final_score, session.score());

    // Frozen: no more frames, commands ignored.
    let frame = session.frame();
    let before = session.snapshot();
    for _ in 0..100 {
        let report = session.update();
        assert_eq!(report.outcome, Some(outcome));
    }
    assert!(!session.apply_command(Command::MoveLeft));
    assert_eq!(session.frame(), frame);
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_new_game_resets_everything() {
    let mut session = GameSession::new(11);
    play_until_top_out(&mut session);
    session.new_game();

    assert!(!session.is_over());
    assert_eq!(session.score(), 0);
    assert_eq!(session.frame(), 0);
    assert_eq!(session.board().filled_count(), 0);
    assert!(!session.gravity_pending());

    let mut fresh = GameSnapshot::default();
    fresh.piece = session.snapshot().piece;
    assert_eq!(session.snapshot(), fresh);

    assert_eq!(session.update().piece, PieceEvent::Spawned);
}

#[test]
fn test_non_gameplay_commands_are_ignored() {
    let mut session = GameSession::new(1);
    session.update();
    let before = session.snapshot();
    assert!(!session.apply_command(Command::Confirm));
    assert!(!session.apply_command(Command::NextTheme));
    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_snapshot_into_reuses_buffer() {
    let mut session = GameSession::new(1);
    let mut snap = GameSnapshot::default();
    session.update();
    session.snapshot_into(&mut snap);
    assert!(snap.piece.active);
    assert_eq!((snap.piece.x, snap.piece.y), (7, -2));
    assert_eq!(snap.frame, 1);

    snap.clear();
    assert_eq!(snap, GameSnapshot::default());
}

#[test]
fn test_commits_never_overwrite_board_cells() {
    const COMMANDS: [Command; 6] = [
        Command::MoveLeft,
        Command::MoveRight,
        Command::RotateCw,
        Command::RotateCcw,
        Command::SlamPressed,
        Command::SlamReleased,
    ];

    let mut commits = 0;
    let mut commits_during_cascade = 0;
    for seed in 1..=8 {
        let mut session = GameSession::new(seed);
        let mut rng = SimpleRng::new(seed.wrapping_mul(7919));
        for _ in 0..6_000 {
            if session.is_over() {
                session.new_game();
            }
            if rng.next_range(3) == 0 {
                session.apply_command(COMMANDS[rng.next_range(COMMANDS.len() as u32) as usize]);
            }

            let before = session.board().clone();
            let cascading = session.gravity_pending();
            let report = session.update();
            if report.piece != PieceEvent::Committed {
                continue;
            }

            let p = *session.pieces().piece();
            assert!(
                before.is_move_valid(p.x, p.y),
                "seed {} committed over occupied cells at ({}, {})",
                seed,
                p.x,
                p.y
            );
            let written = FOOTPRINT.iter().filter(|&&(_, dy)| p.y + dy >= 0).count();
            assert_eq!(
                session.board().filled_count() + report.sweep.cleared as usize,
                before.filled_count() + written,
                "seed {} lost cells on commit",
                seed
            );
            commits += 1;
            if cascading {
                commits_during_cascade += 1;
            }
        }
    }
    assert!(commits > 100);
    assert!(commits_during_cascade > 0);
}
