//! Piece controller tests - spawn, gravity, slam latch and rotation

use lumines_tui::core::{ActivePiece, Board, PieceController, PieceEvent, PiecePhase};
use lumines_tui::types::CellKind::{ColorA as A, ColorB as B};
use lumines_tui::types::{DROP_DELAY_FRAMES, SPAWN_GRACE_CYCLES, SPAWN_X, SPAWN_Y};

fn spawned(board: &mut Board) -> PieceController {
    let mut pc = PieceController::new(7);
    assert_eq!(pc.update(board), PieceEvent::Spawned);
    pc
}

#[test]
fn test_spawn_position() {
    let mut board = Board::new();
    let pc = spawned(&mut board);
    let piece = pc.piece();
    assert!(piece.active);
    assert_eq!((piece.x, piece.y), (SPAWN_X, SPAWN_Y));
    assert_eq!((piece.x, piece.y), (7, -2));
    assert_eq!(piece.grace_cycles, SPAWN_GRACE_CYCLES);
    assert_eq!(pc.phase(), PiecePhase::Falling);
}

#[test]
fn test_first_fall_after_grace_ticks() {
    let mut board = Board::new();
    let mut pc = spawned(&mut board);

    let ticks = SPAWN_GRACE_CYCLES as u32 + 1;
    for _ in 0..ticks * DROP_DELAY_FRAMES - 1 {
        assert_eq!(pc.update(&mut board), PieceEvent::Idle);
        assert_eq!(pc.piece().y, SPAWN_Y);
    }
    assert_eq!(pc.update(&mut board), PieceEvent::Fell);
    assert_eq!(pc.piece().y, SPAWN_Y + 1);
}

#[test]
fn test_rotation_round_trip() {
    let mut piece = ActivePiece::spawn([A, B, B, A]);
    // [A, B, C, D] -> [C, A, D, B] with C = B, D = A
    piece.rotate_cw();
    assert_eq!(piece.cells, [B, A, A, B]);
    piece.rotate_ccw();
    assert_eq!(piece.cells, [A, B, B, A]);

    let mut piece = ActivePiece::spawn([A, A, A, B]);
    piece.rotate_cw();
    assert_eq!(piece.cells, [A, A, B, A]);
    piece.rotate_ccw();
    assert_eq!(piece.cells, [A, A, A, B]);
}

#[test]
fn test_rotation_ignores_board_occupancy() {
    let mut board = Board::from_rows(&["BBBBBBBBBBBBBBBB"; 8]);
    let mut pc = spawned(&mut board);
    let mut expected = *pc.piece();
    expected.rotate_cw();
    pc.rotate_cw();
    assert_eq!(pc.piece().cells, expected.cells, "rotation is never blocked");

    expected.rotate_ccw();
    pc.rotate_ccw();
    assert_eq!(pc.piece().cells, expected.cells);
}

#[test]
fn test_moves_rejected_at_walls() {
    let mut board = Board::new();
    let mut pc = spawned(&mut board);
    while pc.move_left(&board) {}
    assert_eq!(pc.piece().x, 0);
    assert!(!pc.move_left(&board));
    while pc.move_right(&board) {}
    assert_eq!(pc.piece().x, 14);
    assert!(!pc.move_right(&board));
}

#[test]
fn test_move_blocked_by_stack() {
    let mut board = Board::from_rows(&[".......AA", ".......AA"]);
    let mut pc = spawned(&mut board);
    // Drop beside the stack, then try to push into it.
    assert!(pc.move_left(&board) && pc.move_left(&board));
    pc.slam();
    pc.update(&mut board);
    assert_eq!((pc.piece().x, pc.piece().y), (5, 8));
    assert!(!pc.move_right(&board));
}

#[test]
fn test_slam_drops_immediately_and_latches() {
    let mut board = Board::new();
    let mut pc = spawned(&mut board);

    assert!(pc.slam());
    assert_eq!(pc.phase(), PiecePhase::Locking);
    pc.update(&mut board);
    assert_eq!(pc.piece().y, 8, "slam reaches the floor on the same frame");

    // Held: no second trigger.
    assert!(!pc.slam());

    // Grace ticks are still consumed, one per frame, before the commit.
    let mut frames = 0;
    loop {
        frames += 1;
        if pc.update(&mut board) == PieceEvent::Committed {
            break;
        }
    }
    assert_eq!(frames, SPAWN_GRACE_CYCLES as u32);
    assert_eq!(board.filled_count(), 4);

    // Next piece is not slammed while the key is still held.
    assert_eq!(pc.update(&mut board), PieceEvent::Spawned);
    assert!(!pc.slam());
    assert!(!pc.piece().drop_lock);
    pc.update(&mut board);
    assert_eq!(pc.piece().y, SPAWN_Y);

    pc.release_slam();
    assert!(pc.slam());
    assert!(pc.piece().drop_lock);
}

#[test]
fn test_landing_above_board_tops_out() {
    // Every cell filled, so the spawn footprint can never enter row 0.
    let rows = ["AAAAAAAAAAAAAAAA"; 10];
    let mut board = Board::from_rows(&rows);
    let mut pc = spawned(&mut board);
    pc.slam();

    let mut event = PieceEvent::Idle;
    for _ in 0..=SPAWN_GRACE_CYCLES {
        event = pc.update(&mut board);
    }
    assert_eq!(event, PieceEvent::ToppedOut);
    // Nothing above the board was written.
    assert_eq!(board.filled_count(), 160);
}
