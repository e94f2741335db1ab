//! Board tests - placement, matching, sweeping and settling

use lumines_tui::core::{pass_score, ActivePiece, Board, SimpleRng, Timeline};
use lumines_tui::types::CellKind::{self, ColorA as A, ColorB as B, Empty};
use lumines_tui::types::{BLOCK_SIZE, BOARD_HEIGHT, BOARD_WIDTH};

const W: i8 = BOARD_WIDTH as i8;
const H: i8 = BOARD_HEIGHT as i8;

fn piece_at(x: i8, y: i8, cells: [CellKind; 4]) -> ActivePiece {
    ActivePiece {
        x,
        y,
        ..ActivePiece::spawn(cells)
    }
}

/// Deterministic pseudo-random occupancy, with roughly `fill_pct` percent filled.
fn random_board(seed: u32, fill_pct: u32) -> Board {
    let mut rng = SimpleRng::new(seed);
    let mut board = Board::new();
    for y in 0..H {
        for x in 0..W {
            if rng.next_range(100) < fill_pct {
                let kind = if rng.next_range(2) == 0 { A } else { B };
                board.set(x, y, kind);
            }
        }
    }
    board
}

fn marked_set(board: &Board) -> Vec<bool> {
    board.cells().iter().map(|c| c.marked).collect()
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    for y in 0..H {
        for x in 0..W {
            let cell = board.get(x, y).expect("in bounds");
            assert_eq!(cell.kind, Empty, "Cell ({}, {}) should be empty", x, y);
            assert!(!cell.marked && !cell.protected);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(W, 0), None);
    assert_eq!(board.get(0, H), None);
    assert_eq!(board.kind(W, H), Empty);
}

#[test]
fn test_move_validity_edges() {
    let board = Board::from_rows(&["AA"]);
    assert!(board.is_move_valid(0, -2));
    assert!(board.is_move_valid(14, 7));
    assert!(!board.is_move_valid(-1, 0));
    assert!(!board.is_move_valid(15, 0));
    assert!(!board.is_move_valid(4, 9));
    // Footprint would overlap the two blocks on the bottom row.
    assert!(!board.is_move_valid(0, 8));
    assert!(board.is_move_valid(2, 8));
    // Far above the board nothing collides, even in an occupied column.
    assert!(board.is_move_valid(0, -5));
}

#[test]
fn test_uniform_piece_on_floor_self_matches_and_scores_one() {
    let mut board = Board::new();
    assert!(board.place_piece(&piece_at(7, 8, [A; 4])));
    for (x, y) in [(7, 8), (8, 8), (7, 9), (8, 9)] {
        assert!(board.is_marked(x, y), "({}, {}) should be marked", x, y);
    }
    assert_eq!(board.marked_count(), 4);

    let mut timeline = Timeline::new();
    let frames_per_pass = BOARD_WIDTH as u32 * BLOCK_SIZE as u32;
    let mut cleared = 0;
    for _ in 0..frames_per_pass * 2 {
        cleared += timeline.update(&mut board).cleared;
    }
    assert_eq!(cleared, 4);
    assert_eq!(board.filled_count(), 0);
    assert_eq!(timeline.score(), 1);
}

#[test]
fn test_out_of_range_column_is_ignored() {
    let mut board = Board::new();
    assert!(!board.place_piece(&piece_at(15, 8, [A; 4])));
    assert!(!board.place_piece(&piece_at(-1, 8, [A; 4])));
    assert_eq!(board, Board::new());
}

#[test]
fn test_gravity_terminates_within_board_height() {
    for seed in 1..=200 {
        let mut board = random_board(seed, 45);
        let filled = board.filled_count();
        let mut steps = 0;
        while board.apply_gravity_step() {
            steps += 1;
            assert!(steps < BOARD_HEIGHT as usize, "seed {} did not settle", seed);
        }
        assert_eq!(board.filled_count(), filled, "gravity must not create or destroy cells");

        // Settled: no filled cell has an empty cell below it.
        for y in 0..H - 1 {
            for x in 0..W {
                if board.is_occupied(x, y) {
                    assert!(board.is_occupied(x, y + 1), "seed {}: ({}, {}) floats", seed, x, y);
                }
            }
        }
    }
}

#[test]
fn test_validate_all_matches_is_idempotent() {
    for seed in 1..=100 {
        let mut board = random_board(seed, 70);
        board.validate_all_matches();
        let first = marked_set(&board);
        board.validate_all_matches();
        assert_eq!(first, marked_set(&board), "seed {}", seed);
    }
}

#[test]
fn test_clear_column_only_clears_marked_and_protects_right_neighbour() {
    for seed in 1..=100 {
        let mut board = random_board(seed, 80);
        board.validate_all_matches();
        let before = board.clone();
        let col = (seed % BOARD_WIDTH as u32) as u8;
        let x = col as i8;

        let cleared = board.clear_column(col);

        let mut expected_cleared = 0;
        for y in 0..H {
            let old = before.get(x, y).expect("in bounds");
            let new = board.get(x, y).expect("in bounds");
            if old.marked {
                expected_cleared += 1;
                assert_eq!(new.kind, Empty);
                if x + 1 < W {
                    assert!(board.is_protected(x + 1, y));
                }
            } else {
                assert_eq!(new.kind, old.kind, "seed {}: unmarked ({}, {}) changed", seed, x, y);
                if x + 1 < W {
                    assert!(!board.is_protected(x + 1, y));
                }
            }
            assert!(!new.protected);
        }
        assert_eq!(cleared, expected_cleared);

        // Every other column is untouched.
        for y in 0..H {
            for ox in (0..W).filter(|&ox| ox != x) {
                assert_eq!(board.kind(ox, y), before.kind(ox, y));
            }
        }
    }
}

#[test]
fn test_pass_score_floors_partial_groups() {
    assert_eq!(pass_score(0), 0);
    assert_eq!(pass_score(3), 0);
    assert_eq!(pass_score(4), 1);
    assert_eq!(pass_score(7), 1);
    assert_eq!(pass_score(8), 2);
}

#[test]
fn test_six_cell_block_scores_one() {
    // Two overlapping squares mark a 3x2 block: 6 cells -> 1 point.
    let mut board = Board::from_rows(&["AAA", "AAA"]);
    board.validate_all_matches();
    assert_eq!(board.marked_count(), 6);

    let mut timeline = Timeline::new();
    for _ in 0..BOARD_WIDTH as u32 * BLOCK_SIZE as u32 {
        timeline.update(&mut board);
    }
    assert_eq!(timeline.score(), 1);
    assert_eq!(timeline.pending_cleared(), 0);
}

#[test]
fn test_checkerboard_never_matches() {
    let mut board = Board::from_rows(&["ABAB", "BABA", "ABAB"]);
    board.validate_all_matches();
    assert_eq!(board.marked_count(), 0);
}
