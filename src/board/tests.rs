use super::*;
use proptest::prelude::*;

/// Two-column stripes shifted every row: never five in a line on any board.
fn stripe(r: usize, c: usize) -> Stone {
    if (c / 2 + r) % 2 == 0 {
        Stone::Black
    } else {
        Stone::White
    }
}

fn fill_without_five(size: usize) -> Board {
    let mut board = Board::new(size);
    for r in 0..size {
        for c in 0..size {
            assert!(board.apply_move(r, c, stripe(r, c)));
        }
    }
    board
}

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_stone_codes() {
    for stone in [Stone::Empty, Stone::Black, Stone::White] {
        assert_eq!(Stone::from_code(stone.code()), Some(stone));
    }
    assert_eq!(Stone::from_code(3), None);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(7, 7);
    assert_eq!(pos.to_index(15), 7 * 15 + 7);

    let pos2 = Pos::from_index(112, 15);
    assert_eq!(pos2, Pos::new(7, 7));
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0, 15));
    assert!(Pos::is_valid(14, 14, 15));
    assert!(!Pos::is_valid(-1, 0, 15));
    assert!(!Pos::is_valid(0, -1, 15));
    assert!(!Pos::is_valid(15, 0, 15));
    assert!(!Pos::is_valid(0, 15, 15));
}

#[test]
fn test_pos_ordering_is_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(0, 1);
    let pos3 = Pos::new(1, 0);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);
    assert!(pos1 < pos3);
}

#[test]
fn test_pos_offset_and_distance() {
    let pos = Pos::new(0, 3);
    assert_eq!(pos.offset(1, 1, 2, 15), Some(Pos::new(2, 5)));
    assert_eq!(pos.offset(-1, 0, 1, 15), None);
    assert_eq!(Pos::new(2, 2).chebyshev(Pos::new(4, 3)), 2);
}

#[test]
fn test_new_board() {
    let board = Board::default();
    assert_eq!(board.size(), DEFAULT_BOARD_SIZE);
    assert!(board.is_board_empty());
    assert_eq!(board.current_player(), Stone::Black);
    assert_eq!(board.status(), GameStatus::InProgress);
    assert_eq!(board.center(), Pos::new(7, 7));
    assert_eq!(board.valid_moves().len(), 225);
}

#[test]
fn test_apply_move_switches_turn() {
    let mut board = Board::default();
    assert!(board.play(7, 7));
    assert_eq!(board.get(Pos::new(7, 7)), Stone::Black);
    assert_eq!(board.current_player(), Stone::White);
    assert!(board.play(7, 8));
    assert_eq!(board.current_player(), Stone::Black);
    assert_eq!(board.stone_count(), 2);
}

#[test]
fn test_apply_move_rejects_occupied() {
    let mut board = Board::default();
    assert!(board.apply_move(3, 3, Stone::Black));
    let before = board.clone();
    assert!(!board.apply_move(3, 3, Stone::White));
    assert_eq!(board, before);
}

#[test]
fn test_apply_move_rejects_out_of_bounds() {
    let mut board = Board::new(9);
    let before = board.clone();
    assert!(!board.apply_move(9, 0, Stone::Black));
    assert!(!board.apply_move(0, 9, Stone::Black));
    assert!(!board.apply_move(usize::MAX, 0, Stone::Black));
    assert_eq!(board, before);
}

#[test]
fn test_apply_move_rejects_empty_stone() {
    let mut board = Board::default();
    assert!(!board.apply_move(0, 0, Stone::Empty));
    assert!(board.is_board_empty());
}

#[test]
fn test_five_in_row_ends_game() {
    let mut board = Board::default();
    for c in 7..11 {
        assert!(board.play(7, c));
        assert!(!board.check_win(7, c, Stone::Black));
        assert!(board.play(0, c));
        assert_eq!(board.current_player(), Stone::Black);
    }
    assert!(board.play(7, 11));
    assert!(board.check_win(7, 7, Stone::Black));
    assert_eq!(board.winner(), Some(Stone::Black));
    assert!(board.is_terminal());
    // Turn does not pass once the game is over
    assert_eq!(board.current_player(), Stone::Black);
}

#[test]
fn test_board_size_is_clamped() {
    let big = Board::new(MAX_BOARD_SIZE + 45);
    assert_eq!(big.size(), MAX_BOARD_SIZE);
    assert!(big.contains(MAX_BOARD_SIZE - 1, MAX_BOARD_SIZE - 1));
    assert!(!big.is_valid_move(MAX_BOARD_SIZE, 0));
    assert_eq!(Board::new(0).size(), 1);
}

#[test]
fn test_terminal_board_rejects_moves() {
    let mut board = Board::default();
    for c in 0..5 {
        board.apply_move(0, c, Stone::White);
    }
    assert_eq!(board.status(), GameStatus::Won(Stone::White));
    let before = board.clone();
    assert!(!board.is_valid_move(10, 10));
    assert!(!board.apply_move(10, 10, Stone::Black));
    assert_eq!(board, before);
}

#[test]
fn test_gap_is_not_a_win() {
    let mut board = Board::default();
    for c in [0, 1, 2, 4, 5] {
        board.apply_move(3, c, Stone::Black);
    }
    assert!(!board.is_terminal());
    assert!(!board.check_win(3, 2, Stone::Black));
}

#[test]
fn test_opponent_interruption_is_not_a_win() {
    let mut board = Board::default();
    for c in [0, 1, 2, 4, 5, 6] {
        board.apply_move(3, c, Stone::Black);
    }
    board.apply_move(3, 3, Stone::White);
    assert!(!board.is_terminal());
}

#[test]
fn test_full_board_is_draw() {
    let board = fill_without_five(5);
    assert!(board.is_full());
    assert_eq!(board.status(), GameStatus::Draw);
    assert_eq!(board.winner(), None);
    assert!(board.is_terminal());
}

#[test]
fn test_full_board_rejects_moves() {
    let mut board = fill_without_five(6);
    assert!(board.is_full());
    assert!(!board.apply_move(0, 0, Stone::Black));
    assert!(board.valid_moves().is_empty());
}

#[test]
fn test_reset_restores_initial_state() {
    let mut board = Board::new(7);
    board.play(3, 3);
    board.play(2, 2);
    board.reset();
    assert_eq!(board, Board::new(7));
}

#[test]
fn test_snapshot_layout() {
    let mut board = Board::new(5);
    board.play(0, 1);
    board.play(4, 3);
    let state = board.snapshot();
    assert_eq!(state.board_size, 5);
    assert_eq!(state.board[0][1], 1);
    assert_eq!(state.board[4][3], 2);
    assert_eq!(state.current_player, 1);
    assert!(!state.game_over);
    assert_eq!(state.winner, 0);
}

#[test]
fn test_snapshot_serializes() {
    let mut board = Board::new(5);
    board.play(2, 2);
    let json = serde_json::to_string(&board.snapshot()).unwrap();
    assert!(json.contains("\"board_size\":5"));
    let back: BoardState = serde_json::from_str(&json).unwrap();
    assert_eq!(back, board.snapshot());
}

#[test]
fn test_display_marks_stones() {
    let mut board = Board::new(5);
    board.play(0, 0);
    board.play(0, 1);
    let text = board.to_string();
    assert!(text.contains(" X O . . ."));
}

/// Reference win check: scan every five-cell window on the board.
fn brute_force_five(board: &Board, color: Stone) -> bool {
    let n = board.size() as i32;
    for r in 0..n {
        for c in 0..n {
            for (dr, dc) in [(0, 1), (1, 0), (1, 1), (1, -1)] {
                let all = (0..5).all(|k| {
                    let (rr, cc) = (r + dr * k, c + dc * k);
                    Pos::is_valid(rr, cc, n as usize)
                        && board.get(Pos::new(rr as u8, cc as u8)) == color
                });
                if all {
                    return true;
                }
            }
        }
    }
    false
}

proptest! {
    #[test]
    fn prop_win_matches_brute_force(moves in prop::collection::vec((0usize..9, 0usize..9), 1..60)) {
        let mut board = Board::new(9);
        for (r, c) in moves {
            if board.is_terminal() {
                break;
            }
            let player = board.current_player();
            if board.play(r, c) {
                let won = board.winner() == Some(player);
                prop_assert_eq!(won, brute_force_five(&board, player));
                prop_assert_eq!(board.check_win(r, c, player), won);
            }
        }
    }

    #[test]
    fn prop_invalid_moves_leave_board_unchanged(
        moves in prop::collection::vec((0usize..12, 0usize..12), 1..40),
    ) {
        let mut board = Board::new(9);
        for (r, c) in moves {
            let before = board.clone();
            let valid = board.is_valid_move(r, c);
            let applied = board.play(r, c);
            prop_assert_eq!(valid, applied);
            if !applied {
                prop_assert_eq!(&board, &before);
            }
        }
    }

    #[test]
    fn prop_full_iff_no_empty(moves in prop::collection::vec((0usize..5, 0usize..5), 0..40)) {
        let mut board = Board::new(5);
        for (r, c) in moves {
            board.play(r, c);
        }
        prop_assert_eq!(board.is_full(), board.valid_moves().is_empty());
    }
}
