use draughts_core::{Board, Color, Kind, Piece};

// S: a single available capture is mandatory over any non-capturing move.
#[test]
fn capture_is_mandatory_over_quiet_moves() {
    let board = Board::from_squares(
        Color::White,
        &[
            (2, 2, Piece::new(Color::White, Kind::Man)),
            (3, 3, Piece::new(Color::Black, Kind::Man)),
        ],
    )
    .unwrap();

    let moves = board.legal_moves(Color::White);
    assert_eq!(moves.len(), 1);
    assert!(moves[0].is_capture());
    assert_eq!(moves[0].end, draughts_core::Square::new(4, 4));
}

// S: when two captures of different lengths are available, only the
// longer sequence is legal.
#[test]
fn longer_capture_sequence_is_mandatory_over_shorter() {
    // White Man at (2,2) can take one piece at (3,3) and stop, or continue
    // through (5,5) to take a second piece at (5,5)->(7,7) landing. Set up
    // a double-jump corridor along the same diagonal.
    let board = Board::from_squares(
        Color::White,
        &[
            (2, 2, Piece::new(Color::White, Kind::Man)),
            (3, 3, Piece::new(Color::Black, Kind::Man)),
            (5, 5, Piece::new(Color::Black, Kind::Man)),
        ],
    )
    .unwrap();

    let moves = board.legal_moves(Color::White);
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0].capture_count(), 2);
    assert_eq!(moves[0].end, draughts_core::Square::new(6, 6));
}

#[test]
fn man_can_capture_backwards() {
    let board = Board::from_squares(
        Color::White,
        &[
            (4, 4, Piece::new(Color::White, Kind::Man)),
            (3, 3, Piece::new(Color::Black, Kind::Man)),
        ],
    )
    .unwrap();

    let moves = board.legal_moves(Color::White);
    assert_eq!(moves.len(), 1);
    assert!(moves[0].is_capture());
    assert_eq!(moves[0].end, draughts_core::Square::new(2, 2));
}

#[test]
fn king_slides_before_and_after_a_capture() {
    let board = Board::from_squares(
        Color::White,
        &[
            (0, 0, Piece::new(Color::White, Kind::King)),
            (4, 4, Piece::new(Color::Black, Kind::Man)),
        ],
    )
    .unwrap();

    let moves = board.legal_moves(Color::White);
    assert!(moves.iter().all(|m| m.is_capture()));
    // The king may land on (5,5), (6,6), (7,7), (8,8) or (9,9) beyond the
    // captured piece.
    let landings: Vec<_> = moves.iter().map(|m| m.end).collect();
    assert!(landings.contains(&draughts_core::Square::new(5, 5)));
    assert!(landings.contains(&draughts_core::Square::new(9, 9)));
}

#[test]
fn a_piece_cannot_be_captured_twice_in_one_sequence() {
    // A king that could, in principle, revisit the same captured piece by
    // looping through a landing square must not count it twice.
    let board = Board::from_squares(
        Color::White,
        &[
            (0, 0, Piece::new(Color::White, Kind::King)),
            (2, 2, Piece::new(Color::Black, Kind::Man)),
        ],
    )
    .unwrap();

    let moves = board.legal_moves(Color::White);
    for mv in &moves {
        let mut seen = std::collections::HashSet::new();
        for sq in &mv.captures {
            assert!(seen.insert((sq.row, sq.col)), "square captured twice in one move");
        }
    }
}

#[test]
fn no_captures_falls_back_to_quiet_moves() {
    let board = Board::new_initial();
    let moves = board.legal_moves(Color::White);
    assert!(!moves.is_empty());
    assert!(moves.iter().all(|m| !m.is_capture()));
}

// A White King with Black Men on opposite sides along the same diagonal
// cannot chain them into one sequence: the first Man captured stays on the
// board for the rest of the sequence (spec.md §4.B) and blocks the king
// from crossing back over it to reach the second. Both single captures are
// legal and tied for maximum length.
#[test]
fn king_cannot_chain_captures_through_an_already_captured_piece() {
    let board = Board::from_squares(
        Color::White,
        &[
            (4, 4, Piece::new(Color::White, Kind::King)),
            (5, 5, Piece::new(Color::Black, Kind::Man)),
            (3, 3, Piece::new(Color::Black, Kind::Man)),
        ],
    )
    .unwrap();

    let moves = board.legal_moves(Color::White);
    assert!(!moves.is_empty());
    for mv in &moves {
        assert_eq!(mv.capture_count(), 1);
    }
    let captured_squares: std::collections::HashSet<_> = moves
        .iter()
        .flat_map(|m| m.captures.iter().map(|s| (s.row, s.col)))
        .collect();
    assert!(captured_squares.contains(&(5, 5)));
    assert!(captured_squares.contains(&(3, 3)));
}

#[test]
fn man_quiet_move_is_forward_only() {
    let board = Board::from_squares(
        Color::White,
        &[(4, 4, Piece::new(Color::White, Kind::Man))],
    )
    .unwrap();

    let moves = board.legal_moves(Color::White);
    assert!(moves.iter().all(|m| m.end.row == 5));
}
