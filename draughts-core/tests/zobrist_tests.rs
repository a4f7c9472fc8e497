use draughts_core::{Board, Color, Kind, Piece};

#[test]
fn from_squares_and_new_initial_agree_on_the_starting_position() {
    let mut pieces = Vec::new();
    for row in 0..4i8 {
        for col in 0..10i8 {
            if (row + col) % 2 == 1 {
                pieces.push((row, col, Piece::new(Color::White, Kind::Man)));
            }
        }
    }
    for row in 6..10i8 {
        for col in 0..10i8 {
            if (row + col) % 2 == 1 {
                pieces.push((row, col, Piece::new(Color::Black, Kind::Man)));
            }
        }
    }

    let built = Board::from_squares(Color::White, &pieces).unwrap();
    let canonical = Board::new_initial();
    assert_eq!(built.hash(), canonical.hash());
}

#[test]
fn side_to_move_affects_the_hash() {
    let mut white_to_move = Board::from_squares(
        Color::White,
        &[(2, 2, Piece::new(Color::White, Kind::Man))],
    )
    .unwrap();
    let black_to_move = Board::from_squares(
        Color::Black,
        &[(2, 2, Piece::new(Color::White, Kind::Man))],
    )
    .unwrap();

    assert_ne!(white_to_move.hash(), black_to_move.hash());

    white_to_move.set_side_to_move(Color::Black);
    assert_eq!(white_to_move.hash(), black_to_move.hash());
}

#[test]
fn different_piece_kinds_on_the_same_square_hash_differently() {
    let man = Board::from_squares(Color::White, &[(2, 2, Piece::new(Color::White, Kind::Man))])
        .unwrap();
    let king = Board::from_squares(Color::White, &[(2, 2, Piece::new(Color::White, Kind::King))])
        .unwrap();
    assert_ne!(man.hash(), king.hash());
}

#[test]
fn repeated_make_undo_does_not_drift_the_hash() {
    let mut board = Board::new_initial();
    let original = board.hash();

    for _ in 0..5 {
        let mv = board
            .legal_moves(board.side_to_move())
            .into_iter()
            .next()
            .expect("a move exists");
        let token = board.make(&mv);
        board.undo(token);
        assert_eq!(board.hash(), original);
    }
}
