use draughts_core::{Board, Color};
use draughts_engine::MonteCarloSearcher;

// S6: with the same seed and simulation count, the Monte-Carlo searcher
// returns the same move twice in a row from the same position and reports
// a finite best-score.
#[test]
fn same_seed_reproduces_the_same_decision() {
    let board = Board::new_initial();

    let mut first = MonteCarloSearcher::with_seed(Color::White, 300, 1234);
    let mv1 = first.best_move(&board).expect("white has legal moves");
    let score1 = first.last_best_score().expect("a decision was made");

    let mut second = MonteCarloSearcher::with_seed(Color::White, 300, 1234);
    let mv2 = second.best_move(&board).expect("white has legal moves");
    let score2 = second.last_best_score().expect("a decision was made");

    assert_eq!(mv1, mv2);
    assert!(score1.is_finite());
    assert!(score2.is_finite());
    assert_eq!(score1, score2);
}

#[test]
fn best_move_on_a_terminal_position_returns_none() {
    let board = Board::from_squares(
        Color::White,
        &[
            (0, 0, draughts_core::Piece::new(Color::White, draughts_core::Kind::King)),
            (1, 1, draughts_core::Piece::new(Color::Black, draughts_core::Kind::Man)),
            (2, 2, draughts_core::Piece::new(Color::Black, draughts_core::Kind::Man)),
        ],
    )
    .unwrap();

    let mut searcher = MonteCarloSearcher::with_seed(Color::White, 50, 1);
    assert!(searcher.best_move(&board).is_none());
    assert!(searcher.last_best_score().is_none());
}

#[test]
fn monte_carlo_never_mutates_the_callers_board() {
    let board = Board::new_initial();
    let before_hash = board.hash();

    let mut searcher = MonteCarloSearcher::with_seed(Color::Black, 50, 5);
    searcher.best_move(&board);

    assert_eq!(board.hash(), before_hash);
}
