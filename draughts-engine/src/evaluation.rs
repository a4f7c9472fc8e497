use draughts_core::{Board, Color};

/// A nine-element weight vector, one entry per heuristic, in the order
/// material, central, structure, mobility, king_activity, promotion,
/// safety, tempo, locks. Grounded on the teacher's `EvalData` (an
/// auxiliary struct gathering everything one evaluation pass needs), but
/// the weights themselves live outside it since they are supplied by a
/// profile rather than fixed piece values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Weights {
    pub material: i32,
    pub central: i32,
    pub structure: i32,
    pub mobility: i32,
    pub king_activity: i32,
    pub promotion: i32,
    pub safety: i32,
    pub tempo: i32,
    pub locks: i32,
}

impl Weights {
    pub const fn new(
        material: i32,
        central: i32,
        structure: i32,
        mobility: i32,
        king_activity: i32,
        promotion: i32,
        safety: i32,
        tempo: i32,
        locks: i32,
    ) -> Self {
        Self {
            material,
            central,
            structure,
            mobility,
            king_activity,
            promotion,
            safety,
            tempo,
            locks,
        }
    }
}

const WIN_SCORE: i32 = 10_000;

/// A win for Black scores +10000, a win for White -10000, a draw 0, before
/// orientation. Kept as a named constant since the minimax searcher's
/// mate-scoring needs the exact same magnitude to compare child scores.
pub const RAW_WIN_SCORE: i32 = WIN_SCORE;

/// Evaluates `board` with `weights`, oriented so that a higher score always
/// favours `engine`. Terminal (no-legal-moves) positions short-circuit to
/// the win/loss/draw sentinel described in spec.md §4.C before the nine
/// heuristics ever run.
pub fn evaluate(board: &Board, weights: &Weights, engine: Color) -> i32 {
    if board.terminal_no_moves() {
        let raw = match board.side_to_move() {
            // side to move has no legal moves: it has lost, so the other
            // side has won.
            Color::White => WIN_SCORE,
            Color::Black => -WIN_SCORE,
        };
        return orient(raw, engine);
    }

    let raw = material(board, weights)
        + central(board, weights)
        + structure(board, weights)
        + mobility(board, weights)
        + king_activity(board, weights)
        + promotion_potential(board, weights)
        + piece_safety(board, weights)
        + tempo(board, weights)
        + locks(board, weights);

    orient(raw, engine)
}

/// `orient(raw) = raw if engine is Black else -raw`; the nine heuristics
/// are all written Black-positive, so White's perspective is the negation.
pub fn orient(raw: i32, engine: Color) -> i32 {
    match engine {
        Color::Black => raw,
        Color::White => -raw,
    }
}

fn signed(color: Color) -> i32 {
    match color {
        Color::Black => 1,
        Color::White => -1,
    }
}

fn for_each_piece(board: &Board, mut f: impl FnMut(i8, i8, draughts_core::Piece)) {
    for row in 0..10i8 {
        for col in 0..10i8 {
            if let Some(piece) = board.piece_at(row, col) {
                f(row, col, piece);
            }
        }
    }
}

fn material(board: &Board, weights: &Weights) -> i32 {
    let mut total = 0;
    for_each_piece(board, |_, _, piece| {
        let value = if piece.is_king() { 3 } else { 1 };
        total += signed(piece.color()) * value;
    });
    total * weights.material
}

const CENTRE: [(i8, i8); 4] = [(4, 4), (4, 5), (5, 4), (5, 5)];

fn central(board: &Board, weights: &Weights) -> i32 {
    let mut total = 0;
    for_each_piece(board, |row, col, piece| {
        let s = signed(piece.color());
        if CENTRE.contains(&(row, col)) {
            total += 3 * s;
        } else if (3..=6).contains(&row) && (3..=6).contains(&col) {
            total += s;
        }
    });
    total * weights.central
}

fn structure(board: &Board, weights: &Weights) -> i32 {
    let mut total = 0;
    for_each_piece(board, |row, col, piece| {
        if piece.is_king() {
            return;
        }
        let has_neighbour = draughts_core::DIAGONALS
            .iter()
            .any(|&(dr, dc)| {
                let (r, c) = (row + dr, col + dc);
                matches!(board.piece_at(r, c), Some(p) if p.color() == piece.color())
            });
        let backward_row = match piece.color() {
            Color::White => row - 1,
            Color::Black => row + 1,
        };
        let has_backer = [-1, 1].iter().any(|&dc| {
            matches!(board.piece_at(backward_row, col + dc), Some(p) if p.color() == piece.color())
        });

        let mut term = 0;
        if !has_neighbour {
            term -= 2;
        }
        if has_backer {
            term += 2;
        }
        // Signs negated for White pieces: the raw value above is already
        // from the "is this good for its owner" frame, so flip it onto
        // the Black-positive convention only for White pieces.
        total += if piece.color() == Color::White { -term } else { term };
    });
    total * weights.structure
}

fn mobility(board: &Board, weights: &Weights) -> i32 {
    let black_moves = board.legal_moves(Color::Black).len() as i32;
    let white_moves = board.legal_moves(Color::White).len() as i32;
    (black_moves - white_moves) * weights.mobility
}

fn king_activity(board: &Board, weights: &Weights) -> i32 {
    let mut total = 0;
    for_each_piece(board, |row, col, piece| {
        if !piece.is_king() {
            return;
        }
        let edge_distance = row.min(9 - row).min(col).min(9 - col) as i32;
        let mut reach = 0;
        for (dr, dc) in draughts_core::DIAGONALS {
            let mut r = row + dr;
            let mut c = col + dc;
            while (0..10).contains(&r) && (0..10).contains(&c) && board.piece_at(r, c).is_none() {
                reach += 1;
                r += dr;
                c += dc;
            }
        }
        let value = edge_distance as f64 + 0.2 * reach as f64;
        total += signed(piece.color()) as f64 * value;
    });
    (total * weights.king_activity as f64) as i32
}

fn promotion_potential(board: &Board, weights: &Weights) -> i32 {
    let mut total = 0;
    for_each_piece(board, |row, col, piece| {
        let _ = col;
        if piece.is_king() {
            return;
        }
        match piece.color() {
            Color::Black => total += 10 - (9 - row) as i32,
            Color::White => total -= 10 - row as i32,
        }
    });
    total * weights.promotion
}

fn piece_safety(board: &Board, weights: &Weights) -> i32 {
    let mut total = 0;
    for_each_piece(board, |row, col, piece| {
        let hanging = draughts_core::DIAGONALS.iter().any(|&(dr, dc)| {
            let victim = (row + dr, col + dc);
            let beyond = (row + 2 * dr, col + 2 * dc);
            let Some(opp) = board.piece_at(victim.0, victim.1) else { return false };
            opp.color() != piece.color() && board.piece_at(beyond.0, beyond.1).is_none()
                && (0..10).contains(&beyond.0)
                && (0..10).contains(&beyond.1)
        });
        if hanging {
            total += -4 * signed(piece.color());
        }
    });
    total * weights.safety
}

fn tempo(board: &Board, weights: &Weights) -> i32 {
    let mut total = 0;
    for_each_piece(board, |row, col, piece| {
        let _ = col;
        if piece.is_king() {
            return;
        }
        match piece.color() {
            Color::Black => total += row as i32,
            Color::White => total -= (9 - row) as i32,
        }
    });
    total * weights.tempo
}

const CORNER_TRAPS: [(i8, i8); 8] = [
    (0, 1),
    (1, 0),
    (0, 3),
    (3, 0),
    (9, 8),
    (8, 9),
    (9, 6),
    (6, 9),
];

fn locks(board: &Board, weights: &Weights) -> i32 {
    let mut total = 0;
    for_each_piece(board, |row, col, piece| {
        if !piece.is_king() {
            return;
        }
        if CORNER_TRAPS.contains(&(row, col)) {
            total += -8 * signed(piece.color());
        }
    });
    total * weights.locks
}
