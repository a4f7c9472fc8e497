use crate::color::Color;
use crate::mv::Move;
use crate::piece::Kind;
use crate::square::{Square, DIAGONALS};

use super::board::Board;

/// All legal moves for `side` on `board`, with mandatory maximum capture
/// enforced across the whole side: if any piece belonging to `side` has a
/// capture available, every non-capturing move is illegal and only the
/// capture sequences of maximal length (ties included) are legal.
///
/// Grounded on spec.md §4.B's description of the rule and on the teacher's
/// `legal_moves` (generate pseudolegal, then filter), generalized from
/// "filter by king safety" to "filter by capture length".
pub fn legal_moves_for_side(board: &Board, side: Color) -> Vec<Move> {
    let mut captures = Vec::new();

    for row in 0..10i8 {
        for col in 0..10i8 {
            let sq = Square::new(row, col);
            let Some(piece) = board.get_raw(sq) else { continue };
            if piece.color() != side {
                continue;
            }
            let mut path = vec![sq];
            match piece.kind() {
                Kind::Man => man_capture_dfs(board, sq, side, &mut path, &mut Vec::new(), &mut captures),
                Kind::King => king_capture_dfs(board, sq, side, &mut path, &mut Vec::new(), &mut captures),
            }
        }
    }

    if !captures.is_empty() {
        let max_len = captures.iter().map(Move::capture_count).max().unwrap_or(0);
        captures.retain(|m| m.capture_count() == max_len);
        return captures;
    }

    non_capture_moves(board, side)
}

/// Depth-first search of capture sequences available to a Man starting at
/// `origin`, currently standing at the last entry of `path`. `captured_so_far`
/// holds the squares already jumped in this path (so the same piece cannot
/// be captured twice); `path` holds the landing squares visited so far on
/// this path (so a sequence cannot revisit a landing square). Both are
/// scoped to the current recursive call chain and backtracked on return, not
/// shared across sibling branches.
fn man_capture_dfs(
    board: &Board,
    origin: Square,
    side: Color,
    path: &mut Vec<Square>,
    captured_so_far: &mut Vec<Square>,
    out: &mut Vec<Move>,
) {
    let current = *path.last().unwrap();
    let mut found_continuation = false;

    for (dr, dc) in DIAGONALS {
        let victim_sq = current.offset(dr, dc);
        let landing_sq = current.offset(dr * 2, dc * 2);

        if !landing_sq.in_bounds() {
            continue;
        }
        if captured_so_far.contains(&victim_sq) {
            continue;
        }
        let Some(victim) = board.get_raw(victim_sq) else { continue };
        if victim.color() == side {
            continue;
        }
        if board.get_raw(landing_sq).is_some() {
            continue;
        }
        if path.contains(&landing_sq) {
            continue;
        }

        found_continuation = true;
        captured_so_far.push(victim_sq);
        path.push(landing_sq);

        man_capture_dfs(board, origin, side, path, captured_so_far, out);

        path.pop();
        captured_so_far.pop();
    }

    if !found_continuation && !captured_so_far.is_empty() {
        out.push(Move::new(origin, current, captured_so_far.clone()));
    }
}

/// Depth-first search of capture sequences available to a King. Unlike a
/// Man, a King slides any distance along a diagonal before and after the
/// captured piece; per square it may land on any empty square beyond the
/// first enemy piece found, provided that piece has not already been
/// captured on this path and the square immediately beyond it is empty.
fn king_capture_dfs(
    board: &Board,
    origin: Square,
    side: Color,
    path: &mut Vec<Square>,
    captured_so_far: &mut Vec<Square>,
    out: &mut Vec<Move>,
) {
    let current = *path.last().unwrap();
    let mut found_continuation = false;

    for (dr, dc) in DIAGONALS {
        let mut probe = current.offset(dr, dc);
        let mut victim_sq = None;

        while probe.in_bounds() {
            match board.get_raw(probe) {
                None => {
                    probe = probe.offset(dr, dc);
                    continue;
                }
                Some(p) if p.color() == side => break,
                Some(_) => {
                    victim_sq = Some(probe);
                    break;
                }
            }
        }

        let Some(victim_sq) = victim_sq else { continue };
        if captured_so_far.contains(&victim_sq) {
            continue;
        }

        let mut landing = victim_sq.offset(dr, dc);
        while landing.in_bounds() && board.get_raw(landing).is_none() {
            if !path.contains(&landing) {
                found_continuation = true;
                captured_so_far.push(victim_sq);
                path.push(landing);

                king_capture_dfs(board, origin, side, path, captured_so_far, out);

                path.pop();
                captured_so_far.pop();
            }
            landing = landing.offset(dr, dc);
        }
    }

    if !found_continuation && !captured_so_far.is_empty() {
        out.push(Move::new(origin, current, captured_so_far.clone()));
    }
}

/// Quiet (non-capturing) moves for every piece of `side`: a Man steps one
/// square diagonally forward onto an empty square, a King slides any
/// distance along an empty diagonal.
fn non_capture_moves(board: &Board, side: Color) -> Vec<Move> {
    let mut moves = Vec::new();

    for row in 0..10i8 {
        for col in 0..10i8 {
            let sq = Square::new(row, col);
            let Some(piece) = board.get_raw(sq) else { continue };
            if piece.color() != side {
                continue;
            }

            match piece.kind() {
                Kind::Man => {
                    let forward = match side {
                        Color::White => 1,
                        Color::Black => -1,
                    };
                    for dc in [-1, 1] {
                        let target = sq.offset(forward, dc);
                        if target.in_bounds() && board.get_raw(target).is_none() {
                            moves.push(Move::new(sq, target, Vec::new()));
                        }
                    }
                }
                Kind::King => {
                    for (dr, dc) in DIAGONALS {
                        let mut target = sq.offset(dr, dc);
                        while target.in_bounds() && board.get_raw(target).is_none() {
                            moves.push(Move::new(sq, target, Vec::new()));
                            target = target.offset(dr, dc);
                        }
                    }
                }
            }
        }
    }

    moves
}
