use std::sync::OnceLock;

use crate::color::Color;
use crate::piece::{Kind, Piece};
use crate::square::Square;

/// Fixed seed for the zobrist table. The table must be a pure function of
/// (piece kind, square) across the whole process, never reseeded, so that
/// equal boards always hash equally (data model invariant 6).
const SEED: u64 = 0x9E37_79B9_7F4A_7C15;

struct Tables {
    // Indexed by [piece code][square index]; piece code is
    // 0 = white man, 1 = black man, 2 = white king, 3 = black king.
    pieces: [[u64; 100]; 4],
    side_to_move: u64,
}

static TABLES: OnceLock<Tables> = OnceLock::new();

fn tables() -> &'static Tables {
    TABLES.get_or_init(build_tables)
}

// Grounded on the teacher's `evaluation::init`/`masks` pattern of
// precomputing auxiliary tables once at startup, generalized from the
// teacher's `static mut` arrays populated by an explicit `init_evaluation()`
// call to a `OnceLock` filled lazily on first use, which needs no unsafe
// and no separate init call from the caller.
fn build_tables() -> Tables {
    let mut state = SEED;
    let mut pieces = [[0u64; 100]; 4];
    for row in pieces.iter_mut() {
        for slot in row.iter_mut() {
            *slot = splitmix64(&mut state);
        }
    }
    let side_to_move = splitmix64(&mut state);
    Tables { pieces, side_to_move }
}

fn splitmix64(state: &mut u64) -> u64 {
    *state = state.wrapping_add(0x9E37_79B9_7F4A_7C15);
    let mut z = *state;
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

fn piece_code(piece: Piece) -> usize {
    match (piece.color(), piece.kind()) {
        (Color::White, Kind::Man) => 0,
        (Color::Black, Kind::Man) => 1,
        (Color::White, Kind::King) => 2,
        (Color::Black, Kind::King) => 3,
    }
}

pub fn key_for_piece(piece: Piece, square: Square) -> u64 {
    tables().pieces[piece_code(piece)][square.index()]
}

pub fn side_to_move_key() -> u64 {
    tables().side_to_move
}
