mod board;
mod color;
mod mv;
mod piece;
mod square;
mod zobrist;

pub use board::{Board, GameResult, UndoToken};
pub use color::Color;
pub use mv::Move;
pub use piece::{Kind, Piece};
pub use square::{Square, DIAGONALS};
