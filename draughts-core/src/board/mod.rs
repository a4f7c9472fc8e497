mod board;
mod movegen;

pub use board::{Board, GameResult, UndoToken};
