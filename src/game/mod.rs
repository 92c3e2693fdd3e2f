//! Core Connect Four game logic: bitboard representation, winning-line masks,
//! players, and the game session that drives turns and outcomes.

mod bitboard;
mod board;
mod masks;
mod player;
mod session;

pub use bitboard::Bitboard;
pub use board::{Board, COLS, ROWS};
pub use masks::{generate_win_masks, win_masks};
pub use player::Player;
pub use session::{GameOutcome, GameSession, MoveError};

/// Column sequence from an empty board that fills it with no four in a row.
#[cfg(test)]
pub(crate) const DRAW_SEQUENCE: [usize; 42] = [
    3, 4, 4, 6, 0, 3, 5, 2, 6, 5, 0, 6, 5, 0, 3, 6, 5, 6, 1, 3, 1, 3, 6, 5, 2, 0, 5, 3, 4, 4, 0,
    1, 1, 1, 0, 1, 4, 2, 4, 2, 2, 2,
];
