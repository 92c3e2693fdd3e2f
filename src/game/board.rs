use super::bitboard::Bitboard;
use super::masks::win_masks;
use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,
    #[error("column is out of range")]
    InvalidColumn,
}

/// Bitboard game state: one occupancy set per player plus whose turn it is.
///
/// Placing a disc never flips the turn or looks for a winner; the caller does
/// both right after a successful [`Board::place_disc`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    occupancy: [Bitboard; 2],
    active: Player,
}

impl Board {
    /// Create a new empty board with Player One to move
    pub fn new() -> Self {
        Board {
            occupancy: [Bitboard::EMPTY; 2],
            active: Player::One,
        }
    }

    /// Build a board from raw occupancy sets. Returns `None` if the sets overlap.
    pub fn from_occupancy(one: Bitboard, two: Bitboard, active: Player) -> Option<Self> {
        if !(one & two).is_empty() {
            return None;
        }
        Some(Board {
            occupancy: [one, two],
            active,
        })
    }

    pub fn active_player(&self) -> Player {
        self.active
    }

    /// Hand the turn to the other player
    pub fn swap_turn(&mut self) {
        self.active = self.active.other();
    }

    pub fn occupancy(&self, player: Player) -> Bitboard {
        self.occupancy[player.index()]
    }

    fn occupied(&self) -> Bitboard {
        self.occupancy[0] | self.occupancy[1]
    }

    /// Owner of the cell at `(col, row)`, row 0 being the bottom
    pub fn cell(&self, col: usize, row: usize) -> Option<Player> {
        if self.occupancy[0].is_set(col, row) {
            Some(Player::One)
        } else if self.occupancy[1].is_set(col, row) {
            Some(Player::Two)
        } else {
            None
        }
    }

    /// Total discs on the board
    pub fn disc_count(&self) -> u32 {
        self.occupied().count()
    }

    /// Row of the next free cell in `col`, scanning up from the bottom.
    /// `None` if the column holds six discs or does not exist.
    pub fn get_top(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        let occupied = self.occupied();
        (0..ROWS).find(|&row| !occupied.is_set(col, row))
    }

    pub fn is_column_full(&self, col: usize) -> bool {
        self.get_top(col).is_none()
    }

    /// Drop a disc for the active player, returns the row where it landed
    pub fn place_disc(&mut self, col: usize) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }
        let row = self.get_top(col).ok_or(MoveError::ColumnFull)?;
        self.occupancy[self.active.index()] |= Bitboard::cell(col, row);
        Ok(row)
    }

    /// Check if all 42 cells are occupied
    pub fn is_full(&self) -> bool {
        self.occupied() == Bitboard::FULL
    }

    /// First player owning a complete winning line. Player One is checked
    /// against every mask before Player Two.
    pub fn get_winner(&self) -> Option<Player> {
        [Player::One, Player::Two].into_iter().find(|&player| {
            let own = self.occupancy(player);
            win_masks().iter().any(|&mask| own.contains(mask))
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::generate_win_masks;
    use crate::game::DRAW_SEQUENCE;
    use test_case::test_case;

    fn play(board: &mut Board, cols: &[usize]) {
        for &col in cols {
            board.place_disc(col).unwrap();
            board.swap_turn();
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.cell(col, row), None);
            }
        }
        assert_eq!(board.active_player(), Player::One);
        assert_eq!(board.disc_count(), 0);
        assert_eq!(board.get_winner(), None);
    }

    #[test]
    fn test_place_disc() {
        let mut board = Board::new();

        let row = board.place_disc(3).unwrap();
        assert_eq!(row, 0); // Should land at bottom
        assert_eq!(board.cell(3, 0), Some(Player::One));

        board.swap_turn();
        let row = board.place_disc(3).unwrap();
        assert_eq!(row, 1); // Should land on top of first piece
        assert_eq!(board.cell(3, 1), Some(Player::Two));
    }

    #[test]
    fn test_place_disc_does_not_swap_turn() {
        let mut board = Board::new();
        board.place_disc(2).unwrap();
        assert_eq!(board.active_player(), Player::One);
    }

    #[test_case(0)]
    #[test_case(3)]
    #[test_case(6)]
    fn test_top_rises_until_full(col: usize) {
        let mut board = Board::new();
        let mut previous = None;
        for expected in 0..ROWS {
            let top = board.get_top(col).unwrap();
            assert_eq!(top, expected);
            if let Some(prev) = previous {
                assert!(top > prev);
            }
            previous = Some(top);
            board.place_disc(col).unwrap();
            board.swap_turn();
        }
        assert_eq!(board.get_top(col), None);
        assert!(board.is_column_full(col));
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        play(&mut board, &[6; ROWS]);

        let before = board;
        assert_eq!(board.place_disc(6), Err(MoveError::ColumnFull));
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.place_disc(7), Err(MoveError::InvalidColumn));
        assert_eq!(board.get_top(7), None);
    }

    #[test]
    fn test_full_board_single_owner() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                assert!(!board.is_full());
                board.place_disc(col).unwrap();
            }
        }
        assert_eq!(board.disc_count(), 42);
        assert!(board.is_full());
    }

    #[test]
    fn test_is_full_only_at_42_discs() {
        let mut board = Board::new();
        for (placed, &col) in DRAW_SEQUENCE.iter().enumerate() {
            assert!(!board.is_full(), "full after {} discs", placed);
            board.place_disc(col).unwrap();
            board.swap_turn();
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_occupancy_stays_disjoint() {
        let mut board = Board::new();
        for &col in &DRAW_SEQUENCE {
            board.place_disc(col).unwrap();
            board.swap_turn();
            let overlap = board.occupancy(Player::One) & board.occupancy(Player::Two);
            assert!(overlap.is_empty());
        }
        // Rejected placements leave the sets alone too
        for col in 0..COLS {
            assert_eq!(board.place_disc(col), Err(MoveError::ColumnFull));
        }
        assert!((board.occupancy(Player::One) & board.occupancy(Player::Two)).is_empty());
    }

    #[test]
    fn test_draw_board_has_no_winner() {
        let mut board = Board::new();
        play(&mut board, &DRAW_SEQUENCE);
        assert!(board.is_full());
        assert_eq!(board.get_winner(), None);
        assert_eq!(board.occupancy(Player::One).count(), 21);
        assert_eq!(board.occupancy(Player::Two).count(), 21);
    }

    #[test]
    fn test_vertical_win_after_fourth_drop() {
        let mut board = Board::new();
        for drop in 1..=4 {
            board.place_disc(0).unwrap();
            if drop < 4 {
                assert_eq!(board.get_winner(), None, "no winner after {} drops", drop);
            }
        }
        assert_eq!(board.get_winner(), Some(Player::One));
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.place_disc(col).unwrap();
        }
        assert_eq!(board.get_winner(), Some(Player::One));
    }

    #[test]
    fn test_diagonal_win() {
        let mut board = Board::new();
        // Player Two's discs prop up Player One's rising diagonal
        play(&mut board, &[0, 1, 1, 2, 2, 3, 2, 3, 3, 6, 3]);
        assert_eq!(board.get_winner(), Some(Player::One));
    }

    #[test]
    fn test_every_mask_wins_for_either_player() {
        for mask in generate_win_masks() {
            let one = Board::from_occupancy(mask, Bitboard::EMPTY, Player::Two).unwrap();
            assert_eq!(one.get_winner(), Some(Player::One), "mask {:#x}", mask.bits());

            let two = Board::from_occupancy(Bitboard::EMPTY, mask, Player::One).unwrap();
            assert_eq!(two.get_winner(), Some(Player::Two), "mask {:#x}", mask.bits());
        }
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.place_disc(col).unwrap();
        }
        board.swap_turn();
        for col in 4..7 {
            board.place_disc(col).unwrap();
        }
        assert_eq!(board.get_winner(), None);
    }

    #[test]
    fn test_player_one_checked_first() {
        let one = Bitboard::cell(0, 0) | Bitboard::cell(1, 0) | Bitboard::cell(2, 0) | Bitboard::cell(3, 0);
        let two = Bitboard::cell(0, 1) | Bitboard::cell(1, 1) | Bitboard::cell(2, 1) | Bitboard::cell(3, 1);
        let board = Board::from_occupancy(one, two, Player::One).unwrap();
        assert_eq!(board.get_winner(), Some(Player::One));
    }

    #[test]
    fn test_from_occupancy_rejects_overlap() {
        let cell = Bitboard::cell(4, 2);
        assert!(Board::from_occupancy(cell, cell, Player::One).is_none());
    }
}
