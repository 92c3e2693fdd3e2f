use std::ops::{BitAnd, BitOr, BitOrAssign};

use super::{COLS, ROWS};

/// Occupancy of the 7×6 grid packed into the low 42 bits of a `u64`.
///
/// Layout: `index = col + row * COLS`. Every board row is one 7-bit group,
/// so bit 0 is the bottom cell of column 0 and bit 41 is the top cell of
/// column 6. Bits 42..=63 are never set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Bitboard(u64);

impl Bitboard {
    /// No cell set.
    pub const EMPTY: Bitboard = Bitboard(0);

    /// Every playable cell set.
    pub const FULL: Bitboard = Bitboard((1u64 << (COLS * ROWS)) - 1);

    /// Wrap raw bits. Bits outside the board are dropped.
    pub const fn from_bits(bits: u64) -> Self {
        Bitboard(bits & Self::FULL.0)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    /// Bit index of the cell at `(col, row)`, row 0 being the bottom.
    #[inline]
    pub const fn index(col: usize, row: usize) -> usize {
        col + row * COLS
    }

    /// Single cell at `(col, row)`.
    #[inline]
    pub fn cell(col: usize, row: usize) -> Self {
        debug_assert!(col < COLS && row < ROWS);
        Bitboard(1u64 << Self::index(col, row))
    }

    #[inline]
    pub fn is_set(self, col: usize, row: usize) -> bool {
        self.0 & Self::cell(col, row).0 != 0
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// True if every bit of `mask` is also set here.
    #[inline]
    pub fn contains(self, mask: Bitboard) -> bool {
        self.0 & mask.0 == mask.0
    }

    /// Number of occupied cells.
    #[inline]
    pub fn count(self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate the `(col, row)` coordinates of the set cells, lowest bit first.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        let mut bits = self.0;
        std::iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let index = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            Some((index % COLS, index / COLS))
        })
    }
}

impl BitAnd for Bitboard {
    type Output = Bitboard;

    fn bitand(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 & rhs.0)
    }
}

impl BitOr for Bitboard {
    type Output = Bitboard;

    fn bitor(self, rhs: Bitboard) -> Bitboard {
        Bitboard(self.0 | rhs.0)
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Bitboard) {
        self.0 |= rhs.0;
    }
}
