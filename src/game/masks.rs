use std::sync::LazyLock;

use super::bitboard::Bitboard;
use super::COLS;

/// Four cells one row apart in a single column.
const VERTICAL: u64 = 0x20_4081;
/// Four adjacent cells in a single row.
const HORIZONTAL: u64 = 0xf;
/// Four cells stepping one column right per row.
const DIAGONAL_RIGHT: u64 = 0x101_0101;
/// Four cells stepping one column left per row, anchored at column 3.
const DIAGONAL_LEFT: u64 = 0x20_8208;

static WIN_MASKS: LazyLock<Vec<Bitboard>> = LazyLock::new(generate_win_masks);

/// Every 4-in-a-row placement on the board: verticals, horizontals, then the
/// two diagonal directions.
pub fn generate_win_masks() -> Vec<Bitboard> {
    let mut masks = Vec::new();

    // A vertical run starting in rows 0..3 of any column.
    for offset in 0..3 * COLS {
        masks.push(Bitboard::from_bits(VERTICAL << offset));
    }

    for row in 0..6 {
        for col in 0..4 {
            masks.push(Bitboard::from_bits(HORIZONTAL << Bitboard::index(col, row)));
        }
    }

    for row in 0..3 {
        for col in 0..4 {
            masks.push(Bitboard::from_bits(DIAGONAL_RIGHT << Bitboard::index(col, row)));
        }
    }

    for row in 0..3 {
        for col in 0..4 {
            masks.push(Bitboard::from_bits(DIAGONAL_LEFT << Bitboard::index(col, row)));
        }
    }

    masks
}

/// The precomputed mask set, built on first use.
pub fn win_masks() -> &'static [Bitboard] {
    &WIN_MASKS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::ROWS;
    use std::collections::HashSet;

    /// Brute-force enumeration of all four-cell lines by direction.
    fn enumerate_lines() -> HashSet<Bitboard> {
        let directions: [(i32, i32); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];
        let mut lines = HashSet::new();
        for col in 0..COLS as i32 {
            for row in 0..ROWS as i32 {
                for (dc, dr) in directions {
                    let cells: Vec<(i32, i32)> =
                        (0..4).map(|k| (col + dc * k, row + dr * k)).collect();
                    let fits = cells
                        .iter()
                        .all(|&(c, r)| (0..COLS as i32).contains(&c) && (0..ROWS as i32).contains(&r));
                    if fits {
                        let mask = cells.iter().fold(Bitboard::EMPTY, |acc, &(c, r)| {
                            acc | Bitboard::cell(c as usize, r as usize)
                        });
                        lines.insert(mask);
                    }
                }
            }
        }
        lines
    }

    #[test]
    fn test_mask_count() {
        assert_eq!(generate_win_masks().len(), 69);
    }

    #[test]
    fn test_masks_match_enumerated_lines() {
        let generated: HashSet<Bitboard> = generate_win_masks().into_iter().collect();
        assert_eq!(generated.len(), 69, "masks should be distinct");
        assert_eq!(generated, enumerate_lines());
    }

    #[test]
    fn test_every_mask_has_four_cells_on_board() {
        for mask in generate_win_masks() {
            assert_eq!(mask.count(), 4, "mask {:#x}", mask.bits());
            assert!(Bitboard::FULL.contains(mask));
        }
    }

    #[test]
    fn test_mask_groups() {
        let masks = generate_win_masks();
        // Verticals first, then horizontals
        assert_eq!(masks[0].cells().collect::<Vec<_>>(), vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(masks[20].cells().collect::<Vec<_>>(), vec![(6, 2), (6, 3), (6, 4), (6, 5)]);
        assert_eq!(masks[21].cells().collect::<Vec<_>>(), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(masks[45].cells().collect::<Vec<_>>(), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(masks[57].cells().collect::<Vec<_>>(), vec![(3, 0), (2, 1), (1, 2), (0, 3)]);
    }

    #[test]
    fn test_win_masks_is_shared() {
        assert_eq!(win_masks().len(), 69);
        assert!(std::ptr::eq(win_masks(), win_masks()));
    }
}
