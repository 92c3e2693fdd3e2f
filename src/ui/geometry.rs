use ratatui::layout::Rect;

use crate::config::CanvasConfig;
use crate::game::{COLS, ROWS};

/// Screen placement of the grid inside the canvas, in canvas units with the
/// origin at the top-left corner and y growing downwards.
///
/// The board is shown mirrored: screen column 0 is board column 6. Screen
/// row 0 is the top row of the board.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    width: f64,
    height: f64,
    disc_radius: f64,
    cell_spacing: f64,
}

impl GridGeometry {
    pub fn new(config: &CanvasConfig) -> Self {
        GridGeometry {
            width: config.width,
            height: config.height,
            disc_radius: config.disc_radius,
            cell_spacing: config.cell_spacing,
        }
    }

    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn disc_radius(&self) -> f64 {
        self.disc_radius
    }

    /// Distance between the centres of two neighbouring discs
    pub fn pitch(&self) -> f64 {
        self.disc_radius * 2.0 + self.cell_spacing
    }

    /// Centre x of screen column 0
    pub fn grid_x(&self) -> f64 {
        self.disc_radius + (self.width - COLS as f64 * self.pitch()) / 2.0
    }

    /// Centre y of screen row 0
    pub fn grid_y(&self) -> f64 {
        self.disc_radius + (self.height - ROWS as f64 * self.pitch()) / 2.0
    }

    pub fn disc_center(&self, screen_col: usize, screen_row: usize) -> (f64, f64) {
        (
            screen_col as f64 * self.pitch() + self.grid_x(),
            screen_row as f64 * self.pitch() + self.grid_y(),
        )
    }

    /// Screen column under the canvas point `(x, y)`.
    ///
    /// A column's hit zone runs from the gap on the left of its disc to the
    /// disc's right edge. Points above the top row of discs or below the grid
    /// band select nothing.
    pub fn column_at(&self, x: f64, y: f64) -> Option<usize> {
        let r = self.disc_radius;
        let grid_y = self.grid_y();
        if !(y > grid_y - r && y < grid_y + ROWS as f64 * self.pitch()) {
            return None;
        }

        let column = ((x - self.grid_x() - r) / self.pitch()).floor() + 1.0;
        if column < 0.0 || column >= COLS as f64 {
            return None;
        }
        Some(column as usize)
    }

    /// Translate a terminal cell inside `area` (where the canvas is displayed)
    /// into canvas units, scaling by the intrinsic-to-displayed size ratio.
    pub fn client_to_canvas(&self, column: u16, row: u16, area: Rect) -> Option<(f64, f64)> {
        if column < area.x
            || row < area.y
            || column >= area.x + area.width
            || row >= area.y + area.height
        {
            return None;
        }

        let scale_x = self.width / area.width as f64;
        let scale_y = self.height / area.height as f64;
        // Aim at the centre of the cell
        let x = ((column - area.x) as f64 + 0.5) * scale_x;
        let y = ((row - area.y) as f64 + 0.5) * scale_y;
        Some((x, y))
    }
}

impl Default for GridGeometry {
    fn default() -> Self {
        Self::new(&CanvasConfig::default())
    }
}

/// Board column shown at `screen_col`.
pub fn board_column(screen_col: usize) -> usize {
    COLS - 1 - screen_col
}

/// Screen cell where board cell `(col, row)` is painted.
pub fn screen_cell(col: usize, row: usize) -> (usize, usize) {
    (COLS - 1 - col, ROWS - 1 - row)
}
