//! Frame painting, independent of the drawing backend.

use crate::game::{GameOutcome, GameSession, Player, COLS, ROWS};

use super::geometry::{board_column, screen_cell, GridGeometry};
use super::surface::{palette, Rgba, Surface};

fn disc_color(player: Player) -> Rgba {
    match player {
        Player::One => palette::PLAYER_ONE,
        Player::Two => palette::PLAYER_TWO,
    }
}

fn hint_color(player: Player) -> Rgba {
    match player {
        Player::One => palette::PLAYER_ONE_HINT,
        Player::Two => palette::PLAYER_TWO_HINT,
    }
}

fn draw_disc<S: Surface>(surface: &mut S, geometry: &GridGeometry, screen_col: usize, screen_row: usize) {
    let (x, y) = geometry.disc_center(screen_col, screen_row);
    surface.fill_circle(x, y, geometry.disc_radius());
}

/// Paint one complete frame: empty cells, placed discs, then either the drop
/// highlight for `hovered` (a screen column) or the end-of-game message.
pub fn render_frame<S: Surface>(
    surface: &mut S,
    geometry: &GridGeometry,
    session: &GameSession,
    hovered: Option<usize>,
) {
    let (width, height) = (surface.width(), surface.height());
    surface.clear_rect(0.0, 0.0, width, height);

    surface.set_fill(palette::EMPTY_CELL);
    for screen_row in 0..ROWS {
        for screen_col in 0..COLS {
            draw_disc(surface, geometry, screen_col, screen_row);
        }
    }

    let board = session.board();
    for player in [Player::One, Player::Two] {
        surface.set_fill(disc_color(player));
        for (col, row) in board.occupancy(player).cells() {
            let (screen_col, screen_row) = screen_cell(col, row);
            draw_disc(surface, geometry, screen_col, screen_row);
        }
    }

    match session.outcome() {
        None => {
            let Some(screen_col) = hovered.filter(|&c| c < COLS) else {
                return;
            };
            if let Some(row) = board.get_top(board_column(screen_col)) {
                surface.set_fill(hint_color(session.active_player()));
                draw_disc(surface, geometry, screen_col, ROWS - 1 - row);
            }
        }
        Some(GameOutcome::Winner(player)) => {
            surface.set_fill(disc_color(player));
            surface.fill_text(&format!("{} wins!", player.name()), width / 2.0 - 140.0, 50.0);
        }
        Some(GameOutcome::Draw) => {
            surface.set_fill(palette::DRAW_TEXT);
            surface.fill_text("It's a draw!", width / 2.0 - 110.0, 50.0);
        }
    }
}
