use crate::game::{GameOutcome, GameSession, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::Line,
    widgets::{canvas::Canvas, Block, Borders, Paragraph},
    Frame,
};

use super::canvas_surface::{terminal_color, CanvasSurface};
use super::geometry::GridGeometry;
use super::render;
use super::surface::palette;

/// Draw the whole screen and return the area the canvas occupies.
pub fn render(
    frame: &mut Frame,
    session: &GameSession,
    geometry: &GridGeometry,
    hovered: Option<usize>,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Canvas
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, session, chunks[0]);
    render_canvas(frame, session, geometry, hovered, chunks[1]);
    render_controls(frame, chunks[2]);

    chunks[1]
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => terminal_color(palette::PLAYER_ONE),
        Player::Two => terminal_color(palette::PLAYER_TWO),
    }
}

fn render_header(frame: &mut Frame, session: &GameSession, area: Rect) {
    let (status, color) = match session.outcome() {
        None => {
            let player = session.active_player();
            (format!("Current Player: {}", player.name()), player_color(player))
        }
        Some(GameOutcome::Winner(player)) => ("Game Over".to_string(), player_color(player)),
        Some(GameOutcome::Draw) => ("Game Over".to_string(), Color::Gray),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_canvas(
    frame: &mut Frame,
    session: &GameSession,
    geometry: &GridGeometry,
    hovered: Option<usize>,
    area: Rect,
) {
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .background_color(Color::Black)
        .x_bounds([0.0, geometry.width()])
        .y_bounds([0.0, geometry.height()])
        .paint(|ctx| {
            let mut surface = CanvasSurface::new(ctx, geometry, area);
            render::render_frame(&mut surface, geometry, session, hovered);
        });

    frame.render_widget(canvas, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("Mouse: Aim & Drop  |  ←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
