use crate::config::AppConfig;
use crate::game::{GameSession, COLS};
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{backend::Backend, layout::Rect, Terminal};
use std::io;
use std::time::Duration;
use tracing::debug;

use super::geometry::{board_column, GridGeometry};

pub struct App {
    session: GameSession,
    geometry: GridGeometry,
    /// Screen column under the pointer, if any
    hovered: Option<usize>,
    /// Where the canvas was drawn on the last frame
    canvas_area: Rect,
    frame_interval: Duration,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        App {
            session: GameSession::new(),
            geometry: GridGeometry::new(&config.canvas),
            hovered: None,
            canvas_area: Rect::default(),
            frame_interval: Duration::from_millis(config.ui.frame_interval_ms),
            should_quit: false,
        }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn hovered_column(&self) -> Option<usize> {
        self.hovered
    }

    /// Main application loop: one frame, then input for at most one frame interval
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(|e| io::Error::other(e.to_string()))?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(self.frame_interval)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left if self.session.is_running() => {
                self.hovered = Some(self.hovered.map_or(COLS / 2, |c| c.saturating_sub(1)));
            }
            KeyCode::Right if self.session.is_running() => {
                self.hovered = Some(self.hovered.map_or(COLS / 2, |c| (c + 1).min(COLS - 1)));
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.click();
            }
            KeyCode::Char('r') => {
                self.session.restart();
                self.hovered = None;
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => {
                self.pointer_moved(mouse.column, mouse.row);
            }
            MouseEventKind::Down(MouseButton::Left) => {
                self.pointer_moved(mouse.column, mouse.row);
                self.click();
            }
            _ => {}
        }
    }

    /// Track the column under the pointer. Frozen once the game is over.
    pub fn pointer_moved(&mut self, column: u16, row: u16) {
        if !self.session.is_running() {
            return;
        }
        self.hovered = self
            .geometry
            .client_to_canvas(column, row, self.canvas_area)
            .and_then(|(x, y)| self.geometry.column_at(x, y));
    }

    /// Drop a disc in the hovered column
    pub fn click(&mut self) {
        if !self.session.is_running() {
            return;
        }
        let Some(screen_col) = self.hovered else {
            debug!("click outside the grid ignored");
            return;
        };
        if let Err(err) = self.session.play(board_column(screen_col)) {
            debug!(screen_col, error = %err, "click ignored");
        }
    }

    fn render(&mut self, frame: &mut ratatui::Frame) {
        self.canvas_area = super::game_view::render(frame, &self.session, &self.geometry, self.hovered);
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(&AppConfig::default())
    }
}
