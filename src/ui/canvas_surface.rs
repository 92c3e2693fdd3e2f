use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::canvas::{Context, Line as CanvasLine};

use super::geometry::GridGeometry;
use super::surface::{palette, Rgba, Surface};

/// Braille dots per terminal cell, vertically.
const DOTS_PER_ROW: f64 = 4.0;

/// [`Surface`] on top of a ratatui canvas painted with braille dots.
///
/// The canvas widget's y axis points up, so every y coordinate is flipped.
/// Circles are filled with one horizontal line per dot row.
pub struct CanvasSurface<'a, 'b> {
    ctx: &'a mut Context<'b>,
    width: f64,
    height: f64,
    fill: Color,
    scanline: f64,
}

impl<'a, 'b> CanvasSurface<'a, 'b> {
    /// `area` is the terminal region the canvas widget is rendered into.
    pub fn new(ctx: &'a mut Context<'b>, geometry: &GridGeometry, area: Rect) -> Self {
        let dot_rows = (area.height.max(1) as f64) * DOTS_PER_ROW;
        CanvasSurface {
            ctx,
            width: geometry.width(),
            height: geometry.height(),
            fill: Color::Reset,
            scanline: geometry.height() / dot_rows,
        }
    }

    fn flip(&self, y: f64) -> f64 {
        self.height - y
    }
}

/// Terminal colour for `color`, translucency resolved against the background.
pub fn terminal_color(color: Rgba) -> Color {
    let (r, g, b) = color.blend_over(palette::BACKGROUND);
    Color::Rgb(r, g, b)
}

impl Surface for CanvasSurface<'_, '_> {
    fn width(&self) -> f64 {
        self.width
    }

    fn height(&self) -> f64 {
        self.height
    }

    fn clear_rect(&mut self, _x: f64, _y: f64, _width: f64, _height: f64) {
        // The widget paints into a blank grid every frame.
    }

    fn set_fill(&mut self, color: Rgba) {
        self.fill = terminal_color(color);
    }

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64) {
        let mut dy = -radius;
        while dy <= radius {
            let half = (radius * radius - dy * dy).max(0.0).sqrt();
            let line_y = self.flip(y + dy);
            self.ctx.draw(&CanvasLine {
                x1: x - half,
                y1: line_y,
                x2: x + half,
                y2: line_y,
                color: self.fill,
            });
            dy += self.scanline;
        }
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) {
        let style = Style::default().fg(self.fill).add_modifier(Modifier::BOLD);
        let y = self.flip(y);
        self.ctx.print(x, y, Span::styled(text.to_string(), style));
    }
}
