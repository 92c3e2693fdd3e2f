/// A colour with straight (non-premultiplied) alpha in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Rgba { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Rgba { r, g, b, a }
    }

    /// Composite this colour over an opaque background.
    pub fn blend_over(self, background: Rgba) -> (u8, u8, u8) {
        let a = self.a.clamp(0.0, 1.0);
        let mix = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
        (
            mix(self.r, background.r),
            mix(self.g, background.g),
            mix(self.b, background.b),
        )
    }
}

pub mod palette {
    use super::Rgba;

    pub const BACKGROUND: Rgba = Rgba::rgb(0, 0, 0);
    pub const EMPTY_CELL: Rgba = Rgba::rgb(56, 53, 53);
    pub const PLAYER_ONE: Rgba = Rgba::rgb(255, 0, 0);
    pub const PLAYER_TWO: Rgba = Rgba::rgb(255, 255, 0);
    pub const PLAYER_ONE_HINT: Rgba = Rgba::rgba(255, 127, 127, 0.3);
    pub const PLAYER_TWO_HINT: Rgba = Rgba::rgba(255, 255, 0, 0.3);
    pub const DRAW_TEXT: Rgba = Rgba::rgb(128, 128, 128);
}

/// 2D drawing target the frame renderer paints on.
///
/// Coordinates are canvas units: origin top-left, y pointing down.
pub trait Surface {
    fn width(&self) -> f64;

    fn height(&self) -> f64;

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    /// Colour used by every following fill.
    fn set_fill(&mut self, color: Rgba);

    fn fill_circle(&mut self, x: f64, y: f64, radius: f64);

    /// Draw `text` with its left end at `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64);
}
