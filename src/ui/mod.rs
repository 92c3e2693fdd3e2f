//! Presentation loop: pointer-to-column mapping, frame painting onto a
//! drawing surface, and the terminal canvas application shell.

mod app;
pub mod canvas_surface;
mod game_view;
pub mod geometry;
pub mod render;
pub mod surface;

pub use app::App;
pub use geometry::GridGeometry;
pub use surface::{Rgba, Surface};
