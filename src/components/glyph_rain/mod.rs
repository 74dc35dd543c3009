//! Glyph rain: random katakana and digits lighting up in a disc around the
//! pointer, redrawn from scratch on every mouse move.

mod component;
mod grid;
mod render;

pub use component::GlyphRain;
pub use grid::{CELL_PITCH, Cell, RAIN_GLYPHS, RAIN_RADIUS, Viewport, lit_cells, rain_frame};
