//! Cell grid geometry for the glyph rain.
//!
//! The viewport is cut into square cells of [`CELL_PITCH`] pixels. Only whole
//! cells are considered, so every cell centre lies inside the canvas.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::components::cursor::Point;

/// Cell edge length in CSS pixels.
pub const CELL_PITCH: f64 = 12.0;
/// Cells whose centre is within this distance of the pointer light up.
pub const RAIN_RADIUS: f64 = 100.0;
/// Glyphs drawn into lit cells.
pub const RAIN_GLYPHS: &str = "アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン0123456789";

/// Canvas size in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Viewport {
	/// Width in CSS pixels.
	pub width: f64,
	/// Height in CSS pixels.
	pub height: f64,
}

impl Viewport {
	/// A viewport of the given size.
	pub const fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Number of whole columns and rows.
	pub fn grid(self) -> (usize, usize) {
		let count = |len: f64| {
			if len.is_finite() && len > 0.0 {
				(len / CELL_PITCH).floor() as usize
			} else {
				0
			}
		};
		(count(self.width), count(self.height))
	}
}

/// One grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
	/// Column, from the left.
	pub col: usize,
	/// Row, from the top.
	pub row: usize,
}

impl Cell {
	/// Centre of the cell in CSS pixels.
	pub fn center(self) -> Point {
		Point::new(
			(self.col as f64 + 0.5) * CELL_PITCH,
			(self.row as f64 + 0.5) * CELL_PITCH,
		)
	}
}

/// Index range of cells along one axis whose centres may fall within the radius.
fn candidate_span(pointer: f64, count: usize) -> std::ops::Range<usize> {
	if count == 0 || !pointer.is_finite() {
		return 0..0;
	}
	let lo = ((pointer - RAIN_RADIUS) / CELL_PITCH - 0.5).floor().max(0.0);
	let hi = ((pointer + RAIN_RADIUS) / CELL_PITCH - 0.5).ceil() + 1.0;
	let hi = hi.clamp(0.0, count as f64) as usize;
	(lo as usize).min(hi)..hi
}

/// Cells within [`RAIN_RADIUS`] of `pointer`, in row-major order.
pub fn lit_cells(pointer: Point, viewport: Viewport) -> Vec<Cell> {
	let (cols, rows) = viewport.grid();
	let mut cells = Vec::new();
	for row in candidate_span(pointer.y, rows) {
		for col in candidate_span(pointer.x, cols) {
			let cell = Cell { col, row };
			if cell.center().distance(pointer) <= RAIN_RADIUS {
				cells.push(cell);
			}
		}
	}
	cells
}

/// One frame of rain: a random glyph for every lit cell.
pub fn rain_frame<R: Rng + ?Sized>(
	pointer: Point,
	viewport: Viewport,
	rng: &mut R,
) -> Vec<(Cell, char)> {
	let glyphs: Vec<char> = RAIN_GLYPHS.chars().collect();
	lit_cells(pointer, viewport)
		.into_iter()
		.filter_map(|cell| glyphs.choose(rng).map(|&g| (cell, g)))
		.collect()
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn brute_force(pointer: Point, viewport: Viewport) -> Vec<Cell> {
		let (cols, rows) = viewport.grid();
		let mut cells = Vec::new();
		for row in 0..rows {
			for col in 0..cols {
				let cell = Cell { col, row };
				if cell.center().distance(pointer) <= RAIN_RADIUS {
					cells.push(cell);
				}
			}
		}
		cells
	}

	#[test]
	fn centred_pointer_lights_only_the_disc() {
		let viewport = Viewport::new(1200.0, 720.0);
		let centre = Point::new(600.0, 360.0);
		let cells = lit_cells(centre, viewport);

		assert!(!cells.is_empty());
		assert!(cells.iter().all(|c| c.center().distance(centre) <= RAIN_RADIUS));
		assert_eq!(cells, brute_force(centre, viewport));
	}

	#[test]
	fn cell_at_150px_is_never_lit() {
		let viewport = Viewport::new(1200.0, 720.0);
		let centre = Point::new(600.0, 360.0);
		// centre (750, 354): 150px right of the pointer, 6px up
		let far = Cell { col: 62, row: 29 };
		assert!((far.center().distance(centre) - 150.0).abs() < 0.5);

		let mut rng = StdRng::seed_from_u64(0);
		for _ in 0..20 {
			let frame = rain_frame(centre, viewport, &mut rng);
			assert!(frame.iter().all(|(cell, _)| *cell != far));
		}
	}

	#[test]
	fn windowed_search_matches_brute_force_near_edges() {
		let viewport = Viewport::new(640.0, 480.0);
		for pointer in [
			Point::new(0.0, 0.0),
			Point::new(639.0, 479.0),
			Point::new(-50.0, 240.0),
			Point::new(320.0, 530.0),
			Point::new(5.0, 471.0),
		] {
			assert_eq!(lit_cells(pointer, viewport), brute_force(pointer, viewport));
		}
	}

	#[test]
	fn degenerate_inputs_draw_nothing() {
		let centre = Point::new(0.0, 0.0);
		assert!(lit_cells(centre, Viewport::new(0.0, 0.0)).is_empty());
		assert!(lit_cells(centre, Viewport::new(5.0, 5.0)).is_empty());
		assert!(lit_cells(centre, Viewport::new(f64::NAN, 100.0)).is_empty());
		assert!(lit_cells(Point::new(5000.0, 5000.0), Viewport::new(800.0, 600.0)).is_empty());
		assert!(lit_cells(Point::new(f64::NAN, 10.0), Viewport::new(800.0, 600.0)).is_empty());
	}

	#[test]
	fn frame_uses_palette_and_stays_in_canvas() {
		let viewport = Viewport::new(300.0, 200.0);
		let (cols, rows) = viewport.grid();
		let mut rng = StdRng::seed_from_u64(8);
		let frame = rain_frame(Point::new(150.0, 100.0), viewport, &mut rng);

		assert!(!frame.is_empty());
		for (cell, glyph) in frame {
			assert!(RAIN_GLYPHS.contains(glyph));
			assert!(cell.col < cols && cell.row < rows);
		}
	}
}
