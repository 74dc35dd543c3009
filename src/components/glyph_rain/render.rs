//! Canvas drawing for the glyph rain.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::grid::{CELL_PITCH, Cell, Viewport};
use crate::theme::Theme;

/// The canvas' 2D context, if the browser hands one out.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
	canvas.get_context("2d").ok()??.dyn_into().ok()
}

/// Match the backing store to `viewport`. Returns true if it changed.
pub fn fit_canvas(canvas: &HtmlCanvasElement, viewport: Viewport) -> bool {
	let (w, h) = (
		viewport.width.max(0.0) as u32,
		viewport.height.max(0.0) as u32,
	);
	if canvas.width() == w && canvas.height() == h {
		return false;
	}
	canvas.set_width(w);
	canvas.set_height(h);
	true
}

/// Clear the canvas and draw one glyph centred in each given cell.
pub fn draw(
	ctx: &CanvasRenderingContext2d,
	viewport: Viewport,
	frame: &[(Cell, char)],
	theme: &Theme,
) {
	ctx.clear_rect(0.0, 0.0, viewport.width, viewport.height);
	if frame.is_empty() {
		return;
	}

	ctx.set_font(&format!("{}px monospace", CELL_PITCH));
	ctx.set_text_align("center");
	ctx.set_text_baseline("middle");
	ctx.set_fill_style_str(&theme.rain.to_css());

	let mut buf = [0u8; 4];
	for (cell, glyph) in frame {
		let centre = cell.center();
		let _ = ctx.fill_text(glyph.encode_utf8(&mut buf), centre.x, centre.y);
	}
}
