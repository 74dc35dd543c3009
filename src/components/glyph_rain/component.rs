//! Leptos component hosting the glyph-rain canvas.
//!
//! The canvas covers the viewport and ignores pointer events. Redraws are driven
//! by window listeners, so the rain follows the mouse over the whole page.

use leptos::ev;
use leptos::prelude::*;
use log::{info, warn};
use web_sys::{HtmlCanvasElement, MouseEvent};

use super::grid::{Viewport, rain_frame};
use super::render;
use crate::components::cursor::Point;
use crate::lifecycle::Slot;
use crate::theme::Theme;

/// Current window inner size, or `None` outside a browser.
fn window_viewport() -> Option<Viewport> {
	let window = web_sys::window()?;
	Some(Viewport::new(
		window.inner_width().ok()?.as_f64()?,
		window.inner_height().ok()?.as_f64()?,
	))
}

/// Full-viewport canvas that sprinkles random glyphs around the pointer.
#[component]
pub fn GlyphRain(
	/// Supplies the glyph fill.
	#[prop(optional)]
	theme: Theme,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let on_move: Slot<WindowListenerHandle> = Slot::new();
	let on_resize: Slot<WindowListenerHandle> = Slot::new();

	let canvas = move || -> Option<HtmlCanvasElement> { canvas_ref.get().map(Into::into) };

	Effect::new(move |_| {
		let Some(canvas) = canvas() else {
			return;
		};
		if let Some(viewport) = window_viewport() {
			render::fit_canvas(&canvas, viewport);
			info!(
				"anetrexic: glyph rain canvas {}x{}",
				viewport.width, viewport.height
			);
		}
	});

	on_move.replace(window_event_listener(ev::mousemove, move |e: MouseEvent| {
		let (Some(canvas), Some(viewport)) = (canvas(), window_viewport()) else {
			return;
		};
		render::fit_canvas(&canvas, viewport);
		let Some(ctx) = render::context_2d(&canvas) else {
			warn!("anetrexic: glyph rain has no 2d context");
			return;
		};
		let pointer = Point::new(e.client_x() as f64, e.client_y() as f64);
		let frame = rain_frame(pointer, viewport, &mut rand::thread_rng());
		render::draw(&ctx, viewport, &frame, &theme);
	}));

	on_resize.replace(window_event_listener(ev::resize, move |_| {
		let (Some(canvas), Some(viewport)) = (canvas(), window_viewport()) else {
			return;
		};
		// resizing the backing store also clears it
		render::fit_canvas(&canvas, viewport);
	}));

	on_cleanup(move || {
		on_move.release();
		on_resize.release();
	});

	view! { <canvas node_ref=canvas_ref class="glyph-rain" /> }
}
