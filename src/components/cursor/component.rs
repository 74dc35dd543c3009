//! Leptos component wiring [`PointerState`] to the window and the frame clock.
//!
//! A window `mousemove` listener updates the target. A per-frame callback steps
//! the smoothing and re-arms itself through `requestAnimationFrame` until the
//! component's [`StopFlag`] is raised on cleanup.

use leptos::ev;
use leptos::prelude::*;
use log::{info, warn};
use web_sys::MouseEvent;

use super::follow::PointerState;
use crate::lifecycle::{Slot, StopFlag};
use crate::theme::Theme;

/// Everything the frame loop needs, cloned into each scheduled callback.
#[derive(Clone)]
struct FrameLoop {
	pointer: RwSignal<PointerState>,
	stop: StopFlag,
	pending: Slot<AnimationFrameRequestHandle>,
}

impl FrameLoop {
	fn schedule(self) {
		if self.stop.is_stopped() {
			return;
		}
		let pending = self.pending.clone();
		let next = self.clone();
		let request = request_animation_frame_with_handle(move || {
			next.pending.take();
			if next.stop.is_stopped() {
				return;
			}
			next.pointer.update(PointerState::step);
			next.schedule();
		});
		match request {
			Ok(handle) => pending.store(handle),
			Err(e) => warn!("anetrexic: cursor frame request failed: {:?}", e),
		}
	}
}

/// Two translucent circles easing after the mouse, the larger one lagging more.
#[component]
pub fn CursorFollower(
	/// Supplies the marker colors.
	#[prop(optional)]
	theme: Theme,
) -> impl IntoView {
	let pointer = RwSignal::new(PointerState::default());
	let stop = StopFlag::new();
	let pending: Slot<AnimationFrameRequestHandle> = Slot::new();
	let listener: Slot<WindowListenerHandle> = Slot::new();

	listener.replace(window_event_listener(ev::mousemove, move |e: MouseEvent| {
		pointer.update_untracked(|p| p.set_target(e.client_x() as f64, e.client_y() as f64));
	}));

	FrameLoop {
		pointer,
		stop: stop.clone(),
		pending: pending.clone(),
	}
	.schedule();
	info!("anetrexic: cursor follower mounted");

	on_cleanup(move || {
		stop.stop();
		pending.release();
		listener.release();
	});

	let (leader_color, trail_color) = (theme.cursor_leader.to_css(), theme.cursor_trail.to_css());
	view! {
		<div
			class="cursor-marker cursor-leader"
			style=move || {
				format!(
					"background: {leader_color}; transform: {};",
					pointer.with(|p| p.leader.css_translate()),
				)
			}
		/>
		<div
			class="cursor-marker cursor-trail"
			style=move || {
				format!(
					"background: {trail_color}; transform: {};",
					pointer.with(|p| p.trail.css_translate()),
				)
			}
		/>
	}
}
