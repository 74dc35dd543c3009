//! Leptos component driving [`ScrambleState`] from browser timers.
//!
//! One interval per mounted text fires the pulse; each pulse arms a timeout
//! that restores the source. Both live in [`Slot`]s released on cleanup.

use leptos::prelude::*;
use log::{debug, warn};

use super::scramble::{GLITCH_PULSE, Intensity, ScrambleState};
use crate::lifecycle::Slot;

/// Renders `text`, glitching it at the rate given by `intensity`.
///
/// Changing `text` shows the new value immediately and later pulses use it.
/// Changing `intensity` restarts the interval; a pulse already on screen still
/// restores on schedule.
#[component]
pub fn GlitchText(
	/// Source text.
	#[prop(into)]
	text: Signal<String>,
	/// Pulse rate.
	#[prop(into, default = Intensity::Medium.into())]
	intensity: Signal<Intensity>,
	/// Extra classes for the span.
	#[prop(into, optional)]
	class: String,
	/// Use the monospace font.
	#[prop(default = false)]
	mono: bool,
) -> impl IntoView {
	let state = RwSignal::new(ScrambleState::new(&text.get_untracked()));
	let interval: Slot<IntervalHandle> = Slot::new();
	let pulse: Slot<TimeoutHandle> = Slot::new();

	// Adopt a new source as soon as it changes.
	Effect::new(move |_| {
		let source = text.get();
		state.update(|s| s.restore(&source));
	});

	let (interval_fx, pulse_fx) = (interval.clone(), pulse.clone());
	Effect::new(move |_| {
		let period = intensity.get();
		let pulse_tick = pulse_fx.clone();
		let tick = move || {
			let source = text.get_untracked();
			state.update(|s| s.begin_pulse(&source, &mut rand::thread_rng()));
			let restore = move || {
				let source = text.get_untracked();
				state.update(|s| s.restore(&source));
			};
			match set_timeout_with_handle(restore, GLITCH_PULSE) {
				Ok(handle) => pulse_tick.replace(handle),
				Err(e) => {
					warn!("anetrexic: glitch restore timer failed: {:?}", e);
					state.update(|s| s.restore(&source));
				}
			}
		};
		match set_interval_with_handle(tick, period.period()) {
			Ok(handle) => {
				debug!("anetrexic: glitch interval {:?} armed", period);
				interval_fx.replace(handle);
			}
			Err(e) => {
				warn!("anetrexic: glitch interval failed: {:?}", e);
				interval_fx.release();
			}
		}
	});

	on_cleanup(move || {
		interval.release();
		pulse.release();
	});

	let font = if mono { "font-mono" } else { "font-sans" };
	let classes = move || {
		let glitching = state.with(|s| s.is_glitching());
		format!(
			"glitch-text {font} {class}{}",
			if glitching { " glitching" } else { "" }
		)
	};

	view! {
		<span class=classes data-source=move || text.get()>
			{move || state.with(|s| s.displayed().to_owned())}
		</span>
	}
}
