//! Leptos component spawning snowflakes on a fixed cadence.

use leptos::prelude::*;
use log::{debug, warn};

use super::field::{Retention, SPAWN_INTERVAL, SnowField, Snowflake};
use crate::lifecycle::Slot;
use crate::theme::Theme;

/// Full-viewport, click-through layer of falling `❄` glyphs.
#[component]
pub fn Snowfall(
	/// Fate of landed flakes.
	#[prop(default = Retention::Expire)]
	retention: Retention,
	/// Supplies the flake color.
	#[prop(optional)]
	theme: Theme,
) -> impl IntoView {
	let field = RwSignal::new(SnowField::new(retention));
	let interval: Slot<IntervalHandle> = Slot::new();

	let spawn = move || {
		let now = js_sys::Date::now();
		field.update(|f| {
			let flake = f.spawn(now, &mut rand::thread_rng());
			debug!("anetrexic: snowflake #{} spawned", flake.id);
		});
	};
	match set_interval_with_handle(spawn, SPAWN_INTERVAL) {
		Ok(handle) => interval.replace(handle),
		Err(e) => warn!("anetrexic: snowfall interval failed: {:?}", e),
	}

	on_cleanup(move || interval.release());

	let color = theme.snow.to_css();
	view! {
		<div class="snowfall" style=format!("color: {color};")>
			<For
				each=move || field.with(|f| f.iter().cloned().collect::<Vec<Snowflake>>())
				key=|flake| flake.id
				children=|flake| {
					view! { <div class="snowflake" style=flake.style()>"❄"</div> }
				}
			/>
		</div>
	}
}
