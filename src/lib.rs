//! anetrexic-site: animated single-page portfolio, client-side rendered with Leptos.
//!
//! The page is pure decoration driven by browser timers and pointer events:
//! glitching text, falling snow, a smoothed cursor trail, glyph rain around the
//! pointer and a click-through section ring. See [`config::PageConfig`] for the
//! switches that select between the page variants.

// Dev-deps are only used by the wasm32 browser tests.
#![cfg_attr(test, allow(unused_crate_dependencies))]

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

// Needed only for its `js` feature, which backs `rand` on wasm32.
use getrandom as _;

pub mod components;
pub mod config;
pub mod lifecycle;
pub mod page;
pub mod theme;

pub use config::{PageConfig, SocialLink};
pub use page::Portfolio;

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("anetrexic: logging initialized");
}

/// Load page overrides from a script element with id="page-config".
/// Falls back to [`PageConfig::default`] when absent or malformed.
pub fn load_page_config() -> PageConfig {
	fn script_text() -> Option<String> {
		let window: Window = web_sys::window()?;
		let document = window.document()?;
		let element = document.get_element_by_id("page-config")?;
		let script: HtmlScriptElement = element.dyn_into().ok()?;
		script.text().ok()
	}

	let Some(json_text) = script_text() else {
		info!("anetrexic: no page config, using defaults");
		return PageConfig::default();
	};
	match PageConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"anetrexic: page config loaded (sections: {}, glyph rain: {}, {} links)",
				config.section_cycler,
				config.glyph_rain,
				config.links.len()
			);
			config
		}
		Err(e) => {
			warn!("anetrexic: failed to parse page config: {}", e);
			PageConfig::default()
		}
	}
}

/// Main application component.
/// Reads the page config from the DOM and renders the portfolio.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_page_config();

	view! {
		<Html attr:lang="en" attr:dir="ltr" />
		<Title text="anetrexic" />
		<Meta charset="UTF-8" />
		<Meta name="description" content="Digital Underground" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<Portfolio config=config />
	}
}
