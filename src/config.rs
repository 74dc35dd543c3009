//! Page-level composition switches.
//!
//! The page is one component parameterized by [`PageConfig`]. Defaults give
//! the section-cycling layout; [`PageConfig::rain`] gives the variant with the
//! glyph-rain canvas and no section toggle. A JSON block in the host page can
//! override any field:
//!
//! ```html
//! <script id="page-config" type="application/json">
//!   { "glyph_rain": true, "theme": "violet" }
//! </script>
//! ```

use serde::Deserialize;

use crate::components::snowfall::Retention;
use crate::theme::ThemeName;

/// An outbound profile link. Opaque to the page.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SocialLink {
	/// Link text.
	pub label: String,
	/// Target URL.
	pub href: String,
}

impl SocialLink {
	fn new(label: &str, href: &str) -> Self {
		Self {
			label: label.to_owned(),
			href: href.to_owned(),
		}
	}
}

/// The stock link row: instagram, spotify, soundcloud, x, youtube.
pub fn default_links() -> Vec<SocialLink> {
	vec![
		SocialLink::new("instagram", "https://www.instagram.com/anetrexic/"),
		SocialLink::new("spotify", "https://open.spotify.com/"),
		SocialLink::new("soundcloud", "https://soundcloud.com/anetrexic"),
		SocialLink::new("x", "https://x.com/anetrexic"),
		SocialLink::new("youtube", "https://www.youtube.com/@anetrexic"),
	]
}

/// Which effects the page mounts and what it links to.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
	/// Click-to-advance about/projects/contact/art ring.
	pub section_cycler: bool,
	/// Canvas glyphs around the pointer.
	pub glyph_rain: bool,
	/// Smoothed cursor markers.
	pub cursor_follower: bool,
	/// What happens to flakes that have landed.
	pub snow_retention: Retention,
	/// Color preset.
	pub theme: ThemeName,
	/// Footer links, in display order.
	pub links: Vec<SocialLink>,
}

impl Default for PageConfig {
	fn default() -> Self {
		Self {
			section_cycler: true,
			glyph_rain: false,
			cursor_follower: true,
			snow_retention: Retention::Expire,
			theme: ThemeName::Rose,
			links: default_links(),
		}
	}
}

impl PageConfig {
	/// Variant without the section ring, with glyph rain under the cursor.
	pub fn rain() -> Self {
		Self {
			section_cycler: false,
			glyph_rain: true,
			..Self::default()
		}
	}

	/// Parse overrides; absent fields keep their defaults.
	pub fn from_json(json: &str) -> serde_json::Result<Self> {
		serde_json::from_str(json)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_object_is_the_default_page() {
		assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
	}

	#[test]
	fn partial_overrides_keep_other_defaults() {
		let config = PageConfig::from_json(
			r#"{ "glyph_rain": true, "snow_retention": "unbounded", "theme": "violet" }"#,
		)
		.unwrap();
		assert!(config.glyph_rain);
		assert!(config.section_cycler);
		assert_eq!(config.snow_retention, Retention::Unbounded);
		assert_eq!(config.theme, ThemeName::Violet);
		assert_eq!(config.links, default_links());
	}

	#[test]
	fn links_can_be_replaced() {
		let config = PageConfig::from_json(
			r#"{ "links": [{ "label": "bandcamp", "href": "https://example.com" }] }"#,
		)
		.unwrap();
		assert_eq!(
			config.links,
			vec![SocialLink::new("bandcamp", "https://example.com")]
		);
	}

	#[test]
	fn rain_variant_swaps_the_toggle_for_rain() {
		let rain = PageConfig::rain();
		assert!(!rain.section_cycler);
		assert!(rain.glyph_rain);
		assert!(rain.cursor_follower);
	}

	#[test]
	fn malformed_json_is_an_error() {
		assert!(PageConfig::from_json("{ glyph_rain: }").is_err());
		assert!(PageConfig::from_json(r#"{ "theme": "neon" }"#).is_err());
	}
}
