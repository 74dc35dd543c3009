//! Visual theming for the page effects.
//!
//! Colors are kept as RGBA and rendered to CSS strings at the point of use,
//! both for inline styles and for the glyph-rain canvas fill.

use serde::Deserialize;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha, 0.0 to 1.0.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// `#rrggbb` when opaque, `rgba(...)` otherwise.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Named theme presets selectable from the page config.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeName {
	/// [`Theme::rose`].
	#[default]
	Rose,
	/// [`Theme::violet`].
	Violet,
}

/// Complete visual theme.
#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
	/// Preset name, used in logs.
	pub name: &'static str,
	/// Headline accent, stars and braille art
	pub accent: Color,
	/// Secondary text (subtitle, link labels)
	pub muted: Color,
	/// Link hover color
	pub hover: Color,
	/// Snowflake glyph color
	pub snow: Color,
	/// Glyph rain fill
	pub rain: Color,
	/// Cursor marker that tracks the pointer closely
	pub cursor_leader: Color,
	/// Cursor marker that lags behind the leader
	pub cursor_trail: Color,
}

impl Theme {
	/// Rose on black (default)
	pub fn rose() -> Self {
		Self {
			name: "rose",
			accent: Color::rgb(244, 63, 94),
			muted: Color::rgb(156, 163, 175),
			hover: Color::rgb(167, 139, 250),
			snow: Color::rgba(255, 255, 255, 0.8),
			rain: Color::rgba(244, 63, 94, 0.85),
			cursor_leader: Color::rgba(239, 68, 68, 0.5),
			cursor_trail: Color::rgba(239, 68, 68, 0.3),
		}
	}

	/// Cold violet variant
	pub fn violet() -> Self {
		Self {
			name: "violet",
			accent: Color::rgb(167, 139, 250),
			muted: Color::rgb(148, 163, 184),
			hover: Color::rgb(244, 63, 94),
			snow: Color::rgba(224, 231, 255, 0.8),
			rain: Color::rgba(167, 139, 250, 0.85),
			cursor_leader: Color::rgba(139, 92, 246, 0.5),
			cursor_trail: Color::rgba(139, 92, 246, 0.3),
		}
	}

	/// Resolve a preset by name.
	pub fn named(name: ThemeName) -> Self {
		match name {
			ThemeName::Rose => Self::rose(),
			ThemeName::Violet => Self::violet(),
		}
	}
}

impl Default for Theme {
	fn default() -> Self {
		Self::rose()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn opaque_colors_render_as_hex() {
		assert_eq!(Color::rgb(244, 63, 94).to_css(), "#f43f5e");
	}

	#[test]
	fn translucent_colors_render_as_rgba() {
		let c = Color::rgba(239, 68, 68, 0.5);
		assert_eq!(c.to_css(), "rgba(239, 68, 68, 0.5)");
	}

	#[test]
	fn named_presets_resolve() {
		assert_eq!(Theme::named(ThemeName::Rose).name, "rose");
		assert_eq!(Theme::named(ThemeName::Violet).name, "violet");
		assert_eq!(Theme::default(), Theme::rose());
	}
}
