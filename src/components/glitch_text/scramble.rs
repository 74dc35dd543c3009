//! Character-level text corruption for the glitch effect.

use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Deserialize;

/// Box-drawing glyphs substituted into the text during a pulse.
pub const GLITCH_GLYPHS: &str = "░█▓▒│┃┄┅┆┇┈┉┊┋┌┍┎┏┐┑┒┓└┕┖┗┘┙┚┛├┝┞┟┠┡┢┣┤┥┦┧┨┩┪┫┬┭┮┯┰┱┲┳┴┵┶┷┸┹┺┻┼┽┾┿╀╁╂╃╄╅╆╇╈╉╊╋╌╍╎╏═║╒╓╔╕╖╗╘╙╚╛╜╝╞╟╠╡╢╣╤╥╦╧╨╩╪╫╬╭╮╯╰╱╲╳╴╵╶╷╸╹╺╻╼╽╾╿";

/// Chance that any single character is replaced during a pulse.
pub const GLITCH_PROBABILITY: f64 = 0.3;

/// How long the corrupted text stays on screen.
pub const GLITCH_PULSE: Duration = Duration::from_millis(150);

/// How often a text glitches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
	/// Every 6 s.
	Low,
	/// Every 4 s.
	#[default]
	Medium,
	/// Every 2 s.
	High,
	/// Every second.
	Extreme,
}

impl Intensity {
	/// Time between glitch pulses.
	pub const fn period(self) -> Duration {
		match self {
			Intensity::Low => Duration::from_millis(6000),
			Intensity::Medium => Duration::from_millis(4000),
			Intensity::High => Duration::from_millis(2000),
			Intensity::Extreme => Duration::from_millis(1000),
		}
	}
}

/// Replace each character of `source` with a random glyph with probability
/// [`GLITCH_PROBABILITY`]. The result always has the same number of chars.
pub fn scramble<R: Rng + ?Sized>(source: &str, rng: &mut R) -> String {
	let glyphs: Vec<char> = GLITCH_GLYPHS.chars().collect();
	source
		.chars()
		.map(|ch| {
			if rng.gen_bool(GLITCH_PROBABILITY) {
				glyphs.choose(rng).copied().unwrap_or(ch)
			} else {
				ch
			}
		})
		.collect()
}

/// What a glitching text currently shows.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScrambleState {
	displayed: String,
	glitching: bool,
}

impl ScrambleState {
	/// Showing `source`, not glitching.
	pub fn new(source: &str) -> Self {
		Self {
			displayed: source.to_owned(),
			glitching: false,
		}
	}

	/// Start a pulse: show a corrupted copy of `source`.
	pub fn begin_pulse<R: Rng + ?Sized>(&mut self, source: &str, rng: &mut R) {
		self.displayed = scramble(source, rng);
		self.glitching = true;
	}

	/// End a pulse (or adopt a new source): show `source` verbatim.
	pub fn restore(&mut self, source: &str) {
		source.clone_into(&mut self.displayed);
		self.glitching = false;
	}

	/// Text currently on screen.
	pub fn displayed(&self) -> &str {
		&self.displayed
	}

	/// Whether a pulse is in progress.
	pub fn is_glitching(&self) -> bool {
		self.glitching
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use super::*;

	fn is_original_or_glyph(source: &str, scrambled: &str) -> bool {
		source
			.chars()
			.zip(scrambled.chars())
			.all(|(orig, out)| out == orig || GLITCH_GLYPHS.contains(out))
	}

	#[test]
	fn periods_follow_intensity() {
		assert_eq!(Intensity::Low.period(), Duration::from_millis(6000));
		assert_eq!(Intensity::Medium.period(), Duration::from_millis(4000));
		assert_eq!(Intensity::High.period(), Duration::from_millis(2000));
		assert_eq!(Intensity::Extreme.period(), Duration::from_millis(1000));
		assert_eq!(Intensity::default(), Intensity::Medium);
	}

	#[test]
	fn scramble_preserves_length_and_alphabet() {
		let mut rng = StdRng::seed_from_u64(7);
		for source in ["anetrexic", "サイバーパンク", "デジタルコア_アンダーグラウンド", "x"] {
			for _ in 0..200 {
				let out = scramble(source, &mut rng);
				assert_eq!(out.chars().count(), source.chars().count());
				assert!(is_original_or_glyph(source, &out), "{out}");
			}
		}
	}

	#[test]
	fn scramble_replaces_roughly_thirty_percent() {
		let mut rng = StdRng::seed_from_u64(42);
		let source = "a".repeat(10_000);
		let replaced = scramble(&source, &mut rng)
			.chars()
			.filter(|&c| c != 'a')
			.count();
		assert!((2_500..3_500).contains(&replaced), "replaced {replaced}");
	}

	#[test]
	fn empty_source_scrambles_to_empty() {
		let mut rng = StdRng::seed_from_u64(1);
		assert_eq!(scramble("", &mut rng), "");

		let mut state = ScrambleState::new("");
		state.begin_pulse("", &mut rng);
		assert_eq!(state.displayed(), "");
		state.restore("");
		assert!(!state.is_glitching());
	}

	#[test]
	fn pulse_always_restores_source_exactly() {
		let mut rng = StdRng::seed_from_u64(3);
		let mut state = ScrambleState::new("anetrexic");
		assert!(!state.is_glitching());

		for _ in 0..50 {
			state.begin_pulse("anetrexic", &mut rng);
			assert!(state.is_glitching());
			assert_eq!(state.displayed().chars().count(), 9);
			assert!(is_original_or_glyph("anetrexic", state.displayed()));

			state.restore("anetrexic");
			assert!(!state.is_glitching());
			assert_eq!(state.displayed(), "anetrexic");
		}
	}

	#[test]
	fn restore_adopts_latest_source() {
		let mut rng = StdRng::seed_from_u64(5);
		let mut state = ScrambleState::new("about");
		state.begin_pulse("about", &mut rng);
		state.restore("projects");
		assert_eq!(state.displayed(), "projects");
	}

	#[test]
	fn intensity_parses_lowercase() {
		let parsed: Intensity = serde_json::from_str("\"extreme\"").unwrap();
		assert_eq!(parsed, Intensity::Extreme);
	}
}
