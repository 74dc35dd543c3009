//! Snowflake descriptors and the ordered field they accumulate in.

use std::collections::VecDeque;
use std::time::Duration;

use rand::Rng;
use serde::Deserialize;

/// Time between two spawns.
pub const SPAWN_INTERVAL: Duration = Duration::from_millis(3500);

const FALL_SECS: std::ops::Range<f64> = 30.0..50.0;
const OPACITY: std::ops::Range<f64> = 0.3..0.8;
const LEFT_VW: std::ops::Range<f64> = 0.0..100.0;
const SIZE_PX: std::ops::Range<f64> = 10.0..20.0;

/// One falling flake. Rendering is pure CSS; this only carries the knobs.
#[derive(Clone, Debug, PartialEq)]
pub struct Snowflake {
	/// Spawn sequence number, doubles as the render key.
	pub id: u64,
	/// Horizontal start position, percent of viewport width.
	pub left_vw: f64,
	/// Duration of the fall animation.
	pub fall_secs: f64,
	/// Glyph opacity.
	pub opacity: f64,
	/// Glyph font size.
	pub size_px: f64,
	/// Wall-clock spawn time in milliseconds.
	pub spawned_at_ms: f64,
}

impl Snowflake {
	/// A flake with position, speed, opacity and size drawn uniformly.
	pub fn random<R: Rng + ?Sized>(id: u64, now_ms: f64, rng: &mut R) -> Self {
		Self {
			id,
			left_vw: rng.gen_range(LEFT_VW),
			fall_secs: rng.gen_range(FALL_SECS),
			opacity: rng.gen_range(OPACITY),
			size_px: rng.gen_range(SIZE_PX),
			spawned_at_ms: now_ms,
		}
	}

	/// When the fall animation has finished and the flake is off screen.
	pub fn lands_at_ms(&self) -> f64 {
		self.spawned_at_ms + self.fall_secs * 1000.0
	}

	/// Inline CSS for the flake element.
	pub fn style(&self) -> String {
		format!(
			"left: {:.2}vw; animation-duration: {:.2}s; opacity: {:.3}; font-size: {:.1}px;",
			self.left_vw, self.fall_secs, self.opacity, self.size_px
		)
	}
}

/// What happens to flakes that have finished falling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Retention {
	/// Drop landed flakes on the next spawn.
	#[default]
	Expire,
	/// Keep every flake ever spawned.
	Unbounded,
}

/// Ordered collection of live flakes; front is the oldest.
#[derive(Clone, Debug, Default)]
pub struct SnowField {
	flakes: VecDeque<Snowflake>,
	next_id: u64,
	retention: Retention,
}

impl SnowField {
	/// An empty field.
	pub fn new(retention: Retention) -> Self {
		Self {
			retention,
			..Self::default()
		}
	}

	/// Append one random flake and, under [`Retention::Expire`], evict landed ones.
	pub fn spawn<R: Rng + ?Sized>(&mut self, now_ms: f64, rng: &mut R) -> &Snowflake {
		if self.retention == Retention::Expire {
			self.flakes.retain(|f| f.lands_at_ms() > now_ms);
		}
		let id = self.next_id;
		self.next_id += 1;
		self.flakes.push_back(Snowflake::random(id, now_ms, rng));
		&self.flakes[self.flakes.len() - 1]
	}

	/// Flakes currently held.
	pub fn len(&self) -> usize {
		self.flakes.len()
	}

	/// Whether no flake is held.
	pub fn is_empty(&self) -> bool {
		self.flakes.is_empty()
	}

	/// Total flakes ever spawned.
	pub fn spawned(&self) -> u64 {
		self.next_id
	}

	/// Flakes in spawn order.
	pub fn iter(&self) -> impl Iterator<Item = &Snowflake> {
		self.flakes.iter()
	}
}
