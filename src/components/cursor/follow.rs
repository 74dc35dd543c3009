//! Two-stage exponential smoothing toward the pointer.

/// Per-frame fraction of the gap the leader closes toward the pointer.
pub const LEADER_SMOOTHING: f64 = 0.2;
/// Per-frame fraction of the gap the trail closes toward the leader.
pub const TRAIL_SMOOTHING: f64 = 0.1;

/// Screen position in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
	/// Horizontal offset from the left edge.
	pub x: f64,
	/// Vertical offset from the top edge.
	pub y: f64,
}

impl Point {
	/// A point at `(x, y)`.
	pub const fn new(x: f64, y: f64) -> Self {
		Self { x, y }
	}

	/// Move `factor` of the way toward `target`.
	pub fn approach(self, target: Point, factor: f64) -> Point {
		Point {
			x: self.x + (target.x - self.x) * factor,
			y: self.y + (target.y - self.y) * factor,
		}
	}

	/// Euclidean distance.
	pub fn distance(self, other: Point) -> f64 {
		(self.x - other.x).hypot(self.y - other.y)
	}

	/// CSS transform centring an element on this point.
	pub fn css_translate(self) -> String {
		format!(
			"translate({:.2}px, {:.2}px) translate(-50%, -50%)",
			self.x, self.y
		)
	}
}

/// Raw pointer target plus the two lagging markers.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
	/// Last pointer position.
	pub target: Point,
	/// Small marker, chasing the target.
	pub leader: Point,
	/// Large marker, chasing the leader.
	pub trail: Point,
}

impl PointerState {
	/// Record a new pointer position.
	pub fn set_target(&mut self, x: f64, y: f64) {
		self.target = Point::new(x, y);
	}

	/// Advance one animation frame. The trail chases the leader's new position.
	pub fn step(&mut self) {
		self.leader = self.leader.approach(self.target, LEADER_SMOOTHING);
		self.trail = self.trail.approach(self.leader, TRAIL_SMOOTHING);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const EPS: f64 = 1e-9;

	#[test]
	fn leader_gap_shrinks_geometrically() {
		let mut state = PointerState::default();
		state.set_target(300.0, -400.0);
		let mut gap = state.leader.distance(state.target);
		assert!((gap - 500.0).abs() < EPS);

		for _ in 0..60 {
			state.step();
			let next = state.leader.distance(state.target);
			assert!((next - gap * (1.0 - LEADER_SMOOTHING)).abs() < 1e-6);
			gap = next;
		}
	}

	#[test]
	fn single_frame_matches_the_formula() {
		let mut state = PointerState::default();
		state.set_target(100.0, 50.0);
		state.step();
		assert_eq!(state.leader, Point::new(20.0, 10.0));
		// trail follows the already-updated leader
		assert!((state.trail.x - 2.0).abs() < EPS);
		assert!((state.trail.y - 1.0).abs() < EPS);
	}

	#[test]
	fn trail_lags_behind_leader() {
		let mut state = PointerState::default();
		state.set_target(1000.0, 0.0);
		for _ in 0..30 {
			state.step();
			assert!(state.trail.x <= state.leader.x);
			assert!(state.leader.x <= state.target.x);
		}
	}

	#[test]
	fn both_markers_converge_on_a_still_pointer() {
		let mut state = PointerState::default();
		state.set_target(640.0, 360.0);
		for _ in 0..400 {
			state.step();
		}
		assert!(state.leader.distance(state.target) < 1e-6);
		assert!(state.trail.distance(state.target) < 1e-3);
	}

	#[test]
	fn no_clamping_on_large_jumps() {
		let mut state = PointerState::default();
		state.set_target(1.0e6, 1.0e6);
		state.step();
		assert_eq!(state.leader, Point::new(2.0e5, 2.0e5));
	}

	#[test]
	fn translate_centres_the_marker() {
		assert_eq!(
			Point::new(1.0, 2.5).css_translate(),
			"translate(1.00px, 2.50px) translate(-50%, -50%)"
		);
	}
}
