//! Owned browser registrations that are released when a component unmounts.
//!
//! Every interval, timeout, frame request and window listener a component
//! registers is parked in a [`Slot`]. The component's `on_cleanup` releases the
//! slot, so nothing keeps firing once the view is gone. Per-frame loops
//! additionally check a [`StopFlag`] before re-arming themselves.
//!
//! [`live_registrations`] counts handles currently parked in any slot, which
//! is how unmount tests tell a released timer from a leaked one.

use std::cell::Cell;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use leptos::prelude::{
	AnimationFrameRequestHandle, IntervalHandle, TimeoutHandle, WindowListenerHandle,
};

thread_local! {
	static LIVE: Cell<usize> = const { Cell::new(0) };
}

fn track(before: bool, after: bool) {
	match (before, after) {
		(false, true) => LIVE.with(|n| n.set(n.get() + 1)),
		(true, false) => LIVE.with(|n| n.set(n.get().saturating_sub(1))),
		_ => {}
	}
}

/// Handles currently held by slots on this thread.
///
/// The browser runs everything on one thread, so this is the page-wide count.
pub fn live_registrations() -> usize {
	LIVE.with(Cell::get)
}

/// A registration that can be torn down exactly once.
pub trait Release: Send + 'static {
	/// Cancel the underlying registration.
	fn release(self);
}

impl Release for IntervalHandle {
	fn release(self) {
		self.clear();
	}
}

impl Release for TimeoutHandle {
	fn release(self) {
		self.clear();
	}
}

impl Release for AnimationFrameRequestHandle {
	fn release(self) {
		AnimationFrameRequestHandle::cancel(&self);
	}
}

impl Release for WindowListenerHandle {
	fn release(self) {
		self.remove();
	}
}

/// Shared holder for at most one live registration.
///
/// Clones share the same slot, so a timer callback and the component cleanup
/// can both see the current handle.
pub struct Slot<H>(Arc<Mutex<Option<H>>>);

impl<H> Clone for Slot<H> {
	fn clone(&self) -> Self {
		Self(Arc::clone(&self.0))
	}
}

impl<H: Release> Default for Slot<H> {
	fn default() -> Self {
		Self::new()
	}
}

impl<H: Release> Slot<H> {
	/// An empty slot.
	pub fn new() -> Self {
		Self(Arc::new(Mutex::new(None)))
	}

	fn lock(&self) -> MutexGuard<'_, Option<H>> {
		self.0.lock().unwrap_or_else(PoisonError::into_inner)
	}

	/// Install `handle`, releasing whatever was there before.
	pub fn replace(&self, handle: H) {
		let previous = self.lock().replace(handle);
		track(previous.is_some(), true);
		if let Some(previous) = previous {
			previous.release();
		}
	}

	/// Install `handle` without touching the previous one.
	///
	/// Used for one-shot registrations that have already fired.
	pub fn store(&self, handle: H) {
		let previous = self.lock().replace(handle);
		track(previous.is_some(), true);
	}

	/// Remove the handle without releasing it.
	pub fn take(&self) -> Option<H> {
		let current = self.lock().take();
		track(current.is_some(), false);
		current
	}

	/// Release the current handle, if any. Safe to call repeatedly.
	pub fn release(&self) {
		let current = self.lock().take();
		track(current.is_some(), false);
		if let Some(current) = current {
			current.release();
		}
	}

	/// Whether a handle is currently held.
	pub fn is_armed(&self) -> bool {
		self.lock().is_some()
	}
}

/// Cooperative stop signal for self re-arming loops.
#[derive(Clone, Debug, Default)]
pub struct StopFlag(Arc<AtomicBool>);

impl StopFlag {
	/// A flag in the running state.
	pub fn new() -> Self {
		Self::default()
	}

	/// Request the loop to stop before its next re-arm.
	pub fn stop(&self) {
		self.0.store(true, Ordering::Release);
	}

	/// Whether [`StopFlag::stop`] has been called.
	pub fn is_stopped(&self) -> bool {
		self.0.load(Ordering::Acquire)
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::AtomicUsize;

	use super::*;

	struct Counted(Arc<AtomicUsize>);

	impl Release for Counted {
		fn release(self) {
			self.0.fetch_add(1, Ordering::SeqCst);
		}
	}

	fn counter() -> Arc<AtomicUsize> {
		Arc::new(AtomicUsize::new(0))
	}

	#[test]
	fn replace_releases_previous_handle() {
		let (first, second) = (counter(), counter());
		let slot = Slot::new();
		slot.replace(Counted(first.clone()));
		slot.replace(Counted(second.clone()));

		assert_eq!(first.load(Ordering::SeqCst), 1);
		assert_eq!(second.load(Ordering::SeqCst), 0);
		assert!(slot.is_armed());
	}

	#[test]
	fn release_is_idempotent() {
		let released = counter();
		let slot = Slot::new();
		slot.replace(Counted(released.clone()));

		slot.release();
		slot.release();

		assert_eq!(released.load(Ordering::SeqCst), 1);
		assert!(!slot.is_armed());
	}

	#[test]
	fn clones_share_the_handle() {
		let released = counter();
		let slot = Slot::new();
		let cleanup = slot.clone();
		slot.replace(Counted(released.clone()));

		cleanup.release();

		assert_eq!(released.load(Ordering::SeqCst), 1);
		assert!(!slot.is_armed());
	}

	#[test]
	fn store_and_take_never_release() {
		let (first, second) = (counter(), counter());
		let slot = Slot::new();
		slot.store(Counted(first.clone()));
		slot.store(Counted(second.clone()));
		assert!(slot.take().is_some());
		assert!(slot.take().is_none());

		assert_eq!(first.load(Ordering::SeqCst), 0);
		assert_eq!(second.load(Ordering::SeqCst), 0);
	}

	#[test]
	fn stop_flag_is_shared_across_clones() {
		let flag = StopFlag::new();
		let loop_side = flag.clone();
		assert!(!loop_side.is_stopped());

		flag.stop();

		assert!(loop_side.is_stopped());
	}

	#[test]
	fn mount_unmount_cycles_leave_nothing_armed() {
		let released = counter();
		for _ in 0..10 {
			let interval = Slot::new();
			let frame = Slot::new();
			let stop = StopFlag::new();
			interval.replace(Counted(released.clone()));
			frame.replace(Counted(released.clone()));

			// cleanup
			stop.stop();
			interval.release();
			frame.release();

			assert!(!interval.is_armed() && !frame.is_armed());
		}
		assert_eq!(released.load(Ordering::SeqCst), 20);
	}

	#[test]
	fn live_count_follows_arm_and_release() {
		let base = live_registrations();
		let (interval, frame) = (Slot::new(), Slot::new());

		interval.replace(Counted(counter()));
		interval.replace(Counted(counter()));
		assert_eq!(live_registrations(), base + 1);

		frame.store(Counted(counter()));
		assert_eq!(live_registrations(), base + 2);
		// frame loop: fired request taken, next one stored
		let _ = frame.take();
		frame.store(Counted(counter()));
		assert_eq!(live_registrations(), base + 2);

		interval.release();
		frame.release();
		frame.release();
		assert_eq!(live_registrations(), base);
	}

	#[test]
	fn forgotten_slot_stays_counted() {
		let base = live_registrations();
		let slot = Slot::new();
		slot.replace(Counted(counter()));
		drop(slot);
		assert_eq!(live_registrations(), base + 1);
	}
}
