//! Cursor follower: two soft markers trailing the mouse pointer.

mod component;
mod follow;

pub use component::CursorFollower;
pub use follow::{LEADER_SMOOTHING, Point, PointerState, TRAIL_SMOOTHING};
