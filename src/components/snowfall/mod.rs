//! Falling snow: one flake every [`SPAWN_INTERVAL`], each with its own
//! randomized drift, opacity and size.

mod component;
mod field;

pub use component::Snowfall;
pub use field::{Retention, SPAWN_INTERVAL, SnowField, Snowflake};
