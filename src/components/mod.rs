//! Page effects. Each owns its timers and listeners and releases them on unmount.

pub mod art;
pub mod cursor;
pub mod glitch_text;
pub mod glyph_rain;
pub mod sections;
pub mod snowfall;
