//! Glitching text: a string that periodically corrupts itself for a moment.
//!
//! Every [`Intensity::period`] a random ~30% of the characters are swapped for
//! box-drawing glyphs and a scan-line overlay flashes; after
//! [`GLITCH_PULSE`] the text snaps back to its source.

mod component;
mod scramble;

pub use component::GlitchText;
pub use scramble::{
	GLITCH_GLYPHS, GLITCH_PROBABILITY, GLITCH_PULSE, Intensity, ScrambleState, scramble,
};
