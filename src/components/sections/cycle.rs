//! The section ring and the reveal rules hanging off it.

/// Which content is currently revealed. Advances only on click.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Section {
	/// Nothing revealed; heart and eye art showing.
	#[default]
	None,
	/// About text.
	About,
	/// About plus projects.
	Projects,
	/// All three text blocks.
	Contact,
	/// Text blocks plus the cyber eyes.
	Art,
}

/// Ring order of the sections.
pub const SECTIONS: [Section; 5] = [
	Section::None,
	Section::About,
	Section::Projects,
	Section::Contact,
	Section::Art,
];

impl Section {
	/// Position in [`SECTIONS`].
	pub fn index(self) -> usize {
		SECTIONS.iter().position(|&s| s == self).unwrap_or(0)
	}

	/// The next section in the ring, wrapping from `Art` back to `None`.
	pub fn next(self) -> Self {
		SECTIONS[(self.index() + 1) % SECTIONS.len()]
	}

	/// Lowercase name, as exposed in `data-section`.
	pub fn name(self) -> &'static str {
		match self {
			Section::None => "none",
			Section::About => "about",
			Section::Projects => "projects",
			Section::Contact => "contact",
			Section::Art => "art",
		}
	}
}

/// A piece of page content whose visibility follows the active section.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Block {
	/// About text.
	About,
	/// Projects text.
	Projects,
	/// Contact text.
	Contact,
	/// Braille eyes beside the text.
	CyberEyes,
	/// Braille heart beside the text.
	Heart,
	/// Large centred eye.
	Eye,
}

impl Block {
	/// Text blocks accumulate as the ring advances; the art blocks belong to
	/// one section each.
	pub fn is_revealed(self, active: Section) -> bool {
		let at = active.index();
		match self {
			Block::About => at >= Section::About.index(),
			Block::Projects => at >= Section::Projects.index(),
			Block::Contact => at >= Section::Contact.index(),
			Block::CyberEyes => active == Section::Art,
			Block::Heart | Block::Eye => active == Section::None,
		}
	}
}
