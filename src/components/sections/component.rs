//! Click-driven section toggle and the blocks it reveals.

use leptos::prelude::*;
use log::debug;

use super::cycle::{Block, Section};
use crate::components::art::{AsciiHeart, CyberEyes};
use crate::components::glitch_text::{GlitchText, Intensity};

/// CSS classes for a block that slides in when revealed.
fn reveal_class(block: Block, active: Section) -> &'static str {
	if block.is_revealed(active) {
		"reveal shown"
	} else {
		"reveal hidden"
	}
}

/// The "about" label that advances the section ring on click.
#[component]
pub fn SectionToggle(
	/// Ring position, advanced on click.
	section: RwSignal<Section>,
) -> impl IntoView {
	let advance = move |_| {
		section.update(|s| *s = s.next());
		debug!("anetrexic: section -> {}", section.get_untracked().name());
	};

	view! {
		<div id="section-toggle" class="section-toggle" on:click=advance>
			<GlitchText text="about" intensity=Intensity::Low class="toggle-label" />
		</div>
	}
}

#[component]
fn AboutMe() -> impl IntoView {
	view! {
		<section>
			<GlitchText text="About Me" class="section-title" />
			<p>"Creating in the digital underground."</p>
			<p>
				"I produce breakcore and experimental electronic music, blending analog synths with glitched circuits and custom patches."
			</p>
			<p>"I code visuals that react to sound in real-time and design websites with that old-web energy."</p>
			<p>"When I'm not making noise, I'm walking by the sea, cooking, or lost in cartoons."</p>
		</section>
	}
}

#[component]
fn Projects() -> impl IntoView {
	view! {
		<section>
			<GlitchText text="Projects" class="section-title" />
			<ul>
				<li>
					<a href="https://citypopmidi.online" target="_blank" rel="noopener noreferrer">
						"citypopmidi.online"
					</a>
				</li>
				<li>"Sample pack/drum kit " <span class="accent">"(coming soon)"</span></li>
				<li>"Album art editor " <span class="accent">"(coming soon)"</span></li>
			</ul>
		</section>
	}
}

#[component]
fn Contact() -> impl IntoView {
	view! {
		<section>
			<GlitchText text="Contact Me" class="section-title" />
			<p>"anetrexic@gmail.com"</p>
			<p>"53°16'30.00\" N, 9°02'57.48\" W"</p>
		</section>
	}
}

/// Text blocks on the left, art on the right, each revealed per [`Block::is_revealed`].
#[component]
pub fn ContentSection(
	/// Current ring position.
	#[prop(into)]
	active: Signal<Section>,
) -> impl IntoView {
	let class_for = move |block: Block| move || reveal_class(block, active.get());

	view! {
		<div class="content">
			<div class="content-text">
				<div class=class_for(Block::About)>
					<AboutMe />
				</div>
				<div class=class_for(Block::Projects)>
					<Projects />
				</div>
				<div class=class_for(Block::Contact)>
					<Contact />
				</div>
			</div>
			<div class="content-art">
				<div class=move || format!("art-cyber-eyes {}", reveal_class(Block::CyberEyes, active.get()))>
					<CyberEyes />
				</div>
				<div class=move || format!("art-heart {}", reveal_class(Block::Heart, active.get()))>
					<AsciiHeart />
				</div>
			</div>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn reveal_class_tracks_block_rules() {
		assert_eq!(reveal_class(Block::About, Section::None), "reveal hidden");
		assert_eq!(reveal_class(Block::About, Section::About), "reveal shown");
		assert_eq!(reveal_class(Block::Heart, Section::None), "reveal shown");
		assert_eq!(reveal_class(Block::CyberEyes, Section::Contact), "reveal hidden");
	}
}
