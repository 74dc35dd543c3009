//! The portfolio page: every effect composed according to a [`PageConfig`].

use leptos::prelude::*;
use log::info;

use crate::components::art::{CornerStars, Eye};
use crate::components::cursor::CursorFollower;
use crate::components::glitch_text::{GlitchText, Intensity};
use crate::components::glyph_rain::GlyphRain;
use crate::components::sections::{Block, ContentSection, Section, SectionToggle};
use crate::components::snowfall::Snowfall;
use crate::config::{PageConfig, SocialLink};
use crate::theme::Theme;

/// CSS custom properties exposing the theme to the stylesheet.
fn theme_vars(theme: &Theme) -> String {
	format!(
		"--accent: {}; --muted: {}; --hover: {};",
		theme.accent.to_css(),
		theme.muted.to_css(),
		theme.hover.to_css()
	)
}

#[component]
fn SocialLinks(links: Vec<SocialLink>) -> impl IntoView {
	view! {
		<footer class="links">
			{links
				.into_iter()
				.map(|link| {
					view! {
						<a href=link.href target="_blank" rel="noopener noreferrer">
							<GlitchText text=link.label intensity=Intensity::Low class="link-label" />
						</a>
					}
				})
				.collect_view()}
		</footer>
	}
}

/// Whole page. Effects not enabled in `config` are never mounted.
#[component]
pub fn Portfolio(
	/// Effect switches, theme and links.
	config: PageConfig,
) -> impl IntoView {
	let theme = Theme::named(config.theme);
	let section = RwSignal::new(Section::None);
	let cycler = config.section_cycler;
	// Without the ring the eye stays up permanently.
	let eye_visible = Signal::derive(move || !cycler || Block::Eye.is_revealed(section.get()));
	info!(
		"anetrexic: portfolio mounted (theme {}, cycler {}, rain {})",
		theme.name, cycler, config.glyph_rain
	);

	view! {
		<div
			class="page"
			style=theme_vars(&theme)
			data-section=move || section.get().name()
		>
			<div class="noise" />
			<Snowfall retention=config.snow_retention theme=theme.clone() />
			{config.glyph_rain.then(|| view! { <GlyphRain theme=theme.clone() /> })}
			{config.cursor_follower.then(|| view! { <CursorFollower theme=theme.clone() /> })}
			<Eye visible=eye_visible />
			<CornerStars />
			{cycler.then(|| view! { <SectionToggle section=section /> })}
			<main>
				<header>
					<GlitchText text="サイバーパンク" intensity=Intensity::High class="title" />
					<GlitchText text="anetrexic" intensity=Intensity::Medium class="name" />
					<GlitchText
						text="デジタルコア_アンダーグラウンド"
						intensity=Intensity::Low
						class="subtitle"
					/>
				</header>
				{cycler.then(|| view! { <ContentSection active=section /> })}
				<SocialLinks links=config.links />
			</main>
		</div>
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn theme_vars_expose_accent_colors() {
		assert_eq!(
			theme_vars(&Theme::rose()),
			"--accent: #f43f5e; --muted: #9ca3af; --hover: #a78bfa;"
		);
	}
}
