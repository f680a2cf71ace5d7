// SPDX-License-Identifier: MPL-2.0
//! Icon rendering.
//!
//! Every icon exists twice: as an inline SVG (tinted at render time) and as
//! a Unicode glyph for platforms where the SVG renderer is unavailable or
//! unwanted. The choice is an [`IconStyle`] read once from the config at
//! startup and passed into view functions.

use iced::widget::{svg, text};
use iced::{Color, Element, Length, Theme};
use serde::{Deserialize, Serialize};

/// How icons are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconStyle {
    #[default]
    Svg,
    Glyph,
}

/// Icons used across the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    CheckCircle,
    AlertCircle,
    AlertTriangle,
    Info,
    Close,
    Search,
    Globe,
    Shield,
    Server,
    Copy,
    Check,
    ExternalLink,
    Sun,
    Moon,
}

impl Icon {
    /// Inline SVG source on a 24x24 grid.
    #[must_use]
    pub fn svg_source(self) -> &'static str {
        match self {
            Icon::CheckCircle => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<circle cx="12" cy="12" r="10"/><path d="M8 12l3 3 5-6"/></svg>"#
            ),
            Icon::AlertCircle => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 7v6"/><path d="M12 17h.01"/></svg>"#
            ),
            Icon::AlertTriangle => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<path d="M10.3 3.9L1.8 18a2 2 0 0 0 1.7 3h17a2 2 0 0 0 1.7-3L13.7 3.9a2 2 0 0 0-3.4 0z"/><path d="M12 9v4"/><path d="M12 17h.01"/></svg>"#
            ),
            Icon::Info => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<circle cx="12" cy="12" r="10"/><path d="M12 16v-5"/><path d="M12 8h.01"/></svg>"#
            ),
            Icon::Close => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<path d="M18 6L6 18"/><path d="M6 6l12 12"/></svg>"#
            ),
            Icon::Search => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<circle cx="11" cy="11" r="7"/><path d="M21 21l-4.3-4.3"/></svg>"#
            ),
            Icon::Globe => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<circle cx="12" cy="12" r="10"/><path d="M2 12h20"/><path d="M12 2a15 15 0 0 1 0 20a15 15 0 0 1 0-20z"/></svg>"#
            ),
            Icon::Shield => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10z"/></svg>"#
            ),
            Icon::Server => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<rect x="2" y="3" width="20" height="8" rx="2"/><rect x="2" y="13" width="20" height="8" rx="2"/><path d="M6 7h.01"/><path d="M6 17h.01"/></svg>"#
            ),
            Icon::Copy => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<rect x="9" y="9" width="13" height="13" rx="2"/><path d="M5 15H4a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2h9a2 2 0 0 1 2 2v1"/></svg>"#
            ),
            Icon::Check => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<path d="M20 6L9 17l-5-5"/></svg>"#
            ),
            Icon::ExternalLink => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<path d="M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"/><path d="M15 3h6v6"/><path d="M10 14L21 3"/></svg>"#
            ),
            Icon::Sun => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2M12 20v2M4.9 4.9l1.4 1.4M17.7 17.7l1.4 1.4M2 12h2M20 12h2M4.9 19.1l1.4-1.4M17.7 6.3l1.4-1.4"/></svg>"#
            ),
            Icon::Moon => concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="black" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">"#,
                r#"<path d="M21 12.8A9 9 0 1 1 11.2 3a7 7 0 0 0 9.8 9.8z"/></svg>"#
            ),
        }
    }

    /// Unicode fallback.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::CheckCircle => "\u{2714}",
            Icon::AlertCircle => "\u{2716}",
            Icon::AlertTriangle => "\u{26A0}",
            Icon::Info => "\u{2139}",
            Icon::Close => "\u{00D7}",
            Icon::Search => "\u{2315}",
            Icon::Globe => "\u{25CE}",
            Icon::Shield => "\u{25C8}",
            Icon::Server => "\u{25A4}",
            Icon::Copy => "\u{2398}",
            Icon::Check => "\u{2713}",
            Icon::ExternalLink => "\u{2197}",
            Icon::Sun => "\u{2600}",
            Icon::Moon => "\u{263E}",
        }
    }
}

/// Renders `icon` at `size` pixels, tinted with `color`.
pub fn view<'a, M: 'a>(icon: Icon, style: IconStyle, size: f32, color: Color) -> Element<'a, M> {
    match style {
        IconStyle::Svg => svg::Svg::new(svg::Handle::from_memory(icon.svg_source().as_bytes()))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .style(move |_theme: &Theme, _status: svg::Status| svg::Style { color: Some(color) })
            .into(),
        IconStyle::Glyph => text(icon.glyph())
            .size(size * 0.8)
            .width(Length::Fixed(size))
            .center()
            .color(color)
            .into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Icon; 14] = [
        Icon::CheckCircle,
        Icon::AlertCircle,
        Icon::AlertTriangle,
        Icon::Info,
        Icon::Close,
        Icon::Search,
        Icon::Globe,
        Icon::Shield,
        Icon::Server,
        Icon::Copy,
        Icon::Check,
        Icon::ExternalLink,
        Icon::Sun,
        Icon::Moon,
    ];

    #[test]
    fn svg_sources_are_well_formed() {
        for icon in ALL {
            let source = icon.svg_source();
            assert!(source.starts_with("<svg"), "{icon:?}");
            assert!(source.ends_with("</svg>"), "{icon:?}");
            assert!(source.contains("viewBox=\"0 0 24 24\""), "{icon:?}");
        }
    }

    #[test]
    fn glyphs_are_single_characters() {
        for icon in ALL {
            assert_eq!(icon.glyph().chars().count(), 1, "{icon:?}");
        }
    }

    #[test]
    fn icon_style_defaults_to_svg() {
        assert_eq!(IconStyle::default(), IconStyle::Svg);
    }
}
