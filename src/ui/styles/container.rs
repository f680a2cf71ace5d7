// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface for result sections and the lookup form.
pub fn card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.base.color)),
        border: Border {
            color: palette.background.strong.color,
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Notification surface with a severity accent.
///
/// Assertive notifications get a heavier border. `alpha` applies entrance
/// and exit fades.
pub fn notification(
    accent: Color,
    assertive: bool,
    alpha: f32,
) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        let base = palette.background.base.color;
        let text = palette.background.base.text;

        container::Style {
            background: Some(Background::Color(Color { a: alpha, ..base })),
            border: Border {
                color: Color {
                    a: alpha,
                    ..accent
                },
                width: if assertive {
                    border::WIDTH_LG
                } else {
                    border::WIDTH_MD
                },
                radius: radius::MD.into(),
            },
            shadow: shadow::MD,
            text_color: Some(Color { a: alpha, ..text }),
            ..Default::default()
        }
    }
}

/// Solid pill used for severity badges and labels.
pub fn badge(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Full-window scrim behind modals.
pub fn scrim(alpha: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM * alpha,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// Skeleton placeholder bar; `level` in `0.0..=1.0` drives the pulse.
pub fn skeleton(level: f32) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let strong = theme.extended_palette().background.strong.color;
        container::Style {
            background: Some(Background::Color(Color {
                a: opacity::SKELETON + (1.0 - opacity::SKELETON) * level * 0.5,
                ..strong
            })),
            border: Border {
                radius: radius::SM.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Filled part of a progress bar.
pub fn progress_fill(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..Default::default()
    }
}

/// Preformatted block for service banners.
pub fn code_block(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        text_color: Some(palette.background.weak.text),
        ..Default::default()
    }
}
