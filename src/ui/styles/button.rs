// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary action (lookup submit, modal confirm).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, shadow) = match status {
        button::Status::Hovered => (palette::PRIMARY_700, shadow::MD),
        button::Status::Disabled => (
            Color {
                a: opacity::OVERLAY_MEDIUM,
                ..palette::PRIMARY_500
            },
            shadow::NONE,
        ),
        button::Status::Active | button::Status::Pressed => (palette::PRIMARY_500, shadow::SM),
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette::WHITE,
        border: Border {
            color: palette::PRIMARY_700,
            width: 1.0,
            radius: radius::SM.into(),
        },
        shadow,
        ..button::Style::default()
    }
}

/// Secondary action (modal cancel, retry).
pub fn secondary(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background;
    let background = match status {
        button::Status::Hovered => base.strong.color,
        button::Status::Pressed => base.weak.color,
        button::Status::Active | button::Status::Disabled => base.weak.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: base.base.text,
        border: Border {
            color: base.strong.color,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..button::Style::default()
    }
}

/// Borderless icon button (dismiss, copy, theme toggle).
pub fn ghost(theme: &Theme, status: button::Status) -> button::Style {
    let text_color = theme.extended_palette().background.base.text;
    let background = match status {
        button::Status::Hovered => Some(Background::Color(Color {
            a: opacity::OVERLAY_SUBTLE,
            ..palette::GRAY_400
        })),
        button::Status::Pressed => Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::GRAY_400
        })),
        button::Status::Active | button::Status::Disabled => None,
    };

    button::Style {
        background,
        text_color,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..button::Style::default()
    }
}

/// Adds a focus ring around another style (keyboard focus in modals).
pub fn focused(
    inner: fn(&Theme, button::Status) -> button::Style,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let style = inner(theme, status);
        button::Style {
            border: Border {
                color: palette::INFO_500,
                width: 2.0,
                ..style.border
            },
            ..style
        }
    }
}
