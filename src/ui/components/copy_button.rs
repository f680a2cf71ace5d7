// SPDX-License-Identifier: MPL-2.0
//! Small button that copies a value and briefly shows the outcome.
//!
//! The copy itself happens in the application layer; this module holds the
//! feedback state and draws the button.

use crate::ui::design_tokens::{motion, palette, sizing, spacing};
use crate::ui::icons::{self, Icon, IconStyle};
use crate::ui::styles;
use iced::widget::button;
use iced::{Color, Element};
use std::time::Instant;

/// Result of a clipboard write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyOutcome {
    Copied,
    Failed,
}

/// Outcome shown next to one copied value until `shown_until`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyFeedback {
    value: String,
    outcome: CopyOutcome,
    shown_until: Instant,
}

impl CopyFeedback {
    #[must_use]
    pub fn new(value: impl Into<String>, outcome: CopyOutcome, now: Instant) -> Self {
        Self {
            value: value.into(),
            outcome,
            shown_until: now + motion::COPY_FEEDBACK,
        }
    }

    /// Outcome to show for `value`, if its feedback is still current.
    #[must_use]
    pub fn outcome_for(&self, value: &str, now: Instant) -> Option<CopyOutcome> {
        (self.value == value && self.is_active(now)).then_some(self.outcome)
    }

    #[must_use]
    pub fn is_active(&self, now: Instant) -> bool {
        now < self.shown_until
    }
}

/// Draws the button for `value`.
pub fn view<'a, Message: Clone + 'a>(
    value: &str,
    feedback: Option<&CopyFeedback>,
    icon_style: IconStyle,
    now: Instant,
    on_press: Message,
) -> Element<'a, Message> {
    let (icon, color): (Icon, Color) = match feedback.and_then(|f| f.outcome_for(value, now)) {
        Some(CopyOutcome::Copied) => (Icon::Check, palette::SUCCESS_500),
        Some(CopyOutcome::Failed) => (Icon::AlertCircle, palette::ERROR_500),
        None => (Icon::Copy, palette::GRAY_400),
    };

    button(icons::view(icon, icon_style, sizing::ICON_SM, color))
        .on_press(on_press)
        .padding(spacing::XXS)
        .style(styles::button::ghost)
        .into()
}
