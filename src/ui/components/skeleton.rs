// SPDX-License-Identifier: MPL-2.0
//! Placeholder bars shown while content is loading.

use crate::ui::design_tokens::{motion, sizing, spacing};
use crate::ui::styles;
use iced::widget::{container, Column, Space};
use iced::{Element, Length};
use std::time::Instant;

/// Triangle wave between 0.4 and 1.0 over one pulse period, starting low.
#[must_use]
pub fn pulse_level(since: Instant, now: Instant) -> f32 {
    let period = motion::PULSE_PERIOD.as_secs_f32();
    let phase = (now.saturating_duration_since(since).as_secs_f32() % period) / period;
    let wave = 1.0 - (2.0 * phase - 1.0).abs();
    0.4 + 0.6 * wave
}

/// A block of bars whose widths are given as portions of the full width.
///
/// `level` drives the pulse; pass `1.0` for a static block.
pub fn block<'a, Message: 'a>(widths: &[u16], level: f32) -> Element<'a, Message> {
    let bars = widths.iter().map(|portion| {
        let portion = (*portion).clamp(1, 100);
        iced::widget::Row::new()
            .push(
                container(Space::new())
                    .width(Length::FillPortion(portion))
                    .height(Length::Fixed(sizing::SKELETON_LINE))
                    .style(styles::container::skeleton(level)),
            )
            .push(Space::new().width(Length::FillPortion(100 - portion + 1)))
            .into()
    });

    Column::with_children(bars)
        .spacing(spacing::XS)
        .width(Length::Fill)
        .into()
}
