// SPDX-License-Identifier: MPL-2.0
//! Rendering of alerts, toasts, form feedback and status indicators.
//!
//! Every surface is a card with a severity accent: `[icon] [title/message]
//! [dismiss]`, plus a shrinking progress bar when it auto-expires.

use super::config::ContainerId;
use super::manager::{Manager, Message};
use super::notification::{Notification, NotificationKind, Politeness};
use crate::ui::components::skeleton::pulse_level;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::{self, Icon};
use crate::ui::styles;
use crate::ui::ViewEnv;
use iced::widget::{button, container, text, Column, Container, Row, Space};
use iced::{alignment, Color, Element, Length};

/// Resolution of the progress bar split.
const PROGRESS_STEPS: u16 = 1000;

/// Renders one notification card.
pub fn card<'a, M>(notification: &'a Notification<M>, env: ViewEnv<'a>) -> Element<'a, Message> {
    let severity = notification.severity();
    let alpha = notification.opacity(env.now);
    let accent = severity.color();
    let assertive = notification
        .live_region()
        .is_some_and(|region| region.politeness == Politeness::Assertive);
    let compact = matches!(
        notification.kind(),
        NotificationKind::FormFeedback | NotificationKind::StatusIndicator
    );

    let icon_size = if compact {
        sizing::ICON_SM
    } else {
        sizing::ICON_MD
    };
    let icon_color = if notification.kind() == NotificationKind::StatusIndicator {
        pulse(accent, notification, env)
    } else {
        accent
    };
    let icon = icons::view(
        notification.icon(),
        env.icons,
        icon_size,
        Color {
            a: alpha * icon_color.a,
            ..icon_color
        },
    );

    let mut body = Column::new().spacing(spacing::XXS);
    if let Some(title) = notification.title() {
        body = body.push(
            text(title.resolve(env.i18n))
                .size(typography::BODY_LG)
                .font(typography::BOLD),
        );
    }
    if let Some(message) = notification.message() {
        body = body.push(text(message.resolve(env.i18n)).size(if compact {
            typography::BODY_SM
        } else {
            typography::BODY
        }));
    }

    let mut row = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icon)
        .push(Container::new(body).width(Length::Fill));

    if notification.is_dismissible() {
        row = row.push(
            button(icons::view(
                Icon::Close,
                env.icons,
                sizing::ICON_SM,
                Color { a: alpha, ..palette::GRAY_400 },
            ))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(styles::button::ghost),
        );
    }

    let mut content = Column::new().spacing(spacing::XS).push(row);
    if let Some(progress) = notification.progress(env.now) {
        content = content.push(progress_bar(progress, accent));
    }

    let padding = if compact { spacing::XS } else { spacing::SM };
    let width = match notification.kind() {
        NotificationKind::Toast => Length::Fixed(sizing::TOAST_WIDTH),
        _ => Length::Fill,
    };

    Container::new(content)
        .width(width)
        .padding(padding)
        .style(styles::container::notification(accent, assertive, alpha))
        .into()
}

/// Inline notifications of `container`, newest first.
pub fn inline<'a, M>(
    manager: &'a Manager<M>,
    container: ContainerId,
    env: ViewEnv<'a>,
) -> Element<'a, Message> {
    Column::with_children(manager.inline(container).map(|n| card(n, env)))
        .spacing(spacing::XS)
        .width(Length::Fill)
        .into()
}

/// Page-level alerts, newest first.
pub fn page_alerts<'a, M>(manager: &'a Manager<M>, env: ViewEnv<'a>) -> Element<'a, Message> {
    Column::with_children(manager.page_alerts().map(|n| card(n, env)))
        .spacing(spacing::XS)
        .width(Length::Fill)
        .into()
}

/// Thin bar whose filled part shrinks with `progress`.
fn progress_bar<'a>(progress: f32, color: Color) -> Element<'a, Message> {
    let filled = (progress.clamp(0.0, 1.0) * f32::from(PROGRESS_STEPS)).round() as u16;
    let filled = filled.max(1);
    let rest = PROGRESS_STEPS.saturating_sub(filled).max(1);

    Row::new()
        .height(Length::Fixed(sizing::PROGRESS_HEIGHT))
        .push(
            container(Space::new())
                .width(Length::FillPortion(filled))
                .height(Length::Fill)
                .style(styles::container::progress_fill(color)),
        )
        .push(Space::new().width(Length::FillPortion(rest)))
        .into()
}

/// Breathing color for status indicators.
fn pulse<M>(color: Color, notification: &Notification<M>, env: ViewEnv<'_>) -> Color {
    if env.reduced_motion || !notification.animates() {
        return color;
    }
    Color {
        a: pulse_level(notification.created_at(), env.now),
        ..color
    }
}
