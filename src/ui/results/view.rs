// SPDX-License-Identifier: MPL-2.0
//! Rendering of the results panel: skeletons while loading, then the
//! revealed fragments as cards.

use super::fragment::{
    Field, Fragment, ServiceGroup, ServiceSection, Summary, VulnerabilityItem,
    VulnerabilitySection,
};
use super::panel::{ResultsPanel, Skeleton};
use crate::lookup::VulnSeverity;
use crate::ui::components::copy_button::{self, CopyFeedback};
use crate::ui::components::empty_state::EmptyState;
use crate::ui::components::skeleton;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::{self, Icon};
use crate::ui::styles;
use crate::ui::ViewEnv;
use iced::widget::{text, Column, Container, Row, Space};
use iced::{alignment, Color, Element, Length, Theme};

/// Messages emitted by the results panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Copy a value (address or reference URL) to the clipboard.
    Copy(String),
    /// Re-run the last lookup from the empty state.
    Retry,
}

/// Renders the panel content.
pub fn view<'a>(
    panel: &'a ResultsPanel,
    copy_feedback: Option<&'a CopyFeedback>,
    env: ViewEnv<'a>,
) -> Element<'a, Message> {
    let mut column = Column::new().spacing(spacing::MD).width(Length::Fill);

    if let Some(since) = panel.loading_since() {
        let level = if env.reduced_motion {
            1.0
        } else {
            skeleton::pulse_level(since, env.now)
        };
        for placeholder in panel.skeletons(env.now) {
            column = column.push(skeleton_card(*placeholder, level));
        }
        return column.into();
    }

    for placed in panel.revealed(env.now) {
        column = column.push(match &placed.fragment {
            Fragment::Summary(summary) => summary_card(summary, copy_feedback, env),
            Fragment::Vulnerabilities(section) => vulnerability_card(section, copy_feedback, env),
            Fragment::Services(section) => service_card(section, env),
            Fragment::EmptyState => EmptyState::new(Icon::Search)
                .title(env.i18n.tr("empty-state-title"))
                .message(env.i18n.tr("empty-state-message"))
                .action(env.i18n.tr("empty-state-retry"), Message::Retry)
                .view(env.icons),
        });
    }

    column.into()
}

/// Color used for a vulnerability severity.
#[must_use]
pub fn severity_color(level: VulnSeverity) -> Color {
    match level {
        VulnSeverity::Critical => palette::CRITICAL,
        VulnSeverity::High => palette::HIGH,
        VulnSeverity::Medium => palette::MEDIUM,
        VulnSeverity::Low => palette::LOW,
        VulnSeverity::Unknown => palette::UNKNOWN,
    }
}

fn skeleton_card<'a>(placeholder: Skeleton, level: f32) -> Element<'a, Message> {
    let widths: &[u16] = match placeholder {
        Skeleton::Summary => &[40, 70, 60, 50],
        Skeleton::Vulnerabilities => &[35, 90, 80],
        Skeleton::Services => &[30, 60, 75],
    };
    card(skeleton::block(widths, level))
}

fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
}

fn card_header<'a>(icon: Icon, title: String, env: ViewEnv<'a>) -> Element<'a, Message> {
    Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(icons::view(icon, env.icons, sizing::ICON_MD, palette::PRIMARY_500))
        .push(text(title).size(typography::TITLE_SM).font(typography::BOLD))
        .into()
}

fn muted<'a>(value: String) -> iced::widget::Text<'a> {
    text(value)
        .size(typography::CAPTION)
        .style(|theme: &Theme| iced::widget::text::Style {
            color: Some(theme.extended_palette().background.strong.text),
        })
}

fn field_value<'a>(field: &Field, env: ViewEnv<'a>) -> Element<'a, Message> {
    match field {
        Field::Known(value) => text(value.clone()).size(typography::BODY).into(),
        Field::NotAvailable => muted(env.i18n.tr("field-not-available")).into(),
    }
}

fn labelled<'a>(label: String, value: Element<'a, Message>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .push(muted(label))
        .push(value)
        .width(Length::Fill)
        .into()
}

fn summary_card<'a>(
    summary: &'a Summary,
    copy_feedback: Option<&'a CopyFeedback>,
    env: ViewEnv<'a>,
) -> Element<'a, Message> {
    let i18n = env.i18n;

    let address = Row::new()
        .spacing(spacing::XS)
        .align_y(alignment::Vertical::Center)
        .push(
            text(summary.address.as_str())
                .size(typography::BODY_LG)
                .font(typography::MONO),
        )
        .push(copy_button::view(
            &summary.address,
            copy_feedback,
            env.icons,
            env.now,
            Message::Copy(summary.address.clone()),
        ));

    let ports: Element<'a, Message> = if summary.open_ports.is_empty() {
        muted(i18n.tr("summary-no-open-ports")).into()
    } else {
        Row::with_children(summary.open_ports.iter().map(|port| {
            Container::new(text(port.to_string()).size(typography::BODY_SM).font(typography::MONO))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::container::code_block)
                .into()
        }))
        .spacing(spacing::XS)
        .wrap()
        .into()
    };

    let grid = Column::new()
        .spacing(spacing::MD)
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(labelled(i18n.tr("summary-address"), address.into()))
                .push(labelled(
                    i18n.tr("summary-organization"),
                    field_value(&summary.organization, env),
                )),
        )
        .push(
            Row::new()
                .spacing(spacing::LG)
                .push(labelled(
                    i18n.tr("summary-operating-system"),
                    field_value(&summary.operating_system, env),
                ))
                .push(labelled(
                    i18n.tr("summary-location"),
                    field_value(&summary.location, env),
                )),
        )
        .push(labelled(i18n.tr("summary-open-ports"), ports));

    let updated = summary.generated_at.format("%Y-%m-%d %H:%M:%S").to_string();

    card(
        Column::new()
            .spacing(spacing::MD)
            .push(card_header(Icon::Info, i18n.tr("summary-title"), env))
            .push(grid)
            .push(muted(i18n.tr_with_args("summary-last-updated", &[("time", updated.as_str())]))),
    )
}

fn badge<'a>(label: String, color: Color) -> Element<'a, Message> {
    Container::new(text(label).size(typography::CAPTION).font(typography::BOLD))
        .padding([spacing::XXS, spacing::XS])
        .style(styles::container::badge(color))
        .into()
}

fn vulnerability_card<'a>(
    section: &'a VulnerabilitySection,
    copy_feedback: Option<&'a CopyFeedback>,
    env: ViewEnv<'a>,
) -> Element<'a, Message> {
    let i18n = env.i18n;
    let total = section.items.len().to_string();

    let badges = Row::with_children(section.counts.badges().into_iter().map(|(level, count)| {
        let count = count.to_string();
        badge(
            i18n.tr_with_args(
                &format!("severity-{}-count", level.as_str()),
                &[("count", count.as_str())],
            ),
            severity_color(level),
        )
    }))
    .spacing(spacing::XS)
    .wrap();

    let items = Column::with_children(
        section
            .items
            .iter()
            .map(|item| vulnerability_item(item, copy_feedback, env)),
    )
    .spacing(spacing::SM);

    card(
        Column::new()
            .spacing(spacing::MD)
            .push(card_header(Icon::Shield, i18n.tr("vulnerabilities-title"), env))
            .push(text(i18n.tr_with_args("vulnerabilities-count", &[("count", total.as_str())])).size(typography::BODY))
            .push(badges)
            .push(items),
    )
}

fn vulnerability_item<'a>(
    item: &'a VulnerabilityItem,
    copy_feedback: Option<&'a CopyFeedback>,
    env: ViewEnv<'a>,
) -> Element<'a, Message> {
    let i18n = env.i18n;
    let color = severity_color(item.level);

    let id = item
        .id
        .as_known()
        .map_or_else(|| i18n.tr("vulnerability-unknown"), str::to_string);
    let label = item
        .severity_label
        .as_known()
        .map_or_else(|| i18n.tr("vulnerability-unknown"), str::to_string);
    let description = item
        .description
        .as_known()
        .map_or_else(|| i18n.tr("vulnerability-no-description"), str::to_string);

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(text(id).size(typography::BODY).font(typography::BOLD))
        .push(Space::new().width(Length::Fill))
        .push(badge(label, color));

    let mut column = Column::new()
        .spacing(spacing::XS)
        .push(header)
        .push(text(description).size(typography::BODY_SM));

    if let Some(url) = &item.reference_url {
        column = column.push(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(icons::view(
                    Icon::ExternalLink,
                    env.icons,
                    sizing::ICON_SM,
                    palette::PRIMARY_500,
                ))
                .push(
                    text(i18n.tr("vulnerability-more-info"))
                        .size(typography::BODY_SM)
                        .color(palette::PRIMARY_500),
                )
                .push(muted(url.clone()))
                .push(copy_button::view(
                    url,
                    copy_feedback,
                    env.icons,
                    env.now,
                    Message::Copy(url.clone()),
                )),
        );
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(styles::container::code_block)
        .into()
}

fn service_card<'a>(section: &'a ServiceSection, env: ViewEnv<'a>) -> Element<'a, Message> {
    let i18n = env.i18n;
    let total = section.total.to_string();

    let groups = Column::with_children(section.groups.iter().map(|group| service_group(group, env)))
        .spacing(spacing::MD);

    card(
        Column::new()
            .spacing(spacing::MD)
            .push(card_header(Icon::Server, i18n.tr("services-title"), env))
            .push(groups)
            .push(muted(i18n.tr_with_args("services-count", &[("count", total.as_str())]))),
    )
}

fn service_group<'a>(group: &'a ServiceGroup, env: ViewEnv<'a>) -> Element<'a, Message> {
    let items = group.items.iter().map(|item| {
        let mut details = Column::new()
            .spacing(spacing::XXS)
            .width(Length::Fill)
            .push(text(item.name.as_str()).size(typography::BODY).font(typography::BOLD));
        if let Some(banner) = &item.banner {
            details = details.push(
                Container::new(
                    text(banner.as_str())
                        .size(typography::CAPTION)
                        .font(typography::MONO),
                )
                .width(Length::Fill)
                .padding(spacing::XS)
                .style(styles::container::code_block),
            );
        }

        Row::new()
            .spacing(spacing::SM)
            .push(
                Container::new(
                    text(
                        item.port
                            .map_or_else(|| env.i18n.tr("field-not-available"), |p| p.to_string()),
                    )
                    .size(typography::BODY)
                    .font(typography::MONO),
                )
                    .width(Length::Fixed(64.0)),
            )
            .push(details)
            .into()
    });

    Column::new()
        .spacing(spacing::XS)
        .push(
            text(env.i18n.tr(group.category.i18n_key()))
                .size(typography::BODY_LG)
                .font(typography::BOLD),
        )
        .push(Column::with_children(items).spacing(spacing::SM))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_colors_are_distinct() {
        let colors: Vec<_> = VulnSeverity::ALL.iter().map(|l| severity_color(*l)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_severity_is_gray() {
        assert_eq!(severity_color(VulnSeverity::Unknown), palette::UNKNOWN);
    }
}
