// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page (header, page alerts, form and results) sits at the bottom of a
//! stack; toasts and the top-most modal are layered above it.

use super::Message;
use crate::ui::components::copy_button::CopyFeedback;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::form::{self, LookupForm};
use crate::ui::icons::{self, Icon};
use crate::ui::notifications::{self, Manager};
use crate::ui::results::{self, ResultsPanel};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use crate::ui::ViewEnv;
use iced::widget::{button, scrollable, text, Column, Container, Row, Space, Stack};
use iced::{alignment, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub env: ViewEnv<'a>,
    pub theme_mode: ThemeMode,
    pub form: &'a LookupForm,
    pub results: &'a ResultsPanel,
    pub notifications: &'a Manager<Message>,
    pub copy_feedback: Option<&'a CopyFeedback>,
}

/// Renders the application window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let env = ctx.env;

    let page = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(header(&ctx))
        .push(notifications::view::page_alerts(ctx.notifications, env).map(Message::Notification))
        .push(body(&ctx));

    let mut stack = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scrollable(page).width(Length::Fill).height(Length::Fill))
        .push(notifications::toast::overlay(ctx.notifications, env).map(Message::Notification));

    if let Some(modal) = notifications::modal::overlay(ctx.notifications, env) {
        stack = stack.push(modal.map(Message::Notification));
    }

    stack.into()
}

fn header<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let env = ctx.env;
    let i18n = env.i18n;

    let theme_icon = if ctx.theme_mode.is_dark() {
        Icon::Sun
    } else {
        Icon::Moon
    };

    let clear = button(text(i18n.tr("header-clear")).size(typography::BODY_SM))
        .on_press_maybe(
            (!ctx.results.fragments().is_empty() && !ctx.results.is_loading())
                .then_some(Message::RequestClear),
        )
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::secondary);

    let toggle = button(icons::view(
        theme_icon,
        env.icons,
        sizing::ICON_MD,
        palette::PRIMARY_500,
    ))
    .on_press(Message::ToggleTheme)
    .padding(spacing::XXS)
    .style(styles::button::ghost);

    Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::view(Icon::Globe, env.icons, sizing::ICON_LG, palette::PRIMARY_500))
        .push(
            text(i18n.tr("app-title"))
                .size(typography::TITLE_LG)
                .font(typography::BOLD),
        )
        .push(Space::new().width(Length::Fill))
        .push(clear)
        .push(toggle)
        .into()
}

fn body<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let env = ctx.env;

    let form_column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .push(ctx.form.view(env).map(Message::Form))
        .push(
            notifications::view::inline(ctx.notifications, form::FORM_CONTAINER, env)
                .map(Message::Notification),
        );

    let results_column = Column::new()
        .spacing(spacing::SM)
        .width(Length::Fill)
        .push(
            notifications::view::inline(ctx.notifications, form::STATUS_CONTAINER, env)
                .map(Message::Notification),
        )
        .push(
            notifications::view::inline(ctx.notifications, ctx.results.container(), env)
                .map(Message::Notification),
        )
        .push(results::view::view(ctx.results, ctx.copy_feedback, env).map(Message::Results));

    Container::new(
        Row::new()
            .spacing(spacing::LG)
            .align_y(alignment::Vertical::Top)
            .push(form_column)
            .push(results_column),
    )
    .width(Length::Fill)
    .into()
}
