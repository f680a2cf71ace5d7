// SPDX-License-Identifier: MPL-2.0
//! Modal dialog overlay.
//!
//! Only the top-most modal is drawn. The scrim swallows pointer input so the
//! page underneath cannot be clicked; clicking it does not close the dialog.

use super::manager::{Manager, Message, ModalChoice, ModalControl, ModalDialog};
use crate::ui::design_tokens::{shadow, sizing, spacing, typography};
use crate::ui::icons;
use crate::ui::styles;
use crate::ui::ViewEnv;
use iced::widget::{button, opaque, text, Column, Container, Row};
use iced::{alignment, Element, Length, Theme};

/// Renders the top-most modal, if any.
pub fn overlay<'a, M>(manager: &'a Manager<M>, env: ViewEnv<'a>) -> Option<Element<'a, Message>> {
    manager.top_modal().map(|modal| dialog(modal, env))
}

fn dialog<'a, M>(modal: &'a ModalDialog<M>, env: ViewEnv<'a>) -> Element<'a, Message> {
    let alpha = modal.opacity(env.now);
    let accent = modal.severity().color();

    let mut header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(icons::view(modal.icon(), env.icons, sizing::ICON_LG, accent));
    if let Some(title) = modal.title() {
        header = header.push(
            text(title.resolve(env.i18n))
                .size(typography::TITLE_MD)
                .font(typography::BOLD),
        );
    }

    let mut body = Column::new().spacing(spacing::MD).push(header);
    if let Some(message) = modal.message() {
        body = body.push(text(message.resolve(env.i18n)).size(typography::BODY));
    }

    let focus = modal.focus();
    let mut actions = Row::new().spacing(spacing::SM);
    if let Some(cancel) = modal.cancel_label() {
        let style = if focus == ModalControl::Cancel {
            boxed(styles::button::focused(styles::button::secondary))
        } else {
            boxed(styles::button::secondary)
        };
        actions = actions.push(
            button(text(cancel.resolve(env.i18n)).size(typography::BODY))
                .on_press(Message::ResolveModal(ModalChoice::Cancel))
                .padding([spacing::XS, spacing::MD])
                .style(style),
        );
    }
    let confirm_style = if focus == ModalControl::Confirm {
        boxed(styles::button::focused(styles::button::primary))
    } else {
        boxed(styles::button::primary)
    };
    actions = actions.push(
        button(text(modal.confirm_label().resolve(env.i18n)).size(typography::BODY))
            .on_press(Message::ResolveModal(ModalChoice::Confirm))
            .padding([spacing::XS, spacing::MD])
            .style(confirm_style),
    );

    body = body.push(
        Container::new(actions)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Right),
    );

    let card = Container::new(body)
        .width(Length::Fixed(sizing::MODAL_WIDTH))
        .padding(spacing::LG)
        .style(move |theme: &Theme| iced::widget::container::Style {
            shadow: shadow::LG,
            ..styles::container::notification(accent, false, alpha)(theme)
        });

    opaque(
        Container::new(card)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .style(styles::container::scrim(alpha)),
    )
}

type ButtonStyle = Box<dyn Fn(&Theme, button::Status) -> button::Style>;

fn boxed(style: impl Fn(&Theme, button::Status) -> button::Style + 'static) -> ButtonStyle {
    Box::new(style)
}
