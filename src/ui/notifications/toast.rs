// SPDX-License-Identifier: MPL-2.0
//! Toast overlay.
//!
//! Each live toast container becomes one column pinned to its screen corner
//! or edge; all columns share a full-window stack layered over the page.

use super::config::ToastPosition;
use super::manager::{Manager, Message};
use super::view::card;
use crate::ui::design_tokens::spacing;
use crate::ui::ViewEnv;
use iced::widget::{Column, Container, Stack};
use iced::{alignment, Element, Length};

/// Renders every toast container. Empty when no toast is live.
pub fn overlay<'a, M>(manager: &'a Manager<M>, env: ViewEnv<'a>) -> Element<'a, Message> {
    let mut stack = Stack::new().width(Length::Fill).height(Length::Fill);

    for toast_container in manager.toast_containers() {
        let position = toast_container.position();
        let column = Column::with_children(manager.toasts(position).map(|toast| card(toast, env)))
            .spacing(spacing::XS)
            .align_x(horizontal(position));

        stack = stack.push(
            Container::new(column)
                .width(Length::Fill)
                .height(Length::Fill)
                .align_x(horizontal(position))
                .align_y(vertical(position))
                .padding(spacing::MD),
        );
    }

    stack.into()
}

fn horizontal(position: ToastPosition) -> alignment::Horizontal {
    match position {
        ToastPosition::TopLeft | ToastPosition::BottomLeft => alignment::Horizontal::Left,
        ToastPosition::TopCenter | ToastPosition::BottomCenter => alignment::Horizontal::Center,
        ToastPosition::TopRight | ToastPosition::BottomRight => alignment::Horizontal::Right,
    }
}

fn vertical(position: ToastPosition) -> alignment::Vertical {
    if position.is_top() {
        alignment::Vertical::Top
    } else {
        alignment::Vertical::Bottom
    }
}
