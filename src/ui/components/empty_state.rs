// SPDX-License-Identifier: MPL-2.0
//! Centered "nothing to show" panel with an optional action.
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::components::empty_state::EmptyState;
//!
//! EmptyState::new(Icon::Search)
//!     .title(i18n.tr("empty-state-title"))
//!     .message(i18n.tr("empty-state-message"))
//!     .action(i18n.tr("empty-state-retry"), Message::Retry)
//!     .view(IconStyle::Svg)
//! ```

use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::{self, Icon, IconStyle};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container};
use iced::{alignment, Element, Length};

#[derive(Debug, Clone)]
pub struct EmptyState<Message> {
    icon: Icon,
    title: Option<String>,
    message: Option<String>,
    action: Option<(String, Message)>,
}

impl<Message: Clone + 'static> EmptyState<Message> {
    pub fn new(icon: Icon) -> Self {
        Self {
            icon,
            title: None,
            message: None,
            action: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Adds a button below the message.
    pub fn action(mut self, label: impl Into<String>, message: Message) -> Self {
        self.action = Some((label.into(), message));
        self
    }

    pub fn view(self, icon_style: IconStyle) -> Element<'static, Message> {
        let mut content = Column::new()
            .spacing(spacing::SM)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .push(icons::view(
                self.icon,
                icon_style,
                sizing::ICON_XL,
                palette::GRAY_400,
            ));

        if let Some(title) = self.title {
            content = content.push(text(title).size(typography::TITLE_MD).font(typography::BOLD));
        }

        if let Some(message) = self.message {
            content = content.push(
                text(message)
                    .size(typography::BODY)
                    .align_x(alignment::Horizontal::Center),
            );
        }

        if let Some((label, message)) = self.action {
            content = content.push(
                Container::new(
                    button(text(label).size(typography::BODY))
                        .on_press(message)
                        .padding([spacing::XS, spacing::MD])
                        .style(styles::button::primary),
                )
                .padding(spacing::XS),
            );
        }

        Container::new(content)
            .width(Length::Fill)
            .padding(spacing::XL)
            .style(styles::container::card)
            .into()
    }
}
