// SPDX-License-Identifier: MPL-2.0
//! Lookup form: API key and IPv4 address inputs with live validation.
//!
//! Invalid input is only flagged once a field has been left (the user moved
//! on to the other field or pressed Enter) or the form was submitted.

use crate::lookup::validate::{is_valid_api_key, is_valid_ipv4, InputState};
use crate::lookup::LookupRequest;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::icons::{self, Icon};
use crate::ui::notifications::ContainerId;
use crate::ui::styles;
use crate::ui::ViewEnv;
use iced::widget::{button, text, text_input, Column, Container, Row};
use iced::{alignment, Element, Length, Theme};

/// Container hosting form feedback.
pub const FORM_CONTAINER: ContainerId = ContainerId::named("lookup-form");

/// Container hosting "in progress" indicators.
pub const STATUS_CONTAINER: ContainerId = ContainerId::named("status-bar");

/// Form inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    ApiKey,
    Address,
}

impl Input {
    /// Key of the message shown when this input is invalid on submit.
    #[must_use]
    pub fn invalid_key(self) -> &'static str {
        match self {
            Input::ApiKey => "form-invalid-api-key",
            Input::Address => "form-invalid-address",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    ApiKeyChanged(String),
    AddressChanged(String),
    /// Enter pressed inside an input.
    Entered(Input),
    Submit,
}

/// What the application should do after a form update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    /// Inputs are valid; run this lookup.
    Submit(LookupRequest),
    /// Submit was refused; the first invalid input.
    Invalid(Input),
}

#[derive(Debug, Clone, Default)]
pub struct LookupForm {
    api_key: String,
    address: String,
    api_key_touched: bool,
    address_touched: bool,
    loading: bool,
}

impl LookupForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::ApiKeyChanged(value) => {
                self.api_key = value;
                Event::None
            }
            Message::AddressChanged(value) => {
                self.address = value;
                // Moving on to the address counts as leaving the key field.
                if !self.api_key.is_empty() {
                    self.api_key_touched = true;
                }
                Event::None
            }
            Message::Entered(Input::ApiKey) => {
                self.api_key_touched = true;
                Event::None
            }
            Message::Entered(Input::Address) => self.submit(),
            Message::Submit => self.submit(),
        }
    }

    fn submit(&mut self) -> Event {
        if self.loading {
            log::debug!("ignoring submit while a lookup is in flight");
            return Event::None;
        }
        self.api_key_touched = true;
        self.address_touched = true;

        if !is_valid_api_key(&self.api_key) {
            return Event::Invalid(Input::ApiKey);
        }
        if !is_valid_ipv4(&self.address) {
            return Event::Invalid(Input::Address);
        }
        Event::Submit(LookupRequest {
            key: self.api_key.trim().to_string(),
            ip: self.address.trim().to_string(),
        })
    }

    pub fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    #[must_use]
    pub fn state(&self, input: Input) -> InputState {
        match input {
            Input::ApiKey => {
                InputState::evaluate(&self.api_key, is_valid_api_key(&self.api_key), self.api_key_touched)
            }
            Input::Address => {
                InputState::evaluate(&self.address, is_valid_ipv4(&self.address), self.address_touched)
            }
        }
    }

    pub fn view<'a>(&'a self, env: ViewEnv<'a>) -> Element<'a, Message> {
        let i18n = env.i18n;

        let api_key = labelled_input(
            i18n.tr("form-api-key-label"),
            text_input(&i18n.tr("form-api-key-placeholder"), &self.api_key)
                .secure(true)
                .on_input(Message::ApiKeyChanged)
                .on_submit(Message::Entered(Input::ApiKey)),
            self.state(Input::ApiKey),
            i18n.tr(Input::ApiKey.invalid_key()),
        );

        let address = labelled_input(
            i18n.tr("form-address-label"),
            text_input(&i18n.tr("form-address-placeholder"), &self.address)
                .on_input(Message::AddressChanged)
                .on_submit(Message::Entered(Input::Address)),
            self.state(Input::Address),
            i18n.tr(Input::Address.invalid_key()),
        );

        let label = if self.loading {
            i18n.tr("form-submitting")
        } else {
            i18n.tr("form-submit")
        };
        let submit = button(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center)
                .push(icons::view(Icon::Search, env.icons, sizing::ICON_SM, palette::WHITE))
                .push(text(label).size(typography::BODY)),
        )
        .on_press_maybe((!self.loading).then_some(Message::Submit))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);

        Container::new(
            Column::new()
                .spacing(spacing::MD)
                .push(text(i18n.tr("form-title")).size(typography::TITLE_SM).font(typography::BOLD))
                .push(api_key)
                .push(address)
                .push(submit),
        )
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::LG)
        .style(styles::container::card)
        .into()
    }
}

fn labelled_input<'a>(
    label: String,
    input: text_input::TextInput<'a, Message>,
    state: InputState,
    error: String,
) -> Element<'a, Message> {
    let input = input
        .size(typography::BODY_LG)
        .padding(spacing::XS)
        .width(Length::Fill)
        .style(move |theme: &Theme, status| {
            let style = text_input::default(theme, status);
            let color = match state {
                InputState::Valid => palette::SUCCESS_500,
                InputState::Invalid => palette::ERROR_500,
                InputState::Neutral => return style,
            };
            text_input::Style {
                border: iced::Border { color, ..style.border },
                ..style
            }
        });

    let mut column = Column::new()
        .spacing(spacing::XXS)
        .push(text(label).size(typography::BODY_SM))
        .push(input);
    if state == InputState::Invalid {
        column = column.push(text(error).size(typography::CAPTION).color(palette::ERROR_500));
    }
    column.into()
}
