// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The tick only runs while something changes over time, and modal keyboard
//! handling only exists while a modal is open.

use super::Message;
use crate::ui::design_tokens::motion;
use crate::ui::notifications::{ModalChoice, NotificationMessage};
use iced::keyboard::{self, key, Key};
use iced::{event, time, Event, Subscription};

/// Creates the periodic tick driving deadlines and animations.
pub fn create_tick_subscription(
    has_notifications: bool,
    results_animating: bool,
    copy_feedback_active: bool,
) -> Subscription<Message> {
    if has_notifications || results_animating || copy_feedback_active {
        time::every(motion::TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}

/// Routes Escape/Tab/Enter to the top-most modal while one is open.
pub fn create_modal_subscription(has_modal: bool) -> Subscription<Message> {
    if !has_modal {
        return Subscription::none();
    }
    event::listen_with(|event, _status, _window| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => modal_key(&key),
        _ => None,
    })
}

/// Global shortcuts (`Ctrl+T` toggles the theme).
pub fn create_shortcut_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        Event::Keyboard(keyboard::Event::KeyPressed { key, modifiers, .. }) => {
            shortcut(&key, modifiers)
        }
        _ => None,
    })
}

fn modal_key(key: &Key) -> Option<Message> {
    let message = match key {
        Key::Named(key::Named::Escape) => NotificationMessage::ResolveModal(ModalChoice::Cancel),
        Key::Named(key::Named::Tab) => NotificationMessage::FocusNextModalControl,
        Key::Named(key::Named::Enter) => NotificationMessage::ActivateModalControl,
        _ => return None,
    };
    Some(Message::Notification(message))
}

fn shortcut(key: &Key, modifiers: keyboard::Modifiers) -> Option<Message> {
    match key {
        Key::Character(c) if modifiers.command() && c.as_str().eq_ignore_ascii_case("t") => {
            Some(Message::ToggleTheme)
        }
        _ => None,
    }
}
