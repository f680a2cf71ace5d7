// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Each handler receives an [`UpdateContext`] borrowing the parts of `App`
//! it may touch and returns the follow-up task.

use super::config::FORM_FEEDBACK_DURATION_MS;
use super::Message;
use crate::i18n::fluent::I18n;
use crate::lookup::{LookupClient, LookupError, LookupRequest, LookupResult};
use crate::ui::components::copy_button::{CopyFeedback, CopyOutcome};
use crate::ui::form::{self, Event as FormEvent, Input, LookupForm};
use crate::ui::icons::Icon;
use crate::ui::notifications::{
    FormFeedbackConfig, Label, Manager, ModalConfig, NotificationHandle, NotificationMessage,
    Severity, StatusIndicatorConfig, ToastConfig, ToastPosition,
};
use crate::ui::results::{Renderer, ResultsMessage, ResultsPanel};
use crate::ui::theming::ThemeMode;
use iced::Task;
use std::time::{Duration, Instant};

/// Mutable view of the application state used by handlers.
pub struct UpdateContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: &'a mut ThemeMode,
    pub toast_position: ToastPosition,
    pub toast_duration: Duration,
    /// False under reduced motion.
    pub animate: bool,
    pub client: &'a Result<LookupClient, LookupError>,
    pub form: &'a mut LookupForm,
    pub results: &'a mut ResultsPanel,
    pub renderer: &'a Renderer,
    pub notifications: &'a mut Manager<Message>,
    pub last_request: &'a mut Option<LookupRequest>,
    pub status_indicator: &'a mut Option<NotificationHandle>,
    pub copy_feedback: &'a mut Option<CopyFeedback>,
    pub now: Instant,
}

pub fn handle_form_message(ctx: &mut UpdateContext<'_>, message: form::Message) -> Task<Message> {
    match ctx.form.update(message) {
        FormEvent::None => Task::none(),
        FormEvent::Invalid(input) => {
            show_invalid_input(ctx, input);
            Task::none()
        }
        FormEvent::Submit(request) => {
            ctx.notifications.detach_container(form::FORM_CONTAINER);
            start_lookup(ctx, request)
        }
    }
}

/// Replaces any previous form feedback with the message for `input`.
fn show_invalid_input(ctx: &mut UpdateContext<'_>, input: Input) {
    log::debug!("submit refused: invalid {:?}", input);
    ctx.notifications.detach_container(form::FORM_CONTAINER);
    ctx.notifications.show_form_feedback(
        FormFeedbackConfig::new(Severity::Error, form::FORM_CONTAINER)
            .message(Label::key(input.invalid_key()))
            .auto_expire_after(Duration::from_millis(FORM_FEEDBACK_DURATION_MS))
            .animate(ctx.animate),
        ctx.now,
    );
}

/// Enters the loading state and spawns the HTTP request.
fn start_lookup(ctx: &mut UpdateContext<'_>, request: LookupRequest) -> Task<Message> {
    *ctx.last_request = Some(request.clone());

    let client = match ctx.client {
        Ok(client) => client.clone(),
        Err(error) => {
            ctx.renderer
                .render_failure(error, ctx.results, ctx.notifications, ctx.now);
            return Task::none();
        }
    };

    log::info!("looking up {}", request.ip);
    ctx.form.set_loading(true);
    ctx.results.begin_loading(ctx.now);
    ctx.notifications.detach_container(ctx.results.container());

    if let Some(previous) = ctx.status_indicator.take() {
        ctx.notifications.dismiss(previous, ctx.now);
    }
    *ctx.status_indicator = ctx.notifications.show_status_indicator(
        StatusIndicatorConfig::new(form::STATUS_CONTAINER)
            .severity(Severity::Info)
            .message(Label::key("status-fetching"))
            .animate(ctx.animate),
        ctx.now,
    );

    Task::perform(
        async move { client.lookup(request).await },
        Message::LookupFinished,
    )
}

pub fn handle_lookup_finished(
    ctx: &mut UpdateContext<'_>,
    outcome: Result<Option<LookupResult>, LookupError>,
) -> Task<Message> {
    ctx.form.set_loading(false);
    if let Some(indicator) = ctx.status_indicator.take() {
        ctx.notifications.dismiss(indicator, ctx.now);
    }

    let query = ctx
        .last_request
        .as_ref()
        .map_or_else(|| ctx.form.address().to_string(), |r| r.ip.clone());

    let rendered = match &outcome {
        Ok(result) => ctx.renderer.render(
            result.as_ref(),
            &query,
            ctx.results,
            ctx.notifications,
            ctx.now,
        ),
        Err(error) => ctx
            .renderer
            .render_failure(error, ctx.results, ctx.notifications, ctx.now),
    };
    log::debug!("lookup for {} rendered as {:?}", query, rendered);

    Task::none()
}

pub fn handle_results_message(
    ctx: &mut UpdateContext<'_>,
    message: ResultsMessage,
) -> Task<Message> {
    match message {
        ResultsMessage::Copy(value) => {
            let outcome = match copy_to_clipboard(&value) {
                Ok(()) => CopyOutcome::Copied,
                Err(e) => {
                    log::warn!("clipboard write failed: {}", e);
                    CopyOutcome::Failed
                }
            };
            *ctx.copy_feedback = Some(CopyFeedback::new(value, outcome, ctx.now));
            Task::none()
        }
        ResultsMessage::Retry => match ctx.last_request.clone() {
            Some(request) if !ctx.form.is_loading() => start_lookup(ctx, request),
            _ => Task::none(),
        },
    }
}

fn copy_to_clipboard(value: &str) -> Result<(), arboard::Error> {
    let mut clipboard = arboard::Clipboard::new()?;
    clipboard.set_text(value.to_owned())
}

/// Forwards notification messages to the manager and re-dispatches the
/// callbacks that fired.
pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: NotificationMessage,
) -> Task<Message> {
    let fired = ctx.notifications.handle_message(&message, ctx.now);
    dispatch(fired)
}

pub fn handle_request_clear(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    if ctx.notifications.has_modal() {
        return Task::none();
    }
    ctx.notifications.show_modal(
        ModalConfig::new(Severity::Warning)
            .icon(Icon::AlertTriangle)
            .title(Label::key("modal-clear-title"))
            .message(Label::key("modal-clear-message"))
            .confirm_label(Label::key("modal-clear-confirm"))
            .cancel_label(Label::key("modal-cancel"))
            .animate(ctx.animate)
            .on_confirm(Message::ClearConfirmed)
            .on_cancel(Message::ClearCancelled),
        ctx.now,
    );
    Task::none()
}

pub fn handle_clear_confirmed(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.results.clear();
    ctx.notifications.detach_container(ctx.results.container());
    *ctx.copy_feedback = None;
    show_toast(ctx, Severity::Info, Label::key("toast-results-cleared"));
    Task::none()
}

pub fn handle_toggle_theme(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    *ctx.theme_mode = ctx.theme_mode.toggled();
    let theme = ctx.i18n.tr(ctx.theme_mode.label_key());
    show_toast(
        ctx,
        Severity::Info,
        Label::key("toast-theme-changed").with_arg("theme", theme),
    );
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, now: Instant) -> Task<Message> {
    if ctx
        .copy_feedback
        .as_ref()
        .is_some_and(|feedback| !feedback.is_active(now))
    {
        *ctx.copy_feedback = None;
    }
    dispatch(ctx.notifications.tick(now))
}

fn show_toast(ctx: &mut UpdateContext<'_>, severity: Severity, message: Label) {
    ctx.notifications.show_toast(
        ToastConfig::new(severity)
            .position(ctx.toast_position)
            .auto_expire_after(ctx.toast_duration)
            .animate(ctx.animate)
            .message(message),
        ctx.now,
    );
}

fn dispatch(messages: Vec<Message>) -> Task<Message> {
    if messages.is_empty() {
        Task::none()
    } else {
        Task::batch(messages.into_iter().map(Task::done))
    }
}
