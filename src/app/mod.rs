// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the lookup form, the
//! results panel and the notification system.
//!
//! The `App` struct wires together localization, configuration and the HTTP
//! client, and translates messages into side effects like lookups, clipboard
//! writes or notifications.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::lookup::{LookupClient, LookupError, LookupRequest};
use crate::ui::components::copy_button::CopyFeedback;
use crate::ui::form::LookupForm;
use crate::ui::icons::IconStyle;
use crate::ui::notifications::{
    AlertConfig, Label, Manager, NotificationHandle, Severity, ToastPosition,
};
use crate::ui::results::{Renderer, ResultsPanel};
use crate::ui::theming::ThemeMode;
use crate::ui::ViewEnv;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme_mode: ThemeMode,
    icon_style: IconStyle,
    reduced_motion: bool,
    toast_position: ToastPosition,
    toast_duration: Duration,
    /// Client built from the configured endpoint; the error is reported on
    /// the first submit.
    client: Result<LookupClient, LookupError>,
    form: LookupForm,
    results: ResultsPanel,
    renderer: Renderer,
    notifications: Manager<Message>,
    /// Last request sent, re-run by the empty state's retry action.
    last_request: Option<LookupRequest>,
    /// "Fetching" indicator shown while a lookup is in flight.
    status_indicator: Option<NotificationHandle>,
    copy_feedback: Option<CopyFeedback>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("theme_mode", &self.theme_mode)
            .field("loading", &self.form.is_loading())
            .field("notifications", &self.notifications.len())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1024;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 650;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires a `Fn` boot closure; the flags are cheap to clone.
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(&config::Config::default(), I18n::default())
    }
}

impl App {
    fn from_config(config: &config::Config, i18n: I18n) -> Self {
        let general = &config.general;
        let notifications = &config.notifications;

        Self {
            i18n,
            theme_mode: general.theme_mode,
            icon_style: notifications.icon_style,
            reduced_motion: general.reduced_motion,
            toast_position: notifications.toast_position,
            toast_duration: notifications.toast_duration(),
            client: LookupClient::new(config.lookup.endpoint.clone(), config.lookup.timeout()),
            form: LookupForm::new(),
            results: ResultsPanel::new(),
            renderer: Renderer::new(notifications, general.reduced_motion),
            notifications: Manager::new(),
            last_request: None,
            status_indicator: None,
            copy_feedback: None,
        }
    }

    /// Initializes application state from the persisted config and CLI flags.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, config_warning) = config::load();
        if let Some(endpoint) = flags.endpoint {
            config.lookup.endpoint = endpoint;
        }
        let i18n = I18n::new(flags.lang, &config);

        let mut app = Self::from_config(&config, i18n);
        log::info!(
            "starting with endpoint {} ({} s timeout)",
            config.lookup.endpoint,
            config.lookup.timeout_secs
        );

        if let Some(key) = config_warning {
            app.notifications.show_alert(
                AlertConfig::new(Severity::Warning).message(Label::key(key)),
                Instant::now(),
            );
        }

        (app, Task::none())
    }

    fn title(&self) -> String {
        let app_name = self.i18n.tr("app-title");
        match &self.last_request {
            Some(request) => format!("{} - {app_name}", request.ip),
            None => app_name,
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        let now = Instant::now();
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.needs_tick(now),
            self.results.is_animating(now),
            self.copy_feedback
                .as_ref()
                .is_some_and(|feedback| feedback.is_active(now)),
        );
        let modal_sub = subscription::create_modal_subscription(self.notifications.has_modal());
        let shortcut_sub = subscription::create_shortcut_subscription();

        Subscription::batch([tick_sub, modal_sub, shortcut_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &self.i18n,
            theme_mode: &mut self.theme_mode,
            toast_position: self.toast_position,
            toast_duration: self.toast_duration,
            animate: !self.reduced_motion,
            client: &self.client,
            form: &mut self.form,
            results: &mut self.results,
            renderer: &self.renderer,
            notifications: &mut self.notifications,
            last_request: &mut self.last_request,
            status_indicator: &mut self.status_indicator,
            copy_feedback: &mut self.copy_feedback,
            now: Instant::now(),
        };

        match message {
            Message::Form(form_message) => update::handle_form_message(&mut ctx, form_message),
            Message::Results(results_message) => {
                update::handle_results_message(&mut ctx, results_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, notification_message)
            }
            Message::LookupFinished(outcome) => update::handle_lookup_finished(&mut ctx, outcome),
            Message::RequestClear => update::handle_request_clear(&mut ctx),
            Message::ClearConfirmed => update::handle_clear_confirmed(&mut ctx),
            Message::ClearCancelled => {
                log::debug!("clear cancelled");
                Task::none()
            }
            Message::ToggleTheme => update::handle_toggle_theme(&mut ctx),
            Message::Tick(now) => update::handle_tick(&mut ctx, now),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            env: ViewEnv {
                i18n: &self.i18n,
                icons: self.icon_style,
                now: Instant::now(),
                reduced_motion: self.reduced_motion,
            },
            theme_mode: self.theme_mode,
            form: &self.form,
            results: &self.results,
            notifications: &self.notifications,
            copy_feedback: self.copy_feedback.as_ref(),
        })
    }
}
