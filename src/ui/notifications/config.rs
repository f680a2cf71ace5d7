// SPDX-License-Identifier: MPL-2.0
//! Per-surface configuration builders and placement types.
//!
//! Every config is generic over the host message type `M`; callbacks are
//! messages handed back to the caller when the matching transition happens.

use super::notification::{Label, Severity};
use crate::ui::icons::Icon;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default lifetime of a toast.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);

/// Named region of the window that can host inline notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContainerId(&'static str);

impl ContainerId {
    #[must_use]
    pub const fn named(name: &'static str) -> Self {
        Self(name)
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0
    }
}

/// Fixed screen corner or edge used for stacking toasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToastPosition {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
    TopCenter,
    BottomCenter,
}

impl ToastPosition {
    pub const ALL: [ToastPosition; 6] = [
        ToastPosition::TopRight,
        ToastPosition::TopLeft,
        ToastPosition::BottomRight,
        ToastPosition::BottomLeft,
        ToastPosition::TopCenter,
        ToastPosition::BottomCenter,
    ];

    #[must_use]
    pub fn is_top(&self) -> bool {
        matches!(
            self,
            ToastPosition::TopRight | ToastPosition::TopLeft | ToastPosition::TopCenter
        )
    }
}

/// Where a notification is attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placement {
    /// Prepended inside a named container.
    Inline(ContainerId),
    /// At the top of the page body (alert without a container).
    Page,
    /// Inside the toast container for a position.
    Toast(ToastPosition),
    /// Full-window overlay.
    Overlay,
}

/// Configuration for an inline or page-level alert.
#[derive(Debug, Clone)]
pub struct AlertConfig<M> {
    pub severity: Severity,
    pub title: Option<Label>,
    pub message: Option<Label>,
    pub icon: Option<Icon>,
    pub container: Option<ContainerId>,
    pub dismissible: bool,
    pub auto_expire_after: Option<Duration>,
    pub animate: bool,
    pub on_dismiss: Option<M>,
}

impl<M> Default for AlertConfig<M> {
    fn default() -> Self {
        Self {
            severity: Severity::Info,
            title: None,
            message: None,
            icon: None,
            container: None,
            dismissible: true,
            auto_expire_after: None,
            animate: true,
            on_dismiss: None,
        }
    }
}

impl<M> AlertConfig<M> {
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, title: Label) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn message(mut self, message: Label) -> Self {
        self.message = Some(message);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn container(mut self, container: ContainerId) -> Self {
        self.container = Some(container);
        self
    }

    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    #[must_use]
    pub fn auto_expire_after(mut self, duration: Duration) -> Self {
        self.auto_expire_after = Some(duration);
        self
    }

    #[must_use]
    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn on_dismiss(mut self, message: M) -> Self {
        self.on_dismiss = Some(message);
        self
    }
}

/// Configuration for a toast.
#[derive(Debug, Clone)]
pub struct ToastConfig<M> {
    pub position: ToastPosition,
    pub severity: Severity,
    pub title: Option<Label>,
    pub message: Option<Label>,
    pub icon: Option<Icon>,
    pub dismissible: bool,
    /// `None` keeps the toast until dismissed.
    pub auto_expire_after: Option<Duration>,
    pub animate: bool,
    pub on_dismiss: Option<M>,
}

impl<M> Default for ToastConfig<M> {
    fn default() -> Self {
        Self {
            position: ToastPosition::TopRight,
            severity: Severity::Info,
            title: None,
            message: None,
            icon: None,
            dismissible: true,
            auto_expire_after: Some(DEFAULT_TOAST_DURATION),
            animate: true,
            on_dismiss: None,
        }
    }
}

impl<M> ToastConfig<M> {
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = position;
        self
    }

    #[must_use]
    pub fn title(mut self, title: Label) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn message(mut self, message: Label) -> Self {
        self.message = Some(message);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    #[must_use]
    pub fn auto_expire_after(mut self, duration: Duration) -> Self {
        self.auto_expire_after = Some(duration);
        self
    }

    /// Keeps the toast until it is dismissed explicitly.
    #[must_use]
    pub fn persistent(mut self) -> Self {
        self.auto_expire_after = None;
        self
    }

    #[must_use]
    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn on_dismiss(mut self, message: M) -> Self {
        self.on_dismiss = Some(message);
        self
    }
}

/// Configuration for a confirmation dialog.
#[derive(Debug, Clone)]
pub struct ModalConfig<M> {
    pub severity: Severity,
    pub title: Option<Label>,
    pub message: Option<Label>,
    pub icon: Option<Icon>,
    pub confirm_label: Label,
    /// No cancel button is shown when absent.
    pub cancel_label: Option<Label>,
    pub animate: bool,
    pub on_confirm: Option<M>,
    pub on_cancel: Option<M>,
    pub on_dismiss: Option<M>,
}

impl<M> Default for ModalConfig<M> {
    fn default() -> Self {
        Self {
            severity: Severity::Info,
            title: None,
            message: None,
            icon: None,
            confirm_label: Label::key("modal-confirm"),
            cancel_label: None,
            animate: true,
            on_confirm: None,
            on_cancel: None,
            on_dismiss: None,
        }
    }
}

impl<M> ModalConfig<M> {
    #[must_use]
    pub fn new(severity: Severity) -> Self {
        Self {
            severity,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, title: Label) -> Self {
        self.title = Some(title);
        self
    }

    #[must_use]
    pub fn message(mut self, message: Label) -> Self {
        self.message = Some(message);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn confirm_label(mut self, label: Label) -> Self {
        self.confirm_label = label;
        self
    }

    #[must_use]
    pub fn cancel_label(mut self, label: Label) -> Self {
        self.cancel_label = Some(label);
        self
    }

    #[must_use]
    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn on_confirm(mut self, message: M) -> Self {
        self.on_confirm = Some(message);
        self
    }

    #[must_use]
    pub fn on_cancel(mut self, message: M) -> Self {
        self.on_cancel = Some(message);
        self
    }

    #[must_use]
    pub fn on_dismiss(mut self, message: M) -> Self {
        self.on_dismiss = Some(message);
        self
    }
}

/// Configuration for a compact message next to a form.
#[derive(Debug, Clone)]
pub struct FormFeedbackConfig<M> {
    pub severity: Severity,
    pub message: Option<Label>,
    pub icon: Option<Icon>,
    pub container: Option<ContainerId>,
    pub auto_expire_after: Option<Duration>,
    pub animate: bool,
    pub on_dismiss: Option<M>,
}

impl<M> Default for FormFeedbackConfig<M> {
    fn default() -> Self {
        Self {
            severity: Severity::Info,
            message: None,
            icon: None,
            container: None,
            auto_expire_after: None,
            animate: true,
            on_dismiss: None,
        }
    }
}

impl<M> FormFeedbackConfig<M> {
    #[must_use]
    pub fn new(severity: Severity, container: ContainerId) -> Self {
        Self {
            severity,
            container: Some(container),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn message(mut self, message: Label) -> Self {
        self.message = Some(message);
        self
    }

    #[must_use]
    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = Some(icon);
        self
    }

    #[must_use]
    pub fn auto_expire_after(mut self, duration: Duration) -> Self {
        self.auto_expire_after = Some(duration);
        self
    }

    #[must_use]
    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }

    #[must_use]
    pub fn on_dismiss(mut self, message: M) -> Self {
        self.on_dismiss = Some(message);
        self
    }
}

/// Configuration for an inline "operation in progress" indicator.
#[derive(Debug, Clone)]
pub struct StatusIndicatorConfig {
    pub severity: Severity,
    pub message: Option<Label>,
    pub container: Option<ContainerId>,
    pub animate: bool,
}

impl Default for StatusIndicatorConfig {
    fn default() -> Self {
        Self {
            severity: Severity::Info,
            message: None,
            container: None,
            animate: true,
        }
    }
}

impl StatusIndicatorConfig {
    #[must_use]
    pub fn new(container: ContainerId) -> Self {
        Self {
            container: Some(container),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    #[must_use]
    pub fn message(mut self, message: Label) -> Self {
        self.message = Some(message);
        self
    }

    #[must_use]
    pub fn animate(mut self, animate: bool) -> Self {
        self.animate = animate;
        self
    }
}
