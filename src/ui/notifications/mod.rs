// SPDX-License-Identifier: MPL-2.0
//! Notification system for user feedback.
//!
//! Five surfaces share one lifecycle (`Visible -> Dismissing -> Removed`):
//! inline or page-level alerts, toasts stacked per screen position, modal
//! confirmation dialogs, compact form feedback and "in progress" status
//! indicators.
//!
//! # Components
//!
//! - [`notification`] - `Notification` record, severity, labels and live regions
//! - [`config`] - Per-surface builders and placement types
//! - [`manager`] - `Manager` owning records, toast containers and the modal stack
//! - [`view`] - Card rendering for inline surfaces and toasts
//! - [`toast`] - Toast overlay
//! - [`modal`] - Modal overlay
//!
//! # Usage
//!
//! ```ignore
//! use crate::ui::notifications::{Label, Manager, Severity, ToastConfig};
//!
//! let mut manager = Manager::new();
//! manager.show_toast(
//!     ToastConfig::new(Severity::Success).message(Label::key("toast-theme-changed")),
//!     Instant::now(),
//! );
//!
//! // Periodically, while `manager.needs_tick(now)`:
//! let fired = manager.tick(Instant::now());
//! ```

mod config;
mod manager;
pub mod modal;
mod notification;
pub mod toast;
pub mod view;

pub use config::{
    AlertConfig, ContainerId, FormFeedbackConfig, ModalConfig, Placement, StatusIndicatorConfig,
    ToastConfig, ToastPosition, DEFAULT_TOAST_DURATION,
};
pub use manager::{
    Manager, Message as NotificationMessage, ModalChoice, ModalControl, ModalDialog,
    ToastContainer,
};
pub use notification::{
    Label, LiveRegion, ModalHandle, Notification, NotificationHandle, NotificationId,
    NotificationKind, NotificationState, Politeness, Role, Severity, EXIT_ANIMATION,
};
