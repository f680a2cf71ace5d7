// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A `Notification` is one live surface (alert, toast, form feedback or status
//! indicator). Its lifecycle is `Visible -> Dismissing -> Removed`; the
//! `Removed` state is never stored, a record simply disappears from the
//! manager once its exit window has elapsed.

use super::config::Placement;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::palette;
use crate::ui::icons::Icon;
use iced::Color;
use std::time::{Duration, Instant};

/// Time between a dismiss request and the node being detached.
pub const EXIT_ANIMATION: Duration = Duration::from_millis(300);

/// Entrance fade duration (cosmetic only).
pub const ENTRANCE_ANIMATION: Duration = Duration::from_millis(200);

/// Delay before the auto-expire progress bar starts shrinking.
pub const PROGRESS_START_DELAY: Duration = Duration::from_millis(10);

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID. IDs are never reused.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// What kind of surface a notification is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Alert,
    Toast,
    Modal,
    FormFeedback,
    StatusIndicator,
}

/// Lifecycle state of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum NotificationState {
    Visible,
    Dismissing,
    Removed,
}

/// Opaque reference to a live notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationHandle {
    pub(super) id: NotificationId,
    pub(super) kind: NotificationKind,
}

impl NotificationHandle {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }
}

/// Handle pair returned for a modal: the full-screen overlay and the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModalHandle {
    pub overlay: NotificationHandle,
    pub dialog: NotificationHandle,
}

/// Severity level determines color, icon and announcement politeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    #[default]
    Info,
    Warning,
    Error,
}

impl Severity {
    /// Returns the primary color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Success => palette::SUCCESS_500,
            Severity::Info => palette::INFO_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Icon shown when no override is configured.
    #[must_use]
    pub fn default_icon(&self) -> Icon {
        match self {
            Severity::Success => Icon::CheckCircle,
            Severity::Info => Icon::Info,
            Severity::Warning => Icon::AlertTriangle,
            Severity::Error => Icon::AlertCircle,
        }
    }

    /// Errors interrupt assistive technology; everything else waits.
    #[must_use]
    pub fn politeness(&self) -> Politeness {
        match self {
            Severity::Error => Politeness::Assertive,
            _ => Politeness::Polite,
        }
    }
}

/// Accessibility role of a surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Alert,
    Status,
    Dialog,
}

/// How urgently a live region is announced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Politeness {
    Polite,
    Assertive,
}

/// Accessibility contract of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LiveRegion {
    pub role: Role,
    pub politeness: Politeness,
}

/// Text shown in a notification: an i18n key with arguments, or literal text
/// (for example a message relayed from the lookup service).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Label {
    Key {
        key: String,
        args: Vec<(String, String)>,
    },
    Text(String),
}

impl Label {
    /// A translatable label resolved at render time.
    pub fn key(key: impl Into<String>) -> Self {
        Label::Key {
            key: key.into(),
            args: Vec::new(),
        }
    }

    /// Literal text shown as-is.
    pub fn text(text: impl Into<String>) -> Self {
        Label::Text(text.into())
    }

    /// Adds an interpolation argument. No-op for literal text.
    #[must_use]
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Label::Key { args, .. } = &mut self {
            args.push((name.into(), value.into()));
        }
        self
    }

    /// Resolves the label against the active locale.
    pub fn resolve(&self, i18n: &I18n) -> String {
        match self {
            Label::Text(text) => text.clone(),
            Label::Key { key, args } if args.is_empty() => i18n.tr(key),
            Label::Key { key, args } => {
                let args: Vec<(&str, &str)> =
                    args.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect();
                i18n.tr_with_args(key, &args)
            }
        }
    }
}

/// A live notification record.
#[derive(Debug, Clone)]
pub struct Notification<M> {
    pub(super) id: NotificationId,
    pub(super) kind: NotificationKind,
    pub(super) severity: Severity,
    pub(super) title: Option<Label>,
    pub(super) message: Option<Label>,
    pub(super) icon: Icon,
    pub(super) placement: Placement,
    pub(super) dismissible: bool,
    pub(super) auto_expire_after: Option<Duration>,
    pub(super) animate: bool,
    pub(super) on_dismiss: Option<M>,
    pub(super) created_at: Instant,
    pub(super) state: NotificationState,
    /// Pending auto-expire deadline; cleared by any dismissal.
    pub(super) expires_at: Option<Instant>,
    /// Detach deadline, set when dismissal starts.
    pub(super) remove_at: Option<Instant>,
}

impl<M> Notification<M> {
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn handle(&self) -> NotificationHandle {
        NotificationHandle {
            id: self.id,
            kind: self.kind,
        }
    }

    #[must_use]
    pub fn kind(&self) -> NotificationKind {
        self.kind
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn title(&self) -> Option<&Label> {
        self.title.as_ref()
    }

    #[must_use]
    pub fn message(&self) -> Option<&Label> {
        self.message.as_ref()
    }

    #[must_use]
    pub fn icon(&self) -> Icon {
        self.icon
    }

    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    #[must_use]
    pub fn auto_expire_after(&self) -> Option<Duration> {
        self.auto_expire_after
    }

    #[must_use]
    pub fn animates(&self) -> bool {
        self.animate
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    #[must_use]
    pub fn state(&self) -> NotificationState {
        self.state
    }

    /// Accessibility contract; status indicators are not announced.
    #[must_use]
    pub fn live_region(&self) -> Option<LiveRegion> {
        let role = match self.kind {
            NotificationKind::Alert => Role::Alert,
            NotificationKind::Toast | NotificationKind::FormFeedback => Role::Status,
            NotificationKind::Modal => Role::Dialog,
            NotificationKind::StatusIndicator => return None,
        };
        Some(LiveRegion {
            role,
            politeness: self.severity.politeness(),
        })
    }

    /// Remaining fraction of the auto-expire progress bar, from 1.0 to 0.0.
    ///
    /// The bar holds at full width for [`PROGRESS_START_DELAY`], then shrinks
    /// linearly over the whole auto-expire duration. Returns `None` when the
    /// notification does not auto-expire.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let total = self.auto_expire_after?;
        if total.is_zero() {
            return Some(0.0);
        }
        let started = self.created_at + PROGRESS_START_DELAY;
        let elapsed = now.saturating_duration_since(started);
        let remaining = 1.0 - elapsed.as_secs_f32() / total.as_secs_f32();
        Some(remaining.clamp(0.0, 1.0))
    }

    /// Visual opacity for entrance and exit fades.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        if !self.animate {
            return 1.0;
        }
        match (self.state, self.remove_at) {
            (NotificationState::Dismissing, Some(remove_at)) => {
                let left = remove_at.saturating_duration_since(now);
                (left.as_secs_f32() / EXIT_ANIMATION.as_secs_f32()).clamp(0.0, 1.0)
            }
            _ => {
                let age = now.saturating_duration_since(self.created_at);
                (age.as_secs_f32() / ENTRANCE_ANIMATION.as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::config::ContainerId;

    fn record(auto_expire_after: Option<Duration>, now: Instant) -> Notification<()> {
        Notification {
            id: NotificationId::new(),
            kind: NotificationKind::Toast,
            severity: Severity::Success,
            title: None,
            message: Some(Label::text("saved")),
            icon: Severity::Success.default_icon(),
            placement: Placement::Inline(ContainerId::named("test")),
            dismissible: true,
            auto_expire_after,
            animate: true,
            on_dismiss: None,
            created_at: now,
            state: NotificationState::Visible,
            expires_at: auto_expire_after.map(|d| now + d),
            remove_at: None,
        }
    }

    #[test]
    fn notification_ids_are_unique() {
        assert_ne!(NotificationId::new(), NotificationId::new());
    }

    #[test]
    fn severity_colors_are_distinct() {
        let colors = [
            Severity::Success.color(),
            Severity::Info.color(),
            Severity::Warning.color(),
            Severity::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn only_errors_are_assertive() {
        assert_eq!(Severity::Error.politeness(), Politeness::Assertive);
        assert_eq!(Severity::Warning.politeness(), Politeness::Polite);
        assert_eq!(Severity::Success.politeness(), Politeness::Polite);
        assert_eq!(Severity::Info.politeness(), Politeness::Polite);
    }

    #[test]
    fn lifecycle_states_are_ordered() {
        assert!(NotificationState::Visible < NotificationState::Dismissing);
        assert!(NotificationState::Dismissing < NotificationState::Removed);
    }

    #[test]
    fn progress_holds_then_shrinks() {
        let t0 = Instant::now();
        let n = record(Some(Duration::from_millis(1000)), t0);

        assert_eq!(n.progress(t0), Some(1.0));
        assert_eq!(n.progress(t0 + PROGRESS_START_DELAY), Some(1.0));
        let half = n.progress(t0 + PROGRESS_START_DELAY + Duration::from_millis(500)).unwrap();
        assert!((half - 0.5).abs() < 0.01);
        assert_eq!(n.progress(t0 + Duration::from_secs(5)), Some(0.0));
    }

    #[test]
    fn no_progress_without_auto_expire() {
        let t0 = Instant::now();
        assert_eq!(record(None, t0).progress(t0), None);
    }

    #[test]
    fn opacity_fades_in() {
        let t0 = Instant::now();
        let n = record(None, t0);
        assert_eq!(n.opacity(t0), 0.0);
        assert_eq!(n.opacity(t0 + ENTRANCE_ANIMATION), 1.0);

        let mut still = record(None, t0);
        still.animate = false;
        assert_eq!(still.opacity(t0), 1.0);
    }

    #[test]
    fn label_text_ignores_args() {
        let label = Label::text("plain").with_arg("ip", "1.2.3.4");
        assert_eq!(label, Label::Text("plain".into()));

        let keyed = Label::key("toast-found").with_arg("ip", "1.2.3.4");
        match keyed {
            Label::Key { key, args } => {
                assert_eq!(key, "toast-found");
                assert_eq!(args, vec![("ip".to_string(), "1.2.3.4".to_string())]);
            }
            Label::Text(_) => panic!("expected key label"),
        }
    }
}
