// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Manager` owns every live notification, the lazily created toast
//! containers and the modal stack. It never reads the clock itself: every
//! operation that depends on time takes `now`, and pending deadlines are
//! serviced by [`Manager::tick`].
//!
//! Callbacks are host messages (`M`). They are handed back to the caller
//! when the matching transition happens, never invoked in place.

use super::config::{
    AlertConfig, ContainerId, FormFeedbackConfig, ModalConfig, Placement, StatusIndicatorConfig,
    ToastConfig, ToastPosition,
};
use super::notification::{
    Label, ModalHandle, Notification, NotificationHandle, NotificationId, NotificationKind,
    NotificationState, Severity, ENTRANCE_ANIMATION, EXIT_ANIMATION,
};
use crate::ui::icons::Icon;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Dismiss a specific notification by ID.
    Dismiss(NotificationId),
    /// Close the top-most modal with the given choice.
    ResolveModal(ModalChoice),
    /// Move keyboard focus to the next control of the top-most modal.
    FocusNextModalControl,
    /// Activate the focused control of the top-most modal.
    ActivateModalControl,
}

/// How a modal was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalChoice {
    Confirm,
    Cancel,
}

/// Focusable controls of a modal dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModalControl {
    #[default]
    Confirm,
    Cancel,
}

/// Stack of toasts sharing a screen position.
#[derive(Debug, Clone)]
pub struct ToastContainer {
    position: ToastPosition,
    created_at: Instant,
    toasts: Vec<NotificationId>,
}

impl ToastContainer {
    #[must_use]
    pub fn position(&self) -> ToastPosition {
        self.position
    }

    #[must_use]
    pub fn created_at(&self) -> Instant {
        self.created_at
    }

    /// Toast ids in insertion order.
    #[must_use]
    pub fn toasts(&self) -> &[NotificationId] {
        &self.toasts
    }
}

/// An open modal dialog.
#[derive(Debug, Clone)]
pub struct ModalDialog<M> {
    overlay: NotificationId,
    dialog: NotificationId,
    severity: Severity,
    title: Option<Label>,
    message: Option<Label>,
    icon: Icon,
    confirm_label: Label,
    cancel_label: Option<Label>,
    animate: bool,
    on_confirm: Option<M>,
    on_cancel: Option<M>,
    on_dismiss: Option<M>,
    focus: ModalControl,
    created_at: Instant,
}

impl<M> ModalDialog<M> {
    #[must_use]
    pub fn handle(&self) -> ModalHandle {
        ModalHandle {
            overlay: NotificationHandle {
                id: self.overlay,
                kind: NotificationKind::Modal,
            },
            dialog: NotificationHandle {
                id: self.dialog,
                kind: NotificationKind::Modal,
            },
        }
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
    pub fn confirm_label(&self) -> &Label {
        &self.confirm_label
    }

    #[must_use]
    pub fn cancel_label(&self) -> Option<&Label> {
        self.cancel_label.as_ref()
    }

    #[must_use]
    pub fn focus(&self) -> ModalControl {
        self.focus
    }

    #[must_use]
    pub fn animates(&self) -> bool {
        self.animate
    }

    /// Entrance fade; modals close without an exit window.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        if !self.animate {
            return 1.0;
        }
        let age = now.saturating_duration_since(self.created_at);
        (age.as_secs_f32() / ENTRANCE_ANIMATION.as_secs_f32()).clamp(0.0, 1.0)
    }

    fn contains(&self, id: NotificationId) -> bool {
        self.overlay == id || self.dialog == id
    }
}

/// Owns every live notification surface.
#[derive(Debug)]
pub struct Manager<M> {
    /// Non-modal records in insertion order.
    records: Vec<Notification<M>>,
    toast_containers: BTreeMap<ToastPosition, ToastContainer>,
    /// Open modals, top-most last.
    modals: Vec<ModalDialog<M>>,
}

impl<M> Default for Manager<M> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            toast_containers: BTreeMap::new(),
            modals: Vec::new(),
        }
    }
}

impl<M> Manager<M> {
    /// Creates a new empty notification manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows an alert inside `config.container`, or at page level.
    pub fn show_alert(&mut self, config: AlertConfig<M>, now: Instant) -> NotificationHandle {
        let placement = config.container.map_or(Placement::Page, Placement::Inline);
        self.insert(Notification {
            id: NotificationId::new(),
            kind: NotificationKind::Alert,
            severity: config.severity,
            title: config.title,
            message: config.message,
            icon: config.icon.unwrap_or_else(|| config.severity.default_icon()),
            placement,
            dismissible: config.dismissible,
            auto_expire_after: config.auto_expire_after,
            animate: config.animate,
            on_dismiss: config.on_dismiss,
            created_at: now,
            state: NotificationState::Visible,
            expires_at: deadline(now, config.auto_expire_after),
            remove_at: None,
        })
    }

    /// Shows a toast, creating the container for its position on first use.
    pub fn show_toast(&mut self, config: ToastConfig<M>, now: Instant) -> NotificationHandle {
        let position = config.position;
        let handle = self.insert(Notification {
            id: NotificationId::new(),
            kind: NotificationKind::Toast,
            severity: config.severity,
            title: config.title,
            message: config.message,
            icon: config.icon.unwrap_or_else(|| config.severity.default_icon()),
            placement: Placement::Toast(position),
            dismissible: config.dismissible,
            auto_expire_after: config.auto_expire_after,
            animate: config.animate,
            on_dismiss: config.on_dismiss,
            created_at: now,
            state: NotificationState::Visible,
            expires_at: deadline(now, config.auto_expire_after),
            remove_at: None,
        });

        self.toast_containers
            .entry(position)
            .or_insert_with(|| {
                log::debug!("creating toast container at {:?}", position);
                ToastContainer {
                    position,
                    created_at: now,
                    toasts: Vec::new(),
                }
            })
            .toasts
            .push(handle.id);

        handle
    }

    /// Opens a modal dialog on top of any already open.
    pub fn show_modal(&mut self, config: ModalConfig<M>, now: Instant) -> ModalHandle {
        let modal = ModalDialog {
            overlay: NotificationId::new(),
            dialog: NotificationId::new(),
            severity: config.severity,
            title: config.title,
            message: config.message,
            icon: config.icon.unwrap_or_else(|| config.severity.default_icon()),
            confirm_label: config.confirm_label,
            cancel_label: config.cancel_label,
            animate: config.animate,
            on_confirm: config.on_confirm,
            on_cancel: config.on_cancel,
            on_dismiss: config.on_dismiss,
            focus: ModalControl::Confirm,
            created_at: now,
        };
        let handle = modal.handle();
        log::debug!("opening modal {:?} ({} open)", handle.dialog.id, self.modals.len());
        self.modals.push(modal);
        handle
    }

    /// Shows a compact message inside a form container.
    ///
    /// Returns `None` (and logs) when no container is configured.
    pub fn show_form_feedback(
        &mut self,
        config: FormFeedbackConfig<M>,
        now: Instant,
    ) -> Option<NotificationHandle> {
        let Some(container) = config.container else {
            log::error!("form feedback requires a container");
            return None;
        };
        Some(self.insert(Notification {
            id: NotificationId::new(),
            kind: NotificationKind::FormFeedback,
            severity: config.severity,
            title: None,
            message: config.message,
            icon: config.icon.unwrap_or_else(|| config.severity.default_icon()),
            placement: Placement::Inline(container),
            dismissible: false,
            auto_expire_after: config.auto_expire_after,
            animate: config.animate,
            on_dismiss: config.on_dismiss,
            created_at: now,
            state: NotificationState::Visible,
            expires_at: deadline(now, config.auto_expire_after),
            remove_at: None,
        }))
    }

    /// Shows an "in progress" indicator inside a container.
    ///
    /// Returns `None` (and logs) when no container is configured. The
    /// indicator stays until its owner dismisses it.
    pub fn show_status_indicator(
        &mut self,
        config: StatusIndicatorConfig,
        now: Instant,
    ) -> Option<NotificationHandle> {
        let Some(container) = config.container else {
            log::error!("status indicator requires a container");
            return None;
        };
        Some(self.insert(Notification {
            id: NotificationId::new(),
            kind: NotificationKind::StatusIndicator,
            severity: config.severity,
            title: None,
            message: config.message,
            icon: config.severity.default_icon(),
            placement: Placement::Inline(container),
            dismissible: false,
            auto_expire_after: None,
            animate: config.animate,
            on_dismiss: None,
            created_at: now,
            state: NotificationState::Visible,
            expires_at: None,
            remove_at: None,
        }))
    }

    /// Starts the exit window of a notification and cancels its auto-expire.
    ///
    /// Returns `true` if a transition started. Dismissing a notification that
    /// is already dismissing or gone is a no-op. Modal handles are closed
    /// through [`Manager::close_modal`] instead.
    pub fn dismiss(&mut self, handle: NotificationHandle, now: Instant) -> bool {
        if handle.kind == NotificationKind::Modal {
            log::debug!("ignoring dismiss for modal {:?}", handle.id);
            return false;
        }
        self.dismiss_id(handle.id, now)
    }

    fn dismiss_id(&mut self, id: NotificationId, now: Instant) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) if record.state == NotificationState::Visible => {
                begin_dismiss(record, now);
                true
            }
            _ => false,
        }
    }

    /// Services pending deadlines and returns the callbacks that fired.
    ///
    /// Auto-expired records start their exit window at their scheduled
    /// deadline, so one late tick can expire and remove a record.
    pub fn tick(&mut self, now: Instant) -> Vec<M> {
        for record in &mut self.records {
            if record.state != NotificationState::Visible {
                continue;
            }
            if let Some(expires_at) = record.expires_at.filter(|t| *t <= now) {
                begin_dismiss(record, expires_at);
            }
        }

        let (mut due, kept): (Vec<_>, Vec<_>) = std::mem::take(&mut self.records)
            .into_iter()
            .partition(|r| r.remove_at.is_some_and(|t| t <= now));
        self.records = kept;
        due.sort_by_key(|r| r.remove_at);

        let mut fired = Vec::new();
        for record in due {
            self.release_toast_slot(&record);
            if let Some(message) = record.on_dismiss {
                fired.push(message);
            }
        }
        fired
    }

    /// Forgets every record placed in `container` without firing callbacks.
    ///
    /// Used when the owner of the region replaces its content wholesale.
    pub fn detach_container(&mut self, container: ContainerId) -> usize {
        let before = self.records.len();
        self.records
            .retain(|r| r.placement != Placement::Inline(container));
        let removed = before - self.records.len();
        if removed > 0 {
            log::debug!("detached {} notification(s) from {}", removed, container.name());
        }
        removed
    }

    /// Closes the top-most modal. Returns the chosen action's message and
    /// then `on_dismiss`.
    pub fn resolve_modal(&mut self, choice: ModalChoice) -> Vec<M> {
        match self.modals.pop() {
            Some(modal) => finish_modal(modal, choice),
            None => Vec::new(),
        }
    }

    /// Closes a specific modal. Closing an already closed modal is a no-op.
    pub fn close_modal(&mut self, handle: ModalHandle, choice: ModalChoice) -> Vec<M> {
        match self.modals.iter().position(|m| m.contains(handle.dialog.id)) {
            Some(index) => finish_modal(self.modals.remove(index), choice),
            None => Vec::new(),
        }
    }

    /// Cycles focus between the confirm and cancel controls.
    pub fn focus_next_modal_control(&mut self) {
        if let Some(modal) = self.modals.last_mut() {
            modal.focus = match modal.focus {
                ModalControl::Confirm if modal.cancel_label.is_some() => ModalControl::Cancel,
                _ => ModalControl::Confirm,
            };
        }
    }

    /// Activates the focused control of the top-most modal.
    pub fn activate_modal_control(&mut self) -> Vec<M> {
        let choice = match self.modals.last().map(|m| m.focus) {
            Some(ModalControl::Cancel) => ModalChoice::Cancel,
            Some(ModalControl::Confirm) => ModalChoice::Confirm,
            None => return Vec::new(),
        };
        self.resolve_modal(choice)
    }

    /// Handles a notification message.
    pub fn handle_message(&mut self, message: &Message, now: Instant) -> Vec<M> {
        match message {
            Message::Dismiss(id) => {
                self.dismiss_id(*id, now);
                Vec::new()
            }
            Message::ResolveModal(choice) => self.resolve_modal(*choice),
            Message::FocusNextModalControl => {
                self.focus_next_modal_control();
                Vec::new()
            }
            Message::ActivateModalControl => self.activate_modal_control(),
        }
    }

    /// Lifecycle state for a handle; unknown handles report `Removed`.
    #[must_use]
    pub fn state(&self, handle: NotificationHandle) -> NotificationState {
        if handle.kind == NotificationKind::Modal {
            return if self.modals.iter().any(|m| m.contains(handle.id)) {
                NotificationState::Visible
            } else {
                NotificationState::Removed
            };
        }
        self.get(handle.id)
            .map_or(NotificationState::Removed, Notification::state)
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification<M>> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Notifications inside `container`, newest first.
    pub fn inline(&self, container: ContainerId) -> impl Iterator<Item = &Notification<M>> {
        self.records
            .iter()
            .rev()
            .filter(move |r| r.placement == Placement::Inline(container))
    }

    /// Page-level alerts, newest first.
    pub fn page_alerts(&self) -> impl Iterator<Item = &Notification<M>> {
        self.records
            .iter()
            .rev()
            .filter(|r| r.placement == Placement::Page)
    }

    /// Live toast containers ordered by position.
    pub fn toast_containers(&self) -> impl Iterator<Item = &ToastContainer> {
        self.toast_containers.values()
    }

    #[must_use]
    pub fn toast_container(&self, position: ToastPosition) -> Option<&ToastContainer> {
        self.toast_containers.get(&position)
    }

    /// Toasts at `position` in insertion order.
    pub fn toasts(&self, position: ToastPosition) -> impl Iterator<Item = &Notification<M>> {
        self.toast_containers
            .get(&position)
            .into_iter()
            .flat_map(|c| c.toasts.iter())
            .filter_map(move |id| self.get(*id))
    }

    /// Open modals, bottom-most first.
    #[must_use]
    pub fn modals(&self) -> &[ModalDialog<M>] {
        &self.modals
    }

    #[must_use]
    pub fn top_modal(&self) -> Option<&ModalDialog<M>> {
        self.modals.last()
    }

    #[must_use]
    pub fn has_modal(&self) -> bool {
        !self.modals.is_empty()
    }

    /// Returns whether anything still changes over time: pending deadlines,
    /// entrance fades or progress bars.
    #[must_use]
    pub fn needs_tick(&self, now: Instant) -> bool {
        let fading_in = |created_at: Instant, animate: bool| {
            animate && now.saturating_duration_since(created_at) < ENTRANCE_ANIMATION
        };
        self.records.iter().any(|r| {
            r.expires_at.is_some() || r.remove_at.is_some() || fading_in(r.created_at, r.animate)
        }) || self
            .modals
            .iter()
            .any(|m| fading_in(m.created_at, m.animate))
    }

    /// Number of non-modal notifications, dismissing ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty() && self.modals.is_empty()
    }

    fn insert(&mut self, record: Notification<M>) -> NotificationHandle {
        let handle = record.handle();
        log::debug!(
            "showing {:?} {:?} ({:?})",
            record.kind,
            record.severity,
            record.placement
        );
        self.records.push(record);
        handle
    }

    fn release_toast_slot(&mut self, record: &Notification<M>) {
        let Placement::Toast(position) = record.placement else {
            return;
        };
        let emptied = match self.toast_containers.get_mut(&position) {
            Some(container) => {
                container.toasts.retain(|id| *id != record.id);
                container.toasts.is_empty()
            }
            None => false,
        };
        if emptied {
            log::debug!("removing empty toast container at {:?}", position);
            self.toast_containers.remove(&position);
        }
    }
}

fn deadline(now: Instant, after: Option<Duration>) -> Option<Instant> {
    after.map(|duration| now + duration)
}

fn begin_dismiss<M>(record: &mut Notification<M>, at: Instant) {
    record.state = NotificationState::Dismissing;
    record.expires_at = None;
    record.remove_at = Some(at + EXIT_ANIMATION);
}

fn finish_modal<M>(modal: ModalDialog<M>, choice: ModalChoice) -> Vec<M> {
    let action = match choice {
        ModalChoice::Confirm => modal.on_confirm,
        ModalChoice::Cancel => modal.on_cancel,
    };
    action.into_iter().chain(modal.on_dismiss).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::notifications::notification::{Politeness, Role};

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        Dismissed(u8),
        Confirmed,
        Cancelled,
    }

    const RESULTS: ContainerId = ContainerId::named("results");
    const FORM: ContainerId = ContainerId::named("form");

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn new_manager_is_empty() {
        let manager = Manager::<Event>::new();
        assert!(manager.is_empty());
        assert_eq!(manager.len(), 0);
        assert!(!manager.has_modal());
        assert_eq!(manager.toast_containers().count(), 0);
    }

    #[test]
    fn alert_without_container_is_page_level() {
        let mut manager = Manager::<Event>::new();
        let t0 = Instant::now();
        let handle = manager.show_alert(AlertConfig::new(Severity::Warning), t0);

        assert_eq!(manager.page_alerts().count(), 1);
        let record = manager.get(handle.id()).unwrap();
        assert_eq!(record.placement(), Placement::Page);
        assert_eq!(record.icon(), Severity::Warning.default_icon());
        assert_eq!(manager.state(handle), NotificationState::Visible);
    }

    #[test]
    fn inline_alerts_are_newest_first() {
        let mut manager = Manager::<Event>::new();
        let t0 = Instant::now();
        let first = manager.show_alert(AlertConfig::new(Severity::Info).container(RESULTS), t0);
        let second = manager.show_alert(AlertConfig::new(Severity::Info).container(RESULTS), t0);
        manager.show_alert(AlertConfig::new(Severity::Info).container(FORM), t0);

        let ids: Vec<_> = manager.inline(RESULTS).map(Notification::id).collect();
        assert_eq!(ids, vec![second.id(), first.id()]);
    }

    #[test]
    fn error_alerts_are_assertive() {
        let mut manager = Manager::<Event>::new();
        let t0 = Instant::now();
        let error = manager.show_alert(AlertConfig::new(Severity::Error), t0);
        let info = manager.show_alert(AlertConfig::new(Severity::Info), t0);

        let region = manager.get(error.id()).unwrap().live_region().unwrap();
        assert_eq!(region.role, Role::Alert);
        assert_eq!(region.politeness, Politeness::Assertive);
        let region = manager.get(info.id()).unwrap().live_region().unwrap();
        assert_eq!(region.politeness, Politeness::Polite);
    }

    #[test]
    fn dismiss_is_idempotent() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let handle = manager.show_alert(
            AlertConfig::new(Severity::Info).on_dismiss(Event::Dismissed(1)),
            t0,
        );

        assert!(manager.dismiss(handle, t0));
        assert!(!manager.dismiss(handle, t0 + ms(50)));
        assert_eq!(manager.state(handle), NotificationState::Dismissing);

        assert!(manager.tick(t0 + ms(299)).is_empty());
        assert_eq!(manager.tick(t0 + ms(300)), vec![Event::Dismissed(1)]);
        assert_eq!(manager.state(handle), NotificationState::Removed);

        assert!(!manager.dismiss(handle, t0 + ms(400)));
        assert!(manager.tick(t0 + ms(1000)).is_empty());
        assert!(manager.is_empty());
    }

    #[test]
    fn manual_dismiss_cancels_auto_expire() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let handle = manager.show_toast(
            ToastConfig::new(Severity::Success).on_dismiss(Event::Dismissed(2)),
            t0,
        );

        assert!(manager.dismiss(handle, t0 + ms(1000)));
        assert_eq!(manager.tick(t0 + ms(1300)), vec![Event::Dismissed(2)]);
        assert!(manager.tick(t0 + ms(5000)).is_empty());
        assert!(manager.tick(t0 + ms(6000)).is_empty());
        assert_eq!(manager.state(handle), NotificationState::Removed);
    }

    #[test]
    fn auto_expire_runs_through_exit_window() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let handle = manager.show_toast(
            ToastConfig::new(Severity::Info).on_dismiss(Event::Dismissed(3)),
            t0,
        );

        assert!(manager.tick(t0 + ms(4999)).is_empty());
        assert_eq!(manager.state(handle), NotificationState::Visible);

        assert!(manager.tick(t0 + ms(5000)).is_empty());
        assert_eq!(manager.state(handle), NotificationState::Dismissing);
        assert!(!manager.dismiss(handle, t0 + ms(5100)));

        assert_eq!(manager.tick(t0 + ms(5300)), vec![Event::Dismissed(3)]);
        assert_eq!(manager.state(handle), NotificationState::Removed);
    }

    #[test]
    fn late_tick_expires_and_removes_at_once() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        manager.show_alert(
            AlertConfig::new(Severity::Info)
                .auto_expire_after(ms(1000))
                .on_dismiss(Event::Dismissed(4)),
            t0,
        );

        assert_eq!(manager.tick(t0 + ms(10_000)), vec![Event::Dismissed(4)]);
        assert!(manager.is_empty());
    }

    #[test]
    fn callbacks_fire_in_removal_order() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let first = manager.show_alert(
            AlertConfig::new(Severity::Info).on_dismiss(Event::Dismissed(1)),
            t0,
        );
        let second = manager.show_alert(
            AlertConfig::new(Severity::Info).on_dismiss(Event::Dismissed(2)),
            t0,
        );

        manager.dismiss(second, t0);
        manager.dismiss(first, t0 + ms(100));
        assert_eq!(
            manager.tick(t0 + ms(1000)),
            vec![Event::Dismissed(2), Event::Dismissed(1)]
        );
    }

    #[test]
    fn toast_container_is_reclaimed_and_recreated() {
        let mut manager = Manager::<Event>::new();
        let t0 = Instant::now();
        let a = manager.show_toast(ToastConfig::new(Severity::Info), t0);
        let b = manager.show_toast(ToastConfig::new(Severity::Info), t0);

        let container = manager.toast_container(ToastPosition::TopRight).unwrap();
        assert_eq!(container.toasts(), &[a.id(), b.id()]);

        manager.dismiss(a, t0);
        manager.tick(t0 + ms(300));
        assert!(manager.toast_container(ToastPosition::TopRight).is_some());

        manager.dismiss(b, t0 + ms(300));
        manager.tick(t0 + ms(600));
        assert!(manager.toast_container(ToastPosition::TopRight).is_none());

        let c = manager.show_toast(ToastConfig::new(Severity::Info), t0 + ms(700));
        let container = manager.toast_container(ToastPosition::TopRight).unwrap();
        assert_eq!(container.toasts(), &[c.id()]);
        assert_eq!(container.created_at(), t0 + ms(700));
    }

    #[test]
    fn positions_have_separate_containers() {
        let mut manager = Manager::<Event>::new();
        let t0 = Instant::now();
        manager.show_toast(ToastConfig::new(Severity::Info), t0);
        manager.show_toast(
            ToastConfig::new(Severity::Info).position(ToastPosition::BottomLeft),
            t0,
        );

        assert_eq!(manager.toast_containers().count(), 2);
        assert_eq!(manager.toasts(ToastPosition::BottomLeft).count(), 1);
        assert_eq!(manager.toasts(ToastPosition::TopRight).count(), 1);
        assert_eq!(manager.toasts(ToastPosition::TopCenter).count(), 0);
    }

    #[test]
    fn persistent_toast_never_expires() {
        let mut manager = Manager::<Event>::new();
        let t0 = Instant::now();
        let handle = manager.show_toast(ToastConfig::new(Severity::Error).persistent(), t0);

        manager.tick(t0 + Duration::from_secs(3600));
        assert_eq!(manager.state(handle), NotificationState::Visible);
        assert!(manager.get(handle.id()).unwrap().progress(t0).is_none());
    }

    #[test]
    fn form_feedback_requires_container() {
        let mut manager = Manager::<Event>::new();
        let t0 = Instant::now();
        let config = FormFeedbackConfig {
            container: None,
            ..FormFeedbackConfig::default()
        };
        assert!(manager.show_form_feedback(config, t0).is_none());
        assert!(manager
            .show_status_indicator(StatusIndicatorConfig::default(), t0)
            .is_none());
        assert!(manager.is_empty());
    }

    #[test]
    fn form_feedback_auto_expires() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let handle = manager
            .show_form_feedback(
                FormFeedbackConfig::new(Severity::Error, FORM)
                    .message(Label::text("invalid"))
                    .auto_expire_after(ms(5000))
                    .on_dismiss(Event::Dismissed(5)),
                t0,
            )
            .unwrap();

        assert_eq!(manager.inline(FORM).count(), 1);
        assert!(!manager.get(handle.id()).unwrap().is_dismissible());
        assert_eq!(manager.tick(t0 + ms(5300)), vec![Event::Dismissed(5)]);
        assert_eq!(manager.inline(FORM).count(), 0);
    }

    #[test]
    fn status_indicator_stays_until_dismissed() {
        let mut manager = Manager::<Event>::new();
        let t0 = Instant::now();
        let handle = manager
            .show_status_indicator(
                StatusIndicatorConfig::new(FORM).message(Label::key("status-fetching")),
                t0,
            )
            .unwrap();

        manager.tick(t0 + Duration::from_secs(60));
        let record = manager.get(handle.id()).unwrap();
        assert_eq!(record.state(), NotificationState::Visible);
        assert!(record.live_region().is_none());

        assert!(manager.dismiss(handle, t0 + Duration::from_secs(61)));
        manager.tick(t0 + Duration::from_secs(62));
        assert_eq!(manager.state(handle), NotificationState::Removed);
    }

    #[test]
    fn detach_container_skips_callbacks() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        manager.show_alert(
            AlertConfig::new(Severity::Error)
                .container(RESULTS)
                .on_dismiss(Event::Dismissed(6)),
            t0,
        );
        let dismissing = manager.show_alert(
            AlertConfig::new(Severity::Error)
                .container(RESULTS)
                .on_dismiss(Event::Dismissed(7)),
            t0,
        );
        manager.dismiss(dismissing, t0);
        let toast = manager.show_toast(ToastConfig::new(Severity::Info), t0);

        assert_eq!(manager.detach_container(RESULTS), 2);
        assert_eq!(manager.inline(RESULTS).count(), 0);
        assert!(manager.tick(t0 + ms(1000)).is_empty());
        assert_eq!(manager.state(toast), NotificationState::Visible);
    }

    #[test]
    fn modal_confirm_fires_action_then_dismiss() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let handle = manager.show_modal(
            ModalConfig::new(Severity::Warning)
                .cancel_label(Label::key("modal-cancel"))
                .on_confirm(Event::Confirmed)
                .on_cancel(Event::Cancelled)
                .on_dismiss(Event::Dismissed(8)),
            t0,
        );

        assert_eq!(manager.state(handle.overlay), NotificationState::Visible);
        assert_eq!(manager.state(handle.dialog), NotificationState::Visible);
        assert_eq!(
            manager.resolve_modal(ModalChoice::Confirm),
            vec![Event::Confirmed, Event::Dismissed(8)]
        );
        assert_eq!(manager.state(handle.dialog), NotificationState::Removed);
        assert!(manager.resolve_modal(ModalChoice::Cancel).is_empty());
        assert!(!manager.has_modal());
    }

    #[test]
    fn escape_resolves_as_cancel() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        manager.show_modal(
            ModalConfig::new(Severity::Info)
                .on_confirm(Event::Confirmed)
                .on_cancel(Event::Cancelled)
                .on_dismiss(Event::Dismissed(9)),
            t0,
        );

        let fired = manager.handle_message(&Message::ResolveModal(ModalChoice::Cancel), t0);
        assert_eq!(fired, vec![Event::Cancelled, Event::Dismissed(9)]);
    }

    #[test]
    fn modal_focus_starts_on_confirm_and_cycles() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        manager.show_modal(
            ModalConfig::new(Severity::Info)
                .cancel_label(Label::key("modal-cancel"))
                .on_confirm(Event::Confirmed)
                .on_cancel(Event::Cancelled),
            t0,
        );

        assert_eq!(manager.top_modal().unwrap().focus(), ModalControl::Confirm);
        manager.focus_next_modal_control();
        assert_eq!(manager.top_modal().unwrap().focus(), ModalControl::Cancel);
        assert_eq!(manager.activate_modal_control(), vec![Event::Cancelled]);
    }

    #[test]
    fn focus_stays_on_confirm_without_cancel_button() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        manager.show_modal(ModalConfig::new(Severity::Info).on_confirm(Event::Confirmed), t0);

        manager.focus_next_modal_control();
        assert_eq!(manager.top_modal().unwrap().focus(), ModalControl::Confirm);
        assert_eq!(
            manager.handle_message(&Message::ActivateModalControl, t0),
            vec![Event::Confirmed]
        );
    }

    #[test]
    fn modals_stack_and_resolve_top_first() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let bottom = manager.show_modal(
            ModalConfig::new(Severity::Info).on_confirm(Event::Dismissed(1)),
            t0,
        );
        manager.show_modal(
            ModalConfig::new(Severity::Info).on_confirm(Event::Dismissed(2)),
            t0,
        );

        assert_eq!(manager.modals().len(), 2);
        assert_eq!(manager.resolve_modal(ModalChoice::Confirm), vec![Event::Dismissed(2)]);
        assert_eq!(manager.top_modal().unwrap().handle(), bottom);
        assert_eq!(
            manager.close_modal(bottom, ModalChoice::Confirm),
            vec![Event::Dismissed(1)]
        );
        assert!(manager.close_modal(bottom, ModalChoice::Confirm).is_empty());
    }

    #[test]
    fn dismiss_ignores_modal_handles() {
        let mut manager = Manager::<Event>::new();
        let t0 = Instant::now();
        let handle = manager.show_modal(ModalConfig::default(), t0);
        assert!(!manager.dismiss(handle.dialog, t0));
        assert!(manager.has_modal());
    }

    #[test]
    fn handle_message_dismiss() {
        let mut manager = Manager::new();
        let t0 = Instant::now();
        let handle = manager.show_toast(
            ToastConfig::new(Severity::Info).on_dismiss(Event::Dismissed(10)),
            t0,
        );

        assert!(manager
            .handle_message(&Message::Dismiss(handle.id()), t0)
            .is_empty());
        assert_eq!(manager.tick(t0 + ms(300)), vec![Event::Dismissed(10)]);
    }

    #[test]
    fn needs_tick_while_anything_is_pending() {
        let mut manager = Manager::<Event>::new();
        let t0 = Instant::now();
        assert!(!manager.needs_tick(t0));

        let handle = manager.show_alert(AlertConfig::new(Severity::Info).animate(false), t0);
        assert!(!manager.needs_tick(t0));

        manager.dismiss(handle, t0);
        assert!(manager.needs_tick(t0));
        manager.tick(t0 + ms(300));
        assert!(!manager.needs_tick(t0 + ms(300)));

        manager.show_alert(AlertConfig::new(Severity::Info), t0 + ms(400));
        assert!(manager.needs_tick(t0 + ms(450)));
        assert!(!manager.needs_tick(t0 + Duration::from_secs(2)));
    }
}
