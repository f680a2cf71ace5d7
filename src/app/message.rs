// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::lookup::{LookupError, LookupResult};
use crate::ui::form;
use crate::ui::notifications::NotificationMessage;
use crate::ui::results::ResultsMessage;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Form(form::Message),
    Results(ResultsMessage),
    Notification(NotificationMessage),
    /// The lookup task finished.
    LookupFinished(Result<Option<LookupResult>, LookupError>),
    /// Ask for confirmation before clearing the results.
    RequestClear,
    ClearConfirmed,
    ClearCancelled,
    ToggleTheme,
    /// Periodic tick servicing deadlines and animations.
    Tick(Instant),
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional locale override (`--lang`).
    pub lang: Option<String>,
    /// Optional endpoint override (`--endpoint`).
    pub endpoint: Option<String>,
}
