// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each
//! component renders from borrowed state and emits its own message type,
//! which the application maps into [`crate::app::Message`].
//!
//! # Components
//!
//! - [`notifications`] - Alerts, toasts, modals, form feedback, status indicators
//! - [`results`] - Lookup result fragments and their rendering
//! - [`form`] - Lookup form with live validation
//! - [`components`] - Small shared widgets (empty state, skeletons, copy button)
//!
//! # Shared Infrastructure
//!
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing, motion)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`theming`] - Light/Dark/System theme mode
//! - [`icons`] - SVG/glyph icon rendering

pub mod components;
pub mod design_tokens;
pub mod form;
pub mod icons;
pub mod notifications;
pub mod results;
pub mod styles;
pub mod theming;

use crate::i18n::fluent::I18n;
use icons::IconStyle;
use std::time::Instant;

/// Read-only inputs shared by every view function.
#[derive(Clone, Copy)]
pub struct ViewEnv<'a> {
    pub i18n: &'a I18n,
    pub icons: IconStyle,
    pub now: Instant,
    pub reduced_motion: bool,
}
