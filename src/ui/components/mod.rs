// SPDX-License-Identifier: MPL-2.0
//! Reusable UI components shared across views.
//!
//! # Components
//!
//! - [`empty_state`] - Centered icon, title, message and action button
//! - [`copy_button`] - Clipboard button with transient copied/failed feedback
//! - [`skeleton`] - Pulsing placeholder bars shown while loading

pub mod copy_button;
pub mod empty_state;
pub mod skeleton;
