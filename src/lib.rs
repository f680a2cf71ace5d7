// SPDX-License-Identifier: MPL-2.0
//! `ip_inspector` is a desktop client for an IP intelligence lookup proxy,
//! built with the Iced GUI framework.
//!
//! It validates an API key and an IPv4 address, queries the proxy, and
//! renders the host summary, known vulnerabilities and exposed services.
//! Feedback goes through a small notification system (alerts, toasts,
//! modals, form feedback and status indicators) localized with Fluent.

pub mod app;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod lookup;
pub mod ui;
