// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Lookup**: proxy endpoint and request timeout
//! - **Notifications**: toast lifetime

// ==========================================================================
// Lookup Defaults
// ==========================================================================

/// Proxy endpoint queried by the lookup form.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8000/api/query";

/// Default request timeout (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Minimum request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 60;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default toast lifetime (in milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = 5000;

/// Minimum toast lifetime (in milliseconds).
pub const MIN_TOAST_DURATION_MS: u64 = 1000;

/// Maximum toast lifetime (in milliseconds).
pub const MAX_TOAST_DURATION_MS: u64 = 60_000;

/// Lifetime of error toasts reporting upstream failures (in milliseconds).
pub const UPSTREAM_ERROR_TOAST_MS: u64 = 8000;

/// Lifetime of form validation feedback (in milliseconds).
pub const FORM_FEEDBACK_DURATION_MS: u64 = 5000;
