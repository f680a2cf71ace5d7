// SPDX-License-Identifier: MPL-2.0
//! IP lookup domain: response model, input validation and the proxy client.
//!
//! # Components
//!
//! - [`model`] - `LookupResult` and its vulnerability/service records
//! - [`validate`] - API key and IPv4 checks used by the lookup form
//! - [`client`] - async `reqwest` client for the proxy endpoint

pub mod client;
pub mod model;
pub mod validate;

pub use client::{LookupClient, LookupRequest};
pub use model::{LookupResult, Service, VulnSeverity, Vulnerability};

use std::fmt;

/// Why a lookup produced no result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The proxy answered with a non-success status.
    Upstream { status: u16, detail: Option<String> },
    /// The request never completed (connection refused, timeout, ...).
    Network(String),
    /// The response body was not a lookup result.
    Decode(String),
    /// The HTTP client could not be set up.
    Client(String),
}

impl LookupError {
    /// Returns the upstream-provided message, if any.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            LookupError::Upstream { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Returns whether the failure came from the service rather than from
    /// this client.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, LookupError::Upstream { .. })
    }

    /// Returns the i18n key of the generic message for this error type.
    #[must_use]
    pub fn i18n_key(&self) -> &'static str {
        match self {
            LookupError::Upstream { .. } => "error-lookup-upstream",
            LookupError::Network(_) => "error-lookup-network",
            LookupError::Decode(_) => "error-lookup-decode",
            LookupError::Client(_) => "error-lookup-client",
        }
    }
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::Upstream {
                status,
                detail: Some(detail),
            } => write!(f, "HTTP {}: {}", status, detail),
            LookupError::Upstream { status, detail: None } => write!(f, "HTTP {}", status),
            LookupError::Network(msg) => write!(f, "Network error: {}", msg),
            LookupError::Decode(msg) => write!(f, "Invalid response: {}", msg),
            LookupError::Client(msg) => write!(f, "Client error: {}", msg),
        }
    }
}

impl std::error::Error for LookupError {}
