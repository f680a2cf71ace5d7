// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the lookup proxy endpoint.
//!
//! The proxy accepts `POST {"key": ..., "ip": ...}` and relays the upstream
//! JSON. Failures come back as a JSON object carrying a human-readable
//! `detail` string.

use super::model::LookupResult;
use super::LookupError;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

const USER_AGENT: &str = concat!("IpInspector/", env!("CARGO_PKG_VERSION"));

/// Body sent to the proxy.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LookupRequest {
    pub key: String,
    pub ip: String,
}

impl fmt::Debug for LookupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LookupRequest")
            .field("key", &"<redacted>")
            .field("ip", &self.ip)
            .finish()
    }
}

/// Thin wrapper around a configured `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct LookupClient {
    http: reqwest::Client,
    endpoint: String,
}

impl LookupClient {
    /// Builds a client for `endpoint` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns `LookupError::Client` if the TLS backend cannot be initialized.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, LookupError> {
        let http = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::limited(10))
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| LookupError::Client(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Queries the proxy for `request.ip`.
    ///
    /// Returns `Ok(None)` when the service answers with an empty (`null`) body.
    pub async fn lookup(&self, request: LookupRequest) -> Result<Option<LookupResult>, LookupError> {
        let body = serde_json::to_vec(&request).map_err(|e| LookupError::Client(e.to_string()))?;

        log::debug!("looking up {} via {}", request.ip, self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        parse_response(status, &text)
    }
}

/// Maps a proxy response to a lookup outcome.
///
/// - 2xx: the body must be a lookup result object, or `null` for no record.
/// - anything else, 404 included: an upstream error carrying the body's
///   `detail`.
pub fn parse_response(status: u16, body: &str) -> Result<Option<LookupResult>, LookupError> {
    match status {
        200..=299 => serde_json::from_str::<Option<LookupResult>>(body)
            .map_err(|e| LookupError::Decode(e.to_string())),
        _ => Err(LookupError::Upstream {
            status,
            detail: extract_detail(body),
        }),
    }
}

/// Pulls a human-readable message out of an error body.
///
/// Looks for `detail`, then `error`; falls back to the raw text when the body
/// is not JSON. Blank values count as absent.
#[must_use]
pub fn extract_detail(body: &str) -> Option<String> {
    let detail = match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => ["detail", "error"]
            .iter()
            .find_map(|field| value.get(field))
            .and_then(|v| match v {
                serde_json::Value::String(s) => Some(s.clone()),
                serde_json::Value::Null => None,
                other => Some(other.to_string()),
            }),
        Err(_) => Some(body.to_string()),
    };

    detail
        .map(|d| d.trim().to_string())
        .filter(|d| !d.is_empty())
}
