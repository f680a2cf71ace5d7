// SPDX-License-Identifier: MPL-2.0
//! Lookup response data structures.
//!
//! The proxy relays the upstream JSON untouched, so every field is optional
//! and every collection tolerates `null`. Deserialization never fails because
//! a field is missing; rendering decides what "missing" looks like.

use serde::{Deserialize, Deserializer};
use std::collections::BTreeMap;

/// A parsed lookup response for a single address.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct LookupResult {
    #[serde(rename = "ip_str", default)]
    pub queried_address: Option<String>,
    #[serde(rename = "org", default)]
    pub organization: Option<String>,
    #[serde(rename = "os", default)]
    pub operating_system: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub country_name: Option<String>,
    #[serde(rename = "ports", default, deserialize_with = "ports_skipping_null")]
    pub open_ports: Vec<u16>,
    #[serde(rename = "vulns", default, deserialize_with = "deserialize_vulnerabilities")]
    pub vulnerabilities: Vec<Vulnerability>,
    #[serde(rename = "data", default, deserialize_with = "null_as_empty")]
    pub services: Vec<Service>,
}

/// A known vulnerability reported for the host.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Vulnerability {
    #[serde(default)]
    pub id: Option<String>,
    /// Raw severity label as sent by the service.
    #[serde(default)]
    pub severity: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "references", default, deserialize_with = "first_reference")]
    pub reference_url: Option<String>,
}

impl Vulnerability {
    /// Parsed severity used for ordering and badges.
    #[must_use]
    pub fn level(&self) -> VulnSeverity {
        self.severity
            .as_deref()
            .map(VulnSeverity::from_label)
            .unwrap_or_default()
    }
}

/// A service banner observed on an open port.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Service {
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(rename = "transport", default)]
    pub transport_protocol: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub banner: Option<String>,
}

/// Vulnerability severity, ordered by impact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub enum VulnSeverity {
    /// Missing or unrecognized label.
    #[default]
    Unknown,
    Low,
    Medium,
    High,
    Critical,
}

impl VulnSeverity {
    /// All severities, highest impact first.
    pub const ALL: [VulnSeverity; 5] = [
        VulnSeverity::Critical,
        VulnSeverity::High,
        VulnSeverity::Medium,
        VulnSeverity::Low,
        VulnSeverity::Unknown,
    ];

    /// Parses a severity label, ignoring case and surrounding whitespace.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_ascii_lowercase().as_str() {
            "critical" => VulnSeverity::Critical,
            "high" => VulnSeverity::High,
            "medium" => VulnSeverity::Medium,
            "low" => VulnSeverity::Low,
            _ => VulnSeverity::Unknown,
        }
    }

    /// Derives a severity from a CVSS base score.
    #[must_use]
    pub fn from_cvss(score: f64) -> Self {
        if score >= 9.0 {
            VulnSeverity::Critical
        } else if score >= 7.0 {
            VulnSeverity::High
        } else if score >= 4.0 {
            VulnSeverity::Medium
        } else if score > 0.0 {
            VulnSeverity::Low
        } else {
            VulnSeverity::Unknown
        }
    }

    /// Sort key: critical 4, high 3, medium 2, low 1, anything else 0.
    #[must_use]
    pub fn rank(self) -> u8 {
        match self {
            VulnSeverity::Critical => 4,
            VulnSeverity::High => 3,
            VulnSeverity::Medium => 2,
            VulnSeverity::Low => 1,
            VulnSeverity::Unknown => 0,
        }
    }

    /// Lower-case identifier, also used to build i18n keys.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            VulnSeverity::Critical => "critical",
            VulnSeverity::High => "high",
            VulnSeverity::Medium => "medium",
            VulnSeverity::Low => "low",
            VulnSeverity::Unknown => "unknown",
        }
    }
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

fn ports_skipping_null<'de, D>(deserializer: D) -> Result<Vec<u16>, D::Error>
where
    D: Deserializer<'de>,
{
    let ports = Option::<Vec<Option<u16>>>::deserialize(deserializer)?;
    Ok(ports.into_iter().flatten().flatten().collect())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_first(self) -> Option<String> {
        match self {
            OneOrMany::One(url) => Some(url),
            OneOrMany::Many(urls) => urls.into_iter().next(),
        }
        .filter(|url| !url.trim().is_empty())
    }
}

fn first_reference<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<OneOrMany>::deserialize(deserializer)?.and_then(OneOrMany::into_first))
}

/// Upstream per-CVE entry when vulnerabilities arrive keyed by id.
#[derive(Deserialize)]
struct CveEntry {
    #[serde(default)]
    cvss: Option<f64>,
    #[serde(default)]
    severity: Option<String>,
    #[serde(default)]
    summary: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default, deserialize_with = "first_reference")]
    references: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVulnerabilities {
    List(Vec<Vulnerability>),
    Keyed(BTreeMap<String, CveEntry>),
    Ids(Vec<String>),
}

fn deserialize_vulnerabilities<'de, D>(deserializer: D) -> Result<Vec<Vulnerability>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawVulnerabilities>::deserialize(deserializer)?;
    Ok(match raw {
        None => Vec::new(),
        Some(RawVulnerabilities::List(list)) => list,
        Some(RawVulnerabilities::Ids(ids)) => ids
            .into_iter()
            .map(|id| Vulnerability {
                id: Some(id),
                ..Vulnerability::default()
            })
            .collect(),
        Some(RawVulnerabilities::Keyed(map)) => map
            .into_iter()
            .map(|(id, entry)| {
                let severity = entry.severity.or_else(|| {
                    entry
                        .cvss
                        .map(VulnSeverity::from_cvss)
                        .filter(|level| *level != VulnSeverity::Unknown)
                        .map(|level| level.as_str().to_string())
                });
                Vulnerability {
                    id: Some(id),
                    severity,
                    description: entry.description.or(entry.summary),
                    reference_url: entry.references,
                }
            })
            .collect(),
    })
}
