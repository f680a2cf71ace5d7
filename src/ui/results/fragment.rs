// SPDX-License-Identifier: MPL-2.0
//! Display-ready pieces of a lookup result.
//!
//! Fragments hold plain data derived from a [`LookupResult`](crate::lookup::LookupResult);
//! the view decides how placeholders are worded.

use crate::lookup::VulnSeverity;
use chrono::{DateTime, Local};

/// A single result section placed in the results panel.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Summary(Summary),
    Vulnerabilities(VulnerabilitySection),
    Services(ServiceSection),
    /// Nothing is known about the queried address.
    EmptyState,
}

impl Fragment {
    /// Short identifier used in logs.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Fragment::Summary(_) => "summary",
            Fragment::Vulnerabilities(_) => "vulnerabilities",
            Fragment::Services(_) => "services",
            Fragment::EmptyState => "empty-state",
        }
    }
}

/// An optional text value; blank strings count as missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Known(String),
    NotAvailable,
}

impl Field {
    #[must_use]
    pub fn from_option(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if !v.is_empty() => Field::Known(v.to_string()),
            _ => Field::NotAvailable,
        }
    }

    #[must_use]
    pub fn as_known(&self) -> Option<&str> {
        match self {
            Field::Known(v) => Some(v),
            Field::NotAvailable => None,
        }
    }

    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(self, Field::Known(_))
    }
}

/// Host overview.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub address: String,
    pub organization: Field,
    pub operating_system: Field,
    pub location: Field,
    /// Empty means "no open ports detected".
    pub open_ports: Vec<u16>,
    pub generated_at: DateTime<Local>,
}

/// Per-severity vulnerability counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeverityCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
    pub unknown: usize,
}

impl SeverityCounts {
    pub fn add(&mut self, level: VulnSeverity) {
        match level {
            VulnSeverity::Critical => self.critical += 1,
            VulnSeverity::High => self.high += 1,
            VulnSeverity::Medium => self.medium += 1,
            VulnSeverity::Low => self.low += 1,
            VulnSeverity::Unknown => self.unknown += 1,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low + self.unknown
    }

    /// Badges to show: named severities with a non-zero count, highest first.
    #[must_use]
    pub fn badges(&self) -> Vec<(VulnSeverity, usize)> {
        [
            (VulnSeverity::Critical, self.critical),
            (VulnSeverity::High, self.high),
            (VulnSeverity::Medium, self.medium),
            (VulnSeverity::Low, self.low),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect()
    }
}

/// One known vulnerability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VulnerabilityItem {
    pub id: Field,
    pub level: VulnSeverity,
    /// Severity as sent by the service, shown verbatim.
    pub severity_label: Field,
    pub description: Field,
    pub reference_url: Option<String>,
}

/// Vulnerabilities sorted by descending severity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VulnerabilitySection {
    pub counts: SeverityCounts,
    pub items: Vec<VulnerabilityItem>,
}

/// Service grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ServiceCategory {
    /// The service reported a product name.
    Identified,
    /// Only a port is known.
    OtherPorts,
}

impl ServiceCategory {
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ServiceCategory::Identified => "services-identified",
            ServiceCategory::OtherPorts => "services-other-ports",
        }
    }
}

/// One observed service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceItem {
    pub port: Option<u16>,
    /// `product version`, or `transport/port` when the product is unknown.
    pub name: String,
    /// Banner with angle brackets escaped.
    pub banner: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceGroup {
    pub category: ServiceCategory,
    pub items: Vec<ServiceItem>,
}

/// Services grouped by category in first-encounter order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceSection {
    pub groups: Vec<ServiceGroup>,
    pub total: usize,
}
