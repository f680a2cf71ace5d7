// SPDX-License-Identifier: MPL-2.0
//! Turns lookup outcomes into result fragments and notifications.

use super::escape::escape_angle_brackets;
use super::fragment::{
    Field, Fragment, ServiceCategory, ServiceGroup, ServiceItem, ServiceSection, SeverityCounts,
    Summary, VulnerabilityItem, VulnerabilitySection,
};
use super::panel::ResultsPanel;
use crate::app::config::{NotificationsConfig, UPSTREAM_ERROR_TOAST_MS};
use crate::lookup::{LookupError, LookupResult, Service, Vulnerability};
use crate::ui::design_tokens::motion;
use crate::ui::notifications::{
    AlertConfig, Label, Manager, NotificationHandle, Severity, ToastConfig, ToastPosition,
};
use std::time::{Duration, Instant};

/// What a render call produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    /// Result fragments were placed and a success toast shown.
    Rendered {
        fragments: usize,
        toast: NotificationHandle,
    },
    /// Nothing is known about the address; only the empty state was placed.
    Empty,
    /// The lookup failed; an inline alert and a toast report it.
    Failed {
        alert: NotificationHandle,
        toast: NotificationHandle,
    },
}

/// Renders lookup outcomes into a [`ResultsPanel`].
#[derive(Debug, Clone)]
pub struct Renderer {
    toast_position: ToastPosition,
    toast_duration: Duration,
    reveal_stagger: Duration,
    animate: bool,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            toast_position: ToastPosition::TopRight,
            toast_duration: crate::ui::notifications::DEFAULT_TOAST_DURATION,
            reveal_stagger: motion::REVEAL_STAGGER,
            animate: true,
        }
    }
}

impl Renderer {
    #[must_use]
    pub fn new(config: &NotificationsConfig, reduced_motion: bool) -> Self {
        Self {
            toast_position: config.toast_position,
            toast_duration: config.toast_duration(),
            reveal_stagger: if reduced_motion {
                Duration::ZERO
            } else {
                motion::REVEAL_STAGGER
            },
            animate: !reduced_motion,
        }
    }

    /// Replaces the panel content with `result`.
    ///
    /// `None` places a single empty-state fragment. `Some` places the
    /// summary, then vulnerabilities and services when present, each revealed
    /// one stagger step after the previous, and shows a success toast.
    pub fn render<M>(
        &self,
        result: Option<&LookupResult>,
        query: &str,
        target: &mut ResultsPanel,
        notifications: &mut Manager<M>,
        now: Instant,
    ) -> RenderOutcome {
        reset(target, notifications);

        let Some(result) = result else {
            target.push(Fragment::EmptyState, now);
            return RenderOutcome::Empty;
        };

        let summary = summarize(result, query);
        let address = summary.address.clone();

        let mut fragments = vec![Fragment::Summary(summary)];
        if let Some(section) = vulnerability_section(&result.vulnerabilities) {
            fragments.push(Fragment::Vulnerabilities(section));
        }
        if let Some(section) = service_section(&result.services) {
            fragments.push(Fragment::Services(section));
        }

        let count = fragments.len();
        for (index, fragment) in fragments.into_iter().enumerate() {
            target.push(fragment, now + self.reveal_stagger * index as u32);
        }

        let toast = notifications.show_toast(
            ToastConfig::new(Severity::Success)
                .position(self.toast_position)
                .auto_expire_after(self.toast_duration)
                .animate(self.animate)
                .title(Label::key("toast-lookup-success-title"))
                .message(Label::key("toast-lookup-success").with_arg("ip", address)),
            now,
        );

        RenderOutcome::Rendered {
            fragments: count,
            toast,
        }
    }

    /// Replaces the panel content with an error report.
    ///
    /// Upstream errors relay the service's `detail` when present and keep
    /// their toast up longer; other failures use generic wording.
    pub fn render_failure<M>(
        &self,
        failure: &LookupError,
        target: &mut ResultsPanel,
        notifications: &mut Manager<M>,
        now: Instant,
    ) -> RenderOutcome {
        log::warn!("lookup failed: {}", failure);
        reset(target, notifications);

        let detail = failure.detail().map(Label::text);
        let (alert_title, alert_message, toast_title, toast_message, toast_duration) =
            if failure.is_upstream() {
                (
                    "error-fetch-title",
                    detail.clone().unwrap_or_else(|| Label::key(failure.i18n_key())),
                    "toast-api-error-title",
                    detail.unwrap_or_else(|| Label::key("toast-api-error")),
                    Duration::from_millis(UPSTREAM_ERROR_TOAST_MS),
                )
            } else {
                (
                    "error-processing-title",
                    Label::key(failure.i18n_key()),
                    "toast-request-failed-title",
                    Label::key("toast-request-failed"),
                    self.toast_duration,
                )
            };

        let alert = notifications.show_alert(
            AlertConfig::new(Severity::Error)
                .container(target.container())
                .animate(self.animate)
                .title(Label::key(alert_title))
                .message(alert_message),
            now,
        );
        let toast = notifications.show_toast(
            ToastConfig::new(Severity::Error)
                .position(self.toast_position)
                .auto_expire_after(toast_duration)
                .animate(self.animate)
                .title(Label::key(toast_title))
                .message(toast_message),
            now,
        );

        RenderOutcome::Failed { alert, toast }
    }
}

/// Clears the panel together with the notifications living inside it.
fn reset<M>(target: &mut ResultsPanel, notifications: &mut Manager<M>) {
    target.clear();
    notifications.detach_container(target.container());
}

fn summarize(result: &LookupResult, query: &str) -> Summary {
    let address = match Field::from_option(result.queried_address.as_deref()) {
        Field::Known(address) => address,
        Field::NotAvailable => query.trim().to_string(),
    };

    Summary {
        address,
        organization: Field::from_option(result.organization.as_deref()),
        operating_system: Field::from_option(result.operating_system.as_deref()),
        location: location(result.city.as_deref(), result.country_name.as_deref()),
        open_ports: result.open_ports.clone(),
        generated_at: chrono::Local::now(),
    }
}

/// `city, country`, or whichever of the two is known on its own.
fn location(city: Option<&str>, country: Option<&str>) -> Field {
    match (Field::from_option(city), Field::from_option(country)) {
        (Field::Known(city), Field::Known(country)) => Field::Known(format!("{city}, {country}")),
        (Field::Known(one), Field::NotAvailable) | (Field::NotAvailable, Field::Known(one)) => {
            Field::Known(one)
        }
        (Field::NotAvailable, Field::NotAvailable) => Field::NotAvailable,
    }
}

fn vulnerability_section(vulnerabilities: &[Vulnerability]) -> Option<VulnerabilitySection> {
    if vulnerabilities.is_empty() {
        return None;
    }

    let mut sorted: Vec<&Vulnerability> = vulnerabilities.iter().collect();
    // Stable: equal ranks keep input order.
    sorted.sort_by_key(|v| std::cmp::Reverse(v.level().rank()));

    let mut counts = SeverityCounts::default();
    let items = sorted
        .into_iter()
        .map(|v| {
            let level = v.level();
            counts.add(level);
            VulnerabilityItem {
                id: Field::from_option(v.id.as_deref()),
                level,
                severity_label: Field::from_option(v.severity.as_deref()),
                description: Field::from_option(v.description.as_deref()),
                reference_url: v
                    .reference_url
                    .as_deref()
                    .map(str::trim)
                    .filter(|url| !url.is_empty())
                    .map(str::to_string),
            }
        })
        .collect();

    Some(VulnerabilitySection { counts, items })
}

fn service_section(services: &[Service]) -> Option<ServiceSection> {
    if services.is_empty() {
        return None;
    }

    let mut groups: Vec<ServiceGroup> = Vec::new();
    for service in services {
        let (category, item) = service_item(service);
        match groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.items.push(item),
            None => groups.push(ServiceGroup {
                category,
                items: vec![item],
            }),
        }
    }

    Some(ServiceSection {
        groups,
        total: services.len(),
    })
}

fn service_item(service: &Service) -> (ServiceCategory, ServiceItem) {
    let product = Field::from_option(service.product.as_deref());
    let (category, name) = match product {
        Field::Known(product) => {
            let version = service.version.as_deref().unwrap_or_default();
            (
                ServiceCategory::Identified,
                format!("{product} {version}").trim().to_string(),
            )
        }
        Field::NotAvailable => {
            let transport = Field::from_option(service.transport_protocol.as_deref());
            let transport = transport.as_known().unwrap_or("tcp");
            let name = match service.port {
                Some(port) => format!("{transport}/{port}"),
                None => transport.to_string(),
            };
            (ServiceCategory::OtherPorts, name)
        }
    };

    let banner = service
        .banner
        .as_deref()
        .filter(|b| !b.trim().is_empty())
        .map(escape_angle_brackets);

    (
        category,
        ServiceItem {
            port: service.port,
            name,
            banner,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::VulnSeverity;
    use crate::ui::notifications::{NotificationKind, NotificationState};

    fn vuln(id: &str, severity: Option<&str>) -> Vulnerability {
        Vulnerability {
            id: Some(id.to_string()),
            severity: severity.map(str::to_string),
            ..Vulnerability::default()
        }
    }

    fn service(port: u16, transport: Option<&str>, product: Option<&str>) -> Service {
        Service {
            port: Some(port),
            transport_protocol: transport.map(str::to_string),
            product: product.map(str::to_string),
            ..Service::default()
        }
    }

    fn render(result: Option<&LookupResult>) -> (ResultsPanel, Manager<()>, RenderOutcome) {
        let mut panel = ResultsPanel::new();
        let mut manager = Manager::new();
        let outcome =
            Renderer::default().render(result, "1.2.3.4", &mut panel, &mut manager, Instant::now());
        (panel, manager, outcome)
    }

    #[test]
    fn vulnerabilities_sort_by_severity_stably() {
        let input = vec![
            vuln("a", Some("low")),
            vuln("b", Some("critical")),
            vuln("c", Some("unknown")),
            vuln("d", Some("high")),
            vuln("e", Some("medium")),
            vuln("f", Some("Critical")),
        ];
        let section = vulnerability_section(&input).unwrap();

        let ids: Vec<_> = section
            .items
            .iter()
            .map(|i| i.id.as_known().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["b", "f", "d", "e", "a", "c"]);

        let levels: Vec<_> = section.items.iter().map(|i| i.level).collect();
        assert_eq!(
            levels,
            vec![
                VulnSeverity::Critical,
                VulnSeverity::Critical,
                VulnSeverity::High,
                VulnSeverity::Medium,
                VulnSeverity::Low,
                VulnSeverity::Unknown,
            ]
        );
    }

    #[test]
    fn missing_and_unrecognized_severities_rank_equal() {
        let input = vec![
            vuln("missing", None),
            vuln("odd", Some("moderate")),
            vuln("low", Some("LOW")),
        ];
        let section = vulnerability_section(&input).unwrap();
        let ids: Vec<_> = section
            .items
            .iter()
            .map(|i| i.id.as_known().unwrap().to_string())
            .collect();
        assert_eq!(ids, vec!["low", "missing", "odd"]);
        assert_eq!(section.counts.unknown, 2);
        assert_eq!(section.counts.badges(), vec![(VulnSeverity::Low, 1)]);
    }

    #[test]
    fn vulnerability_fallbacks() {
        let input = vec![Vulnerability {
            reference_url: Some("   ".into()),
            ..Vulnerability::default()
        }];
        let item = &vulnerability_section(&input).unwrap().items[0];
        assert_eq!(item.id, Field::NotAvailable);
        assert_eq!(item.description, Field::NotAvailable);
        assert_eq!(item.severity_label, Field::NotAvailable);
        assert!(item.reference_url.is_none());
    }

    #[test]
    fn services_group_in_first_encounter_order() {
        let input = vec![
            service(22, None, None),
            service(80, Some("tcp"), Some("nginx")),
            service(53, Some("udp"), None),
            service(443, None, Some("nginx")),
        ];
        let section = service_section(&input).unwrap();

        assert_eq!(section.total, 4);
        assert_eq!(section.groups.len(), 2);
        assert_eq!(section.groups[0].category, ServiceCategory::OtherPorts);
        assert_eq!(section.groups[1].category, ServiceCategory::Identified);

        let other: Vec<_> = section.groups[0].items.iter().map(|i| i.port).collect();
        assert_eq!(other, vec![Some(22), Some(53)]);
        let identified: Vec<_> = section.groups[1].items.iter().map(|i| i.port).collect();
        assert_eq!(identified, vec![Some(80), Some(443)]);
    }

    #[test]
    fn service_names() {
        let (_, item) = service_item(&service(22, None, None));
        assert_eq!(item.name, "tcp/22");

        let (_, item) = service_item(&service(53, Some("udp"), None));
        assert_eq!(item.name, "udp/53");

        let (_, item) = service_item(&service(80, None, Some("nginx")));
        assert_eq!(item.name, "nginx");

        let mut versioned = service(80, None, Some("nginx"));
        versioned.version = Some("1.25.3".into());
        let (category, item) = service_item(&versioned);
        assert_eq!(category, ServiceCategory::Identified);
        assert_eq!(item.name, "nginx 1.25.3");

        let (category, _) = service_item(&service(8080, None, Some("")));
        assert_eq!(category, ServiceCategory::OtherPorts);

        let mut portless = service(0, Some("udp"), None);
        portless.port = None;
        let (_, item) = service_item(&portless);
        assert_eq!(item.name, "udp");
        assert_eq!(item.port, None);
    }

    #[test]
    fn banners_are_escaped() {
        let mut svc = service(80, None, Some("httpd"));
        svc.banner = Some("<script>alert(1)</script>".into());
        let (_, item) = service_item(&svc);
        assert_eq!(
            item.banner.as_deref(),
            Some("&lt;script&gt;alert(1)&lt;/script&gt;")
        );
    }

    #[test]
    fn location_formatting() {
        assert_eq!(
            location(Some("Paris"), Some("France")),
            Field::Known("Paris, France".into())
        );
        assert_eq!(location(None, Some("France")), Field::Known("France".into()));
        assert_eq!(location(Some("Paris"), None), Field::Known("Paris".into()));
        assert_eq!(location(Some(""), None), Field::NotAvailable);
    }

    #[test]
    fn empty_result_renders_placeholder_summary_only() {
        let result = LookupResult::default();
        let (panel, manager, outcome) = render(Some(&result));

        assert!(matches!(outcome, RenderOutcome::Rendered { fragments: 1, .. }));
        assert_eq!(panel.fragments().len(), 1);
        match &panel.fragments()[0].fragment {
            Fragment::Summary(summary) => {
                assert_eq!(summary.address, "1.2.3.4");
                assert_eq!(summary.organization, Field::NotAvailable);
                assert_eq!(summary.operating_system, Field::NotAvailable);
                assert_eq!(summary.location, Field::NotAvailable);
                assert!(summary.open_ports.is_empty());
            }
            other => panic!("expected summary, got {other:?}"),
        }
        assert_eq!(manager.toasts(ToastPosition::TopRight).count(), 1);
    }

    #[test]
    fn missing_result_renders_empty_state_only() {
        let (panel, manager, outcome) = render(None);

        assert_eq!(outcome, RenderOutcome::Empty);
        assert_eq!(panel.fragments().len(), 1);
        assert_eq!(panel.fragments()[0].fragment, Fragment::EmptyState);
        assert!(manager.is_empty());
    }

    #[test]
    fn full_result_reveals_fragments_in_order() {
        let result = LookupResult {
            queried_address: Some("8.8.8.8".into()),
            vulnerabilities: vec![vuln("CVE-1", Some("high"))],
            services: vec![service(53, Some("udp"), None)],
            ..LookupResult::default()
        };
        let mut panel = ResultsPanel::new();
        let mut manager = Manager::<()>::new();
        let t0 = Instant::now();
        let outcome = Renderer::default().render(Some(&result), "8.8.8.8", &mut panel, &mut manager, t0);

        assert!(matches!(outcome, RenderOutcome::Rendered { fragments: 3, .. }));
        let kinds: Vec<_> = panel.fragments().iter().map(|f| f.fragment.kind()).collect();
        assert_eq!(kinds, vec!["summary", "vulnerabilities", "services"]);
        let delays: Vec<_> = panel.fragments().iter().map(|f| f.reveal_at - t0).collect();
        assert_eq!(
            delays,
            vec![
                Duration::ZERO,
                Duration::from_millis(100),
                Duration::from_millis(200)
            ]
        );
    }

    #[test]
    fn reduced_motion_reveals_everything_at_once() {
        let result = LookupResult {
            vulnerabilities: vec![vuln("CVE-1", None)],
            ..LookupResult::default()
        };
        let renderer = Renderer::new(&NotificationsConfig::default(), true);
        let mut panel = ResultsPanel::new();
        let mut manager = Manager::<()>::new();
        let t0 = Instant::now();
        renderer.render(Some(&result), "1.1.1.1", &mut panel, &mut manager, t0);

        assert_eq!(panel.revealed(t0).count(), 2);
    }

    #[test]
    fn reduced_motion_notifications_do_not_animate() {
        let renderer = Renderer::new(&NotificationsConfig::default(), true);
        let mut panel = ResultsPanel::new();
        let mut manager = Manager::<()>::new();
        let t0 = Instant::now();

        let RenderOutcome::Rendered { toast, .. } =
            renderer.render(Some(&LookupResult::default()), "1.1.1.1", &mut panel, &mut manager, t0)
        else {
            panic!("expected rendered outcome");
        };
        assert!(!manager.get(toast.id()).unwrap().animates());

        let failure = LookupError::Network("connection refused".into());
        let RenderOutcome::Failed { alert, toast } =
            renderer.render_failure(&failure, &mut panel, &mut manager, t0)
        else {
            panic!("expected failure outcome");
        };
        assert!(!manager.get(alert.id()).unwrap().animates());
        assert!(!manager.get(toast.id()).unwrap().animates());
    }

    #[test]
    fn success_toast_names_address() {
        let result = LookupResult {
            queried_address: Some("9.9.9.9".into()),
            ..LookupResult::default()
        };
        let (_, manager, outcome) = render(Some(&result));
        let RenderOutcome::Rendered { toast, .. } = outcome else {
            panic!("expected rendered outcome");
        };

        let record = manager.get(toast.id()).unwrap();
        assert_eq!(record.severity(), Severity::Success);
        assert_eq!(
            record.message(),
            Some(&Label::key("toast-lookup-success").with_arg("ip", "9.9.9.9"))
        );
        assert_eq!(record.auto_expire_after(), Some(Duration::from_millis(5000)));
    }

    #[test]
    fn upstream_failure_relays_detail() {
        let mut panel = ResultsPanel::new();
        let mut manager = Manager::<()>::new();
        let t0 = Instant::now();
        let failure = LookupError::Upstream {
            status: 401,
            detail: Some("Invalid API key".into()),
        };
        let outcome = Renderer::default().render_failure(&failure, &mut panel, &mut manager, t0);
        let RenderOutcome::Failed { alert, toast } = outcome else {
            panic!("expected failure outcome");
        };

        let alert = manager.get(alert.id()).unwrap();
        assert_eq!(alert.kind(), NotificationKind::Alert);
        assert_eq!(alert.severity(), Severity::Error);
        assert_eq!(alert.message(), Some(&Label::text("Invalid API key")));
        assert_eq!(manager.inline(panel.container()).count(), 1);

        let toast = manager.get(toast.id()).unwrap();
        assert_eq!(toast.message(), Some(&Label::text("Invalid API key")));
        assert_eq!(toast.auto_expire_after(), Some(Duration::from_millis(8000)));
    }

    #[test]
    fn upstream_failure_without_detail_uses_generic_text() {
        let mut panel = ResultsPanel::new();
        let mut manager = Manager::<()>::new();
        let failure = LookupError::Upstream {
            status: 502,
            detail: None,
        };
        let RenderOutcome::Failed { alert, .. } =
            Renderer::default().render_failure(&failure, &mut panel, &mut manager, Instant::now())
        else {
            panic!("expected failure outcome");
        };
        assert_eq!(
            manager.get(alert.id()).unwrap().message(),
            Some(&Label::key("error-lookup-upstream"))
        );
    }

    #[test]
    fn unexpected_failure_uses_default_toast_duration() {
        let mut panel = ResultsPanel::new();
        let mut manager = Manager::<()>::new();
        let failure = LookupError::Network("connection refused".into());
        let RenderOutcome::Failed { toast, .. } =
            Renderer::default().render_failure(&failure, &mut panel, &mut manager, Instant::now())
        else {
            panic!("expected failure outcome");
        };
        let toast = manager.get(toast.id()).unwrap();
        assert_eq!(toast.auto_expire_after(), Some(Duration::from_millis(5000)));
        assert_eq!(toast.message(), Some(&Label::key("toast-request-failed")));
    }

    #[test]
    fn failure_clears_previous_content_and_alerts() {
        let mut panel = ResultsPanel::new();
        let mut manager = Manager::<()>::new();
        let t0 = Instant::now();
        let renderer = Renderer::default();
        let failure = LookupError::Decode("eof".into());

        renderer.render(Some(&LookupResult::default()), "1.2.3.4", &mut panel, &mut manager, t0);
        let RenderOutcome::Failed { alert: first, .. } =
            renderer.render_failure(&failure, &mut panel, &mut manager, t0)
        else {
            panic!("expected failure outcome");
        };
        renderer.render_failure(&failure, &mut panel, &mut manager, t0);

        assert!(panel.fragments().is_empty());
        assert_eq!(manager.inline(panel.container()).count(), 1);
        assert_eq!(manager.state(first), NotificationState::Removed);
    }
}
