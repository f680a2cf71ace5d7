// SPDX-License-Identifier: MPL-2.0
//! Proxy response → renderer → notifications, without a window.

use ip_inspector::lookup::client::parse_response;
use ip_inspector::lookup::VulnSeverity;
use ip_inspector::ui::notifications::{
    Label, Manager, NotificationKind, NotificationState, Severity, ToastPosition,
};
use ip_inspector::ui::results::fragment::ServiceCategory;
use ip_inspector::ui::results::{Fragment, RenderOutcome, Renderer, ResultsPanel};
use std::time::{Duration, Instant};

const FULL_RESPONSE: &str = r#"{
    "ip_str": "203.0.113.7",
    "org": "Example Hosting",
    "os": null,
    "city": "Lyon",
    "country_name": "France",
    "ports": [22, 80, 8081],
    "vulns": {
        "CVE-2023-0001": {"cvss": 5.0, "summary": "Medium issue"},
        "CVE-2023-0002": {"cvss": 9.8, "summary": "Critical issue", "references": ["https://cve.example/2"]},
        "CVE-2023-0003": {"summary": "No score"}
    },
    "data": [
        {"port": 22, "transport": "tcp", "product": "OpenSSH", "version": "9.6"},
        {"port": 8081, "transport": "udp", "banner": "<b>hi</b>"},
        {"port": 80, "product": "nginx"}
    ]
}"#;

#[test]
fn full_response_renders_sorted_sections_and_success_toast() {
    let result = parse_response(200, FULL_RESPONSE)
        .expect("valid response")
        .expect("a record");
    let renderer = Renderer::default();
    let mut panel = ResultsPanel::new();
    let mut manager: Manager<()> = Manager::new();
    let now = Instant::now();

    panel.begin_loading(now);
    let outcome = renderer.render(Some(&result), "203.0.113.7", &mut panel, &mut manager, now);
    assert!(matches!(outcome, RenderOutcome::Rendered { fragments: 3, .. }));
    assert!(!panel.is_loading());

    let fragments: Vec<_> = panel.fragments().iter().map(|p| &p.fragment).collect();
    let Fragment::Summary(summary) = fragments[0] else {
        panic!("summary first");
    };
    assert_eq!(summary.address, "203.0.113.7");
    assert_eq!(summary.location.as_known(), Some("Lyon, France"));
    assert!(!summary.operating_system.is_available());

    let Fragment::Vulnerabilities(vulns) = fragments[1] else {
        panic!("vulnerabilities second");
    };
    let levels: Vec<_> = vulns.items.iter().map(|i| i.level).collect();
    assert_eq!(
        levels,
        vec![VulnSeverity::Critical, VulnSeverity::Medium, VulnSeverity::Unknown]
    );
    assert_eq!(
        vulns.items[0].reference_url.as_deref(),
        Some("https://cve.example/2")
    );

    let Fragment::Services(services) = fragments[2] else {
        panic!("services third");
    };
    assert_eq!(services.total, 3);
    assert_eq!(services.groups[0].category, ServiceCategory::Identified);
    assert_eq!(services.groups[0].items.len(), 2);
    let other = &services.groups[1].items[0];
    assert_eq!(other.name, "udp/8081");
    assert_eq!(other.banner.as_deref(), Some("&lt;b&gt;hi&lt;/b&gt;"));

    let toasts: Vec<_> = manager.toasts(ToastPosition::TopRight).collect();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].severity(), Severity::Success);
}

#[test]
fn null_record_shows_only_the_empty_state() {
    let result = parse_response(200, "null").expect("null is a valid body");
    assert!(result.is_none());

    let mut panel = ResultsPanel::new();
    let mut manager: Manager<()> = Manager::new();
    let outcome = Renderer::default().render(
        result.as_ref(),
        "198.51.100.1",
        &mut panel,
        &mut manager,
        Instant::now(),
    );

    assert_eq!(outcome, RenderOutcome::Empty);
    assert_eq!(panel.fragments().len(), 1);
    assert!(matches!(panel.fragments()[0].fragment, Fragment::EmptyState));
    assert!(manager.is_empty());
}

#[test]
fn not_found_reports_detail_inline_and_as_toast() {
    let failure = parse_response(404, r#"{"detail": "No information available for that IP."}"#)
        .expect_err("404 is an error");

    let mut panel = ResultsPanel::new();
    let mut manager: Manager<()> = Manager::new();
    let outcome = Renderer::default().render_failure(&failure, &mut panel, &mut manager, Instant::now());

    let RenderOutcome::Failed { alert, toast } = outcome else {
        panic!("expected a failure outcome");
    };
    let detail = Label::text("No information available for that IP.");
    let alert_record = manager.get(alert.id()).expect("alert is live");
    assert_eq!(alert_record.severity(), Severity::Error);
    assert_eq!(alert_record.message(), Some(&detail));
    assert_eq!(manager.inline(panel.container()).count(), 1);

    let toast_record = manager.get(toast.id()).expect("toast is live");
    assert_eq!(toast_record.severity(), Severity::Error);
    assert_eq!(toast_record.message(), Some(&detail));
    assert!(panel.fragments().is_empty());
}

#[test]
fn null_ports_still_render_services() {
    let result = parse_response(
        200,
        r#"{"ip_str":"1.2.3.4","ports":[null, 80],"data":[{"port":null,"product":"nginx"}]}"#,
    )
    .expect("valid response")
    .expect("a record");
    let mut panel = ResultsPanel::new();
    let mut manager: Manager<()> = Manager::new();
    let outcome = Renderer::default().render(Some(&result), "1.2.3.4", &mut panel, &mut manager, Instant::now());

    assert!(matches!(outcome, RenderOutcome::Rendered { fragments: 2, .. }));
    let Fragment::Services(services) = &panel.fragments()[1].fragment else {
        panic!("services second");
    };
    assert_eq!(services.groups[0].items[0].port, None);
    assert_eq!(services.groups[0].items[0].name, "nginx");
}

#[test]
fn upstream_error_relays_detail_and_expires_later() {
    let failure = parse_response(401, r#"{"detail": "Invalid API key"}"#)
        .expect_err("401 is an error");

    let mut panel = ResultsPanel::new();
    let mut manager: Manager<()> = Manager::new();
    let now = Instant::now();
    let outcome = Renderer::default().render_failure(&failure, &mut panel, &mut manager, now);

    let RenderOutcome::Failed { alert, toast } = outcome else {
        panic!("expected a failure outcome");
    };
    let alert_record = manager.get(alert.id()).expect("alert is live");
    assert_eq!(alert_record.kind(), NotificationKind::Alert);
    assert_eq!(alert_record.message(), Some(&Label::text("Invalid API key")));

    let toast_record = manager.get(toast.id()).expect("toast is live");
    assert_eq!(toast_record.auto_expire_after(), Some(Duration::from_secs(8)));

    // Still up after the default 5 s, gone after 8 s plus the exit window.
    manager.tick(now + Duration::from_secs(6));
    assert_eq!(manager.state(toast), NotificationState::Visible);
    manager.tick(now + Duration::from_secs(9));
    assert_eq!(manager.state(toast), NotificationState::Removed);
    assert_eq!(manager.state(alert), NotificationState::Visible);
}

#[test]
fn new_render_replaces_previous_failure() {
    let failure = parse_response(500, "Internal Server Error").expect_err("500 is an error");
    let mut panel = ResultsPanel::new();
    let mut manager: Manager<()> = Manager::new();
    let now = Instant::now();
    let renderer = Renderer::default();

    renderer.render_failure(&failure, &mut panel, &mut manager, now);
    assert_eq!(manager.inline(panel.container()).count(), 1);

    let result = parse_response(200, r#"{"ip_str": "192.0.2.1"}"#)
        .expect("valid response")
        .expect("a record");
    renderer.render(Some(&result), "192.0.2.1", &mut panel, &mut manager, now);

    assert_eq!(manager.inline(panel.container()).count(), 0);
    assert_eq!(panel.fragments().len(), 1);
}
