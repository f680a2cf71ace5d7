// SPDX-License-Identifier: MPL-2.0
use criterion::{criterion_group, criterion_main, Criterion};
use ip_inspector::lookup::{LookupResult, Service, Vulnerability};
use ip_inspector::ui::notifications::Manager;
use ip_inspector::ui::results::{Renderer, ResultsPanel};
use std::hint::black_box;
use std::time::Instant;

const LEVELS: [&str; 5] = ["critical", "high", "medium", "low", "unrated"];

/// A host with many vulnerabilities and services, the worst case for sorting
/// and grouping.
fn large_result(vulns: usize, services: usize) -> LookupResult {
    LookupResult {
        queried_address: Some("203.0.113.7".into()),
        organization: Some("Example Hosting".into()),
        city: Some("Lyon".into()),
        country_name: Some("France".into()),
        open_ports: (1..=services as u16).collect(),
        vulnerabilities: (0..vulns)
            .map(|i| Vulnerability {
                id: Some(format!("CVE-2024-{i:05}")),
                severity: Some(LEVELS[i % LEVELS.len()].into()),
                description: Some("Remote code execution in <module>".into()),
                reference_url: Some(format!("https://cve.example/{i}")),
            })
            .collect(),
        services: (0..services)
            .map(|i| Service {
                port: Some(i as u16 + 1),
                transport_protocol: Some("tcp".into()),
                product: (i % 3 != 0).then(|| format!("daemon-{}", i % 7)),
                version: Some("1.0".into()),
                banner: Some("<html><body>It works!</body></html>".into()),
            })
            .collect(),
        ..LookupResult::default()
    }
}

fn render_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_results");
    let renderer = Renderer::default();

    for (name, vulns, services) in [("small", 5, 5), ("large", 500, 1000)] {
        let result = large_result(vulns, services);
        group.bench_function(name, |b| {
            let mut panel = ResultsPanel::new();
            b.iter(|| {
                let mut manager: Manager<()> = Manager::new();
                let outcome = renderer.render(
                    black_box(Some(&result)),
                    "203.0.113.7",
                    &mut panel,
                    &mut manager,
                    Instant::now(),
                );
                black_box(outcome);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, render_benchmark);
criterion_main!(benches);
