// SPDX-License-Identifier: MPL-2.0
use codecelix_site::notifications::{AlertSpec, ErrorCategory, Manager, SuccessScenario};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use std::time::{Duration, Instant};

fn notification_churn_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_churn");

    group.bench_function("show_then_expire_100", |b| {
        b.iter(|| {
            let mut manager = Manager::new();
            let start = Instant::now();
            for i in 0..100u64 {
                manager.show_at(AlertSpec::info().duration_ms(i * 10), start);
            }
            let expired = manager.tick(start + Duration::from_secs(1));
            black_box(expired.len())
        });
    });

    group.bench_function("canned_helpers", |b| {
        b.iter(|| {
            let mut manager = Manager::new();
            for _ in 0..20 {
                manager.form_success(black_box(SuccessScenario::Contact));
                manager.form_error(black_box(ErrorCategory::Network));
            }
            manager.clear_all();
            black_box(manager.len())
        });
    });

    group.finish();
}

criterion_group!(benches, notification_churn_benchmark);
criterion_main!(benches);
